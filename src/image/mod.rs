//! The RGBA pixel-buffer container and its codec glue.

mod load;
mod save;

pub use load::load_image;
pub use save::save_image;

use std::path::Path;

use crate::error::{Error, Result};

/// One pixel: red, green, blue, alpha.
pub type Rgba = [u8; 4];

/// Returned by [`Image::get_pixel`] for coordinates outside the image.
pub const SENTINEL: Rgba = [0, 0, 0, 255];

/// Number of channels per pixel.
pub const RGBA_CHANNELS: usize = 4;

/// JPEG quality used by [`Image::save`].
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// An owned RGBA8 image.
///
/// `pixels.len() == width * height * 4` holds at all times. A freshly
/// constructed image is empty (0x0). Cloning deep-copies the buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Create an empty image.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Build an image from a raw RGBA8 buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDimensions`] if the buffer length is not
    /// `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(RGBA_CHANNELS));
        if expected != Some(pixels.len()) {
            return Err(Error::UnsupportedDimensions {
                width,
                height,
                reason: format!("pixel buffer holds {} bytes", pixels.len()),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Load an image from disk, replacing the current contents.
    ///
    /// Returns `false` and leaves `self` untouched if the file is missing,
    /// unsupported or fails to decode.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> bool {
        match self.try_load(path) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("{err}");
                false
            }
        }
    }

    /// Load an image from disk, replacing the current contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded. `self` is
    /// only modified on success.
    pub fn try_load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let (width, height, pixels) = load_image(path)?;

        *self = Self::from_rgba(width, height, pixels)?;

        tracing::debug!("Loaded {}x{} image from {}", width, height, path.display());
        Ok(())
    }

    /// Encode the image to disk. The format is inferred from the extension.
    ///
    /// Returns `false` if the target is not writable or the image is empty.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> bool {
        match self.try_save(path, DEFAULT_JPEG_QUALITY) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("{err}");
                false
            }
        }
    }

    /// Encode the image to disk.
    ///
    /// `quality` (1-100) only applies to JPEG output.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty or encoding/writing fails.
    pub fn try_save<P: AsRef<Path>>(&self, path: P, quality: u8) -> Result<()> {
        if self.is_empty() {
            return Err(Error::UnsupportedDimensions {
                width: self.width,
                height: self.height,
                reason: "cannot save an empty image".to_string(),
            });
        }

        save_image(&self.pixels, self.width, self.height, path, quality)
    }

    /// Image width in pixels, `0` before a successful load.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels, `0` before a successful load.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `true` when the image holds no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The raw RGBA8 buffer, row-major.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Read a pixel, or [`SENTINEL`] if `(x, y)` is out of bounds.
    ///
    /// The sentinel is indistinguishable from a real opaque black pixel; use
    /// [`Image::pixel`] when the difference matters.
    #[must_use]
    pub fn get_pixel(&self, x: i64, y: i64) -> Rgba {
        self.pixel(x, y).unwrap_or(SENTINEL)
    }

    /// Read a pixel, or `None` if `(x, y)` is out of bounds.
    #[must_use]
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        let idx = self.index(x, y)?;
        let mut px = [0u8; RGBA_CHANNELS];
        px.copy_from_slice(&self.pixels[idx..idx + RGBA_CHANNELS]);
        Some(px)
    }

    /// Overwrite a pixel. Out-of-bounds writes are ignored and return `false`.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.pixels[idx..idx + RGBA_CHANNELS].copy_from_slice(&color);
                true
            }
            None => false,
        }
    }

    /// Byte offset of `(x, y)`, if in bounds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        // Safe: both coordinates are non-negative and below u32 dimensions
        Some((y as usize * self.width as usize + x as usize) * RGBA_CHANNELS)
    }
}
