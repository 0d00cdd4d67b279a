//! Image saving utilities.

use std::path::Path;

use image::{DynamicImage, ExtendedColorType, RgbaImage};

use crate::error::{Error, Result};

/// Save a raw RGBA8 buffer as an image file.
///
/// The format is inferred from the extension. JPEG has no alpha channel, so
/// alpha is dropped and `quality` (1-100) is applied; other formats store the
/// buffer as RGBA8 and ignore `quality`.
///
/// # Errors
///
/// Returns an error if the buffer does not match the dimensions, the target
/// cannot be created, or encoding fails.
pub fn save_image<P: AsRef<Path>>(
    pixels: &[u8],
    width: u32,
    height: u32,
    path: P,
    quality: u8,
) -> Result<()> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase();

    match extension.as_str() {
        "jpg" | "jpeg" => {
            let rgb = to_rgb(pixels, width, height)?;
            // Encode in memory so a failed encode leaves no truncated file.
            let mut encoded = Vec::new();
            let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut encoded, quality);
            rgb.write_with_encoder(encoder)
                .map_err(|source| Error::ImageSave {
                    path: path.to_path_buf(),
                    source,
                })?;
            std::fs::write(path, encoded)?;
        }
        _ => {
            image::save_buffer(path, pixels, width, height, ExtendedColorType::Rgba8).map_err(
                |source| Error::ImageSave {
                    path: path.to_path_buf(),
                    source,
                },
            )?;
        }
    }

    tracing::debug!("Saved {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Drop the alpha channel for encoders that cannot store it.
fn to_rgb(pixels: &[u8], width: u32, height: u32) -> Result<DynamicImage> {
    let rgba = RgbaImage::from_raw(width, height, pixels.to_vec()).ok_or_else(|| {
        Error::UnsupportedDimensions {
            width,
            height,
            reason: format!("pixel buffer holds {} bytes", pixels.len()),
        }
    })?;

    Ok(DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()))
}
