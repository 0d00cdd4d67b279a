//! Image loading utilities.

use std::path::Path;

use image::DynamicImage;

use crate::error::{Error, Result};

/// Decode an image file into a raw RGBA8 buffer.
///
/// Any format and color type the codec understands is accepted; the result
/// is always normalized to 8-bit RGBA, row-major.
///
/// Returns `(width, height, pixels)`.
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<(u32, u32, Vec<u8>)> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image_to_rgba(img))
}

/// Convert a `DynamicImage` into `(width, height, rgba8)`.
fn image_to_rgba(img: DynamicImage) -> (u32, u32, Vec<u8>) {
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    (width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_gets_opaque_alpha() {
        let mut img = image::RgbImage::new(2, 1);
        img.put_pixel(1, 0, image::Rgb([10, 20, 30]));

        let (width, height, pixels) = image_to_rgba(DynamicImage::ImageRgb8(img));

        assert_eq!((width, height), (2, 1));
        assert_eq!(pixels, vec![0, 0, 0, 255, 10, 20, 30, 255]);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = load_image("nonexistent.png").unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
    }
}
