//! Luminance-based grayscale conversion.

use crate::image::{Image, RGBA_CHANNELS};

/// Replace red, green and blue with the pixel's Rec.601 luma. Alpha is kept.
///
/// The weights sum to exactly 1000, so a pixel that is already gray maps to
/// itself and the filter is idempotent.
pub fn apply_grayscale(image: &mut Image) {
    tracing::debug!("Grayscale: {}x{}", image.width(), image.height());

    for px in image.as_raw_mut().chunks_exact_mut(RGBA_CHANNELS) {
        let gray = luma(px[0], px[1], px[2]);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

/// Integer luminosity: `0.299*R + 0.587*G + 0.114*B`, rounded.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    // Safe: sum <= 255_000, so the quotient fits in u8
    ((sum + 500) / 1000) as u8
}
