//! Sinusoidal horizontal row displacement.

use std::f32::consts::TAU;

use crate::image::{Image, RGBA_CHANNELS, SENTINEL};

/// Rows per full wave period.
pub const WAVELENGTH: f32 = 32.0;

/// Shift each row horizontally by `amplitude * cos(2π·y / WAVELENGTH)` pixels.
///
/// Output pixel `(x, y)` takes the source pixel `(x + shift, y)`; sources
/// outside the image read as [`SENTINEL`]. Row 0 is always displaced by the
/// full amplitude. An amplitude of `0` (or a non-finite one) leaves the image
/// untouched.
pub fn apply_wave_distortion(image: &mut Image, amplitude: f32) {
    if amplitude == 0.0 || !amplitude.is_finite() || image.is_empty() {
        return;
    }

    let width = image.width() as usize;
    tracing::debug!(
        "Wave distortion: amplitude={amplitude}, {}x{}",
        image.width(),
        image.height()
    );

    let row_bytes = width * RGBA_CHANNELS;
    let mut source = vec![0u8; row_bytes];

    for (y, row) in image.as_raw_mut().chunks_exact_mut(row_bytes).enumerate() {
        let shift = row_shift(amplitude, y);
        if shift == 0 {
            continue;
        }

        source.copy_from_slice(row);
        for (x, dst) in row.chunks_exact_mut(RGBA_CHANNELS).enumerate() {
            let px: &[u8] = match source_column(x, shift, width) {
                Some(sx) => &source[sx * RGBA_CHANNELS..(sx + 1) * RGBA_CHANNELS],
                None => &SENTINEL,
            };
            dst.copy_from_slice(px);
        }
    }
}

/// `x + shift`, if it lands inside `[0, width)`.
fn source_column(x: usize, shift: i64, width: usize) -> Option<usize> {
    let sx = i64::try_from(x).ok()?.checked_add(shift)?;
    usize::try_from(sx).ok().filter(|&sx| sx < width)
}

/// Whole-pixel displacement for row `y`.
///
/// The magnitude is rounded up so a non-zero wave always moves something.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn row_shift(amplitude: f32, y: usize) -> i64 {
    let phase = (y as f32 / WAVELENGTH).fract() * TAU;
    let offset = amplitude * phase.cos();
    // Relative cutoff: cos() at quarter periods is only approximately zero.
    if offset.abs() < amplitude.abs() * 1e-4 {
        return 0;
    }
    // Safe: |offset| <= |amplitude|, and saturating casts cap huge amplitudes
    (offset.signum() * offset.abs().ceil()) as i64
}
