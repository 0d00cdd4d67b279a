//! Additive per-channel color noise.

use rand::Rng;

use crate::image::{Image, RGBA_CHANNELS};

/// Add random noise to every color channel, using the thread-local RNG.
///
/// See [`apply_color_noise_with_rng`].
pub fn apply_color_noise(image: &mut Image, intensity: f32) {
    apply_color_noise_with_rng(image, intensity, &mut rand::rng());
}

/// Add random noise to the red, green and blue channel of every pixel.
///
/// Each channel moves by a magnitude drawn from `[1, intensity * 255]` (at
/// least 1) with a random sign, then is clamped to `[0, 255]`; a channel that
/// would clamp back to its own value moves the other way instead. Alpha is left
/// alone. An intensity of `0`, a negative one or a non-finite one leaves the
/// image untouched without drawing from `rng`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub fn apply_color_noise_with_rng<R: Rng + ?Sized>(image: &mut Image, intensity: f32, rng: &mut R) {
    if intensity <= 0.0 || !intensity.is_finite() || image.is_empty() {
        return;
    }

    let spread = (intensity * 255.0).clamp(1.0, 255.0);
    tracing::debug!(
        "Color noise: intensity={intensity}, spread={spread}, {}x{}",
        image.width(),
        image.height()
    );

    for px in image.as_raw_mut().chunks_exact_mut(RGBA_CHANNELS) {
        for channel in &mut px[..3] {
            let magnitude = rng.random_range(1.0..=spread);
            let delta = if rng.random_bool(0.5) {
                magnitude
            } else {
                -magnitude
            };
            let value = f32::from(*channel);
            let mut noisy = (value + delta).round().clamp(0.0, 255.0);
            // A saturated channel pushed outward would clamp back to itself.
            if noisy == value {
                noisy = (value - delta).round().clamp(0.0, 255.0);
            }
            // Safe: clamped to [0, 255] before casting
            *channel = noisy as u8;
        }
    }
}
