//! Randomized band corruption.

use rand::Rng;

use crate::image::{Image, RGBA_CHANNELS};

/// What happens to a glitched band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Artifact {
    /// Rotate each row horizontally by a non-zero offset.
    Shift,
    /// Exchange red and blue.
    ChannelSwap,
    /// Overwrite the band with rows copied from elsewhere in the image.
    Smear,
    /// Invert red, green and blue.
    Invert,
}

/// Corrupt random horizontal bands of the image, using the thread-local RNG.
///
/// See [`apply_glitch_with_rng`].
pub fn apply_glitch(image: &mut Image) {
    apply_glitch_with_rng(image, &mut rand::rng());
}

/// Corrupt random horizontal bands of the image.
///
/// Between 1 and `height / 8` bands are picked, each 1 to `height / 10` rows
/// tall, and each gets one [`Artifact`]. The first band is always shifted when
/// the image is at least two pixels wide. If the bands leave the buffer
/// unchanged (row-uniform or flat content), a single row is smeared, then
/// channel-swapped, then inverted until something differs, so every
/// non-empty image comes out changed.
pub fn apply_glitch_with_rng<R: Rng + ?Sized>(image: &mut Image, rng: &mut R) {
    if image.is_empty() {
        return;
    }

    let width = image.width() as usize;
    let height = image.height() as usize;
    let row_bytes = width * RGBA_CHANNELS;

    let band_count = rng.random_range(1..=(height / 8).max(1));
    let max_band_rows = (height / 10).max(1);

    tracing::debug!(
        "Glitch: {band_count} band(s), {}x{}",
        image.width(),
        image.height()
    );

    let pixels = image.as_raw_mut();
    let original = pixels.to_vec();
    let grid = Grid {
        width,
        height,
        row_bytes,
    };

    for i in 0..band_count {
        let rows = rng.random_range(1..=max_band_rows);
        let start = rng.random_range(0..=height - rows);

        let artifact = if i == 0 && width > 1 {
            Artifact::Shift
        } else {
            random_artifact(rng)
        };

        corrupt(pixels, &grid, start, rows, artifact, rng);
    }

    // Row-uniform or flat content can survive every band untouched.
    if *pixels == original[..] {
        let start = rng.random_range(0..height);
        for artifact in [Artifact::Smear, Artifact::ChannelSwap, Artifact::Invert] {
            corrupt(pixels, &grid, start, 1, artifact, rng);
            if *pixels != original[..] {
                tracing::debug!("Glitch fell back to {artifact:?} on row {start}");
                break;
            }
        }
    }
}

/// Buffer geometry shared by every band.
struct Grid {
    width: usize,
    height: usize,
    row_bytes: usize,
}

/// Apply one artifact to `rows` rows starting at `start`.
fn corrupt<R: Rng + ?Sized>(
    pixels: &mut [u8],
    grid: &Grid,
    start: usize,
    rows: usize,
    artifact: Artifact,
    rng: &mut R,
) {
    let band = start * grid.row_bytes..(start + rows) * grid.row_bytes;

    match artifact {
        Artifact::Shift => {
            if grid.width < 2 {
                return;
            }
            let offset = rng.random_range(1..grid.width) * RGBA_CHANNELS;
            for row in pixels[band].chunks_exact_mut(grid.row_bytes) {
                row.rotate_left(offset);
            }
        }
        Artifact::ChannelSwap => {
            for px in pixels[band].chunks_exact_mut(RGBA_CHANNELS) {
                px.swap(0, 2);
            }
        }
        Artifact::Smear => {
            if grid.height <= rows {
                return;
            }
            // Never copy a band onto itself.
            let mut from = rng.random_range(0..grid.height - rows);
            if from >= start {
                from += 1;
            }
            let from = from * grid.row_bytes;
            pixels.copy_within(from..from + rows * grid.row_bytes, band.start);
        }
        Artifact::Invert => {
            for px in pixels[band].chunks_exact_mut(RGBA_CHANNELS) {
                for c in &mut px[..3] {
                    *c = !*c;
                }
            }
        }
    }
}

fn random_artifact<R: Rng + ?Sized>(rng: &mut R) -> Artifact {
    match rng.random_range(0..4) {
        0 => Artifact::Shift,
        1 => Artifact::ChannelSwap,
        2 => Artifact::Smear,
        _ => Artifact::Invert,
    }
}
