//! In-place image filters.
//!
//! Every filter takes the sole mutable borrow of an [`Image`] and rewrites
//! its buffer. None of them report errors; on an empty image they do nothing.

mod glitch;
mod grayscale;
mod noise;
mod wave;

pub use glitch::{apply_glitch, apply_glitch_with_rng};
pub use grayscale::apply_grayscale;
pub use noise::{apply_color_noise, apply_color_noise_with_rng};
pub use wave::{apply_wave_distortion, WAVELENGTH};

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::Error;
use crate::image::Image;

/// A single filter step with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    /// Sinusoidal row displacement, amplitude in pixels.
    Wave { amplitude: f32 },
    /// Rec.601 luma grayscale.
    Grayscale,
    /// Random band corruption.
    Glitch,
    /// Additive color noise, intensity typically in `[0, 1]`.
    ColorNoise { intensity: f32 },
}

impl Filter {
    /// Apply this filter, drawing any randomness from `rng`.
    pub fn apply<R: Rng + ?Sized>(&self, image: &mut Image, rng: &mut R) {
        match *self {
            Self::Wave { amplitude } => apply_wave_distortion(image, amplitude),
            Self::Grayscale => apply_grayscale(image),
            Self::Glitch => apply_glitch_with_rng(image, rng),
            Self::ColorNoise { intensity } => apply_color_noise_with_rng(image, intensity, rng),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wave { amplitude } => write!(f, "wave:{amplitude}"),
            Self::Grayscale => f.write_str("grayscale"),
            Self::Glitch => f.write_str("glitch"),
            Self::ColorNoise { intensity } => write!(f, "noise:{intensity}"),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    /// Parse `wave:AMPLITUDE`, `grayscale`, `glitch` or `noise:INTENSITY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s.trim(), None),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("wave", Some(arg)) => Ok(Self::Wave {
                amplitude: parse_param("amplitude", arg)?,
            }),
            ("grayscale" | "greyscale" | "gray", None) => Ok(Self::Grayscale),
            ("glitch", None) => Ok(Self::Glitch),
            ("noise" | "color-noise", Some(arg)) => Ok(Self::ColorNoise {
                intensity: parse_param("intensity", arg)?,
            }),
            ("wave" | "noise" | "color-noise", None) => Err(Error::InvalidParameter {
                name: name.to_string(),
                reason: format!("expected `{name}:<value>`"),
            }),
            ("grayscale" | "greyscale" | "gray" | "glitch", Some(_)) => {
                Err(Error::InvalidParameter {
                    name: name.to_string(),
                    reason: "takes no parameter".to_string(),
                })
            }
            _ => Err(Error::InvalidParameter {
                name: "filter".to_string(),
                reason: format!("unknown filter `{s}`"),
            }),
        }
    }
}

fn parse_param(name: &str, value: &str) -> Result<f32, Error> {
    value.parse().map_err(|_| Error::InvalidParameter {
        name: name.to_string(),
        reason: format!("`{value}` is not a number"),
    })
}
