//! # `pixelfx`
//!
//! Load an image into an owned RGBA8 buffer, read and write individual
//! pixels, and run glitch-style filters over it in place.
//!
//! Pixel access never fails: out-of-range reads return [`SENTINEL`] (or
//! `None` through [`Image::pixel`]) and out-of-range writes are ignored.
//! Filters never fail either, and do nothing on an empty image.
//!
//! ## Example
//!
//! ```no_run
//! use pixelfx::{filters, Image};
//!
//! let mut img = Image::new();
//! if img.load("input.png") {
//!     filters::apply_wave_distortion(&mut img, 15.0);
//!     filters::apply_grayscale(&mut img);
//!     filters::apply_color_noise(&mut img, 0.1);
//!     img.save("output.png");
//! }
//! ```

pub mod error;
pub mod filters;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use filters::{
    apply_color_noise, apply_color_noise_with_rng, apply_glitch, apply_glitch_with_rng,
    apply_grayscale, apply_wave_distortion, Filter,
};
pub use crate::image::{Image, Rgba, SENTINEL};
pub use pipeline::{Config, Pipeline};
