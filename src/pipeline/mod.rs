//! Configurable filter pipeline.

mod chain;

pub use chain::{Config, Pipeline};
