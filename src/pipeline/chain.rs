//! Load → filter chain → save.

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{Error, Result};
use crate::filters::Filter;
use crate::image::{Image, DEFAULT_JPEG_QUALITY};

/// Configuration for a filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Filters applied in order.
    pub filters: Vec<Filter>,

    /// Output JPEG quality (1-100).
    pub output_quality: u8,

    /// Random seed for reproducibility. None for random.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            output_quality: DEFAULT_JPEG_QUALITY,
            seed: None,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// Negative wave amplitudes are accepted and mirror the wave.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        for filter in &self.filters {
            match *filter {
                Filter::Wave { amplitude } if !amplitude.is_finite() => {
                    return Err(Error::InvalidParameter {
                        name: "amplitude".to_string(),
                        reason: "must be finite".to_string(),
                    });
                }
                Filter::ColorNoise { intensity } if !intensity.is_finite() || intensity < 0.0 => {
                    return Err(Error::InvalidParameter {
                        name: "intensity".to_string(),
                        reason: "must be a finite value >= 0.0".to_string(),
                    });
                }
                _ => {}
            }
        }

        if !(1..=100).contains(&self.output_quality) {
            return Err(Error::InvalidParameter {
                name: "output_quality".to_string(),
                reason: "must be between 1 and 100".to_string(),
            });
        }

        Ok(())
    }
}

/// Applies a configured filter chain to images.
pub struct Pipeline {
    config: Config,
    rng: StdRng,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::info!("Initializing pipeline with config: {config:?}");

        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Ok(Self { config, rng })
    }

    /// The validated configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Run every configured filter over `image`, in order.
    pub fn apply(&mut self, image: &mut Image) {
        for filter in &self.config.filters {
            tracing::info!("Applying {filter}...");
            filter.apply(image, &mut self.rng);
        }
    }

    /// Load `input_path`, run the filter chain, and save to `output_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing image: {}", input_path.display());

        let mut image = Image::new();
        image.try_load(input_path)?;

        self.apply(&mut image);

        tracing::info!("Saving output to: {}", output_path.display());
        image.try_save(output_path, self.config.output_quality)?;

        tracing::info!("Processing complete");
        Ok(())
    }
}
