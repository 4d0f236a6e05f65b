//! Runtime configuration for a galaxy instance.
//!
//! Defaults mirror the tuning constants. Hosts may override a subset (the web
//! frontend reads canvas data attributes) and must call [`GalaxyConfig::validate`]
//! before building a [`crate::Galaxy`].

use crate::constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("star count must be between 1 and {max}, got {got}")]
    StarCount { got: usize, max: usize },
    #[error("pointer sensitivity must be finite and positive, got {0}")]
    Sensitivity(f64),
    #[error("focal length must be finite and positive, got {0}")]
    FocalLength(f64),
    #[error("trail alpha must be in (0, 1], got {0}")]
    TrailAlpha(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyConfig {
    pub star_count: usize,
    /// Fixed seed for a reproducible field; `None` draws from entropy.
    pub seed: Option<u64>,
    pub sensitivity: f64,
    pub focal_length: f64,
    pub trail_alpha: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            sensitivity: POINTER_SENSITIVITY,
            focal_length: FOCAL_LENGTH,
            trail_alpha: TRAIL_ALPHA,
        }
    }
}

impl GalaxyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 || self.star_count > MAX_STAR_COUNT {
            return Err(ConfigError::StarCount {
                got: self.star_count,
                max: MAX_STAR_COUNT,
            });
        }
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(ConfigError::FocalLength(self.focal_length));
        }
        if !(self.trail_alpha > 0.0 && self.trail_alpha <= 1.0) {
            return Err(ConfigError::TrailAlpha(self.trail_alpha));
        }
        Ok(())
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
