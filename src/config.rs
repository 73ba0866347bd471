//! Mutation configuration.
//!
//! # Usage
//!
//! ```
//! use u_nrp::config::MutationConfig;
//!
//! let config = MutationConfig::from_json_str(r#"{"mutation_probability": 0.25, "seed": 7}"#)
//!     .unwrap();
//! assert_eq!(config.mutation_probability, 0.25);
//! assert_eq!(config.seed, Some(7));
//! ```

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::error::{NrpError, Result};

/// Parameters of the planning mutation operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Per-slot mutation probability. Values above 1.0 behave like 1.0.
    pub mutation_probability: f64,
    /// Seed for a reproducible generator. `None` = seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            mutation_probability: 0.1,
            seed: None,
        }
    }
}

impl MutationConfig {
    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects negative and NaN probabilities.
    pub fn validate(&self) -> Result<()> {
        if self.mutation_probability.is_nan() {
            return Err(NrpError::NanProbability);
        }
        if self.mutation_probability < 0.0 {
            return Err(NrpError::NegativeProbability(self.mutation_probability));
        }
        Ok(())
    }

    /// Builds a generator for one worker: seeded if a seed is set.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}
