//! Routing configuration

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::routing::{Router, ScoringWeights};

/// Routing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    pub weights: RoutingWeights,
}

/// Routing weights for agent selection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingWeights {
    pub skill: f64,
    pub load: f64,
    pub performance: f64,
}

impl Default for RoutingWeights {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            skill: weights.skill,
            load: weights.load,
            performance: weights.performance,
        }
    }
}

impl From<RoutingWeights> for ScoringWeights {
    fn from(weights: RoutingWeights) -> Self {
        ScoringWeights {
            skill: weights.skill,
            load: weights.load,
            performance: weights.performance,
        }
    }
}

impl RoutingConfig {
    /// Check the configured weights
    pub fn validate(&self) -> Result<(), ConfigError> {
        ScoringWeights::from(self.weights.clone())
            .validate()
            .map_err(|message| ConfigError::Validation {
                field: "routing.weights".to_string(),
                message,
            })
    }

    /// Build a router from this configuration
    pub fn router(&self) -> Router {
        Router::new(self.weights.clone().into())
    }
}
