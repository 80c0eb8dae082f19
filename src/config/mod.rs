//! Configuration module for Switchboard
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`SWITCHBOARD_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use switchboard::config::SwitchboardConfig;
//!
//! // Load defaults
//! let config = SwitchboardConfig::default();
//! assert!(config.agents.is_empty());
//!
//! // Parse from TOML
//! let toml = r#"
//! [[agents]]
//! id = "agent-1"
//! skills = ["technical"]
//! "#;
//! let config: SwitchboardConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.agents.len(), 1);
//! ```

pub mod agent;
pub mod error;
pub mod logging;
pub mod routing;

pub use agent::AgentConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use routing::{RoutingConfig, RoutingWeights};

use crate::roster::{Agent, Roster};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Unified configuration for Switchboard.
///
/// Aggregates routing weights, the agent roster, and logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SwitchboardConfig {
    /// Agent selection settings
    pub routing: RoutingConfig,
    /// Agent roster, in routing order
    pub agents: Vec<AgentConfig>,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl SwitchboardConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports SWITCHBOARD_* environment variables for logging.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var("SWITCHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("SWITCHBOARD_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.routing.validate()?;

        let mut seen = HashSet::new();
        for (i, agent) in self.agents.iter().enumerate() {
            if agent.id.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("agents[{}].id", i),
                    message: "id cannot be empty".to_string(),
                });
            }
            if !seen.insert(agent.id.as_str()) {
                return Err(ConfigError::Validation {
                    field: format!("agents[{}].id", i),
                    message: format!("duplicate agent id '{}'", agent.id),
                });
            }
            if agent.max_load == 0 {
                return Err(ConfigError::Validation {
                    field: format!("agents[{}].max_load", i),
                    message: "max_load must be greater than zero".to_string(),
                });
            }
            if agent.current_load > agent.max_load {
                return Err(ConfigError::Validation {
                    field: format!("agents[{}].current_load", i),
                    message: format!(
                        "current_load {} exceeds max_load {}",
                        agent.current_load, agent.max_load
                    ),
                });
            }
            if !(0.0..=100.0).contains(&agent.performance_score) {
                return Err(ConfigError::Validation {
                    field: format!("agents[{}].performance_score", i),
                    message: "performance_score must be between 0 and 100".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Build the roster snapshot, preserving file order
    pub fn roster(&self) -> Roster {
        Roster::new(self.agents.iter().map(Agent::from).collect())
    }
}
