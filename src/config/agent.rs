//! Agent roster configuration

use crate::roster::{Agent, AgentStatus, Skill};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    pub id: String,
    /// Display name; defaults to the id
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub status: AgentStatus,
    #[serde(default)]
    pub current_load: u32,
    #[serde(default = "default_max_load")]
    pub max_load: u32,
    #[serde(default)]
    pub performance_score: f64,
    #[serde(default)]
    pub teams: Vec<String>,
}

fn default_max_load() -> u32 {
    5
}

impl From<&AgentConfig> for Agent {
    fn from(config: &AgentConfig) -> Self {
        Agent {
            id: config.id.clone(),
            name: config.name.clone().unwrap_or_else(|| config.id.clone()),
            email: config.email.clone(),
            skills: config.skills.clone(),
            status: config.status,
            current_load: config.current_load,
            max_load: config.max_load,
            performance_score: config.performance_score,
            teams: config.teams.clone(),
            last_active_at: Utc::now(),
        }
    }
}
