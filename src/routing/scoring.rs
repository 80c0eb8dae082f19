//! Scoring function for agent selection

use crate::roster::{Agent, Skill};
use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights for scoring agent candidates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight applied to the raw matched-skill count
    pub skill: f64,

    /// Weight applied to spare capacity (0-1)
    pub load: f64,

    /// Weight applied to normalised performance (0-1)
    pub performance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.40,
            load: 0.35,
            performance: 0.25,
        }
    }
}

impl ScoringWeights {
    /// Validate that weights are non-negative and sum to 1.0
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("skill", self.skill),
            ("load", self.load),
            ("performance", self.performance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "Scoring weight '{}' must be a non-negative number, got {}",
                    name, value
                ));
            }
        }

        let sum = self.skill + self.load + self.performance;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            Err(format!("Scoring weights must sum to 1.0, got {}", sum))
        } else {
            Ok(())
        }
    }
}

/// Score breakdown for a single candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentScore {
    /// Number of required skills the agent has. Not normalised, so skill
    /// coverage dominates the ranking and the other terms break ties.
    pub skill_score: u32,

    /// `1 - current_load / max_load`
    pub load_score: f64,

    /// `performance_score / 100`
    pub performance_score: f64,

    /// Weighted sum of the three terms
    pub total: f64,
}

/// Score an agent against the required skills.
///
/// Each entry in `required` the agent has counts once, so repeated tags in a
/// request count repeatedly.
pub fn score_agent(agent: &Agent, required: &[Skill], weights: &ScoringWeights) -> AgentScore {
    let skill_score = required
        .iter()
        .filter(|skill| agent.has_skill(**skill))
        .count() as u32;

    let load_score = if agent.max_load == 0 {
        0.0
    } else {
        1.0 - f64::from(agent.current_load) / f64::from(agent.max_load)
    };

    let performance_score = agent.performance_score / 100.0;

    let total = weights.skill * f64::from(skill_score)
        + weights.load * load_score
        + weights.performance * performance_score;

    AgentScore {
        skill_score,
        load_score,
        performance_score,
        total,
    }
}
