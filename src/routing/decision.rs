//! Routing decision returned to callers

use crate::roster::Skill;
use crate::routing::scoring::AgentScore;
use serde::Serialize;

/// Outcome of routing one work item.
///
/// Decisions are values, not records: persisting them (for example as an
/// audit entry) is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// An eligible agent was selected
    Assigned {
        agent_id: String,
        score: AgentScore,
        /// Required skills the agent covers, in request order
        matched_skills: Vec<Skill>,
        /// True when no eligible agent matched any required skill and the
        /// whole eligible set was scored instead
        fallback: bool,
    },

    /// Nobody is online with spare capacity; the caller should queue
    NoEligibleAgent,
}

impl RoutingDecision {
    /// Identifier of the selected agent, if any.
    pub fn agent_id(&self) -> Option<&str> {
        match self {
            RoutingDecision::Assigned { agent_id, .. } => Some(agent_id),
            RoutingDecision::NoEligibleAgent => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, RoutingDecision::Assigned { .. })
    }

    /// Human-readable explanation for dashboards and logs.
    pub fn reason(&self) -> String {
        match self {
            RoutingDecision::Assigned {
                agent_id,
                score,
                matched_skills,
                fallback,
            } => {
                if *fallback {
                    format!(
                        "No skill match; assigned {} as best available agent (score {:.3})",
                        agent_id, score.total
                    )
                } else {
                    let skills: Vec<&str> = matched_skills.iter().map(Skill::as_str).collect();
                    format!(
                        "Assigned {} on skill match [{}] (score {:.3})",
                        agent_id,
                        skills.join(", "),
                        score.total
                    )
                }
            }
            RoutingDecision::NoEligibleAgent => {
                "No eligible agent online with spare capacity; request should be queued"
                    .to_string()
            }
        }
    }
}
