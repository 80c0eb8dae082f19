//! Skill-aware routing of work items to support agents
//!
//! Selection runs over a roster snapshot passed in by the caller. It never
//! touches agent state: once a decision is accepted the caller records it with
//! [`Roster::apply_assignment`](crate::roster::Roster::apply_assignment).

pub mod decision;
pub mod scoring;

pub use decision::RoutingDecision;
pub use scoring::{score_agent, AgentScore, ScoringWeights};

use crate::roster::{Agent, Skill};

/// Router selects the best eligible agent for each request
#[derive(Debug, Clone, Default)]
pub struct Router {
    /// Scoring weights for candidate ranking
    weights: ScoringWeights,
}

/// Winning candidate with its score
#[derive(Debug, Clone, Copy)]
struct Selection<'a> {
    agent: &'a Agent,
    score: AgentScore,
    fallback: bool,
}

impl Router {
    /// Create a new router with the given weights
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Select the best agent for the required skills.
    ///
    /// Returns `None` only when no agent is online with spare capacity.
    pub fn select<'a>(&self, roster: &'a [Agent], required: &[Skill]) -> Option<&'a Agent> {
        self.select_scored(roster, required).map(|s| s.agent)
    }

    /// Select an agent and describe the decision.
    pub fn route(&self, roster: &[Agent], required: &[Skill]) -> RoutingDecision {
        match self.select_scored(roster, required) {
            Some(selection) => {
                let mut matched_skills = Vec::new();
                for skill in required {
                    if selection.agent.has_skill(*skill) && !matched_skills.contains(skill) {
                        matched_skills.push(*skill);
                    }
                }

                tracing::debug!(
                    agent_id = %selection.agent.id,
                    score = selection.score.total,
                    skill_score = selection.score.skill_score,
                    fallback = selection.fallback,
                    "Agent selected"
                );

                RoutingDecision::Assigned {
                    agent_id: selection.agent.id.clone(),
                    score: selection.score,
                    matched_skills,
                    fallback: selection.fallback,
                }
            }
            None => {
                tracing::info!(
                    roster_size = roster.len(),
                    required = ?required,
                    "No eligible agent available"
                );
                RoutingDecision::NoEligibleAgent
            }
        }
    }

    fn select_scored<'a>(&self, roster: &'a [Agent], required: &[Skill]) -> Option<Selection<'a>> {
        let eligible: Vec<&Agent> = roster.iter().filter(|a| a.is_eligible()).collect();
        if eligible.is_empty() {
            return None;
        }

        let matching: Vec<&Agent> = eligible
            .iter()
            .copied()
            .filter(|agent| required.iter().any(|skill| agent.has_skill(*skill)))
            .collect();

        let fallback = matching.is_empty();
        let candidates = if fallback { eligible } else { matching };

        if fallback {
            tracing::debug!(
                required = ?required,
                candidates = candidates.len(),
                "No skill match, scoring all eligible agents"
            );
        }

        self.select_best(&candidates, required)
            .map(|(agent, score)| Selection {
                agent,
                score,
                fallback,
            })
    }

    /// Highest total wins; on equal totals the earlier candidate is kept.
    fn select_best<'a>(
        &self,
        candidates: &[&'a Agent],
        required: &[Skill],
    ) -> Option<(&'a Agent, AgentScore)> {
        let (first, rest) = candidates.split_first()?;
        let mut best = *first;
        let mut best_score = score_agent(best, required, &self.weights);

        for &agent in rest {
            let score = score_agent(agent, required, &self.weights);
            tracing::trace!(agent_id = %agent.id, score = score.total, "Candidate scored");
            if score.total > best_score.total {
                best = agent;
                best_score = score;
            }
        }

        Some((best, best_score))
    }
}

/// Pick the best eligible agent for `required` using the default weights.
///
/// Returns the selected agent's identifier, or `None` when nobody is online
/// with spare capacity.
///
/// # Examples
///
/// ```
/// use switchboard::roster::{Agent, AgentStatus, Skill};
/// use switchboard::routing::select_agent;
///
/// let roster = vec![
///     Agent::new("a", vec![Skill::Technical, Skill::Fiber], 5).with_load(3).with_performance(94.0),
///     Agent::new("b", vec![Skill::Billing], 5).with_load(5).with_status(AgentStatus::Busy),
///     Agent::new("c", vec![Skill::General], 5).with_load(2).with_performance(91.0),
/// ];
///
/// assert_eq!(select_agent(&roster, &[Skill::Technical]), Some("a"));
/// assert_eq!(select_agent(&[], &[Skill::Technical]), None);
/// ```
pub fn select_agent<'a>(roster: &'a [Agent], required: &[Skill]) -> Option<&'a str> {
    Router::default()
        .select(roster, required)
        .map(|agent| agent.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::AgentStatus;

    fn create_agent(id: &str, skills: Vec<Skill>, load: u32, max: u32, perf: f64) -> Agent {
        Agent::new(id, skills, max)
            .with_load(load)
            .with_performance(perf)
    }

    fn reference_roster() -> Vec<Agent> {
        vec![
            create_agent("A", vec![Skill::Technical, Skill::Fiber], 3, 5, 94.0),
            create_agent("B", vec![Skill::Billing, Skill::Sales], 5, 5, 89.0)
                .with_status(AgentStatus::Busy),
            create_agent("C", vec![Skill::Cancellation, Skill::General], 2, 5, 91.0),
        ]
    }

    #[test]
    fn selects_skill_match_over_idle_agent() {
        let roster = reference_roster();
        assert_eq!(select_agent(&roster, &[Skill::Technical]), Some("A"));
    }

    #[test]
    fn falls_back_to_eligible_agent_without_skill_match() {
        let roster = vec![create_agent("A", vec![Skill::Billing], 1, 5, 80.0)];
        assert_eq!(select_agent(&roster, &[Skill::Technical]), Some("A"));

        let decision = Router::default().route(&roster, &[Skill::Technical]);
        match decision {
            RoutingDecision::Assigned {
                fallback,
                matched_skills,
                ..
            } => {
                assert!(fallback);
                assert!(matched_skills.is_empty());
            }
            _ => panic!("Expected Assigned decision"),
        }
    }

    #[test]
    fn fallback_scores_whole_eligible_set() {
        // Nobody has mobile; C has more spare capacity than A
        let roster = reference_roster();
        assert_eq!(select_agent(&roster, &[Skill::Mobile]), Some("C"));
    }

    #[test]
    fn empty_roster_returns_none() {
        assert_eq!(select_agent(&[], &[Skill::Technical]), None);
        assert_eq!(
            Router::default().route(&[], &[Skill::Technical]),
            RoutingDecision::NoEligibleAgent
        );
    }

    #[test]
    fn all_at_capacity_returns_none() {
        let roster = vec![
            create_agent("A", vec![Skill::Technical], 5, 5, 99.0),
            create_agent("B", vec![Skill::Technical], 3, 3, 99.0),
        ];
        assert_eq!(select_agent(&roster, &[Skill::Technical]), None);
    }

    #[test]
    fn ineligible_statuses_are_skipped() {
        let roster = vec![
            create_agent("away", vec![Skill::Technical], 0, 5, 100.0).with_status(AgentStatus::Away),
            create_agent("off", vec![Skill::Technical], 0, 5, 100.0)
                .with_status(AgentStatus::Offline),
            create_agent("busy", vec![Skill::Technical], 0, 5, 100.0)
                .with_status(AgentStatus::Busy),
            create_agent("online", vec![Skill::General], 4, 5, 10.0),
        ];
        assert_eq!(select_agent(&roster, &[Skill::Technical]), Some("online"));
    }

    #[test]
    fn ties_go_to_earliest_in_roster() {
        let roster = vec![
            create_agent("first", vec![Skill::Billing], 1, 5, 80.0),
            create_agent("second", vec![Skill::Billing], 1, 5, 80.0),
        ];
        assert_eq!(select_agent(&roster, &[Skill::Billing]), Some("first"));

        let reversed: Vec<Agent> = roster.into_iter().rev().collect();
        assert_eq!(select_agent(&reversed, &[Skill::Billing]), Some("second"));
    }

    #[test]
    fn more_matched_skills_wins() {
        let roster = vec![
            create_agent("one", vec![Skill::Technical], 0, 5, 100.0),
            create_agent("two", vec![Skill::Technical, Skill::Fiber], 3, 5, 50.0),
        ];
        assert_eq!(
            select_agent(&roster, &[Skill::Technical, Skill::Fiber]),
            Some("two")
        );
    }

    #[test]
    fn empty_request_picks_by_load_and_performance() {
        let roster = vec![
            create_agent("loaded", vec![Skill::Technical], 4, 5, 90.0),
            create_agent("idle", vec![Skill::Billing], 0, 5, 90.0),
        ];
        let decision = Router::default().route(&roster, &[]);
        assert_eq!(decision.agent_id(), Some("idle"));
        assert!(matches!(
            decision,
            RoutingDecision::Assigned { fallback: true, .. }
        ));
    }

    #[test]
    fn route_reports_matched_skills_once_in_request_order() {
        let roster = reference_roster();
        let decision =
            Router::default().route(&roster, &[Skill::Fiber, Skill::Technical, Skill::Fiber]);
        match decision {
            RoutingDecision::Assigned {
                agent_id,
                matched_skills,
                score,
                fallback,
            } => {
                assert_eq!(agent_id, "A");
                assert_eq!(matched_skills, vec![Skill::Fiber, Skill::Technical]);
                assert_eq!(score.skill_score, 3);
                assert!(!fallback);
            }
            _ => panic!("Expected Assigned decision"),
        }
    }

    #[test]
    fn route_score_matches_reference_arithmetic() {
        let roster = vec![create_agent("A", vec![Skill::Technical], 3, 5, 90.0)];
        match Router::default().route(&roster, &[Skill::Technical]) {
            RoutingDecision::Assigned { score, .. } => {
                assert!((score.total - 0.765).abs() < 1e-9);
            }
            _ => panic!("Expected Assigned decision"),
        }
    }

    #[test]
    fn custom_weights_change_ranking() {
        // Performance-only weighting ignores skill overlap among matches
        let router = Router::new(ScoringWeights {
            skill: 0.0,
            load: 0.0,
            performance: 1.0,
        });
        let roster = vec![
            create_agent("broad", vec![Skill::Technical, Skill::Fiber], 0, 5, 60.0),
            create_agent("strong", vec![Skill::Technical], 0, 5, 95.0),
        ];
        let selected = router.select(&roster, &[Skill::Technical, Skill::Fiber]);
        assert_eq!(selected.map(|a| a.id.as_str()), Some("strong"));
    }

    #[test]
    fn routing_does_not_mutate_roster() {
        let roster = reference_roster();
        let before = roster.clone();
        let _ = Router::default().route(&roster, &[Skill::Technical]);
        assert_eq!(roster, before);
    }
}
