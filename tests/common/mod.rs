//! Shared test utilities for Switchboard integration tests.

#![allow(dead_code)]

use switchboard::roster::{Agent, AgentStatus, Roster, Skill};

/// The example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../switchboard.example.toml");

/// Build an agent with the fields routing cares about.
pub fn agent(
    id: &str,
    skills: &[Skill],
    status: AgentStatus,
    load: u32,
    max_load: u32,
    performance: f64,
) -> Agent {
    Agent::new(id, skills.to_vec(), max_load)
        .with_status(status)
        .with_load(load)
        .with_performance(performance)
}

/// Three-agent desk: a technician with spare capacity, a saturated billing
/// agent and a general agent.
pub fn desk_roster() -> Roster {
    Roster::new(vec![
        agent(
            "A",
            &[Skill::Technical, Skill::Fiber],
            AgentStatus::Online,
            3,
            5,
            94.0,
        ),
        agent(
            "B",
            &[Skill::Billing, Skill::Sales],
            AgentStatus::Busy,
            5,
            5,
            89.0,
        ),
        agent(
            "C",
            &[Skill::Cancellation, Skill::General],
            AgentStatus::Online,
            2,
            5,
            91.0,
        ),
    ])
}
