//! Agent roster module.
//!
//! Holds an ordered, immutable snapshot of support agents. Routing reads the
//! snapshot; state changes after a routing decision go through explicit
//! commands that return a new snapshot.

mod agent;
mod error;

pub use agent::*;
pub use error::*;

use chrono::Utc;
use std::collections::HashSet;

/// An ordered snapshot of support agents.
///
/// Order is significant: it is the iteration order the router uses to break
/// score ties.
///
/// # Examples
///
/// ```
/// use switchboard::roster::{Agent, Roster, Skill};
///
/// let mut roster = Roster::default();
/// roster.add_agent(Agent::new("agent-1", vec![Skill::Billing], 5)).unwrap();
///
/// let next = roster.apply_assignment("agent-1").unwrap();
/// assert_eq!(next.get_agent("agent-1").unwrap().current_load, 1);
/// assert_eq!(roster.get_agent("agent-1").unwrap().current_load, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    agents: Vec<Agent>,
}

impl Roster {
    /// Wrap a list of agents without checking identifiers.
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Build a roster, rejecting duplicate agent identifiers.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicateAgent` for the first repeated identifier.
    pub fn try_from_agents(agents: Vec<Agent>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for agent in &agents {
            if !seen.insert(agent.id.as_str()) {
                return Err(RosterError::DuplicateAgent(agent.id.clone()));
            }
        }
        Ok(Self { agents })
    }

    /// Append an agent to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicateAgent` if the identifier is already present.
    pub fn add_agent(&mut self, agent: Agent) -> Result<(), RosterError> {
        if self.get_agent(&agent.id).is_some() {
            return Err(RosterError::DuplicateAgent(agent.id));
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Remove an agent, preserving the order of the rest.
    pub fn remove_agent(&mut self, id: &str) -> Result<Agent, RosterError> {
        let index = self.position(id)?;
        Ok(self.agents.remove(index))
    }

    pub fn get_agent(&self, id: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    /// All agents in roster order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents that are signed in, whatever their load.
    pub fn online_agents(&self) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.is_online()).collect()
    }

    /// Agents eligible for a new assignment: online and under max load.
    pub fn available_agents(&self) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.is_eligible()).collect()
    }

    pub fn agents_by_skill(&self, skill: Skill) -> Vec<&Agent> {
        self.agents.iter().filter(|a| a.has_skill(skill)).collect()
    }

    /// Record that `id` accepted a new work item.
    ///
    /// Increments the agent's load. An agent that reaches its maximum load is
    /// marked busy.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::AgentNotFound` for an unknown identifier and
    /// `RosterError::AtCapacity` when the agent has no room left.
    pub fn apply_assignment(&self, id: &str) -> Result<Roster, RosterError> {
        self.update(id, |agent| {
            if !agent.has_capacity() {
                return Err(RosterError::AtCapacity {
                    id: agent.id.clone(),
                    max_load: agent.max_load,
                });
            }
            agent.current_load += 1;
            if !agent.has_capacity() {
                agent.status = AgentStatus::Busy;
            }
            tracing::debug!(
                agent_id = %agent.id,
                current_load = agent.current_load,
                max_load = agent.max_load,
                "Assignment applied"
            );
            Ok(())
        })
    }

    /// Record that `id` finished a work item.
    ///
    /// Load saturates at zero. A busy agent that regains capacity goes back
    /// online.
    pub fn release_assignment(&self, id: &str) -> Result<Roster, RosterError> {
        self.update(id, |agent| {
            agent.current_load = agent.current_load.saturating_sub(1);
            if agent.status == AgentStatus::Busy && agent.has_capacity() {
                agent.status = AgentStatus::Online;
            }
            Ok(())
        })
    }

    /// Change an agent's availability and stamp its last-active time.
    pub fn with_status(&self, id: &str, status: AgentStatus) -> Result<Roster, RosterError> {
        self.update(id, |agent| {
            agent.status = status;
            agent.last_active_at = Utc::now();
            Ok(())
        })
    }

    /// Overwrite an agent's load, clamped to its maximum.
    ///
    /// A requested load at or above the maximum marks the agent busy.
    pub fn with_load(&self, id: &str, load: u32) -> Result<Roster, RosterError> {
        self.update(id, |agent| {
            agent.current_load = load.min(agent.max_load);
            if load >= agent.max_load {
                agent.status = AgentStatus::Busy;
            }
            Ok(())
        })
    }

    fn position(&self, id: &str) -> Result<usize, RosterError> {
        self.agents
            .iter()
            .position(|agent| agent.id == id)
            .ok_or_else(|| RosterError::AgentNotFound(id.to_string()))
    }

    fn update<F>(&self, id: &str, change: F) -> Result<Roster, RosterError>
    where
        F: FnOnce(&mut Agent) -> Result<(), RosterError>,
    {
        let index = self.position(id)?;
        let mut agents = self.agents.clone();
        change(&mut agents[index])?;
        Ok(Roster { agents })
    }
}

impl From<Vec<Agent>> for Roster {
    fn from(agents: Vec<Agent>) -> Self {
        Self::new(agents)
    }
}
