//! Agents command implementation

use crate::cli::output::{format_agents_json, format_agents_table, AgentView};
use crate::cli::AgentsListArgs;
use crate::roster::{Agent, Roster};

/// Handle `switchboard agents list`
pub fn handle_agents_list(
    args: &AgentsListArgs,
    roster: &Roster,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut agents: Vec<&Agent> = if args.available {
        roster.available_agents()
    } else {
        roster.agents().iter().collect()
    };

    if let Some(status) = args.status {
        agents.retain(|a| a.status == status);
    }
    if let Some(skill) = args.skill {
        agents.retain(|a| a.has_skill(skill));
    }

    let views: Vec<AgentView> = agents.into_iter().map(AgentView::from).collect();
    tracing::debug!(count = views.len(), "Listing agents");

    if args.json {
        Ok(format_agents_json(&views)?)
    } else {
        Ok(format_agents_table(&views))
    }
}
