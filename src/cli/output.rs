//! Output formatting helpers for CLI commands

use crate::intent::{Classification, Intent};
use crate::roster::{Agent, AgentStatus, Skill};
use crate::routing::RoutingDecision;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for agent display
#[derive(Debug, Clone, serde::Serialize)]
pub struct AgentView {
    pub id: String,
    pub name: String,
    pub skills: Vec<Skill>,
    pub status: AgentStatus,
    pub current_load: u32,
    pub max_load: u32,
    pub performance_score: f64,
    pub teams: Vec<String>,
    pub eligible: bool,
}

impl From<&Agent> for AgentView {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id.clone(),
            name: agent.name.clone(),
            skills: agent.skills.clone(),
            status: agent.status,
            current_load: agent.current_load,
            max_load: agent.max_load,
            performance_score: agent.performance_score,
            teams: agent.teams.clone(),
            eligible: agent.is_eligible(),
        }
    }
}

/// View model for a routing run
#[derive(Debug, Clone, serde::Serialize)]
pub struct RouteView {
    /// Intent of the message, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_escalate: Option<bool>,
    pub required_skills: Vec<Skill>,
    pub decision: RoutingDecision,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentView>,
}

fn colored_status(status: AgentStatus) -> String {
    match status {
        AgentStatus::Online => "Online".green().to_string(),
        AgentStatus::Busy => "Busy".red().to_string(),
        AgentStatus::Away => "Away".yellow().to_string(),
        AgentStatus::Offline => "Offline".dimmed().to_string(),
    }
}

fn join_skills(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(Skill::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format agents as a table
pub fn format_agents_table(agents: &[AgentView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "ID",
        "Name",
        "Skills",
        "Status",
        "Load",
        "Performance",
        "Eligible",
    ]);

    for a in agents {
        table.add_row(vec![
            Cell::new(&a.id),
            Cell::new(&a.name),
            Cell::new(join_skills(&a.skills)),
            Cell::new(colored_status(a.status)),
            Cell::new(format!("{}/{}", a.current_load, a.max_load)),
            Cell::new(format!("{:.0}", a.performance_score)),
            Cell::new(status_icon(a.eligible)),
        ]);
    }

    table.to_string()
}

/// Format agents as JSON
pub fn format_agents_json(agents: &[AgentView]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({ "agents": agents }))
}

/// Format a routing run for humans
pub fn format_route_text(view: &RouteView) -> String {
    let mut lines = Vec::new();

    if let Some(intent) = view.intent {
        let escalate = if view.should_escalate.unwrap_or(false) {
            "yes".red().to_string()
        } else {
            "no".to_string()
        };
        lines.push(format!("Intent:   {} (escalate: {})", intent, escalate));
    }
    lines.push(format!(
        "Skills:   {}",
        if view.required_skills.is_empty() {
            "(any)".to_string()
        } else {
            join_skills(&view.required_skills)
        }
    ));

    match &view.decision {
        RoutingDecision::Assigned { agent_id, score, .. } => {
            let name = view
                .agent
                .as_ref()
                .map(|a| a.name.as_str())
                .unwrap_or(agent_id.as_str());
            lines.push(format!("Agent:    {} ({})", name.green().bold(), agent_id));
            lines.push(format!(
                "Score:    {:.3} (skill {}, load {:.2}, performance {:.2})",
                score.total, score.skill_score, score.load_score, score.performance_score
            ));
        }
        RoutingDecision::NoEligibleAgent => {
            lines.push(format!("Agent:    {}", "none available".yellow()));
        }
    }
    lines.push(format!("Reason:   {}", view.reason));

    lines.join("\n")
}

/// Format a routing run as JSON
pub fn format_route_json(view: &RouteView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

/// Format a classification for humans
pub fn format_classification_text(classification: &Classification) -> String {
    let mut out = format!(
        "Intent:   {}\nEscalate: {}\n\n{}",
        classification.intent,
        if classification.should_escalate {
            "yes"
        } else {
            "no"
        },
        classification.response
    );

    if !classification.suggestions.is_empty() {
        out.push_str(&format!(
            "\n\nSuggestions: {}",
            classification.suggestions.join(" | ")
        ));
    }

    out
}

/// Format a classification as JSON
pub fn format_classification_json(
    classification: &Classification,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(classification)
}

/// Get icon for eligibility
pub fn status_icon(eligible: bool) -> &'static str {
    if eligible {
        "✓"
    } else {
        "✗"
    }
}
