//! Route command implementation

use crate::cli::output::{format_route_json, format_route_text, AgentView, RouteView};
use crate::cli::RouteArgs;
use crate::config::SwitchboardConfig;
use crate::intent::classify;
use crate::logging::message_preview;

/// Handle `switchboard route`
///
/// Skills given with `--skill` come first, followed by any skills implied by
/// the message's intent that were not already requested.
pub fn handle_route(
    args: &RouteArgs,
    config: &SwitchboardConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let roster = config.roster();
    let mut required = args.skills.clone();

    let classification = args.message.as_deref().map(|message| {
        let classification = classify(message);
        tracing::info!(
            intent = %classification.intent,
            escalate = classification.should_escalate,
            preview = ?message_preview(message, config.logging.log_message_content),
            "Message classified for routing"
        );
        classification
    });

    if let Some(ref classification) = classification {
        for skill in classification.intent.required_skills() {
            if !required.contains(skill) {
                required.push(*skill);
            }
        }
    }

    let decision = config.routing.router().route(roster.agents(), &required);
    let agent = decision
        .agent_id()
        .and_then(|id| roster.get_agent(id))
        .map(AgentView::from);

    let view = RouteView {
        intent: classification.as_ref().map(|c| c.intent),
        should_escalate: classification.as_ref().map(|c| c.should_escalate),
        required_skills: required,
        reason: decision.reason(),
        decision,
        agent,
    };

    if args.json {
        Ok(format_route_json(&view)?)
    } else {
        Ok(format_route_text(&view))
    }
}
