//! CLI module for Switchboard
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `route` - Pick the best agent for a set of skills or a customer message
//! - `agents` - Inspect the configured roster
//! - `classify` - Classify a customer message
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Route a technical request
//! switchboard route --skill technical
//!
//! # Let the classifier decide which skills are needed
//! switchboard route --message "I want to cancel my contract" --json
//!
//! # Show agents that can take work right now
//! switchboard agents list --available
//! ```

pub mod agents;
pub mod classify;
pub mod completions;
pub mod config;
pub mod output;
pub mod route;

pub use completions::handle_completions;
pub use config::{handle_config_init, load_config};

use crate::roster::{AgentStatus, Skill};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Switchboard - skill-aware agent routing
#[derive(Parser, Debug)]
#[command(
    name = "switchboard",
    version,
    about = "Skill-aware agent routing and intent triage for support desks"
)]
pub struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select the best agent for a request
    Route(RouteArgs),
    /// Inspect the agent roster
    #[command(subcommand)]
    Agents(AgentsCommands),
    /// Classify a customer message
    Classify(ClassifyArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Required skill (repeatable): technical, billing, sales, cancellation, fiber, mobile, general
    #[arg(short, long = "skill")]
    pub skills: Vec<Skill>,

    /// Customer message; its intent adds the skills needed to handle it
    #[arg(short, long)]
    pub message: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "switchboard.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum AgentsCommands {
    /// List agents in roster order
    List(AgentsListArgs),
}

#[derive(Args, Debug)]
pub struct AgentsListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Filter by status (online, busy, away, offline)
    #[arg(short, long)]
    pub status: Option<AgentStatus>,

    /// Filter by skill
    #[arg(short = 'k', long)]
    pub skill: Option<Skill>,

    /// Only agents that can take a new assignment
    #[arg(short, long)]
    pub available: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "switchboard.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Message text to classify
    pub message: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "switchboard.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
