//! Switchboard - skill-aware agent routing for customer support desks
//!
//! This library picks the best available support agent for an incoming
//! request and triages customer messages into intents.
//!
//! # Example
//!
//! ```
//! use switchboard::roster::{Agent, Skill};
//! use switchboard::routing::select_agent;
//!
//! let roster = vec![
//!     Agent::new("agent-1", vec![Skill::Technical], 5).with_load(3).with_performance(94.0),
//!     Agent::new("agent-2", vec![Skill::Billing], 5).with_load(1).with_performance(80.0),
//! ];
//!
//! assert_eq!(select_agent(&roster, &[Skill::Technical]), Some("agent-1"));
//! ```

pub mod cli;
pub mod config;
pub mod intent;
pub mod logging;
pub mod roster;
pub mod routing;
