use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability tag an agent can carry and a request can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skill {
    Technical,
    Billing,
    Sales,
    Cancellation,
    Fiber,
    Mobile,
    General,
}

impl Skill {
    /// All skills in declaration order.
    pub const ALL: [Skill; 7] = [
        Skill::Technical,
        Skill::Billing,
        Skill::Sales,
        Skill::Cancellation,
        Skill::Fiber,
        Skill::Mobile,
        Skill::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Technical => "technical",
            Skill::Billing => "billing",
            Skill::Sales => "sales",
            Skill::Cancellation => "cancellation",
            Skill::Fiber => "fiber",
            Skill::Mobile => "mobile",
            Skill::General => "general",
        }
    }
}

impl FromStr for Skill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Skill::ALL
            .into_iter()
            .find(|skill| skill.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown skill: {}. Use: technical, billing, sales, cancellation, fiber, mobile, general",
                    s
                )
            })
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent availability state.
///
/// Only `Online` agents can receive new work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    /// Signed in and accepting work
    #[default]
    Online,
    /// Signed in but at capacity or otherwise occupied
    Busy,
    /// Signed in but temporarily away from the desk
    Away,
    /// Signed out
    Offline,
}

impl FromStr for AgentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(AgentStatus::Online),
            "busy" => Ok(AgentStatus::Busy),
            "away" => Ok(AgentStatus::Away),
            "offline" => Ok(AgentStatus::Offline),
            _ => Err(format!(
                "Invalid status: {}. Use: online, busy, away, offline",
                s
            )),
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Online => write!(f, "online"),
            AgentStatus::Busy => write!(f, "busy"),
            AgentStatus::Away => write!(f, "away"),
            AgentStatus::Offline => write!(f, "offline"),
        }
    }
}

/// A support agent as seen by the router.
///
/// Agents are plain values. The router reads them, and roster commands
/// produce updated copies rather than changing them in place.
///
/// # Examples
///
/// ```
/// use switchboard::roster::{Agent, AgentStatus, Skill};
///
/// let agent = Agent::new("agent-1", vec![Skill::Technical], 5)
///     .with_load(2)
///     .with_performance(90.0);
///
/// assert_eq!(agent.status, AgentStatus::Online);
/// assert!(agent.is_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact address
    pub email: String,
    /// Capability tags this agent can handle
    pub skills: Vec<Skill>,
    /// Availability state
    pub status: AgentStatus,
    /// Work items currently assigned
    pub current_load: u32,
    /// Maximum concurrent work items (> 0)
    pub max_load: u32,
    /// Performance score in [0, 100]
    pub performance_score: f64,
    /// Teams this agent belongs to
    pub teams: Vec<String>,
    /// Last time the agent's status changed
    pub last_active_at: DateTime<Utc>,
}

impl Agent {
    /// Create an online agent with no load and a performance score of 0.
    pub fn new(id: impl Into<String>, skills: Vec<Skill>, max_load: u32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            email: String::new(),
            skills,
            status: AgentStatus::Online,
            current_load: 0,
            max_load,
            performance_score: 0.0,
            teams: Vec::new(),
            last_active_at: Utc::now(),
        }
    }

    pub fn with_status(mut self, status: AgentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_load(mut self, current_load: u32) -> Self {
        self.current_load = current_load;
        self
    }

    pub fn with_performance(mut self, performance_score: f64) -> Self {
        self.performance_score = performance_score;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether the agent is signed in (any status but offline).
    pub fn is_online(&self) -> bool {
        self.status != AgentStatus::Offline
    }

    /// Whether the agent has room for another work item.
    pub fn has_capacity(&self) -> bool {
        self.current_load < self.max_load
    }

    /// Eligible agents are online and under their maximum load.
    pub fn is_eligible(&self) -> bool {
        self.status == AgentStatus::Online && self.has_capacity()
    }

    pub fn has_skill(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}
