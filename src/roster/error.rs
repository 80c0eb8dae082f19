/// Errors that can occur during roster operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("agent already exists: {0}")]
    DuplicateAgent(String),

    #[error("agent not found: {0}")]
    AgentNotFound(String),

    #[error("agent at capacity: {id} ({max_load}/{max_load})")]
    AtCapacity { id: String, max_load: u32 },
}
