use thiserror::Error;

/// Error type that captures engine configuration and parsing failures.
///
/// Validation findings are never surfaced through this type; they are data
/// (see [`crate::statement::Violation`]) so a failed check can be rendered
/// without interrupting the monitoring loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid account code: {0}")]
    InvalidAccountCode(String),
    #[error("Unknown statement type: {0}")]
    UnknownStatementType(String),
}
