//! Error types for Voicehelm.

use thiserror::Error;

/// Errors surfaced by the resolution pipeline.
///
/// Parsing and normalization never produce errors — they degrade to a valid
/// payload instead. Only invocation-layer failures propagate, each paired
/// with a safe fallback payload at the API boundary.
#[derive(Error, Debug)]
pub enum VoicehelmError {
    #[error("Agent timed out after {0} ms")]
    AgentTimeout(u64),

    #[error("Agent executable not found: {0}")]
    AgentUnavailable(String),

    #[error("Agent invocation failed: {0}")]
    Invocation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VoicehelmError>;
