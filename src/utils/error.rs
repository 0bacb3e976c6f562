//! Error types for eventq.

use thiserror::Error;

/// Errors produced by the queue, its configuration layer and its listeners.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Invalid default-handler configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The bound target has been dropped, or is still being constructed
    #[error("Queue is detached from its target: {0}")]
    Detached(String),

    /// Failure reported by a listener
    #[error("Listener error: {0}")]
    Listener(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialization(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, QueueError>;
