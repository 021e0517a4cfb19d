//! Error types for the lazy sequence engine.

use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by a pull.
///
/// Cloneable so a failed generator can hand back the same error on every
/// later pull without re-running its procedure.
#[derive(Debug, Clone, Error)]
pub enum SequenceError {
    #[error("Producer failed: {0}")]
    Producer(Arc<anyhow::Error>),

    #[error("Producer panicked: {0}")]
    Panicked(String),

    #[error("Producer could not start: {0}")]
    Start(String),

    #[error("reduce of empty sequence with no seed")]
    EmptyReduce,
}

impl SequenceError {
    /// Wrap an error returned by a production procedure.
    pub fn producer(err: anyhow::Error) -> Self {
        SequenceError::Producer(Arc::new(err))
    }

    /// True when both values carry the very same producer failure.
    pub fn same_failure(&self, other: &SequenceError) -> bool {
        match (self, other) {
            (SequenceError::Producer(a), SequenceError::Producer(b)) => Arc::ptr_eq(a, b),
            (SequenceError::Panicked(a), SequenceError::Panicked(b)) => a == b,
            (SequenceError::Start(a), SequenceError::Start(b)) => a == b,
            (SequenceError::EmptyReduce, SequenceError::EmptyReduce) => true,
            _ => false,
        }
    }
}

/// Engine-level errors: configuration and logging setup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}
