//! Failures reported by game collaborators.

use std::time::Duration;

use thiserror::Error;

/// Failure of a snapshot request or an action execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("action rejected: {reason}")]
    Rejected { reason: String },

    #[error("no acknowledgement within {0:?}")]
    AckTimeout(Duration),

    #[error("game state unavailable: {0}")]
    SnapshotUnavailable(String),

    #[error("game client disconnected")]
    Disconnected,
}

impl ClientError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}
