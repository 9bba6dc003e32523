//! Evaluation failures.

use thiserror::Error;

/// Failure while evaluating a chain.
///
/// `A` is the driver's action type and `E` the error type produced by
/// expansions (and, through `From`, by the driver).
#[derive(Debug, Error)]
pub enum ChainError<A, E> {
    /// A leaf, an expansion, or a snapshot request failed.
    ///
    /// `step` is the `/`-joined label path of the chains active at the time.
    /// `action` is the failed leaf, when the failure came from the driver
    /// executing one.
    #[error("step `{step}` failed")]
    Step {
        step: String,
        action: Option<A>,
        #[source]
        source: E,
    },

    /// A repeating chain kept producing work past the pass limit.
    #[error("chain `{chain}` did not settle after {passes} passes")]
    NoFixpoint { chain: &'static str, passes: usize },
}

impl<A, E> ChainError<A, E> {
    /// Label path of the failing step, if the failure was a step failure.
    pub fn step(&self) -> Option<&str> {
        match self {
            ChainError::Step { step, .. } => Some(step),
            ChainError::NoFixpoint { .. } => None,
        }
    }
}
