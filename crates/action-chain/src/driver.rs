//! External collaborator contract.
//!
//! The evaluator never inspects the world directly. It asks a [`Driver`] for
//! a read-only snapshot whenever a chain has to be expanded, and hands it
//! concrete actions one at a time, awaiting each acknowledgement before
//! deciding anything else.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

/// Snapshot source and action executor for one controlled character.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Read-only view of the world at one point in time.
    type Snapshot: Send + Sync;

    /// Concrete, directly executable step.
    type Action: fmt::Debug + Send + Sync;

    /// Failure reported by the collaborator.
    type Error: Send;

    /// Returns the current state of the world.
    ///
    /// Called once per chain expansion; the result is never cached across
    /// expansions.
    async fn snapshot(&self) -> Result<Self::Snapshot, Self::Error>;

    /// Performs `action` and returns once the world acknowledged it, or the
    /// collaborator's own bounded wait elapsed.
    async fn execute(&self, action: &Self::Action) -> Result<(), Self::Error>;
}

/// Shared drivers behave like the driver they wrap.
#[async_trait]
impl<T: Driver + ?Sized> Driver for Arc<T> {
    type Snapshot = T::Snapshot;
    type Action = T::Action;
    type Error = T::Error;

    #[inline]
    async fn snapshot(&self) -> Result<Self::Snapshot, Self::Error> {
        (**self).snapshot().await
    }

    #[inline]
    async fn execute(&self, action: &Self::Action) -> Result<(), Self::Error> {
        (**self).execute(action).await
    }
}
