//! Bounded polling waits.
use std::time::Duration;

use action_chain::builder::{pause, until_empty_unbounded};
use game_core::Snapshot;
use tokio::time::Instant;

use crate::context::AgentNode;
use crate::error::AgentError;

/// Polls until `done` holds, failing through `on_timeout` once `timeout`
/// has elapsed since the first check.
///
/// The first check happens immediately; every further check is one `poll`
/// later, and the last pause is shortened so the deadline is checked on
/// time.
pub fn wait_until<'a, C, T>(
    label: &'static str,
    timeout: Duration,
    poll: Duration,
    mut done: C,
    mut on_timeout: T,
) -> AgentNode<'a>
where
    C: FnMut(&Snapshot) -> bool + Send + 'a,
    T: FnMut(&Snapshot) -> AgentError + Send + 'a,
{
    let mut started: Option<Instant> = None;
    until_empty_unbounded(label, move |snapshot: &Snapshot| {
        if done(snapshot) {
            return Ok(Vec::new());
        }
        let waited = started.get_or_insert_with(Instant::now).elapsed();
        if waited >= timeout {
            return Err(on_timeout(snapshot));
        }
        Ok(vec![pause(poll.min(timeout - waited))])
    })
}

/// [`wait_until`] reporting [`AgentError::Timeout`] for `what`.
pub fn wait_for<'a, C>(what: impl Into<String>, timeout: Duration, poll: Duration, done: C) -> AgentNode<'a>
where
    C: FnMut(&Snapshot) -> bool + Send + 'a,
{
    let what = what.into();
    wait_until("wait", timeout, poll, done, move |_| AgentError::Timeout {
        what: what.clone(),
        after: timeout,
    })
}
