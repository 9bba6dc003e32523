//! Explicit decision context.
//!
//! Every plan builder receives an [`AgentContext`] instead of reaching for
//! process-wide state. The context is `Copy`, so deferred expansions capture
//! it by value and stay valid for as long as the agent that lent it.
use std::fmt;

use action_chain::{Expansion, Node};
use game_core::{Action, Env, Snapshot};

use crate::archetype::Archetype;
use crate::config::AgentConfig;
use crate::error::AgentError;

/// Plan node specialised to the agent's snapshot, action and error types.
pub type AgentNode<'a> = Node<'a, Snapshot, Action, AgentError>;

/// Result of expanding an agent chain.
pub type Plan<'a> = Expansion<'a, Snapshot, Action, AgentError>;

/// Read-only collaborators of every decision function.
#[derive(Clone, Copy)]
pub struct AgentContext<'a> {
    pub env: Env<'a>,
    pub config: &'a AgentConfig,
    pub archetype: &'a dyn Archetype,
}

impl<'a> AgentContext<'a> {
    pub fn new(env: Env<'a>, config: &'a AgentConfig, archetype: &'a dyn Archetype) -> Self {
        Self {
            env,
            config,
            archetype,
        }
    }
}

impl fmt::Debug for AgentContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentContext")
            .field("archetype", &self.archetype.kind())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
