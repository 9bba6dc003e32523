//! Errors surfaced by agent operations.
//!
//! Expected absence of game entities is never an error here: selectors model
//! it as `None`. Errors are reserved for required steps that could not be
//! carried out, and they name what failed so an outer loop can decide to
//! retry, skip, or abort the run.
use std::time::Duration;

use action_chain::ChainError;
use game_core::{Action, ClientError, Menu, SkillId, StatKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A required NPC, object, waypoint or layout entry is absent.
    #[error("{what} not found")]
    NotFound { what: String },

    #[error("timed out after {after:?} waiting for {what}")]
    Timeout { what: String, after: Duration },

    #[error("menu {menu} did not {}", open_or_close(.expected_open))]
    MenuState { menu: Menu, expected_open: bool },

    #[error("failed to allocate a point to {stat}")]
    StatAllocation {
        stat: StatKind,
        #[source]
        source: Box<AgentError>,
    },

    #[error("failed to allocate a point to {skill}")]
    SkillAllocation {
        skill: SkillId,
        #[source]
        source: Box<AgentError>,
    },

    #[error("step `{step}` failed")]
    Step {
        step: String,
        #[source]
        source: Box<AgentError>,
    },

    /// A repeating chain never reached its fixpoint.
    #[error("`{chain}` still had work after {passes} passes")]
    Stalled { chain: &'static str, passes: usize },

    #[error(transparent)]
    Client(#[from] ClientError),
}

fn open_or_close(expected_open: &bool) -> &'static str {
    if *expected_open { "open" } else { "close" }
}

impl AgentError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Innermost error, looking through step and allocation wrappers.
    pub fn root_cause(&self) -> &AgentError {
        match self {
            AgentError::Step { source, .. }
            | AgentError::StatAllocation { source, .. }
            | AgentError::SkillAllocation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl From<ChainError<Action, AgentError>> for AgentError {
    fn from(err: ChainError<Action, AgentError>) -> Self {
        match err {
            ChainError::Step {
                action: Some(Action::AllocateStat(stat)),
                source,
                ..
            } => AgentError::StatAllocation {
                stat,
                source: Box::new(source),
            },
            ChainError::Step {
                action: Some(Action::AllocateSkill { skill, .. }),
                source,
                ..
            } => AgentError::SkillAllocation {
                skill,
                source: Box::new(source),
            },
            ChainError::Step { step, source, .. } => AgentError::Step {
                step,
                source: Box::new(source),
            },
            ChainError::NoFixpoint { chain, passes } => AgentError::Stalled { chain, passes },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_stat_click_names_the_stat() {
        let err = AgentError::from(ChainError::Step {
            step: "stat_points/allocate".to_owned(),
            action: Some(Action::AllocateStat(StatKind::Vitality)),
            source: AgentError::Client(ClientError::rejected("character screen closed")),
        });

        assert!(matches!(
            err,
            AgentError::StatAllocation {
                stat: StatKind::Vitality,
                ..
            }
        ));
        assert!(matches!(err.root_cause(), AgentError::Client(_)));
    }

    #[test]
    fn other_failures_keep_their_step() {
        let err = AgentError::from(ChainError::Step {
            step: "reset_skills/interact_npc".to_owned(),
            action: None,
            source: AgentError::not_found("akara"),
        });

        match &err {
            AgentError::Step { step, .. } => assert_eq!(step, "reset_skills/interact_npc"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.root_cause().to_string(), "akara not found");
    }

    #[test]
    fn menu_state_message_reads_naturally() {
        let err = AgentError::MenuState {
            menu: Menu::SkillTree,
            expected_open: false,
        };
        assert_eq!(err.to_string(), "menu skill_tree did not close");
    }
}
