//! Decision layer of the leveling agent.
//!
//! Every operation is a lazy action chain evaluated against fresh snapshots:
//! nothing is planned ahead of the state it depends on.
//!
//! # Modules
//!
//! - [`policy`]: attribute targets and skill point order, pure functions of level
//! - [`reconcile`]: spends unspent points and fixes hotkeys until the
//!   snapshot matches the policy
//! - [`combat`]: the per-tick target/attack loop and boss encounters
//! - [`procedure`]: multi-step town and travel procedures with compensation
//! - [`archetype`]: the build-specific capability set
//! - [`agent`]: the [`Agent`] facade tying a driver to all of the above
//!
//! # Example
//!
//! ```rust,ignore
//! let content = game_content::Content::default();
//! let agent = Agent::new(driver, content.env(), AgentConfig::from_env());
//!
//! agent.ensure_stat_points().await?;
//! agent.ensure_skill_points().await?;
//! agent.kill_boss(Boss::Andariel).await?;
//! ```
pub mod agent;
pub mod archetype;
pub mod combat;
pub mod config;
pub mod context;
pub mod error;
pub mod policy;
pub mod procedure;
pub mod reconcile;

pub use agent::Agent;
pub use archetype::{Archetype, ArchetypeKind, BindPlan, SorceressLeveling};
pub use combat::{Boss, BossTactic, Selector};
pub use config::{AgentConfig, CombatConfig, WaitConfig};
pub use context::{AgentContext, AgentNode};
pub use error::{AgentError, Result};
pub use policy::{SkillPlan, StatTargets};
