//! Game-state read model and action vocabulary shared by the agent crates.
//!
//! `game-core` defines what the agent can observe (a [`Snapshot`] taken once
//! per decision tick), what it can ask for (an [`Action`]), and the read-only
//! oracles it may consult for static game data ([`Env`]). Nothing in this
//! crate performs I/O; collaborators implement the traits and report failures
//! through [`ClientError`].
pub mod action;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, AttackRequest, DistanceRange, InteractTarget, Key, UiElement, VendorRequest,
};
pub use env::{Env, SkillLayout, SkillOracle, WorldOracle};
pub use error::ClientError;
pub use state::{
    Area, Difficulty, Hand, Item, ItemKind, ItemLocation, KeyBindings, KeySlot, Menu, Monster,
    MonsterType, Npc, NpcId, ObjectKind, OpenMenus, Player, Position, Resist, SkillBinding,
    SkillId, Snapshot, StatKind, UnitId, WorldObject,
};
