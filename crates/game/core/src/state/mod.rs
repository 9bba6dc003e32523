//! Read-only view of the game, as observed once per decision tick.
//!
//! The agent never mutates any of these types. Changes are requested through
//! [`crate::Action`]s and observed afterwards in the next [`Snapshot`].
pub mod common;
pub mod items;
pub mod menus;
pub mod player;
pub mod skills;
pub mod snapshot;
pub mod units;
pub mod world;

pub use common::{Position, UnitId};
pub use items::{Item, ItemKind, ItemLocation};
pub use menus::{Menu, OpenMenus};
pub use player::{Player, StatKind};
pub use skills::{Hand, KeyBindings, KeySlot, SkillBinding, SkillId};
pub use snapshot::Snapshot;
pub use units::{Monster, MonsterType, Npc, NpcId, ObjectKind, Resist, WorldObject};
pub use world::{Area, Difficulty};
