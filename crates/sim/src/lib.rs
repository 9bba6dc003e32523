//! Simulated game world.
//!
//! [`SimWorld`] implements the action-chain [`Driver`](action_chain::Driver)
//! against an in-memory model of the game: menus, attribute and skill points,
//! hotkeys, areas with their monsters, NPCs and objects, items, the cube and
//! town portals. It acknowledges every action immediately, which makes it a
//! deterministic stand-in for the real client in tests and demos.
//!
//! Tests shape the world with the builder methods on [`SimWorld`]:
//! scheduled spawns model monsters that show up late, `ignore` models a game
//! that acknowledges without reacting, and `reject` models a refused action.
mod scenario;
mod state;
mod world;

pub use scenario::{BossFight, Portal, Scenario};
pub use state::{AreaContent, MERC_PRICE};
pub use world::SimWorld;
