//! Read-only game data consulted alongside snapshots.
//!
//! Oracles expose static facts (skill tree layout, waypoint network, town
//! roster). The [`Env`] aggregate bundles them so decision code can reach
//! everything it needs without coupling to concrete tables.
mod skills;
mod world;

pub use skills::{SkillLayout, SkillOracle};
pub use world::WorldOracle;

/// Aggregates the read-only oracles.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    skills: &'a dyn SkillOracle,
    world: &'a dyn WorldOracle,
}

impl<'a> Env<'a> {
    pub fn new(skills: &'a dyn SkillOracle, world: &'a dyn WorldOracle) -> Self {
        Self { skills, world }
    }

    pub fn skills(&self) -> &'a dyn SkillOracle {
        self.skills
    }

    pub fn world(&self) -> &'a dyn WorldOracle {
        self.world
    }
}

impl std::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Env").finish_non_exhaustive()
    }
}
