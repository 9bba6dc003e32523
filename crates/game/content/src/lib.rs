//! Static game content backing the `game-core` oracles.
//!
//! - Skill tree layout (page, row, column, selection list row, hands)
//! - Waypoint network
//! - Town roster (mercenary contractors, skill trainer)
//!
//! Content is consulted by decision code through [`game_core::Env`] and never
//! appears in a snapshot.
mod skills;
mod world;

pub use skills::SkillTable;
pub use world::WorldTable;

use game_core::Env;

/// Owns every static table and hands out [`Env`] views over them.
#[derive(Debug, Clone, Default)]
pub struct Content {
    skills: SkillTable,
    world: WorldTable,
}

impl Content {
    pub fn new(skills: SkillTable, world: WorldTable) -> Self {
        Self { skills, world }
    }

    /// Borrows the tables as an oracle bundle.
    pub fn env(&self) -> Env<'_> {
        Env::new(&self.skills, &self.world)
    }

    pub fn skills(&self) -> &SkillTable {
        &self.skills
    }

    pub fn world(&self) -> &WorldTable {
        &self.world
    }
}
