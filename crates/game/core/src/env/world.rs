use crate::state::{Area, NpcId};

/// Static facts about areas and towns.
pub trait WorldOracle: Send + Sync {
    /// Returns `true` if `area` can be reached through the waypoint network.
    fn has_waypoint(&self, area: Area) -> bool;

    fn is_town(&self, area: Area) -> bool;

    /// Mercenary contractor of the town `area`, if it has one.
    fn merc_contractor(&self, area: Area) -> Option<NpcId>;

    /// The skill trainer who can reset the character's points.
    fn skill_trainer(&self) -> (Area, NpcId);
}
