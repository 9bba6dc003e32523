//! Waypoint network and town roster.
use std::collections::{BTreeSet, HashMap};

use game_core::{Area, NpcId, WorldOracle};

/// [`WorldOracle`] backed by in-memory tables.
#[derive(Debug, Clone)]
pub struct WorldTable {
    waypoints: BTreeSet<Area>,
    towns: HashMap<Area, Option<NpcId>>,
    trainer: (Area, NpcId),
}

const WAYPOINTS: &[Area] = &[
    Area::RogueEncampment,
    Area::ColdPlains,
    Area::StonyField,
    Area::DarkWood,
    Area::BlackMarsh,
    Area::CatacombsLevel2,
    Area::LutGholein,
    Area::ArcaneSanctuary,
    Area::CanyonOfTheMagi,
    Area::KurastDocks,
    Area::Travincal,
    Area::ThePandemoniumFortress,
    Area::RiverOfFlame,
    Area::Harrogath,
    Area::HallsOfVaught,
    Area::WorldstoneKeepLevel2,
];

const TOWNS: &[(Area, NpcId)] = &[
    (Area::RogueEncampment, NpcId::Kashya),
    (Area::LutGholein, NpcId::Greiz),
    (Area::KurastDocks, NpcId::Asheara),
    (Area::ThePandemoniumFortress, NpcId::Tyrael),
    (Area::Harrogath, NpcId::QualKehk),
];

impl WorldTable {
    /// Empty network with `trainer` as the skill trainer.
    pub fn new(trainer: (Area, NpcId)) -> Self {
        Self {
            waypoints: BTreeSet::new(),
            towns: HashMap::new(),
            trainer,
        }
    }

    pub fn add_waypoint(&mut self, area: Area) {
        self.waypoints.insert(area);
    }

    pub fn remove_waypoint(&mut self, area: Area) {
        self.waypoints.remove(&area);
    }

    pub fn add_town(&mut self, area: Area, contractor: Option<NpcId>) {
        self.towns.insert(area, contractor);
    }
}

impl Default for WorldTable {
    fn default() -> Self {
        let mut table = Self::new((Area::RogueEncampment, NpcId::Akara));
        for &area in WAYPOINTS {
            table.add_waypoint(area);
        }
        for &(area, contractor) in TOWNS {
            table.add_town(area, Some(contractor));
        }
        table
    }
}

impl WorldOracle for WorldTable {
    fn has_waypoint(&self, area: Area) -> bool {
        self.waypoints.contains(&area)
    }

    fn is_town(&self, area: Area) -> bool {
        self.towns.contains_key(&area)
    }

    fn merc_contractor(&self, area: Area) -> Option<NpcId> {
        self.towns.get(&area).copied().flatten()
    }

    fn skill_trainer(&self) -> (Area, NpcId) {
        self.trainer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_town_has_a_waypoint() {
        let world = WorldTable::default();
        for &(area, _) in TOWNS {
            assert!(world.is_town(area));
            assert!(world.has_waypoint(area), "{area}");
        }
    }

    #[test]
    fn contractors_are_per_town() {
        let world = WorldTable::default();
        assert_eq!(world.merc_contractor(Area::LutGholein), Some(NpcId::Greiz));
        assert_eq!(world.merc_contractor(Area::StonyField), None);
        assert!(!world.is_town(Area::StonyField));
    }

    #[test]
    fn tristram_is_not_on_the_network() {
        assert!(!WorldTable::default().has_waypoint(Area::Tristram));
    }
}
