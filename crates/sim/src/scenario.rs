//! Scenario files.
//!
//! A scenario is the starting state of a simulated session: the character,
//! its hotkeys and items, and what stands in each area.
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use game_core::{
    Area, Item, ItemKind, ItemLocation, KeyBindings, Monster, MonsterType, Npc, NpcId, ObjectKind,
    Player, Position, SkillId, StatKind, UnitId, WorldObject,
};
use leveling_agent::combat::Boss;
use serde::{Deserialize, Serialize};

use crate::state::AreaContent;

/// Town portal and where it leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portal {
    pub object: UnitId,
    pub destination: Area,
}

/// The boss fight a session ends with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossFight {
    /// Boss name as accepted by [`Boss`]'s `FromStr`, e.g. `"summoner"`.
    pub boss: String,
    pub area: Area,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub player: Player,
    pub key_bindings: KeyBindings,
    pub items: Vec<Item>,
    pub areas: BTreeMap<Area, AreaContent>,
    pub portals: Vec<Portal>,
    pub boss: Option<BossFight>,
}

impl Scenario {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse scenario {}", path.display()))
    }

    pub fn boss(&self) -> anyhow::Result<Option<(Boss, Area)>> {
        let Some(fight) = &self.boss else {
            return Ok(None);
        };
        let boss = fight
            .boss
            .parse::<Boss>()
            .ok()
            .with_context(|| format!("unknown boss `{}`", fight.boss))?;
        Ok(Some((boss, fight.area)))
    }

    /// A level 12 sorceress standing in the Rogue Encampment with points to
    /// spend, no mercenary, and the Summoner waiting in the Arcane Sanctuary.
    pub fn demo() -> Self {
        let mut player = Player {
            area: Area::RogueEncampment,
            position: Position::new(100, 100),
            ..Player::default()
        };
        for (stat, value) in [
            (StatKind::Level, 12),
            (StatKind::StatPoints, 5),
            (StatKind::SkillPoints, 2),
            (StatKind::Vitality, 25),
            (StatKind::Energy, 35),
            (StatKind::Mana, 60),
            (StatKind::MaxMana, 60),
            (StatKind::Gold, 12_000),
            (StatKind::StashGold, 30_000),
        ] {
            player.stats.insert(stat, value);
        }
        for (skill, points) in [
            (SkillId::IceBolt, 5),
            (SkillId::FrozenArmor, 1),
            (SkillId::TomeOfTownPortal, 1),
        ] {
            player.skills.insert(skill, points);
        }

        let waypoint = |id: u32, x: i32, y: i32| WorldObject {
            id: UnitId(id),
            kind: ObjectKind::Waypoint,
            position: Position::new(x, y),
        };

        let mut areas = BTreeMap::new();
        areas.insert(
            Area::RogueEncampment,
            AreaContent {
                npcs: vec![
                    Npc {
                        id: NpcId::Akara,
                        position: Position::new(120, 90),
                    },
                    Npc {
                        id: NpcId::Kashya,
                        position: Position::new(80, 130),
                    },
                ],
                objects: vec![waypoint(1, 110, 110)],
                ..AreaContent::default()
            },
        );
        areas.insert(
            Area::ArcaneSanctuary,
            AreaContent {
                monsters: vec![
                    Monster {
                        id: UnitId(200),
                        name: NpcId::Summoner,
                        kind: MonsterType::Unique,
                        position: Position::new(40, 40),
                        life: 600,
                        ..Monster::default()
                    },
                    Monster {
                        id: UnitId(201),
                        name: NpcId::Skeleton,
                        position: Position::new(10, 12),
                        life: 80,
                        ..Monster::default()
                    },
                ],
                objects: vec![waypoint(2, 0, 0)],
                ..AreaContent::default()
            },
        );

        Self {
            player,
            key_bindings: KeyBindings::with_free_slots(8),
            items: vec![Item {
                id: UnitId(50),
                kind: ItemKind::TomeOfTownPortal,
                location: ItemLocation::Inventory,
            }],
            areas,
            portals: Vec::new(),
            boss: Some(BossFight {
                boss: Boss::Summoner.to_string(),
                area: Area::ArcaneSanctuary,
            }),
        }
    }
}
