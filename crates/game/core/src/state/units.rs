use std::collections::BTreeMap;

use super::{Position, UnitId};

/// Named NPC or monster class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum NpcId {
    // Townsfolk
    Akara,
    Kashya,
    Charsi,
    Greiz,
    Fara,
    Drognan,
    Asheara,
    Ormus,
    Tyrael,
    Jamella,
    QualKehk,
    Malah,
    // Bosses and super uniques
    DarkStalker,
    Andariel,
    Summoner,
    Duriel,
    CouncilMember,
    CouncilMember2,
    CouncilMember3,
    Mephisto,
    Izual,
    Diablo,
    DefiledWarrior,
    Nihlathak,
    TalicTheDefender,
    MadawcTheGuardian,
    KorlicTheProtector,
    BaalCrab,
    // Regular monsters
    Zombie,
    Fallen,
    Skeleton,
    HellBovine,
    #[default]
    Other,
}

/// Monster rarity class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MonsterType {
    #[default]
    Normal,
    Champion,
    Minion,
    Unique,
    SuperUnique,
}

impl MonsterType {
    pub const fn is_elite(self) -> bool {
        matches!(self, Self::Champion | Self::Unique | Self::SuperUnique)
    }
}

/// Damage type a monster may resist.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Resist {
    Physical,
    Magic,
    Fire,
    Cold,
    Lightning,
    Poison,
}

/// A hostile unit visible in the current snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Monster {
    pub id: UnitId,
    pub name: NpcId,
    pub kind: MonsterType,
    pub position: Position,
    pub life: i32,
    pub resists: BTreeMap<Resist, i32>,
}

impl Monster {
    /// Resistance at or above this value means immunity.
    pub const IMMUNITY_THRESHOLD: i32 = 100;

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn resist(&self, resist: Resist) -> i32 {
        self.resists.get(&resist).copied().unwrap_or(0)
    }

    pub fn is_immune(&self, resist: Resist) -> bool {
        self.resist(resist) >= Self::IMMUNITY_THRESHOLD
    }
}

/// A townsperson the character can talk to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    pub id: NpcId,
    pub position: Position,
}

/// Interactive object class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ObjectKind {
    Waypoint,
    CairnStoneAlpha,
    PermanentTownPortal,
    WirtCorpse,
    Chest,
    Shrine,
    #[default]
    Other,
}

/// An interactive object visible in the current snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldObject {
    pub id: UnitId,
    pub kind: ObjectKind,
    pub position: Position,
}
