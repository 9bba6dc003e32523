use std::collections::BTreeMap;

use super::{Area, Position, SkillId};

/// Character statistic as tracked by the game.
///
/// The first four are the allocatable attributes; the rest are read-only
/// counters the agent consults.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Energy,
    Dexterity,
    Vitality,
    /// Unspent attribute points.
    StatPoints,
    /// Unspent skill points.
    SkillPoints,
    Level,
    Life,
    MaxLife,
    Mana,
    MaxMana,
    Gold,
    StashGold,
}

impl StatKind {
    /// Returns `true` for attributes that accept stat points.
    pub const fn is_allocatable(self) -> bool {
        matches!(
            self,
            Self::Strength | Self::Energy | Self::Dexterity | Self::Vitality
        )
    }
}

/// The controlled character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Player {
    pub area: Area,
    pub position: Position,
    pub stats: BTreeMap<StatKind, i32>,
    /// Learned skills and their hard points.
    pub skills: BTreeMap<SkillId, u32>,
    pub left_skill: SkillId,
    pub right_skill: SkillId,
    /// Mercenary life in percent; `0` when there is no living mercenary.
    pub merc_life_percent: u8,
}

impl Player {
    /// Returns the value of `stat`, if the game reports it.
    pub fn stat(&self, stat: StatKind) -> Option<i32> {
        self.stats.get(&stat).copied()
    }

    /// Character level (`0` if unknown).
    pub fn level(&self) -> u32 {
        self.non_negative(StatKind::Level)
    }

    /// Unspent attribute points.
    pub fn unspent_stat_points(&self) -> u32 {
        self.non_negative(StatKind::StatPoints)
    }

    /// Unspent skill points.
    pub fn unspent_skill_points(&self) -> u32 {
        self.non_negative(StatKind::SkillPoints)
    }

    /// Hard points in `skill` (`0` when not learned).
    pub fn skill_level(&self, skill: SkillId) -> u32 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Current mana as a percentage of maximum mana.
    ///
    /// Reports 100 when the maximum is unknown so that missing data never
    /// reads as "out of mana".
    pub fn mana_percent(&self) -> u32 {
        let max = self.non_negative(StatKind::MaxMana);
        if max == 0 {
            return 100;
        }
        let mana = self.non_negative(StatKind::Mana).min(max);
        // At most 100 since mana is clamped to max.
        (u64::from(mana) * 100 / u64::from(max)) as u32
    }

    /// Gold carried plus gold in the stash.
    pub fn total_gold(&self) -> u32 {
        self.non_negative(StatKind::Gold) + self.non_negative(StatKind::StashGold)
    }

    fn non_negative(&self, stat: StatKind) -> u32 {
        self.stat(stat)
            .and_then(|value| u32::try_from(value).ok())
            .unwrap_or(0)
    }
}
