//! Character archetypes.
//!
//! An archetype is the capability set that makes a build: which attributes
//! and skills to spend points on, what to bind, which buffs to cast, and how
//! to approach each boss. One archetype is chosen at startup from
//! [`ArchetypeKind`] and lent to every plan through the agent context.
mod sorceress;

pub use sorceress::SorceressLeveling;

use game_core::{Difficulty, KeyBindings, Player, SkillId};

use crate::combat::{Boss, BossTactic, RangedTier};
use crate::config::CombatConfig;
use crate::policy::{SkillPlan, StatTargets};

/// Skills an archetype wants on hotkeys, plus its main (left hand) skill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindPlan {
    pub main: SkillId,
    /// Right-hand skills to bind, in binding order.
    pub skills: Vec<SkillId>,
}

pub trait Archetype: Send + Sync {
    fn kind(&self) -> ArchetypeKind;

    fn stat_targets(&self, level: u32) -> StatTargets;

    fn skill_plan(&self, level: u32) -> SkillPlan;

    fn bind_plan(&self, player: &Player) -> BindPlan;

    /// Bound buff skills to cast before a fight.
    fn buff_skills(&self, bindings: &KeyBindings) -> Vec<SkillId>;

    fn should_reset_skills(&self, player: &Player) -> bool;

    /// Skills that must always have a hotkey.
    fn required_bindings(&self) -> &[SkillId];

    /// Ranged attacks in order of preference.
    fn attack_tiers(&self) -> &[RangedTier];

    fn boss_tactic(&self, boss: Boss, difficulty: Difficulty, combat: &CombatConfig) -> BossTactic;
}

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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArchetypeKind {
    #[default]
    SorceressLeveling,
}

impl ArchetypeKind {
    pub fn build(self) -> Box<dyn Archetype> {
        match self {
            ArchetypeKind::SorceressLeveling => Box::new(SorceressLeveling),
        }
    }
}
