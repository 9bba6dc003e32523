//! Attack tier selection.
use game_core::{AttackRequest, DistanceRange, SkillId, Snapshot, UnitId};

use crate::config::CombatConfig;

/// A ranged or area skill with its cast count per attack request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangedTier {
    pub skill: SkillId,
    pub casts: u32,
}

impl RangedTier {
    pub const fn new(skill: SkillId, casts: u32) -> Self {
        Self { skill, casts }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierChoice {
    /// Close-range primary attack.
    Melee,
    Ranged(RangedTier),
}

impl TierChoice {
    /// Builds the attack request for `target`.
    ///
    /// Ranged tiers use `ranged`; melee always uses the configured melee
    /// window.
    pub fn request(self, target: UnitId, combat: &CombatConfig, ranged: DistanceRange) -> AttackRequest {
        match self {
            TierChoice::Melee => AttackRequest::primary(target, combat.melee),
            TierChoice::Ranged(tier) => AttackRequest::skill(target, tier.skill, tier.casts, ranged),
        }
    }
}

/// Picks the attack tier for this tick.
///
/// Low mana at a low level forces melee. Otherwise the first tier in
/// `tiers` (highest first) whose skill is bound to a key wins, with melee
/// as the last resort.
pub fn select_tier(snapshot: &Snapshot, tiers: &[RangedTier], combat: &CombatConfig) -> TierChoice {
    let player = &snapshot.player;
    if player.mana_percent() < combat.low_mana_percent && player.level() < combat.low_mana_level {
        tracing::debug!(mana = player.mana_percent(), "low mana, using melee attack");
        return TierChoice::Melee;
    }

    match tiers
        .iter()
        .find(|tier| snapshot.key_bindings.is_bound(tier.skill))
    {
        Some(tier) => {
            tracing::debug!(skill = %tier.skill, "using ranged tier");
            TierChoice::Ranged(*tier)
        }
        None => {
            tracing::debug!("no ranged skill bound, using melee attack");
            TierChoice::Melee
        }
    }
}
