//! Cold sorceress leveling build.
//!
//! Ice Bolt carries the early levels with Frozen Armor, Static Field,
//! Telekinesis and Teleport picked up on the way; from level 24 every point
//! goes into Blizzard.
use game_core::{
    Difficulty, DistanceRange, KeyBindings, MonsterType, NpcId, Player, Position, SkillId,
    StatKind,
};

use super::{Archetype, ArchetypeKind, BindPlan};
use crate::combat::{Boss, BossTactic, Opener, Quarry, RangedTier};
use crate::config::CombatConfig;
use crate::policy::{SkillPlan, StatTargets, UNBOUNDED};

const STAT_LEVEL: u32 = 20;
const BLIZZARD_LEVEL: u32 = 24;

const EARLY_SKILLS: &[SkillId] = &[
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::FrozenArmor,
    SkillId::IceBolt,
    SkillId::StaticField,
    SkillId::IceBolt,
    SkillId::Telekinesis,
    SkillId::IceBolt,
    SkillId::Teleport,
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::IceBolt,
    SkillId::IceBolt,
];

const BLIZZARD_POINTS: usize = 22;

const TIERS: &[RangedTier] = &[
    RangedTier::new(SkillId::Blizzard, 1),
    RangedTier::new(SkillId::IceBolt, 4),
];

const REQUIRED: &[SkillId] = &[SkillId::TomeOfTownPortal];

const BUFFS: &[SkillId] = &[SkillId::FrozenArmor, SkillId::EnergyShield];

const COUNCIL: &[NpcId] = &[
    NpcId::CouncilMember,
    NpcId::CouncilMember2,
    NpcId::CouncilMember3,
];

/// Spot on the Arreat Summit where the Ancients are fought one by one.
const ANCIENTS_RALLY: Position = Position::new(10_062, 12_639);

#[derive(Clone, Copy, Debug, Default)]
pub struct SorceressLeveling;

impl Archetype for SorceressLeveling {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::SorceressLeveling
    }

    fn stat_targets(&self, level: u32) -> StatTargets {
        if level < STAT_LEVEL {
            return StatTargets::new().with(StatKind::Vitality, UNBOUNDED);
        }
        StatTargets::new()
            .with(StatKind::Energy, 80)
            .with(StatKind::Strength, 60)
            .with(StatKind::Vitality, UNBOUNDED)
    }

    fn skill_plan(&self, level: u32) -> SkillPlan {
        if level < BLIZZARD_LEVEL {
            return SkillPlan::new(EARLY_SKILLS.to_vec());
        }
        let mut points = vec![SkillId::IceBolt, SkillId::Warmth];
        points.extend(std::iter::repeat_n(SkillId::Blizzard, BLIZZARD_POINTS));
        SkillPlan::new(points)
    }

    fn bind_plan(&self, player: &Player) -> BindPlan {
        let level = player.level();
        let learned = |skill| player.skill_level(skill) > 0;

        let mut skills = vec![SkillId::TomeOfTownPortal];
        if level >= 4 {
            skills.push(SkillId::FrozenArmor);
        }
        if level >= 6 {
            skills.push(SkillId::StaticField);
        }
        if level >= 18 {
            skills.push(SkillId::Teleport);
        }
        skills.push(if learned(SkillId::Blizzard) {
            SkillId::Blizzard
        } else {
            SkillId::IceBolt
        });

        let main = [SkillId::Blizzard, SkillId::IceBolt]
            .into_iter()
            .find(|skill| learned(*skill))
            .unwrap_or(SkillId::Attack);

        BindPlan { main, skills }
    }

    fn buff_skills(&self, bindings: &KeyBindings) -> Vec<SkillId> {
        BUFFS
            .iter()
            .copied()
            .filter(|skill| bindings.is_bound(*skill))
            .collect()
    }

    fn should_reset_skills(&self, player: &Player) -> bool {
        player.level() >= BLIZZARD_LEVEL && player.skill_level(SkillId::Blizzard) > 1
    }

    fn required_bindings(&self) -> &[SkillId] {
        REQUIRED
    }

    fn attack_tiers(&self) -> &[RangedTier] {
        TIERS
    }

    fn boss_tactic(&self, boss: Boss, difficulty: Difficulty, combat: &CombatConfig) -> BossTactic {
        let casts = if difficulty == Difficulty::Normal { 8 } else { 6 };
        let static_field = |distance| Opener {
            skill: SkillId::StaticField,
            casts,
            distance,
        };

        match boss {
            Boss::Countess => BossTactic::Standard(Quarry::new(NpcId::DarkStalker, MonsterType::SuperUnique)),
            Boss::Andariel => BossTactic::Standard(Quarry::new(NpcId::Andariel, MonsterType::Unique)),
            Boss::Summoner => BossTactic::Standard(Quarry::new(NpcId::Summoner, MonsterType::Unique)),
            Boss::Duriel => BossTactic::Opener {
                quarry: Quarry::new(NpcId::Duriel, MonsterType::Unique),
                opener: static_field(combat.close_boss),
            },
            Boss::Council => BossTactic::NearestOf(COUNCIL),
            Boss::Mephisto => BossTactic::Standard(Quarry::new(NpcId::Mephisto, MonsterType::Unique)),
            Boss::Izual => BossTactic::Opener {
                quarry: Quarry::new(NpcId::Izual, MonsterType::Unique),
                opener: static_field(combat.close_boss),
            },
            Boss::Diablo => BossTactic::TimedWait {
                quarry: Quarry::new(NpcId::Diablo, MonsterType::Unique),
                openers: vec![
                    Opener {
                        skill: SkillId::Blizzard,
                        casts: 1,
                        distance: combat.close_boss,
                    },
                    Opener {
                        skill: SkillId::IceBolt,
                        casts: 4,
                        distance: combat.close_boss,
                    },
                    static_field(combat.close_boss),
                ],
            },
            Boss::Pindleskin => {
                BossTactic::Standard(Quarry::new(NpcId::DefiledWarrior, MonsterType::SuperUnique))
            }
            Boss::Nihlathak => {
                BossTactic::Standard(Quarry::new(NpcId::Nihlathak, MonsterType::SuperUnique))
            }
            Boss::Ancients => BossTactic::Sequential {
                opener: static_field(DistanceRange::new(8, 10)),
                rally: ANCIENTS_RALLY,
            },
            Boss::Baal => BossTactic::Opener {
                quarry: Quarry::new(NpcId::BaalCrab, MonsterType::Unique),
                opener: static_field(DistanceRange::new(1, 4)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(level: i32) -> Player {
        let mut player = Player::default();
        player.stats.insert(StatKind::Level, level);
        player
    }

    #[test]
    fn level_ten_puts_everything_into_vitality() {
        let targets = SorceressLeveling.stat_targets(10);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets.target(StatKind::Vitality), Some(UNBOUNDED));
    }

    #[test]
    fn level_ten_skill_plan_continues_where_the_character_left_off() {
        let mut player = player(10);
        player.skills.insert(SkillId::IceBolt, 3);
        player.skills.insert(SkillId::FrozenArmor, 1);

        let plan = SorceressLeveling.skill_plan(10);
        let due = plan.due(&player);

        assert_eq!(due[0].position, 4);
        assert_eq!(due[0].skill, plan.points()[4]);
    }

    #[test]
    fn late_levels_cap_energy_and_strength() {
        let targets = SorceressLeveling.stat_targets(30);
        assert_eq!(targets.target(StatKind::Energy), Some(80));
        assert_eq!(targets.target(StatKind::Strength), Some(60));
        assert_eq!(targets.target(StatKind::Vitality), Some(UNBOUNDED));
    }

    #[test]
    fn late_plan_reinforces_blizzard() {
        let plan = SorceressLeveling.skill_plan(24);
        assert_eq!(&plan.points()[..2], &[SkillId::IceBolt, SkillId::Warmth]);
        assert!(plan.points()[2..].iter().all(|skill| *skill == SkillId::Blizzard));
        assert_eq!(plan.len(), 24);
    }

    #[test]
    fn bind_plan_grows_with_level_and_switches_to_blizzard() {
        let mut early = player(5);
        early.skills.insert(SkillId::IceBolt, 4);
        let plan = SorceressLeveling.bind_plan(&early);
        assert_eq!(
            plan.skills,
            vec![SkillId::TomeOfTownPortal, SkillId::FrozenArmor, SkillId::IceBolt]
        );
        assert_eq!(plan.main, SkillId::IceBolt);

        let mut late = player(26);
        late.skills.insert(SkillId::Blizzard, 3);
        let plan = SorceressLeveling.bind_plan(&late);
        assert_eq!(plan.skills.last(), Some(&SkillId::Blizzard));
        assert!(plan.skills.contains(&SkillId::Teleport));
        assert_eq!(plan.main, SkillId::Blizzard);
    }

    #[test]
    fn reset_only_after_blizzard_is_invested_at_level_24() {
        let mut player = player(24);
        assert!(!SorceressLeveling.should_reset_skills(&player));
        player.skills.insert(SkillId::Blizzard, 2);
        assert!(SorceressLeveling.should_reset_skills(&player));
    }

    #[test]
    fn opener_casts_depend_on_difficulty() {
        let combat = CombatConfig::default();
        for (difficulty, expected) in [(Difficulty::Normal, 8), (Difficulty::Hell, 6)] {
            let BossTactic::Opener { opener, .. } =
                SorceressLeveling.boss_tactic(Boss::Duriel, difficulty, &combat)
            else {
                panic!("duriel should open with static field");
            };
            assert_eq!(opener.casts, expected);
            assert_eq!(opener.distance, combat.close_boss);
        }
    }

    #[test]
    fn diablo_opener_prefers_blizzard_then_ice_bolt() {
        let combat = CombatConfig::default();
        let BossTactic::TimedWait { openers, .. } =
            SorceressLeveling.boss_tactic(Boss::Diablo, Difficulty::Normal, &combat)
        else {
            panic!("diablo should be waited for");
        };
        let order: Vec<(SkillId, u32)> = openers.iter().map(|o| (o.skill, o.casts)).collect();
        assert_eq!(
            order,
            vec![
                (SkillId::Blizzard, 1),
                (SkillId::IceBolt, 4),
                (SkillId::StaticField, 8)
            ]
        );
        assert!(openers.iter().all(|o| o.distance == combat.close_boss));
    }

    #[test]
    fn buffs_only_cast_when_bound() {
        let mut bindings = KeyBindings::with_free_slots(4);
        bindings.bind(game_core::KeySlot(0), SkillId::EnergyShield);
        assert_eq!(
            SorceressLeveling.buff_skills(&bindings),
            vec![SkillId::EnergyShield]
        );
    }
}
