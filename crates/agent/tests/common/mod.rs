//! Shared fixtures for agent integration tests.
#![allow(dead_code)]

use game_content::Content;
use game_core::{
    Action, Area, Difficulty, KeyBindings, Monster, MonsterType, NpcId, ObjectKind, Player,
    Position, SkillId, StatKind, UnitId, WorldObject,
};
use leveling_agent::archetype::{Archetype, ArchetypeKind, BindPlan, SorceressLeveling};
use leveling_agent::combat::{Boss, BossTactic, RangedTier};
use leveling_agent::policy::{SkillPlan, StatTargets};
use leveling_agent::{Agent, AgentConfig, CombatConfig};
use sim_world::SimWorld;

pub fn player(level: i32) -> Player {
    let mut player = Player {
        area: Area::RogueEncampment,
        ..Player::default()
    };
    player.stats.insert(StatKind::Level, level);
    player.stats.insert(StatKind::Mana, 100);
    player.stats.insert(StatKind::MaxMana, 100);
    player
}

pub fn monster(id: u32, name: NpcId, life: i32, x: i32) -> Monster {
    Monster {
        id: UnitId(id),
        name,
        kind: MonsterType::Normal,
        position: Position::new(x, 0),
        life,
        ..Monster::default()
    }
}

pub fn boss(id: u32, name: NpcId, kind: MonsterType, life: i32) -> Monster {
    Monster {
        kind,
        ..monster(id, name, life, 20)
    }
}

pub fn object(id: u32, kind: ObjectKind) -> WorldObject {
    WorldObject {
        id: UnitId(id),
        kind,
        position: Position::new(id as i32, 5),
    }
}

/// Eight free hotkeys with `bound` in the first slots.
pub fn bindings(bound: &[SkillId]) -> KeyBindings {
    let mut bindings = KeyBindings::with_free_slots(8);
    for (slot, skill) in bound.iter().enumerate() {
        bindings.bind(game_core::KeySlot(slot as u8), *skill);
    }
    bindings
}

pub fn agent(world: SimWorld, content: &Content) -> Agent<'_, SimWorld> {
    Agent::new(world, content.env(), AgentConfig::default())
}

pub fn agent_with(
    world: SimWorld,
    content: &Content,
    archetype: impl Archetype + 'static,
) -> Agent<'_, SimWorld> {
    Agent::with_archetype(world, content.env(), AgentConfig::default(), Box::new(archetype))
}

pub fn attacks(actions: &[Action]) -> Vec<&game_core::AttackRequest> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::Attack(request) => Some(request),
            _ => None,
        })
        .collect()
}

static SORCERESS: SorceressLeveling = SorceressLeveling;

/// Sorceress with a fixed skill plan.
pub struct FixedPlan(pub Vec<SkillId>);

impl Archetype for FixedPlan {
    fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::SorceressLeveling
    }

    fn stat_targets(&self, level: u32) -> StatTargets {
        SORCERESS.stat_targets(level)
    }

    fn skill_plan(&self, _level: u32) -> SkillPlan {
        SkillPlan::new(self.0.clone())
    }

    fn bind_plan(&self, player: &Player) -> BindPlan {
        SORCERESS.bind_plan(player)
    }

    fn buff_skills(&self, bindings: &KeyBindings) -> Vec<SkillId> {
        SORCERESS.buff_skills(bindings)
    }

    fn should_reset_skills(&self, player: &Player) -> bool {
        SORCERESS.should_reset_skills(player)
    }

    fn required_bindings(&self) -> &[SkillId] {
        SORCERESS.required_bindings()
    }

    fn attack_tiers(&self) -> &[RangedTier] {
        SORCERESS.attack_tiers()
    }

    fn boss_tactic(&self, boss: Boss, difficulty: Difficulty, combat: &CombatConfig) -> BossTactic {
        SORCERESS.boss_tactic(boss, difficulty, combat)
    }
}
