//! Boss encounters.
//!
//! Every boss maps to one [`BossTactic`] built on top of the standard kill
//! loop. The archetype decides which tactic (and which opener) a boss gets.
use std::collections::VecDeque;

use action_chain::builder::{leaf, once, pause, until_empty_unbounded};
use game_core::{
    Action, AttackRequest, DistanceRange, MonsterType, NpcId, Position, SkillId, Snapshot, UnitId,
};
use tokio::time::Instant;

use super::kill_sequence;
use super::select::by_name;
use crate::context::{AgentContext, AgentNode};

/// Boss encounters the agent knows how to fight.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Boss {
    Countess,
    Andariel,
    Summoner,
    Duriel,
    Council,
    Mephisto,
    Izual,
    Diablo,
    Pindleskin,
    Nihlathak,
    Ancients,
    Baal,
}

/// A specific monster to hunt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quarry {
    pub name: NpcId,
    pub kind: MonsterType,
}

impl Quarry {
    pub const fn new(name: NpcId, kind: MonsterType) -> Self {
        Self { name, kind }
    }
}

/// A fixed number of casts of a debuff or control skill before the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opener {
    pub skill: SkillId,
    pub casts: u32,
    pub distance: DistanceRange,
}

impl Opener {
    fn request(&self, target: UnitId) -> AttackRequest {
        AttackRequest::skill(target, self.skill, self.casts, self.distance)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BossTactic {
    /// Plain kill loop.
    Standard(Quarry),
    /// Opening casts, then the kill loop.
    Opener { quarry: Quarry, opener: Opener },
    /// Wait for the boss to appear, hit it once with the first bound of
    /// `openers`, then run the kill loop.
    TimedWait { quarry: Quarry, openers: Vec<Opener> },
    /// Several adds sharing a role, nearest first.
    NearestOf(&'static [NpcId]),
    /// Every elite in turn: soften with the opener, move to `rally`, finish.
    Sequential { opener: Opener, rally: Position },
}

/// Builds the plan for one boss encounter.
pub fn boss_plan<'a>(ctx: AgentContext<'a>, boss: Boss, tactic: BossTactic) -> AgentNode<'a> {
    tracing::info!(%boss, ?tactic, "engaging boss");
    let ranged = ctx.config.combat.ranged;
    match tactic {
        BossTactic::Standard(quarry) => {
            kill_sequence(ctx, "kill_boss", by_name(quarry.name, quarry.kind), Vec::new(), ranged)
        }
        BossTactic::Opener { quarry, opener } => with_opener(ctx, quarry, opener),
        BossTactic::TimedWait { quarry, openers } => timed_wait(ctx, quarry, openers),
        BossTactic::NearestOf(names) => {
            kill_sequence(ctx, "kill_boss", super::select::nearest_of(names), Vec::new(), ranged)
        }
        BossTactic::Sequential { opener, rally } => sequential(ctx, opener, rally),
    }
}

fn with_opener<'a>(ctx: AgentContext<'a>, quarry: Quarry, opener: Opener) -> AgentNode<'a> {
    once("opener", move |snapshot: &Snapshot| {
        let selector = by_name(quarry.name, quarry.kind);
        let mut nodes = Vec::with_capacity(2);
        match selector(snapshot) {
            Some(target) => nodes.push(leaf(Action::Attack(opener.request(target)))),
            None => tracing::debug!(boss = %quarry.name, "boss not visible, skipping opener"),
        }
        nodes.push(kill_sequence(
            ctx,
            "kill_boss",
            selector,
            Vec::new(),
            ctx.config.combat.ranged,
        ));
        Ok(nodes)
    })
}

/// Polls for the boss until the boss wait elapses.
///
/// A sighting hands over to the opener and then the kill loop. A boss that
/// is already dead when first seen ends the wait as a success, as does a
/// timeout, which is only logged.
fn timed_wait<'a>(ctx: AgentContext<'a>, quarry: Quarry, openers: Vec<Opener>) -> AgentNode<'a> {
    let timeout = ctx.config.waits.boss;
    let poll = ctx.config.waits.poll;
    let mut started: Option<Instant> = None;
    let mut engaged = false;

    until_empty_unbounded("timed_wait", move |snapshot: &Snapshot| {
        if engaged {
            return Ok(Vec::new());
        }
        let waited = started.get_or_insert_with(Instant::now).elapsed();

        match snapshot.find_monster(quarry.name, quarry.kind) {
            Some(boss) if boss.is_alive() => {
                engaged = true;
                tracing::info!(boss = %quarry.name, "boss detected, attacking");
                let mut nodes = Vec::with_capacity(2);
                if let Some(opener) = openers
                    .iter()
                    .find(|opener| snapshot.key_bindings.is_bound(opener.skill))
                {
                    nodes.push(leaf(Action::Attack(opener.request(boss.id))));
                }
                nodes.push(kill_sequence(
                    ctx,
                    "kill_boss",
                    by_name(quarry.name, quarry.kind),
                    Vec::new(),
                    ctx.config.combat.ranged,
                ));
                Ok(nodes)
            }
            Some(_) => {
                tracing::info!(boss = %quarry.name, "boss already dead");
                Ok(Vec::new())
            }
            None if waited >= timeout => {
                tracing::error!(boss = %quarry.name, ?timeout, "boss was not found, timeout reached");
                Ok(Vec::new())
            }
            None => Ok(vec![pause(poll.min(timeout - waited))]),
        }
    })
}

/// Works through every elite visible when the encounter starts.
///
/// A candidate missing on its turn is retried once after the others; missing
/// twice, it is dropped.
fn sequential<'a>(ctx: AgentContext<'a>, opener: Opener, rally: Position) -> AgentNode<'a> {
    let mut queue: Option<VecDeque<(Quarry, bool)>> = None;

    until_empty_unbounded("sequential", move |snapshot: &Snapshot| {
        let queue = queue.get_or_insert_with(|| {
            let mut quarries: Vec<Quarry> = Vec::new();
            for elite in snapshot.elites() {
                let quarry = Quarry::new(elite.name, elite.kind);
                if !quarries.contains(&quarry) {
                    quarries.push(quarry);
                }
            }
            quarries.into_iter().map(|quarry| (quarry, false)).collect()
        });

        for _ in 0..queue.len() {
            let Some((quarry, missed)) = queue.pop_front() else {
                break;
            };
            let name = quarry.name;
            let selector = by_name(quarry.name, quarry.kind);
            match selector(snapshot) {
                Some(target) => {
                    return Ok(vec![
                        leaf(Action::Attack(opener.request(target))),
                        leaf(Action::MoveTo(rally)),
                        kill_sequence(ctx, "kill_boss", selector, Vec::new(), ctx.config.combat.ranged),
                    ]);
                }
                None if !missed => {
                    tracing::debug!(%name, "not visible, trying again later");
                    queue.push_back((quarry, true));
                }
                None => tracing::warn!(%name, "still not visible, skipping"),
            }
        }

        if queue.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![pause(ctx.config.waits.poll)])
        }
    })
}
