//! Combat decision loop.
//!
//! One encounter is a repeating chain: every pass takes a fresh snapshot,
//! runs the selector, and either issues exactly one attack request or ends
//! the encounter. Nothing is planned beyond the next request, so a target
//! that died or mana that recovered changes the very next decision.
mod boss;
mod engagement;
mod select;
mod tier;

pub use boss::{Boss, BossTactic, Opener, Quarry, boss_plan};
pub use engagement::{Decision, Engagement};
pub use select::{Selector, by_name, nearest, nearest_of, nearest_within};
pub use tier::{RangedTier, TierChoice, select_tier};

use action_chain::builder::{leaf, until_empty_unbounded};
use game_core::{Action, DistanceRange, Resist, Snapshot};

use crate::context::{AgentContext, AgentNode};

/// Kill loop against whatever `selector` picks.
///
/// Ends when the selector finds nothing, when the candidate is immune to a
/// resistance in `skip_on_immunities`, or when the attack ceiling is reached
/// against one target.
pub fn kill_monster_sequence<'a, S>(
    ctx: AgentContext<'a>,
    selector: S,
    skip_on_immunities: Vec<Resist>,
) -> AgentNode<'a>
where
    S: Selector + 'a,
{
    kill_sequence(
        ctx,
        "kill_monster_sequence",
        selector,
        skip_on_immunities,
        ctx.config.combat.ranged,
    )
}

/// Kills every monster within `radius` of the player (anywhere when `None`),
/// nearest first.
pub fn clear_area<'a>(ctx: AgentContext<'a>, radius: Option<u32>) -> AgentNode<'a> {
    kill_sequence(
        ctx,
        "clear_area",
        nearest_within(radius),
        Vec::new(),
        ctx.config.combat.ranged,
    )
}

/// The standard kill loop. It ends itself on every [`Decision`] other than
/// an attack, so it runs outside the evaluator's pass limit.
pub(crate) fn kill_sequence<'a, S>(
    ctx: AgentContext<'a>,
    label: &'static str,
    selector: S,
    skip_on_immunities: Vec<Resist>,
    ranged: DistanceRange,
) -> AgentNode<'a>
where
    S: Selector + 'a,
{
    let combat = &ctx.config.combat;
    let tiers = ctx.archetype.attack_tiers();
    let mut engagement = Engagement::new(combat.attack_ceiling);

    until_empty_unbounded(label, move |snapshot: &Snapshot| {
        let candidate = selector(snapshot);
        let decision = engagement.next(snapshot, candidate, &skip_on_immunities, |monster| {
            select_tier(snapshot, tiers, combat).request(monster.id, combat, ranged)
        });

        match decision {
            Decision::Attack(request) => Ok(vec![leaf(Action::Attack(request))]),
            Decision::Resolved => {
                tracing::debug!(label, "no target left");
                Ok(Vec::new())
            }
            Decision::Skipped(id) => {
                tracing::debug!(label, %id, "target skipped");
                Ok(Vec::new())
            }
            Decision::Stalled(id) => {
                tracing::warn!(label, %id, attacks = engagement.attacks(), "attack ceiling reached");
                Ok(Vec::new())
            }
        }
    })
}
