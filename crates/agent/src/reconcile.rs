//! Progression reconciliation.
//!
//! Compares what the archetype wants (attribute targets, due skill points,
//! hotkeys) against the snapshot and issues the minimal set of UI actions to
//! close the gap. Every check re-reads the snapshot, so running a
//! reconciliation twice in a row issues nothing the second time.
use std::collections::BTreeSet;

use action_chain::builder::{leaf, once, until_empty};
use game_core::{Action, Hand, Menu, SkillId, Snapshot, UiElement};

use crate::context::{AgentContext, AgentNode};
use crate::procedure::{close_all_menus, open_menu, wait_for_menu};

/// Spends unspent attribute points on the first attribute below target.
///
/// One point per pass, until no points are left or every target is met.
pub fn ensure_stat_points<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("stat_points", move |snapshot: &Snapshot| {
        let player = &snapshot.player;
        if player.unspent_stat_points() == 0 {
            return Ok(Vec::new());
        }
        let targets = ctx.archetype.stat_targets(player.level());
        if targets.next_deficit(player).is_none() {
            tracing::debug!(unspent = player.unspent_stat_points(), "all stat targets met");
            return Ok(Vec::new());
        }

        Ok(vec![
            open_menu(ctx, Menu::Character),
            allocate_stats(ctx),
            close_all_menus(ctx),
        ])
    })
}

fn allocate_stats<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    let mut last_unspent: Option<u32> = None;

    until_empty("allocate", move |snapshot: &Snapshot| {
        let player = &snapshot.player;
        let unspent = player.unspent_stat_points();
        if unspent == 0 {
            return Ok(Vec::new());
        }
        if last_unspent.is_some_and(|last| unspent >= last) {
            tracing::warn!(unspent, "stat point was not spent, giving up");
            return Ok(Vec::new());
        }

        let targets = ctx.archetype.stat_targets(player.level());
        let Some(stat) = targets.next_deficit(player) else {
            return Ok(Vec::new());
        };
        last_unspent = Some(unspent);
        tracing::debug!(%stat, unspent, "allocating stat point");
        Ok(vec![leaf(Action::AllocateStat(stat))])
    })
}

/// Spends unspent skill points on the earliest due plan position.
///
/// Skills missing from the layout table are skipped with a warning; the
/// next due point is used instead.
pub fn ensure_skill_points<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("skill_points", move |snapshot: &Snapshot| {
        let player = &snapshot.player;
        if player.unspent_skill_points() == 0 {
            return Ok(Vec::new());
        }
        let due = ctx.archetype.skill_plan(player.level()).due(player);
        if due.is_empty() {
            tracing::debug!(unspent = player.unspent_skill_points(), "skill plan satisfied");
            return Ok(Vec::new());
        }

        Ok(vec![
            open_menu(ctx, Menu::SkillTree),
            allocate_skills(ctx),
            close_all_menus(ctx),
        ])
    })
}

fn allocate_skills<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    let mut last_unspent: Option<u32> = None;
    let mut unknown: BTreeSet<SkillId> = BTreeSet::new();

    until_empty("allocate", move |snapshot: &Snapshot| {
        let player = &snapshot.player;
        let unspent = player.unspent_skill_points();
        if unspent == 0 {
            return Ok(Vec::new());
        }
        if last_unspent.is_some_and(|last| unspent >= last) {
            tracing::warn!(unspent, "skill point was not spent, giving up");
            return Ok(Vec::new());
        }

        let plan = ctx.archetype.skill_plan(player.level());
        for point in plan.due(player) {
            let Some(layout) = ctx.env.skills().layout(point.skill) else {
                if unknown.insert(point.skill) {
                    tracing::warn!(skill = %point.skill, "no skill tree position, skipping");
                }
                continue;
            };

            last_unspent = Some(unspent);
            tracing::debug!(skill = %point.skill, position = point.position, "allocating skill point");
            return Ok(vec![
                leaf(Action::SelectSkillPage(layout.page)),
                leaf(Action::AllocateSkill {
                    skill: point.skill,
                    layout,
                }),
            ]);
        }
        Ok(Vec::new())
    })
}

/// Binds learned skills from the bind plan to free hotkeys and puts the
/// main skill on the left hand.
pub fn ensure_skill_bindings<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("skill_bindings", move |snapshot: &Snapshot| {
        let player = &snapshot.player;
        let bindings = &snapshot.key_bindings;
        let plan = ctx.archetype.bind_plan(player);

        let mut pending: Vec<SkillId> = Vec::new();
        for skill in plan.skills {
            if player.skill_level(skill) > 0 && !bindings.is_bound(skill) && !pending.contains(&skill) {
                pending.push(skill);
            }
        }

        let mut binds = Vec::new();
        let mut free = bindings.free_slots().into_iter();
        for skill in pending {
            let Some(layout) = ctx.env.skills().layout(skill) else {
                tracing::warn!(%skill, "no skill layout, not binding");
                continue;
            };
            if !layout.bindable_to(Hand::Right) {
                tracing::warn!(%skill, "skill cannot be put on the right hand");
                continue;
            }
            let Some(slot) = free.next() else {
                tracing::warn!(%skill, "no free key slot left");
                break;
            };
            binds.push(leaf(Action::BindSkill {
                skill,
                layout,
                slot,
            }));
        }

        let mut nodes = Vec::new();
        if !binds.is_empty() {
            tracing::info!(count = binds.len(), "binding skills");
            nodes.push(leaf(Action::ClickUi(UiElement::SecondarySkillButton)));
            nodes.push(wait_for_menu(ctx, Menu::SkillSelect, true));
            nodes.extend(binds);
            nodes.push(close_all_menus(ctx));
        }

        if player.left_skill != plan.main {
            match ctx.env.skills().layout(plan.main) {
                Some(layout) if layout.bindable_to(Hand::Left) => {
                    tracing::info!(skill = %plan.main, "setting main skill");
                    nodes.push(leaf(Action::ClickUi(UiElement::MainSkillButton)));
                    nodes.push(wait_for_menu(ctx, Menu::SkillSelect, true));
                    nodes.push(leaf(Action::SelectSkill {
                        hand: Hand::Left,
                        skill: plan.main,
                        layout,
                    }));
                    nodes.push(close_all_menus(ctx));
                }
                _ => tracing::debug!(skill = %plan.main, "main skill cannot go on the left hand"),
            }
        }

        Ok(nodes)
    })
}

/// Required skills without a hotkey.
pub fn missing_bindings(ctx: AgentContext<'_>, snapshot: &Snapshot) -> Vec<SkillId> {
    ctx.archetype
        .required_bindings()
        .iter()
        .copied()
        .filter(|skill| !snapshot.key_bindings.is_bound(*skill))
        .collect()
}
