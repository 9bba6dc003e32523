//! Town chores between runs.
use action_chain::builder::{leaf, once, sequence};
use game_core::{Action, Area, Difficulty, Key, Menu, Snapshot, UiElement, VendorRequest};

use super::Procedure;
use super::menus::{close_all_menus, open_menu, wait_for_menu};
use super::travel::{interact_npc, return_to, waypoint};
use crate::context::{AgentContext, AgentNode};

/// Gold the character must hold (carried plus stash) before hiring.
pub const MERC_GOLD_THRESHOLD: u32 = 30_000;

/// Opens the quest log so the game refreshes quest state, then closes it.
pub fn update_quest_log<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    sequence(
        "update_quest_log",
        vec![open_menu(ctx, Menu::QuestLog), close_all_menus(ctx)],
    )
}

/// Hires the first mercenary offered by the local contractor.
///
/// Only on Normal difficulty, when enabled, with no living mercenary, more
/// than [`MERC_GOLD_THRESHOLD`] gold and a contractor in the current town.
pub fn hire_merc<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("hire_merc", move |snapshot: &Snapshot| {
        let config = ctx.config;
        if !config.use_merc || config.difficulty != Difficulty::Normal {
            return Ok(Vec::new());
        }
        let player = &snapshot.player;
        if player.merc_life_percent > 0 || player.total_gold() <= MERC_GOLD_THRESHOLD {
            return Ok(Vec::new());
        }
        let Some(contractor) = ctx.env.world().merc_contractor(player.area) else {
            tracing::debug!(area = %player.area, "no mercenary contractor here");
            return Ok(Vec::new());
        };

        tracing::info!(%contractor, "hiring mercenary");
        Ok(vec![
            interact_npc(ctx, contractor),
            leaf(Action::KeySequence(vec![Key::Home, Key::Down, Key::Enter])),
            wait_for_menu(ctx, Menu::MercList, true),
            // First click selects, second confirms.
            leaf(Action::ClickUi(UiElement::FirstMercInContractorList)),
            leaf(Action::ClickUi(UiElement::FirstMercInContractorList)),
            close_all_menus(ctx),
        ])
    })
}

/// Resets skill points at the trainer and returns to `origin` afterwards.
pub fn reset_skills<'a>(ctx: AgentContext<'a>, origin: Area) -> Procedure<'a> {
    let (home, trainer) = ctx.env.world().skill_trainer();
    let steps = sequence(
        "reset_skills",
        vec![
            waypoint(ctx, home),
            interact_npc(ctx, trainer),
            leaf(Action::KeySequence(vec![
                Key::Home,
                Key::Down,
                Key::Down,
                Key::Enter,
            ])),
            leaf(Action::KeySequence(vec![Key::Home, Key::Enter])),
            close_all_menus(ctx),
        ],
    );
    Procedure::new("reset_skills", steps).compensate_with(return_to(ctx, origin))
}

/// Casts every buff the archetype has bound.
pub fn buff<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("buff", move |snapshot: &Snapshot| {
        let skills = ctx.archetype.buff_skills(&snapshot.key_bindings);
        tracing::info!(?skills, "buffing");
        Ok(skills
            .into_iter()
            .map(|skill| leaf(Action::CastSkill(skill)))
            .collect())
    })
}

/// Talks to the vendor and buys `request`.
pub fn buy_at_vendor<'a>(ctx: AgentContext<'a>, request: VendorRequest) -> AgentNode<'a> {
    sequence(
        "buy_at_vendor",
        vec![
            interact_npc(ctx, request.npc),
            leaf(Action::BuyAtVendor(request)),
            close_all_menus(ctx),
        ],
    )
}
