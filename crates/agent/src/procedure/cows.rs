//! The secret cow level run.
//!
//! Fetch the leg from Tristram (unless it is already held), cube it with a
//! freshly bought town portal tome, walk through the resulting portal and
//! clear the level.
use std::time::Duration;

use action_chain::builder::{leaf, once, pause, sequence};
use game_core::{
    Action, Area, ItemKind, ItemLocation, NpcId, ObjectKind, Snapshot, UnitId, VendorRequest,
};

use super::maintenance::{buff, buy_at_vendor};
use super::travel::{interact_object, return_to_town, waypoint};
use crate::combat::clear_area;
use crate::context::{AgentContext, AgentNode};

/// Fetches Wirt's leg from Tristram unless it is already in the stash or
/// inventory.
pub fn wirts_leg<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("wirts_leg", move |snapshot: &Snapshot| {
        let held = snapshot.find_item(
            ItemKind::WirtsLeg,
            &[ItemLocation::Stash, ItemLocation::Inventory],
        );
        if held.is_some() {
            tracing::info!("wirt's leg already held, skipping tristram");
            return Ok(Vec::new());
        }

        Ok(vec![
            waypoint(ctx, Area::StonyField),
            once("cairn_stones", |snapshot: &Snapshot| {
                Ok(snapshot
                    .object(ObjectKind::CairnStoneAlpha)
                    .map(|stone| vec![leaf(Action::MoveTo(stone.position))])
                    .unwrap_or_default())
            }),
            clear_area(ctx, Some(10)),
            leaf(Action::PickupItems { radius: 15 }),
            interact_object(ctx, ObjectKind::PermanentTownPortal, |snapshot: &Snapshot| {
                snapshot.player.area == Area::Tristram
            }),
            pause(Duration::from_secs(1)),
            interact_object(ctx, ObjectKind::WirtCorpse, |snapshot: &Snapshot| {
                snapshot.find_item(ItemKind::WirtsLeg, &[]).is_some()
            }),
            leaf(Action::PickupItems { radius: 30 }),
            return_to_town(ctx),
        ])
    })
}

/// Buys a fresh tome and transmutes it with the leg.
///
/// The tome used for regular town portals is left alone: the plan records
/// the tomes held before buying and cubes the one that was not among them.
pub fn prepare_cow_portal<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("prepare_portal", move |snapshot: &Snapshot| {
        let Some(leg) = snapshot.find_item(ItemKind::WirtsLeg, &[]) else {
            tracing::error!("wirt's leg could not be found, portal cannot be opened");
            return Ok(Vec::new());
        };
        let leg = leg.id;
        let held: Vec<UnitId> = town_portal_tomes(snapshot).collect();

        Ok(vec![
            buy_at_vendor(
                ctx,
                VendorRequest {
                    npc: NpcId::Akara,
                    item: ItemKind::TomeOfTownPortal,
                    quantity: 1,
                    tab: 4,
                },
            ),
            once("cube_leg", move |snapshot: &Snapshot| {
                let Some(tome) = town_portal_tomes(snapshot)
                    .filter(|id| !held.contains(id))
                    .last()
                else {
                    tracing::error!("new town portal tome not found, portal cannot be opened");
                    return Ok(Vec::new());
                };
                Ok(vec![
                    leaf(Action::CubeAddItems(vec![leg, tome])),
                    leaf(Action::CubeTransmute),
                ])
            }),
        ])
    })
}

/// Full cow level run.
pub fn run_cows<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    sequence(
        "cows",
        vec![
            wirts_leg(ctx),
            prepare_cow_portal(ctx),
            interact_object(ctx, ObjectKind::PermanentTownPortal, |snapshot: &Snapshot| {
                snapshot.player.area == Area::MooMooFarm
            }),
            buff(ctx),
            clear_area(ctx, None),
        ],
    )
}

fn town_portal_tomes(snapshot: &Snapshot) -> impl Iterator<Item = UnitId> + '_ {
    snapshot
        .items_in(ItemLocation::Inventory)
        .filter(|item| item.kind == ItemKind::TomeOfTownPortal)
        .map(|item| item.id)
}
