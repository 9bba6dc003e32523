//! Moving between areas and interacting with things in them.
use action_chain::builder::{leaf, once};
use game_core::{Action, Area, InteractTarget, Menu, NpcId, ObjectKind, Snapshot};

use super::menus::wait_for_menu;
use super::wait::wait_for;
use crate::context::{AgentContext, AgentNode};
use crate::error::AgentError;

/// Travels to `area` through the waypoint network.
///
/// A no-op when already there. Fails with [`AgentError::NotFound`] when
/// `area` has no waypoint or no waypoint object is visible.
pub fn waypoint<'a>(ctx: AgentContext<'a>, area: Area) -> AgentNode<'a> {
    once("waypoint", move |snapshot: &Snapshot| {
        let here = snapshot.player.area;
        if here == area {
            return Ok(Vec::new());
        }
        if !ctx.env.world().has_waypoint(area) {
            return Err(AgentError::not_found(format!("waypoint to {area}")));
        }
        let object = snapshot
            .object(ObjectKind::Waypoint)
            .ok_or_else(|| AgentError::not_found(format!("waypoint in {here}")))?;

        tracing::info!(from = %here, to = %area, "taking waypoint");
        Ok(vec![
            leaf(Action::MoveTo(object.position)),
            leaf(Action::Interact {
                target: InteractTarget::Object(object.id),
                position: object.position,
            }),
            wait_for_menu(ctx, Menu::Waypoint, true),
            leaf(Action::TravelTo(area)),
            wait_for_area(ctx, area),
        ])
    })
}

/// Waits until the player stands in `area`.
pub fn wait_for_area<'a>(ctx: AgentContext<'a>, area: Area) -> AgentNode<'a> {
    let waits = &ctx.config.waits;
    wait_for(
        format!("arrival in {area}"),
        waits.area,
        waits.poll,
        move |snapshot: &Snapshot| snapshot.player.area == area,
    )
}

/// Walks to `npc` and opens its dialog.
pub fn interact_npc<'a>(ctx: AgentContext<'a>, npc: NpcId) -> AgentNode<'a> {
    once("interact_npc", move |snapshot: &Snapshot| {
        let found = snapshot
            .npc(npc)
            .ok_or_else(|| AgentError::not_found(format!("npc {npc}")))?;
        let position = found.position;

        let waits = &ctx.config.waits;
        Ok(vec![
            leaf(Action::MoveTo(position)),
            leaf(Action::Interact {
                target: InteractTarget::Npc(npc),
                position,
            }),
            wait_for(
                format!("{npc} dialog"),
                waits.interaction,
                waits.poll,
                |snapshot: &Snapshot| snapshot.open_menus.is_open(Menu::NpcInteract),
            ),
        ])
    })
}

/// Walks to the first visible object of `kind` and interacts with it until
/// `done` holds.
pub fn interact_object<'a, P>(ctx: AgentContext<'a>, kind: ObjectKind, done: P) -> AgentNode<'a>
where
    P: Fn(&Snapshot) -> bool + Clone + Send + 'a,
{
    once("interact_object", move |snapshot: &Snapshot| {
        let object = snapshot
            .object(kind)
            .ok_or_else(|| AgentError::not_found(format!("object {kind}")))?;

        let waits = &ctx.config.waits;
        Ok(vec![
            leaf(Action::MoveTo(object.position)),
            leaf(Action::Interact {
                target: InteractTarget::Object(object.id),
                position: object.position,
            }),
            wait_for(
                format!("{kind} interaction"),
                waits.interaction,
                waits.poll,
                done.clone(),
            ),
        ])
    })
}

/// Returns to the town of the current act unless already in a town.
pub fn return_to_town<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("return_to_town", move |snapshot: &Snapshot| {
        let world = ctx.env.world();
        if world.is_town(snapshot.player.area) {
            return Ok(Vec::new());
        }
        let waits = &ctx.config.waits;
        Ok(vec![
            leaf(Action::ReturnToTown),
            wait_for("town", waits.area, waits.poll, move |snapshot: &Snapshot| {
                world.is_town(snapshot.player.area)
            }),
        ])
    })
}

/// Compensating step: travels back to `origin` if the player left it.
pub fn return_to<'a>(ctx: AgentContext<'a>, origin: Area) -> AgentNode<'a> {
    once("return_to_origin", move |snapshot: &Snapshot| {
        if snapshot.player.area == origin {
            return Ok(Vec::new());
        }
        tracing::info!(from = %snapshot.player.area, to = %origin, "returning to origin");
        Ok(vec![waypoint(ctx, origin)])
    })
}
