//! Menu handling.
use action_chain::builder::{leaf, once};
use game_core::{Action, Menu, Snapshot};

use super::wait::wait_until;
use crate::context::{AgentContext, AgentNode};
use crate::error::AgentError;

/// Waits until `menu` is open (or closed).
pub fn wait_for_menu<'a>(ctx: AgentContext<'a>, menu: Menu, open: bool) -> AgentNode<'a> {
    wait_until(
        "wait_menu",
        ctx.config.waits.menu,
        ctx.config.waits.poll,
        move |snapshot: &Snapshot| snapshot.open_menus.is_open(menu) == open,
        move |_| AgentError::MenuState {
            menu,
            expected_open: open,
        },
    )
}

/// Opens `menu` unless it is already open.
pub fn open_menu<'a>(ctx: AgentContext<'a>, menu: Menu) -> AgentNode<'a> {
    once("open_menu", move |snapshot: &Snapshot| {
        if snapshot.open_menus.is_open(menu) {
            return Ok(Vec::new());
        }
        Ok(vec![leaf(Action::OpenMenu(menu)), wait_for_menu(ctx, menu, true)])
    })
}

/// Closes every open menu; a no-op when none is open.
pub fn close_all_menus<'a>(ctx: AgentContext<'a>) -> AgentNode<'a> {
    once("close_menus", move |snapshot: &Snapshot| {
        if !snapshot.open_menus.any_open() {
            return Ok(Vec::new());
        }
        let waits = &ctx.config.waits;
        Ok(vec![
            leaf(Action::CloseAllMenus),
            wait_until(
                "wait_menu",
                waits.menu,
                waits.poll,
                |snapshot: &Snapshot| !snapshot.open_menus.any_open(),
                move |snapshot: &Snapshot| match snapshot.open_menus.first_open() {
                    Some(menu) => AgentError::MenuState {
                        menu,
                        expected_open: false,
                    },
                    None => AgentError::Timeout {
                        what: "menus to close".to_owned(),
                        after: waits.menu,
                    },
                },
            ),
        ])
    })
}
