//! Multi-step procedures.
//!
//! A procedure is an ordered plan whose later steps depend on the side
//! effects of earlier ones. Steps are deferred chains, so anything they look
//! up (objects, NPCs, items) is read when the step runs, not when the plan is
//! built. A structural failure aborts the remaining steps and is reported
//! with the label path of the failing step.
//!
//! Procedures that leave their starting area carry a compensating step. It
//! runs after the main steps whether or not they succeeded and is best
//! effort: its own failure is logged and only surfaces when the main steps
//! succeeded.
mod cows;
mod maintenance;
mod menus;
mod travel;
mod wait;

pub use cows::{prepare_cow_portal, run_cows, wirts_leg};
pub use maintenance::{buff, buy_at_vendor, hire_merc, reset_skills, update_quest_log};
pub use menus::{close_all_menus, open_menu, wait_for_menu};
pub use travel::{interact_npc, interact_object, return_to, return_to_town, wait_for_area, waypoint};
pub use wait::{wait_for, wait_until};

use crate::context::AgentNode;

/// A named plan with an optional compensating step.
#[derive(Debug)]
pub struct Procedure<'a> {
    name: &'static str,
    steps: AgentNode<'a>,
    compensation: Option<AgentNode<'a>>,
}

impl<'a> Procedure<'a> {
    pub fn new(name: &'static str, steps: AgentNode<'a>) -> Self {
        Self {
            name,
            steps,
            compensation: None,
        }
    }

    /// Attaches a step that restores context after the main steps.
    pub fn compensate_with(mut self, node: AgentNode<'a>) -> Self {
        self.compensation = Some(node);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn into_parts(self) -> (AgentNode<'a>, Option<AgentNode<'a>>) {
        (self.steps, self.compensation)
    }
}
