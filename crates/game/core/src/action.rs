//! Abstract actions the agent can request.
//!
//! Actions name *what* should happen, never how. Translating them into input
//! events (key presses, clicks at screen coordinates, pointer moves) is the
//! executor's job, as is waiting for the game to acknowledge them.

use crate::env::SkillLayout;
use crate::state::{
    Area, Hand, ItemKind, KeySlot, Menu, NpcId, Position, SkillId, StatKind, UnitId,
};

/// Engagement distance window for an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceRange {
    pub min: u32,
    pub max: u32,
}

impl DistanceRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn contains(&self, distance: u32) -> bool {
        distance >= self.min && distance <= self.max
    }
}

/// One attack request against a single target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackRequest {
    pub target: UnitId,
    /// Skill to cast; `None` is the primary (close-range) attack.
    pub skill: Option<SkillId>,
    pub casts: u32,
    pub distance: DistanceRange,
}

impl AttackRequest {
    /// Close-range attack with the primary skill.
    pub const fn primary(target: UnitId, distance: DistanceRange) -> Self {
        Self {
            target,
            skill: None,
            casts: 1,
            distance,
        }
    }

    /// Bound-skill attack.
    pub const fn skill(target: UnitId, skill: SkillId, casts: u32, distance: DistanceRange) -> Self {
        Self {
            target,
            skill: Some(skill),
            casts,
            distance,
        }
    }

    pub const fn is_primary(&self) -> bool {
        self.skill.is_none()
    }
}

/// Something the character can interact with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractTarget {
    Npc(NpcId),
    Object(UnitId),
}

/// Keyboard keys used to drive dialog menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Home,
    Up,
    Down,
    Enter,
    Escape,
}

/// Fixed on-screen controls, resolved to coordinates by the executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UiElement {
    MainSkillButton,
    SecondarySkillButton,
    FirstMercInContractorList,
}

/// Purchase from a vendor's trade window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VendorRequest {
    pub npc: NpcId,
    pub item: ItemKind,
    pub quantity: u32,
    pub tab: u8,
}

/// A concrete, directly executable step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    MoveTo(Position),
    Interact {
        target: InteractTarget,
        position: Position,
    },
    Attack(AttackRequest),
    /// Cast a bound non-attack skill on self (buffs).
    CastSkill(SkillId),
    OpenMenu(Menu),
    CloseAllMenus,
    /// Spend one attribute point. Requires the character screen.
    AllocateStat(StatKind),
    /// Switch the skill tree to `page`. Requires the skill tree.
    SelectSkillPage(u8),
    /// Spend one skill point. Requires the skill tree on the layout's page.
    AllocateSkill {
        skill: SkillId,
        layout: SkillLayout,
    },
    /// Assign a hotkey to a skill. Requires the right-hand skill list.
    BindSkill {
        skill: SkillId,
        layout: SkillLayout,
        slot: KeySlot,
    },
    /// Pick `skill` from the open skill list for `hand`.
    SelectSkill {
        hand: Hand,
        skill: SkillId,
        layout: SkillLayout,
    },
    KeySequence(Vec<Key>),
    ClickUi(UiElement),
    /// Choose a destination in the open waypoint menu.
    TravelTo(Area),
    PickupItems {
        radius: u32,
    },
    BuyAtVendor(VendorRequest),
    CubeAddItems(Vec<UnitId>),
    CubeTransmute,
    ReturnToTown,
}

impl Action {
    /// Allocation actions touch the character's build.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Action::AllocateStat(_) | Action::AllocateSkill { .. })
    }
}
