use crate::state::{Hand, SkillId};

/// Where a skill sits in the skill tree and whether it can be bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLayout {
    /// Skill tree tab, 1-based.
    pub page: u8,
    /// Row within the tab, 1-based.
    pub row: u8,
    /// Column within the tab, 1-based.
    pub column: u8,
    /// Row in the skill selection list; `None` for skills that cannot be
    /// selected at all (passives).
    pub list_row: Option<u8>,
    pub left: bool,
    pub right: bool,
}

impl SkillLayout {
    /// Returns `true` if the skill can be put on `hand`.
    pub const fn bindable_to(&self, hand: Hand) -> bool {
        if self.list_row.is_none() {
            return false;
        }
        match hand {
            Hand::Left => self.left,
            Hand::Right => self.right,
        }
    }
}

/// Resolves skills to their layout metadata.
pub trait SkillOracle: Send + Sync {
    fn layout(&self, skill: SkillId) -> Option<SkillLayout>;
}
