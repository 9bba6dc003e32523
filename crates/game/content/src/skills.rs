//! Skill tree layout table.
use std::collections::HashMap;

use game_core::{SkillId, SkillLayout, SkillOracle};

/// [`SkillOracle`] backed by an in-memory map.
#[derive(Debug, Clone)]
pub struct SkillTable {
    layouts: HashMap<SkillId, SkillLayout>,
}

/// Compact row of the built-in table: skill, page, row, column, list row,
/// left-bindable, right-bindable.
type Row = (SkillId, u8, u8, u8, Option<u8>, bool, bool);

const SORCERESS: &[Row] = &[
    (SkillId::Attack, 0, 0, 0, Some(0), true, true),
    // Fire spells
    (SkillId::FireBolt, 1, 1, 2, Some(1), true, true),
    (SkillId::Warmth, 1, 1, 3, None, false, false),
    (SkillId::Inferno, 1, 2, 1, Some(1), false, true),
    (SkillId::Blaze, 1, 3, 1, Some(1), false, true),
    (SkillId::FireBall, 1, 3, 2, Some(1), true, true),
    (SkillId::FireWall, 1, 4, 1, Some(1), false, true),
    (SkillId::Enchant, 1, 4, 3, Some(1), false, true),
    (SkillId::Meteor, 1, 5, 2, Some(1), true, true),
    (SkillId::FireMastery, 1, 6, 2, None, false, false),
    (SkillId::Hydra, 1, 6, 3, Some(1), false, true),
    // Lightning spells
    (SkillId::ChargedBolt, 2, 1, 2, Some(2), true, true),
    (SkillId::StaticField, 2, 2, 1, Some(2), false, true),
    (SkillId::Telekinesis, 2, 2, 3, Some(2), false, true),
    (SkillId::Nova, 2, 3, 1, Some(2), false, true),
    (SkillId::Lightning, 2, 3, 2, Some(2), true, true),
    (SkillId::ChainLightning, 2, 4, 2, Some(2), true, true),
    (SkillId::Teleport, 2, 4, 3, Some(2), false, true),
    (SkillId::ThunderStorm, 2, 5, 1, Some(2), false, true),
    (SkillId::EnergyShield, 2, 5, 3, Some(2), false, true),
    (SkillId::LightningMastery, 2, 6, 2, None, false, false),
    // Cold spells
    (SkillId::IceBolt, 3, 1, 2, Some(3), true, true),
    (SkillId::FrozenArmor, 3, 1, 3, Some(3), false, true),
    (SkillId::FrostNova, 3, 2, 1, Some(3), false, true),
    (SkillId::IceBlast, 3, 2, 2, Some(3), true, true),
    (SkillId::ShiverArmor, 3, 3, 3, Some(3), false, true),
    (SkillId::GlacialSpike, 3, 4, 2, Some(3), true, true),
    (SkillId::Blizzard, 3, 5, 1, Some(3), true, true),
    (SkillId::ChillingArmor, 3, 5, 3, Some(3), false, true),
    (SkillId::FrozenOrb, 3, 6, 1, Some(3), true, true),
    (SkillId::ColdMastery, 3, 6, 2, None, false, false),
    // Item skills live in the selection list only
    (SkillId::TomeOfTownPortal, 0, 0, 1, Some(4), false, true),
    (SkillId::ScrollOfTownPortal, 0, 0, 2, Some(4), false, true),
    (SkillId::TomeOfIdentify, 0, 0, 3, Some(4), false, true),
    (SkillId::ScrollOfIdentify, 0, 0, 4, Some(4), false, true),
];

impl SkillTable {
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Layout of the sorceress skill tree plus the bindable item skills.
    pub fn sorceress() -> Self {
        let mut table = Self::new();
        for &(skill, page, row, column, list_row, left, right) in SORCERESS {
            table.insert(
                skill,
                SkillLayout {
                    page,
                    row,
                    column,
                    list_row,
                    left,
                    right,
                },
            );
        }
        table
    }

    pub fn insert(&mut self, skill: SkillId, layout: SkillLayout) {
        self.layouts.insert(skill, layout);
    }

    /// Drops the layout of `skill`, making it unknown to the oracle.
    pub fn remove(&mut self, skill: SkillId) -> Option<SkillLayout> {
        self.layouts.remove(&skill)
    }
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::sorceress()
    }
}

impl SkillOracle for SkillTable {
    fn layout(&self, skill: SkillId) -> Option<SkillLayout> {
        self.layouts.get(&skill).copied()
    }
}

#[cfg(test)]
mod tests {
    use game_core::Hand;

    use super::*;

    #[test]
    fn every_tree_skill_sits_on_a_real_page() {
        let table = SkillTable::sorceress();
        for &(skill, ..) in SORCERESS {
            if skill == SkillId::Attack || skill.is_item_skill() {
                continue;
            }
            let layout = table.layout(skill).unwrap();
            assert!((1..=3).contains(&layout.page), "{skill:?}");
            assert!((1..=6).contains(&layout.row), "{skill:?}");
            assert!((1..=3).contains(&layout.column), "{skill:?}");
        }
    }

    #[test]
    fn passives_cannot_be_bound() {
        let warmth = SkillTable::sorceress().layout(SkillId::Warmth).unwrap();
        assert!(!warmth.bindable_to(Hand::Left));
        assert!(!warmth.bindable_to(Hand::Right));
    }

    #[test]
    fn removed_skills_are_unknown() {
        let mut table = SkillTable::sorceress();
        table.remove(SkillId::Telekinesis);
        assert_eq!(table.layout(SkillId::Telekinesis), None);
        assert!(table.layout(SkillId::IceBolt).is_some());
    }
}
