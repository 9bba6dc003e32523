//! Target point distribution.
//!
//! A build is described by two pure values recomputed from the character
//! level on every reconciliation pass: minimum attribute values and the
//! ordered list of skill points the build should have spent so far. Neither
//! is ever persisted.
use std::collections::BTreeMap;

use game_core::{Player, SkillId, StatKind};

/// Target meaning "always spend free points here".
pub const UNBOUNDED: i32 = 9999;

/// Desired minimum value per attribute.
///
/// Iteration follows [`StatKind`] order; the order only affects which button
/// is clicked first, never the outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatTargets(BTreeMap<StatKind, i32>);

impl StatTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, stat: StatKind, target: i32) -> Self {
        self.0.insert(stat, target);
        self
    }

    pub fn target(&self, stat: StatKind) -> Option<i32> {
        self.0.get(&stat).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, i32)> + '_ {
        self.0.iter().map(|(stat, target)| (*stat, *target))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First attribute whose observed value is below its target.
    ///
    /// Attributes the snapshot does not report count as zero.
    pub fn next_deficit(&self, player: &Player) -> Option<StatKind> {
        self.iter()
            .find(|(stat, target)| player.stat(*stat).unwrap_or(0) < *target)
            .map(|(stat, _)| stat)
    }
}

/// One skill point the plan expects to have been spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuePoint {
    /// Zero-based position in the plan.
    pub position: usize,
    pub skill: SkillId,
}

/// Ordered skill point sequence; position `i` is the `i`-th point to spend.
///
/// Repeats are intentional and mean "spend again here".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkillPlan(Vec<SkillId>);

impl SkillPlan {
    pub fn new(points: Vec<SkillId>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[SkillId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Points that are due, in plan order.
    ///
    /// Position `i` is due when the number of occurrences of its skill in
    /// positions `0..=i` exceeds the observed level of that skill.
    pub fn due(&self, player: &Player) -> Vec<DuePoint> {
        let mut running: BTreeMap<SkillId, u32> = BTreeMap::new();
        let mut due = Vec::new();
        for (position, &skill) in self.0.iter().enumerate() {
            let count = running.entry(skill).or_insert(0);
            *count += 1;
            if player.skill_level(skill) < *count {
                due.push(DuePoint { position, skill });
            }
        }
        due
    }
}

impl From<Vec<SkillId>> for SkillPlan {
    fn from(points: Vec<SkillId>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: SkillId = SkillId::IceBolt;
    const B: SkillId = SkillId::FrozenArmor;

    fn player(a: u32, b: u32) -> Player {
        let mut player = Player::default();
        for (skill, level) in [(A, a), (B, b)] {
            if level > 0 {
                player.skills.insert(skill, level);
            }
        }
        player
    }

    fn positions(due: &[DuePoint]) -> Vec<(usize, SkillId)> {
        due.iter().map(|point| (point.position, point.skill)).collect()
    }

    #[test]
    fn running_count_marks_the_second_a_first() {
        let plan = SkillPlan::new(vec![A, A, B]);
        assert_eq!(positions(&plan.due(&player(1, 0))), vec![(1, A), (2, B)]);
    }

    #[test]
    fn satisfied_a_leaves_only_b() {
        let plan = SkillPlan::new(vec![A, A, B]);
        assert_eq!(positions(&plan.due(&player(2, 0))), vec![(2, B)]);
    }

    #[test]
    fn fully_allocated_plan_has_nothing_due() {
        let plan = SkillPlan::new(vec![A, A, B]);
        assert!(plan.due(&player(2, 1)).is_empty());
    }

    #[test]
    fn points_beyond_the_plan_are_not_due() {
        let plan = SkillPlan::new(vec![A]);
        assert!(plan.due(&player(5, 0)).is_empty());
    }

    #[test]
    fn deficit_follows_stat_order_and_treats_missing_as_zero() {
        let targets = StatTargets::new()
            .with(StatKind::Vitality, UNBOUNDED)
            .with(StatKind::Strength, 60);
        let mut player = Player::default();
        player.stats.insert(StatKind::Strength, 60);

        assert_eq!(targets.next_deficit(&player), Some(StatKind::Vitality));

        player.stats.insert(StatKind::Strength, 10);
        assert_eq!(targets.next_deficit(&player), Some(StatKind::Strength));
    }
}
