/// Skill identifier.
///
/// Covers the sorceress trees plus the item "skills" (tomes and scrolls)
/// that occupy key bindings.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillId {
    /// Basic weapon attack.
    #[default]
    Attack,
    // Fire
    FireBolt,
    Warmth,
    Inferno,
    Blaze,
    FireBall,
    FireWall,
    Enchant,
    Meteor,
    FireMastery,
    Hydra,
    // Lightning
    ChargedBolt,
    StaticField,
    Telekinesis,
    Nova,
    Lightning,
    ChainLightning,
    Teleport,
    ThunderStorm,
    EnergyShield,
    LightningMastery,
    // Cold
    IceBolt,
    FrozenArmor,
    FrostNova,
    IceBlast,
    ShiverArmor,
    GlacialSpike,
    Blizzard,
    ChillingArmor,
    FrozenOrb,
    ColdMastery,
    // Items
    TomeOfTownPortal,
    ScrollOfTownPortal,
    TomeOfIdentify,
    ScrollOfIdentify,
}

impl SkillId {
    /// Tomes and scrolls are bound like skills but never allocated.
    pub const fn is_item_skill(self) -> bool {
        matches!(
            self,
            Self::TomeOfTownPortal
                | Self::ScrollOfTownPortal
                | Self::TomeOfIdentify
                | Self::ScrollOfIdentify
        )
    }
}

/// Mouse button a skill is assigned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Hand {
    Left,
    Right,
}

/// Index of a skill hotkey slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySlot(pub u8);

/// One skill hotkey slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillBinding {
    pub slot: KeySlot,
    /// Skill bound to this slot, if any.
    pub skill: Option<SkillId>,
    /// Whether a physical key is assigned to the slot.
    pub has_key: bool,
}

/// Skill hotkey table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct KeyBindings {
    pub slots: Vec<SkillBinding>,
}

impl KeyBindings {
    pub fn new(slots: Vec<SkillBinding>) -> Self {
        Self { slots }
    }

    /// Creates `count` keyed slots with nothing bound.
    pub fn with_free_slots(count: u8) -> Self {
        Self::new(
            (0..count)
                .map(|i| SkillBinding {
                    slot: KeySlot(i),
                    skill: None,
                    has_key: true,
                })
                .collect(),
        )
    }

    /// Returns the slot that triggers `skill`, if it is bound to a real key.
    pub fn binding_for(&self, skill: SkillId) -> Option<KeySlot> {
        self.slots
            .iter()
            .find(|binding| binding.has_key && binding.skill == Some(skill))
            .map(|binding| binding.slot)
    }

    #[inline]
    pub fn is_bound(&self, skill: SkillId) -> bool {
        self.binding_for(skill).is_some()
    }

    /// Slots with a key assigned but no skill, in slot order.
    pub fn free_slots(&self) -> Vec<KeySlot> {
        self.slots
            .iter()
            .filter(|binding| binding.has_key && binding.skill.is_none())
            .map(|binding| binding.slot)
            .collect()
    }

    /// Binds `skill` to `slot`, replacing whatever was there.
    pub fn bind(&mut self, slot: KeySlot, skill: SkillId) {
        for binding in &mut self.slots {
            if binding.skill == Some(skill) {
                binding.skill = None;
            }
        }
        if let Some(binding) = self.slots.iter_mut().find(|binding| binding.slot == slot) {
            binding.skill = Some(skill);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unkeyed_slots_neither_bind_nor_count_as_free() {
        let bindings = KeyBindings::new(vec![
            SkillBinding {
                slot: KeySlot(0),
                skill: Some(SkillId::Blizzard),
                has_key: false,
            },
            SkillBinding {
                slot: KeySlot(1),
                skill: None,
                has_key: false,
            },
            SkillBinding {
                slot: KeySlot(2),
                skill: None,
                has_key: true,
            },
        ]);

        assert!(!bindings.is_bound(SkillId::Blizzard));
        assert_eq!(bindings.free_slots(), vec![KeySlot(2)]);
    }

    #[test]
    fn rebinding_moves_the_skill() {
        let mut bindings = KeyBindings::with_free_slots(3);
        bindings.bind(KeySlot(0), SkillId::IceBolt);
        bindings.bind(KeySlot(2), SkillId::IceBolt);

        assert_eq!(bindings.binding_for(SkillId::IceBolt), Some(KeySlot(2)));
        assert_eq!(bindings.free_slots(), vec![KeySlot(0), KeySlot(1)]);
    }
}
