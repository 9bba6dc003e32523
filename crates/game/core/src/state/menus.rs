use bitflags::bitflags;

bitflags! {
    /// Set of in-game menus currently open.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct OpenMenus: u16 {
        const CHARACTER = 1 << 0;
        const SKILL_TREE = 1 << 1;
        const INVENTORY = 1 << 2;
        const QUEST_LOG = 1 << 3;
        const NPC_INTERACT = 1 << 4;
        const NPC_SHOP = 1 << 5;
        const CUBE = 1 << 6;
        const SKILL_SELECT = 1 << 7;
        const WAYPOINT = 1 << 8;
        const MERC_LIST = 1 << 9;
    }
}

impl OpenMenus {
    #[inline]
    pub fn is_open(self, menu: Menu) -> bool {
        self.contains(menu.flag())
    }

    #[inline]
    pub fn any_open(self) -> bool {
        !self.is_empty()
    }

    /// First open menu in declaration order.
    pub fn first_open(self) -> Option<Menu> {
        use strum::IntoEnumIterator;

        Menu::iter().find(|menu| self.is_open(*menu))
    }
}

/// A single menu the agent can ask to open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Menu {
    Character,
    SkillTree,
    Inventory,
    QuestLog,
    NpcInteract,
    NpcShop,
    Cube,
    SkillSelect,
    Waypoint,
    MercList,
}

impl Menu {
    pub const fn flag(self) -> OpenMenus {
        match self {
            Menu::Character => OpenMenus::CHARACTER,
            Menu::SkillTree => OpenMenus::SKILL_TREE,
            Menu::Inventory => OpenMenus::INVENTORY,
            Menu::QuestLog => OpenMenus::QUEST_LOG,
            Menu::NpcInteract => OpenMenus::NPC_INTERACT,
            Menu::NpcShop => OpenMenus::NPC_SHOP,
            Menu::Cube => OpenMenus::CUBE,
            Menu::SkillSelect => OpenMenus::SKILL_SELECT,
            Menu::Waypoint => OpenMenus::WAYPOINT,
            Menu::MercList => OpenMenus::MERC_LIST,
        }
    }
}
