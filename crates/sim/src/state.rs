//! Mutable world state and the rules that apply actions to it.
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use game_core::{
    Action, Area, AttackRequest, ClientError, Hand, InteractTarget, Item, ItemKind, ItemLocation,
    Key, KeyBindings, Menu, Monster, Npc, NpcId, ObjectKind, OpenMenus, Player, SkillId, Snapshot,
    StatKind, UiElement, UnitId, VendorRequest, WorldObject,
};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Price of the first mercenary on the list.
pub const MERC_PRICE: i32 = 5_000;

const TOWNS: &[Area] = &[
    Area::RogueEncampment,
    Area::LutGholein,
    Area::KurastDocks,
    Area::ThePandemoniumFortress,
    Area::Harrogath,
];

const HIRE_DIALOG: &[Key] = &[Key::Home, Key::Down, Key::Enter];
const RESET_DIALOG: &[Key] = &[Key::Home, Key::Down, Key::Down, Key::Enter];
const CONFIRM: &[Key] = &[Key::Home, Key::Enter];

/// Everything placed in one area.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaContent {
    pub monsters: Vec<Monster>,
    pub npcs: Vec<Npc>,
    pub objects: Vec<WorldObject>,
    /// Items lying on the ground.
    pub items: Vec<Item>,
}

pub(crate) type ActionFilter = Box<dyn Fn(&Action) -> bool + Send + Sync>;

pub(crate) struct Spawn {
    pub at: Instant,
    pub area: Area,
    pub monster: Monster,
}

pub(crate) struct SimState {
    pub player: Player,
    pub open_menus: OpenMenus,
    pub key_bindings: KeyBindings,
    /// Items held by the player (inventory, stash, cube).
    pub items: Vec<Item>,
    pub areas: BTreeMap<Area, AreaContent>,
    /// Destination of every town portal object.
    pub portals: BTreeMap<UnitId, Area>,
    pub spawns: Vec<Spawn>,
    pub ignored: Vec<ActionFilter>,
    pub rejected: Vec<ActionFilter>,
    pub executed: Vec<Action>,
    pub attack_damage: i32,
    /// Monsters farther than this from the player are left out of snapshots.
    pub sight: Option<u32>,
    /// Game time every action takes.
    pub action_time: Duration,
    skill_page: Option<u8>,
    talking_to: Option<NpcId>,
    reset_requested: bool,
    merc_selected: bool,
    looted: BTreeSet<UnitId>,
    next_id: u32,
}

impl SimState {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            open_menus: OpenMenus::empty(),
            key_bindings: KeyBindings::with_free_slots(8),
            items: Vec::new(),
            areas: BTreeMap::new(),
            portals: BTreeMap::new(),
            spawns: Vec::new(),
            ignored: Vec::new(),
            rejected: Vec::new(),
            executed: Vec::new(),
            attack_damage: 100,
            sight: None,
            action_time: Duration::ZERO,
            skill_page: None,
            talking_to: None,
            reset_requested: false,
            merc_selected: false,
            looted: BTreeSet::new(),
            next_id: 10_000,
        }
    }

    pub fn area_mut(&mut self, area: Area) -> &mut AreaContent {
        self.areas.entry(area).or_default()
    }

    /// Moves due spawns into their areas.
    pub fn release_spawns(&mut self, now: Instant) {
        let (due, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.spawns).into_iter().partition(|spawn| spawn.at <= now);
        self.spawns = pending;
        for spawn in due {
            tracing::debug!(area = %spawn.area, monster = %spawn.monster.name, "monster spawned");
            self.area_mut(spawn.area).monsters.push(spawn.monster);
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let here = self.areas.get(&self.player.area);
        let mut items = self.items.clone();
        if let Some(content) = here {
            items.extend(content.items.iter().copied());
        }
        Snapshot {
            player: self.player.clone(),
            monsters: here
                .map(|c| {
                    c.monsters
                        .iter()
                        .filter(|monster| self.in_sight(monster))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default(),
            npcs: here.map(|c| c.npcs.clone()).unwrap_or_default(),
            objects: here.map(|c| c.objects.clone()).unwrap_or_default(),
            items,
            open_menus: self.open_menus,
            key_bindings: self.key_bindings.clone(),
        }
    }

    fn in_sight(&self, monster: &Monster) -> bool {
        self.sight
            .is_none_or(|radius| self.player.position.distance(monster.position) <= radius)
    }

    pub fn apply(&mut self, action: &Action) -> Result<(), ClientError> {
        self.executed.push(action.clone());

        if self.rejected.iter().any(|filter| filter(action)) {
            return Err(ClientError::rejected(format!("{action:?} refused")));
        }
        if self.ignored.iter().any(|filter| filter(action)) {
            tracing::debug!(?action, "acknowledged without effect");
            return Ok(());
        }

        match action {
            Action::MoveTo(position) => self.player.position = *position,
            Action::Interact { target, position } => {
                self.player.position = *position;
                self.interact(*target)?;
            }
            Action::Attack(request) => self.attack(request),
            Action::CastSkill(skill) => {
                if !self.key_bindings.is_bound(*skill) {
                    return Err(ClientError::rejected(format!("{skill} is not bound")));
                }
            }
            Action::OpenMenu(menu) => self.open_menus.insert(menu.flag()),
            Action::CloseAllMenus => self.close_menus(),
            Action::AllocateStat(stat) => self.allocate_stat(*stat)?,
            Action::SelectSkillPage(page) => {
                self.require(Menu::SkillTree)?;
                self.skill_page = Some(*page);
            }
            Action::AllocateSkill { skill, layout } => {
                self.require(Menu::SkillTree)?;
                if self.skill_page != Some(layout.page) {
                    return Err(ClientError::rejected(format!("{skill} is not on this page")));
                }
                self.spend(StatKind::SkillPoints)?;
                *self.player.skills.entry(*skill).or_insert(0) += 1;
            }
            Action::BindSkill { skill, slot, .. } => {
                self.require(Menu::SkillSelect)?;
                self.key_bindings.bind(*slot, *skill);
            }
            Action::SelectSkill { hand, skill, .. } => {
                self.require(Menu::SkillSelect)?;
                match hand {
                    Hand::Left => self.player.left_skill = *skill,
                    Hand::Right => self.player.right_skill = *skill,
                }
            }
            Action::KeySequence(keys) => self.dialog(keys)?,
            Action::ClickUi(element) => self.click(*element)?,
            Action::TravelTo(area) => {
                self.require(Menu::Waypoint)?;
                self.enter(*area);
            }
            Action::PickupItems { .. } => self.pickup(),
            Action::BuyAtVendor(request) => self.buy(request)?,
            Action::CubeAddItems(ids) => self.cube_add(ids)?,
            Action::CubeTransmute => self.transmute()?,
            Action::ReturnToTown => {
                let act = self.player.area.act();
                let town = TOWNS
                    .iter()
                    .copied()
                    .find(|town| town.act() == act)
                    .unwrap_or(Area::RogueEncampment);
                self.enter(town);
            }
        }
        Ok(())
    }

    fn require(&self, menu: Menu) -> Result<(), ClientError> {
        if self.open_menus.is_open(menu) {
            Ok(())
        } else {
            Err(ClientError::rejected(format!("{menu} is not open")))
        }
    }

    fn close_menus(&mut self) {
        self.open_menus = OpenMenus::empty();
        self.skill_page = None;
        self.talking_to = None;
        self.reset_requested = false;
        self.merc_selected = false;
    }

    fn enter(&mut self, area: Area) {
        tracing::debug!(from = %self.player.area, to = %area, "changing area");
        self.close_menus();
        self.player.area = area;
    }

    fn spend(&mut self, points: StatKind) -> Result<(), ClientError> {
        let left = self.player.stat(points).unwrap_or(0);
        if left <= 0 {
            return Err(ClientError::rejected(format!("no {points} left")));
        }
        self.player.stats.insert(points, left - 1);
        Ok(())
    }

    fn allocate_stat(&mut self, stat: StatKind) -> Result<(), ClientError> {
        self.require(Menu::Character)?;
        if !stat.is_allocatable() {
            return Err(ClientError::rejected(format!("{stat} cannot take points")));
        }
        self.spend(StatKind::StatPoints)?;
        *self.player.stats.entry(stat).or_insert(0) += 1;
        Ok(())
    }

    fn content(&self) -> Option<&AreaContent> {
        self.areas.get(&self.player.area)
    }

    fn interact(&mut self, target: InteractTarget) -> Result<(), ClientError> {
        match target {
            InteractTarget::Npc(npc) => {
                let present = self
                    .content()
                    .is_some_and(|content| content.npcs.iter().any(|n| n.id == npc));
                if !present {
                    return Err(ClientError::rejected(format!("{npc} is not here")));
                }
                self.talking_to = Some(npc);
                self.open_menus.insert(Menu::NpcInteract.flag());
            }
            InteractTarget::Object(id) => {
                let object = self
                    .content()
                    .and_then(|content| content.objects.iter().find(|o| o.id == id))
                    .copied()
                    .ok_or_else(|| ClientError::rejected(format!("object {id} is not here")))?;
                match object.kind {
                    ObjectKind::Waypoint => self.open_menus.insert(Menu::Waypoint.flag()),
                    ObjectKind::PermanentTownPortal => {
                        if let Some(destination) = self.portals.get(&id).copied() {
                            self.enter(destination);
                        }
                    }
                    ObjectKind::WirtCorpse => {
                        if self.looted.insert(id) {
                            let leg = self.new_item(ItemKind::WirtsLeg, ItemLocation::Ground);
                            self.area_mut(self.player.area).items.push(leg);
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn attack(&mut self, request: &AttackRequest) {
        let damage = self.attack_damage;
        let area = self.player.area;
        if let Some(monster) = self
            .area_mut(area)
            .monsters
            .iter_mut()
            .find(|monster| monster.id == request.target && monster.is_alive())
        {
            monster.life = (monster.life - damage).max(0);
            if !monster.is_alive() {
                tracing::debug!(monster = %monster.name, id = %monster.id, "monster killed");
            }
        }
    }

    fn dialog(&mut self, keys: &[Key]) -> Result<(), ClientError> {
        self.require(Menu::NpcInteract)?;
        let npc = self.talking_to;

        if keys == HIRE_DIALOG && npc.is_some_and(|npc| self.is_contractor(npc)) {
            self.open_menus.insert(Menu::MercList.flag());
        } else if keys == RESET_DIALOG {
            self.reset_requested = true;
        } else if keys == CONFIRM && self.reset_requested {
            self.reset_requested = false;
            self.reset_skills();
        } else {
            return Err(ClientError::rejected(format!("unexpected dialog keys {keys:?}")));
        }
        Ok(())
    }

    fn is_contractor(&self, npc: NpcId) -> bool {
        matches!(
            npc,
            NpcId::Kashya | NpcId::Greiz | NpcId::Asheara | NpcId::Tyrael | NpcId::QualKehk
        )
    }

    fn reset_skills(&mut self) {
        let mut refunded = 0;
        self.player.skills.retain(|skill, points| {
            if skill.is_item_skill() {
                return true;
            }
            refunded += *points;
            false
        });
        let unspent = self.player.stat(StatKind::SkillPoints).unwrap_or(0);
        self.player
            .stats
            .insert(StatKind::SkillPoints, unspent + refunded as i32);
        self.player.left_skill = SkillId::Attack;
        self.player.right_skill = SkillId::Attack;
        tracing::debug!(refunded, "skills reset");
    }

    fn click(&mut self, element: UiElement) -> Result<(), ClientError> {
        match element {
            UiElement::MainSkillButton | UiElement::SecondarySkillButton => {
                self.open_menus.insert(Menu::SkillSelect.flag());
            }
            UiElement::FirstMercInContractorList => {
                self.require(Menu::MercList)?;
                if !self.merc_selected {
                    self.merc_selected = true;
                    return Ok(());
                }
                self.merc_selected = false;
                self.pay(MERC_PRICE)?;
                self.player.merc_life_percent = 100;
            }
        }
        Ok(())
    }

    fn pay(&mut self, price: i32) -> Result<(), ClientError> {
        let carried = self.player.stat(StatKind::Gold).unwrap_or(0);
        let stash = self.player.stat(StatKind::StashGold).unwrap_or(0);
        if carried + stash < price {
            return Err(ClientError::rejected("not enough gold"));
        }
        let from_carried = carried.min(price);
        self.player.stats.insert(StatKind::Gold, carried - from_carried);
        self.player
            .stats
            .insert(StatKind::StashGold, stash - (price - from_carried));
        Ok(())
    }

    fn pickup(&mut self) {
        let area = self.player.area;
        let picked = std::mem::take(&mut self.area_mut(area).items);
        for mut item in picked {
            item.location = ItemLocation::Inventory;
            self.items.push(item);
        }
    }

    fn buy(&mut self, request: &VendorRequest) -> Result<(), ClientError> {
        self.require(Menu::NpcInteract)?;
        if self.talking_to != Some(request.npc) {
            return Err(ClientError::rejected(format!("not talking to {}", request.npc)));
        }
        for _ in 0..request.quantity {
            let item = self.new_item(request.item, ItemLocation::Inventory);
            self.items.push(item);
        }
        Ok(())
    }

    fn cube_add(&mut self, ids: &[UnitId]) -> Result<(), ClientError> {
        for id in ids {
            let item = self
                .items
                .iter_mut()
                .find(|item| item.id == *id)
                .ok_or_else(|| ClientError::rejected(format!("item {id} is not held")))?;
            item.location = ItemLocation::Cube;
        }
        Ok(())
    }

    fn transmute(&mut self) -> Result<(), ClientError> {
        let in_cube = |kind| {
            self.items
                .iter()
                .any(|item| item.location == ItemLocation::Cube && item.kind == kind)
        };
        if !(in_cube(ItemKind::WirtsLeg) && in_cube(ItemKind::TomeOfTownPortal)) {
            return Err(ClientError::rejected("nothing to transmute"));
        }
        self.items
            .retain(|item| item.location != ItemLocation::Cube);

        let portal = WorldObject {
            id: self.allocate_id(),
            kind: ObjectKind::PermanentTownPortal,
            position: self.player.position,
        };
        self.portals.insert(portal.id, Area::MooMooFarm);
        self.area_mut(self.player.area).objects.push(portal);
        tracing::debug!(id = %portal.id, "cow portal opened");
        Ok(())
    }

    fn new_item(&mut self, kind: ItemKind, location: ItemLocation) -> Item {
        Item {
            id: self.allocate_id(),
            kind,
            location,
        }
    }

    fn allocate_id(&mut self) -> UnitId {
        self.next_id += 1;
        UnitId(self.next_id)
    }
}
