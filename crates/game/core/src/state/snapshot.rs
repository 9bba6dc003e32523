use super::{
    Item, ItemKind, ItemLocation, KeyBindings, Monster, MonsterType, Npc, NpcId, ObjectKind,
    OpenMenus, Player, Position, UnitId, WorldObject,
};

/// Point-in-time view of everything the agent may observe.
///
/// A snapshot is immutable once taken. Decisions made against it are only
/// valid for the tick it was taken in; the next decision takes a new one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Snapshot {
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub npcs: Vec<Npc>,
    pub objects: Vec<WorldObject>,
    pub items: Vec<Item>,
    pub open_menus: OpenMenus,
    pub key_bindings: KeyBindings,
}

impl Snapshot {
    /// Looks a monster up by unit id.
    pub fn monster(&self, id: UnitId) -> Option<&Monster> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    /// First monster matching `name` and `kind`, in snapshot order.
    pub fn find_monster(&self, name: NpcId, kind: MonsterType) -> Option<&Monster> {
        self.monsters
            .iter()
            .find(|monster| monster.name == name && monster.kind == kind)
    }

    /// Living elite monsters, in snapshot order.
    pub fn elites(&self) -> impl Iterator<Item = &Monster> {
        self.monsters
            .iter()
            .filter(|monster| monster.kind.is_elite() && monster.is_alive())
    }

    /// Living monsters within `radius` of the player.
    pub fn monsters_near_player(&self, radius: u32) -> impl Iterator<Item = &Monster> {
        let origin = self.player.position;
        self.monsters
            .iter()
            .filter(move |monster| monster.is_alive() && origin.distance(monster.position) <= radius)
    }

    pub fn npc(&self, id: NpcId) -> Option<&Npc> {
        self.npcs.iter().find(|npc| npc.id == id)
    }

    /// First object of `kind`, in snapshot order.
    pub fn object(&self, kind: ObjectKind) -> Option<&WorldObject> {
        self.objects.iter().find(|object| object.kind == kind)
    }

    /// First item of `kind` in any of `locations` (any location when empty).
    pub fn find_item(&self, kind: ItemKind, locations: &[ItemLocation]) -> Option<&Item> {
        self.items.iter().find(|item| {
            item.kind == kind && (locations.is_empty() || locations.contains(&item.location))
        })
    }

    pub fn items_in(&self, location: ItemLocation) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.location == location)
    }

    /// Distance from the player to `position`.
    pub fn distance_from_player(&self, position: Position) -> u32 {
        self.player.position.distance(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster(id: u32, name: NpcId, kind: MonsterType, life: i32) -> Monster {
        Monster {
            id: UnitId(id),
            name,
            kind,
            life,
            ..Monster::default()
        }
    }

    #[test]
    fn elites_skip_dead_and_normal_monsters() {
        let snapshot = Snapshot {
            monsters: vec![
                monster(1, NpcId::Zombie, MonsterType::Normal, 10),
                monster(2, NpcId::TalicTheDefender, MonsterType::SuperUnique, 0),
                monster(3, NpcId::MadawcTheGuardian, MonsterType::SuperUnique, 50),
            ],
            ..Snapshot::default()
        };

        let ids: Vec<_> = snapshot.elites().map(|m| m.id).collect();
        assert_eq!(ids, vec![UnitId(3)]);
    }

    #[test]
    fn find_item_respects_locations() {
        let snapshot = Snapshot {
            items: vec![Item {
                id: UnitId(7),
                kind: ItemKind::WirtsLeg,
                location: ItemLocation::Stash,
            }],
            ..Snapshot::default()
        };

        assert!(snapshot.find_item(ItemKind::WirtsLeg, &[]).is_some());
        assert!(
            snapshot
                .find_item(ItemKind::WirtsLeg, &[ItemLocation::Stash, ItemLocation::Inventory])
                .is_some()
        );
        assert!(
            snapshot
                .find_item(ItemKind::WirtsLeg, &[ItemLocation::Inventory])
                .is_none()
        );
    }
}
