//! Target selectors.
//!
//! A selector maps a snapshot to the unit to engage, or `None` when there is
//! nothing (left) to fight. Selectors are stateless and re-run every tick, so
//! they never hold on to a monster between snapshots.
use game_core::{Monster, MonsterType, NpcId, Snapshot, UnitId};

/// Stateless target selection.
pub trait Selector: Fn(&Snapshot) -> Option<UnitId> + Send + Sync {}

impl<T> Selector for T where T: Fn(&Snapshot) -> Option<UnitId> + Send + Sync {}

/// First living monster named `name` of type `kind`.
pub fn by_name(name: NpcId, kind: MonsterType) -> impl Selector + Copy {
    move |snapshot: &Snapshot| {
        snapshot
            .monsters
            .iter()
            .find(|monster| monster.name == name && monster.kind == kind && monster.is_alive())
            .map(|monster| monster.id)
    }
}

/// Nearest living monster whose name is in `names`.
pub fn nearest_of(names: &'static [NpcId]) -> impl Selector + Copy {
    move |snapshot: &Snapshot| nearest(snapshot, |monster| names.contains(&monster.name))
}

/// Nearest living monster within `radius` of the player, or anywhere when
/// `radius` is `None`.
pub fn nearest_within(radius: Option<u32>) -> impl Selector + Copy {
    move |snapshot: &Snapshot| {
        nearest(snapshot, |monster| {
            radius.is_none_or(|radius| snapshot.distance_from_player(monster.position) <= radius)
        })
    }
}

/// Nearest living monster matching `filter`, measured from the player.
///
/// Only one candidate is returned per call; the caller re-selects every tick
/// against live positions. Equidistant candidates resolve to the one listed
/// first in the snapshot.
pub fn nearest<F>(snapshot: &Snapshot, filter: F) -> Option<UnitId>
where
    F: Fn(&Monster) -> bool,
{
    snapshot
        .monsters
        .iter()
        .filter(|monster| monster.is_alive() && filter(monster))
        .min_by_key(|monster| snapshot.distance_from_player(monster.position))
        .map(|monster| monster.id)
}

#[cfg(test)]
mod tests {
    use game_core::Position;

    use super::*;

    fn monster(id: u32, name: NpcId, x: i32, y: i32) -> Monster {
        Monster {
            id: UnitId(id),
            name,
            kind: MonsterType::Unique,
            position: Position::new(x, y),
            life: 100,
            ..Monster::default()
        }
    }

    const COUNCIL: &[NpcId] = &[
        NpcId::CouncilMember,
        NpcId::CouncilMember2,
        NpcId::CouncilMember3,
    ];

    #[test]
    fn equidistant_candidates_resolve_in_list_order() {
        let snapshot = Snapshot {
            monsters: vec![
                monster(4, NpcId::CouncilMember2, 0, 10),
                monster(2, NpcId::CouncilMember, 10, 0),
                monster(9, NpcId::CouncilMember3, -10, 0),
            ],
            ..Snapshot::default()
        };
        let select = nearest_of(COUNCIL);

        for _ in 0..5 {
            assert_eq!(select(&snapshot), Some(UnitId(4)));
        }
    }

    #[test]
    fn nearest_follows_live_positions() {
        let mut snapshot = Snapshot {
            monsters: vec![
                monster(1, NpcId::CouncilMember, 30, 0),
                monster(2, NpcId::CouncilMember2, 5, 0),
                monster(3, NpcId::Zombie, 1, 0),
            ],
            ..Snapshot::default()
        };
        let select = nearest_of(COUNCIL);
        assert_eq!(select(&snapshot), Some(UnitId(2)));

        snapshot.monsters[1].life = 0;
        assert_eq!(select(&snapshot), Some(UnitId(1)));
    }

    #[test]
    fn radius_limits_candidates() {
        let snapshot = Snapshot {
            monsters: vec![monster(1, NpcId::Fallen, 40, 0)],
            ..Snapshot::default()
        };
        assert_eq!(nearest_within(Some(10))(&snapshot), None);
        assert_eq!(nearest_within(None)(&snapshot), Some(UnitId(1)));
    }

    #[test]
    fn by_name_ignores_corpses_and_other_types() {
        let mut corpse = monster(1, NpcId::Andariel, 0, 0);
        corpse.life = 0;
        let mut champion = monster(2, NpcId::Andariel, 0, 0);
        champion.kind = MonsterType::Champion;
        let snapshot = Snapshot {
            monsters: vec![corpse, champion, monster(3, NpcId::Andariel, 9, 9)],
            ..Snapshot::default()
        };

        assert_eq!(by_name(NpcId::Andariel, MonsterType::Unique)(&snapshot), Some(UnitId(3)));
    }
}
