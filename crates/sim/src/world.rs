//! The simulated game as a [`Driver`].
use std::time::Duration;

use action_chain::Driver;
use async_trait::async_trait;
use game_core::{
    Action, Area, ClientError, Item, KeyBindings, Monster, Npc, Player, Snapshot, UnitId,
    WorldObject,
};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::scenario::Scenario;
use crate::state::{SimState, Spawn};

/// In-memory game world.
///
/// Builder methods configure the world before it is handed to an agent;
/// the async accessors inspect it afterwards. Every action is recorded,
/// including the ones that were refused.
pub struct SimWorld {
    state: Mutex<SimState>,
}

impl SimWorld {
    pub fn new(player: Player) -> Self {
        Self {
            state: Mutex::new(SimState::new(player)),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        let mut world = Self::new(scenario.player.clone())
            .with_key_bindings(scenario.key_bindings.clone());
        let state = world.state.get_mut();
        state.items = scenario.items.clone();
        for (area, content) in &scenario.areas {
            state.areas.insert(*area, content.clone());
        }
        for portal in &scenario.portals {
            state.portals.insert(portal.object, portal.destination);
        }
        world
    }

    pub fn with_key_bindings(mut self, bindings: KeyBindings) -> Self {
        self.state.get_mut().key_bindings = bindings;
        self
    }

    pub fn with_monster(mut self, area: Area, monster: Monster) -> Self {
        self.state.get_mut().area_mut(area).monsters.push(monster);
        self
    }

    pub fn with_npc(mut self, area: Area, npc: Npc) -> Self {
        self.state.get_mut().area_mut(area).npcs.push(npc);
        self
    }

    pub fn with_object(mut self, area: Area, object: WorldObject) -> Self {
        self.state.get_mut().area_mut(area).objects.push(object);
        self
    }

    /// Adds an item held by the player.
    pub fn with_item(mut self, item: Item) -> Self {
        self.state.get_mut().items.push(item);
        self
    }

    pub fn with_ground_item(mut self, area: Area, item: Item) -> Self {
        self.state.get_mut().area_mut(area).items.push(item);
        self
    }

    /// Makes the town portal `object` lead to `destination`.
    pub fn with_portal(mut self, object: UnitId, destination: Area) -> Self {
        self.state.get_mut().portals.insert(object, destination);
        self
    }

    /// Life removed by every attack request.
    pub fn with_attack_damage(mut self, damage: i32) -> Self {
        self.state.get_mut().attack_damage = damage;
        self
    }

    /// Hides monsters farther than `radius` from the player.
    pub fn with_sight_radius(mut self, radius: u32) -> Self {
        self.state.get_mut().sight = Some(radius);
        self
    }

    /// Makes every action take `duration` of game time.
    pub fn with_action_time(mut self, duration: Duration) -> Self {
        self.state.get_mut().action_time = duration;
        self
    }

    /// Places `monster` in `area` once `delay` has passed.
    pub fn spawn_after(mut self, area: Area, monster: Monster, delay: Duration) -> Self {
        self.state.get_mut().spawns.push(Spawn {
            at: Instant::now() + delay,
            area,
            monster,
        });
        self
    }

    /// Acknowledges matching actions without applying them.
    pub fn ignore<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Action) -> bool + Send + Sync + 'static,
    {
        self.state.get_mut().ignored.push(Box::new(filter));
        self
    }

    /// Refuses matching actions with [`ClientError::Rejected`].
    pub fn reject<F>(mut self, filter: F) -> Self
    where
        F: Fn(&Action) -> bool + Send + Sync + 'static,
    {
        self.state.get_mut().rejected.push(Box::new(filter));
        self
    }

    /// Every action received so far, in order.
    pub async fn executed(&self) -> Vec<Action> {
        self.state.lock().await.executed.clone()
    }

    pub async fn player(&self) -> Player {
        self.state.lock().await.player.clone()
    }

    pub async fn held_items(&self) -> Vec<Item> {
        self.state.lock().await.items.clone()
    }
}

#[async_trait]
impl Driver for SimWorld {
    type Snapshot = Snapshot;
    type Action = Action;
    type Error = ClientError;

    async fn snapshot(&self) -> Result<Snapshot, ClientError> {
        let mut state = self.state.lock().await;
        state.release_spawns(Instant::now());
        Ok(state.snapshot())
    }

    async fn execute(&self, action: &Action) -> Result<(), ClientError> {
        let (outcome, action_time) = {
            let mut state = self.state.lock().await;
            (state.apply(action), state.action_time)
        };
        if !action_time.is_zero() {
            tokio::time::sleep(action_time).await;
        }
        outcome.inspect_err(|err| {
            tracing::debug!(?action, error = %err, "action refused");
        })
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ItemKind, ItemLocation, Menu, ObjectKind, Position, StatKind};

    use super::*;

    fn player() -> Player {
        let mut player = Player::default();
        player.stats.insert(StatKind::StatPoints, 2);
        player
    }

    #[tokio::test]
    async fn stat_points_need_the_character_screen() {
        let world = SimWorld::new(player());

        let refused = world.execute(&Action::AllocateStat(StatKind::Vitality)).await;
        assert!(matches!(refused, Err(ClientError::Rejected { .. })));

        world.execute(&Action::OpenMenu(Menu::Character)).await.unwrap();
        world.execute(&Action::AllocateStat(StatKind::Vitality)).await.unwrap();

        let player = world.player().await;
        assert_eq!(player.stat(StatKind::Vitality), Some(1));
        assert_eq!(player.unspent_stat_points(), 1);
        assert_eq!(world.executed().await.len(), 3);
    }

    #[tokio::test]
    async fn distant_monsters_come_into_sight_when_the_player_moves() {
        let monster = Monster {
            id: UnitId(4),
            position: Position::new(100, 0),
            life: 100,
            ..Monster::default()
        };
        let world = SimWorld::new(Player::default())
            .with_monster(Area::RogueEncampment, monster)
            .with_sight_radius(30);

        assert!(world.snapshot().await.unwrap().monsters.is_empty());
        world.execute(&Action::MoveTo(Position::new(80, 0))).await.unwrap();
        assert_eq!(world.snapshot().await.unwrap().monsters.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_monster_appears_after_its_delay() {
        let monster = Monster {
            id: UnitId(5),
            life: 100,
            ..Monster::default()
        };
        let world = SimWorld::new(Player::default()).spawn_after(
            Area::RogueEncampment,
            monster,
            Duration::from_secs(3),
        );

        assert!(world.snapshot().await.unwrap().monsters.is_empty());
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(world.snapshot().await.unwrap().monsters.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn actions_take_game_time() {
        let world = SimWorld::new(Player::default()).with_action_time(Duration::from_millis(100));
        let started = Instant::now();

        world.execute(&Action::MoveTo(Position::new(1, 1))).await.unwrap();
        world.execute(&Action::MoveTo(Position::new(2, 2))).await.unwrap();

        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200), "took {elapsed:?}");
        assert!(elapsed < Duration::from_millis(300), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn ignored_attacks_leave_the_target_alone() {
        let monster = Monster {
            id: UnitId(9),
            life: 50,
            ..Monster::default()
        };
        let world = SimWorld::new(Player::default())
            .with_monster(Area::RogueEncampment, monster)
            .ignore(|action| matches!(action, Action::Attack(_)));

        let request = game_core::AttackRequest::primary(UnitId(9), game_core::DistanceRange::new(1, 3));
        world.execute(&Action::Attack(request)).await.unwrap();

        assert_eq!(world.snapshot().await.unwrap().monsters[0].life, 50);
    }

    #[tokio::test]
    async fn transmuting_leg_and_tome_opens_the_cow_portal() {
        let world = SimWorld::new(Player::default())
            .with_item(Item {
                id: UnitId(1),
                kind: ItemKind::WirtsLeg,
                location: ItemLocation::Stash,
            })
            .with_item(Item {
                id: UnitId(2),
                kind: ItemKind::TomeOfTownPortal,
                location: ItemLocation::Inventory,
            });

        world
            .execute(&Action::CubeAddItems(vec![UnitId(1), UnitId(2)]))
            .await
            .unwrap();
        world.execute(&Action::CubeTransmute).await.unwrap();

        let snapshot = world.snapshot().await.unwrap();
        let portal = snapshot.object(ObjectKind::PermanentTownPortal).unwrap();
        assert!(world.held_items().await.is_empty());

        world
            .execute(&Action::Interact {
                target: game_core::InteractTarget::Object(portal.id),
                position: Position::ORIGIN,
            })
            .await
            .unwrap();
        assert_eq!(world.player().await.area, Area::MooMooFarm);
    }
}
