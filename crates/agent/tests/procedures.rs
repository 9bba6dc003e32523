mod common;

use std::time::Duration;

use common::{agent, bindings, monster, object, player};
use game_content::Content;
use game_core::{
    Action, Area, Item, ItemKind, ItemLocation, Npc, NpcId, ObjectKind, Position, SkillId,
    StatKind, UnitId,
};
use leveling_agent::procedure::wait_for_menu;
use leveling_agent::{AgentConfig, AgentError};
use sim_world::{MERC_PRICE, SimWorld};

fn npc(id: NpcId) -> Npc {
    Npc {
        id,
        position: Position::new(30, 30),
    }
}

fn needs_reset(area: Area) -> game_core::Player {
    let mut start = player(25);
    start.area = area;
    start.skills.insert(SkillId::Blizzard, 5);
    start.skills.insert(SkillId::IceBolt, 1);
    start.skills.insert(SkillId::TomeOfTownPortal, 1);
    start.stats.insert(StatKind::SkillPoints, 2);
    start
}

#[tokio::test]
async fn test_reset_skills_round_trip() {
    let content = Content::default();
    let world = SimWorld::new(needs_reset(Area::ColdPlains))
        .with_object(Area::ColdPlains, object(1, ObjectKind::Waypoint))
        .with_object(Area::RogueEncampment, object(2, ObjectKind::Waypoint))
        .with_npc(Area::RogueEncampment, npc(NpcId::Akara));
    let agent = agent(world, &content);

    agent.reset_skills().await.expect("reset should succeed");

    let player = agent.driver().player().await;
    assert_eq!(player.area, Area::ColdPlains, "back where it started");
    assert_eq!(player.skill_level(SkillId::Blizzard), 0);
    assert_eq!(player.skill_level(SkillId::TomeOfTownPortal), 1);
    assert_eq!(player.unspent_skill_points(), 8);
}

#[tokio::test]
async fn test_reset_skills_failure_names_the_step_and_still_returns() {
    let content = Content::default();
    let world = SimWorld::new(needs_reset(Area::ColdPlains))
        .with_object(Area::ColdPlains, object(1, ObjectKind::Waypoint))
        .with_object(Area::RogueEncampment, object(2, ObjectKind::Waypoint));
    let agent = agent(world, &content);

    let err = agent.reset_skills().await.unwrap_err();

    let AgentError::Step { step, .. } = &err else {
        panic!("expected a step failure, got {err:?}");
    };
    assert!(step.contains("interact_npc"), "step was {step}");
    assert!(matches!(err.root_cause(), AgentError::NotFound { .. }));
    assert_eq!(agent.driver().player().await.area, Area::ColdPlains);
}

#[tokio::test]
async fn test_missing_waypoint_aborts_reset() {
    let content = Content::default();
    let agent = agent(SimWorld::new(needs_reset(Area::ColdPlains)), &content);

    let err = agent.reset_skills().await.unwrap_err();

    assert!(matches!(err.root_cause(), AgentError::NotFound { .. }));
    let executed = agent.driver().executed().await;
    assert!(
        !executed
            .iter()
            .any(|action| matches!(action, Action::KeySequence(_))),
        "nothing after the failed step runs"
    );
}

#[tokio::test]
async fn test_reset_is_skipped_below_level_24() {
    let content = Content::default();
    let agent = agent(SimWorld::new(player(20)), &content);

    let report = agent.reset_skills().await.expect("nothing to do");

    assert!(report.is_noop());
    assert!(agent.driver().executed().await.is_empty());
}

#[tokio::test]
async fn test_merc_is_hired_from_the_town_contractor() {
    let content = Content::default();
    let mut start = player(10);
    start.stats.insert(StatKind::Gold, 10_000);
    start.stats.insert(StatKind::StashGold, 25_000);
    let world = SimWorld::new(start).with_npc(Area::RogueEncampment, npc(NpcId::Kashya));
    let agent = agent(world, &content);

    agent.hire_merc().await.expect("hire should succeed");

    let player = agent.driver().player().await;
    assert_eq!(player.merc_life_percent, 100);
    assert_eq!(player.total_gold(), 35_000 - MERC_PRICE as u32);
}

#[tokio::test]
async fn test_no_merc_outside_normal_or_when_poor() {
    let content = Content::default();

    let mut rich = player(40);
    rich.stats.insert(StatKind::Gold, 100_000);
    let world = SimWorld::new(rich).with_npc(Area::RogueEncampment, npc(NpcId::Kashya));
    let config = AgentConfig {
        difficulty: game_core::Difficulty::Nightmare,
        ..AgentConfig::default()
    };
    let nightmare = leveling_agent::Agent::new(world, content.env(), config);
    assert!(nightmare.hire_merc().await.expect("skipped").is_noop());

    let mut poor = player(10);
    poor.stats.insert(StatKind::Gold, 30_000);
    let world = SimWorld::new(poor).with_npc(Area::RogueEncampment, npc(NpcId::Kashya));
    assert!(agent(world, &content).hire_merc().await.expect("skipped").is_noop());
}

#[tokio::test]
async fn test_buff_casts_only_bound_buffs() {
    let content = Content::default();
    let world = SimWorld::new(player(30))
        .with_key_bindings(bindings(&[SkillId::FrozenArmor, SkillId::Blizzard]));
    let agent = agent(world, &content);

    agent.buff().await.expect("buff should succeed");

    assert_eq!(
        agent.driver().executed().await,
        vec![Action::CastSkill(SkillId::FrozenArmor)]
    );
}

#[tokio::test]
async fn test_quest_log_is_opened_and_closed() {
    let content = Content::default();
    let agent = agent(SimWorld::new(player(5)), &content);

    agent.update_quest_log().await.expect("quest log");

    assert_eq!(
        agent.driver().executed().await,
        vec![
            Action::OpenMenu(game_core::Menu::QuestLog),
            Action::CloseAllMenus
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_cow_run_from_scratch() {
    let content = Content::default();
    let portal_to_tristram = object(3, ObjectKind::PermanentTownPortal);
    let world = SimWorld::new(player(30))
        .with_key_bindings(bindings(&[SkillId::IceBolt, SkillId::FrozenArmor]))
        .with_item(Item {
            id: UnitId(50),
            kind: ItemKind::TomeOfTownPortal,
            location: ItemLocation::Inventory,
        })
        .with_object(Area::RogueEncampment, object(1, ObjectKind::Waypoint))
        .with_npc(Area::RogueEncampment, npc(NpcId::Akara))
        .with_object(Area::StonyField, object(2, ObjectKind::Waypoint))
        .with_object(Area::StonyField, object(4, ObjectKind::CairnStoneAlpha))
        .with_object(Area::StonyField, portal_to_tristram)
        .with_portal(portal_to_tristram.id, Area::Tristram)
        .with_object(Area::Tristram, object(5, ObjectKind::WirtCorpse))
        .with_monster(Area::MooMooFarm, monster(100, NpcId::HellBovine, 200, 10))
        .with_monster(Area::MooMooFarm, monster(101, NpcId::HellBovine, 200, 20));
    let agent = agent(world, &content);

    agent.run_cows().await.expect("cow run should succeed");

    let player = agent.driver().player().await;
    assert_eq!(player.area, Area::MooMooFarm);

    let held = agent.driver().held_items().await;
    assert!(!held.iter().any(|item| item.kind == ItemKind::WirtsLeg), "leg was cubed");
    assert!(
        held.iter().any(|item| item.id == UnitId(50)),
        "the regular tome is kept"
    );

    let snapshot = {
        use action_chain::Driver;
        agent.driver().snapshot().await.expect("snapshot")
    };
    assert!(snapshot.monsters.iter().all(|cow| !cow.is_alive()));
    let executed = agent.driver().executed().await;
    assert!(executed.contains(&Action::CastSkill(SkillId::FrozenArmor)));
}

#[tokio::test]
async fn test_held_leg_skips_tristram() {
    let content = Content::default();
    let world = SimWorld::new(player(30))
        .with_key_bindings(bindings(&[SkillId::IceBolt]))
        .with_item(Item {
            id: UnitId(60),
            kind: ItemKind::WirtsLeg,
            location: ItemLocation::Stash,
        })
        .with_npc(Area::RogueEncampment, npc(NpcId::Akara));
    let agent = agent(world, &content);

    agent.run_cows().await.expect("cow run should succeed");

    let executed = agent.driver().executed().await;
    assert!(!executed.contains(&Action::TravelTo(Area::StonyField)));
    assert!(executed.contains(&Action::CubeTransmute));
    assert_eq!(agent.driver().player().await.area, Area::MooMooFarm);
}

#[tokio::test(start_paused = true)]
async fn test_menu_wait_with_fine_poll_reports_the_menu_not_a_stall() {
    let content = Content::default();
    let mut config = AgentConfig::default();
    config.waits.poll = Duration::from_millis(1);
    let agent = leveling_agent::Agent::new(SimWorld::new(player(5)), content.env(), config);

    let started = tokio::time::Instant::now();
    let err = agent
        .run(wait_for_menu(agent.context(), game_core::Menu::Waypoint, true))
        .await
        .unwrap_err();

    assert!(
        matches!(
            err.root_cause(),
            AgentError::MenuState {
                menu: game_core::Menu::Waypoint,
                expected_open: true
            }
        ),
        "unexpected error: {err:?}"
    );
    assert!(started.elapsed() >= agent.config().waits.menu);
}
