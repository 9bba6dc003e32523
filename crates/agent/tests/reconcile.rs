mod common;

use common::{FixedPlan, agent, agent_with, bindings, player};
use game_content::{Content, SkillTable, WorldTable};
use game_core::{Action, Hand, Menu, SkillId, StatKind};
use leveling_agent::AgentError;
use sim_world::SimWorld;

const A: SkillId = SkillId::IceBolt;
const B: SkillId = SkillId::FrozenArmor;

fn with_points(level: i32, stat_points: i32, skill_points: i32) -> game_core::Player {
    let mut player = player(level);
    player.stats.insert(StatKind::StatPoints, stat_points);
    player.stats.insert(StatKind::SkillPoints, skill_points);
    player
}

fn allocated_skills(actions: &[Action]) -> Vec<SkillId> {
    actions
        .iter()
        .filter_map(|action| match action {
            Action::AllocateSkill { skill, .. } => Some(*skill),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_stat_points_go_to_vitality_and_rerun_is_a_noop() {
    let content = Content::default();
    let mut start = with_points(10, 3, 0);
    start.stats.insert(StatKind::Vitality, 20);
    let agent = agent(SimWorld::new(start), &content);

    agent.ensure_stat_points().await.expect("allocation should succeed");

    let player = agent.driver().player().await;
    assert_eq!(player.stat(StatKind::Vitality), Some(23));
    assert_eq!(player.unspent_stat_points(), 0);
    assert_eq!(
        agent.driver().executed().await,
        vec![
            Action::OpenMenu(Menu::Character),
            Action::AllocateStat(StatKind::Vitality),
            Action::AllocateStat(StatKind::Vitality),
            Action::AllocateStat(StatKind::Vitality),
            Action::CloseAllMenus,
        ]
    );

    let rerun = agent.ensure_stat_points().await.expect("rerun should succeed");
    assert!(rerun.is_noop());
}

#[tokio::test]
async fn test_refused_stat_click_names_the_stat() {
    let content = Content::default();
    let world = SimWorld::new(with_points(10, 2, 0))
        .reject(|action| matches!(action, Action::AllocateStat(_)));
    let agent = agent(world, &content);

    let err = agent.ensure_stat_points().await.unwrap_err();

    assert!(
        matches!(err, AgentError::StatAllocation { stat: StatKind::Vitality, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_unacknowledged_stat_click_stops_quietly() {
    let content = Content::default();
    let world = SimWorld::new(with_points(10, 2, 0))
        .ignore(|action| matches!(action, Action::AllocateStat(_)));
    let agent = agent(world, &content);

    agent.ensure_stat_points().await.expect("a missed click is not an error");

    let clicks = agent
        .driver()
        .executed()
        .await
        .into_iter()
        .filter(|action| matches!(action, Action::AllocateStat(_)))
        .count();
    assert_eq!(clicks, 1);
}

#[tokio::test]
async fn test_repeated_skill_counts_positionally() {
    let content = Content::default();

    // A=1, B=0: the second A is due before B.
    let mut start = with_points(10, 0, 1);
    start.skills.insert(A, 1);
    let agent = agent_with(SimWorld::new(start), &content, FixedPlan(vec![A, A, B]));
    agent.ensure_skill_points().await.expect("allocation should succeed");
    assert_eq!(allocated_skills(&agent.driver().executed().await), vec![A]);

    // A=2, B=0: only B is left.
    let mut start = with_points(10, 0, 1);
    start.skills.insert(A, 2);
    let agent = agent_with(SimWorld::new(start), &content, FixedPlan(vec![A, A, B]));
    agent.ensure_skill_points().await.expect("allocation should succeed");
    assert_eq!(allocated_skills(&agent.driver().executed().await), vec![B]);

    // A=2, B=1: nothing due, the skill tree is never opened.
    let mut start = with_points(10, 0, 1);
    start.skills.insert(A, 2);
    start.skills.insert(B, 1);
    let agent = agent_with(SimWorld::new(start), &content, FixedPlan(vec![A, A, B]));
    let report = agent.ensure_skill_points().await.expect("nothing to do");
    assert!(report.is_noop());
}

#[tokio::test]
async fn test_skill_page_is_selected_before_each_point() {
    let content = Content::default();
    let agent = agent_with(
        SimWorld::new(with_points(10, 0, 2)),
        &content,
        FixedPlan(vec![A, SkillId::StaticField]),
    );

    agent.ensure_skill_points().await.expect("allocation should succeed");

    let executed = agent.driver().executed().await;
    let pages: Vec<u8> = executed
        .iter()
        .filter_map(|action| match action {
            Action::SelectSkillPage(page) => Some(*page),
            _ => None,
        })
        .collect();
    assert_eq!(pages, vec![3, 2]);
    assert_eq!(executed.first(), Some(&Action::OpenMenu(Menu::SkillTree)));
    assert_eq!(executed.last(), Some(&Action::CloseAllMenus));

    let player = agent.driver().player().await;
    assert_eq!(player.skill_level(A), 1);
    assert_eq!(player.skill_level(SkillId::StaticField), 1);
    assert_eq!(player.unspent_skill_points(), 0);
}

#[tokio::test]
async fn test_skill_without_layout_is_skipped() {
    let mut skills = SkillTable::sorceress();
    skills.remove(B);
    let content = Content::new(skills, WorldTable::default());
    let agent = agent_with(
        SimWorld::new(with_points(10, 0, 1)),
        &content,
        FixedPlan(vec![B, A]),
    );

    agent.ensure_skill_points().await.expect("unknown skills are skipped");

    assert_eq!(allocated_skills(&agent.driver().executed().await), vec![A]);
}

#[tokio::test]
async fn test_bindings_fill_free_slots_and_set_main_skill() {
    let content = Content::default();
    let mut start = player(10);
    for skill in [A, B, SkillId::StaticField, SkillId::TomeOfTownPortal] {
        start.skills.insert(skill, 1);
    }
    let mut keys = bindings(&[]);
    keys.slots.truncate(2);
    let agent = agent(SimWorld::new(start).with_key_bindings(keys), &content);

    agent.ensure_skill_bindings().await.expect("binding should succeed");

    let snapshot = {
        use action_chain::Driver;
        agent.driver().snapshot().await.expect("snapshot")
    };
    assert!(snapshot.key_bindings.is_bound(SkillId::TomeOfTownPortal));
    assert!(snapshot.key_bindings.is_bound(B));
    assert!(!snapshot.key_bindings.is_bound(SkillId::StaticField));
    assert_eq!(snapshot.player.left_skill, A);
    assert!(snapshot.open_menus.is_empty());

    let selected = agent.driver().executed().await.into_iter().any(|action| {
        matches!(action, Action::SelectSkill { hand: Hand::Left, skill, .. } if skill == A)
    });
    assert!(selected);

    let rerun = agent.ensure_skill_bindings().await.expect("rerun");
    assert!(rerun.is_noop());
}

#[tokio::test]
async fn test_missing_required_binding_is_reported() {
    let content = Content::default();
    let agent = agent(SimWorld::new(player(10)), &content);

    let missing = agent.check_key_bindings().await.expect("snapshot");

    assert_eq!(missing, vec![SkillId::TomeOfTownPortal]);
}
