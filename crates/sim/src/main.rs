//! Simulated leveling session.
//!
//! Loads a scenario (`LEVELING_SIM_SCENARIO`, JSON) or the built-in demo,
//! builds an agent from `AGENT_*` environment variables and runs the town
//! maintenance routine followed by the scenario's boss fight.
//!
//! ```bash
//! RUST_LOG=debug LEVELING_SIM_LOG=1 cargo run -p sim-world --bin leveling-sim
//! ```
use std::path::PathBuf;

use anyhow::Result;
use game_content::Content;
use leveling_agent::procedure::waypoint;
use leveling_agent::{Agent, AgentConfig};
use sim_world::{Scenario, SimWorld};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _guard = setup_logging()?;

    let scenario = match std::env::var_os("LEVELING_SIM_SCENARIO") {
        Some(path) => Scenario::load(&PathBuf::from(path))?,
        None => Scenario::demo(),
    };
    let config = AgentConfig::from_env();
    let content = Content::default();
    let agent = Agent::new(SimWorld::from_scenario(&scenario), content.env(), config);

    agent.ensure_stat_points().await?;
    agent.ensure_skill_points().await?;
    agent.reset_skills().await?;
    agent.ensure_skill_bindings().await?;
    let missing = agent.check_key_bindings().await?;
    agent.update_quest_log().await?;
    agent.hire_merc().await?;

    if let Some((boss, area)) = scenario.boss()? {
        agent.run(waypoint(agent.context(), area)).await?;
        agent.buff().await?;
        let report = agent.kill_boss(boss).await?;
        tracing::info!(%boss, attacks = report.actions, "boss fight finished");
    }

    let world = agent.driver();
    let player = world.player().await;
    tracing::info!(
        level = player.level(),
        area = %player.area,
        skills = ?player.skills,
        merc = player.merc_life_percent > 0,
        ?missing,
        actions = world.executed().await.len(),
        "session finished"
    );

    Ok(())
}

/// Logs to stderr, and to a file as well when `LEVELING_SIM_LOG` is set.
///
/// The file goes to `LEVELING_SIM_LOG_DIR`, or the platform cache directory
/// when that is unset.
fn setup_logging() -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_directory() {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            let appender = tracing_appender::rolling::daily(&dir, "leveling-sim.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn log_directory() -> Option<PathBuf> {
    std::env::var_os("LEVELING_SIM_LOG")?;
    if let Some(dir) = std::env::var_os("LEVELING_SIM_LOG_DIR") {
        return Some(PathBuf::from(dir));
    }
    directories::ProjectDirs::from("", "", "leveling-sim").map(|dirs| dirs.cache_dir().join("logs"))
}
