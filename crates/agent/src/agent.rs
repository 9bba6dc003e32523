//! The agent facade.
//!
//! [`Agent`] owns the driver, the configuration and the selected archetype,
//! and exposes every operation as an async method. Each call builds a fresh
//! plan against an [`AgentContext`] and evaluates it to completion.
use action_chain::{ChainReport, Driver, Evaluator};
use game_core::{Action, ClientError, Env, Resist, SkillId, Snapshot};

use crate::archetype::Archetype;
use crate::combat::{self, Boss, Selector};
use crate::config::AgentConfig;
use crate::context::{AgentContext, AgentNode};
use crate::error::{AgentError, Result};
use crate::procedure::{self, Procedure};
use crate::reconcile;

pub struct Agent<'e, D> {
    driver: D,
    env: Env<'e>,
    config: AgentConfig,
    archetype: Box<dyn Archetype>,
    evaluator: Evaluator,
}

impl<'e, D> Agent<'e, D>
where
    D: Driver<Snapshot = Snapshot, Action = Action, Error = ClientError>,
{
    /// Creates an agent using the archetype named in `config`.
    pub fn new(driver: D, env: Env<'e>, config: AgentConfig) -> Self {
        let archetype = config.archetype.build();
        Self::with_archetype(driver, env, config, archetype)
    }

    pub fn with_archetype(
        driver: D,
        env: Env<'e>,
        config: AgentConfig,
        archetype: Box<dyn Archetype>,
    ) -> Self {
        let evaluator = Evaluator::new().with_pass_limit(config.pass_limit);
        tracing::info!(archetype = %archetype.kind(), difficulty = %config.difficulty, "agent ready");
        Self {
            driver,
            env,
            config,
            archetype,
            evaluator,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn context(&self) -> AgentContext<'_> {
        AgentContext::new(self.env, &self.config, self.archetype.as_ref())
    }

    /// Evaluates an arbitrary plan.
    pub async fn run(&self, node: AgentNode<'_>) -> Result<ChainReport> {
        self.evaluator
            .run(&self.driver, node)
            .await
            .map_err(AgentError::from)
    }

    /// Runs the main steps, then the compensating step regardless of the
    /// outcome. The first failure wins.
    pub async fn run_procedure(&self, procedure: Procedure<'_>) -> Result<ChainReport> {
        let name = procedure.name();
        let (steps, compensation) = procedure.into_parts();

        tracing::info!(procedure = name, "starting");
        let outcome = self.run(steps).await;
        if let Err(err) = &outcome {
            tracing::warn!(procedure = name, error = %err, "procedure failed");
        }

        let Some(compensation) = compensation else {
            return outcome;
        };
        match (outcome, self.run(compensation).await) {
            (Ok(mut report), Ok(restored)) => {
                report += restored;
                Ok(report)
            }
            (Ok(_), Err(err)) => {
                tracing::error!(procedure = name, error = %err, "compensation failed");
                Err(err)
            }
            (Err(err), Ok(_)) => Err(err),
            (Err(err), Err(compensation_err)) => {
                tracing::error!(procedure = name, error = %compensation_err, "compensation failed");
                Err(err)
            }
        }
    }

    pub async fn ensure_stat_points(&self) -> Result<ChainReport> {
        self.run(reconcile::ensure_stat_points(self.context())).await
    }

    pub async fn ensure_skill_points(&self) -> Result<ChainReport> {
        self.run(reconcile::ensure_skill_points(self.context())).await
    }

    pub async fn ensure_skill_bindings(&self) -> Result<ChainReport> {
        self.run(reconcile::ensure_skill_bindings(self.context())).await
    }

    /// Required skills that have no hotkey. Logs a warning for each.
    pub async fn check_key_bindings(&self) -> Result<Vec<SkillId>> {
        let snapshot = self.driver.snapshot().await?;
        let missing = reconcile::missing_bindings(self.context(), &snapshot);
        for skill in &missing {
            tracing::warn!(%skill, "required skill has no key binding");
        }
        Ok(missing)
    }

    pub async fn update_quest_log(&self) -> Result<ChainReport> {
        self.run(procedure::update_quest_log(self.context())).await
    }

    pub async fn hire_merc(&self) -> Result<ChainReport> {
        self.run(procedure::hire_merc(self.context())).await
    }

    /// Resets skills at the trainer when the archetype asks for it.
    pub async fn reset_skills(&self) -> Result<ChainReport> {
        let snapshot = self.driver.snapshot().await?;
        if !self.archetype.should_reset_skills(&snapshot.player) {
            return Ok(ChainReport::default());
        }
        tracing::info!(level = snapshot.player.level(), "resetting skills");
        self.run_procedure(procedure::reset_skills(self.context(), snapshot.player.area))
            .await
    }

    pub async fn buff(&self) -> Result<ChainReport> {
        self.run(procedure::buff(self.context())).await
    }

    pub async fn kill_monster_sequence<'s, S>(
        &'s self,
        selector: S,
        skip_on_immunities: Vec<Resist>,
    ) -> Result<ChainReport>
    where
        S: Selector + 's,
    {
        self.run(combat::kill_monster_sequence(
            self.context(),
            selector,
            skip_on_immunities,
        ))
        .await
    }

    pub async fn kill_boss(&self, boss: Boss) -> Result<ChainReport> {
        let tactic = self
            .archetype
            .boss_tactic(boss, self.config.difficulty, &self.config.combat);
        self.run(combat::boss_plan(self.context(), boss, tactic)).await
    }

    /// Kills everything within `radius` of the player, or everything visible
    /// when `radius` is `None`.
    pub async fn clear_area(&self, radius: Option<u32>) -> Result<ChainReport> {
        self.run(combat::clear_area(self.context(), radius)).await
    }

    pub async fn run_cows(&self) -> Result<ChainReport> {
        self.run(procedure::run_cows(self.context())).await
    }
}
