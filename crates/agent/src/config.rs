//! Agent configuration structures and loaders.
use std::env;
use std::time::Duration;

use game_core::{Difficulty, DistanceRange};

use crate::archetype::ArchetypeKind;

/// Everything the agent needs besides the game itself.
#[derive(Clone, Debug)]
pub struct AgentConfig {
    pub archetype: ArchetypeKind,
    pub difficulty: Difficulty,
    /// Hire a mercenary when the conditions allow it.
    pub use_merc: bool,
    /// Maximum passes of a bounded repeating chain (the allocation loops)
    /// before it is reported as stalled.
    pub pass_limit: usize,
    pub combat: CombatConfig,
    pub waits: WaitConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            archetype: ArchetypeKind::default(),
            difficulty: Difficulty::Normal,
            use_merc: true,
            pass_limit: action_chain::evaluator::DEFAULT_PASS_LIMIT,
            combat: CombatConfig::default(),
            waits: WaitConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_ARCHETYPE` - Character build (default: sorceress_leveling)
    /// - `AGENT_DIFFICULTY` - normal, nightmare or hell (default: normal)
    /// - `AGENT_USE_MERC` - Hire mercenaries (default: true)
    /// - `AGENT_PASS_LIMIT` - Passes before an allocation loop counts as stalled (default: 1000)
    /// - `AGENT_ATTACK_CEILING` - Attacks against one target before giving up (default: 10)
    /// - `AGENT_LOW_MANA_PERCENT` - Mana percentage below which melee is used (default: 15)
    /// - `AGENT_LOW_MANA_LEVEL` - Level below which the low-mana fallback applies (default: 15)
    /// - `AGENT_BOSS_WAIT_MS` - How long to wait for a boss to appear (default: 20000)
    /// - `AGENT_POLL_INTERVAL_MS` - Poll interval of bounded waits (default: 200)
    /// - `AGENT_MENU_WAIT_MS` - Menu open/close wait (default: 2000)
    /// - `AGENT_AREA_WAIT_MS` - Area transition wait (default: 10000)
    /// - `AGENT_INTERACTION_WAIT_MS` - NPC/object interaction wait (default: 5000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(archetype) = read_env::<ArchetypeKind>("AGENT_ARCHETYPE") {
            config.archetype = archetype;
        }
        if let Some(difficulty) = read_env::<Difficulty>("AGENT_DIFFICULTY") {
            config.difficulty = difficulty;
        }
        if let Some(use_merc) = read_env::<bool>("AGENT_USE_MERC") {
            config.use_merc = use_merc;
        }
        if let Some(limit) = read_env::<usize>("AGENT_PASS_LIMIT") {
            config.pass_limit = limit.max(1);
        }

        if let Some(ceiling) = read_env::<u32>("AGENT_ATTACK_CEILING") {
            config.combat.attack_ceiling = ceiling.max(1);
        }
        if let Some(percent) = read_env::<u32>("AGENT_LOW_MANA_PERCENT") {
            config.combat.low_mana_percent = percent.min(100);
        }
        if let Some(level) = read_env::<u32>("AGENT_LOW_MANA_LEVEL") {
            config.combat.low_mana_level = level;
        }

        if let Some(wait) = read_millis("AGENT_BOSS_WAIT_MS") {
            config.waits.boss = wait;
        }
        if let Some(poll) = read_millis("AGENT_POLL_INTERVAL_MS") {
            config.waits.poll = poll.max(Duration::from_millis(1));
        }
        if let Some(wait) = read_millis("AGENT_MENU_WAIT_MS") {
            config.waits.menu = wait;
        }
        if let Some(wait) = read_millis("AGENT_AREA_WAIT_MS") {
            config.waits.area = wait;
        }
        if let Some(wait) = read_millis("AGENT_INTERACTION_WAIT_MS") {
            config.waits.interaction = wait;
        }

        config
    }
}

/// Combat tuning shared by every encounter.
#[derive(Clone, Debug)]
pub struct CombatConfig {
    /// Attack requests against one target before the encounter is abandoned.
    pub attack_ceiling: u32,
    /// Engagement window of ranged and area skills.
    pub ranged: DistanceRange,
    /// Engagement window of the close-range fallback.
    pub melee: DistanceRange,
    /// Tightened window for bosses that punish distance.
    pub close_boss: DistanceRange,
    pub low_mana_percent: u32,
    pub low_mana_level: u32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_ceiling: 10,
            ranged: DistanceRange::new(25, 30),
            melee: DistanceRange::new(1, 3),
            close_boss: DistanceRange::new(1, 5),
            low_mana_percent: 15,
            low_mana_level: 15,
        }
    }
}

/// Bounded waits.
#[derive(Clone, Debug)]
pub struct WaitConfig {
    pub boss: Duration,
    pub poll: Duration,
    pub menu: Duration,
    pub area: Duration,
    pub interaction: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            boss: Duration::from_secs(20),
            poll: Duration::from_millis(200),
            menu: Duration::from_secs(2),
            area: Duration::from_secs(10),
            interaction: Duration::from_secs(5),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_millis(key: &str) -> Option<Duration> {
    read_env::<u64>(key).map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AgentConfig::default();
        assert_eq!(config.combat.attack_ceiling, 10);
        assert_eq!(config.combat.ranged, DistanceRange::new(25, 30));
        assert_eq!(config.combat.melee, DistanceRange::new(1, 3));
        assert_eq!(config.waits.boss, Duration::from_secs(20));
        assert_eq!(config.waits.poll, Duration::from_millis(200));
        assert_eq!(config.pass_limit, 1000);
    }
}
