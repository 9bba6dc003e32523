//! Per-encounter state machine.
use game_core::{AttackRequest, Monster, Resist, Snapshot, UnitId};

/// Outcome of one decision tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// No candidate left; the encounter is over.
    Resolved,
    /// The candidate failed a pre-engagement check and is left alone.
    Skipped(UnitId),
    /// The attack ceiling was reached against the same target.
    Stalled(UnitId),
    Attack(AttackRequest),
}

impl Decision {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Decision::Attack(_))
    }
}

/// Loop-local engagement state: the previous target and the number of
/// attacks issued against it.
///
/// The counter restarts whenever the selected target changes and never
/// exceeds the ceiling.
#[derive(Clone, Debug)]
pub struct Engagement {
    previous: Option<UnitId>,
    attacks: u32,
    ceiling: u32,
}

impl Engagement {
    pub fn new(ceiling: u32) -> Self {
        Self {
            previous: None,
            attacks: 0,
            ceiling,
        }
    }

    /// Attacks issued against the current target.
    pub fn attacks(&self) -> u32 {
        self.attacks
    }

    pub fn target(&self) -> Option<UnitId> {
        self.previous
    }

    /// Decides the next step against `candidate`.
    ///
    /// `attack` builds the request once the candidate passed every check.
    pub fn next<F>(
        &mut self,
        snapshot: &Snapshot,
        candidate: Option<UnitId>,
        skip_on_immunities: &[Resist],
        attack: F,
    ) -> Decision
    where
        F: FnOnce(&Monster) -> AttackRequest,
    {
        let Some(id) = candidate else {
            return Decision::Resolved;
        };
        let Some(monster) = snapshot.monster(id) else {
            tracing::info!(%id, "selected monster not found");
            return Decision::Resolved;
        };
        if let Some(resist) = skip_on_immunities
            .iter()
            .find(|resist| monster.is_immune(**resist))
        {
            tracing::debug!(%id, %resist, "target immune, skipping");
            return Decision::Skipped(id);
        }

        if self.previous != Some(id) {
            self.previous = Some(id);
            self.attacks = 0;
        }
        if self.attacks >= self.ceiling {
            return Decision::Stalled(id);
        }

        self.attacks += 1;
        Decision::Attack(attack(monster))
    }
}
