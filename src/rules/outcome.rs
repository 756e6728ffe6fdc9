//! Termination and winner determination.

use serde::{Deserialize, Serialize};

use crate::core::{Combatant, CombatantId, Pair, Session};

/// Why a session completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    /// The caller ended the session.
    Ended,
    /// The configured number of turns has been played.
    TurnLimit,
    /// A combatant's health reached 0.
    Knockout(CombatantId),
}

/// Final figures for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub combatant: CombatantId,
    pub health: u32,
    pub points: u32,
    pub total_damage_dealt: u32,
}

impl From<&Combatant> for CombatantStats {
    fn from(combatant: &Combatant) -> Self {
        Self {
            combatant: combatant.id,
            health: combatant.health,
            points: combatant.points,
            total_damage_dealt: combatant.total_damage_dealt,
        }
    }
}

/// Result of a completed session. Frozen once produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndResult {
    /// Winning combatant.
    pub winner: CombatantId,

    /// What ended the session.
    pub reason: TerminationReason,

    /// Number of turns committed before completion.
    pub turns_played: u32,

    /// Per-combatant figures in listing order.
    pub stats: [CombatantStats; 2],
}

impl EndResult {
    /// Build the result for a session that is completing now.
    #[must_use]
    pub fn for_session(session: &Session, reason: TerminationReason) -> Self {
        let combatants = session.combatants();
        Self {
            winner: determine_winner(combatants),
            reason,
            turns_played: session.turns_played(),
            stats: [
                CombatantStats::from(&combatants[CombatantId::First]),
                CombatantStats::from(&combatants[CombatantId::Second]),
            ],
        }
    }

    /// Figures for one combatant.
    #[must_use]
    pub fn stats_for(&self, combatant: CombatantId) -> &CombatantStats {
        &self.stats[combatant.index()]
    }
}

/// Pick the winner: highest health, then most damage dealt.
///
/// The sort is stable, so a full tie goes to the first-listed combatant.
#[must_use]
pub fn determine_winner(combatants: &Pair<Combatant>) -> CombatantId {
    let mut ranking: Vec<&Combatant> = combatants.iter().map(|(_, c)| c).collect();
    ranking.sort_by(|a, b| {
        b.health
            .cmp(&a.health)
            .then_with(|| b.total_damage_dealt.cmp(&a.total_damage_dealt))
    });
    ranking.first().map_or(CombatantId::First, |c| c.id)
}

/// Check whether a session has hit an automatic termination condition.
///
/// Knockout takes precedence over the turn limit when both apply.
#[must_use]
pub fn termination_due(session: &Session) -> Option<TerminationReason> {
    if let Some((id, _)) = session.combatants().iter().find(|(_, c)| c.is_defeated()) {
        return Some(TerminationReason::Knockout(id));
    }

    match session.turn_limit() {
        Some(limit) if session.current_turn() > limit => Some(TerminationReason::TurnLimit),
        _ => None,
    }
}
