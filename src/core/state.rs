//! Session state: combatants, status, and the turn journal.
//!
//! ## Combatant
//!
//! Health, points, accumulated damage, and the selections staged for the
//! next turn.
//!
//! ## Session
//!
//! One duel's full state. Fields are only mutated by the lifecycle in
//! `crate::session`, which keeps these invariants at every observable point:
//! - exactly two combatants
//! - `current_turn` grows by one per committed turn
//! - `turn_history[i].turn_number == i + 1`
//! - once `Completed`, nothing changes again
//!
//! The journal is an `im::Vector`, so cloning a session for a snapshot is
//! O(1) regardless of how many turns have been played.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Selection, TurnRecord};
use super::combatant::{CombatantId, Pair};
use super::config::CombatantConfig;
use crate::catalog::{AmmunitionId, WallId};
use crate::rules::EndResult;

/// Identifier of a session held by the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Lifecycle status of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Turns and selections are accepted.
    Active,
    /// Finished. Terminal.
    Completed,
    /// Inert until resumed.
    Paused,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
            SessionStatus::Paused => "paused",
        };
        f.write_str(label)
    }
}

/// One party in a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Position in the session.
    pub id: CombatantId,

    /// Remaining health. Floors at 0.
    pub health: u32,

    /// Damage this combatant has inflicted so far. Never decreases.
    pub total_damage_dealt: u32,

    /// Points available for ammunition and walls.
    pub points: u32,

    /// Ammunition staged for the next turn.
    pub selected_ammunition: Selection<AmmunitionId>,

    /// Wall staged for the next turn.
    pub selected_wall: Selection<WallId>,
}

impl Combatant {
    /// Create a combatant from its starting configuration.
    #[must_use]
    pub fn new(id: CombatantId, config: &CombatantConfig) -> Self {
        Self {
            id,
            health: config.health,
            total_damage_dealt: 0,
            points: config.points,
            selected_ammunition: Selection::None,
            selected_wall: Selection::None,
        }
    }

    /// Check if health has reached 0.
    #[must_use]
    pub const fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Reduce health by `damage`, flooring at 0.
    pub(crate) fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub(damage);
    }

    /// Credit damage inflicted on the opponent.
    pub(crate) fn record_damage_dealt(&mut self, damage: u32) {
        self.total_damage_dealt = self.total_damage_dealt.saturating_add(damage);
    }

    /// Drop both staged selections.
    pub(crate) fn clear_selections(&mut self) {
        self.selected_ammunition = Selection::None;
        self.selected_wall = Selection::None;
    }
}

/// A deserialized session whose fields contradict each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("inconsistent session state: {0}")]
pub struct InvalidSession(pub &'static str);

/// Full state of one duel.
///
/// Deserialization goes through [`SessionFields`] and is rejected unless the
/// journal, turn counter, status, and outcome agree with each other.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionFields")]
pub struct Session {
    pub(crate) id: SessionId,
    pub(crate) status: SessionStatus,
    pub(crate) current_turn: u32,
    pub(crate) turn_limit: Option<u32>,
    pub(crate) combatants: Pair<Combatant>,
    pub(crate) turn_history: Vector<TurnRecord>,
    pub(crate) outcome: Option<EndResult>,
}

/// Unchecked wire form of a [`Session`].
#[derive(Deserialize)]
pub struct SessionFields {
    id: SessionId,
    status: SessionStatus,
    current_turn: u32,
    turn_limit: Option<u32>,
    combatants: Pair<Combatant>,
    turn_history: Vector<TurnRecord>,
    outcome: Option<EndResult>,
}

impl TryFrom<SessionFields> for Session {
    type Error = InvalidSession;

    fn try_from(fields: SessionFields) -> Result<Self, Self::Error> {
        let session = Session {
            id: fields.id,
            status: fields.status,
            current_turn: fields.current_turn,
            turn_limit: fields.turn_limit,
            combatants: fields.combatants,
            turn_history: fields.turn_history,
            outcome: fields.outcome,
        };
        session.check_consistency()?;
        Ok(session)
    }
}

impl Session {
    /// Create an active session at turn 1 with an empty journal.
    pub(crate) fn new(id: SessionId, combatants: [CombatantConfig; 2], turn_limit: Option<u32>) -> Self {
        Self {
            id,
            status: SessionStatus::Active,
            current_turn: 1,
            turn_limit,
            combatants: Pair::new(|c| Combatant::new(c, &combatants[c.index()])),
            turn_history: Vector::new(),
            outcome: None,
        }
    }

    /// Session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check if turns may be played.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Check if the session has finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Number of the next turn to be played (starts at 1).
    #[must_use]
    pub const fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Number of turns committed so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.current_turn.saturating_sub(1)
    }

    /// Configured turn limit, if any.
    #[must_use]
    pub const fn turn_limit(&self) -> Option<u32> {
        self.turn_limit
    }

    /// Get a combatant by position.
    #[must_use]
    pub fn combatant(&self, id: CombatantId) -> &Combatant {
        &self.combatants[id]
    }

    /// Both combatants.
    #[must_use]
    pub const fn combatants(&self) -> &Pair<Combatant> {
        &self.combatants
    }

    /// The turn journal, oldest first.
    #[must_use]
    pub const fn turn_history(&self) -> &Vector<TurnRecord> {
        &self.turn_history
    }

    /// The most recent journal entry.
    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnRecord> {
        self.turn_history.last()
    }

    /// Winner, once the session has completed.
    #[must_use]
    pub fn winner(&self) -> Option<CombatantId> {
        self.outcome.as_ref().map(|outcome| outcome.winner)
    }

    /// Final result, once the session has completed.
    #[must_use]
    pub const fn outcome(&self) -> Option<&EndResult> {
        self.outcome.as_ref()
    }

    /// Check the invariants the lifecycle maintains.
    pub(crate) fn check_consistency(&self) -> Result<(), InvalidSession> {
        if self.current_turn == 0 {
            return Err(InvalidSession("current turn must be at least 1"));
        }
        if self.turn_history.len() != self.turns_played() as usize {
            return Err(InvalidSession("journal length does not match current turn"));
        }
        if (1u32..).zip(&self.turn_history).any(|(n, record)| record.turn_number != n) {
            return Err(InvalidSession("journal turn numbers are not contiguous from 1"));
        }
        if self.combatants.iter().any(|(seat, combatant)| combatant.id != seat) {
            return Err(InvalidSession("combatant stored under the wrong position"));
        }
        if (self.status == SessionStatus::Completed) != self.outcome.is_some() {
            return Err(InvalidSession("only completed sessions carry an outcome"));
        }
        Ok(())
    }
}
