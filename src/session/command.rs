//! Typed commands accepted by the `SessionManager`.
//!
//! The transport layer decodes incoming requests into a `Command` and hands it
//! to `SessionManager::dispatch`. The set is closed: a request that doesn't
//! decode into one of these variants never reaches a session.

use serde::{Deserialize, Serialize};

use super::lifecycle::TurnResult;
use crate::catalog::{AmmunitionId, WallId};
use crate::core::{CombatantId, Selection, SessionConfig, SessionId, TurnAction};
use crate::rules::EndResult;

/// A request against the session store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Create a new session.
    Start { config: SessionConfig },

    /// Stage a combatant's ammunition for the next turn.
    SelectAmmunition {
        session: SessionId,
        combatant: CombatantId,
        ammunition: Selection<AmmunitionId>,
    },

    /// Stage a combatant's wall for the next turn.
    SelectWall {
        session: SessionId,
        combatant: CombatantId,
        wall: Selection<WallId>,
    },

    /// Resolve and commit a turn.
    PlayTurn {
        session: SessionId,
        turn_number: u32,
        actions: Vec<TurnAction>,
    },

    /// Complete a session.
    End { session: SessionId },

    /// Suspend a session.
    Pause { session: SessionId },

    /// Resume a paused session.
    Resume { session: SessionId },
}

impl Command {
    /// Session this command targets. `None` for `Start`.
    #[must_use]
    pub const fn session(&self) -> Option<SessionId> {
        match self {
            Command::Start { .. } => None,
            Command::SelectAmmunition { session, .. }
            | Command::SelectWall { session, .. }
            | Command::PlayTurn { session, .. }
            | Command::End { session }
            | Command::Pause { session }
            | Command::Resume { session } => Some(*session),
        }
    }

    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Command::Start { .. } => "start",
            Command::SelectAmmunition { .. } => "select_ammunition",
            Command::SelectWall { .. } => "select_wall",
            Command::PlayTurn { .. } => "play_turn",
            Command::End { .. } => "end",
            Command::Pause { .. } => "pause",
            Command::Resume { .. } => "resume",
        }
    }
}

/// What a successfully dispatched command produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    Started(SessionId),
    SelectionStaged,
    TurnPlayed(TurnResult),
    Ended(EndResult),
    Paused,
    Resumed,
}
