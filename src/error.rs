//! Error taxonomy for the combat engine.
//!
//! Every failure is a local validation failure detected before any session
//! state is touched. Callers receive exactly one `CombatError` and the
//! session they passed in is left unchanged.
//!
//! Each variant carries a stable `error_code()` so presentation layers can map
//! failures to distinct messages without matching on `Display` text.

use crate::catalog::{AmmunitionId, WallId};
use crate::core::{CombatantId, SessionId, SessionStatus};

/// Errors surfaced by catalog lookups, turn resolution, and the session lifecycle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Session configuration is unusable (wrong combatant count, zero turn limit).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },

    /// Turn submission does not hold exactly one action per combatant.
    #[error("invalid turn composition: {reason}")]
    InvalidTurnComposition { reason: &'static str },

    /// An ammunition selection names an id that is not in the catalog.
    #[error("unknown ammunition: {0}")]
    UnknownAmmunition(AmmunitionId),

    /// A wall selection names an id that is not in the catalog.
    #[error("unknown wall: {0}")]
    UnknownWall(WallId),

    /// Submitted turn number is not the session's current turn.
    #[error("turn number mismatch: expected {expected}, got {submitted}")]
    TurnNumberMismatch { expected: u32, submitted: u32 },

    /// The session is not in a state that accepts this operation.
    #[error("{session} is {status}, operation rejected")]
    StaleSession {
        session: SessionId,
        status: SessionStatus,
    },

    /// A combatant cannot pay for its own selections.
    #[error("{combatant} needs {required} points but has {available}")]
    InsufficientPoints {
        combatant: CombatantId,
        required: u32,
        available: u32,
    },

    /// No session with this id is held by the manager.
    #[error("{0} not found")]
    SessionNotFound(SessionId),
}

impl CombatError {
    /// Stable identifier for this error variant.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "invalid_configuration",
            Self::InvalidTurnComposition { .. } => "invalid_turn_composition",
            Self::UnknownAmmunition(_) => "unknown_ammunition",
            Self::UnknownWall(_) => "unknown_wall",
            Self::TurnNumberMismatch { .. } => "turn_number_mismatch",
            Self::StaleSession { .. } => "stale_session",
            Self::InsufficientPoints { .. } => "insufficient_points",
            Self::SessionNotFound(_) => "session_not_found",
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CombatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            CombatError::InvalidConfiguration { reason: "x" },
            CombatError::InvalidTurnComposition { reason: "x" },
            CombatError::UnknownAmmunition(AmmunitionId::new(9)),
            CombatError::UnknownWall(WallId::new(9)),
            CombatError::TurnNumberMismatch { expected: 1, submitted: 2 },
            CombatError::StaleSession {
                session: SessionId::new(1),
                status: SessionStatus::Completed,
            },
            CombatError::InsufficientPoints {
                combatant: CombatantId::First,
                required: 10,
                available: 5,
            },
            CombatError::SessionNotFound(SessionId::new(3)),
        ];

        let mut codes: Vec<_> = errors.iter().map(CombatError::error_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_error_display() {
        let err = CombatError::InsufficientPoints {
            combatant: CombatantId::Second,
            required: 40,
            available: 25,
        };
        assert_eq!(err.to_string(), "Second combatant needs 40 points but has 25");

        let err = CombatError::TurnNumberMismatch { expected: 3, submitted: 4 };
        assert_eq!(err.to_string(), "turn number mismatch: expected 3, got 4");
    }
}
