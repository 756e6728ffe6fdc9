//! Session configuration types.
//!
//! Callers configure a duel at start time by providing:
//! - `CombatantConfig`: Initial health and points for one combatant
//! - `SessionConfig`: Both combatants plus the turn limit
//!
//! Configuration is validated when a session starts, not when it is built,
//! so a config deserialized from an external source goes through the same
//! checks as one assembled in code.

use serde::{Deserialize, Serialize};

use crate::error::{CombatError, Result};

/// Default starting health for a combatant.
pub const DEFAULT_HEALTH: u32 = 100;

/// Default starting points for a combatant.
pub const DEFAULT_POINTS: u32 = 100;

/// Default number of turns before a session completes on its own.
pub const DEFAULT_TURN_LIMIT: u32 = 10;

/// Initial state for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantConfig {
    /// Starting health.
    pub health: u32,

    /// Starting points available to spend on ammunition and walls.
    pub points: u32,
}

impl CombatantConfig {
    /// Create a combatant configuration.
    #[must_use]
    pub const fn new(health: u32, points: u32) -> Self {
        Self { health, points }
    }

    /// Set starting health.
    #[must_use]
    pub const fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    /// Set starting points.
    #[must_use]
    pub const fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }
}

impl Default for CombatantConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH, DEFAULT_POINTS)
    }
}

/// Complete session configuration.
///
/// `combatants` is a list rather than a fixed pair so that a malformed
/// request (one or three entries) can be represented and rejected with
/// `InvalidConfiguration` instead of being unrepresentable at the boundary.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{CombatantConfig, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_combatant(CombatantConfig::new(100, 50))
///     .with_combatant(CombatantConfig::new(100, 50))
///     .with_turn_limit(5);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Combatant configurations in listing order.
    pub combatants: Vec<CombatantConfig>,

    /// Number of turns that may be played. `None` for unlimited.
    pub turn_limit: Option<u32>,
}

impl SessionConfig {
    /// Create a configuration with no combatants and the default turn limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            combatants: Vec::new(),
            turn_limit: Some(DEFAULT_TURN_LIMIT),
        }
    }

    /// Create a configuration for two combatants.
    #[must_use]
    pub fn duel(first: CombatantConfig, second: CombatantConfig) -> Self {
        Self::new().with_combatant(first).with_combatant(second)
    }

    /// Add a combatant configuration.
    #[must_use]
    pub fn with_combatant(mut self, combatant: CombatantConfig) -> Self {
        self.combatants.push(combatant);
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = Some(limit);
        self
    }

    /// Remove the turn limit.
    #[must_use]
    pub fn without_turn_limit(mut self) -> Self {
        self.turn_limit = None;
        self
    }

    /// Check the configuration and return both combatant configs.
    pub fn validate(&self) -> Result<[CombatantConfig; 2]> {
        if self.turn_limit == Some(0) {
            return Err(CombatError::InvalidConfiguration {
                reason: "turn limit must be at least 1",
            });
        }

        match self.combatants.as_slice() {
            [first, second] if first.health == 0 || second.health == 0 => {
                Err(CombatError::InvalidConfiguration {
                    reason: "starting health must be at least 1",
                })
            }
            [first, second] => Ok([*first, *second]),
            _ => Err(CombatError::InvalidConfiguration {
                reason: "exactly two combatants are required",
            }),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::duel(CombatantConfig::default(), CombatantConfig::default())
    }
}
