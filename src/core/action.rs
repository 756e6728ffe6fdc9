//! Turn submissions and their journaled results.
//!
//! A turn is two simultaneous `TurnAction`s, one per combatant. Each action
//! carries an ammunition `Selection` and a wall `Selection`; either may be
//! `Selection::None` ("no attack", "no defense"), which is a legal choice and
//! never an error.
//!
//! Resolution produces two `DamageReport`s and, once committed, a
//! `TurnRecord` is appended to the session journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::combatant::CombatantId;
use super::state::Combatant;
use crate::catalog::{AmmunitionId, WallId};

/// An optional catalog selection.
///
/// Absence of a selection is its own variant so that "nothing chosen" and
/// "chose an id the catalog doesn't know" can never be confused.
///
/// ```
/// use rust_duel::catalog::AmmunitionId;
/// use rust_duel::core::Selection;
///
/// let none: Selection<AmmunitionId> = Selection::None;
/// let stone = Selection::Item(AmmunitionId::new(1));
///
/// assert!(none.is_none());
/// assert_eq!(stone.item(), Some(AmmunitionId::new(1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection<T> {
    /// Nothing selected.
    None,
    /// A catalog id.
    Item(T),
}

impl<T> Selection<T> {
    /// Check if nothing is selected.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Check if an id is selected.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Selection::Item(_))
    }

    /// Get the selected id, if any.
    #[must_use]
    pub fn item(self) -> Option<T> {
        match self {
            Selection::None => None,
            Selection::Item(id) => Some(id),
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::None
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::None, Selection::Item)
    }
}

/// One combatant's half of a turn submission.
///
/// ## Example
///
/// ```
/// use rust_duel::catalog::{AmmunitionId, WallId};
/// use rust_duel::core::{CombatantId, TurnAction};
///
/// let attack = TurnAction::new(CombatantId::First)
///     .with_ammunition(AmmunitionId::new(3))
///     .with_wall(WallId::new(1));
///
/// let idle = TurnAction::new(CombatantId::Second);
/// assert!(idle.ammunition.is_none());
/// assert!(idle.wall.is_none());
/// # let _ = attack;
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnAction {
    /// Who is acting.
    pub combatant: CombatantId,

    /// Attack item fired at the opponent.
    pub ammunition: Selection<AmmunitionId>,

    /// Defense item raised against the opponent's attack.
    pub wall: Selection<WallId>,
}

impl TurnAction {
    /// Create an action with no attack and no defense.
    #[must_use]
    pub const fn new(combatant: CombatantId) -> Self {
        Self {
            combatant,
            ammunition: Selection::None,
            wall: Selection::None,
        }
    }

    /// Build an action from a combatant's staged selections.
    #[must_use]
    pub const fn from_combatant(combatant: &Combatant) -> Self {
        Self {
            combatant: combatant.id,
            ammunition: combatant.selected_ammunition,
            wall: combatant.selected_wall,
        }
    }

    /// Select ammunition.
    #[must_use]
    pub const fn with_ammunition(mut self, id: AmmunitionId) -> Self {
        self.ammunition = Selection::Item(id);
        self
    }

    /// Select a wall.
    #[must_use]
    pub const fn with_wall(mut self, id: WallId) -> Self {
        self.wall = Selection::Item(id);
        self
    }
}

/// Damage dealt along one direction of a turn's exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageReport {
    /// Attacker.
    pub from: CombatantId,

    /// Defender.
    pub to: CombatantId,

    /// Damage after wall mitigation. Never negative.
    pub damage: u32,

    /// Ammunition the attacker fired.
    pub ammunition: Selection<AmmunitionId>,

    /// Defense value of the defender's wall (0 without a wall).
    pub defended_by: u32,
}

/// Journal entry for a committed turn. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Both actions in submission order.
    pub actions: [TurnAction; 2],

    /// Both damage reports in submission order.
    pub damages: [DamageReport; 2],

    /// Commit time.
    pub timestamp: DateTime<Utc>,
}

impl TurnRecord {
    /// Total damage dealt by a combatant during this turn.
    #[must_use]
    pub fn damage_from(&self, combatant: CombatantId) -> u32 {
        self.damages
            .iter()
            .filter(|report| report.from == combatant)
            .map(|report| report.damage)
            .sum()
    }

    /// The action a combatant submitted during this turn.
    #[must_use]
    pub fn action_of(&self, combatant: CombatantId) -> Option<&TurnAction> {
        self.actions.iter().find(|action| action.combatant == combatant)
    }
}
