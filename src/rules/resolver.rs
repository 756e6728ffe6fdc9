//! Turn resolution - computing the damage of one simultaneous exchange.
//!
//! The `TurnResolver` is pure: it reads the catalog and the two submitted
//! actions and returns two `DamageReport`s. It never touches a `Session`;
//! committing results is the lifecycle's job.
//!
//! For each direction A → B, independently:
//!
//! ```text
//! raw    = A.ammunition.damage   (0 without ammunition)
//! wall   = B.wall.defense        (0 without a wall)
//! damage = max(0, raw - wall)
//! ```
//!
//! Both directions read the opponent's submitted wall, not anything produced
//! by the other direction, so the order reports are applied in never changes
//! the numbers.

use tracing::debug;

use crate::catalog::Catalog;
use crate::core::{DamageReport, TurnAction};
use crate::error::{CombatError, Result};

/// Resolves turn submissions against a catalog.
pub struct TurnResolver;

impl TurnResolver {
    /// Resolve a turn.
    ///
    /// `actions` must hold exactly two actions naming distinct combatants.
    /// Reports come back in the same order as `actions`.
    ///
    /// ```
    /// use rust_duel::catalog::{AmmunitionId, Catalog, WallId};
    /// use rust_duel::core::{CombatantId, TurnAction};
    /// use rust_duel::rules::TurnResolver;
    ///
    /// let catalog = Catalog::standard();
    /// let actions = [
    ///     TurnAction::new(CombatantId::First).with_ammunition(AmmunitionId::new(3)),
    ///     TurnAction::new(CombatantId::Second).with_wall(WallId::new(1)),
    /// ];
    ///
    /// let [to_second, to_first] = TurnResolver::resolve(catalog, &actions).unwrap();
    /// assert_eq!(to_second.damage, 20); // 30 - 10
    /// assert_eq!(to_first.damage, 0);
    /// ```
    pub fn resolve(catalog: &Catalog, actions: &[TurnAction]) -> Result<[DamageReport; 2]> {
        let [first, second] = Self::validate_composition(actions)?;

        let reports = [
            Self::exchange(catalog, first, second)?,
            Self::exchange(catalog, second, first)?,
        ];

        debug!(
            first = %reports[0].from,
            first_damage = reports[0].damage,
            second = %reports[1].from,
            second_damage = reports[1].damage,
            "resolved turn"
        );

        Ok(reports)
    }

    /// Check that a submission holds one action for each combatant.
    pub fn validate_composition(actions: &[TurnAction]) -> Result<[&TurnAction; 2]> {
        match actions {
            [first, second] if first.combatant == second.combatant => {
                Err(CombatError::InvalidTurnComposition {
                    reason: "both actions name the same combatant",
                })
            }
            [first, second] => Ok([first, second]),
            _ => Err(CombatError::InvalidTurnComposition {
                reason: "exactly two actions are required",
            }),
        }
    }

    /// Resolve one direction of the exchange.
    pub fn exchange(
        catalog: &Catalog,
        attacker: &TurnAction,
        defender: &TurnAction,
    ) -> Result<DamageReport> {
        let raw = catalog.resolve_ammunition(attacker.ammunition)?.map_or(0, |a| a.damage);
        let defense = catalog.resolve_wall(defender.wall)?.map_or(0, |w| w.defense);

        Ok(DamageReport {
            from: attacker.combatant,
            to: defender.combatant,
            damage: mitigated_damage(raw, defense),
            ammunition: attacker.ammunition,
            defended_by: defense,
        })
    }
}

/// Damage left after a wall absorbs what it can. Never negative.
#[must_use]
pub const fn mitigated_damage(raw: u32, defense: u32) -> u32 {
    raw.saturating_sub(defense)
}
