//! Combat rules: turn resolution and winner determination.
//!
//! Everything here is a pure function of its inputs. The session lifecycle
//! calls into these rules and is the only place results are committed.

pub mod outcome;
pub mod resolver;

pub use outcome::{determine_winner, termination_due, CombatantStats, EndResult, TerminationReason};
pub use resolver::{mitigated_damage, TurnResolver};
