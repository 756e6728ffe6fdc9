//! Simulated matches between bot policies.
//!
//! Used for single-player opponents and for balance runs over a catalog.
//! Seat randomness comes from `GameRng`, so results are reproducible.

pub mod policy;
pub mod runner;

pub use policy::{affordable_loadouts, CombatPolicy, GreedyPolicy, Loadout, PassivePolicy, RandomPolicy};
pub use runner::{MatchReport, MatchRunner, SeriesSummary, SimulationConfig};
