//! Core engine types: combatants, configuration, turn actions, session state, RNG.
//!
//! These are the data the resolver reads and the lifecycle mutates. Nothing
//! in this module performs turn resolution itself.

pub mod action;
pub mod combatant;
pub mod config;
pub mod rng;
pub mod state;

pub use action::{DamageReport, Selection, TurnAction, TurnRecord};
pub use combatant::{CombatantId, Pair};
pub use config::{CombatantConfig, SessionConfig, DEFAULT_HEALTH, DEFAULT_POINTS, DEFAULT_TURN_LIMIT};
pub use rng::{GameRng, GameRngState};
pub use state::{Combatant, InvalidSession, Session, SessionFields, SessionId, SessionStatus};
