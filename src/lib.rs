//! # rust-duel
//!
//! A two-combatant, turn-based combat engine. Each turn both combatants
//! simultaneously fire ammunition at each other and raise a wall, paying for
//! both from a point budget. Damage is mitigated by the defender's wall and
//! the session ends on knockout, on a turn limit, or when asked to.
//!
//! ## Design Principles
//!
//! 1. **Exactly Two Combatants**: `CombatantId` has two variants and
//!    per-combatant data lives in a `Pair`, so there is no seat count to get
//!    wrong.
//!
//! 2. **Atomic Turns**: A turn is fully validated before anything is
//!    written. A rejected turn leaves the session untouched.
//!
//! 3. **Typed Inputs**: Selections are `Selection::None | Selection::Item(id)`
//!    and requests are a closed `Command` enum.
//!
//! ## Architecture
//!
//! - **Persistent Journal**: Turn history is an `im::Vector`, so session
//!   snapshots are cheap clones.
//!
//! - **Per-Session Locking**: `SessionManager` holds each session behind its
//!   own mutex. Turns for one session are serialized; sessions don't contend.
//!
//! ## Modules
//!
//! - `core`: Combatant ids, configuration, turn actions, session state, RNG
//! - `catalog`: Ammunition and wall definitions
//! - `rules`: Turn resolution and winner determination
//! - `session`: Lifecycle operations, session store, commands, snapshots
//! - `simulation`: Bot policies and match runner
//! - `error`: `CombatError` and the crate `Result`

pub mod catalog;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    CombatantId, Pair,
    CombatantConfig, SessionConfig,
    Selection, TurnAction, DamageReport, TurnRecord,
    Combatant, Session, SessionId, SessionStatus,
    GameRng, GameRngState,
};

pub use crate::catalog::{Ammunition, AmmunitionId, Wall, WallId, Catalog, CatalogBuilder, CatalogError};

pub use crate::error::{CombatError, Result};

pub use crate::rules::{EndResult, TerminationReason, CombatantStats, TurnResolver};

pub use crate::session::{Command, CommandOutcome, SessionLifecycle, SessionManager, TurnResult};

pub use crate::simulation::{
    CombatPolicy, PassivePolicy, RandomPolicy, GreedyPolicy,
    MatchRunner, MatchReport, SeriesSummary, SimulationConfig,
};
