//! Session lifecycle and the session store.
//!
//! - `SessionLifecycle`: start, select, play turns, pause/resume, end
//! - `SessionManager`: owns sessions by id and serializes access per session
//! - `Command`: the closed set of operations the manager accepts
//! - `snapshot`: binary encoding of session state

pub mod command;
pub mod lifecycle;
pub mod manager;
pub mod snapshot;

pub use command::{Command, CommandOutcome};
pub use lifecycle::{SessionLifecycle, TurnResult};
pub use manager::SessionManager;
pub use snapshot::SnapshotError;
