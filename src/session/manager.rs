//! Session store keyed by `SessionId`.
//!
//! The manager owns every live session. Each one sits behind its own
//! `parking_lot::Mutex`, so at most one operation runs against a given
//! session at a time while different sessions proceed in parallel. The index
//! lock is only held long enough to clone a session handle.
//!
//! ```
//! use rust_duel::catalog::AmmunitionId;
//! use rust_duel::core::{CombatantId, SessionConfig, TurnAction};
//! use rust_duel::session::SessionManager;
//!
//! let manager = SessionManager::default();
//! let id = manager.start(&SessionConfig::default()).unwrap();
//!
//! let actions = [
//!     TurnAction::new(CombatantId::First).with_ammunition(AmmunitionId::new(1)),
//!     TurnAction::new(CombatantId::Second),
//! ];
//! let result = manager.play_turn(id, 1, &actions).unwrap();
//! assert_eq!(result.damages[0].damage, 10);
//!
//! let end = manager.end(id).unwrap();
//! assert_eq!(end.winner, CombatantId::First);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::command::{Command, CommandOutcome};
use super::lifecycle::{SessionLifecycle, TurnResult};
use crate::catalog::{AmmunitionId, Catalog, WallId};
use crate::core::{CombatantId, Selection, Session, SessionConfig, SessionId, TurnAction};
use crate::error::{CombatError, Result};
use crate::rules::EndResult;

type SessionHandle = Arc<Mutex<Session>>;

/// Owns sessions and serializes access to each one.
pub struct SessionManager {
    catalog: Arc<Catalog>,
    sessions: RwLock<FxHashMap<SessionId, SessionHandle>>,
    next_id: AtomicU64,
}

impl SessionManager {
    /// Create a manager resolving turns against `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            sessions: RwLock::new(FxHashMap::default()),
            next_id: AtomicU64::new(1),
        }
    }

    /// The catalog turns are resolved against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Create a session and return its id.
    pub fn start(&self, config: &SessionConfig) -> Result<SessionId> {
        // Validate before allocating so rejected configs don't burn ids.
        config.validate()?;

        let id = SessionId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let session = SessionLifecycle::start(id, config)?;
        self.sessions.write().insert(id, Arc::new(Mutex::new(session)));
        Ok(id)
    }

    /// Stage a combatant's ammunition.
    pub fn select_ammunition(
        &self,
        id: SessionId,
        combatant: CombatantId,
        ammunition: Selection<AmmunitionId>,
    ) -> Result<()> {
        self.with_session(id, |session| {
            SessionLifecycle::select_ammunition(session, combatant, ammunition, &self.catalog)
        })
    }

    /// Stage a combatant's wall.
    pub fn select_wall(&self, id: SessionId, combatant: CombatantId, wall: Selection<WallId>) -> Result<()> {
        self.with_session(id, |session| {
            SessionLifecycle::select_wall(session, combatant, wall, &self.catalog)
        })
    }

    /// Resolve and commit a turn.
    pub fn play_turn(&self, id: SessionId, turn_number: u32, actions: &[TurnAction]) -> Result<TurnResult> {
        self.with_session(id, |session| {
            SessionLifecycle::play_turn(session, turn_number, actions, &self.catalog)
        })
        .inspect_err(|err| {
            warn!(session = %id, turn = turn_number, code = err.error_code(), "turn rejected: {err}");
        })
    }

    /// Complete a session. Repeated calls return the same result.
    pub fn end(&self, id: SessionId) -> Result<EndResult> {
        self.with_session(id, |session| Ok(SessionLifecycle::end(session)))
    }

    /// Suspend a session.
    pub fn pause(&self, id: SessionId) -> Result<()> {
        self.with_session(id, SessionLifecycle::pause)
    }

    /// Resume a paused session.
    pub fn resume(&self, id: SessionId) -> Result<()> {
        self.with_session(id, SessionLifecycle::resume)
    }

    /// Copy of a session's current state.
    pub fn snapshot(&self, id: SessionId) -> Result<Session> {
        self.with_session(id, |session| Ok(session.clone()))
    }

    /// Drop a session from the store, returning its final state.
    pub fn remove(&self, id: SessionId) -> Result<Session> {
        let handle = self
            .sessions
            .write()
            .remove(&id)
            .ok_or(CombatError::SessionNotFound(id))?;
        let session = handle.lock().clone();
        Ok(session)
    }

    /// Ids of all held sessions, ascending.
    #[must_use]
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.sessions.read().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of held sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Check if no sessions are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Execute a typed command.
    pub fn dispatch(&self, command: Command) -> Result<CommandOutcome> {
        debug!(command = command.name(), session = ?command.session(), "dispatching");

        match command {
            Command::Start { config } => self.start(&config).map(CommandOutcome::Started),
            Command::SelectAmmunition {
                session,
                combatant,
                ammunition,
            } => self
                .select_ammunition(session, combatant, ammunition)
                .map(|()| CommandOutcome::SelectionStaged),
            Command::SelectWall {
                session,
                combatant,
                wall,
            } => self
                .select_wall(session, combatant, wall)
                .map(|()| CommandOutcome::SelectionStaged),
            Command::PlayTurn {
                session,
                turn_number,
                actions,
            } => self
                .play_turn(session, turn_number, &actions)
                .map(CommandOutcome::TurnPlayed),
            Command::End { session } => self.end(session).map(CommandOutcome::Ended),
            Command::Pause { session } => self.pause(session).map(|()| CommandOutcome::Paused),
            Command::Resume { session } => self.resume(session).map(|()| CommandOutcome::Resumed),
        }
    }

    fn handle(&self, id: SessionId) -> Result<SessionHandle> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(CombatError::SessionNotFound(id))
    }

    fn with_session<T>(&self, id: SessionId, f: impl FnOnce(&mut Session) -> Result<T>) -> Result<T> {
        let handle = self.handle(id)?;
        let mut session = handle.lock();
        f(&mut session)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::standard().clone()))
    }
}
