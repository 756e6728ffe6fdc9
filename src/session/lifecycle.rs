//! Session lifecycle: start, stage selections, play turns, end.
//!
//! Every operation validates completely before it mutates anything, so a
//! failed call leaves the session exactly as it was. `play_turn` either
//! commits damage, point deduction, the journal entry, and the turn increment
//! together, or none of them.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{AmmunitionId, Catalog, WallId};
use crate::core::{
    CombatantId, DamageReport, Selection, Session, SessionConfig, SessionId, SessionStatus, TurnAction,
    TurnRecord,
};
use crate::error::{CombatError, Result};
use crate::rules::{termination_due, EndResult, TerminationReason, TurnResolver};

/// Result of a committed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Number of the turn that was committed.
    pub turn_number: u32,

    /// Damage reports in submission order.
    pub damages: [DamageReport; 2],

    /// Set when this turn completed the session (knockout or turn limit).
    pub outcome: Option<EndResult>,
}

/// Operations that create and advance sessions.
pub struct SessionLifecycle;

impl SessionLifecycle {
    /// Create an active session at turn 1.
    ///
    /// ```
    /// use rust_duel::core::{SessionConfig, SessionId, SessionStatus};
    /// use rust_duel::session::SessionLifecycle;
    ///
    /// let session = SessionLifecycle::start(SessionId::new(1), &SessionConfig::default()).unwrap();
    /// assert_eq!(session.status(), SessionStatus::Active);
    /// assert_eq!(session.current_turn(), 1);
    /// ```
    pub fn start(id: SessionId, config: &SessionConfig) -> Result<Session> {
        let combatants = config.validate()?;
        let session = Session::new(id, combatants, config.turn_limit);

        info!(session = %id, turn_limit = ?config.turn_limit, "session started");
        Ok(session)
    }

    /// Stage an ammunition selection for a combatant's next turn.
    ///
    /// The staged ammunition plus the already staged wall must be affordable.
    pub fn select_ammunition(
        session: &mut Session,
        combatant: CombatantId,
        ammunition: Selection<AmmunitionId>,
        catalog: &Catalog,
    ) -> Result<()> {
        Self::require_active(session)?;
        let wall = session.combatant(combatant).selected_wall;
        Self::check_affordable(session, combatant, catalog.selection_cost(ammunition, wall)?)?;

        session.combatants[combatant].selected_ammunition = ammunition;
        debug!(session = %session.id, %combatant, ?ammunition, "ammunition selected");
        Ok(())
    }

    /// Stage a wall selection for a combatant's next turn.
    pub fn select_wall(
        session: &mut Session,
        combatant: CombatantId,
        wall: Selection<WallId>,
        catalog: &Catalog,
    ) -> Result<()> {
        Self::require_active(session)?;
        let ammunition = session.combatant(combatant).selected_ammunition;
        Self::check_affordable(session, combatant, catalog.selection_cost(ammunition, wall)?)?;

        session.combatants[combatant].selected_wall = wall;
        debug!(session = %session.id, %combatant, ?wall, "wall selected");
        Ok(())
    }

    /// Resolve and commit one turn.
    ///
    /// Checks, in order: the session is active, `turn_number` is the current
    /// turn, the submission resolves, and both combatants can pay for their
    /// own selections. Only then is anything written.
    pub fn play_turn(
        session: &mut Session,
        turn_number: u32,
        actions: &[TurnAction],
        catalog: &Catalog,
    ) -> Result<TurnResult> {
        Self::require_active(session)?;

        if turn_number != session.current_turn {
            return Err(CombatError::TurnNumberMismatch {
                expected: session.current_turn,
                submitted: turn_number,
            });
        }

        let submitted = TurnResolver::validate_composition(actions)?.map(|action| *action);
        let damages = TurnResolver::resolve(catalog, &submitted)?;
        let costs = Self::price_turn(session, &submitted, catalog)?;

        // Nothing below can fail.
        for report in &damages {
            session.combatants[report.to].take_damage(report.damage);
            session.combatants[report.from].record_damage_dealt(report.damage);
        }
        for (action, cost) in submitted.iter().zip(costs) {
            session.combatants[action.combatant].points -= cost;
        }
        for (_, combatant) in session.combatants.iter_mut() {
            combatant.clear_selections();
        }

        session.turn_history.push_back(TurnRecord {
            turn_number,
            actions: submitted,
            damages,
            timestamp: Utc::now(),
        });
        session.current_turn += 1;

        debug!(session = %session.id, turn = turn_number, "turn committed");

        let outcome = termination_due(session).map(|reason| Self::complete(session, reason));

        Ok(TurnResult {
            turn_number,
            damages,
            outcome,
        })
    }

    /// Complete the session and return its result.
    ///
    /// Idempotent: a completed session returns its frozen result again.
    pub fn end(session: &mut Session) -> EndResult {
        match &session.outcome {
            Some(outcome) => outcome.clone(),
            None => Self::complete(session, TerminationReason::Ended),
        }
    }

    /// Suspend an active session.
    pub fn pause(session: &mut Session) -> Result<()> {
        Self::require_active(session)?;
        session.status = SessionStatus::Paused;
        info!(session = %session.id, "session paused");
        Ok(())
    }

    /// Return a paused session to play.
    pub fn resume(session: &mut Session) -> Result<()> {
        if session.status != SessionStatus::Paused {
            return Err(Self::stale(session));
        }
        session.status = SessionStatus::Active;
        info!(session = %session.id, "session resumed");
        Ok(())
    }

    fn complete(session: &mut Session, reason: TerminationReason) -> EndResult {
        let result = EndResult::for_session(session, reason);
        session.status = SessionStatus::Completed;
        session.outcome = Some(result.clone());

        info!(
            session = %session.id,
            winner = %result.winner,
            ?reason,
            turns = result.turns_played,
            "session completed"
        );
        result
    }

    fn price_turn(session: &Session, actions: &[TurnAction; 2], catalog: &Catalog) -> Result<[u32; 2]> {
        let mut costs = [0; 2];
        for (cost, action) in costs.iter_mut().zip(actions) {
            *cost = catalog.selection_cost(action.ammunition, action.wall)?;
            Self::check_affordable(session, action.combatant, *cost)?;
        }
        Ok(costs)
    }

    fn check_affordable(session: &Session, combatant: CombatantId, required: u32) -> Result<()> {
        let available = session.combatant(combatant).points;
        if required > available {
            return Err(CombatError::InsufficientPoints {
                combatant,
                required,
                available,
            });
        }
        Ok(())
    }

    fn require_active(session: &Session) -> Result<()> {
        if session.status == SessionStatus::Active {
            Ok(())
        } else {
            Err(Self::stale(session))
        }
    }

    fn stale(session: &Session) -> CombatError {
        CombatError::StaleSession {
            session: session.id,
            status: session.status,
        }
    }
}
