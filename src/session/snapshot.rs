//! Compact binary session snapshots.
//!
//! Snapshots hand a session's full state to the transport layer. The format is
//! a one-byte version followed by the bincode encoding of the `Session`.
//! Decoding rejects states the lifecycle could never have produced.

use crate::core::{InvalidSession, Session, SessionFields};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u8 = 1;

/// Errors from encoding or decoding snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot is empty")]
    Empty,

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),

    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    Invalid(#[from] InvalidSession),
}

/// Encode a session.
pub fn encode(session: &Session) -> Result<Vec<u8>, SnapshotError> {
    let mut bytes = vec![SNAPSHOT_VERSION];
    bincode::serialize_into(&mut bytes, session)?;
    Ok(bytes)
}

/// Decode a session previously produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Session, SnapshotError> {
    let (&version, body) = bytes.split_first().ok_or(SnapshotError::Empty)?;
    if version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(version));
    }
    let fields: SessionFields = bincode::deserialize(body)?;
    Ok(Session::try_from(fields)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AmmunitionId, Catalog, WallId};
    use crate::core::{CombatantId, SessionConfig, SessionId, SessionStatus, TurnAction};
    use crate::session::SessionLifecycle;

    #[test]
    fn test_snapshot_preserves_played_session() {
        let catalog = Catalog::standard();
        let mut session = SessionLifecycle::start(SessionId::new(9), &SessionConfig::default()).unwrap();
        let actions = [
            TurnAction::new(CombatantId::First)
                .with_ammunition(AmmunitionId::new(2))
                .with_wall(WallId::new(1)),
            TurnAction::new(CombatantId::Second).with_ammunition(AmmunitionId::new(1)),
        ];
        SessionLifecycle::play_turn(&mut session, 1, &actions, catalog).unwrap();
        SessionLifecycle::end(&mut session);

        let bytes = encode(&session).unwrap();
        assert_eq!(bytes[0], SNAPSHOT_VERSION);

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, session);
        assert_eq!(decoded.winner(), session.winner());
    }

    fn played_session() -> Session {
        let catalog = Catalog::standard();
        let mut session = SessionLifecycle::start(SessionId::new(4), &SessionConfig::default()).unwrap();
        let stones = [
            TurnAction::new(CombatantId::First).with_ammunition(AmmunitionId::new(1)),
            TurnAction::new(CombatantId::Second).with_ammunition(AmmunitionId::new(1)),
        ];
        SessionLifecycle::play_turn(&mut session, 1, &stones, catalog).unwrap();
        SessionLifecycle::play_turn(&mut session, 2, &stones, catalog).unwrap();
        session
    }

    fn decode_error(session: &Session) -> InvalidSession {
        match decode(&encode(session).unwrap()) {
            Err(SnapshotError::Invalid(err)) => err,
            other => panic!("expected an invalid snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_completed_without_outcome_rejected() {
        let mut session = played_session();
        session.status = SessionStatus::Completed;

        assert_eq!(
            decode_error(&session),
            InvalidSession("only completed sessions carry an outcome")
        );
    }

    #[test]
    fn test_outcome_on_active_session_rejected() {
        let mut session = played_session();
        SessionLifecycle::end(&mut session);
        session.status = SessionStatus::Active;

        assert_eq!(
            decode_error(&session),
            InvalidSession("only completed sessions carry an outcome")
        );
    }

    #[test]
    fn test_turn_zero_rejected() {
        let mut session = SessionLifecycle::start(SessionId::new(5), &SessionConfig::default()).unwrap();
        session.current_turn = 0;

        assert_eq!(decode_error(&session), InvalidSession("current turn must be at least 1"));
    }

    #[test]
    fn test_journal_length_mismatch_rejected() {
        let mut session = played_session();
        session.current_turn = 7;

        assert_eq!(
            decode_error(&session),
            InvalidSession("journal length does not match current turn")
        );
    }

    #[test]
    fn test_misnumbered_journal_rejected() {
        let mut session = played_session();
        session.turn_history[0].turn_number = 2;

        assert_eq!(
            decode_error(&session),
            InvalidSession("journal turn numbers are not contiguous from 1")
        );
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(matches!(decode(&[]), Err(SnapshotError::Empty)));
        assert!(matches!(decode(&[99, 0, 0]), Err(SnapshotError::UnsupportedVersion(99))));
        assert!(matches!(decode(&[SNAPSHOT_VERSION, 1]), Err(SnapshotError::Codec(_))));
    }
}
