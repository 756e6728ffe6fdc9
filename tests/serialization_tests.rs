//! Serialization tests for the types that cross the transport boundary.

use rust_duel::catalog::{AmmunitionId, Catalog, WallId};
use rust_duel::core::{CombatantId, GameRng, Selection, SessionConfig, SessionId, TurnAction};
use rust_duel::error::CombatError;
use rust_duel::session::{snapshot, SessionLifecycle, SnapshotError};

#[test]
fn test_selection_json_shape() {
    let none: Selection<AmmunitionId> = Selection::None;
    assert_eq!(serde_json::to_string(&none).unwrap(), r#""None""#);
    assert_eq!(serde_json::to_string(&Selection::Item(WallId::new(2))).unwrap(), r#"{"Item":2}"#);
}

#[test]
fn test_turn_result_json() {
    let catalog = Catalog::standard();
    let mut session = SessionLifecycle::start(SessionId::new(1), &SessionConfig::default()).unwrap();
    let actions = [
        TurnAction::new(CombatantId::First).with_ammunition(AmmunitionId::new(2)),
        TurnAction::new(CombatantId::Second).with_wall(WallId::new(1)),
    ];
    let result = SessionLifecycle::play_turn(&mut session, 1, &actions, catalog).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["turn_number"], 1);
    assert_eq!(json["damages"][0]["damage"], 10);
    assert_eq!(json["damages"][0]["defended_by"], 10);
    assert!(json["outcome"].is_null());
}

#[test]
fn test_session_json_preserves_journal() {
    let catalog = Catalog::standard();
    let mut session = SessionLifecycle::start(SessionId::new(8), &SessionConfig::default()).unwrap();
    let actions = [
        TurnAction::new(CombatantId::First).with_ammunition(AmmunitionId::new(1)),
        TurnAction::new(CombatantId::Second).with_ammunition(AmmunitionId::new(2)),
    ];
    SessionLifecycle::play_turn(&mut session, 1, &actions, catalog).unwrap();
    SessionLifecycle::play_turn(&mut session, 2, &actions, catalog).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: rust_duel::core::Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
    assert_eq!(restored.turn_history().len(), 2);
    assert_eq!(restored.current_turn(), 3);
}

#[test]
fn test_error_code_and_seat_names() {
    let err = CombatError::InsufficientPoints {
        combatant: CombatantId::Second,
        required: 40,
        available: 25,
    };
    assert_eq!(err.error_code(), "insufficient_points");

    let json = serde_json::to_value(CombatantId::Second).unwrap();
    assert_eq!(json, "Second");
}

#[test]
fn test_rng_state_restores_stream() {
    let mut rng = GameRng::new(77);
    let _ = rng.gen_range_usize(0..100);
    let state = rng.state();

    let json = serde_json::to_string(&state).unwrap();
    let mut restored = GameRng::from_state(&serde_json::from_str(&json).unwrap());

    for _ in 0..10 {
        assert_eq!(rng.gen_range_usize(0..1000), restored.gen_range_usize(0..1000));
    }
}

#[test]
fn test_truncated_snapshot_rejected() {
    let session = SessionLifecycle::start(SessionId::new(2), &SessionConfig::default()).unwrap();
    let bytes = snapshot::encode(&session).unwrap();

    let err = snapshot::decode(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, SnapshotError::Codec(_)));
}
