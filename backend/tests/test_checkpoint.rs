//! Tests for snapshots and checkpoint save/restore
//!
//! CRITICAL: a restored clock must continue exactly like the original.

use ball_clock_core::orchestrator::validate_snapshot;
use ball_clock_core::{BallClock, CheckpointError, ClockError, ClockSnapshot};

fn clock_after(ball_count: i64, minutes: u64) -> BallClock {
    let mut clock = BallClock::new(ball_count).unwrap();
    for _ in 0..minutes {
        clock.tick().unwrap();
    }
    clock
}

#[test]
fn test_snapshot_key_order() {
    let json = BallClock::new(27).unwrap().snapshot().to_json().unwrap();

    let min = json.find("\"Min\"").unwrap();
    let five = json.find("\"FiveMin\"").unwrap();
    let hour = json.find("\"Hour\"").unwrap();
    let main = json.find("\"Main\"").unwrap();
    assert!(min < five && five < hour && hour < main, "key order broken: {}", json);
    assert!(!json.contains(' '), "snapshot must be compact: {}", json);
}

#[test]
fn test_display_matches_to_json() {
    let snapshot = clock_after(30, 325).snapshot();
    assert_eq!(snapshot.to_string(), snapshot.to_json().unwrap());
}

#[test]
fn test_snapshot_json_roundtrip() {
    let snapshot = clock_after(33, 999).snapshot();
    let parsed = ClockSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_restored_clock_continues_identically() {
    let mut original = clock_after(41, 1_000);
    let mut restored = BallClock::from_snapshot(&original.snapshot(), original.minutes_elapsed()).unwrap();

    assert_eq!(restored.minutes_elapsed(), 1_000);
    for _ in 0..2_000 {
        assert_eq!(original.tick().unwrap(), restored.tick().unwrap());
    }
    assert_eq!(original.snapshot(), restored.snapshot());
}

#[test]
fn test_checkpoint_save_load() {
    let clock = clock_after(50, 4_321);
    let checkpoint = clock.save_checkpoint().unwrap();

    assert_eq!(checkpoint.minutes_elapsed, 4_321);
    assert_eq!(checkpoint.ball_count, 50);

    let json = serde_json::to_string(&checkpoint).unwrap();
    let loaded: ball_clock_core::ClockCheckpoint = serde_json::from_str(&json).unwrap();
    let restored = BallClock::load_checkpoint(&loaded).unwrap();

    assert_eq!(restored, clock);
}

#[test]
fn test_checkpoint_with_tampered_state_rejected() {
    let clock = clock_after(30, 100);
    let mut checkpoint = clock.save_checkpoint().unwrap();
    checkpoint.state.main.swap(0, 1);

    let result = BallClock::load_checkpoint(&checkpoint);
    assert!(matches!(result, Err(CheckpointError::FingerprintMismatch { .. })));
}

#[test]
fn test_fingerprint_is_deterministic() {
    let a = clock_after(60, 7_777).snapshot().fingerprint().unwrap();
    let b = clock_after(60, 7_777).snapshot().fingerprint().unwrap();
    let c = clock_after(60, 7_778).snapshot().fingerprint().unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(a.len(), 64, "SHA-256 hex digest");
}

#[test]
fn test_validate_snapshot_detects_duplicate() {
    let mut snapshot = BallClock::new(27).unwrap().snapshot();
    snapshot.main[0] = 2;

    let err = validate_snapshot(&snapshot, 27).unwrap_err();
    assert!(matches!(err, CheckpointError::StateValidation(ref msg) if msg.contains("Duplicate ball 2")));
}

#[test]
fn test_validate_snapshot_detects_out_of_range_ball() {
    let mut snapshot = BallClock::new(27).unwrap().snapshot();
    snapshot.main[5] = 99;

    let err = validate_snapshot(&snapshot, 27).unwrap_err();
    assert!(matches!(err, CheckpointError::StateValidation(ref msg) if msg.contains("outside range")));
}

#[test]
fn test_validate_snapshot_detects_overfull_track() {
    let mut snapshot = BallClock::new(27).unwrap().snapshot();
    let moved: Vec<u8> = snapshot.main.drain(..5).collect();
    snapshot.minute = moved;

    let err = validate_snapshot(&snapshot, 27).unwrap_err();
    assert!(matches!(err, CheckpointError::StateValidation(ref msg) if msg.contains("Minute track")));
}

#[test]
fn test_validate_snapshot_detects_wrong_size() {
    let snapshot = BallClock::new(28).unwrap().snapshot();
    let err = validate_snapshot(&snapshot, 27).unwrap_err();
    assert!(matches!(
        err,
        CheckpointError::BallCountMismatch {
            expected: 27,
            actual: 28
        }
    ));
}

#[test]
fn test_from_snapshot_rejects_small_clock() {
    let snapshot = ClockSnapshot {
        minute: vec![],
        five_minute: vec![],
        hour: vec![],
        main: (1..=10).collect(),
    };

    let err = BallClock::from_snapshot(&snapshot, 0).unwrap_err();
    assert!(matches!(
        err,
        CheckpointError::Clock(ClockError::InvalidBallCount { ball_count: 10 })
    ));
}
