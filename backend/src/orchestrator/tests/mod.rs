// Engine tests that need crate-private constructors.

use crate::core::time::ClockTime;
use crate::models::state::ClockState;
use crate::models::track::{Track, TrackKind};
use crate::orchestrator::engine::{BallClock, ClockError, Landing};
use std::collections::VecDeque;

fn empty_tracks() -> (Track, Track, Track) {
    (
        Track::new(TrackKind::Minute),
        Track::new(TrackKind::FiveMinute),
        Track::new(TrackKind::Hour),
    )
}

#[test]
fn test_tick_on_empty_main_is_an_error() {
    let (minute, five_minute, hour) = empty_tracks();
    let state = ClockState::from_parts(VecDeque::new(), minute, five_minute, hour);
    let mut clock = BallClock::from_parts(state, ClockTime::at_minute(42));

    let err = clock.tick().unwrap_err();
    assert_eq!(err, ClockError::EmptyMain { minute: 42 });

    // Failed tick must not advance time
    assert_eq!(clock.minutes_elapsed(), 42);
}

#[test]
fn test_full_hour_track_returns_ball_to_main() {
    // Minute, FiveMinute and Hour all full: the next ball cascades to Main
    let minute = Track::from_balls(TrackKind::Minute, vec![1, 2, 3, 4]).unwrap();
    let five_minute = Track::from_balls(TrackKind::FiveMinute, (5..=15).collect()).unwrap();
    let hour = Track::from_balls(TrackKind::Hour, (16..=26).collect()).unwrap();
    let main: VecDeque<u8> = (27..=30).collect();
    let state = ClockState::from_parts(main, minute, five_minute, hour);
    let mut clock = BallClock::from_parts(state, ClockTime::at_minute(719));

    let result = clock.tick().unwrap();

    assert_eq!(result.ball, 27);
    assert_eq!(result.landing, Landing::Main);
    assert_eq!(result.minute, 720);
    assert_eq!(
        result.released(),
        &[TrackKind::Minute, TrackKind::FiveMinute, TrackKind::Hour]
    );
    assert!(clock.state().tracks_empty());

    let expected: Vec<u8> = [28, 29, 30]
        .into_iter()
        .chain((1..=4).rev())
        .chain((5..=15).rev())
        .chain((16..=26).rev())
        .chain([27])
        .collect();
    let main: Vec<u8> = clock.state().main().iter().copied().collect();
    assert_eq!(main, expected);
}

#[test]
fn test_first_tick_lands_on_minute_track() {
    let mut clock = BallClock::new(30).unwrap();
    let result = clock.tick().unwrap();

    assert_eq!(result.ball, 1);
    assert_eq!(result.landing, Landing::Track(TrackKind::Minute));
    assert!(result.released().is_empty());
}
