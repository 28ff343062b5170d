//! Integration tests for the spawned lane actor and its handle.

mod common;

use std::time::Duration;

use common::{CallLog, MockBall, MockInput, MockPins, straight, test_config};
use pinfall_lane::{EventReceiver, LaneEvent, Notifier};
use pinfall_scoring::{ThrowOrdinal, ThrowOutcome};
use pinfall_turn::{LaneHandle, TurnConfig, TurnError, TurnState, spawn_lane};

// =========================================================================
// Helpers
// =========================================================================

fn spawn(log: &CallLog, throws: &[u8]) -> (LaneHandle, EventReceiver) {
    let (notifier, rx) = Notifier::channel();
    let handle = spawn_lane(
        test_config(),
        MockBall::new(log.clone(), 2),
        MockPins::scripted(log.clone(), throws),
        MockInput::new(log.clone()),
        notifier,
    );
    (handle, rx)
}

/// Long enough for any single throw in `test_config` to finish.
async fn let_throw_finish() {
    tokio::time::sleep(Duration::from_secs(10)).await;
}

fn drain(rx: &mut EventReceiver) -> Vec<LaneEvent> {
    let mut events = Vec::new();
    while let Ok(ev) = rx.try_recv() {
        events.push(ev);
    }
    events
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test(start_paused = true)]
async fn test_initial_info() {
    let log = CallLog::default();
    let (lane, _rx) = spawn(&log, &[]);

    let info = lane.info().await.unwrap();
    assert_eq!(info.state, TurnState::WaitingForInput);
    assert_eq!(info.frame, 1);
    assert_eq!(info.throw, ThrowOrdinal::First);
    assert_eq!(info.total, 0);
    assert_eq!(info.scoreline, "Score: 0");
    assert!(info.input_enabled);
}

#[tokio::test(start_paused = true)]
async fn test_second_launch_during_throw_is_ignored() {
    let log = CallLog::default();
    let (lane, _rx) = spawn(&log, &[6]);

    assert_eq!(lane.launch(straight()).await, Ok(true));
    assert_eq!(lane.launch(straight()).await, Ok(false));

    let info = lane.info().await.unwrap();
    assert_eq!(info.state, TurnState::BallRolling);
    assert!(!info.input_enabled);
    assert_eq!(log.launches(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_strike_frame_end_to_end() {
    let log = CallLog::default();
    let (lane, mut rx) = spawn(&log, &[10]);

    assert_eq!(lane.launch(straight()).await, Ok(true));
    let_throw_finish().await;

    let info = lane.info().await.unwrap();
    assert_eq!(info.state, TurnState::WaitingForInput);
    assert_eq!(info.frame, 2);
    assert_eq!(info.total, 10);
    assert_eq!(info.frames, vec![10]);
    assert_eq!(info.scoreline, "10 = 10");
    assert_eq!(info.last_outcome, Some(ThrowOutcome::Strike));

    assert_eq!(
        drain(&mut rx),
        vec![
            LaneEvent::ResultMessage {
                message: "STRIKE!".into()
            },
            LaneEvent::ScoreChanged { total: 10 },
            LaneEvent::FrameComplete { frame: 1, score: 10 },
            LaneEvent::FrameChanged { frame: 2, throw: 1 },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_two_throw_frame() {
    let log = CallLog::default();
    let (lane, _rx) = spawn(&log, &[4, 4]);

    lane.launch(straight()).await.unwrap();
    let_throw_finish().await;
    let info = lane.info().await.unwrap();
    assert_eq!(info.throw, ThrowOrdinal::Second);
    assert_eq!(info.scoreline, "4 = 4");

    assert_eq!(lane.launch(straight()).await, Ok(true));
    let_throw_finish().await;
    let info = lane.info().await.unwrap();
    assert_eq!(info.last_outcome, Some(ThrowOutcome::Open(8)));
    assert_eq!(info.frames, vec![8]);
    assert_eq!(info.frame, 2);
}

#[tokio::test(start_paused = true)]
async fn test_new_session_mid_throw() {
    let log = CallLog::default();
    let (lane, _rx) = spawn(&log, &[10, 3]);

    lane.launch(straight()).await.unwrap();
    let_throw_finish().await;
    let before = lane.info().await.unwrap();
    lane.launch(straight()).await.unwrap();

    let id = lane.new_session().await.unwrap();

    let info = lane.info().await.unwrap();
    assert_ne!(id, before.session_id);
    assert_eq!(info.session_id, id);
    assert_eq!(info.state, TurnState::WaitingForInput);
    assert_eq!(info.total, 0);
    assert!(info.frames.is_empty());

    // The abandoned throw never gets scored.
    let_throw_finish().await;
    assert_eq!(lane.info().await.unwrap().total, 0);
}

#[tokio::test(start_paused = true)]
async fn test_huge_frame_end_delay_keeps_lane_alive() {
    let log = CallLog::default();
    let config = TurnConfig {
        frame_end_delay: Duration::MAX,
        ..test_config()
    };
    let lane = spawn_lane(
        config,
        MockBall::new(log.clone(), 0),
        MockPins::scripted(log.clone(), &[10]),
        MockInput::new(log.clone()),
        Notifier::none(),
    );

    assert!(lane.launch(straight()).await.unwrap());
    let_throw_finish().await;

    let info = lane.info().await.unwrap();
    assert_eq!(info.state, TurnState::Scoring);
    assert_eq!(info.scoreline, "10 = 10");
    assert!(!lane.is_closed());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_closes_lane() {
    let log = CallLog::default();
    let (lane, _rx) = spawn(&log, &[]);

    lane.shutdown().await.unwrap();

    assert_eq!(lane.info().await, Err(TurnError::Unavailable));
    assert!(lane.is_closed());
    assert_eq!(lane.launch(straight()).await, Err(TurnError::Unavailable));
}
