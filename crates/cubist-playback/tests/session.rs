//! Timed auto-play driven by the tokio session task.
//!
//! Tests run on a paused clock, so sleeps advance virtual time instantly.

use std::time::Duration;

use cubist_cube::Cubestring;
use cubist_playback::{
    spawn_session, Playback, PlaybackConfig, PlaybackEvent, PlaybackState, RecordingSurface,
    SessionHandle, DEFAULT_MOVE_DURATION,
};

fn session(moves: &[&str], cube: &Cubestring) -> SessionHandle<RecordingSurface> {
    let playback = Playback::start(
        moves.iter().copied(),
        cube,
        RecordingSurface::new(),
        PlaybackConfig::default(),
    )
    .unwrap();
    spawn_session(playback)
}

#[tokio::test(start_paused = true)]
async fn play_applies_moves_on_timer() {
    let solved = Cubestring::solved();
    let handle = session(&["R", "U"], &solved);

    let status = handle.play().await.unwrap();
    assert_eq!(status.state, PlaybackState::Playing);
    assert_eq!(status.cursor, 0);

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 2 + Duration::from_millis(10)).await;

    let frame = handle.frame().await.unwrap();
    assert_eq!(frame.status.cursor, 2);
    assert_eq!(frame.status.state, PlaybackState::Idle);
    assert_eq!(frame.cube, solved.apply_sequence("R U").unwrap());

    let surface = handle.close().await.unwrap();
    assert_eq!(
        surface.event_names(),
        vec!["started", "playing", "step", "step", "closed"]
    );
}

#[tokio::test(start_paused = true)]
async fn no_move_before_first_duration_elapses() {
    let handle = session(&["R", "U"], &Cubestring::solved());
    handle.play().await.unwrap();

    tokio::time::sleep(DEFAULT_MOVE_DURATION / 2).await;
    assert_eq!(handle.frame().await.unwrap().status.cursor, 0);

    tokio::time::sleep(DEFAULT_MOVE_DURATION).await;
    assert_eq!(handle.frame().await.unwrap().status.cursor, 1);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn settled_stays_pending_while_playing() {
    let handle = session(&["R", "U"], &Cubestring::solved());
    handle.play().await.unwrap();

    let mut settled = tokio_test::task::spawn(handle.settled());
    tokio_test::assert_pending!(settled.poll());

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 3).await;
    assert!(settled.is_woken());
    let status = tokio_test::assert_ready_ok!(settled.poll());
    assert_eq!(status.cursor, 2);
    drop(settled);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pause_stops_the_timer() {
    let handle = session(&["R", "U", "F", "D"], &Cubestring::solved());
    handle.play().await.unwrap();

    tokio::time::sleep(DEFAULT_MOVE_DURATION + Duration::from_millis(10)).await;
    let status = handle.pause().await.unwrap();
    assert_eq!(status.cursor, 1);
    assert_eq!(status.state, PlaybackState::Paused);

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 10).await;
    assert_eq!(handle.status().cursor, 1);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn manual_step_cancels_pending_tick() {
    let handle = session(&["R", "U", "F"], &Cubestring::solved());
    handle.play().await.unwrap();

    tokio::time::sleep(DEFAULT_MOVE_DURATION / 2).await;
    let status = handle.step_forward().await.unwrap();
    assert_eq!(status.cursor, 1);
    assert_eq!(status.state, PlaybackState::Paused);

    // the tick armed by play() would have fired by now
    tokio::time::sleep(DEFAULT_MOVE_DURATION * 3).await;
    assert_eq!(handle.status().cursor, 1);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn step_backward_cancels_pending_tick() {
    let handle = session(&["R", "U", "F"], &Cubestring::solved());
    handle.play().await.unwrap();
    handle.step_forward().await.unwrap();
    handle.step_forward().await.unwrap();

    let status = handle.play().await.unwrap();
    assert_eq!(status.state, PlaybackState::Playing);

    tokio::time::sleep(DEFAULT_MOVE_DURATION / 2).await;
    let status = handle.step_backward().await.unwrap();
    assert_eq!(status.cursor, 1);
    assert_eq!(status.state, PlaybackState::Paused);

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 4).await;
    let frame = handle.frame().await.unwrap();
    assert_eq!(frame.status.cursor, 1);
    assert_eq!(frame.cube, Cubestring::solved().apply_sequence("R").unwrap());

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn auto_play_keeps_pace_with_the_clock() {
    let moves = ["R", "U", "F", "D", "L", "B", "R'", "U'", "F'", "D'"];
    let playback = Playback::start(
        moves,
        &Cubestring::solved(),
        RecordingSurface::new(),
        PlaybackConfig::default().with_move_duration(Duration::from_millis(50)),
    )
    .unwrap();
    let handle = spawn_session(playback);

    handle.play().await.unwrap();
    tokio::time::sleep(Duration::from_millis(505)).await;
    let status = handle.status();
    assert_eq!(status.cursor, moves.len());
    assert_eq!(status.state, PlaybackState::Idle);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn reset_during_playback_returns_to_origin() {
    let start = Cubestring::solved().apply_sequence("L2 B").unwrap();
    let handle = session(&["R", "U", "F", "D"], &start);
    handle.play().await.unwrap();

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 2 + Duration::from_millis(10)).await;
    let status = handle.reset().await.unwrap();
    assert_eq!(status.cursor, 0);
    assert_eq!(status.state, PlaybackState::Idle);

    tokio::time::sleep(DEFAULT_MOVE_DURATION * 4).await;
    let frame = handle.frame().await.unwrap();
    assert_eq!(frame.status.cursor, 0);
    assert_eq!(frame.cube, start);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn boundary_operations_are_noops() {
    let handle = session(&["R"], &Cubestring::solved());

    assert_eq!(handle.step_backward().await.unwrap().cursor, 0);
    assert_eq!(handle.reset().await.unwrap().cursor, 0);

    assert_eq!(handle.step_forward().await.unwrap().cursor, 1);
    assert_eq!(handle.step_forward().await.unwrap().cursor, 1);
    let status = handle.play().await.unwrap();
    assert_eq!(status.cursor, 1);
    assert_eq!(status.state, PlaybackState::Idle);

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn bad_token_halts_auto_play() {
    let handle = session(&["R", "R3", "U"], &Cubestring::solved());
    handle.play().await.unwrap();

    let status = handle.settled().await.unwrap();
    assert_eq!(status.cursor, 1);
    assert_eq!(status.state, PlaybackState::Paused);

    let status = handle.reset().await.unwrap();
    assert_eq!(status.cursor, 0);

    let surface = handle.close().await.unwrap();
    let fault = surface.events.iter().find_map(|e| match e {
        PlaybackEvent::Paused { fault: Some(f), .. } => Some(f.clone()),
        _ => None,
    });
    assert!(fault.is_some_and(|f| f.contains("R3")));
}

#[tokio::test(start_paused = true)]
async fn sexy_move_sextuple_returns_to_solved() {
    let solved = Cubestring::solved();
    let moves: Vec<&str> = std::iter::repeat(["R", "U", "R'", "U'"])
        .take(6)
        .flatten()
        .collect();
    let playback = Playback::start(
        moves,
        &solved,
        RecordingSurface::new(),
        PlaybackConfig::default().with_move_duration(Duration::from_millis(50)),
    )
    .unwrap();
    let handle = spawn_session(playback);

    handle.play().await.unwrap();
    let status = handle.settled().await.unwrap();
    assert_eq!(status.cursor, 24);
    assert_eq!(status.state, PlaybackState::Idle);
    assert!(handle.frame().await.unwrap().cube.is_solved());

    handle.close().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn caller_cube_unchanged_after_close() {
    let original = Cubestring::solved().apply_sequence("F' D").unwrap();
    let snapshot = original.to_string();

    let handle = session(&["R", "U", "B2"], &original);
    handle.play().await.unwrap();
    handle.settled().await.unwrap();
    handle.step_backward().await.unwrap();
    let surface = handle.close().await.unwrap();

    assert_eq!(original.to_string(), snapshot);
    assert!(!surface.is_open);
    assert_eq!(surface.events.last().map(PlaybackEvent::name), Some("closed"));
}

#[tokio::test(start_paused = true)]
async fn surface_can_host_a_second_session() {
    let handle = session(&["R"], &Cubestring::solved());
    handle.step_forward().await.unwrap();
    let surface = handle.close().await.unwrap();

    let playback = Playback::start(
        ["U"],
        &Cubestring::solved(),
        surface,
        PlaybackConfig::default(),
    )
    .unwrap();
    let handle = spawn_session(playback);
    handle.step_forward().await.unwrap();
    let surface = handle.close().await.unwrap();

    let started = surface.events.iter().filter(|e| e.name() == "started").count();
    assert_eq!(started, 2);
}
