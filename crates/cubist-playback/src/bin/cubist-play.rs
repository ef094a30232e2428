//! Cubist Playback Demo
//!
//! Play a move list against a cube and log every frame.
//!
//! Usage: `cubist-play "<moves>" [cubestring] [move-duration-ms]`

use std::env;
use std::time::Duration;

use cubist_cube::Cubestring;
use cubist_playback::{
    spawn_session, Playback, PlaybackConfig, TracingSurface, DEFAULT_MOVE_DURATION,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_MOVES: &str = "R U R' U'";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let moves = args.get(1).map(String::as_str).unwrap_or(DEFAULT_MOVES);

    let cube: Cubestring = match args.get(2) {
        Some(text) => text.parse()?,
        None => Cubestring::solved(),
    };

    let move_duration = args.get(3)
        .and_then(|s| s.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_MOVE_DURATION);

    println!("Cubist Playback");
    println!("===============");
    println!();
    println!("Start:  {}", cube);
    println!("Moves:  {}", moves);
    println!();

    let config = PlaybackConfig::default().with_move_duration(move_duration);
    let playback = Playback::start(moves.split_whitespace(), &cube, TracingSurface, config)?;

    let session = spawn_session(playback);
    session.play().await?;
    let status = session.settled().await?;
    let frame = session.frame().await?;
    session.close().await?;

    println!();
    println!("Applied {} of {} moves", status.cursor, status.total_moves);
    println!("Result: {}", frame.cube);
    println!("Solved: {}", frame.cube.is_solved());
    println!("Status: {}", serde_json::to_string(&status)?);

    Ok(())
}
