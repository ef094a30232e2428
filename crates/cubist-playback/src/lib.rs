//! Cubist Move Playback
//!
//! Animated playback of a move list against a private copy of a cube.
//!
//! # Architecture
//!
//! - **Playback**: State machine over a move list with a single cancelable
//!   auto-play deadline
//! - **Surface**: External renderer, owned by exactly one session at a time
//! - **Events**: Named lifecycle notifications for observers
//! - **Session**: Tokio task driving a `Playback` from transport commands
//!
//! # Usage
//!
//! ```ignore
//! let playback = Playback::start(["R", "U", "R'"], &cube, surface, PlaybackConfig::default())?;
//! let session = spawn_session(playback);
//! session.play().await?;
//! session.settled().await?;
//! let surface = session.close().await?;
//! ```

mod config;
mod error;
mod events;
mod playback;
pub mod session;
mod solver;
mod surface;

pub use config::{PlaybackConfig, DEFAULT_MOVE_DURATION};
pub use error::{Error, Result};
pub use events::{PlaybackEvent, PlaybackState, PlaybackStatus, StepDirection};
pub use playback::{Playback, Transport};
pub use session::{spawn_session, SessionHandle};
pub use solver::Solver;
pub use surface::{Frame, RecordingSurface, Surface, TracingSurface};
