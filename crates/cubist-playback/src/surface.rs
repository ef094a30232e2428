//! Presentation surface seam.
//!
//! The controller is the only writer to its surface for the lifetime of a
//! session. Ownership enforces this: a session takes the surface by value and
//! hands it back on close.

use cubist_cube::Cubestring;
use tracing::{debug, info};

use crate::events::{PlaybackEvent, PlaybackStatus};

/// What the surface should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub cube: Cubestring,
    pub status: PlaybackStatus,
}

impl Frame {
    /// Index of the most recently applied move, for highlighting.
    pub fn last_applied(&self) -> Option<usize> {
        self.status.cursor.checked_sub(1)
    }
}

/// An external renderer driven by a playback session.
pub trait Surface {
    /// The session opened; draw the starting cube.
    fn open(&mut self, frame: &Frame);

    /// The working cube or cursor changed.
    fn render(&mut self, frame: &Frame);

    /// The session closed; release whatever `open` set up.
    fn teardown(&mut self);

    /// Lifecycle notification. Ignored unless the surface cares.
    fn notify(&mut self, _event: &PlaybackEvent) {}
}

/// Surface that keeps everything it is sent. Useful for tests and for
/// replaying a session after the fact.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub is_open: bool,
    pub frames: Vec<Frame>,
    pub events: Vec<PlaybackEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last frame drawn, if any.
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Names of the received events, in order.
    pub fn event_names(&self) -> Vec<&'static str> {
        self.events.iter().map(PlaybackEvent::name).collect()
    }
}

impl Surface for RecordingSurface {
    fn open(&mut self, frame: &Frame) {
        self.is_open = true;
        self.frames.push(*frame);
    }

    fn render(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }

    fn teardown(&mut self) {
        self.is_open = false;
    }

    fn notify(&mut self, event: &PlaybackEvent) {
        self.events.push(event.clone());
    }
}

/// Surface that writes frames to the log as an unfolded net.
#[derive(Debug, Default)]
pub struct TracingSurface;

impl Surface for TracingSurface {
    fn open(&mut self, frame: &Frame) {
        info!(cube = %frame.cube, "surface opened\n{}", frame.cube.net());
    }

    fn render(&mut self, frame: &Frame) {
        info!(
            cursor = frame.status.cursor,
            total = frame.status.total_moves,
            "\n{}",
            frame.cube.net()
        );
    }

    fn teardown(&mut self) {
        info!("surface closed");
    }

    fn notify(&mut self, event: &PlaybackEvent) {
        debug!(event = event.name(), status = ?event.status(), "playback event");
    }
}
