//! Lifecycle notifications emitted by a playback session.

use cubist_cube::Move;
use serde::{Deserialize, Serialize};

/// Current state of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Not started, or settled at the beginning or end with no timer armed
    Idle,
    /// Auto-advancing on a timer
    Playing,
    /// Stopped mid-sequence
    Paused,
}

/// Playback position carried by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    /// Number of moves applied to the working cube
    pub cursor: usize,
    pub total_moves: usize,
    pub state: PlaybackState,
}

impl PlaybackStatus {
    /// Progress as a fraction (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.total_moves == 0 {
            0.0
        } else {
            self.cursor as f64 / self.total_moves as f64
        }
    }

    /// Whether every move has been applied.
    pub fn is_finished(&self) -> bool {
        self.cursor == self.total_moves
    }
}

/// Which way a manual or timed step moved the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    Forward,
    Backward,
}

/// Named lifecycle notifications for observers (progress display, move
/// highlighting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// A session opened on a fresh copy of the starting cube
    Started { status: PlaybackStatus },

    /// Auto-play was armed
    Playing { status: PlaybackStatus },

    /// Auto-play stopped; `fault` is set when a bad move token halted it
    Paused {
        status: PlaybackStatus,
        fault: Option<String>,
    },

    /// One move was applied or taken back
    Step {
        status: PlaybackStatus,
        direction: StepDirection,
        notation: Move,
    },

    /// The working cube was restored to the starting cube
    Reset { status: PlaybackStatus },

    /// The session was torn down
    Closed { status: PlaybackStatus },
}

impl PlaybackEvent {
    /// Event name as sent to observers.
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackEvent::Started { .. } => "started",
            PlaybackEvent::Playing { .. } => "playing",
            PlaybackEvent::Paused { .. } => "paused",
            PlaybackEvent::Step { .. } => "step",
            PlaybackEvent::Reset { .. } => "reset",
            PlaybackEvent::Closed { .. } => "closed",
        }
    }

    /// Playback position at the time of the event.
    pub fn status(&self) -> PlaybackStatus {
        match self {
            PlaybackEvent::Started { status }
            | PlaybackEvent::Playing { status }
            | PlaybackEvent::Paused { status, .. }
            | PlaybackEvent::Step { status, .. }
            | PlaybackEvent::Reset { status }
            | PlaybackEvent::Closed { status } => *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubist_cube::{Direction, Face};

    fn status(cursor: usize) -> PlaybackStatus {
        PlaybackStatus {
            cursor,
            total_moves: 4,
            state: PlaybackState::Paused,
        }
    }

    #[test]
    fn event_serialization() {
        let event = PlaybackEvent::Step {
            status: status(1),
            direction: StepDirection::Forward,
            notation: Move::quarter(Face::U, Direction::CounterClockwise),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"step""#));
        assert!(json.contains(r#""notation":"U'""#));
        assert!(json.contains(r#""total_moves":4"#));

        let parsed: PlaybackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.name(), "step");
    }

    #[test]
    fn progress_calculation() {
        assert_eq!(status(0).progress(), 0.0);
        assert_eq!(status(2).progress(), 0.5);
        assert_eq!(status(4).progress(), 1.0);
        assert!(status(4).is_finished());

        let empty = PlaybackStatus {
            cursor: 0,
            total_moves: 0,
            state: PlaybackState::Idle,
        };
        assert_eq!(empty.progress(), 0.0);
    }

    #[test]
    fn status_is_reachable_from_every_event() {
        let s = status(3);
        let events = [
            PlaybackEvent::Started { status: s },
            PlaybackEvent::Playing { status: s },
            PlaybackEvent::Paused { status: s, fault: None },
            PlaybackEvent::Reset { status: s },
            PlaybackEvent::Closed { status: s },
        ];
        for event in events {
            assert_eq!(event.status(), s);
        }
    }
}
