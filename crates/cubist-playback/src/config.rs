//! Playback configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default time between auto-played moves.
pub const DEFAULT_MOVE_DURATION: Duration = Duration::from_millis(500);

/// Configuration for a playback session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay before each auto-played move
    #[serde(rename = "move_duration_ms", with = "millis")]
    pub move_duration: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            move_duration: DEFAULT_MOVE_DURATION,
        }
    }
}

impl PlaybackConfig {
    /// Set the per-move duration.
    #[must_use]
    pub fn with_move_duration(mut self, duration: Duration) -> Self {
        self.move_duration = duration;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(d.as_millis()).map_err(ser::Error::custom)?;
        s.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
