//! Core types for the playback component

use crate::engine::FormatHint;
use serde::{Deserialize, Serialize};

/// Playback state
///
/// Tagged replacement for the playing/not-playing boolean: the failed case
/// is explicit instead of being an eternally-false flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing playing (no track loaded, or the track ran out)
    Stopped,

    /// Handle reported that playback started
    Playing,

    /// Paused mid-track
    Paused,

    /// The engine could not load the current track
    Failed,
}

/// Configuration for the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 1.0)
    pub volume: f32,

    /// Format hint passed to the engine on every load (default: Mp3)
    pub format: FormatHint,

    /// Start playback as soon as a track loads (default: true)
    pub autoplay: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            format: FormatHint::Mp3,
            autoplay: true,
        }
    }
}
