//! Player events
//!
//! Event-based communication for UI synchronization. The player accumulates
//! events internally and the host drains them with
//! [`Player::take_events`](crate::Player::take_events), typically once per
//! frame, after [`Player::tick`](crate::Player::tick).

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};
use verse_core::TrackId;

/// Events emitted by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A track id was published to the queue store as the new active id
    ///
    /// Emitted by next/previous navigation. The host reacts by resolving the
    /// id and loading the new track reference.
    TrackActivated {
        /// The activated track id
        track_id: TrackId,
    },

    /// A new session was created for a track reference
    TrackLoaded {
        /// Id of the loaded track
        track_id: TrackId,
    },

    /// The current track reached its natural end
    TrackFinished {
        /// Id of the finished track
        track_id: TrackId,
    },

    /// Volume level or mute state changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        volume: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// A seek was applied to the live handle
    Seeked {
        /// Seek target as a fraction of the track (0.0-1.0)
        fraction: f32,
        /// Seek target position from the start of the track
        position_ms: u64,
    },

    /// The engine could not load a track
    LoadFailed {
        /// Id of the track that failed to load
        track_id: TrackId,
        /// Engine-reported reason
        message: String,
    },
}
