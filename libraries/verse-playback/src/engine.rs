//! Platform-agnostic audio engine traits
//!
//! Abstracts audio loading and playback for different hosts (web audio
//! element, native decoder, test fakes). The player never decodes audio
//! itself; it drives exactly one handle at a time through this seam.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Format hint passed to the engine when loading a track
///
/// The engine must support at least one common compressed format; `Mp3` is
/// the default hint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatHint {
    /// MPEG-1 Layer III
    #[default]
    Mp3,
    /// Advanced Audio Coding
    Aac,
    /// Free Lossless Audio Codec
    Flac,
    /// Ogg Vorbis
    Ogg,
    /// Uncompressed PCM
    Wav,
}

/// Everything the engine needs to bind a handle to one media URL
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    /// Playable URL (opaque to this component)
    pub url: String,

    /// Initial volume for the handle (0.0-1.0)
    pub volume: f32,

    /// Expected media format
    pub format: FormatHint,
}

/// Lifecycle notification queued by a handle
///
/// Handles queue these internally; the player drains them once per frame via
/// [`AudioHandle::poll_event`]. This replaces engine-invoked callbacks,
/// which would have to capture the player mutably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleEvent {
    /// Playback started or resumed
    Started,

    /// Playback paused
    Paused,

    /// The track reached its natural end
    Ended,
}

/// Platform-agnostic audio engine
///
/// Implementors create playback handles bound to one media URL each.
pub trait AudioEngine {
    /// Create a handle for the requested URL
    ///
    /// The handle starts idle; the player calls [`AudioHandle::play`] itself
    /// when auto-play is enabled.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be loaded or the format is
    /// unsupported. The player maps this to the `Failed` state.
    fn load(&mut self, request: LoadRequest) -> Result<Box<dyn AudioHandle>>;
}

/// Engine-provided playback object bound to one media URL
///
/// Exclusively owned by the player's current session. All methods must be
/// safe to call after `release`; a released handle ignores further requests.
pub trait AudioHandle {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Jump to a position from the start of the track
    fn seek_to(&mut self, position: Duration);

    /// Current playback position
    fn position(&self) -> Duration;

    /// Total track duration
    ///
    /// May be `Duration::ZERO` while the media is still being probed.
    fn duration(&self) -> Duration;

    /// Set the live volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Release underlying resources (stop decoding/streaming)
    ///
    /// Must be idempotent.
    fn release(&mut self);

    /// Drain the next queued lifecycle notification, if any
    fn poll_event(&mut self) -> Option<HandleEvent>;
}
