//! Verse Player - Playback Control
//!
//! Platform-agnostic control core for an audio player control surface.
//!
//! This crate provides:
//! - Queue navigation (next/previous, wrapping at both ends)
//! - Playback control (auto-play on load, play/pause toggle)
//! - Volume control with mute memory
//! - Progress tracking with click/drag seek
//!
//! # Architecture
//!
//! `verse-playback` renders nothing and decodes nothing. Everything
//! platform-specific is injected through three seams:
//! - [`QueueStore`](verse_core::QueueStore) - the externally-owned queue
//!   (ordered id sequence + active id)
//! - [`AudioEngine`] / [`AudioHandle`] - media loading and playback
//! - [`FrameScheduler`] - per-display-frame ticks driving progress polling
//!
//! The component runs single-threaded and cooperative: user gestures call
//! the control methods, the host's frame loop calls [`Player::tick`], and
//! outcomes are drained with [`Player::take_events`].
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use verse_core::{QueueStore, TrackId, TrackRef};
//! use verse_playback::{
//!     AudioEngine, AudioHandle, FrameScheduler, FrameTask, HandleEvent, LoadRequest,
//!     PlaybackState, Player, PlayerConfig, PointerInput, Result,
//! };
//!
//! // Queue state lives in the host application
//! struct HostQueue {
//!     ids: Vec<TrackId>,
//!     active: Option<TrackId>,
//! }
//!
//! impl QueueStore for HostQueue {
//!     fn track_ids(&self) -> Vec<TrackId> {
//!         self.ids.clone()
//!     }
//!
//!     fn active_id(&self) -> Option<TrackId> {
//!         self.active.clone()
//!     }
//!
//!     fn set_active_id(&mut self, id: TrackId) {
//!         self.active = Some(id);
//!     }
//! }
//!
//! // Minimal engine: a silent three-minute handle for any URL
//! struct SilentEngine;
//!
//! struct SilentHandle {
//!     position: Duration,
//!     queued: Vec<HandleEvent>,
//! }
//!
//! impl AudioEngine for SilentEngine {
//!     fn load(&mut self, _request: LoadRequest) -> Result<Box<dyn AudioHandle>> {
//!         Ok(Box::new(SilentHandle {
//!             position: Duration::ZERO,
//!             queued: Vec::new(),
//!         }))
//!     }
//! }
//!
//! impl AudioHandle for SilentHandle {
//!     fn play(&mut self) {
//!         self.queued.push(HandleEvent::Started);
//!     }
//!
//!     fn pause(&mut self) {
//!         self.queued.push(HandleEvent::Paused);
//!     }
//!
//!     fn seek_to(&mut self, position: Duration) {
//!         self.position = position;
//!     }
//!
//!     fn position(&self) -> Duration {
//!         self.position
//!     }
//!
//!     fn duration(&self) -> Duration {
//!         Duration::from_secs(180)
//!     }
//!
//!     fn set_volume(&mut self, _volume: f32) {}
//!
//!     fn release(&mut self) {}
//!
//!     fn poll_event(&mut self) -> Option<HandleEvent> {
//!         if self.queued.is_empty() {
//!             None
//!         } else {
//!             Some(self.queued.remove(0))
//!         }
//!     }
//! }
//!
//! // Scheduler whose task is just a flag; a real host drives `tick`
//! // from its display-refresh callback while the task is live
//! struct HostScheduler;
//!
//! struct Ticket(bool);
//!
//! impl FrameScheduler for HostScheduler {
//!     fn begin(&mut self) -> Box<dyn FrameTask> {
//!         Box::new(Ticket(false))
//!     }
//! }
//!
//! impl FrameTask for Ticket {
//!     fn cancel(&mut self) {
//!         self.0 = true;
//!     }
//!
//!     fn is_cancelled(&self) -> bool {
//!         self.0
//!     }
//! }
//!
//! let store = HostQueue {
//!     ids: vec![TrackId::new("a"), TrackId::new("b"), TrackId::new("c")],
//!     active: Some(TrackId::new("b")),
//! };
//!
//! let mut player = Player::new(
//!     Box::new(store),
//!     Box::new(SilentEngine),
//!     Box::new(HostScheduler),
//!     PlayerConfig::default(),
//! );
//!
//! // Load the active track; auto-play is reported on the next tick
//! player.load(TrackRef::new(TrackId::new("b"), "https://cdn.example.com/b.mp3"))?;
//! player.tick();
//! assert_eq!(player.state(), PlaybackState::Playing);
//!
//! // Click at 50% of a 200-px-wide progress bar
//! player.seek_click(PointerInput::new(100.0, 200.0));
//! assert_eq!(player.progress(), 0.5);
//!
//! // Wrapping navigation publishes activations to the store
//! assert_eq!(player.next(), Some(TrackId::new("c")));
//! assert_eq!(player.next(), Some(TrackId::new("a")));
//! # Ok::<(), verse_playback::PlayerError>(())
//! ```

mod engine;
mod error;
mod events;
mod navigator;
mod player;
mod progress;
mod scheduler;
mod session;
pub mod types;
mod volume;

// Public exports
pub use engine::{AudioEngine, AudioHandle, FormatHint, HandleEvent, LoadRequest};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use player::Player;
pub use progress::{PointerInput, TrackerState};
pub use scheduler::{FrameScheduler, FrameTask};
pub use types::{PlaybackState, PlayerConfig};
