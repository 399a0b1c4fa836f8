//! Player - core orchestration
//!
//! Coordinates queue navigation, the playback session, volume, and the
//! progress/seek state machine over the injected seams.

use crate::{
    engine::{AudioEngine, HandleEvent, LoadRequest},
    error::Result,
    events::PlayerEvent,
    navigator,
    progress::{PointerInput, ProgressTracker, TrackerState},
    scheduler::FrameScheduler,
    session::PlaybackSession,
    types::{PlaybackState, PlayerConfig},
    volume::VolumeControl,
};
use std::time::Duration;
use verse_core::{QueueStore, TrackId, TrackRef};

/// Central playback control
///
/// Owns the control logic behind a player control surface:
/// - Queue navigation (next/previous with wraparound) over the injected store
/// - One playback session per active track, released on replacement
/// - Volume with mute memory, propagated to the live handle
/// - Progress tracking with click/drag seek
///
/// The host drives it from the UI thread: user gestures call the control
/// methods, and the frame scheduler invokes [`Player::tick`] once per display
/// refresh while a session is live. State is reported back through
/// [`Player::take_events`] and the query methods.
pub struct Player {
    // State
    state: PlaybackState,
    session: Option<PlaybackSession>,

    // Settings
    config: PlayerConfig,
    volume: VolumeControl,

    // Progress/seek state machine
    progress: ProgressTracker,

    // Injected seams
    store: Box<dyn QueueStore>,
    engine: Box<dyn AudioEngine>,
    scheduler: Box<dyn FrameScheduler>,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl Player {
    /// Create a new player over the host-provided seams
    pub fn new(
        store: Box<dyn QueueStore>,
        engine: Box<dyn AudioEngine>,
        scheduler: Box<dyn FrameScheduler>,
        config: PlayerConfig,
    ) -> Self {
        Self {
            state: PlaybackState::Stopped,
            session: None,
            volume: VolumeControl::new(config.volume),
            progress: ProgressTracker::new(),
            config,
            store,
            engine,
            scheduler,
            pending_events: Vec::new(),
        }
    }

    // ===== Session Lifecycle =====

    /// Bind playback to a new track reference
    ///
    /// Tears down the previous session (frame task cancelled, handle
    /// released), then asks the engine for a fresh handle configured with the
    /// current volume. Playback starts immediately when auto-play is enabled.
    ///
    /// # Errors
    /// Returns the engine's error when the URL cannot be loaded; the player
    /// is left in the `Failed` state with no live session, and a
    /// [`PlayerEvent::LoadFailed`] is emitted. Callers that only observe
    /// state and events may ignore the result.
    pub fn load(&mut self, track: TrackRef) -> Result<()> {
        // The old handle's release must be requested before the engine
        // binds a new one.
        self.teardown_session();
        self.set_state(PlaybackState::Stopped);

        let request = LoadRequest {
            url: track.url.clone(),
            volume: self.volume.level(),
            format: self.config.format,
        };

        let mut handle = match self.engine.load(request) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::warn!(track = %track.id, error = %err, "track failed to load");
                self.set_state(PlaybackState::Failed);
                self.pending_events.push(PlayerEvent::LoadFailed {
                    track_id: track.id.clone(),
                    message: err.to_string(),
                });
                return Err(err);
            }
        };

        if self.config.autoplay {
            handle.play();
        }

        let frame_task = self.scheduler.begin();

        tracing::debug!(track = %track.id, "playback session created");
        self.pending_events.push(PlayerEvent::TrackLoaded {
            track_id: track.id.clone(),
        });

        self.session = Some(PlaybackSession::new(track, handle, frame_task));
        self.progress.attach();

        Ok(())
    }

    /// Stop playback and tear down the current session
    pub fn stop(&mut self) {
        self.teardown_session();
    }

    fn teardown_session(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(track = %session.track().id, "playback session torn down");
            // Dropping cancels the frame task, then releases the handle
            drop(session);
            self.progress.detach();
            self.set_state(PlaybackState::Stopped);
        }
    }

    // ===== Frame Tick =====

    /// Per-frame update, invoked by the host's frame scheduler
    ///
    /// Drains the handle's queued lifecycle notifications, reacts to them
    /// (natural end advances the queue), and refreshes the displayed
    /// progress unless a seek gesture is in flight. A tick arriving after
    /// teardown is a no-op.
    pub fn tick(&mut self) {
        let drained: Vec<HandleEvent> = match self.session.as_mut() {
            Some(session) => std::iter::from_fn(|| session.handle_mut().poll_event()).collect(),
            None => return,
        };

        let mut finished = false;
        for event in drained {
            match event {
                HandleEvent::Started => self.set_state(PlaybackState::Playing),
                HandleEvent::Paused => self.set_state(PlaybackState::Paused),
                HandleEvent::Ended => finished = true,
            }
        }

        if finished {
            self.set_state(PlaybackState::Stopped);
            if let Some(session) = self.session.as_ref() {
                self.pending_events.push(PlayerEvent::TrackFinished {
                    track_id: session.track().id.clone(),
                });
            }
            // Natural end advances the queue
            self.next();
        }

        if let Some(session) = self.session.as_ref() {
            let handle = session.handle();
            self.progress.update(handle.position(), handle.duration());
        }
    }

    // ===== Playback Control =====

    /// Toggle between playing and paused
    ///
    /// A pure toggle: the state itself flips when the handle reports
    /// `Started`/`Paused` on a following tick. No session, no effect.
    pub fn toggle_play_pause(&mut self) {
        let playing = self.state == PlaybackState::Playing;

        let Some(session) = self.session.as_mut() else {
            return;
        };

        if playing {
            session.handle_mut().pause();
        } else {
            session.handle_mut().play();
        }
    }

    // ===== Volume =====

    /// Set volume (0.0-1.0, clamped), propagated to the live handle
    pub fn set_volume(&mut self, volume: f32) {
        self.volume.set_level(volume);
        self.sync_volume();
    }

    /// Toggle mute state
    ///
    /// Muting remembers the current level; unmuting restores it exactly.
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.sync_volume();
    }

    /// Get current volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    fn sync_volume(&mut self) {
        let level = self.volume.level();
        if let Some(session) = self.session.as_mut() {
            session.handle_mut().set_volume(level);
        }
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: level,
            muted: self.volume.is_muted(),
        });
    }

    // ===== Queue Navigation =====

    /// Activate the next track in the queue, wrapping past the end
    ///
    /// Publishes the chosen id to the queue store and returns it. The store
    /// decides what actually plays; the host reacts to the activation by
    /// calling [`Player::load`] with the new track reference. An empty queue
    /// is a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<TrackId> {
        let ids = self.store.track_ids();
        let active = self.store.active_id();
        let chosen = navigator::next_id(&ids, active.as_ref())?;
        self.activate(chosen)
    }

    /// Activate the previous track in the queue, wrapping before the start
    pub fn previous(&mut self) -> Option<TrackId> {
        let ids = self.store.track_ids();
        let active = self.store.active_id();
        let chosen = navigator::previous_id(&ids, active.as_ref())?;
        self.activate(chosen)
    }

    fn activate(&mut self, id: TrackId) -> Option<TrackId> {
        tracing::debug!(track = %id, "requesting activation");
        self.store.set_active_id(id.clone());
        self.pending_events.push(PlayerEvent::TrackActivated {
            track_id: id.clone(),
        });
        Some(id)
    }

    // ===== Seek =====

    /// Start a seek gesture on the progress indicator
    ///
    /// Pauses playback for the duration of the gesture and records whether
    /// it should resume on release. While the gesture is live, frame ticks
    /// leave the displayed progress alone. No session, no effect.
    pub fn begin_seek(&mut self) {
        if self.session.is_none() {
            return;
        }

        let was_playing = self.state == PlaybackState::Playing;
        if self.progress.begin_seek(was_playing) && was_playing {
            if let Some(session) = self.session.as_mut() {
                session.handle_mut().pause();
            }
        }
    }

    /// Apply the pointer's position to the live seek gesture
    ///
    /// Re-invoked on every pointer move while dragging. The pointer fraction
    /// is clamped to [0,1]; the handle seeks to `fraction * duration` and the
    /// displayed progress updates immediately.
    pub fn update_seek(&mut self, input: PointerInput) {
        if !self.progress.is_seeking() {
            return;
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        let fraction = input.fraction();
        let position = session.handle().duration().mul_f32(fraction);
        session.handle_mut().seek_to(position);

        self.progress.set_fraction(fraction);
        self.pending_events.push(PlayerEvent::Seeked {
            fraction,
            position_ms: position.as_millis() as u64,
        });
    }

    /// Finish the seek gesture, resuming playback if it was active before
    pub fn end_seek(&mut self) {
        let Some(resume) = self.progress.end_seek() else {
            return;
        };

        if !resume {
            return;
        }

        if let Some(session) = self.session.as_mut() {
            session.handle_mut().play();
        }
    }

    /// Single-click seek: the full gesture in one call
    pub fn seek_click(&mut self, input: PointerInput) {
        self.begin_seek();
        self.update_seek(input);
        self.end_seek();
    }

    // ===== State Queries =====

    /// Get current playback state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Get the track bound to the current session
    pub fn current_track(&self) -> Option<&TrackRef> {
        self.session.as_ref().map(PlaybackSession::track)
    }

    /// Displayed progress (0.0-1.0)
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// Get the progress tracker state
    pub fn tracker_state(&self) -> TrackerState {
        self.progress.state()
    }

    /// Check if a seek gesture is in flight
    pub fn is_seeking(&self) -> bool {
        self.progress.is_seeking()
    }

    /// Current playback position, if a session is live
    pub fn position(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.handle().position())
    }

    /// Current track duration, if a session is live
    pub fn duration(&self) -> Option<Duration> {
        self.session.as_ref().map(|s| s.handle().duration())
    }

    // ===== Events =====

    /// Drain events accumulated since the last call
    pub fn take_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlayerEvent::StateChanged { state });
        }
    }
}
