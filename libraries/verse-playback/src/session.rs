//! Playback session lifetime
//!
//! One session pairs one audio handle with the frame task that polls it.
//! The session is created when a track reference becomes active and replaced
//! wholesale when it changes; dropping it releases both resources.

use crate::engine::AudioHandle;
use crate::scheduler::FrameTask;
use verse_core::TrackRef;

/// Live playback session for one track reference
pub(crate) struct PlaybackSession {
    track: TrackRef,
    handle: Box<dyn AudioHandle>,
    frame_task: Box<dyn FrameTask>,
}

impl PlaybackSession {
    pub(crate) fn new(
        track: TrackRef,
        handle: Box<dyn AudioHandle>,
        frame_task: Box<dyn FrameTask>,
    ) -> Self {
        Self {
            track,
            handle,
            frame_task,
        }
    }

    pub(crate) fn track(&self) -> &TrackRef {
        &self.track
    }

    pub(crate) fn handle(&self) -> &dyn AudioHandle {
        self.handle.as_ref()
    }

    pub(crate) fn handle_mut(&mut self) -> &mut dyn AudioHandle {
        self.handle.as_mut()
    }
}

impl Drop for PlaybackSession {
    fn drop(&mut self) {
        // Frame task first: a tick must never observe a released handle.
        self.frame_task.cancel();
        self.handle.release();
    }
}
