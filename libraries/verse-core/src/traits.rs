/// Seam traits for Verse Player
use crate::types::TrackId;

/// Externally-owned playback queue
///
/// The queue (ordered id sequence plus the currently active id) lives in the
/// host application, not in the playback component. The component reads the
/// sequence and the active id, and requests activation of a chosen id; it
/// never mutates the sequence itself.
///
/// The sequence order is insertion order and is significant for
/// next/previous navigation.
pub trait QueueStore {
    /// Ordered track id sequence
    fn track_ids(&self) -> Vec<TrackId>;

    /// Currently active track id, if any
    fn active_id(&self) -> Option<TrackId>;

    /// Request activation of a track id
    ///
    /// The store decides what activation means (typically: resolve the id to
    /// a URL and hand the playback component a new track reference).
    fn set_active_id(&mut self, id: TrackId);
}
