/// Track reference domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};

/// Reference to a playable track
///
/// Pairs the opaque identifier with the URL the audio engine should load.
/// Immutable once constructed; a new active track means a new `TrackRef`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRef {
    /// Unique track identifier
    pub id: TrackId,

    /// Playable URL (opaque to this component)
    pub url: String,
}

impl TrackRef {
    /// Create a new track reference
    pub fn new(id: TrackId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }
}
