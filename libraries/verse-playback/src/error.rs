//! Error types for the playback component

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Engine could not bind a handle to a track URL
    #[error("failed to load {url}: {reason}")]
    LoadFailed {
        /// URL the engine was asked to load
        url: String,
        /// Engine-reported reason
        reason: String,
    },

    /// Engine-reported failure outside of load
    #[error("audio engine error: {0}")]
    Engine(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
