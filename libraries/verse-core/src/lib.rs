//! Verse Player Core
//!
//! Platform-agnostic core types and seam traits for Verse Player.
//!
//! This crate defines the vocabulary shared between the playback component
//! and its hosts:
//! - **Domain Types**: `TrackId`, `TrackRef`
//! - **Seam Traits**: `QueueStore` (the externally-owned playback queue)
//!
//! # Example
//!
//! ```rust
//! use verse_core::{TrackId, TrackRef};
//!
//! let id = TrackId::new("track-1");
//! let track = TrackRef::new(id, "https://cdn.example.com/track-1.mp3");
//!
//! assert_eq!(track.id.as_str(), "track-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod traits;
pub mod types;

// Re-export commonly used types
pub use traits::QueueStore;
pub use types::{TrackId, TrackRef};
