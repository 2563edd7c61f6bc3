//! Click Wheel Player Core
//!
//! Platform-agnostic core types, collaborator traits, and error handling
//! shared by the input, playback, and menu crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `RepeatMode`, `LibraryIndex`
//! - **Collaborator Traits**: `AudioOutput`, `LibraryProvider`, `HapticFeedback`, `DisplaySink`
//! - **Error Handling**: `AudioError` and `LibraryError`
//!
//! Nothing in this crate talks to hardware. Audio output, the media library,
//! haptics, and the display are supplied by whoever composes the player.
//!
//! # Example
//!
//! ```rust
//! use clickwheel_core::{Playlist, Track};
//!
//! let track = Track::new("Imagine", "John Lennon", "Imagine", 183.0)
//!     .with_locator("file:///music/imagine.mp3");
//! assert_eq!(track.formatted_duration(), "3:03");
//!
//! let playlist = Playlist::new("Favorites", vec![track]);
//! assert_eq!(playlist.formatted_duration(), "3 minutes");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AudioError, LibraryError};
pub use traits::{
    AudioOutput, DisplaySink, HapticFeedback, LibraryProvider, LibraryStatus, VolumeSupport,
};
pub use types::{AudioLocator, LibraryIndex, Playlist, RepeatMode, Seconds, Track};
