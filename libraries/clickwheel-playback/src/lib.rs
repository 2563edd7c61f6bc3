//! Click Wheel Player - Playback
//!
//! Queue state, transport control, and the polling clock that drives
//! end-of-track handling.
//!
//! # Features
//!
//! - **Queue**: load a list or a single track, next/previous with a restart
//!   threshold, repeat (off/all/one), shuffle with restorable order
//! - **Transport**: play, pause, toggle, stop, seek, volume
//! - **Backends**: library items and local URIs go to separate outputs;
//!   anything that cannot start runs on a simulated clock
//! - **Events**: queued for the owner to drain after each call
//!
//! # Example
//!
//! ```rust
//! use clickwheel_core::Track;
//! use clickwheel_playback::{PlaybackController, TransportState};
//!
//! let mut controller = PlaybackController::default();
//! controller.load_queue(vec![
//!     Track::new("A", "Artist", "Album", 180.0),
//!     Track::new("B", "Artist", "Album", 200.0),
//! ]);
//! controller.play();
//! assert_eq!(controller.transport(), TransportState::Playing);
//!
//! // Owner drives the clock every `tick_interval()`
//! controller.seek(179.95);
//! let generation = controller.tick_generation().unwrap();
//! controller.tick(generation);
//!
//! assert_eq!(controller.state().current_index(), 1);
//! assert!(controller.is_playing());
//! ```

#![forbid(unsafe_code)]

mod backend;
mod controller;
mod error;
mod events;
mod shuffle;
mod state;
mod types;

pub use backend::{Backends, NullOutput, OutputRoute};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use shuffle::{
    shuffle_keeping_current, shuffle_keeping_current_with, shuffle_tracks, shuffle_tracks_with,
};
pub use state::PlaybackState;
pub use types::{
    PlaybackConfig, TickGeneration, TransportState, DEFAULT_END_GUARD_SECS,
    DEFAULT_RESTART_THRESHOLD_SECS, DEFAULT_TICK_INTERVAL_MS, DEFAULT_VOLUME,
};
