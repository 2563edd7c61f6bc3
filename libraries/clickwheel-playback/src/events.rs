//! Playback Events
//!
//! Queued by the controller and drained by whoever renders the now-playing
//! screen. Events are emitted at key points:
//! - Transport changes (play/pause/stop)
//! - Track changes (user skip or end-of-track advance)
//! - Position updates (every applied tick or seek)

use crate::types::TransportState;
use clickwheel_core::{RepeatMode, Seconds, VolumeSupport};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// The new transport state
        state: TransportState,
    },

    /// The current track changed
    TrackChanged {
        /// Index of the new current track within the queue
        index: usize,
        /// Title of the new current track
        title: String,
    },

    /// Elapsed time changed
    PositionChanged {
        /// Seconds into the current track
        elapsed: Seconds,
        /// Length of the current track
        duration: Seconds,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume, 0.0-1.0
        volume: f32,
        /// Whether the active output honoured the change
        support: VolumeSupport,
    },

    /// Repeat mode changed
    RepeatChanged {
        /// The new repeat mode
        mode: RepeatMode,
    },

    /// Shuffle flag changed
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// A new queue replaced the old one
    QueueLoaded {
        /// Number of tracks in the new queue
        length: usize,
    },

    /// The current track reached its end
    TrackFinished {
        /// Title of the finished track
        title: String,
    },

    /// No backend could start the track, the clock is simulated instead
    FellBackToSimulation {
        /// Title of the affected track
        title: String,
        /// Why the backend did not start
        reason: String,
    },
}
