//! Core types for playback management

use crate::error::{PlaybackError, Result};
use clickwheel_core::{RepeatMode, Seconds};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Polling tick cadence while playing
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// A track counts as finished this close to its end
///
/// Guards against the polling clock stepping over the exact final sample.
pub const DEFAULT_END_GUARD_SECS: Seconds = 0.1;

/// "Previous" restarts the current track when more than this much has played
pub const DEFAULT_RESTART_THRESHOLD_SECS: Seconds = 3.0;

/// Initial output volume
pub const DEFAULT_VOLUME: f32 = 0.7;

/// Transport state of the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportState {
    /// Nothing has been played yet, or playback was stopped
    #[default]
    Stopped,

    /// Producing audio (or simulating it) and ticking
    Playing,

    /// Paused mid-track, tick halted
    Paused,
}

/// Identifies one uninterrupted run of the Playing state
///
/// Every entry into Playing gets a fresh generation. A tick scheduled for an
/// older generation is stale and must be dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickGeneration(pub(crate) u64);

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Tick cadence in milliseconds (default: 100)
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// End-of-track guard in seconds (default: 0.1)
    #[serde(default = "default_end_guard_secs")]
    pub end_guard_secs: Seconds,

    /// Restart-instead-of-previous threshold in seconds (default: 3.0)
    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: Seconds,

    /// Initial volume, 0.0-1.0 (default: 0.7)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Initial repeat mode (default: Off)
    #[serde(default)]
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: false)
    #[serde(default)]
    pub shuffle: bool,
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_end_guard_secs() -> Seconds {
    DEFAULT_END_GUARD_SECS
}

fn default_restart_threshold_secs() -> Seconds {
    DEFAULT_RESTART_THRESHOLD_SECS
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            end_guard_secs: DEFAULT_END_GUARD_SECS,
            restart_threshold_secs: DEFAULT_RESTART_THRESHOLD_SECS,
            volume: DEFAULT_VOLUME,
            repeat: RepeatMode::Off,
            shuffle: false,
        }
    }
}

impl PlaybackConfig {
    /// Tick cadence as a `Duration`
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Tick cadence in seconds, the simulated clock's step
    pub fn tick_interval_secs(&self) -> Seconds {
        self.tick_interval_ms as Seconds / 1000.0
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(PlaybackError::InvalidConfig(
                "tick_interval_ms must be positive".to_string(),
            ));
        }
        if !(self.end_guard_secs >= 0.0 && self.end_guard_secs.is_finite()) {
            return Err(PlaybackError::InvalidConfig(format!(
                "end_guard_secs must be a non-negative number, got {}",
                self.end_guard_secs
            )));
        }
        if !(self.restart_threshold_secs >= 0.0 && self.restart_threshold_secs.is_finite()) {
            return Err(PlaybackError::InvalidConfig(format!(
                "restart_threshold_secs must be a non-negative number, got {}",
                self.restart_threshold_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume must be within 0.0-1.0, got {}",
                self.volume
            )));
        }
        Ok(())
    }
}
