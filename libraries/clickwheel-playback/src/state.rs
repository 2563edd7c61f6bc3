//! Playback state
//!
//! The queue, the cursor into it, elapsed time, and the user's modes. Pure
//! data plus the track-to-track transitions; the controller decides when they
//! happen.

use crate::shuffle::{shuffle_keeping_current, shuffle_tracks};
use crate::types::DEFAULT_RESTART_THRESHOLD_SECS;
use clickwheel_core::{RepeatMode, Seconds, Track};

/// Playback state
///
/// Invariants:
/// - when the queue is non-empty, `current_index < queue.len()` and the
///   current track is `queue[current_index]`
/// - `elapsed >= 0`
/// - `volume` stays within `[0.0, 1.0]`
#[derive(Debug, Clone)]
pub struct PlaybackState {
    current_track: Option<Track>,
    is_playing: bool,
    elapsed: Seconds,
    volume: f32,
    repeat: RepeatMode,
    shuffle: bool,
    queue: Vec<Track>,
    /// Load order, kept so shuffle can be undone
    original_order: Vec<Track>,
    current_index: usize,
    restart_threshold: Seconds,
}

impl PlaybackState {
    /// Create an empty state
    pub fn new(volume: f32, repeat: RepeatMode, shuffle: bool, restart_threshold: Seconds) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            elapsed: 0.0,
            volume: clamp_volume(volume),
            repeat,
            shuffle,
            queue: Vec::new(),
            original_order: Vec::new(),
            current_index: 0,
            restart_threshold: restart_threshold.max(0.0),
        }
    }

    // ===== Queue Loading =====

    /// Replace the queue and select the first track
    ///
    /// The queue is shuffled when shuffle is on. The playing flag is left
    /// alone. An empty list clears the current track.
    pub fn load_queue(&mut self, tracks: Vec<Track>) {
        self.original_order = tracks.clone();
        self.queue = tracks;
        if self.shuffle {
            shuffle_tracks(&mut self.queue);
        }
        self.current_index = 0;
        self.elapsed = 0.0;
        self.sync_current();
    }

    /// Replace the queue with one track
    pub fn load_single(&mut self, track: Track) {
        self.load_queue(vec![track]);
    }

    /// Clear everything back to the idle state, keeping user modes
    pub fn reset(&mut self) {
        self.queue.clear();
        self.original_order.clear();
        self.current_index = 0;
        self.current_track = None;
        self.elapsed = 0.0;
        self.is_playing = false;
    }

    // ===== Transitions =====

    /// Advance to the next track
    ///
    /// - repeat One: restart the current track
    /// - last track with repeat All: wrap to the first
    /// - last track otherwise: stay put
    ///
    /// Empty queues are left untouched.
    pub fn next_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        match self.repeat {
            RepeatMode::One => {
                self.elapsed = 0.0;
            }
            _ if self.current_index + 1 < self.queue.len() => {
                self.current_index += 1;
                self.elapsed = 0.0;
                self.sync_current();
            }
            RepeatMode::All => {
                self.current_index = 0;
                self.elapsed = 0.0;
                self.sync_current();
            }
            RepeatMode::Off => {}
        }
    }

    /// Step back
    ///
    /// More than the restart threshold into a track only rewinds it.
    /// Otherwise move to the previous track, wrapping to the last under
    /// repeat All. At the first track without repeat All nothing changes.
    pub fn previous_track(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.elapsed > self.restart_threshold {
            self.elapsed = 0.0;
            return;
        }

        if self.current_index > 0 {
            self.current_index -= 1;
            self.elapsed = 0.0;
            self.sync_current();
        } else if self.repeat == RepeatMode::All {
            self.current_index = self.queue.len() - 1;
            self.elapsed = 0.0;
            self.sync_current();
        }
    }

    /// Whether end-of-track can move on without stopping
    pub fn has_next_song(&self) -> bool {
        self.repeat != RepeatMode::Off || self.current_index + 1 < self.queue.len()
    }

    /// Whether "previous" can move to another track
    pub fn has_previous_song(&self) -> bool {
        self.current_index > 0 || self.repeat == RepeatMode::All
    }

    // ===== Modes =====

    /// Set the repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Advance the repeat mode one step and return the new mode
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.repeat
    }

    /// Turn shuffle on or off
    ///
    /// On: the current track moves to the head and the rest is shuffled.
    /// Off: load order comes back with the same track still selected.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;

        if self.queue.is_empty() {
            return;
        }

        if enabled {
            shuffle_keeping_current(&mut self.queue, self.current_index);
            self.current_index = 0;
        } else {
            let current = self.current_track.as_ref();
            self.current_index = current
                .and_then(|track| self.original_order.iter().position(|t| t == track))
                .unwrap_or(0);
            self.queue = self.original_order.clone();
        }
        self.sync_current();
    }

    /// Set the volume, clamped into `[0.0, 1.0]`
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
    }

    /// Set elapsed time, clamped to non-negative
    pub fn set_elapsed(&mut self, elapsed: Seconds) {
        self.elapsed = if elapsed.is_nan() { 0.0 } else { elapsed.max(0.0) };
    }

    pub(crate) fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    // ===== Queries =====

    /// The selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether audio is (or should be) running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Seconds into the current track
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Output volume, 0.0-1.0
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current repeat mode
    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle is on
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Tracks in play order
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Position of the current track in the queue
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Remaining time in the current track
    pub fn remaining(&self) -> Seconds {
        self.current_track
            .as_ref()
            .map_or(0.0, |track| (track.duration - self.elapsed).max(0.0))
    }

    fn sync_current(&mut self) {
        self.current_track = self.queue.get(self.current_index).cloned();
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(
            crate::types::DEFAULT_VOLUME,
            RepeatMode::Off,
            false,
            DEFAULT_RESTART_THRESHOLD_SECS,
        )
    }
}

fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
