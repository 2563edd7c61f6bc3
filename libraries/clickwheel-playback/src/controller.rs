//! Playback controller
//!
//! Owns the playback state and the audio backends, and drives both from a
//! polling tick. The controller is synchronous; whoever owns it schedules
//! `tick()` every `tick_interval()` while `tick_generation()` is `Some`.

use crate::backend::{Backends, OutputRoute};
use crate::error::{PlaybackError, Result};
use crate::events::PlaybackEvent;
use crate::state::PlaybackState;
use crate::types::{PlaybackConfig, TickGeneration, TransportState};
use clickwheel_core::{AudioLocator, AudioOutput, RepeatMode, Seconds, Track, VolumeSupport};
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Playback controller
///
/// Stopped, Playing, or Paused. While Playing, every accepted tick advances
/// the position (reported by the backend, or simulated) and applies the
/// end-of-track policy.
#[derive(Debug)]
pub struct PlaybackController {
    config: PlaybackConfig,
    state: PlaybackState,
    transport: TransportState,
    backends: Backends,

    /// Output producing the current track, `None` when nothing is started
    route: Option<OutputRoute>,

    /// Bumped on every entry into Playing
    generation: u64,

    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackController {
    /// Create a controller over a pair of backends
    pub fn new(config: PlaybackConfig, backends: Backends) -> Self {
        let state = PlaybackState::new(
            config.volume,
            config.repeat,
            config.shuffle,
            config.restart_threshold_secs,
        );

        Self {
            config,
            state,
            transport: TransportState::Stopped,
            backends,
            route: None,
            generation: 0,
            pending_events: Vec::new(),
        }
    }

    // ===== Queue =====

    /// Replace the queue and select its first track
    ///
    /// Transport state is kept: a playing controller starts the new first
    /// track, a paused one waits for `play()`.
    pub fn load_queue(&mut self, tracks: Vec<Track>) {
        self.release_output();
        self.state.load_queue(tracks);

        let length = self.state.queue().len();
        info!(length, shuffle = self.state.shuffle(), "Queue loaded");
        self.pending_events.push(PlaybackEvent::QueueLoaded { length });
        self.emit_track_changed();

        if self.transport == TransportState::Playing {
            if self.state.current_track().is_some() {
                self.start_current();
            } else {
                self.enter_stopped();
            }
        }
    }

    /// Replace the queue with a single track
    pub fn load_single(&mut self, track: Track) {
        self.load_queue(vec![track]);
    }

    // ===== Transport =====

    /// Start or resume playback of the current track
    ///
    /// Without a current track this does nothing. A backend that fails to
    /// start is logged and replaced by the simulated clock.
    pub fn play(&mut self) {
        if self.state.current_track().is_none() {
            debug!("Play requested with no track loaded");
            return;
        }

        match (self.transport, self.route) {
            (TransportState::Playing, Some(_)) => {}
            (TransportState::Paused, Some(route)) => {
                if let Some(output) = self.backends.output_mut(route) {
                    output.resume();
                }
                self.enter_playing();
            }
            _ => self.start_current(),
        }
    }

    /// Pause playback, keeping the position
    pub fn pause(&mut self) {
        if self.transport != TransportState::Playing {
            return;
        }

        if let Some(output) = self.active_output_mut() {
            output.pause();
        }

        self.transport = TransportState::Paused;
        self.state.set_playing(false);
        self.emit_state_changed();
    }

    /// Play when paused or stopped, pause when playing
    pub fn toggle(&mut self) {
        if self.transport == TransportState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Stop playback and rewind, keeping the queue
    pub fn stop(&mut self) {
        self.release_output();
        self.state.set_elapsed(0.0);
        if self.transport != TransportState::Stopped {
            self.enter_stopped();
        }
    }

    /// Reposition within the current track
    ///
    /// Negative positions clamp to zero.
    pub fn seek(&mut self, position: Seconds) {
        self.state.set_elapsed(position);
        let elapsed = self.state.elapsed();

        if let Some(output) = self.active_output_mut() {
            output.seek(elapsed);
        }

        self.emit_position_changed();
    }

    /// Set the output volume, clamped into `[0.0, 1.0]`
    ///
    /// Backends that follow the system volume ignore the request; the stored
    /// value still changes.
    pub fn set_volume(&mut self, volume: f32) {
        self.state.set_volume(volume);
        let volume = self.state.volume();

        let support = match self.active_output_mut() {
            Some(output) => output.set_volume(volume),
            None => VolumeSupport::Unsupported,
        };
        if support == VolumeSupport::Unsupported {
            debug!(volume, "Volume stored but not applied by the output");
        }

        self.pending_events
            .push(PlaybackEvent::VolumeChanged { volume, support });
    }

    // ===== Track Navigation =====

    /// Skip forward (user request)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let before = self.state.current_index();
        self.state.next_track();
        self.after_skip(before);
    }

    /// Skip back, or rewind when well into the track (user request)
    pub fn previous(&mut self) {
        let before = self.state.current_index();
        self.state.previous_track();
        self.after_skip(before);
    }

    /// Step the repeat mode Off -> All -> One -> Off
    pub fn cycle_repeat(&mut self) -> RepeatMode {
        let mode = self.state.cycle_repeat();
        info!(mode = mode.label(), "Repeat mode changed");
        self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
        mode
    }

    /// Set the repeat mode directly
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.state.repeat() != mode {
            self.state.set_repeat(mode);
            self.pending_events.push(PlaybackEvent::RepeatChanged { mode });
        }
    }

    /// Flip the shuffle flag, reordering the loaded queue
    pub fn toggle_shuffle(&mut self) -> bool {
        let enabled = !self.state.shuffle();
        self.state.set_shuffle(enabled);
        info!(enabled, "Shuffle changed");
        self.pending_events
            .push(PlaybackEvent::ShuffleChanged { enabled });
        enabled
    }

    // ===== Tick =====

    /// Generation the owner should schedule ticks for, `None` unless Playing
    pub fn tick_generation(&self) -> Option<TickGeneration> {
        (self.transport == TransportState::Playing).then_some(TickGeneration(self.generation))
    }

    /// Tick cadence
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Advance the clock by one tick
    ///
    /// Ticks from an earlier Playing run, or arriving while not Playing, are
    /// discarded. Returns whether the tick was applied.
    pub fn tick(&mut self, generation: TickGeneration) -> bool {
        if self.transport != TransportState::Playing || generation.0 != self.generation {
            trace!(?generation, current = self.generation, "Discarding stale tick");
            return false;
        }

        let Some(duration) = self.current_duration() else {
            return false;
        };

        let position = self
            .route
            .and_then(|route| self.backends.output(route))
            .and_then(|output| output.reported_position())
            .unwrap_or_else(|| self.state.elapsed() + self.config.tick_interval_secs());

        self.state.set_elapsed(position);
        self.emit_position_changed();

        if self.state.elapsed() >= duration - self.config.end_guard_secs {
            self.handle_track_end();
        }

        true
    }

    // ===== Queries =====

    /// Playback state snapshot
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Transport state
    pub fn transport(&self) -> TransportState {
        self.transport
    }

    /// Whether Playing
    pub fn is_playing(&self) -> bool {
        self.transport == TransportState::Playing
    }

    /// Output producing the current track
    pub fn route(&self) -> Option<OutputRoute> {
        self.route
    }

    /// Length of the current track, preferring the backend's report
    pub fn current_duration(&self) -> Option<Seconds> {
        let track = self.state.current_track()?;
        let reported = self
            .route
            .and_then(|route| self.backends.output(route))
            .and_then(|output| output.reported_duration());
        Some(reported.unwrap_or(track.duration))
    }

    /// Active configuration
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Whether events are waiting
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn handle_track_end(&mut self) {
        if let Some(track) = self.state.current_track() {
            let title = track.title.clone();
            info!(track = %title, "Track finished");
            self.pending_events.push(PlaybackEvent::TrackFinished { title });
        }

        if self.state.repeat() == RepeatMode::One {
            self.seek(0.0);
            self.start_current();
        } else if self.state.has_next_song() {
            self.state.next_track();
            self.emit_track_changed();
            self.start_current();
        } else {
            self.pause();
            self.seek(0.0);
        }
    }

    /// Follow up a user skip: restart audio if playing, otherwise drop the
    /// stale output so the next `play()` starts the new track fresh
    fn after_skip(&mut self, before: usize) {
        if self.state.current_index() != before {
            self.emit_track_changed();
        }

        if self.transport == TransportState::Playing {
            self.start_current();
        } else {
            self.release_output();
        }
        self.emit_position_changed();
    }

    /// Start the current track from the current elapsed time
    fn start_current(&mut self) {
        self.release_output();

        let Some(track) = self.state.current_track().cloned() else {
            return;
        };

        let route = match track.audio_locator() {
            None => {
                debug!(track = %track.title, "No audio attached, simulating playback");
                OutputRoute::Simulated
            }
            Some(locator) => match self.start_output(&locator) {
                Ok(route) => route,
                Err(err) => {
                    warn!(
                        track = %track.title,
                        error = %err,
                        "Audio output failed to start, simulating playback"
                    );
                    self.pending_events.push(PlaybackEvent::FellBackToSimulation {
                        title: track.title.clone(),
                        reason: err.to_string(),
                    });
                    OutputRoute::Simulated
                }
            },
        };

        debug!(track = %track.title, ?route, elapsed = self.state.elapsed(), "Starting track");
        self.route = Some(route);
        self.enter_playing();
    }

    fn start_output(&mut self, locator: &AudioLocator) -> Result<OutputRoute> {
        let route = OutputRoute::for_locator(locator);
        let elapsed = self.state.elapsed();
        let volume = self.state.volume();

        let output = self
            .backends
            .output_mut(route)
            .ok_or(PlaybackError::NoAudioSource)?;
        output.start(locator, elapsed, volume)?;
        Ok(route)
    }

    fn active_output_mut(&mut self) -> Option<&mut dyn AudioOutput> {
        let route = self.route?;
        self.backends.output_mut(route)
    }

    fn release_output(&mut self) {
        if let Some(route) = self.route.take() {
            if let Some(output) = self.backends.output_mut(route) {
                output.pause();
            }
        }
    }

    fn enter_playing(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state.set_playing(true);
        if self.transport != TransportState::Playing {
            self.transport = TransportState::Playing;
            self.emit_state_changed();
        }
    }

    fn enter_stopped(&mut self) {
        self.transport = TransportState::Stopped;
        self.state.set_playing(false);
        self.emit_state_changed();
    }

    fn emit_state_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::StateChanged {
            state: self.transport,
        });
    }

    fn emit_track_changed(&mut self) {
        if let Some(track) = self.state.current_track() {
            self.pending_events.push(PlaybackEvent::TrackChanged {
                index: self.state.current_index(),
                title: track.title.clone(),
            });
        }
    }

    fn emit_position_changed(&mut self) {
        if let Some(duration) = self.current_duration() {
            self.pending_events.push(PlaybackEvent::PositionChanged {
                elapsed: self.state.elapsed(),
                duration,
            });
        }
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default(), Backends::silent())
    }
}
