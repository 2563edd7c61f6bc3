//! Integration tests for the playback controller
//!
//! Drives the controller through whole listening sessions with recording
//! backends standing in for audio hardware.

use clickwheel_core::{AudioError, AudioLocator, AudioOutput, RepeatMode, Seconds, Track, VolumeSupport};
use clickwheel_playback::{
    Backends, NullOutput, OutputRoute, PlaybackConfig, PlaybackController, PlaybackEvent,
    TransportState,
};
use std::sync::{Arc, Mutex};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Start(AudioLocator, Seconds, f32),
    Pause,
    Resume,
    Seek(Seconds),
    Volume(f32),
}

#[derive(Default)]
struct Shared {
    calls: Vec<Call>,
    position: Option<Seconds>,
    duration: Option<Seconds>,
    fail_start: bool,
}

/// Audio output that records every call
#[derive(Clone, Default)]
struct RecordingOutput(Arc<Mutex<Shared>>);

impl RecordingOutput {
    fn failing() -> Self {
        let output = Self::default();
        output.0.lock().unwrap().fail_start = true;
        output
    }

    fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().calls.clone()
    }

    fn starts(&self) -> Vec<AudioLocator> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Start(locator, _, _) => Some(locator),
                _ => None,
            })
            .collect()
    }

    fn report(&self, position: Option<Seconds>, duration: Option<Seconds>) {
        let mut shared = self.0.lock().unwrap();
        shared.position = position;
        shared.duration = duration;
    }
}

impl AudioOutput for RecordingOutput {
    fn start(
        &mut self,
        locator: &AudioLocator,
        start_position: Seconds,
        volume: f32,
    ) -> Result<(), AudioError> {
        let mut shared = self.0.lock().unwrap();
        if shared.fail_start {
            return Err(AudioError::Protected("drm".to_string()));
        }
        shared
            .calls
            .push(Call::Start(locator.clone(), start_position, volume));
        Ok(())
    }

    fn pause(&mut self) {
        self.0.lock().unwrap().calls.push(Call::Pause);
    }

    fn resume(&mut self) {
        self.0.lock().unwrap().calls.push(Call::Resume);
    }

    fn seek(&mut self, position: Seconds) {
        self.0.lock().unwrap().calls.push(Call::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) -> VolumeSupport {
        self.0.lock().unwrap().calls.push(Call::Volume(volume));
        VolumeSupport::Supported
    }

    fn reported_position(&self) -> Option<Seconds> {
        self.0.lock().unwrap().position
    }

    fn reported_duration(&self) -> Option<Seconds> {
        self.0.lock().unwrap().duration
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

fn simulated(title: &str, duration: Seconds) -> Track {
    Track::new(title, "Artist", "Album", duration)
}

fn tick(controller: &mut PlaybackController) -> bool {
    match controller.tick_generation() {
        Some(generation) => controller.tick(generation),
        None => false,
    }
}

fn playing_at(tracks: Vec<Track>, elapsed: Seconds) -> PlaybackController {
    let mut controller = PlaybackController::default();
    controller.load_queue(tracks);
    controller.play();
    controller.seek(elapsed);
    controller
}

// ===== End of Track =====

#[test]
fn end_of_track_advances_and_keeps_playing() {
    let mut controller = playing_at(vec![simulated("A", 180.0), simulated("B", 200.0)], 179.95);
    controller.drain_events();

    assert!(tick(&mut controller));

    assert_eq!(controller.state().current_index(), 1);
    assert_eq!(controller.state().current_track().unwrap().title, "B");
    assert_eq!(controller.state().elapsed(), 0.0);
    assert_eq!(controller.transport(), TransportState::Playing);

    let events = controller.drain_events();
    assert!(events.contains(&PlaybackEvent::TrackFinished {
        title: "A".to_string()
    }));
    assert!(events.contains(&PlaybackEvent::TrackChanged {
        index: 1,
        title: "B".to_string()
    }));
}

#[test]
fn end_of_queue_pauses_and_rewinds() {
    let mut controller = playing_at(vec![simulated("A", 180.0), simulated("B", 200.0)], 0.0);
    controller.next();
    controller.seek(199.95);

    tick(&mut controller);

    assert_eq!(controller.transport(), TransportState::Paused);
    assert_eq!(controller.state().current_index(), 1);
    assert_eq!(controller.state().elapsed(), 0.0);
    assert!(controller.tick_generation().is_none());
}

#[test]
fn repeat_one_replays_track() {
    let mut controller = playing_at(vec![simulated("A", 180.0), simulated("B", 200.0)], 179.95);
    controller.set_repeat(RepeatMode::One);

    tick(&mut controller);

    assert_eq!(controller.state().current_index(), 0);
    assert_eq!(controller.state().elapsed(), 0.0);
    assert!(controller.is_playing());
}

#[test]
fn repeat_all_wraps_to_first() {
    let mut controller = playing_at(vec![simulated("A", 180.0), simulated("B", 200.0)], 0.0);
    controller.set_repeat(RepeatMode::All);
    controller.next();
    controller.seek(199.95);

    tick(&mut controller);

    assert_eq!(controller.state().current_index(), 0);
    assert!(controller.is_playing());
}

#[test]
fn simulated_clock_reaches_end() {
    let mut controller = playing_at(vec![simulated("Short", 1.05), simulated("Next", 5.0)], 0.0);

    let mut ticks = 0;
    while controller.state().current_index() == 0 && ticks < 100 {
        tick(&mut controller);
        ticks += 1;
    }

    // 0.1 s steps cross the 0.95 s guard on the tenth tick
    assert_eq!(ticks, 10);
    assert_eq!(controller.state().current_track().unwrap().title, "Next");
}

// ===== Backend Dispatch =====

#[test]
fn library_items_use_library_backend() {
    let local = RecordingOutput::default();
    let library = RecordingOutput::default();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(library.clone())),
    );

    controller.load_queue(vec![
        simulated("Hey Jude", 431.0).with_library_id(11),
        simulated("Imagine", 183.0).with_locator("asset://imagine"),
    ]);
    controller.play();

    assert_eq!(controller.route(), Some(OutputRoute::Library));
    assert_eq!(
        library.calls(),
        vec![Call::Start(AudioLocator::LibraryItem(11), 0.0, 0.7)]
    );

    controller.next();

    assert_eq!(controller.route(), Some(OutputRoute::Local));
    assert_eq!(library.calls().last(), Some(&Call::Pause));
    assert_eq!(
        local.starts(),
        vec![AudioLocator::Uri("asset://imagine".to_string())]
    );
}

#[test]
fn library_id_wins_over_locator() {
    let local = RecordingOutput::default();
    let library = RecordingOutput::default();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(library.clone())),
    );

    controller.load_single(
        simulated("Both", 100.0)
            .with_locator("asset://both")
            .with_library_id(3),
    );
    controller.play();

    assert!(local.starts().is_empty());
    assert_eq!(library.starts(), vec![AudioLocator::LibraryItem(3)]);
}

#[test]
fn failed_start_falls_back_to_simulation() {
    let local = RecordingOutput::failing();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(NullOutput)),
    );

    controller.load_single(simulated("Protected", 100.0).with_locator("asset://drm"));
    controller.drain_events();
    controller.play();

    assert!(controller.is_playing());
    assert_eq!(controller.route(), Some(OutputRoute::Simulated));
    assert!(tick(&mut controller));
    assert!((controller.state().elapsed() - 0.1).abs() < 1e-9);

    let fell_back = controller.drain_events().into_iter().any(|e| {
        matches!(e, PlaybackEvent::FellBackToSimulation { ref title, .. } if title == "Protected")
    });
    assert!(fell_back);
}

#[test]
fn reported_position_and_duration_win() {
    let local = RecordingOutput::default();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(NullOutput)),
    );

    controller.load_queue(vec![
        simulated("Real", 300.0).with_locator("file:///real.flac"),
        simulated("After", 100.0),
    ]);
    controller.play();

    local.report(Some(42.5), Some(250.0));
    tick(&mut controller);
    assert_eq!(controller.state().elapsed(), 42.5);
    assert_eq!(controller.current_duration(), Some(250.0));

    // Backend says 249.95 of 250: within the guard even though the catalog says 300
    local.report(Some(249.95), Some(250.0));
    tick(&mut controller);
    assert_eq!(controller.state().current_track().unwrap().title, "After");
}

#[test]
fn pause_and_resume_reach_backend() {
    let local = RecordingOutput::default();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(NullOutput)),
    );

    controller.load_single(simulated("Song", 100.0).with_locator("asset://song"));
    controller.play();
    controller.pause();
    controller.play();
    controller.seek(12.0);
    controller.set_volume(0.25);

    assert_eq!(
        local.calls(),
        vec![
            Call::Start(AudioLocator::Uri("asset://song".to_string()), 0.0, 0.7),
            Call::Pause,
            Call::Resume,
            Call::Seek(12.0),
            Call::Volume(0.25),
        ]
    );
    assert!(controller
        .drain_events()
        .contains(&PlaybackEvent::VolumeChanged {
            volume: 0.25,
            support: VolumeSupport::Supported
        }));
}

// ===== User Navigation =====

#[test]
fn previous_restarts_or_steps_back() {
    let mut controller = playing_at(vec![simulated("A", 180.0), simulated("B", 200.0)], 0.0);
    controller.next();

    controller.seek(10.0);
    controller.previous();
    assert_eq!(controller.state().current_index(), 1);
    assert_eq!(controller.state().elapsed(), 0.0);

    controller.seek(2.0);
    controller.previous();
    assert_eq!(controller.state().current_index(), 0);
    assert!(controller.is_playing());
}

#[test]
fn skip_while_paused_waits_for_play() {
    let local = RecordingOutput::default();
    let mut controller = PlaybackController::new(
        PlaybackConfig::default(),
        Backends::new(Box::new(local.clone()), Box::new(NullOutput)),
    );

    controller.load_queue(vec![
        simulated("One", 100.0).with_locator("asset://one"),
        simulated("Two", 100.0).with_locator("asset://two"),
    ]);
    controller.play();
    controller.pause();
    controller.next();

    assert_eq!(controller.transport(), TransportState::Paused);
    assert_eq!(local.starts().len(), 1);

    controller.play();
    assert_eq!(
        local.starts().last(),
        Some(&AudioLocator::Uri("asset://two".to_string()))
    );
}

#[test]
fn shuffle_toggle_keeps_current_track() {
    let tracks: Vec<Track> = (0..8).map(|i| simulated(&format!("T{i}"), 100.0)).collect();
    let mut controller = playing_at(tracks, 0.0);
    controller.next();
    controller.next();

    assert!(controller.toggle_shuffle());
    assert_eq!(controller.state().current_track().unwrap().title, "T2");
    assert_eq!(controller.state().current_index(), 0);

    assert!(!controller.toggle_shuffle());
    assert_eq!(controller.state().current_track().unwrap().title, "T2");
    assert_eq!(controller.state().current_index(), 2);
}

#[test]
fn shuffle_on_load_keeps_every_track() {
    let config = PlaybackConfig {
        shuffle: true,
        ..PlaybackConfig::default()
    };
    let mut controller = PlaybackController::new(config, Backends::silent());
    let tracks: Vec<Track> = (0..12).map(|i| simulated(&format!("T{i}"), 100.0)).collect();
    controller.load_queue(tracks.clone());

    let mut titles: Vec<String> = controller
        .state()
        .queue()
        .iter()
        .map(|t| t.title.clone())
        .collect();
    titles.sort();
    let mut expected: Vec<String> = tracks.iter().map(|t| t.title.clone()).collect();
    expected.sort();
    assert_eq!(titles, expected);
}
