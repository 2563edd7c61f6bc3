//! Player session
//!
//! Composes the wheel decoder, the menu navigator, and the playback
//! controller. Everything here is synchronous; work that has to wait on the
//! library comes back to the caller as an [`Effect`].

use crate::config::SimConfig;
use crate::error::Result;
use clickwheel_core::{DisplaySink, HapticFeedback, LibraryError, RepeatMode, Seconds, Track};
use clickwheel_input::{RotaryInputDecoder, WheelButton, WheelInput};
use clickwheel_menu::{CustomAction, LibraryRequest, MenuCommand, MenuItem, MenuNavigator};
use clickwheel_playback::{
    shuffle_tracks, Backends, PlaybackController, PlaybackEvent, TickGeneration, TransportState,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Asynchronous work requested by the session
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run a library listing and hand it to [`Session::complete_fetch`]
    Fetch(LibraryRequest),

    /// Fetch every song and hand it to [`Session::complete_shuffle`]
    ShuffleAll,
}

/// Playback controls outside the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    CycleRepeat,
    ToggleShuffle,
    SetVolume(f32),
    Seek(Seconds),
    Stop,
}

pub struct Session {
    decoder: RotaryInputDecoder,
    navigator: MenuNavigator,
    controller: PlaybackController,
    haptics: Arc<dyn HapticFeedback>,
    display: Arc<dyn DisplaySink>,
    now_playing: bool,
}

impl Session {
    /// Build a session from validated configuration
    pub fn new(
        config: &SimConfig,
        backends: Backends,
        haptics: Arc<dyn HapticFeedback>,
        display: Arc<dyn DisplaySink>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            decoder: RotaryInputDecoder::new(config.wheel),
            navigator: MenuNavigator::default(),
            controller: PlaybackController::new(config.playback.clone(), backends),
            haptics,
            display,
            now_playing: false,
        })
    }

    // ===== Input =====

    /// Route one wheel input
    pub fn handle_input(&mut self, input: WheelInput) -> Option<Effect> {
        match input {
            WheelInput::Touch { dx, dy } => {
                // The now-playing screen has no list to scroll
                if self.now_playing {
                    return None;
                }
                let step = self.decoder.sample(dx, dy, self.haptics.as_ref())?;
                if !self.navigator.step(step) {
                    self.haptics.bump();
                }
                None
            }
            WheelInput::Release => {
                self.decoder.release();
                None
            }
            WheelInput::Button(button) => self.handle_button(button),
        }
    }

    fn handle_button(&mut self, button: WheelButton) -> Option<Effect> {
        match button {
            WheelButton::Menu => {
                if self.now_playing {
                    self.dismiss_now_playing();
                } else {
                    self.navigator.back();
                }
                None
            }
            WheelButton::Center => {
                if self.now_playing {
                    return None;
                }
                self.haptics.confirm();
                let command = self.navigator.commit()?;
                self.apply_command(command)
            }
            WheelButton::PlayPause => {
                self.controller.toggle();
                None
            }
            WheelButton::Next => {
                self.controller.next();
                None
            }
            WheelButton::Previous => {
                self.controller.previous();
                None
            }
        }
    }

    fn apply_command(&mut self, command: MenuCommand) -> Option<Effect> {
        match command {
            MenuCommand::PlayTrack(track) => {
                info!(title = %track.title, "Playing track");
                self.controller.load_single(track);
                self.start_playback();
            }
            MenuCommand::PlayQueue(playlist) => {
                if playlist.is_empty() {
                    self.haptics.bump();
                    return None;
                }
                info!(playlist = %playlist.name, tracks = playlist.tracks.len(), "Playing playlist");
                self.controller.load_queue(playlist.tracks);
                self.start_playback();
            }
            MenuCommand::ShowNowPlaying => self.show_now_playing(),
            MenuCommand::ShowSettings => self.display.show_settings(),
            MenuCommand::Custom(CustomAction::Noop) => {}
            MenuCommand::Custom(CustomAction::ShuffleSongs) => return Some(Effect::ShuffleAll),
            MenuCommand::FetchLibrary(request) => return Some(Effect::Fetch(request)),
        }
        None
    }

    fn start_playback(&mut self) {
        self.controller.play();
        self.show_now_playing();
    }

    fn show_now_playing(&mut self) {
        self.now_playing = true;
        self.decoder.release();
        self.display.show_now_playing();
    }

    fn dismiss_now_playing(&mut self) {
        self.now_playing = false;
        self.display.dismiss_now_playing();
    }

    // ===== Effect Completion =====

    /// Deliver a finished library listing
    pub fn complete_fetch(
        &mut self,
        request: &LibraryRequest,
        result: std::result::Result<Vec<MenuItem>, LibraryError>,
    ) -> bool {
        self.navigator.complete_fetch(request, result)
    }

    /// Deliver the songs for Shuffle Songs
    pub fn complete_shuffle(&mut self, result: std::result::Result<Vec<Track>, LibraryError>) {
        match result {
            Ok(mut tracks) if !tracks.is_empty() => {
                shuffle_tracks(&mut tracks);
                info!(tracks = tracks.len(), "Shuffling all songs");
                self.controller.load_queue(tracks);
                self.start_playback();
            }
            Ok(_) => {
                debug!("No songs to shuffle");
                self.haptics.bump();
            }
            Err(e) => {
                warn!(error = %e, "Shuffle Songs unavailable");
                self.haptics.bump();
            }
        }
    }

    // ===== Controls =====

    pub fn apply_control(&mut self, control: Control) {
        match control {
            Control::CycleRepeat => {
                self.controller.cycle_repeat();
            }
            Control::ToggleShuffle => {
                self.controller.toggle_shuffle();
            }
            Control::SetVolume(volume) => self.controller.set_volume(volume),
            Control::Seek(position) => self.controller.seek(position),
            Control::Stop => self.controller.stop(),
        }
    }

    // ===== Clock =====

    pub fn tick_generation(&self) -> Option<TickGeneration> {
        self.controller.tick_generation()
    }

    pub fn tick_interval(&self) -> Duration {
        self.controller.tick_interval()
    }

    pub fn tick(&mut self, generation: TickGeneration) -> bool {
        self.controller.tick(generation)
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.controller.drain_events()
    }

    // ===== Queries =====

    pub fn navigator(&self) -> &MenuNavigator {
        &self.navigator
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn is_now_playing(&self) -> bool {
        self.now_playing
    }

    /// What the screen would show right now
    pub fn snapshot(&self) -> Snapshot {
        let state = self.controller.state();
        Snapshot {
            screen: if self.now_playing {
                Screen::NowPlaying
            } else {
                Screen::Menu
            },
            menu_title: self.navigator.title().to_string(),
            menu_items: self
                .navigator
                .items()
                .iter()
                .map(|item| item.title.clone())
                .collect(),
            selected: self.navigator.selected_index(),
            transport: self.controller.transport(),
            track: state.current_track().map(|t| format!("{} - {}", t.title, t.artist)),
            elapsed: state.elapsed(),
            duration: self.controller.current_duration().unwrap_or(0.0),
            queue_position: state.current_index(),
            queue_length: state.queue().len(),
            repeat: state.repeat(),
            shuffle: state.shuffle(),
            volume: state.volume(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("navigator", &self.navigator)
            .field("transport", &self.controller.transport())
            .field("now_playing", &self.now_playing)
            .finish_non_exhaustive()
    }
}

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    NowPlaying,
}

/// Point-in-time view of the session
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub screen: Screen,
    pub menu_title: String,
    pub menu_items: Vec<String>,
    pub selected: usize,
    pub transport: TransportState,
    pub track: Option<String>,
    pub elapsed: Seconds,
    pub duration: Seconds,
    pub queue_position: usize,
    pub queue_length: usize,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub volume: f32,
}

fn clock(seconds: Seconds) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.screen {
            Screen::Menu => {
                writeln!(f, "== {} ==", self.menu_title)?;
                for (index, title) in self.menu_items.iter().enumerate() {
                    let marker = if index == self.selected { '>' } else { ' ' };
                    writeln!(f, "{marker} {title}")?;
                }
            }
            Screen::NowPlaying => {
                writeln!(f, "== Now Playing ==")?;
                match &self.track {
                    Some(track) => writeln!(
                        f,
                        "{track} ({} of {})",
                        self.queue_position + 1,
                        self.queue_length
                    )?,
                    None => writeln!(f, "Nothing queued")?,
                }
                writeln!(f, "{} / {}", clock(self.elapsed), clock(self.duration))?;
            }
        }
        write!(
            f,
            "[{:?}] repeat {} | shuffle {} | volume {:.0}%",
            self.transport,
            self.repeat.label(),
            if self.shuffle { "on" } else { "off" },
            self.volume * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{TracingDisplay, TracingHaptics};
    use clickwheel_input::arc_samples;
    use clickwheel_menu::{LOADING_TITLE, ROOT_TITLE};

    struct Fixture {
        session: Session,
        haptics: Arc<TracingHaptics>,
        display: Arc<TracingDisplay>,
    }

    fn fixture() -> Fixture {
        let haptics = Arc::new(TracingHaptics::default());
        let display = Arc::new(TracingDisplay::default());
        let session = Session::new(
            &SimConfig::default(),
            Backends::silent(),
            haptics.clone(),
            display.clone(),
        )
        .unwrap();
        Fixture {
            session,
            haptics,
            display,
        }
    }

    fn press(session: &mut Session, button: WheelButton) -> Option<Effect> {
        session.handle_input(WheelInput::Button(button))
    }

    fn drag(session: &mut Session, degrees: f64) {
        let geometry = SimConfig::default().wheel;
        for (dx, dy) in arc_samples(&geometry, 0.0, degrees, 5.0) {
            session.handle_input(WheelInput::Touch { dx, dy });
        }
        session.handle_input(WheelInput::Release);
    }

    #[test]
    fn drag_moves_selection() {
        let mut f = fixture();
        drag(&mut f.session, 30.0);
        assert_eq!(f.session.navigator().selected_index(), 2);
        assert_eq!(f.haptics.ticks(), 2);
        assert_eq!(f.haptics.bumps(), 0);
    }

    #[test]
    fn bump_at_list_end() {
        let mut f = fixture();
        drag(&mut f.session, -15.0);
        assert_eq!(f.session.navigator().selected_index(), 0);
        assert_eq!(f.haptics.bumps(), 1);
    }

    #[test]
    fn library_row_requests_fetch() {
        let mut f = fixture();
        assert_eq!(press(&mut f.session, WheelButton::Center), None);
        drag(&mut f.session, 45.0);

        match press(&mut f.session, WheelButton::Center) {
            Some(Effect::Fetch(request)) => {
                assert_eq!(f.session.navigator().title(), "Songs");
                assert_eq!(f.session.navigator().items()[0].title, LOADING_TITLE);
                let _ = request;
            }
            other => panic!("expected a fetch, got {other:?}"),
        }
        assert_eq!(f.haptics.confirms(), 2);
    }

    #[test]
    fn mock_song_plays_and_shows_now_playing() {
        let mut f = fixture();
        press(&mut f.session, WheelButton::Center);
        drag(&mut f.session, 60.0); // Mock Songs
        press(&mut f.session, WheelButton::Center);
        press(&mut f.session, WheelButton::Center); // first song

        assert!(f.session.is_now_playing());
        assert_eq!(f.display.now_playing_shown(), 1);
        assert_eq!(f.session.controller().transport(), TransportState::Playing);

        // Wheel and center do nothing while now-playing is up
        drag(&mut f.session, 30.0);
        assert_eq!(press(&mut f.session, WheelButton::Center), None);
        assert_eq!(f.session.navigator().title(), "Mock Songs");

        // Menu leaves now-playing, then goes back
        press(&mut f.session, WheelButton::Menu);
        assert!(!f.session.is_now_playing());
        assert_eq!(f.session.navigator().title(), "Mock Songs");
        press(&mut f.session, WheelButton::Menu);
        assert_eq!(f.session.navigator().title(), "Music");
    }

    #[test]
    fn shuffle_songs_requests_all_tracks() {
        let mut f = fixture();
        drag(&mut f.session, 45.0);
        assert_eq!(
            press(&mut f.session, WheelButton::Center),
            Some(Effect::ShuffleAll)
        );

        f.session.complete_shuffle(Ok(clickwheel_menu::catalog_songs()));
        assert_eq!(f.session.controller().state().queue().len(), 5);
        assert!(f.session.controller().is_playing());
        assert!(f.session.is_now_playing());
    }

    #[test]
    fn shuffle_with_no_songs_bumps() {
        let mut f = fixture();
        f.session.complete_shuffle(Err(LibraryError::NotAuthorized));
        f.session.complete_shuffle(Ok(Vec::new()));
        assert_eq!(f.haptics.bumps(), 2);
        assert!(!f.session.controller().is_playing());
    }

    #[test]
    fn settings_reaches_display() {
        let mut f = fixture();
        drag(&mut f.session, 30.0);
        press(&mut f.session, WheelButton::Center);
        assert_eq!(f.display.settings_shown(), 1);
        assert_eq!(f.session.navigator().title(), ROOT_TITLE);
    }

    #[test]
    fn snapshot_renders_menu() {
        let f = fixture();
        let text = f.session.snapshot().to_string();
        assert!(text.starts_with("== iPod =="));
        assert!(text.contains("> Music"));
        assert!(text.contains("[Stopped]"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SimConfig::default();
        config.playback.tick_interval_ms = 0;
        let result = Session::new(
            &config,
            Backends::silent(),
            Arc::new(TracingHaptics::default()),
            Arc::new(TracingDisplay::default()),
        );
        assert!(result.is_err());
    }
}
