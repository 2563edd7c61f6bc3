//! Reference collaborators
//!
//! Stand-ins for the device library, the haptic engine, and the screen. They
//! log through `tracing` and keep counters so tests can observe them.

use crate::config::{LibrarySettings, LibrarySource};
use async_trait::async_trait;
use clickwheel_core::{
    DisplaySink, HapticFeedback, LibraryError, LibraryProvider, LibraryStatus, Playlist, Track,
};
use clickwheel_menu::{catalog_playlists, catalog_songs};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// In-memory library with optional latency
#[derive(Debug, Clone)]
pub struct StaticLibrary {
    tracks: Vec<Track>,
    playlists: Vec<Playlist>,
    status: LibraryStatus,
    delay: Duration,
}

impl StaticLibrary {
    pub fn new(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self {
            tracks,
            playlists,
            status: LibraryStatus::Ready,
            delay: Duration::ZERO,
        }
    }

    /// The five-song catalog with its three playlists
    pub fn catalog() -> Self {
        Self::new(catalog_songs(), catalog_playlists())
    }

    /// Build from configuration
    pub fn from_settings(settings: &LibrarySettings) -> Self {
        let library = match settings.source {
            LibrarySource::Catalog => Self::catalog(),
            LibrarySource::Empty => Self::new(Vec::new(), Vec::new()),
            LibrarySource::Denied => Self::catalog().with_status(LibraryStatus::NotAuthorized),
        };
        library.with_delay(Duration::from_millis(settings.fetch_delay_ms))
    }

    #[must_use]
    pub fn with_status(mut self, status: LibraryStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl LibraryProvider for StaticLibrary {
    fn status(&self) -> LibraryStatus {
        self.status
    }

    async fn fetch_all_tracks(&self) -> Result<Vec<Track>, LibraryError> {
        self.latency().await;
        self.status.check()?;
        debug!(count = self.tracks.len(), "Serving tracks");
        Ok(self.tracks.clone())
    }

    async fn fetch_playlists(&self) -> Result<Vec<Playlist>, LibraryError> {
        self.latency().await;
        self.status.check()?;
        Ok(self.playlists.clone())
    }
}

/// Haptics that only log
#[derive(Debug, Default)]
pub struct TracingHaptics {
    ticks: AtomicUsize,
    confirms: AtomicUsize,
    bumps: AtomicUsize,
}

impl TracingHaptics {
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }

    pub fn confirms(&self) -> usize {
        self.confirms.load(Ordering::Relaxed)
    }

    pub fn bumps(&self) -> usize {
        self.bumps.load(Ordering::Relaxed)
    }
}

impl HapticFeedback for TracingHaptics {
    fn tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("haptic: tick");
    }

    fn confirm(&self) {
        self.confirms.fetch_add(1, Ordering::Relaxed);
        tracing::trace!("haptic: confirm");
    }

    fn bump(&self) {
        self.bumps.fetch_add(1, Ordering::Relaxed);
        debug!("haptic: bump");
    }
}

/// Display that logs screen changes
#[derive(Debug, Default)]
pub struct TracingDisplay {
    now_playing_shown: AtomicUsize,
    settings_shown: AtomicUsize,
}

impl TracingDisplay {
    pub fn now_playing_shown(&self) -> usize {
        self.now_playing_shown.load(Ordering::Relaxed)
    }

    pub fn settings_shown(&self) -> usize {
        self.settings_shown.load(Ordering::Relaxed)
    }
}

impl DisplaySink for TracingDisplay {
    fn show_now_playing(&self) {
        self.now_playing_shown.fetch_add(1, Ordering::Relaxed);
        info!("Screen: now playing");
    }

    fn dismiss_now_playing(&self) {
        info!("Screen: menu");
    }

    fn show_settings(&self) {
        self.settings_shown.fetch_add(1, Ordering::Relaxed);
        info!("Screen: settings");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn denied_library_reports_status() {
        let library = StaticLibrary::from_settings(&LibrarySettings {
            source: LibrarySource::Denied,
            fetch_delay_ms: 0,
        });
        assert_eq!(library.status(), LibraryStatus::NotAuthorized);
        assert_eq!(
            library.fetch_all_tracks().await,
            Err(LibraryError::NotAuthorized)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn catalog_serves_after_delay() {
        let library = StaticLibrary::catalog().with_delay(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        let tracks = library.fetch_all_tracks().await.unwrap();

        assert_eq!(tracks.len(), 5);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn haptics_count() {
        let haptics = TracingHaptics::default();
        haptics.tick();
        haptics.tick();
        haptics.bump();
        assert_eq!(haptics.ticks(), 2);
        assert_eq!(haptics.bumps(), 1);
        assert_eq!(haptics.confirms(), 0);
    }
}
