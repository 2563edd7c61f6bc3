//! Collaborator traits for the click wheel player
//!
//! The player core never touches audio hardware, the media library, the
//! haptic engine, or the screen directly. Whoever composes the player hands
//! in implementations of these traits.
use crate::error::{AudioError, LibraryError};
use crate::types::{AudioLocator, LibraryIndex, Playlist, Seconds, Track};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Whether a backend honours volume changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeSupport {
    /// Volume was applied by the backend
    Supported,

    /// Backend follows the system volume; the request is a no-op downstream
    Unsupported,
}

/// Audio output backend
///
/// Implementors produce sound for one track at a time. Position and duration
/// reports are optional; a backend that cannot report them leaves the
/// controller on its simulated clock.
pub trait AudioOutput: Send {
    /// Begin producing audio for `locator` from `start_position` seconds
    ///
    /// # Errors
    /// Returns an error if the source is missing, protected, or the backend
    /// cannot start. The controller recovers by simulating playback.
    fn start(
        &mut self,
        locator: &AudioLocator,
        start_position: Seconds,
        volume: f32,
    ) -> Result<(), AudioError>;

    /// Pause output, keeping the position
    fn pause(&mut self);

    /// Resume output after `pause`
    fn resume(&mut self);

    /// Reposition the output
    fn seek(&mut self, position: Seconds);

    /// Apply a volume in `[0.0, 1.0]`
    fn set_volume(&mut self, volume: f32) -> VolumeSupport;

    /// Position reported by the backend, if it knows it
    fn reported_position(&self) -> Option<Seconds>;

    /// Duration reported by the backend, if it knows it
    fn reported_duration(&self) -> Option<Seconds>;

    /// Short name used in log lines
    fn name(&self) -> &'static str {
        "audio-output"
    }
}

/// Readiness of the media library
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryStatus {
    /// Queries can be answered
    #[default]
    Ready,

    /// Still indexing; try again later
    Loading,

    /// The user has not granted access
    NotAuthorized,
}

impl LibraryStatus {
    /// `Ok` when ready, otherwise the matching transient error
    pub fn check(self) -> Result<(), LibraryError> {
        match self {
            LibraryStatus::Ready => Ok(()),
            LibraryStatus::Loading => Err(LibraryError::Loading),
            LibraryStatus::NotAuthorized => Err(LibraryError::NotAuthorized),
        }
    }
}

/// Device media library
///
/// Queries may be slow; callers run them off the owner task and marshal the
/// result back.
#[async_trait]
pub trait LibraryProvider: Send + Sync {
    /// Whether the library can be queried right now
    fn status(&self) -> LibraryStatus {
        LibraryStatus::Ready
    }

    /// Every song in the library
    ///
    /// # Errors
    /// `NotAuthorized` and `Loading` are transient and shown as placeholders.
    async fn fetch_all_tracks(&self) -> Result<Vec<Track>, LibraryError>;

    /// Every named playlist
    async fn fetch_playlists(&self) -> Result<Vec<Playlist>, LibraryError>;

    /// Artist/album index over the whole library
    async fn fetch_index(&self) -> Result<LibraryIndex, LibraryError> {
        Ok(LibraryIndex::new(self.fetch_all_tracks().await?))
    }

    /// Songs by one artist, in library order
    async fn fetch_tracks_for_artist(&self, artist: &str) -> Result<Vec<Track>, LibraryError> {
        let index = self.fetch_index().await?;
        Ok(index.tracks_for_artist(artist).to_vec())
    }

    /// Songs on one album, in library order
    async fn fetch_tracks_for_album(&self, album: &str) -> Result<Vec<Track>, LibraryError> {
        let index = self.fetch_index().await?;
        Ok(index.tracks_for_album(album).to_vec())
    }
}

/// Haptic engine
///
/// Fire-and-forget. Implementations must return immediately.
pub trait HapticFeedback: Send + Sync {
    /// One wheel detent
    fn tick(&self);

    /// Center button press
    fn confirm(&self);

    /// Wheel pushed past the end of a list
    fn bump(&self);
}

/// Screen-level requests emitted by the core
pub trait DisplaySink: Send + Sync {
    /// Present the now-playing screen
    fn show_now_playing(&self);

    /// Return from the now-playing screen to the menu
    fn dismiss_now_playing(&self);

    /// Present the settings screen
    fn show_settings(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLibrary(Vec<Track>);

    #[async_trait]
    impl LibraryProvider for FixedLibrary {
        async fn fetch_all_tracks(&self) -> Result<Vec<Track>, LibraryError> {
            Ok(self.0.clone())
        }

        async fn fetch_playlists(&self) -> Result<Vec<Playlist>, LibraryError> {
            Ok(Vec::new())
        }
    }

    struct LockedLibrary;

    #[async_trait]
    impl LibraryProvider for LockedLibrary {
        async fn fetch_all_tracks(&self) -> Result<Vec<Track>, LibraryError> {
            Err(LibraryError::NotAuthorized)
        }

        async fn fetch_playlists(&self) -> Result<Vec<Playlist>, LibraryError> {
            Err(LibraryError::NotAuthorized)
        }
    }

    #[tokio::test]
    async fn default_artist_lookup_uses_index() {
        let library = FixedLibrary(vec![
            Track::new("Imagine", "John Lennon", "Imagine", 183.0),
            Track::new("Jealous Guy", "John Lennon", "Imagine", 254.0),
            Track::new("Hey Jude", "The Beatles", "The Beatles Again", 431.0),
        ]);

        let tracks = library.fetch_tracks_for_artist("John Lennon").await.unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[1].title, "Jealous Guy");

        let tracks = library.fetch_tracks_for_album("The Beatles Again").await.unwrap();
        assert_eq!(tracks.len(), 1);
    }

    #[test]
    fn status_maps_to_errors() {
        assert_eq!(FixedLibrary(Vec::new()).status(), LibraryStatus::Ready);
        assert!(LibraryStatus::Ready.check().is_ok());
        assert_eq!(LibraryStatus::Loading.check(), Err(LibraryError::Loading));
        assert_eq!(
            LibraryStatus::NotAuthorized.check(),
            Err(LibraryError::NotAuthorized)
        );
    }

    #[tokio::test]
    async fn default_lookups_propagate_errors() {
        let err = LockedLibrary.fetch_tracks_for_album("Any").await.unwrap_err();
        assert_eq!(err, LibraryError::NotAuthorized);
    }
}
