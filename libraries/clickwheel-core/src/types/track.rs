/// Track domain type
use serde::{Deserialize, Serialize};

/// Time in seconds
///
/// The player runs on a coarse polling clock, so plain `f64` seconds are
/// precise enough and keep the tick arithmetic readable.
pub type Seconds = f64;

/// Where the audio bytes of a track live
///
/// Determines which audio backend can play the track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioLocator {
    /// Item owned by the device media library (played by the library backend)
    LibraryItem(u64),

    /// Local or asset URI (played by the local file backend)
    Uri(String),
}

/// Audio track
///
/// Immutable once built. Two tracks with identical fields are the same track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track duration in seconds (never negative)
    pub duration: Seconds,

    /// Locator for the audio bytes
    pub locator: Option<String>,

    /// Identifier in the external media library
    pub library_id: Option<u64>,
}

impl Track {
    /// Create a track with no audio attached (plays on the simulated clock)
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: Seconds,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration: duration.max(0.0),
            locator: None,
            library_id: None,
        }
    }

    /// Attach a locator for the audio bytes
    #[must_use]
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Attach an external library identifier
    #[must_use]
    pub fn with_library_id(mut self, library_id: u64) -> Self {
        self.library_id = Some(library_id);
        self
    }

    /// Resolve which audio backend should play this track
    ///
    /// A library identifier wins over a locator; `None` means the track can
    /// only be simulated.
    pub fn audio_locator(&self) -> Option<AudioLocator> {
        if let Some(id) = self.library_id {
            return Some(AudioLocator::LibraryItem(id));
        }
        self.locator.clone().map(AudioLocator::Uri)
    }

    /// Duration formatted as `m:ss`
    pub fn formatted_duration(&self) -> String {
        let total = self.duration as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_duration_is_clamped() {
        let track = Track::new("Silence", "Nobody", "Nothing", -4.0);
        assert_eq!(track.duration, 0.0);
    }

    #[test]
    fn formatted_duration() {
        let track = Track::new("Hey Jude", "The Beatles", "The Beatles Again", 431.0);
        assert_eq!(track.formatted_duration(), "7:11");

        let track = Track::new("Short", "A", "B", 59.9);
        assert_eq!(track.formatted_duration(), "0:59");
    }

    #[test]
    fn library_id_wins_over_locator() {
        let track = Track::new("Song", "Artist", "Album", 100.0)
            .with_locator("file:///song.m4a")
            .with_library_id(42);
        assert_eq!(track.audio_locator(), Some(AudioLocator::LibraryItem(42)));
    }

    #[test]
    fn locator_only_track_uses_uri() {
        let track = Track::new("Song", "Artist", "Album", 100.0).with_locator("file:///song.m4a");
        assert_eq!(
            track.audio_locator(),
            Some(AudioLocator::Uri("file:///song.m4a".to_string()))
        );
    }

    #[test]
    fn bare_track_has_no_audio() {
        let track = Track::new("Song", "Artist", "Album", 100.0);
        assert_eq!(track.audio_locator(), None);
    }
}
