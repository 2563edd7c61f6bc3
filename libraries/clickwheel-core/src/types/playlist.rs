/// Playlist domain type
use crate::types::{Seconds, Track};
use serde::{Deserialize, Serialize};

/// Named, ordered list of tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Tracks in play order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// Total running time in seconds
    pub fn duration(&self) -> Seconds {
        self.tracks.iter().map(|t| t.duration).sum()
    }

    /// Running time as `"H hr M min"` or `"M minutes"`
    pub fn formatted_duration(&self) -> String {
        let total = self.duration() as u64;
        let hours = total / 3600;
        let minutes = total % 3600 / 60;

        if hours > 0 {
            format!("{} hr {} min", hours, minutes)
        } else {
            format!("{} minutes", minutes)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
