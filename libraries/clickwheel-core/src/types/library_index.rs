/// Artist/album index over a flat track list
use crate::types::Track;
use std::collections::BTreeMap;

/// Tracks grouped by artist and by album
///
/// Keys are kept sorted so menu listings come out in alphabetical order.
/// Track order inside each group follows the order of the source list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryIndex {
    tracks: Vec<Track>,
    by_artist: BTreeMap<String, Vec<Track>>,
    by_album: BTreeMap<String, Vec<Track>>,
}

impl LibraryIndex {
    /// Build the index from a flat track list
    pub fn new(tracks: Vec<Track>) -> Self {
        let mut by_artist: BTreeMap<String, Vec<Track>> = BTreeMap::new();
        let mut by_album: BTreeMap<String, Vec<Track>> = BTreeMap::new();

        for track in &tracks {
            by_artist
                .entry(track.artist.clone())
                .or_default()
                .push(track.clone());
            by_album
                .entry(track.album.clone())
                .or_default()
                .push(track.clone());
        }

        Self {
            tracks,
            by_artist,
            by_album,
        }
    }

    /// All tracks in source order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Artist names, sorted
    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.by_artist.keys().map(String::as_str)
    }

    /// Album names, sorted
    pub fn albums(&self) -> impl Iterator<Item = &str> {
        self.by_album.keys().map(String::as_str)
    }

    /// Tracks by one artist (empty if unknown)
    pub fn tracks_for_artist(&self, artist: &str) -> &[Track] {
        self.by_artist.get(artist).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tracks on one album (empty if unknown)
    pub fn tracks_for_album(&self, album: &str) -> &[Track] {
        self.by_album.get(album).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Case-insensitive search over title, artist and album
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Track> {
        if query.is_empty() {
            return self.tracks.iter().collect();
        }

        let query = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.artist.to_lowercase().contains(&query)
                    || t.album.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> LibraryIndex {
        LibraryIndex::new(vec![
            Track::new("Hotel California", "Eagles", "Hotel California", 391.0),
            Track::new("Imagine", "John Lennon", "Imagine", 183.0),
            Track::new("New Kid in Town", "Eagles", "Hotel California", 304.0),
        ])
    }

    #[test]
    fn artists_are_sorted_and_unique() {
        let index = library();
        let artists: Vec<&str> = index.artists().collect();
        assert_eq!(artists, vec!["Eagles", "John Lennon"]);
    }

    #[test]
    fn groups_keep_source_order() {
        let index = library();
        let titles: Vec<&str> = index
            .tracks_for_album("Hotel California")
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Hotel California", "New Kid in Town"]);
    }

    #[test]
    fn unknown_artist_is_empty() {
        assert!(library().tracks_for_artist("Queen").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let index = library();
        let hits = index.search("eAgLeS");
        assert_eq!(hits.len(), 2);

        let hits = index.search("imag");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Imagine");
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(library().search("").len(), 3);
    }
}
