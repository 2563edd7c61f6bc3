//! Built-in menu content
//!
//! The root menu and a small catalog used when no device library is
//! attached.

use crate::item::{CustomAction, MenuAction, MenuItem};
use clickwheel_core::{Playlist, Track};

/// Header of the root frame
pub const ROOT_TITLE: &str = "iPod";

/// Built-in catalog songs
pub fn catalog_songs() -> Vec<Track> {
    vec![
        Track::new("Hey Jude", "The Beatles", "The Beatles Again", 431.0),
        Track::new("Bohemian Rhapsody", "Queen", "A Night at the Opera", 354.0),
        Track::new("Hotel California", "Eagles", "Hotel California", 391.0),
        Track::new("Stairway to Heaven", "Led Zeppelin", "Led Zeppelin IV", 482.0),
        Track::new("Imagine", "John Lennon", "Imagine", 183.0),
    ]
}

/// Built-in catalog playlists
pub fn catalog_playlists() -> Vec<Playlist> {
    let songs = catalog_songs();
    vec![
        Playlist::new("Favorites", songs.clone()),
        Playlist::new("Recently Added", songs.iter().take(3).cloned().collect()),
        Playlist::new("Top 25 Most Played", songs),
    ]
}

/// Top-level menu
pub fn root_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::submenu("Music", music_menu()).with_icon("music"),
        MenuItem::new("Now Playing", MenuAction::ShowNowPlaying).with_icon("play"),
        MenuItem::new("Settings", MenuAction::ShowSettings).with_icon("gear"),
        MenuItem::new("Shuffle Songs", MenuAction::Custom(CustomAction::ShuffleSongs))
            .with_icon("shuffle"),
    ]
}

/// "Music" submenu
pub fn music_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Playlists", MenuAction::ListLibraryPlaylists).with_icon("playlist"),
        MenuItem::new("Artists", MenuAction::ListLibraryArtists).with_icon("person"),
        MenuItem::new("Albums", MenuAction::ListLibraryAlbums).with_icon("album"),
        MenuItem::new("Songs", MenuAction::ListLibrarySongs).with_icon("music"),
        MenuItem::submenu("Mock Songs", crate::library::track_items(&catalog_songs()))
            .with_icon("music"),
    ]
}
