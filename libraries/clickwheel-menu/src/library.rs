//! Library listings
//!
//! Library-backed menu entries are filled asynchronously. The navigator
//! pushes a "Loading…" frame and hands back a [`LibraryRequest`]; the owner
//! runs [`fetch_listing`] off its task and returns the result through
//! `MenuNavigator::complete_fetch`.

use crate::item::{CustomAction, MenuAction, MenuItem};
use crate::stack::FrameId;
use clickwheel_core::{LibraryError, LibraryProvider, Playlist, Track};
use tracing::{debug, warn};

/// Shown while a listing is in flight or the library is still indexing
pub const LOADING_TITLE: &str = "Loading…";

/// Shown when the user has not granted library access
pub const ACCESS_DENIED_TITLE: &str = "Library access denied";

/// Shown when the library failed to answer
pub const UNAVAILABLE_TITLE: &str = "Library unavailable";

/// Which listing a library-backed entry wants
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    /// Every song
    Songs,
    /// Artist names
    Artists,
    /// Album names
    Albums,
    /// Named playlists
    Playlists,
    /// Songs by one artist
    SongsForArtist(String),
    /// Songs on one album
    SongsForAlbum(String),
}

impl LibraryKind {
    /// Listing requested by a menu action, if it is library-backed
    pub fn from_action(action: &MenuAction) -> Option<Self> {
        match action {
            MenuAction::ListLibrarySongs => Some(LibraryKind::Songs),
            MenuAction::ListLibraryArtists => Some(LibraryKind::Artists),
            MenuAction::ListLibraryAlbums => Some(LibraryKind::Albums),
            MenuAction::ListLibraryPlaylists => Some(LibraryKind::Playlists),
            MenuAction::ShowSongsForArtist(artist) => {
                Some(LibraryKind::SongsForArtist(artist.clone()))
            }
            MenuAction::ShowSongsForAlbum(album) => Some(LibraryKind::SongsForAlbum(album.clone())),
            _ => None,
        }
    }

    /// Title of the frame that shows this listing
    pub fn title(&self) -> &str {
        match self {
            LibraryKind::Songs => "Songs",
            LibraryKind::Artists => "Artists",
            LibraryKind::Albums => "Albums",
            LibraryKind::Playlists => "Playlists",
            LibraryKind::SongsForArtist(name) | LibraryKind::SongsForAlbum(name) => name,
        }
    }

    /// Row shown when the listing comes back empty
    pub fn empty_title(&self) -> &'static str {
        match self {
            LibraryKind::Songs | LibraryKind::SongsForArtist(_) | LibraryKind::SongsForAlbum(_) => {
                "No songs found"
            }
            LibraryKind::Artists => "No artists found",
            LibraryKind::Albums => "No albums found",
            LibraryKind::Playlists => "No playlists found",
        }
    }
}

/// A pending listing, tied to the frame it will fill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryRequest {
    /// Frame that shows the listing
    pub frame: FrameId,
    /// What to list
    pub kind: LibraryKind,
}

/// Query the library and build menu rows for `kind`
///
/// Empty listings come back as an empty vector; the navigator decides the
/// placeholder.
pub async fn fetch_listing(
    library: &dyn LibraryProvider,
    kind: &LibraryKind,
) -> Result<Vec<MenuItem>, LibraryError> {
    library.status().check()?;

    let items = match kind {
        LibraryKind::Songs => track_items(&library.fetch_all_tracks().await?),
        LibraryKind::Artists => {
            let index = library.fetch_index().await?;
            index
                .artists()
                .map(|artist| {
                    MenuItem::new(artist, MenuAction::ShowSongsForArtist(artist.to_string()))
                        .with_icon("person")
                })
                .collect()
        }
        LibraryKind::Albums => {
            let index = library.fetch_index().await?;
            index
                .albums()
                .map(|album| {
                    MenuItem::new(album, MenuAction::ShowSongsForAlbum(album.to_string()))
                        .with_icon("album")
                })
                .collect()
        }
        LibraryKind::Playlists => playlist_items(library.fetch_playlists().await?),
        LibraryKind::SongsForArtist(artist) => {
            track_items(&library.fetch_tracks_for_artist(artist).await?)
        }
        LibraryKind::SongsForAlbum(album) => {
            track_items(&library.fetch_tracks_for_album(album).await?)
        }
    };

    debug!(?kind, count = items.len(), "Library listing fetched");
    Ok(items)
}

/// One `PlayTrack` row per track
pub fn track_items(tracks: &[Track]) -> Vec<MenuItem> {
    tracks
        .iter()
        .map(|track| MenuItem::new(track.title.clone(), MenuAction::PlayTrack(track.clone())))
        .collect()
}

/// One `PlayQueue` row per playlist
pub fn playlist_items(playlists: Vec<Playlist>) -> Vec<MenuItem> {
    playlists
        .into_iter()
        .map(|playlist| {
            MenuItem::new(playlist.name.clone(), MenuAction::PlayQueue(playlist))
                .with_icon("playlist")
        })
        .collect()
}

/// Rows to show for a finished fetch
///
/// `None` means leave the loading placeholder in place.
pub(crate) fn resolve_listing(
    kind: &LibraryKind,
    result: Result<Vec<MenuItem>, LibraryError>,
) -> Option<Vec<MenuItem>> {
    match result {
        Ok(items) if items.is_empty() => Some(vec![MenuItem::placeholder(kind.empty_title())]),
        Ok(items) => Some(items),
        Err(LibraryError::Loading) => {
            debug!(?kind, "Library still loading");
            None
        }
        Err(LibraryError::NotAuthorized) => {
            warn!(?kind, "Library access not authorized");
            Some(vec![MenuItem::placeholder(ACCESS_DENIED_TITLE)])
        }
        Err(err @ LibraryError::Unavailable(_)) => {
            warn!(?kind, error = %err, "Library listing failed");
            Some(vec![MenuItem::placeholder(UNAVAILABLE_TITLE)])
        }
    }
}

/// The in-flight row
pub(crate) fn loading_items() -> Vec<MenuItem> {
    vec![MenuItem::new(LOADING_TITLE, MenuAction::Custom(CustomAction::Noop)).with_icon("hourglass")]
}
