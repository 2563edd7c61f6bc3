/// Menu item domain type
use clickwheel_core::{Playlist, Track};

/// Named triggers for custom menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomAction {
    /// Does nothing (placeholders, disabled rows)
    Noop,

    /// Load every library song in random order and start playing
    ShuffleSongs,
}

/// What happens when a menu item is committed
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Open a submenu
    Navigate(Vec<MenuItem>),

    /// Play one track
    PlayTrack(Track),

    /// Play a playlist from its first track
    PlayQueue(Playlist),

    /// Show the now-playing screen
    ShowNowPlaying,

    /// Show the settings screen
    ShowSettings,

    /// Custom trigger handled by the owner
    Custom(CustomAction),

    /// List every library song
    ListLibrarySongs,

    /// List library artists
    ListLibraryArtists,

    /// List library albums
    ListLibraryAlbums,

    /// List library playlists
    ListLibraryPlaylists,

    /// List one artist's songs
    ShowSongsForArtist(String),

    /// List one album's songs
    ShowSongsForAlbum(String),
}

/// One row of a menu
///
/// A submenu only ever lives inside a `Navigate` action, so an item with
/// children always navigates to exactly those children.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Row label
    pub title: String,

    /// Icon tag for the renderer
    pub icon: Option<String>,

    /// Commit behaviour
    pub action: MenuAction,
}

impl MenuItem {
    /// Create an item without an icon
    pub fn new(title: impl Into<String>, action: MenuAction) -> Self {
        Self {
            title: title.into(),
            icon: None,
            action,
        }
    }

    /// Create an item that opens `children`
    pub fn submenu(title: impl Into<String>, children: Vec<MenuItem>) -> Self {
        Self::new(title, MenuAction::Navigate(children))
    }

    /// Inert informational row ("No songs found", "Loading…")
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::new(title, MenuAction::Custom(CustomAction::Noop)).with_icon("alert")
    }

    /// Attach an icon tag
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Children, when this item opens a submenu
    pub fn children(&self) -> Option<&[MenuItem]> {
        match &self.action {
            MenuAction::Navigate(children) => Some(children),
            _ => None,
        }
    }

    /// Whether committing this item does nothing
    pub fn is_placeholder(&self) -> bool {
        self.action == MenuAction::Custom(CustomAction::Noop)
    }
}
