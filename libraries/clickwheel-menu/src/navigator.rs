//! Menu navigator
//!
//! Owns the navigation stack and the selection cursor. Wheel steps move the
//! cursor, the center button commits the selected row, the menu button goes
//! back. Anything that reaches outside the menu (playback, screens, library
//! queries) comes back to the caller as a [`MenuCommand`].

use crate::content::{root_menu, ROOT_TITLE};
use crate::item::{CustomAction, MenuAction, MenuItem};
use crate::library::{loading_items, resolve_listing, LibraryKind, LibraryRequest};
use crate::stack::{NavigationFrame, NavigationStack};
use clickwheel_core::{LibraryError, Playlist, Track};
use clickwheel_input::WheelStep;
use tracing::debug;

/// Work the navigator hands back to its owner
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    /// Play one track
    PlayTrack(Track),

    /// Play a playlist
    PlayQueue(Playlist),

    /// Show the now-playing screen
    ShowNowPlaying,

    /// Show the settings screen
    ShowSettings,

    /// Run a custom trigger
    Custom(CustomAction),

    /// Fetch a library listing and return it via `complete_fetch`
    FetchLibrary(LibraryRequest),
}

/// Menu navigator
#[derive(Debug, Clone)]
pub struct MenuNavigator {
    stack: NavigationStack,
    selected: usize,
}

impl MenuNavigator {
    /// Navigator over a custom root menu
    pub fn new(root_title: impl Into<String>, root_items: Vec<MenuItem>) -> Self {
        Self {
            stack: NavigationStack::new(root_title, root_items),
            selected: 0,
        }
    }

    /// Move the selection one row
    ///
    /// Clamped to the list, no wraparound. Returns `false` when the cursor
    /// was already at the end it was pushed toward.
    pub fn step(&mut self, step: WheelStep) -> bool {
        let count = self.items().len();
        let moved = match step {
            WheelStep::Forward if self.selected + 1 < count => {
                self.selected += 1;
                true
            }
            WheelStep::Backward if self.selected > 0 => {
                self.selected -= 1;
                true
            }
            _ => false,
        };

        if moved {
            debug!(selected = self.selected, "Selection moved");
        }
        moved
    }

    /// Jump the selection, clamped to the list
    pub fn select(&mut self, index: usize) {
        self.selected = index;
        self.clamp_selection();
    }

    /// Apply the selected row's action
    ///
    /// Submenus are pushed here. Library-backed rows push a loading frame and
    /// return the fetch to run. An empty menu commits nothing.
    pub fn commit(&mut self) -> Option<MenuCommand> {
        let item = self.selected_item()?.clone();
        debug!(title = %item.title, "Commit");

        if let Some(kind) = LibraryKind::from_action(&item.action) {
            let frame = self.stack.push(kind.title().to_string(), loading_items());
            self.selected = 0;
            return Some(MenuCommand::FetchLibrary(LibraryRequest { frame, kind }));
        }

        match item.action {
            MenuAction::Navigate(children) => {
                self.stack.push(item.title, children);
                self.selected = 0;
                None
            }
            MenuAction::PlayTrack(track) => Some(MenuCommand::PlayTrack(track)),
            MenuAction::PlayQueue(playlist) => Some(MenuCommand::PlayQueue(playlist)),
            MenuAction::ShowNowPlaying => Some(MenuCommand::ShowNowPlaying),
            MenuAction::ShowSettings => Some(MenuCommand::ShowSettings),
            MenuAction::Custom(action) => Some(MenuCommand::Custom(action)),
            // Library-backed actions were handled above
            MenuAction::ListLibrarySongs
            | MenuAction::ListLibraryArtists
            | MenuAction::ListLibraryAlbums
            | MenuAction::ListLibraryPlaylists
            | MenuAction::ShowSongsForArtist(_)
            | MenuAction::ShowSongsForAlbum(_) => None,
        }
    }

    /// Pop one level; the root stays
    ///
    /// Returns whether a frame was popped.
    pub fn back(&mut self) -> bool {
        if self.stack.pop().is_some() {
            self.selected = 0;
            true
        } else {
            false
        }
    }

    /// Fill a library frame with a finished listing
    ///
    /// Results for frames no longer on the stack are dropped. A library that
    /// is still loading leaves the loading row in place. Returns whether the
    /// frame changed.
    pub fn complete_fetch(
        &mut self,
        request: &LibraryRequest,
        result: Result<Vec<MenuItem>, LibraryError>,
    ) -> bool {
        if !self.stack.contains(request.frame) {
            debug!(frame = ?request.frame, "Discarding listing for a popped frame");
            return false;
        }

        let Some(items) = resolve_listing(&request.kind, result) else {
            return false;
        };

        if let Some(frame) = self.stack.frame_mut(request.frame) {
            frame.replace_items(items);
        }
        if self.stack.top().id() == request.frame {
            self.clamp_selection();
        }
        true
    }

    // ===== Queries =====

    /// Frame on screen
    pub fn current_frame(&self) -> &NavigationFrame {
        self.stack.top()
    }

    /// Header of the frame on screen
    pub fn title(&self) -> &str {
        self.stack.top().title()
    }

    /// Rows on screen
    pub fn items(&self) -> &[MenuItem] {
        self.stack.top().items()
    }

    /// Cursor position
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Row under the cursor
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.items().get(self.selected)
    }

    /// Stack depth, root included
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Whether the root frame is showing
    pub fn at_root(&self) -> bool {
        self.stack.depth() == 1
    }

    fn clamp_selection(&mut self) {
        let count = self.items().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

impl Default for MenuNavigator {
    fn default() -> Self {
        Self::new(ROOT_TITLE, root_menu())
    }
}
