//! Click Wheel Player - Menu Navigation
//!
//! Hierarchical menus driven by wheel steps and buttons, with asynchronous
//! library-backed listings.
//!
//! # Example
//!
//! ```rust
//! use clickwheel_input::WheelStep;
//! use clickwheel_menu::{MenuCommand, MenuNavigator};
//!
//! let mut nav = MenuNavigator::default();
//! nav.commit(); // Music
//! nav.step(WheelStep::Forward); // Artists
//!
//! match nav.commit() {
//!     Some(MenuCommand::FetchLibrary(request)) => {
//!         assert_eq!(nav.title(), "Artists");
//!         assert_eq!(nav.items()[0].title, "Loading…");
//!         # let _ = request;
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![forbid(unsafe_code)]

mod content;
mod item;
mod library;
mod navigator;
mod stack;

pub use content::{catalog_playlists, catalog_songs, music_menu, root_menu, ROOT_TITLE};
pub use item::{CustomAction, MenuAction, MenuItem};
pub use library::{
    fetch_listing, playlist_items, track_items, LibraryKind, LibraryRequest, ACCESS_DENIED_TITLE,
    LOADING_TITLE, UNAVAILABLE_TITLE,
};
pub use navigator::{MenuCommand, MenuNavigator};
pub use stack::{FrameId, NavigationFrame, NavigationStack};
