mod library_index;
mod playlist;
mod repeat;
mod track;

pub use library_index::LibraryIndex;
pub use playlist::Playlist;
pub use repeat::RepeatMode;
pub use track::{AudioLocator, Seconds, Track};
