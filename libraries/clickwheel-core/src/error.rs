//! Error types for collaborator calls
//!
//! None of these are fatal to the player. The playback and menu crates
//! recover from every variant locally and only log them.

use thiserror::Error;

/// Errors reported by an audio output backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The audio bytes could not be found or opened
    #[error("Audio source unavailable: {0}")]
    SourceUnavailable(String),

    /// The source exists but cannot be played (DRM, protected asset)
    #[error("Audio source is protected: {0}")]
    Protected(String),

    /// The backend itself failed (device lost, session not active)
    #[error("Audio backend error: {0}")]
    Backend(String),
}

impl AudioError {
    /// Create a source unavailable error
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::SourceUnavailable(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Errors reported by the media library collaborator
///
/// `NotAuthorized` and `Loading` are transient states that the menu shows
/// as placeholder content rather than failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// The user has not granted access to the media library
    #[error("Media library access not authorized")]
    NotAuthorized,

    /// The library is still being indexed
    #[error("Media library is still loading")]
    Loading,

    /// The library could not be queried
    #[error("Media library unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_error_messages() {
        let err = AudioError::unavailable("missing.mp3");
        assert_eq!(err.to_string(), "Audio source unavailable: missing.mp3");

        let err = AudioError::backend("no session");
        assert_eq!(err.to_string(), "Audio backend error: no session");
    }

    #[test]
    fn library_error_messages() {
        assert_eq!(
            LibraryError::NotAuthorized.to_string(),
            "Media library access not authorized"
        );
        assert_eq!(
            LibraryError::Unavailable("query failed".to_string()).to_string(),
            "Media library unavailable: query failed"
        );
    }
}
