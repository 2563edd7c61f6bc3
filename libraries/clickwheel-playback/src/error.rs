//! Error types for playback management
//!
//! The controller never surfaces these to its caller. They describe why a
//! backend start was skipped or failed so the fallback path can log it.

use clickwheel_core::AudioError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No backend is wired for the track's locator
    #[error("No audio output for this source")]
    NoAudioSource,

    /// The audio backend refused to start
    #[error(transparent)]
    Audio(#[from] AudioError),

    /// Invalid configuration value
    #[error("Invalid playback configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
