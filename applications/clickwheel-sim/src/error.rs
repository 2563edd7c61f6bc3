/// Simulator error types
use clickwheel_input::GeometryError;
use clickwheel_playback::PlaybackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid wheel geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error("Invalid playback settings: {0}")]
    Playback(#[from] PlaybackError),

    #[error("Unknown command: {0}")]
    Command(String),

    #[error("Runtime stopped: {0}")]
    Runtime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for SimError {
    fn from(err: config::ConfigError) -> Self {
        SimError::Config(err.to_string())
    }
}
