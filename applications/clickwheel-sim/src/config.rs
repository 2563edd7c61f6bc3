/// Simulator configuration
use crate::error::{Result, SimError};
use clickwheel_input::WheelGeometry;
use clickwheel_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "clickwheel.toml";

/// Environment prefix, e.g. `CLICKWHEEL_PLAYBACK__VOLUME=0.5`
pub const ENV_PREFIX: &str = "CLICKWHEEL";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SimConfig {
    #[serde(default)]
    pub wheel: WheelGeometry,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LibrarySettings {
    #[serde(default)]
    pub source: LibrarySource,

    /// Artificial latency for every library query
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
}

/// Which built-in library backs the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibrarySource {
    /// The built-in five-song catalog
    #[default]
    Catalog,
    /// No songs, no playlists
    Empty,
    /// Access not granted
    Denied,
}

fn default_fetch_delay_ms() -> u64 {
    150
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            source: LibrarySource::default(),
            fetch_delay_ms: default_fetch_delay_ms(),
        }
    }
}

impl SimConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `clickwheel.toml` is used
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// Load with a custom environment source
    pub fn load_with_env(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(SimError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (CLICKWHEEL_SECTION__KEY)
        settings = settings.add_source(environment);

        let config: SimConfig = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Environment source with the simulator's prefix and separators
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.wheel.validate()?;
        self.playback.validate()?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SimError::Config(e.to_string()))
    }
}
