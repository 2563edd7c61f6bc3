//! Audio backend dispatch
//!
//! Two backends sit behind the controller: one for local/asset URIs and one
//! for items owned by the device media library. The track's locator decides
//! which one plays it. Tracks with no locator, or whose backend refuses to
//! start, run on the simulated clock.

use clickwheel_core::{AudioError, AudioLocator, AudioOutput, Seconds, VolumeSupport};

/// Which output is producing the current track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRoute {
    /// Local file backend
    Local,

    /// Media library backend
    Library,

    /// No audio; elapsed time advances by the tick interval
    Simulated,
}

impl OutputRoute {
    /// Route for a locator
    pub fn for_locator(locator: &AudioLocator) -> Self {
        match locator {
            AudioLocator::LibraryItem(_) => OutputRoute::Library,
            AudioLocator::Uri(_) => OutputRoute::Local,
        }
    }
}

/// The pair of audio backends owned by the controller
pub struct Backends {
    local: Box<dyn AudioOutput>,
    library: Box<dyn AudioOutput>,
}

impl Backends {
    /// Combine a local file backend and a media library backend
    pub fn new(local: Box<dyn AudioOutput>, library: Box<dyn AudioOutput>) -> Self {
        Self { local, library }
    }

    /// No audio hardware; every track is simulated
    pub fn silent() -> Self {
        Self::new(Box::new(NullOutput), Box::new(NullOutput))
    }

    /// Backend behind a route, `None` for the simulated clock
    pub fn output_mut(&mut self, route: OutputRoute) -> Option<&mut dyn AudioOutput> {
        match route {
            OutputRoute::Local => Some(self.local.as_mut()),
            OutputRoute::Library => Some(self.library.as_mut()),
            OutputRoute::Simulated => None,
        }
    }

    /// Read-only view of the backend behind a route
    pub fn output(&self, route: OutputRoute) -> Option<&dyn AudioOutput> {
        match route {
            OutputRoute::Local => Some(self.local.as_ref()),
            OutputRoute::Library => Some(self.library.as_ref()),
            OutputRoute::Simulated => None,
        }
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for Backends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends")
            .field("local", &self.local.name())
            .field("library", &self.library.name())
            .finish()
    }
}

/// Backend with no device behind it
///
/// Refuses every start, so the controller always falls back to simulation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOutput;

impl AudioOutput for NullOutput {
    fn start(
        &mut self,
        locator: &AudioLocator,
        _start_position: Seconds,
        _volume: f32,
    ) -> Result<(), AudioError> {
        Err(AudioError::unavailable(format!(
            "no audio device for {locator:?}"
        )))
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn seek(&mut self, _position: Seconds) {}

    fn set_volume(&mut self, _volume: f32) -> VolumeSupport {
        VolumeSupport::Unsupported
    }

    fn reported_position(&self) -> Option<Seconds> {
        None
    }

    fn reported_duration(&self) -> Option<Seconds> {
        None
    }

    fn name(&self) -> &'static str {
        "null"
    }
}
