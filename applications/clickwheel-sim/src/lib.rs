//! Click Wheel Player - Simulator
//!
//! Composes the input decoder, menu navigator, and playback controller into
//! a session and drives it from a `tokio` task. Used by the
//! `clickwheel-sim` binary and by the runtime integration tests.

#![forbid(unsafe_code)]

pub mod collaborators;
pub mod config;
pub mod error;
pub mod runtime;
pub mod script;
pub mod session;

pub use collaborators::{StaticLibrary, TracingDisplay, TracingHaptics};
pub use config::{LibrarySettings, LibrarySource, SimConfig};
pub use error::{Result, SimError};
pub use runtime::{Runtime, RuntimeCommand, RuntimeHandle};
pub use script::{drag_inputs, execute, parse_line, Outcome, ScriptCommand, DEMO_SCRIPT};
pub use session::{Control, Effect, Screen, Session, Snapshot};
