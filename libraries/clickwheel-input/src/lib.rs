//! Click Wheel Player - Rotary Input
//!
//! Decodes continuous angular touch motion on the wheel ring into discrete
//! detent steps.
//!
//! # Example
//!
//! ```rust
//! use clickwheel_core::HapticFeedback;
//! use clickwheel_input::{arc_samples, RotaryInputDecoder, WheelGeometry, WheelStep};
//!
//! struct Silent;
//! impl HapticFeedback for Silent {
//!     fn tick(&self) {}
//!     fn confirm(&self) {}
//!     fn bump(&self) {}
//! }
//!
//! let geometry = WheelGeometry::default();
//! let mut decoder = RotaryInputDecoder::new(geometry);
//!
//! // Drag 30° clockwise in 5° increments: two 15° detents
//! let steps: Vec<WheelStep> = arc_samples(&geometry, 0.0, 30.0, 5.0)
//!     .into_iter()
//!     .filter_map(|(x, y)| decoder.sample(x, y, &Silent))
//!     .collect();
//! decoder.release();
//!
//! assert_eq!(steps, vec![WheelStep::Forward, WheelStep::Forward]);
//! ```

#![forbid(unsafe_code)]

mod decoder;
mod event;
mod geometry;
mod gesture;

pub use decoder::{unwrap_delta, GestureAccumulator, RotaryInputDecoder};
pub use event::{WheelButton, WheelInput, WheelStep};
pub use geometry::{
    GeometryError, WheelGeometry, DEFAULT_DEAD_ZONE_RADIUS, DEFAULT_DETENT_DEGREES,
    DEFAULT_OUTER_RADIUS,
};
pub use gesture::arc_samples;
