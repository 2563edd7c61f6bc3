//! Rotary gesture decoder
//!
//! Turns a stream of pointer samples on the wheel ring into discrete
//! detent steps. Each sample is processed as:
//!
//! 1. Reject samples inside the center button or outside the ring
//! 2. Convert to an angle with `atan2`
//! 3. First accepted sample of a gesture only sets the baseline
//! 4. Unwrap the angle delta across the ±π seam and accumulate it
//! 5. Once the accumulated rotation reaches the detent threshold, emit one
//!    step, clear the accumulator and fire a haptic tick
//!
//! At most one step is emitted per sample. Lifting the pointer clears all
//! gesture state.

use crate::event::WheelStep;
use crate::geometry::WheelGeometry;
use clickwheel_core::HapticFeedback;
use std::f64::consts::{PI, TAU};
use tracing::trace;

/// Slack when comparing accumulated rotation against the threshold
///
/// Sums of `atan2` differences land a few ulps either side of exact
/// multiples of the detent angle.
const ANGLE_EPSILON: f64 = 1e-9;

/// Per-gesture state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureAccumulator {
    /// Angle of the previous accepted sample, `None` before the first one
    last_angle: Option<f64>,

    /// Rotation not yet converted into a step (radians)
    accumulated: f64,
}

impl GestureAccumulator {
    /// Clear the gesture
    pub fn reset(&mut self) {
        self.last_angle = None;
        self.accumulated = 0.0;
    }

    pub fn last_angle(&self) -> Option<f64> {
        self.last_angle
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }
}

/// Shortest signed rotation from `from` to `to`, in `[-π, π]`
pub fn unwrap_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta > PI {
        delta -= TAU;
    } else if delta < -PI {
        delta += TAU;
    }
    delta
}

/// Click wheel gesture decoder
#[derive(Debug, Clone)]
pub struct RotaryInputDecoder {
    geometry: WheelGeometry,
    threshold: f64,
    gesture: GestureAccumulator,
}

impl RotaryInputDecoder {
    /// Create a decoder for the given wheel
    pub fn new(geometry: WheelGeometry) -> Self {
        Self {
            threshold: geometry.threshold_radians(),
            geometry,
            gesture: GestureAccumulator::default(),
        }
    }

    /// Feed one pointer sample, offset `(dx, dy)` from the wheel center
    ///
    /// Returns the step produced by this sample, if any. A step also fires
    /// `haptics.tick()`.
    pub fn sample(&mut self, dx: f64, dy: f64, haptics: &dyn HapticFeedback) -> Option<WheelStep> {
        if !self.geometry.accepts(dx, dy) {
            return None;
        }

        let angle = dy.atan2(dx);

        let Some(previous) = self.gesture.last_angle else {
            self.gesture.last_angle = Some(angle);
            return None;
        };

        self.gesture.accumulated += unwrap_delta(previous, angle);
        self.gesture.last_angle = Some(angle);

        if self.gesture.accumulated.abs() + ANGLE_EPSILON < self.threshold {
            return None;
        }

        let step = if self.gesture.accumulated > 0.0 {
            WheelStep::Forward
        } else {
            WheelStep::Backward
        };
        trace!(
            ?step,
            accumulated = self.gesture.accumulated,
            "wheel detent"
        );
        self.gesture.accumulated = 0.0;
        haptics.tick();

        Some(step)
    }

    /// Pointer lifted: the next touch starts a fresh gesture
    pub fn release(&mut self) {
        self.gesture.reset();
    }

    pub fn gesture(&self) -> &GestureAccumulator {
        &self.gesture
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }
}

impl Default for RotaryInputDecoder {
    fn default() -> Self {
        Self::new(WheelGeometry::default())
    }
}
