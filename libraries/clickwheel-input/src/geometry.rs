//! Wheel geometry and detent configuration

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

/// Default outer radius of the touch ring (half of a 220 unit wheel)
pub const DEFAULT_OUTER_RADIUS: f64 = 110.0;

/// Default center button radius (half of an 80 unit button)
pub const DEFAULT_DEAD_ZONE_RADIUS: f64 = 40.0;

/// Default rotation per detent, in degrees
pub const DEFAULT_DETENT_DEGREES: f64 = 15.0;

/// Invalid wheel configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Dead-zone radius {dead_zone} must be smaller than outer radius {outer}")]
    RadiiOutOfOrder { dead_zone: f64, outer: f64 },

    #[error("Radius must be finite and non-negative: {0}")]
    InvalidRadius(f64),

    #[error("Detent angle must be within (0, 180) degrees: {0}")]
    InvalidDetent(f64),
}

/// Shape of the touch-sensitive ring
///
/// Samples are accepted only strictly between the dead-zone radius (center
/// button) and the outer radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    /// Outer radius of the ring
    #[serde(default = "default_outer_radius")]
    pub outer_radius: f64,

    /// Radius of the center button
    #[serde(default = "default_dead_zone_radius")]
    pub dead_zone_radius: f64,

    /// Rotation needed for one detent, in degrees
    #[serde(default = "default_detent_degrees")]
    pub detent_degrees: f64,
}

fn default_outer_radius() -> f64 {
    DEFAULT_OUTER_RADIUS
}

fn default_dead_zone_radius() -> f64 {
    DEFAULT_DEAD_ZONE_RADIUS
}

fn default_detent_degrees() -> f64 {
    DEFAULT_DETENT_DEGREES
}

impl Default for WheelGeometry {
    fn default() -> Self {
        Self {
            outer_radius: DEFAULT_OUTER_RADIUS,
            dead_zone_radius: DEFAULT_DEAD_ZONE_RADIUS,
            detent_degrees: DEFAULT_DETENT_DEGREES,
        }
    }
}

impl WheelGeometry {
    /// Detent threshold in radians (π/12 for the default 15°)
    pub fn threshold_radians(&self) -> f64 {
        self.detent_degrees * PI / 180.0
    }

    /// Whether a sample at offset (dx, dy) from the center lies on the ring
    pub fn accepts(&self, dx: f64, dy: f64) -> bool {
        let distance = dx.hypot(dy);
        distance > self.dead_zone_radius && distance < self.outer_radius
    }

    /// Radius halfway across the ring, where synthesized drags run
    pub fn mid_radius(&self) -> f64 {
        (self.outer_radius + self.dead_zone_radius) / 2.0
    }

    /// Check that the ring is non-empty and the detent is usable
    pub fn validate(&self) -> Result<(), GeometryError> {
        for radius in [self.outer_radius, self.dead_zone_radius] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(GeometryError::InvalidRadius(radius));
            }
        }
        if self.dead_zone_radius >= self.outer_radius {
            return Err(GeometryError::RadiiOutOfOrder {
                dead_zone: self.dead_zone_radius,
                outer: self.outer_radius,
            });
        }
        if !(self.detent_degrees > 0.0 && self.detent_degrees < 180.0) {
            return Err(GeometryError::InvalidDetent(self.detent_degrees));
        }
        Ok(())
    }
}
