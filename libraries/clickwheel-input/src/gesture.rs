//! Synthetic drag gestures
//!
//! Used by the simulator and tests to drive the decoder without a real
//! touch surface.

use crate::geometry::WheelGeometry;

/// Samples along an arc at the middle of the ring
///
/// Starts at `start_degrees` and moves by `increment_degrees` until
/// `end_degrees` is reached (inclusive). The sign of the increment is taken
/// from the direction of travel. Angles follow `atan2` screen convention, so
/// increasing degrees is clockwise.
pub fn arc_samples(
    geometry: &WheelGeometry,
    start_degrees: f64,
    end_degrees: f64,
    increment_degrees: f64,
) -> Vec<(f64, f64)> {
    let radius = geometry.mid_radius();
    let span = end_degrees - start_degrees;
    let increment = increment_degrees.abs();

    if increment == 0.0 || span == 0.0 {
        return vec![point(radius, start_degrees)];
    }

    let count = (span.abs() / increment).round() as usize;
    let step = span.signum() * increment;

    (0..=count)
        .map(|i| point(radius, start_degrees + step * i as f64))
        .collect()
}

fn point(radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (radius * radians.cos(), radius * radians.sin())
}
