// src/coords.rs

use crate::trig::{atan2_d, cos_d, sin_d};
use crate::types::{CartesianPoint, PolarPoint};

impl CartesianPoint {
  /// Distance of the point from the origin.
  #[inline]
  #[must_use]
  pub fn magnitude(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }
}

/// Converts cartesian coordinates to polar coordinates with the angle in degrees.
///
/// The origin maps to `{ r: 0, t: 0 }`.
#[inline]
#[must_use]
pub fn cartesian_to_polar(p: &CartesianPoint) -> PolarPoint {
  PolarPoint {
    r: p.magnitude(),
    t: atan2_d(p.y, p.x),
  }
}

/// Converts polar coordinates (angle in degrees) to cartesian coordinates.
#[inline]
#[must_use]
pub fn polar_to_cartesian(p: &PolarPoint) -> CartesianPoint {
  CartesianPoint {
    x: p.r * cos_d(p.t),
    y: p.r * sin_d(p.t),
  }
}

impl From<CartesianPoint> for PolarPoint {
  fn from(p: CartesianPoint) -> Self {
    cartesian_to_polar(&p)
  }
}

impl From<PolarPoint> for CartesianPoint {
  fn from(p: PolarPoint) -> Self {
    polar_to_cartesian(&p)
  }
}

/// Checks if two cartesian points are within `threshold` of each other on both axes.
#[inline]
#[must_use]
pub fn points_almost_equal(p1: &CartesianPoint, p2: &CartesianPoint, threshold: f64) -> bool {
  (p1.x - p2.x).abs() < threshold && (p1.y - p2.y).abs() < threshold
}
