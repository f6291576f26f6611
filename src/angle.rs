// src/angle.rs

use crate::constants::{EPSILON_DEG, FULL_CIRCLE_DEGS, M_PI};

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
  radians * 180.0 / M_PI
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
  degrees * M_PI / 180.0
}

/// Normalizes an angle in degrees to the half-open range `[0, 360)`.
///
/// The angle is first reduced with the floating point remainder, which keeps
/// the sign of `degrees`, and a negative remainder is then shifted up by a full
/// turn. Exact multiples of 360 (of either sign) map to `0.0`.
///
/// Non-finite input yields `NaN`.
#[inline]
#[must_use]
pub fn fix_angle(degrees: f64) -> f64 {
  let rem = degrees % FULL_CIRCLE_DEGS;
  let mut fixed = if rem < 0.0 { rem + FULL_CIRCLE_DEGS } else { rem };
  // A remainder like -1e-20 rounds up to exactly 360 after the shift.
  if fixed >= FULL_CIRCLE_DEGS {
    fixed -= FULL_CIRCLE_DEGS;
  }
  // -360 % 360 is -0.0
  if fixed == 0.0 {
    fixed = 0.0;
  }
  fixed
}

/// Determines if two angles in degrees are within `threshold` degrees of each
/// other, measured the short way around the circle.
#[inline]
#[must_use]
pub fn angles_almost_equal_threshold(a: f64, b: f64, threshold: f64) -> bool {
  let diff = fix_angle(a - b);
  diff.min(FULL_CIRCLE_DEGS - diff) < threshold
}

/// Determines if two angles in degrees are within the default epsilon of each other.
#[inline]
#[must_use]
pub fn angles_almost_equal(a: f64, b: f64) -> bool {
  angles_almost_equal_threshold(a, b, EPSILON_DEG)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_radians_to_degrees() {
    assert_eq!(radians_to_degrees(0.0), 0.0);
    assert!((radians_to_degrees(M_PI) - 180.0).abs() < f64::EPSILON * 180.0);
    assert!((radians_to_degrees(-M_PI / 2.0) + 90.0).abs() < f64::EPSILON * 90.0);
  }

  #[test]
  fn test_degrees_to_radians() {
    assert_eq!(degrees_to_radians(0.0), 0.0);
    assert!((degrees_to_radians(180.0) - M_PI).abs() < f64::EPSILON);
    assert!(degrees_to_radians(f64::NAN).is_nan());
    assert_eq!(degrees_to_radians(f64::INFINITY), f64::INFINITY);
  }

  #[test]
  fn test_fix_angle() {
    assert_eq!(fix_angle(0.0), 0.0);
    assert_eq!(fix_angle(10.0), 10.0);
    assert_eq!(fix_angle(370.0), 10.0);
    assert_eq!(fix_angle(-10.0), 350.0);
    assert_eq!(fix_angle(-1.0), 359.0);
    assert_eq!(fix_angle(720.0), 0.0);
    assert_eq!(fix_angle(-725.0), 355.0);
  }

  #[test]
  fn test_fix_angle_multiples_are_positive_zero() {
    for a in [360.0, -360.0, 1080.0, -1080.0, -0.0] {
      let fixed = fix_angle(a);
      assert_eq!(fixed, 0.0, "fix_angle({a})");
      assert!(fixed.is_sign_positive(), "fix_angle({a}) should be +0.0");
    }
  }

  #[test]
  fn test_fix_angle_tiny_negative_stays_in_range() {
    let fixed = fix_angle(-1e-20);
    assert!((0.0..360.0).contains(&fixed), "got {fixed}");
  }

  #[test]
  fn test_fix_angle_non_finite() {
    assert!(fix_angle(f64::NAN).is_nan());
    assert!(fix_angle(f64::INFINITY).is_nan());
    assert!(fix_angle(f64::NEG_INFINITY).is_nan());
  }

  #[test]
  fn test_angles_almost_equal() {
    assert!(angles_almost_equal(10.0, 370.0), "full turn apart");
    assert!(angles_almost_equal(0.0, 360.0 - EPSILON_DEG / 2.0), "across zero");
    assert!(!angles_almost_equal(0.0, 1.0));
    assert!(angles_almost_equal_threshold(359.5, 0.25, 1.0), "wraps the short way");
    assert!(!angles_almost_equal_threshold(90.0, 270.0, 179.0));
  }
}
