//! Trigonometric functions taking or returning angles in degrees.
//!
//! Each function converts with the [`M_PI_180`] / [`M_180_PI`] factors and
//! defers to the `f64` intrinsic. Out-of-domain arguments are not validated:
//! they produce `NaN` exactly as the underlying intrinsic does.

use crate::constants::{M_180_PI, M_PI_180, TAN_NEG_ONE_DEGS, TAN_ONE_DEGS};

/// Sine of an angle given in degrees.
#[inline]
#[must_use]
pub fn sin_d(degrees: f64) -> f64 {
  (degrees * M_PI_180).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
#[must_use]
pub fn cos_d(degrees: f64) -> f64 {
  (degrees * M_PI_180).cos()
}

/// Tangent of an angle given in degrees.
///
/// `45` and `135` return exactly `1.0` and `-1.0`. The general formula lands a
/// few ulps away from those values because pi/4 is not representable.
#[inline]
#[must_use]
pub fn tan_d(degrees: f64) -> f64 {
  if degrees == TAN_ONE_DEGS {
    1.0
  } else if degrees == TAN_NEG_ONE_DEGS {
    -1.0
  } else {
    (degrees * M_PI_180).tan()
  }
}

/// Quadrant-aware arctangent of `y / x`, in degrees.
///
/// The result lies in `[-180, 180]`: the sign of a zero `y` is kept, so
/// `atan2_d(0.0, -1.0)` is `180.0` while `atan2_d(-0.0, -1.0)` is `-180.0`.
/// `atan2_d(0.0, 0.0)` is `0.0`.
#[inline]
#[must_use]
pub fn atan2_d(y: f64, x: f64) -> f64 {
  y.atan2(x) * M_180_PI
}

/// Angle in degrees of the directed line from `(x1, y1)` to `(x2, y2)`.
#[inline]
#[must_use]
pub fn angle_of_line(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
  atan2_d(y2 - y1, x2 - x1)
}

/// Arcsine in degrees. `ratio` outside `[-1, 1]` yields `NaN`.
#[inline]
#[must_use]
pub fn asin_d(ratio: f64) -> f64 {
  ratio.asin() * M_180_PI
}

/// Arccosine in degrees. `ratio` outside `[-1, 1]` yields `NaN`.
#[inline]
#[must_use]
pub fn acos_d(ratio: f64) -> f64 {
  ratio.acos() * M_180_PI
}
