//! Numeric constants shared by the angle, trigonometry and coordinate modules.

use std::f64::consts;

// Mathematical constants
/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 180, multiply degrees by this to get radians
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi, multiply radians by this to get degrees
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// Degrees in a full turn.
pub const FULL_CIRCLE_DEGS: f64 = 360.0;

/// Angle (degrees) whose tangent is returned as exactly `1.0`.
pub const TAN_ONE_DEGS: f64 = 45.0;
/// Angle (degrees) whose tangent is returned as exactly `-1.0`.
pub const TAN_NEG_ONE_DEGS: f64 = 135.0;

/// Default tolerance, in degrees, for approximate comparisons of angles.
pub const EPSILON_DEG: f64 = 0.000_000_001;
