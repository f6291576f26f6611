//! Core data structures: points in both coordinate systems and the crate error type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A point in 2D cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianPoint {
  /// x component.
  pub x: f64,
  /// y component.
  pub y: f64,
}

/// A point in polar coordinates.
///
/// The radius is not required to be non-negative: a negative `r` describes the
/// point reflected through the origin.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarPoint {
  /// Radius, distance from the origin.
  pub r: f64,
  /// Angle from the positive x axis, in degrees.
  pub t: f64,
}

/// Represents a math-utilities error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum MathError {
  /// The sample had no elements but the operation needs at least one.
  EmptyInput = 1,
}

impl fmt::Display for MathError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      MathError::EmptyInput => "sample is empty",
    };
    write!(f, "{msg} (code {})", *self as u32)
  }
}

impl std::error::Error for MathError {}
