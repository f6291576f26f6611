#![deny(clippy::all)] // Enforce clippy lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Often a matter of taste
#![allow(clippy::cast_precision_loss)] // Sample lengths are converted to f64 for averaging
#![allow(clippy::float_cmp)] // Exact comparisons are intended where they appear
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `math-utilities` is a small collection of stateless numeric helpers.
//!
//! It covers degree/radian conversion, trigonometry in degree units, angle
//! normalization, cartesian/polar coordinate transforms and four descriptive
//! statistics. Every function is free-standing; there is no state to set up.
//!
//! ```
//! use math_utilities::{cartesian_to_polar, fix_angle, tan_d, CartesianPoint};
//!
//! assert_eq!(tan_d(45.0), 1.0);
//! assert_eq!(fix_angle(-10.0), 350.0);
//!
//! let p = cartesian_to_polar(&CartesianPoint { x: 3.0, y: 4.0 });
//! assert_eq!(p.r, 5.0);
//! ```

// Declare modules
pub mod angle;
pub mod constants;
pub mod coords;
pub mod stats;
pub mod trig;
pub mod types;

/// Version of the library, e.g. `"3.0.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export key public types and functions for easier use
pub use angle::{angles_almost_equal, angles_almost_equal_threshold, degrees_to_radians, fix_angle, radians_to_degrees};
pub use coords::{cartesian_to_polar, points_almost_equal, polar_to_cartesian};
pub use stats::{mean, median, mode, range};
pub use trig::{acos_d, angle_of_line, asin_d, atan2_d, cos_d, sin_d, tan_d};
pub use types::{CartesianPoint, MathError, PolarPoint};
