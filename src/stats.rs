//! Descriptive statistics over `f64` samples.
//!
//! [`median`] and [`range`] sort the caller's slice ascending in place before
//! reading from it. The reordering is part of their contract: after either call
//! the slice is sorted in IEEE-754 total order, so a positive `NaN` lands after `+inf`.

use std::collections::HashMap;

use log::{debug, trace};

use crate::types::MathError;

/// Arithmetic mean of the sample.
///
/// An empty sample yields `NaN` (`0.0 / 0.0`).
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
  // Summed back to front.
  let sum = values.iter().rev().fold(0.0, |acc, &v| v + acc);
  sum / values.len() as f64
}

/// Median of the sample. Sorts `values` ascending in place.
///
/// Returns `0.0` for an empty sample, the middle element for odd lengths and the
/// mean of the two middle elements for even lengths.
#[must_use]
pub fn median(values: &mut [f64]) -> f64 {
  sort_ascending(values);

  let len = values.len();
  match len {
    0 => 0.0,
    1 => values[0],
    _ if len % 2 == 1 => values[len / 2],
    _ => mean(&[values[len / 2 - 1], values[len / 2]]),
  }
}

/// All values sharing the highest occurrence count.
///
/// Values compare numerically, so `-0.0` and `0.0` are counted together, as are
/// all `NaN`s. Modes are listed in the order they first reached the winning
/// count; reaching a strictly higher count discards the modes found so far.
/// An empty sample yields an empty `Vec`.
#[must_use]
pub fn mode(values: &[f64]) -> Vec<f64> {
  let mut occurrences: HashMap<u64, usize> = HashMap::with_capacity(values.len());
  let mut max_count = 0;
  let mut modes = Vec::new();

  for &v in values {
    let count = occurrences.entry(value_key(v)).or_insert(0);
    *count += 1;
    if *count > max_count {
      max_count = *count;
      modes.clear();
      modes.push(v);
    } else if *count == max_count {
      modes.push(v);
    }
  }

  modes
}

/// Difference between the largest and smallest value. Sorts `values` ascending in place.
///
/// # Errors
///
/// Returns [`MathError::EmptyInput`] when `values` is empty.
pub fn range(values: &mut [f64]) -> Result<f64, MathError> {
  sort_ascending(values);

  match (values.first(), values.last()) {
    (Some(min), Some(max)) => Ok(max - min),
    _ => {
      debug!("range requested for an empty sample");
      Err(MathError::EmptyInput)
    }
  }
}

/// Sorts ascending by IEEE-754 total order.
fn sort_ascending(values: &mut [f64]) {
  trace!("sorting {} sample values in place", values.len());
  values.sort_by(f64::total_cmp);
}

/// Hash key under which a value is counted by [`mode`].
#[inline]
fn value_key(v: f64) -> u64 {
  if v.is_nan() {
    f64::NAN.to_bits()
  } else if v == 0.0 {
    0 // folds -0.0 into 0.0
  } else {
    v.to_bits()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mean() {
    assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(mean(&[-4.0]), -4.0);
    assert!(mean(&[]).is_nan(), "empty mean is NaN");
  }

  #[test]
  fn test_median_lengths() {
    assert_eq!(median(&mut []), 0.0);
    assert_eq!(median(&mut [5.0]), 5.0);
    assert_eq!(median(&mut [3.0, 1.0, 2.0]), 2.0);
    assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
  }

  #[test]
  fn test_median_sorts_numerically() {
    // Lexicographic order would put 10 before 9.
    let mut values = [10.0, 9.0, 1.0];
    assert_eq!(median(&mut values), 9.0);
    assert_eq!(values, [1.0, 9.0, 10.0]);
  }

  #[test]
  fn test_mode_ties_keep_first_reached_order() {
    assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0, 3.0]), vec![2.0, 3.0]);
    assert_eq!(mode(&[3.0, 3.0, 2.0, 2.0, 1.0]), vec![3.0, 2.0]);
  }

  #[test]
  fn test_mode_higher_count_replaces() {
    assert_eq!(mode(&[1.0, 2.0, 2.0, 1.0, 1.0]), vec![1.0]);
  }

  #[test]
  fn test_mode_all_distinct() {
    assert_eq!(mode(&[4.0, 5.0, 6.0]), vec![4.0, 5.0, 6.0]);
  }

  #[test]
  fn test_mode_empty() {
    assert!(mode(&[]).is_empty());
  }

  #[test]
  fn test_mode_signed_zero_and_nan_are_one_value() {
    let modes = mode(&[-0.0, 0.0, 1.0]);
    assert_eq!(modes.len(), 1);
    assert_eq!(modes[0], 0.0);

    let modes = mode(&[f64::NAN, 1.0, f64::NAN]);
    assert_eq!(modes.len(), 1);
    assert!(modes[0].is_nan());
  }

  #[test]
  fn test_range() {
    let mut values = [4.0, 1.0, 7.0, 2.0];
    assert_eq!(range(&mut values), Ok(6.0));
    assert_eq!(values, [1.0, 2.0, 4.0, 7.0], "sorted in place");
    assert_eq!(range(&mut [3.5]), Ok(0.0));
  }

  #[test]
  fn test_range_empty() {
    assert_eq!(range(&mut []), Err(MathError::EmptyInput));
  }

  #[test]
  fn test_nan_sorts_last() {
    let mut values = [2.0, f64::NAN, 1.0];
    let _ = median(&mut values);
    assert_eq!(values[0], 1.0);
    assert_eq!(values[1], 2.0);
    assert!(values[2].is_nan());
  }
}
