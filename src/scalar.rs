//! Utilities for single floating point values.

use crate::num::Float;

/// Bounds `value` to the range `[min, max]`.
///
/// The lower bound is tested first, so if `min > max`, values below `min`
/// give `min` and all other values give `max`.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Returns the multiple of `step` closest to `value`. Halfway cases are
/// rounded away from zero.
///
/// A zero `step` yields a non-finite result.
#[inline]
pub fn rounded_to_nearest<F: Float>(value: F, step: F) -> F {
    (value / step).round() * step
}

/// The largest integer value not greater than `value`.
#[inline]
pub fn floor<F: Float>(value: F) -> F {
    value.floor()
}

/// The smallest integer value not less than `value`.
#[inline]
pub fn ceil<F: Float>(value: F) -> F {
    value.ceil()
}

/// The absolute difference between two values.
#[inline]
pub fn distance<F: Float>(a: F, b: F) -> F {
    (a - b).abs()
}
