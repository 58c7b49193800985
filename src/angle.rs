//! Angles in degrees or radians.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};
use std::{
    cmp::Ordering,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle<F: Float>: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> F;

    /// Returns the value of the angle in radians.
    fn radians(self) -> F;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees<F> {
        Degrees(self.degrees())
    }

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians<F> {
        Radians(self.radians())
    }

    /// Computes the sine and cosine of the angle.
    fn sin_cos(self) -> (F, F) {
        self.radians().sin_cos()
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn degrees(self) -> F {
        self.0
    }

    fn radians(self) -> F {
        degrees_to_radians(self.0)
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn zero() -> Self {
        Self(F::ZERO)
    }

    fn degrees(self) -> F {
        radians_to_degrees(self.0)
    }

    fn radians(self) -> F {
        self.0
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(rad: Radians<F>) -> Self {
        rad.as_degrees()
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(deg: Degrees<F>) -> Self {
        deg.as_radians()
    }
}

macro_rules! impl_angle_ops {
    ($angle:ident, $other:ident, $value:ident) => {
        impl<F: Float> Add for $angle<F> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<F: Float> Add<$other<F>> for $angle<F> {
            type Output = Self;
            fn add(self, rhs: $other<F>) -> Self {
                Self(self.0 + rhs.$value())
            }
        }

        impl<F: Float> Sub for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<F: Float> Sub<$other<F>> for $angle<F> {
            type Output = Self;
            fn sub(self, rhs: $other<F>) -> Self {
                Self(self.0 - rhs.$value())
            }
        }

        impl<F: Float> Mul<F> for $angle<F> {
            type Output = Self;
            fn mul(self, rhs: F) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<F: Float> Div<F> for $angle<F> {
            type Output = Self;
            fn div(self, rhs: F) -> Self {
                Self(self.0 / rhs)
            }
        }

        impl<F: Float> Neg for $angle<F> {
            type Output = Self;
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<F: Float> PartialEq<$other<F>> for $angle<F> {
            fn eq(&self, rhs: &$other<F>) -> bool {
                self.0 == rhs.$value()
            }
        }

        impl<F: Float> PartialOrd<$other<F>> for $angle<F> {
            fn partial_cmp(&self, rhs: &$other<F>) -> Option<Ordering> {
                self.0.partial_cmp(&rhs.$value())
            }
        }

        impl<F: Float> AbsDiffEq for $angle<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $angle<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_angle_ops!(Degrees, Radians, degrees);
impl_angle_ops!(Radians, Degrees, radians);

pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * F::DEGREES_PER_RADIAN
}

pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees * F::RADIANS_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0).radians(), 0.0);
        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0);
        assert_abs_diff_eq!(Degrees(180.0).radians(), PI);
        assert_abs_diff_eq!(Degrees(-270.0).radians(), -3.0 * PI / 2.0);
        assert_abs_diff_eq!(Degrees(360.0).radians(), 2.0 * PI);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0);
        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Radians(-PI).degrees(), -180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Radians(2.0 * PI).degrees(), 360.0, epsilon = 1e-12);
    }

    #[test]
    fn converting_between_units_works() {
        let rad: Radians<f64> = Degrees(45.0).into();
        assert_abs_diff_eq!(rad, Radians(PI / 4.0));
        let deg: Degrees<f64> = Radians(PI / 3.0).into();
        assert_abs_diff_eq!(deg, Degrees(60.0), epsilon = 1e-12);
    }

    #[test]
    fn angle_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Radians(42.0) * 2.5, Radians(105.0));
        assert_abs_diff_eq!(Radians(42.0) / 4.0, Radians(10.5));
        assert_abs_diff_eq!(-Degrees(42.0), Degrees(-42.0));
    }

    #[test]
    fn mixed_unit_ops_work() {
        assert_abs_diff_eq!(Degrees(45.0) + Radians(PI / 2.0), Degrees(135.0), epsilon = 1e-12);
        assert_abs_diff_eq!(Radians(PI / 2.0) - Degrees(45.0), Radians(PI / 4.0), epsilon = 1e-12);

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(42.0) > Radians(0.0));
        assert!(Radians(PI) < Degrees(360.0));
    }

    #[test]
    fn angle_sin_cos_uses_radians() {
        let (sin, cos) = Degrees(90.0_f64).sin_cos();
        assert_abs_diff_eq!(sin, 1.0);
        assert_abs_diff_eq!(cos, 0.0, epsilon = 1e-12);
    }
}
