//! Numbers and numerics.

use nalgebra as na;
use num_traits as nt;

/// Floating point type used when no other precision is asked for.
#[allow(non_camel_case_types)]
pub type fvec = f32;

/// Gathers traits useful for working with generic floating point types.
///
/// Every vector type in the crate is parameterized over its element type,
/// so the precision is picked at compile time by the caller.
pub trait Float: Copy + nt::FromPrimitive + na::RealField + na::Scalar {
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const ONE_FOURTH: Self;
    const PI: Self;
    const FRAC_PI_2: Self;
    const DEGREES_PER_RADIAN: Self;
    const RADIANS_PER_DEGREE: Self;
    /// Difference between 1.0 and the next larger representable number.
    const EPSILON: Self;
    /// Tolerance for geometric degeneracies that are far above rounding
    /// noise, such as two nearly opposite unit vectors.
    const ONE_MILLIONTH: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const ONE_FOURTH: Self = 0.25;
            const PI: Self = std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const DEGREES_PER_RADIAN: Self = 180.0 / std::$f::consts::PI;
            const RADIANS_PER_DEGREE: Self = std::$f::consts::PI / 180.0;
            const EPSILON: Self = $f::EPSILON;
            const ONE_MILLIONTH: Self = 1e-6;
        }
    };
}

impl_float!(f32);
impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn machine_epsilon<F: Float>() -> F {
        F::EPSILON
    }

    #[test]
    fn float_constants_match_std_values() {
        assert_eq!(<f32 as Float>::PI, std::f32::consts::PI);
        assert_eq!(<f64 as Float>::FRAC_PI_2, std::f64::consts::FRAC_PI_2);
        assert_eq!(machine_epsilon::<f32>(), f32::EPSILON);
        assert_eq!(machine_epsilon::<f64>(), f64::EPSILON);
    }

    #[test]
    fn degree_radian_factors_are_reciprocal() {
        let product = <f64 as Float>::DEGREES_PER_RADIAN * <f64 as Float>::RADIANS_PER_DEGREE;
        assert!((product - 1.0).abs() < 1e-12);
    }
}
