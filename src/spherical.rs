//! Spherical coordinates.

use crate::{
    num::Float,
    scalar,
    vector::{Vector3, Vector3Ops},
};

/// A point given by its distance from the origin, its polar angle `phi`
/// measured from the positive y-axis and its azimuthal angle `theta` about
/// the y-axis measured from the positive z-axis toward the positive x-axis.
///
/// Angles are in radians. Nothing constrains the values unless
/// [`make_safe`](Self::make_safe) is called.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical<F: Float> {
    pub radius: F,
    pub phi: F,
    pub theta: F,
}

impl<F: Float> Spherical<F> {
    pub const fn new(radius: F, phi: F, theta: F) -> Self {
        Self { radius, phi, theta }
    }

    /// Computes the spherical coordinates of the given point. The zero vector
    /// gets both angles set to zero.
    pub fn from_vector<V>(vector: &V) -> Self
    where
        V: Vector3Ops<Scalar = F>,
    {
        let mut spherical = Self::default();
        spherical.set_from_vector(vector);
        spherical
    }

    pub fn set_from_vector<V>(&mut self, vector: &V)
    where
        V: Vector3Ops<Scalar = F>,
    {
        self.radius = vector.length();

        if self.radius == F::ZERO {
            log::trace!("Spherical coordinates of zero vector, using zero angles");
            self.theta = F::ZERO;
            self.phi = F::ZERO;
        } else {
            let (x, y, z) = vector.xyz();
            self.theta = x.atan2(z);
            self.phi = scalar::clamp(y / self.radius, F::NEG_ONE, F::ONE).acos();
        }
    }

    /// Keeps `phi` at least a millionth of a radian away from either pole,
    /// where `theta` stops being meaningful.
    pub fn make_safe(&mut self) {
        self.phi = self
            .phi
            .min(F::PI - F::ONE_MILLIONTH)
            .max(F::ONE_MILLIONTH);
    }

    pub fn safe(&self) -> Self {
        let mut new = *self;
        new.make_safe();
        new
    }

    /// Converts the coordinates to a point in Cartesian space.
    pub fn to_vector<V>(&self) -> V
    where
        V: Vector3Ops<Scalar = F>,
    {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let sin_phi_radius = sin_phi * self.radius;

        let mut vector = V::default();
        vector.set_xyz(
            sin_phi_radius * sin_theta,
            cos_phi * self.radius,
            sin_phi_radius * cos_theta,
        );
        vector
    }
}

impl<F: Float> Default for Spherical<F> {
    fn default() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO)
    }
}

impl<F: Float> From<Vector3<F>> for Spherical<F> {
    fn from(vector: Vector3<F>) -> Self {
        Self::from_vector(&vector)
    }
}

impl<F: Float> From<Spherical<F>> for Vector3<F> {
    fn from(spherical: Spherical<F>) -> Self {
        spherical.to_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector;
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    proptest! {
        #[test]
        fn converting_to_spherical_and_back_restores_vector(
            x in -1e3..1e3_f64,
            y in -1e3..1e3_f64,
            z in -1e3..1e3_f64,
        ) {
            let v = Vector3::new(x, y, z);
            prop_assume!(v.length() > 1e-3);
            let restored: Vector3<f64> = Spherical::from(v).into();
            prop_assert!(abs_diff_eq!(restored, v, epsilon = 1e-9));
        }
    }

    #[test]
    fn spherical_coordinates_of_axes_work() {
        let s = Spherical::from(Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(s, Spherical::new(2.0, FRAC_PI_2, 0.0));

        let s = Spherical::from(Vector3::new(3.0, 0.0, 0.0));
        assert_eq!(s, Spherical::new(3.0, FRAC_PI_2, FRAC_PI_2));

        let s = Spherical::from(Vector3::new(0.0, -4.0, 0.0));
        assert_eq!(s.radius, 4.0);
        assert_eq!(s.phi, PI);
    }

    #[test]
    fn zero_vector_gives_zero_angles() {
        let s = Spherical::from(Vector3::<f32>::zeros());
        assert_eq!(s, Spherical::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn pole_roundtrip_preserves_radius_and_phi() {
        let v = Vector3::new(0.0, 5.0, 0.0);
        let s = Spherical::from(v);
        assert_eq!(s.radius, 5.0);
        assert_eq!(s.phi, 0.0);
        assert_abs_diff_eq!(Vector3::from(s), v);
    }

    #[test]
    fn making_safe_moves_phi_off_poles() {
        let north = Spherical::new(1.0, 0.0, 0.3).safe();
        assert_eq!(north.phi, 1e-6);
        assert_eq!(north.theta, 0.3);

        let south = Spherical::new(1.0, PI, 0.0).safe();
        assert_eq!(south.phi, PI - 1e-6);

        let mut inside = Spherical::new(1.0, 1.0, 0.0);
        inside.make_safe();
        assert_eq!(inside.phi, 1.0);
    }

    #[test]
    fn default_is_unit_radius_at_north_pole() {
        assert_eq!(Spherical::<f64>::default(), Spherical::new(1.0, 0.0, 0.0));
    }
}
