//! Quaternions representing 3D rotations.

use crate::{
    axis::{Axis4, AxisSet},
    euler::{Euler, EulerOrder},
    num::Float,
    scalar,
    vector::{Vector, Vector3Ops, Vector4},
};
use bytemuck::{Pod, Zeroable};
use nalgebra::{self as na, ComplexField, RealField};
use std::ops::{Index, IndexMut};

/// Quaternion algebra on top of the [`Vector`] contract.
///
/// Implementors should override [`Vector::zero_value`] so that the `w`
/// axis zeroes to one. Zeroing all axes then yields the identity rotation,
/// and normalizing a zero-length quaternion falls back to it.
///
/// Most rotation operations assume a unit quaternion. Products of unit
/// quaternions drift from unit length over many multiplications, so callers
/// should normalize periodically.
pub trait QuaternionOps: Vector<Axis = Axis4> {
    fn xyzw(&self) -> (Self::Scalar, Self::Scalar, Self::Scalar, Self::Scalar) {
        (
            self.get(Axis4::X),
            self.get(Axis4::Y),
            self.get(Axis4::Z),
            self.get(Axis4::W),
        )
    }

    fn set_xyzw(&mut self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar, w: Self::Scalar) {
        self.set(Axis4::X, x);
        self.set(Axis4::Y, y);
        self.set(Axis4::Z, z);
        self.set(Axis4::W, w);
    }

    fn from_xyzw(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar, w: Self::Scalar) -> Self {
        let mut q = Self::default();
        q.set_xyzw(x, y, z, w);
        q
    }

    /// The quaternion representing no rotation.
    fn identity() -> Self {
        let zero = <Self::Scalar as Float>::ZERO;
        Self::from_xyzw(zero, zero, zero, <Self::Scalar as Float>::ONE)
    }

    /// Negates the vector part. For a unit quaternion this gives the inverse
    /// rotation.
    fn conjugate(&mut self) {
        self.flip(&[Axis4::X, Axis4::Y, Axis4::Z]);
    }

    fn conjugated(&self) -> Self {
        let mut new = *self;
        new.conjugate();
        new
    }

    /// Sets this quaternion to the Hamilton product `a * b`, the rotation
    /// applying `b` first and then `a`.
    fn set_product(&mut self, a: &Self, b: &Self) {
        let (ax, ay, az, aw) = a.xyzw();
        let (bx, by, bz, bw) = b.xyzw();
        self.set_xyzw(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        );
    }

    /// Sets this quaternion to `self * rhs`.
    fn multiply(&mut self, rhs: &Self) {
        let lhs = *self;
        self.set_product(&lhs, rhs);
    }

    /// Sets this quaternion to `lhs * self`.
    fn premultiply(&mut self, lhs: &Self) {
        let rhs = *self;
        self.set_product(lhs, &rhs);
    }

    fn multiplied(&self, rhs: &Self) -> Self {
        let mut new = *self;
        new.multiply(rhs);
        new
    }

    /// Spherical linear interpolation from this rotation toward `target`,
    /// where `t = 0` leaves this quaternion and `t = 1` gives `target`.
    /// Always takes the shorter of the two arcs.
    fn slerp(&mut self, target: &Self, t: Self::Scalar) {
        let zero = <Self::Scalar as Float>::ZERO;
        let one = <Self::Scalar as Float>::ONE;

        if t == zero {
            return;
        }
        if t == one {
            *self = *target;
            return;
        }

        let mut target = *target;
        let mut cos_half_theta = self.dot(&target);

        // q and -q are the same rotation, pick the one on our hemisphere
        if cos_half_theta < zero {
            target.flip(Axis4::ALL);
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta >= one {
            return;
        }

        let sqr_sin_half_theta = one - cos_half_theta * cos_half_theta;

        if sqr_sin_half_theta <= <Self::Scalar as Float>::EPSILON {
            log::trace!("Slerping nearly parallel quaternions, using normalized lerp");
            let s = one - t;
            self.apply_with(&target, |a, b| s * a + t * b);
            self.normalize();
            return;
        }

        let sin_half_theta = sqr_sin_half_theta.sqrt();
        let half_theta = sin_half_theta.atan2(cos_half_theta);
        let ratio_a = ((one - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;

        self.apply_with(&target, |a, b| a * ratio_a + b * ratio_b);
    }

    fn slerped(&self, target: &Self, t: Self::Scalar) -> Self {
        let mut new = *self;
        new.slerp(target, t);
        new
    }

    /// Angle in radians of the rotation taking this orientation to `other`,
    /// in `[0, pi]` regardless of the signs of the quaternions.
    fn angle_to(&self, other: &Self) -> Self::Scalar {
        let cos_half_theta = scalar::clamp(
            self.dot(other),
            <Self::Scalar as Float>::NEG_ONE,
            <Self::Scalar as Float>::ONE,
        );
        <Self::Scalar as Float>::TWO * cos_half_theta.abs().acos()
    }

    /// Sets this quaternion to the rotation described by `euler`, whose
    /// order selects which axis is applied first.
    fn set_from_euler(&mut self, euler: &Euler<Self::Scalar>) {
        let half = <Self::Scalar as Float>::ONE_HALF;
        let (s1, c1) = (euler.x * half).sin_cos();
        let (s2, c2) = (euler.y * half).sin_cos();
        let (s3, c3) = (euler.z * half).sin_cos();

        let (x, y, z, w) = match euler.order {
            EulerOrder::XYZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::YXZ => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::ZXY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::ZYX => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::YZX => (
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::XZY => (
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
        };
        self.set_xyzw(x, y, z, w);
    }

    fn from_euler(euler: &Euler<Self::Scalar>) -> Self {
        let mut q = Self::default();
        q.set_from_euler(euler);
        q
    }

    /// Sets this quaternion to the rotation of `angle` radians about `axis`,
    /// which must have unit length.
    fn set_from_axis_angle<V>(&mut self, axis: &V, angle: Self::Scalar)
    where
        V: Vector3Ops<Scalar = Self::Scalar>,
    {
        let (sin, cos) = (angle * <Self::Scalar as Float>::ONE_HALF).sin_cos();
        let (x, y, z) = axis.xyz();
        self.set_xyzw(x * sin, y * sin, z * sin, cos);
    }

    fn from_axis_angle<V>(axis: &V, angle: Self::Scalar) -> Self
    where
        V: Vector3Ops<Scalar = Self::Scalar>,
    {
        let mut q = Self::default();
        q.set_from_axis_angle(axis, angle);
        q
    }

    /// Sets this quaternion to the rotation in the upper 3x3 part of
    /// `matrix`, which must be a pure rotation acting on column vectors.
    fn set_from_rotation_matrix(&mut self, matrix: &na::Matrix4<Self::Scalar>) {
        let m = matrix;
        let two = <Self::Scalar as Float>::TWO;
        let one = <Self::Scalar as Float>::ONE;
        let quarter = <Self::Scalar as Float>::ONE_FOURTH;

        let (x, y, z, w) = match MatrixTraceCase::of(matrix) {
            MatrixTraceCase::PositiveTrace => {
                let s = <Self::Scalar as Float>::ONE_HALF / (m.m11 + m.m22 + m.m33 + one).sqrt();
                (
                    (m.m32 - m.m23) * s,
                    (m.m13 - m.m31) * s,
                    (m.m21 - m.m12) * s,
                    quarter / s,
                )
            }
            MatrixTraceCase::DominantX => {
                let s = two * (one + m.m11 - m.m22 - m.m33).sqrt();
                (
                    quarter * s,
                    (m.m12 + m.m21) / s,
                    (m.m13 + m.m31) / s,
                    (m.m32 - m.m23) / s,
                )
            }
            MatrixTraceCase::DominantY => {
                let s = two * (one + m.m22 - m.m11 - m.m33).sqrt();
                (
                    (m.m12 + m.m21) / s,
                    quarter * s,
                    (m.m23 + m.m32) / s,
                    (m.m13 - m.m31) / s,
                )
            }
            MatrixTraceCase::DominantZ => {
                let s = two * (one + m.m33 - m.m11 - m.m22).sqrt();
                (
                    (m.m13 + m.m31) / s,
                    (m.m23 + m.m32) / s,
                    quarter * s,
                    (m.m21 - m.m12) / s,
                )
            }
        };
        self.set_xyzw(x, y, z, w);
    }

    fn from_rotation_matrix(matrix: &na::Matrix4<Self::Scalar>) -> Self {
        let mut q = Self::default();
        q.set_from_rotation_matrix(matrix);
        q
    }

    /// Sets this quaternion to the shortest rotation taking the unit vector
    /// `from` onto the unit vector `to`. For opposite vectors, where that
    /// rotation is not unique, a half turn about an axis perpendicular to
    /// `from` is used.
    fn set_from_unit_vectors<V>(&mut self, from: &V, to: &V)
    where
        V: Vector3Ops<Scalar = Self::Scalar>,
    {
        let zero = <Self::Scalar as Float>::ZERO;
        let r = from.dot(to) + <Self::Scalar as Float>::ONE;
        let (fx, fy, fz) = from.xyz();

        if r < <Self::Scalar as Float>::ONE_MILLIONTH {
            log::trace!("Rotating between opposite vectors, using perpendicular axis");
            if fx.abs() > fz.abs() {
                self.set_xyzw(-fy, fx, zero, zero);
            } else {
                self.set_xyzw(zero, -fz, fy, zero);
            }
        } else {
            let (tx, ty, tz) = to.xyz();
            self.set_xyzw(fy * tz - fz * ty, fz * tx - fx * tz, fx * ty - fy * tx, r);
        }
        self.normalize();
    }

    fn from_unit_vectors<V>(from: &V, to: &V) -> Self
    where
        V: Vector3Ops<Scalar = Self::Scalar>,
    {
        let mut q = Self::default();
        q.set_from_unit_vectors(from, to);
        q
    }
}

/// Which formula converts a rotation matrix to a quaternion without
/// dividing by a small number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatrixTraceCase {
    PositiveTrace,
    DominantX,
    DominantY,
    DominantZ,
}

impl MatrixTraceCase {
    fn of<F: Float>(m: &na::Matrix4<F>) -> Self {
        if m.m11 + m.m22 + m.m33 > F::ZERO {
            Self::PositiveTrace
        } else if m.m11 > m.m22 && m.m11 > m.m33 {
            Self::DominantX
        } else if m.m22 > m.m33 {
            Self::DominantY
        } else {
            Self::DominantZ
        }
    }
}

/// A quaternion stored as a vector part `(x, y, z)` followed by the scalar
/// part `w`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Quaternion<F> {
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }
}

impl<F: Float> Default for Quaternion<F> {
    fn default() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE)
    }
}

impl<F: Float> Index<Axis4> for Quaternion<F> {
    type Output = F;

    fn index(&self, axis: Axis4) -> &F {
        match axis {
            Axis4::X => &self.x,
            Axis4::Y => &self.y,
            Axis4::Z => &self.z,
            Axis4::W => &self.w,
        }
    }
}

impl<F: Float> IndexMut<Axis4> for Quaternion<F> {
    fn index_mut(&mut self, axis: Axis4) -> &mut F {
        match axis {
            Axis4::X => &mut self.x,
            Axis4::Y => &mut self.y,
            Axis4::Z => &mut self.z,
            Axis4::W => &mut self.w,
        }
    }
}

impl<F: Float> Vector for Quaternion<F> {
    type Scalar = F;
    type Axis = Axis4;

    fn get(&self, axis: Axis4) -> F {
        self[axis]
    }

    fn set(&mut self, axis: Axis4, value: F) {
        self[axis] = value;
    }

    fn zero_value(axis: Axis4) -> F {
        match axis {
            Axis4::W => F::ONE,
            Axis4::X | Axis4::Y | Axis4::Z => F::ZERO,
        }
    }
}

impl<F: Float> QuaternionOps for Quaternion<F> {}

impl<F: Float> From<Vector4<F>> for Quaternion<F> {
    fn from(v: Vector4<F>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<F: Float> From<Quaternion<F>> for Vector4<F> {
    fn from(q: Quaternion<F>) -> Self {
        Vector4::new(q.x, q.y, q.z, q.w)
    }
}

impl<F: Float> From<na::Quaternion<F>> for Quaternion<F> {
    fn from(q: na::Quaternion<F>) -> Self {
        Self::new(q.i, q.j, q.k, q.w)
    }
}

impl<F: Float> From<na::UnitQuaternion<F>> for Quaternion<F> {
    fn from(q: na::UnitQuaternion<F>) -> Self {
        q.into_inner().into()
    }
}

impl<F: Float> From<Quaternion<F>> for na::Quaternion<F> {
    fn from(q: Quaternion<F>) -> Self {
        na::Quaternion::new(q.w, q.x, q.y, q.z)
    }
}

// SAFETY: `#[repr(C)]` with four fields of the same `Pod` type.
unsafe impl<F: Float + Zeroable> Zeroable for Quaternion<F> {}
unsafe impl<F: Float + Pod> Pod for Quaternion<F> {}

impl_vector_ops!(Quaternion);

impl_binop!(Mul, mul, Quaternion<F>, Quaternion<F>, Quaternion<F>, |a, b| {
    a.multiplied(b)
});

impl_binop_assign!(MulAssign, mul_assign, Quaternion<F>, Quaternion<F>, |a, b| {
    a.multiply(b);
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{axis::Axis3, vector::Vector3};
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn same_rotation(a: &Quaternion<f64>, b: &Quaternion<f64>, epsilon: f64) -> bool {
        abs_diff_eq!(a, b, epsilon = epsilon) || abs_diff_eq!(a, &-b, epsilon = epsilon)
    }

    fn assert_same_rotation(a: &Quaternion<f64>, b: &Quaternion<f64>) {
        assert!(same_rotation(a, b, 1e-12), "{a:?} and {b:?} differ");
    }

    fn axis_quaternion(axis: Axis3, angle: f64) -> Quaternion<f64> {
        let mut unit = Vector3::zeros();
        unit.set(axis, 1.0);
        Quaternion::from_axis_angle(&unit, angle)
    }

    fn rotation_matrix(axis: na::Vector3<f64>, angle: f64) -> na::Matrix4<f64> {
        na::UnitQuaternion::from_axis_angle(&na::Unit::new_normalize(axis), angle).to_homogeneous()
    }

    prop_compose! {
        fn quaternion_strategy(max_abs: f64)(
            x in -max_abs..max_abs,
            y in -max_abs..max_abs,
            z in -max_abs..max_abs,
            w in -max_abs..max_abs,
        ) -> Quaternion<f64> {
            Quaternion::new(x, y, z, w)
        }
    }

    prop_compose! {
        fn rotation_strategy()(
            roll in -PI..PI,
            pitch in -PI..PI,
            yaw in -PI..PI,
        ) -> na::UnitQuaternion<f64> {
            na::UnitQuaternion::from_euler_angles(roll, pitch, yaw)
        }
    }

    proptest! {
        #[test]
        fn normalized_quaternion_has_unit_length(q in quaternion_strategy(1e3)) {
            prop_assume!(q.length() > 1e-6);
            prop_assert!(abs_diff_eq!(q.normalized().length(), 1.0, epsilon = 1e-12));
        }

        #[test]
        fn rotation_matrix_roundtrips_through_quaternion(rotation in rotation_strategy()) {
            let q = Quaternion::from_rotation_matrix(&rotation.to_homogeneous());
            prop_assert!(same_rotation(&q, &rotation.into(), 1e-9));
        }

        #[test]
        fn slerp_stays_on_unit_sphere(
            a in rotation_strategy(),
            b in rotation_strategy(),
            t in 0.0..1.0_f64,
        ) {
            let a = Quaternion::from(a);
            let b = Quaternion::from(b);
            prop_assert!(abs_diff_eq!(a.slerped(&b, t).length(), 1.0, epsilon = 1e-9));
        }

        #[test]
        fn hamilton_product_matches_nalgebra(
            a in quaternion_strategy(10.0),
            b in quaternion_strategy(10.0),
        ) {
            let expected = na::Quaternion::from(a) * na::Quaternion::from(b);
            prop_assert!(abs_diff_eq!(a * b, Quaternion::from(expected), epsilon = 1e-9));
        }
    }

    #[test]
    fn zeroing_all_axes_gives_identity() {
        let q = Quaternion::new(2.0, 3.0, 4.0, 5.0);
        assert_eq!(q.zeroed(Axis4::ALL), Quaternion::identity());
        assert_eq!(q.zeroed(&[Axis4::Y, Axis4::W]), Quaternion::new(2.0, 0.0, 4.0, 1.0));
    }

    #[test]
    fn zeroing_plain_vector4_differs_from_quaternion() {
        let v = Vector4::new(2.0, 3.0, 4.0, 5.0);
        let q = Quaternion::from(v);
        assert_eq!(v.zeroed(Axis4::ALL).w, 0.0);
        assert_eq!(q.zeroed(Axis4::ALL).w, 1.0);
    }

    #[test]
    fn normalizing_zero_quaternion_gives_identity() {
        let q = Quaternion::<f32>::new(0.0, 0.0, 0.0, 0.0);
        assert_eq!(q.normalized(), Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn normalizing_quaternion_with_huge_components_gives_unit_quaternion() {
        let q = Quaternion::<f32>::new(2e19, 0.0, 0.0, 0.0).normalized();
        assert_eq!(q, Quaternion::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(q.length(), 1.0);
    }

    #[test]
    fn default_quaternion_is_identity() {
        assert_eq!(Quaternion::<f64>::default(), Quaternion::identity());
    }

    #[test]
    fn hamilton_product_is_not_commutative() {
        let a = axis_quaternion(Axis3::X, FRAC_PI_2);
        let b = axis_quaternion(Axis3::Y, FRAC_PI_2);
        assert!(!abs_diff_eq!(a * b, b * a, epsilon = 1e-6));
    }

    #[test]
    fn multiply_and_premultiply_order_operands() {
        let a = axis_quaternion(Axis3::X, 0.4);
        let b = axis_quaternion(Axis3::Z, -1.2);

        let mut q = a;
        q.multiply(&b);
        assert_eq!(q, a * b);

        let mut q = a;
        q.premultiply(&b);
        assert_eq!(q, b * a);

        let mut q = a;
        q *= b;
        assert_eq!(q, a.multiplied(&b));
    }

    #[test]
    fn conjugate_undoes_rotation() {
        let q = axis_quaternion(Axis3::Y, 0.7);
        assert_abs_diff_eq!(q * q.conjugated(), Quaternion::identity(), epsilon = 1e-12);
    }

    #[test]
    fn slerp_boundaries_are_exact() {
        let a = Quaternion::new(0.1, 0.2, 0.3, 0.9).normalized();
        let b = Quaternion::new(-0.5, 0.5, 0.5, -0.5);
        assert_eq!(a.slerped(&b, 0.0), a);
        assert_eq!(a.slerped(&b, 1.0), b);
    }

    #[test]
    fn slerp_halfway_gives_half_rotation() {
        let a = Quaternion::identity();
        let b = axis_quaternion(Axis3::Z, FRAC_PI_2);
        assert_same_rotation(&a.slerped(&b, 0.5), &axis_quaternion(Axis3::Z, FRAC_PI_4));
    }

    #[test]
    fn slerp_takes_shorter_arc() {
        let a = Quaternion::identity();
        let b = axis_quaternion(Axis3::Z, FRAC_PI_2);
        let halfway = a.slerped(&-b, 0.5);
        assert_same_rotation(&halfway, &axis_quaternion(Axis3::Z, FRAC_PI_4));
    }

    #[test]
    fn slerp_toward_same_rotation_leaves_quaternion() {
        let a = Quaternion::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a.slerped(&a, 0.3), a);
        assert_eq!(a.slerped(&-a, 0.3), a);
    }

    #[test]
    fn slerp_between_nearly_parallel_quaternions_stays_finite() {
        let w = 1.0 - f64::EPSILON / 2.0;
        let z = (1.0 - w * w).sqrt();
        let a = Quaternion::new(0.0, 0.0, z, w);
        let b = Quaternion::identity();

        let halfway = a.slerped(&b, 0.5);

        assert!(halfway.x.is_finite() && halfway.z.is_finite() && halfway.w.is_finite());
        assert_abs_diff_eq!(halfway.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(halfway.z, 0.5 * z, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_quaternions_works() {
        let a = Quaternion::identity();
        let b = axis_quaternion(Axis3::Z, FRAC_PI_2);
        assert_abs_diff_eq!(a.angle_to(&b), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(b.angle_to(&-b), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(a.angle_to(&a), 0.0);
    }

    #[test]
    fn axis_angle_rotation_has_half_angle_components() {
        let q = Quaternion::from_axis_angle(&Vector3::new(0.0, 1.0, 0.0), PI / 3.0);
        assert_abs_diff_eq!(q, Quaternion::new(0.0, 0.5, 0.0, 0.75_f64.sqrt()), epsilon = 1e-12);
    }

    #[test]
    fn euler_with_zyx_order_matches_nalgebra() {
        let (roll, pitch, yaw) = (0.3, -1.2, 2.5);
        let q = Quaternion::from_euler(&Euler::new(roll, pitch, yaw, EulerOrder::ZYX));
        let expected = na::UnitQuaternion::from_euler_angles(roll, pitch, yaw);
        assert_same_rotation(&q, &expected.into());
    }

    #[test]
    fn euler_rotation_applies_axis_rotations_in_order_letters() {
        let (x, y, z) = (0.4, -0.9, 1.3);
        for &order in EulerOrder::ALL {
            let expected = order
                .axes()
                .iter()
                .map(|&axis| {
                    let angle = match axis {
                        Axis3::X => x,
                        Axis3::Y => y,
                        Axis3::Z => z,
                    };
                    axis_quaternion(axis, angle)
                })
                .fold(Quaternion::identity(), |acc, q| acc * q);

            let q = Quaternion::from_euler(&Euler::new(x, y, z, order));
            assert_same_rotation(&q, &expected);
        }
    }

    #[test]
    fn euler_conversion_depends_on_order() {
        let (x, y, z) = (30.0_f64.to_radians(), 45.0_f64.to_radians(), 60.0_f64.to_radians());
        let rotations: Vec<_> = EulerOrder::ALL
            .iter()
            .map(|&order| Quaternion::from_euler(&Euler::new(x, y, z, order)))
            .collect();

        for (i, a) in rotations.iter().enumerate() {
            for b in &rotations[i + 1..] {
                assert!(!same_rotation(a, b, 1e-6));
            }
        }
    }

    #[test]
    fn identity_matrix_gives_identity_quaternion() {
        let q = Quaternion::<f64>::from_rotation_matrix(&na::Matrix4::identity());
        assert_eq!(q, Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn matrix_conversion_selects_expected_branch() {
        let x = na::Vector3::x();
        let y = na::Vector3::y();
        let z = na::Vector3::z();
        assert_eq!(
            MatrixTraceCase::of(&rotation_matrix(x, 0.3)),
            MatrixTraceCase::PositiveTrace
        );
        assert_eq!(MatrixTraceCase::of(&rotation_matrix(x, PI)), MatrixTraceCase::DominantX);
        assert_eq!(MatrixTraceCase::of(&rotation_matrix(y, PI)), MatrixTraceCase::DominantY);
        assert_eq!(MatrixTraceCase::of(&rotation_matrix(z, PI)), MatrixTraceCase::DominantZ);
    }

    #[test]
    fn matrix_conversion_works_in_every_branch() {
        let cases = [
            (na::Vector3::new(1.0, 2.0, 3.0), 0.3),
            (na::Vector3::x(), PI),
            (na::Vector3::y(), PI),
            (na::Vector3::z(), PI),
            (na::Vector3::new(1.0, 0.1, -0.1), 0.95 * PI),
            (na::Vector3::new(-0.1, 0.2, 1.0), 0.9 * PI),
        ];
        for (axis, angle) in cases {
            let expected = na::UnitQuaternion::from_axis_angle(&na::Unit::new_normalize(axis), angle);
            let q = Quaternion::from_rotation_matrix(&expected.to_homogeneous());
            assert_same_rotation(&q, &expected.into());
        }
    }

    #[test]
    fn rotation_between_unit_vectors_works() {
        let from = Vector3::new(1.0, 0.0, 0.0);
        let to = Vector3::new(0.0, 1.0, 0.0);
        let q = Quaternion::from_unit_vectors(&from, &to);
        assert_same_rotation(&q, &axis_quaternion(Axis3::Z, FRAC_PI_2));
        assert_abs_diff_eq!(from.rotated_by_quaternion(&q), to, epsilon = 1e-12);
    }

    #[test]
    fn rotation_between_opposite_vectors_is_half_turn() {
        for from in [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.6, 0.0, -0.8),
        ] {
            let to = -from;
            let q = Quaternion::from_unit_vectors(&from, &to);
            assert_abs_diff_eq!(q.length(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(from.rotated_by_quaternion(&q), to, epsilon = 1e-12);
        }
    }

    #[test]
    fn quaternion_converts_to_and_from_nalgebra() {
        let q = Quaternion::new(0.1, -0.2, 0.3, 0.9);
        let na_q: na::Quaternion<f64> = q.into();
        assert_eq!(na_q.w, 0.9);
        assert_eq!(na_q.i, 0.1);
        assert_eq!(Quaternion::from(na_q), q);
    }
}
