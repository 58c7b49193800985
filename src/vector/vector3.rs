//! Three-dimensional vectors.

use super::Vector;
use crate::{
    axis::{Axis3, AxisSet},
    euler::Euler,
    num::Float,
    quaternion::{Quaternion, QuaternionOps},
    scalar,
};
use bytemuck::{Pod, Zeroable};
use nalgebra::{self as na, ComplexField};
use std::ops::{Index, IndexMut};

/// A 3-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

/// Operations for vectors in 3D space, including application of rotations.
pub trait Vector3Ops: Vector<Axis = Axis3> {
    fn xyz(&self) -> (Self::Scalar, Self::Scalar, Self::Scalar) {
        (self.get(Axis3::X), self.get(Axis3::Y), self.get(Axis3::Z))
    }

    fn set_xyz(&mut self, x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) {
        self.set(Axis3::X, x);
        self.set(Axis3::Y, y);
        self.set(Axis3::Z, z);
    }

    /// Replaces the vector with its right-handed cross product with `other`.
    fn cross(&mut self, other: &Self) {
        let (ax, ay, az) = self.xyz();
        let (bx, by, bz) = other.xyz();
        self.set_xyz(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx);
    }

    fn crossed(&self, other: &Self) -> Self {
        let mut new = *self;
        new.cross(other);
        new
    }

    /// Moves the vector toward `target` by the fraction `alpha`. Values of
    /// `alpha` outside `[0, 1]` extrapolate.
    fn lerp(&mut self, target: &Self, alpha: Self::Scalar) {
        self.apply_with(target, |a, b| a + (b - a) * alpha);
    }

    fn lerped(&self, target: &Self, alpha: Self::Scalar) -> Self {
        let mut new = *self;
        new.lerp(target, alpha);
        new
    }

    /// Replaces the vector with its projection onto `onto`. Projecting onto
    /// a zero vector gives the zero vector.
    fn project(&mut self, onto: &Self) {
        let denom = onto.length_squared();
        if denom == <Self::Scalar as Float>::ZERO {
            log::trace!("Projecting {self:?} onto zero vector, result is zero");
            self.zero(Axis3::ALL);
            return;
        }
        let factor = onto.dot(self) / denom;
        *self = onto.multiplied_scalar(factor);
    }

    fn projected(&self, onto: &Self) -> Self {
        let mut new = *self;
        new.project(onto);
        new
    }

    /// Angle in radians between this vector and `other`, in `[0, pi]`.
    /// When either vector has zero length the vectors are treated as
    /// orthogonal.
    fn angle_to(&self, other: &Self) -> Self::Scalar {
        let denom = self.length() * other.length();
        if denom == <Self::Scalar as Float>::ZERO {
            log::trace!("Angle between {self:?} and {other:?} undefined, using pi/2");
            return <Self::Scalar as Float>::FRAC_PI_2;
        }
        let cos_theta = self.dot(other) / denom;
        scalar::clamp(
            cos_theta,
            <Self::Scalar as Float>::NEG_ONE,
            <Self::Scalar as Float>::ONE,
        )
        .acos()
    }

    /// Rotates the vector by the given unit quaternion.
    fn rotate_by_quaternion<Q>(&mut self, rotation: &Q)
    where
        Q: QuaternionOps<Scalar = Self::Scalar>,
    {
        let (x, y, z) = self.xyz();
        let (qx, qy, qz, qw) = rotation.xyzw();

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * conj(q)
        self.set_xyz(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
        );
    }

    fn rotated_by_quaternion<Q>(&self, rotation: &Q) -> Self
    where
        Q: QuaternionOps<Scalar = Self::Scalar>,
    {
        let mut new = *self;
        new.rotate_by_quaternion(rotation);
        new
    }

    /// Rotates the vector by `angle` radians about the unit vector `axis`.
    fn rotate_by_axis_angle(&mut self, axis: &Self, angle: Self::Scalar) {
        let rotation = Quaternion::<Self::Scalar>::from_axis_angle(axis, angle);
        self.rotate_by_quaternion(&rotation);
    }

    fn rotated_by_axis_angle(&self, axis: &Self, angle: Self::Scalar) -> Self {
        let mut new = *self;
        new.rotate_by_axis_angle(axis, angle);
        new
    }

    fn rotate_by_euler(&mut self, euler: &Euler<Self::Scalar>) {
        let rotation = Quaternion::<Self::Scalar>::from_euler(euler);
        self.rotate_by_quaternion(&rotation);
    }

    fn rotated_by_euler(&self, euler: &Euler<Self::Scalar>) -> Self {
        let mut new = *self;
        new.rotate_by_euler(euler);
        new
    }

    /// Transforms the vector as a point by a homogeneous matrix acting on
    /// column vectors, including the division by the resulting `w`.
    fn transform_by_matrix(&mut self, matrix: &na::Matrix4<Self::Scalar>) {
        let m = matrix;
        let (x, y, z) = self.xyz();
        let w = <Self::Scalar as Float>::ONE / (m.m41 * x + m.m42 * y + m.m43 * z + m.m44);
        self.set_xyz(
            (m.m11 * x + m.m12 * y + m.m13 * z + m.m14) * w,
            (m.m21 * x + m.m22 * y + m.m23 * z + m.m24) * w,
            (m.m31 * x + m.m32 * y + m.m33 * z + m.m34) * w,
        );
    }

    fn transformed_by_matrix(&self, matrix: &na::Matrix4<Self::Scalar>) -> Self {
        let mut new = *self;
        new.transform_by_matrix(matrix);
        new
    }
}

impl<F: Float> Vector3<F> {
    pub const fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    pub const fn zeros() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO)
    }

    pub const fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO)
    }

    pub const fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE, F::ZERO)
    }

    pub const fn unit_z() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ONE)
    }
}

impl<F: Float> Default for Vector3<F> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<F: Float> Index<Axis3> for Vector3<F> {
    type Output = F;

    fn index(&self, axis: Axis3) -> &F {
        match axis {
            Axis3::X => &self.x,
            Axis3::Y => &self.y,
            Axis3::Z => &self.z,
        }
    }
}

impl<F: Float> IndexMut<Axis3> for Vector3<F> {
    fn index_mut(&mut self, axis: Axis3) -> &mut F {
        match axis {
            Axis3::X => &mut self.x,
            Axis3::Y => &mut self.y,
            Axis3::Z => &mut self.z,
        }
    }
}

impl<F: Float> Vector for Vector3<F> {
    type Scalar = F;
    type Axis = Axis3;

    fn get(&self, axis: Axis3) -> F {
        self[axis]
    }

    fn set(&mut self, axis: Axis3, value: F) {
        self[axis] = value;
    }
}

impl<F: Float> Vector3Ops for Vector3<F> {}

impl<F: Float> From<[F; 3]> for Vector3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<F: Float> From<Vector3<F>> for [F; 3] {
    fn from(v: Vector3<F>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<F: Float> From<na::Vector3<F>> for Vector3<F> {
    fn from(v: na::Vector3<F>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<F: Float> From<Vector3<F>> for na::Vector3<F> {
    fn from(v: Vector3<F>) -> Self {
        na::Vector3::new(v.x, v.y, v.z)
    }
}

impl<F: Float> From<na::Point3<F>> for Vector3<F> {
    fn from(p: na::Point3<F>) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

// SAFETY: `#[repr(C)]` with three fields of the same `Pod` type, so there is
// no padding and every bit pattern is valid.
unsafe impl<F: Float + Zeroable> Zeroable for Vector3<F> {}
unsafe impl<F: Float + Pod> Pod for Vector3<F> {}

impl_vector_ops!(Vector3);
