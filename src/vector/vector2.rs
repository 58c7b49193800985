//! Two-dimensional vectors.

use super::Vector;
use crate::{angle::Angle, axis::Axis2, num::Float};
use bytemuck::{Pod, Zeroable};
use nalgebra as na;
use std::ops::{Index, IndexMut};

/// A 2-dimensional vector.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2<F: Float> {
    pub x: F,
    pub y: F,
}

/// Operations only meaningful for vectors in the plane.
pub trait Vector2Ops: Vector<Axis = Axis2> {
    fn xy(&self) -> (Self::Scalar, Self::Scalar) {
        (self.get(Axis2::X), self.get(Axis2::Y))
    }

    fn set_xy(&mut self, x: Self::Scalar, y: Self::Scalar) {
        self.set(Axis2::X, x);
        self.set(Axis2::Y, y);
    }

    /// Rotates the vector counterclockwise by `angle` about `origin`.
    fn rotate_about<A: Angle<Self::Scalar>>(&mut self, angle: A, origin: &Self) {
        let (x, y) = self.subbed_vector(origin).xy();
        let (sin, cos) = angle.sin_cos();
        self.set_xy(x * cos - y * sin, x * sin + y * cos);
        self.translate(origin);
    }

    fn rotated_about<A: Angle<Self::Scalar>>(&self, angle: A, origin: &Self) -> Self {
        let mut new = *self;
        new.rotate_about(angle, origin);
        new
    }
}

impl<F: Float> Vector2<F> {
    pub const fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    pub const fn zeros() -> Self {
        Self::new(F::ZERO, F::ZERO)
    }

    pub const fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO)
    }

    pub const fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE)
    }
}

impl<F: Float> Default for Vector2<F> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<F: Float> Index<Axis2> for Vector2<F> {
    type Output = F;

    fn index(&self, axis: Axis2) -> &F {
        match axis {
            Axis2::X => &self.x,
            Axis2::Y => &self.y,
        }
    }
}

impl<F: Float> IndexMut<Axis2> for Vector2<F> {
    fn index_mut(&mut self, axis: Axis2) -> &mut F {
        match axis {
            Axis2::X => &mut self.x,
            Axis2::Y => &mut self.y,
        }
    }
}

impl<F: Float> Vector for Vector2<F> {
    type Scalar = F;
    type Axis = Axis2;

    fn get(&self, axis: Axis2) -> F {
        self[axis]
    }

    fn set(&mut self, axis: Axis2, value: F) {
        self[axis] = value;
    }
}

impl<F: Float> Vector2Ops for Vector2<F> {}

impl<F: Float> From<[F; 2]> for Vector2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<Vector2<F>> for [F; 2] {
    fn from(v: Vector2<F>) -> Self {
        [v.x, v.y]
    }
}

impl<F: Float> From<na::Vector2<F>> for Vector2<F> {
    fn from(v: na::Vector2<F>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<F: Float> From<Vector2<F>> for na::Vector2<F> {
    fn from(v: Vector2<F>) -> Self {
        na::Vector2::new(v.x, v.y)
    }
}

// SAFETY: `Vector2` is `#[repr(C)]` with two fields of the same `Pod` type,
// so it has no padding and every bit pattern is valid.
unsafe impl<F: Float + Zeroable> Zeroable for Vector2<F> {}
unsafe impl<F: Float + Pod> Pod for Vector2<F> {}

impl_vector_ops!(Vector2);
