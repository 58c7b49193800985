//! Four-dimensional vectors.

use super::Vector;
use crate::{axis::Axis4, num::Float};
use bytemuck::{Pod, Zeroable};
use nalgebra as na;
use std::ops::{Index, IndexMut};

/// A 4-dimensional vector. Unlike [`Quaternion`](crate::quaternion::Quaternion),
/// every axis zeroes to zero.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub w: F,
}

impl<F: Float> Vector4<F> {
    pub const fn new(x: F, y: F, z: F, w: F) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zeros() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, F::ZERO)
    }
}

impl<F: Float> Default for Vector4<F> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<F: Float> Index<Axis4> for Vector4<F> {
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

impl<F: Float> IndexMut<Axis4> for Vector4<F> {
    fn index_mut(&mut self, axis: Axis4) -> &mut F {
        match axis {
            Axis4::X => &mut self.x,
            Axis4::Y => &mut self.y,
            Axis4::Z => &mut self.z,
            Axis4::W => &mut self.w,
        }
    }
}

impl<F: Float> Vector for Vector4<F> {
    type Scalar = F;
    type Axis = Axis4;

    fn get(&self, axis: Axis4) -> F {
        self[axis]
    }

    fn set(&mut self, axis: Axis4, value: F) {
        self[axis] = value;
    }
}

impl<F: Float> From<[F; 4]> for Vector4<F> {
    fn from([x, y, z, w]: [F; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<F: Float> From<Vector4<F>> for [F; 4] {
    fn from(v: Vector4<F>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<F: Float> From<na::Vector4<F>> for Vector4<F> {
    fn from(v: na::Vector4<F>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl<F: Float> From<Vector4<F>> for na::Vector4<F> {
    fn from(v: Vector4<F>) -> Self {
        na::Vector4::new(v.x, v.y, v.z, v.w)
    }
}

// SAFETY: `#[repr(C)]` with four fields of the same `Pod` type.
unsafe impl<F: Float + Zeroable> Zeroable for Vector4<F> {}
unsafe impl<F: Float + Pod> Pod for Vector4<F> {}

impl_vector_ops!(Vector4);
