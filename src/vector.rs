//! Fixed-dimension vectors addressed by named axes.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::{Vector2, Vector2Ops};
pub use vector3::{Vector3, Vector3Ops};
pub use vector4::Vector4;

use crate::{axis::AxisSet, num::Float, scalar};
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::ComplexField;
use std::fmt;

/// A value with one floating point component per axis of [`Self::Axis`].
///
/// Implementors only provide [`get`](Self::get) and [`set`](Self::set).
/// Every other operation is expressed through those two, so any storage
/// layout works as long as the subscript is consistent.
///
/// Operations come in pairs: an in-place form taking `&mut self` and a
/// value-returning form that copies, mutates the copy and returns it.
pub trait Vector: Copy + Default + fmt::Debug {
    /// Element type of the components.
    type Scalar: Float;
    /// Axes addressing the components.
    type Axis: AxisSet;

    /// Returns the component for the given axis.
    fn get(&self, axis: Self::Axis) -> Self::Scalar;

    /// Overwrites the component for the given axis.
    fn set(&mut self, axis: Self::Axis, value: Self::Scalar);

    /// The value an axis takes when it is zeroed. Types for which an all-zero
    /// value is meaningless may override this per axis.
    fn zero_value(_axis: Self::Axis) -> Self::Scalar {
        <Self::Scalar as Float>::ZERO
    }

    /// Creates a vector whose component for each axis is given by `f`.
    fn from_fn(mut f: impl FnMut(Self::Axis) -> Self::Scalar) -> Self {
        let mut vector = Self::default();
        for &axis in Self::Axis::ALL {
            vector.set(axis, f(axis));
        }
        vector
    }

    /// Creates a vector with every component set to `value`.
    fn splat(value: Self::Scalar) -> Self {
        Self::from_fn(|_| value)
    }

    /// Replaces each component with `f` applied to it.
    fn apply(&mut self, mut f: impl FnMut(Self::Scalar) -> Self::Scalar) {
        for &axis in Self::Axis::ALL {
            self.set(axis, f(self.get(axis)));
        }
    }

    fn mapped(&self, f: impl FnMut(Self::Scalar) -> Self::Scalar) -> Self {
        let mut new = *self;
        new.apply(f);
        new
    }

    /// Combines each component with the matching component of `other`.
    fn apply_with(
        &mut self,
        other: &Self,
        mut f: impl FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar,
    ) {
        for &axis in Self::Axis::ALL {
            self.set(axis, f(self.get(axis), other.get(axis)));
        }
    }

    fn add_scalar(&mut self, value: Self::Scalar) {
        self.apply(|c| c + value);
    }

    fn added_scalar(&self, value: Self::Scalar) -> Self {
        let mut new = *self;
        new.add_scalar(value);
        new
    }

    fn sub_scalar(&mut self, value: Self::Scalar) {
        self.apply(|c| c - value);
    }

    fn subbed_scalar(&self, value: Self::Scalar) -> Self {
        let mut new = *self;
        new.sub_scalar(value);
        new
    }

    fn multiply_scalar(&mut self, value: Self::Scalar) {
        self.apply(|c| c * value);
    }

    fn multiplied_scalar(&self, value: Self::Scalar) -> Self {
        let mut new = *self;
        new.multiply_scalar(value);
        new
    }

    /// Divides every component by `value`. Division by zero follows IEEE-754.
    fn divide_scalar(&mut self, value: Self::Scalar) {
        self.apply(|c| c / value);
    }

    fn divided_scalar(&self, value: Self::Scalar) -> Self {
        let mut new = *self;
        new.divide_scalar(value);
        new
    }

    fn add_vector(&mut self, other: &Self) {
        self.apply_with(other, |a, b| a + b);
    }

    fn added_vector(&self, other: &Self) -> Self {
        let mut new = *self;
        new.add_vector(other);
        new
    }

    fn sub_vector(&mut self, other: &Self) {
        self.apply_with(other, |a, b| a - b);
    }

    fn subbed_vector(&self, other: &Self) -> Self {
        let mut new = *self;
        new.sub_vector(other);
        new
    }

    /// Component-wise product.
    fn multiply_vector(&mut self, other: &Self) {
        self.apply_with(other, |a, b| a * b);
    }

    fn multiplied_vector(&self, other: &Self) -> Self {
        let mut new = *self;
        new.multiply_vector(other);
        new
    }

    /// Component-wise quotient.
    fn divide_vector(&mut self, other: &Self) {
        self.apply_with(other, |a, b| a / b);
    }

    fn divided_vector(&self, other: &Self) -> Self {
        let mut new = *self;
        new.divide_vector(other);
        new
    }

    /// Offsets the vector by `offset`. Same as [`add_vector`](Self::add_vector).
    fn translate(&mut self, offset: &Self) {
        self.add_vector(offset);
    }

    fn translated(&self, offset: &Self) -> Self {
        let mut new = *self;
        new.translate(offset);
        new
    }

    /// Negates the components of the given axes and leaves the others.
    fn flip(&mut self, axes: &[Self::Axis]) {
        for &axis in axes {
            self.set(axis, -self.get(axis));
        }
    }

    fn flipped(&self, axes: &[Self::Axis]) -> Self {
        let mut new = *self;
        new.flip(axes);
        new
    }

    /// Sets the components of the given axes to their
    /// [`zero_value`](Self::zero_value).
    fn zero(&mut self, axes: &[Self::Axis]) {
        for &axis in axes {
            self.set(axis, Self::zero_value(axis));
        }
    }

    fn zeroed(&self, axes: &[Self::Axis]) -> Self {
        let mut new = *self;
        new.zero(axes);
        new
    }

    fn dot(&self, other: &Self) -> Self::Scalar {
        Self::Axis::ALL
            .iter()
            .fold(<Self::Scalar as Float>::ZERO, |acc, &axis| {
                acc + self.get(axis) * other.get(axis)
            })
    }

    fn length_squared(&self) -> Self::Scalar {
        self.dot(self)
    }

    fn length(&self) -> Self::Scalar {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length. A vector of exactly zero length
    /// is instead zeroed on all axes, which yields the identity for types
    /// overriding [`zero_value`](Self::zero_value).
    ///
    /// Vectors whose squared length overflows are first scaled down by
    /// their largest component.
    fn normalize(&mut self) {
        if !self.length_squared().is_finite() {
            let largest = Self::Axis::ALL
                .iter()
                .map(|&axis| self.get(axis).abs())
                .fold(<Self::Scalar as Float>::ZERO, |largest, c| {
                    if c > largest { c } else { largest }
                });
            if largest.is_finite() {
                self.divide_scalar(largest);
            }
        }
        let length = self.length();
        if length == <Self::Scalar as Float>::ZERO {
            log::trace!("Normalizing zero-length vector {self:?}, zeroing all axes");
            self.zero(Self::Axis::ALL);
        } else {
            self.multiply_scalar(<Self::Scalar as Float>::ONE / length);
        }
    }

    fn normalized(&self) -> Self {
        let mut new = *self;
        new.normalize();
        new
    }

    /// Rounds each component to the nearest whole number, halfway cases away
    /// from zero.
    fn round(&mut self) {
        self.apply(|c| c.round());
    }

    fn rounded(&self) -> Self {
        let mut new = *self;
        new.round();
        new
    }

    /// Rounds each component to the nearest multiple of `step`.
    fn round_to_nearest(&mut self, step: Self::Scalar) {
        self.apply(|c| scalar::rounded_to_nearest(c, step));
    }

    fn rounded_to_nearest(&self, step: Self::Scalar) -> Self {
        let mut new = *self;
        new.round_to_nearest(step);
        new
    }

    /// Euclidean distance between two vectors.
    fn distance(&self, other: &Self) -> Self::Scalar {
        self.subbed_vector(other).length()
    }

    /// Whether every component matches exactly.
    fn axes_eq(&self, other: &Self) -> bool {
        Self::Axis::ALL
            .iter()
            .all(|&axis| self.get(axis) == other.get(axis))
    }
}

pub(crate) fn axes_abs_diff_eq<V: Vector>(a: &V, b: &V, epsilon: V::Scalar) -> bool {
    V::Axis::ALL
        .iter()
        .all(|&axis| a.get(axis).abs_diff_eq(&b.get(axis), epsilon))
}

pub(crate) fn axes_relative_eq<V: Vector>(
    a: &V,
    b: &V,
    epsilon: V::Scalar,
    max_relative: V::Scalar,
) -> bool {
    V::Axis::ALL.iter().all(|&axis| {
        a.get(axis)
            .relative_eq(&b.get(axis), epsilon, max_relative)
    })
}
