//! Rotations as three angles about the coordinate axes.

use crate::{
    angle::Angle,
    axis::Axis3,
    num::Float,
    vector::Vector,
};
use anyhow::bail;
use std::{fmt, str::FromStr};

/// The sequence in which the three axis rotations of an [`Euler`] are
/// combined. The letters give the order of the factors in the quaternion
/// product, so for [`EulerOrder::XYZ`] the rotation about z is applied to a
/// vector first and the rotation about x last.
#[allow(clippy::upper_case_acronyms)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EulerOrder {
    #[default]
    XYZ,
    YXZ,
    ZXY,
    ZYX,
    YZX,
    XZY,
}

/// Three rotation angles in radians, one per axis, with the order in which
/// to combine them.
///
/// The angles are not wrapped into any range.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub order: EulerOrder,
}

impl EulerOrder {
    pub const ALL: &'static [Self] = &[
        Self::XYZ,
        Self::YXZ,
        Self::ZXY,
        Self::ZYX,
        Self::YZX,
        Self::XZY,
    ];

    /// The axes in the order their letters appear.
    pub const fn axes(self) -> [Axis3; 3] {
        match self {
            Self::XYZ => [Axis3::X, Axis3::Y, Axis3::Z],
            Self::YXZ => [Axis3::Y, Axis3::X, Axis3::Z],
            Self::ZXY => [Axis3::Z, Axis3::X, Axis3::Y],
            Self::ZYX => [Axis3::Z, Axis3::Y, Axis3::X],
            Self::YZX => [Axis3::Y, Axis3::Z, Axis3::X],
            Self::XZY => [Axis3::X, Axis3::Z, Axis3::Y],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::XYZ => "XYZ",
            Self::YXZ => "YXZ",
            Self::ZXY => "ZXY",
            Self::ZYX => "ZYX",
            Self::YZX => "YZX",
            Self::XZY => "XZY",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EulerOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Self::ALL
            .iter()
            .find(|order| s.eq_ignore_ascii_case(order.name()))
        {
            Some(&order) => Ok(order),
            None => bail!("Invalid Euler rotation order: {}", s),
        }
    }
}

impl<F: Float> Euler<F> {
    pub const fn new(x: F, y: F, z: F, order: EulerOrder) -> Self {
        Self { x, y, z, order }
    }

    /// Creates an Euler rotation from angles in any unit.
    pub fn from_angles<A: Angle<F>>(x: A, y: A, z: A, order: EulerOrder) -> Self {
        Self::new(x.radians(), y.radians(), z.radians(), order)
    }

    pub fn with_order(self, order: EulerOrder) -> Self {
        Self { order, ..self }
    }
}

impl<F: Float> Default for Euler<F> {
    fn default() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO, EulerOrder::default())
    }
}

impl<F: Float> Vector for Euler<F> {
    type Scalar = F;
    type Axis = Axis3;

    fn get(&self, axis: Axis3) -> F {
        match axis {
            Axis3::X => self.x,
            Axis3::Y => self.y,
            Axis3::Z => self.z,
        }
    }

    fn set(&mut self, axis: Axis3, value: F) {
        match axis {
            Axis3::X => self.x = value,
            Axis3::Y => self.y = value,
            Axis3::Z => self.z = value,
        }
    }
}
