//! Named axes of fixed-dimension vectors.

use anyhow::bail;
use std::{fmt, str::FromStr};

/// A closed, ordered set of axis names for one vector dimension.
pub trait AxisSet: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every axis of the dimension, in order.
    const ALL: &'static [Self];

    /// The number of axes in the set.
    const DIMENSION: usize = Self::ALL.len();

    /// The position of the axis within [`Self::ALL`].
    fn index(self) -> usize;

    /// The lowercase name of the axis.
    fn name(self) -> &'static str;
}

/// Axes of a 2-dimensional vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis2 {
    X = 0,
    Y = 1,
}

/// Axes of a 3-dimensional vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis3 {
    X = 0,
    Y = 1,
    Z = 2,
}

/// Axes of a 4-dimensional vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis4 {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
}

macro_rules! impl_axis_set {
    ($axis:ident, $dim:literal, [$($variant:ident => $name:literal),+]) => {
        impl AxisSet for $axis {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $axis {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $axis {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> anyhow::Result<Self> {
                for &axis in Self::ALL {
                    if s.eq_ignore_ascii_case(axis.name()) {
                        return Ok(axis);
                    }
                }
                bail!("Invalid axis for {}D vector: {}", $dim, s)
            }
        }
    };
}

impl_axis_set!(Axis2, 2, [X => "x", Y => "y"]);
impl_axis_set!(Axis3, 3, [X => "x", Y => "y", Z => "z"]);
impl_axis_set!(Axis4, 4, [X => "x", Y => "y", Z => "z", W => "w"]);
