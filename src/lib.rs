//! Axis-addressed vectors and rotation math.
//!
//! Every concrete type implements the [`Vector`] contract through a
//! get/set subscript by named axis, and receives the full set of derived
//! arithmetic from it. Rotations are handled through [`Quaternion`],
//! constructed from [`Euler`] angles, axis and angle, rotation matrices or
//! pairs of unit vectors.

#[macro_use]
mod macros;

pub mod angle;
pub mod axis;
pub mod euler;
pub mod num;
pub mod quaternion;
pub mod scalar;
pub mod spherical;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use axis::{Axis2, Axis3, Axis4, AxisSet};
pub use euler::{Euler, EulerOrder};
pub use nalgebra::Matrix4;
pub use num::{Float, fvec};
pub use quaternion::{Quaternion, QuaternionOps};
pub use spherical::Spherical;
pub use vector::{Vector, Vector2, Vector2Ops, Vector3, Vector3Ops, Vector4};
