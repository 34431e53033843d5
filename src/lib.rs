//! Quaternion algebra over `f64`: construction, the Hamilton product,
//! conjugate, inverse, normalization and rotation of 3D points.

mod complex;
mod matrix;
mod quaternion;
mod rotation;
mod vector;
pub mod error;

pub use crate::complex::Complex;
pub use crate::error::{QuaError, QuaResult};
pub use crate::matrix::Mat3x3;
pub use crate::quaternion::{scale, Operand, QuaInput, Quaternion};
pub use crate::rotation::{rotate, rotate_with};
pub use crate::vector::Vec3;

/// What rotation does with an axis that is not unit length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AxisPolicy {
    /// Use the axis unchanged and log a warning if it is off unit length.
    #[default]
    AsGiven,
    /// Normalize the axis first. A zero axis is an error.
    Normalize,
    /// Reject an axis that is off unit length.
    Require,
}

/// Describes how [`rotate_with`] treats its inputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotationDescriptor {
    pub axis:           AxisPolicy,
    /// Allowed deviation of `|axis|` from 1 before the axis counts as
    /// non-unit.
    pub unit_tolerance: f64,
}
impl Default for RotationDescriptor {
    fn default() -> Self {
        Self {
            axis:           AxisPolicy::default(),
            unit_tolerance: 1e-9,
        }
    }
}
