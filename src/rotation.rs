use std::f64::consts::PI;

use crate::error::{QuaError, QuaResult};
use crate::quaternion::Quaternion;
use crate::vector::Vec3;
use crate::{AxisPolicy, RotationDescriptor};

impl Quaternion {
    /// Rotor for a rotation of `angle` degrees around `axis`.
    /// The axis is used as given; a non-unit axis gives a non-unit rotor.
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let half = (angle * PI / 180.0) / 2.0;
        let (sin, cos) = half.sin_cos();
        Self::from_scalar_vector(cos, axis * sin)
    }
}

/// Rotates `point` by `angle` degrees around `axis` with the sandwich
/// product `r * p * r⁻¹`.
///
/// The axis is expected to be unit length and is not normalized here.
/// Use [`rotate_with`] to pick a different [`AxisPolicy`].
pub fn rotate(point: Vec3, axis: Vec3, angle: f64) -> QuaResult<Vec3> {
    rotate_with(&RotationDescriptor::default(), point, axis, angle)
}

pub fn rotate_with(
    desc: &RotationDescriptor,
    point: Vec3,
    axis: Vec3,
    angle: f64,
) -> QuaResult<Vec3> {
    let off_unit = (axis.len() - 1.0).abs() > desc.unit_tolerance;

    let axis = match desc.axis {
        AxisPolicy::AsGiven => {
            if off_unit {
                log::warn!("rotation axis {axis} is not unit length (|axis| = {})", axis.len());
            }
            axis
        }
        AxisPolicy::Normalize => axis.normalized()?,
        AxisPolicy::Require => {
            if off_unit {
                return Err(QuaError::invalid(format!(
                    "rotation axis {axis} is not unit length"
                )));
            }
            axis
        }
    };

    Quaternion::from_axis_angle(axis, angle).rotate_vector(point)
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-12;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = EPS);
        assert_abs_diff_eq!(a.y, b.y, epsilon = EPS);
        assert_abs_diff_eq!(a.z, b.z, epsilon = EPS);
    }

    #[test]
    fn quarter_turn_about_z() {
        init();
        let p = rotate(Vec3::unit_x(), Vec3::unit_z(), 90.0).unwrap();
        assert_vec_eq(p, Vec3::unit_y());
    }

    #[test]
    fn half_turn_about_y() {
        init();
        let p = rotate(Vec3::new(1.0, 2.0, 3.0), Vec3::unit_y(), 180.0).unwrap();
        assert_vec_eq(p, Vec3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn negative_angle_undoes_rotation() {
        init();
        let axis = Vec3::new(1.0, 1.0, 1.0).normalized().unwrap();
        let p = Vec3::new(0.3, -2.0, 5.0);
        let there = rotate(p, axis, 37.0).unwrap();
        let back = rotate(there, axis, -37.0).unwrap();
        assert_vec_eq(back, p);
    }

    #[test]
    fn third_turn_about_diagonal_cycles_axes() {
        init();
        let axis = Vec3::new(1.0, 1.0, 1.0).normalized().unwrap();
        assert_vec_eq(rotate(Vec3::unit_x(), axis, 120.0).unwrap(), Vec3::unit_y());
        assert_vec_eq(rotate(Vec3::unit_y(), axis, 120.0).unwrap(), Vec3::unit_z());
    }

    #[test]
    fn zero_point_stays_put() {
        init();
        for angle in [0.0, 45.0, 90.0, 270.0, -33.0] {
            let p = rotate(Vec3::zero(), Vec3::unit_x(), angle).unwrap();
            assert_eq!(p, Vec3::zero());
        }
    }

    #[test]
    fn length_is_preserved() {
        init();
        let axis = Vec3::new(0.0, 3.0, 4.0).normalized().unwrap();
        let p = Vec3::new(2.0, -1.0, 7.0);
        let q = rotate(p, axis, 71.5).unwrap();
        assert_abs_diff_eq!(q.len(), p.len(), epsilon = EPS);
    }

    #[test]
    fn axis_policies() {
        init();
        let long_z = Vec3::new(0.0, 0.0, 2.0);

        let normalize = RotationDescriptor {
            axis: AxisPolicy::Normalize,
            ..Default::default()
        };
        let p = rotate_with(&normalize, Vec3::unit_x(), long_z, 90.0).unwrap();
        assert_vec_eq(p, Vec3::unit_y());
        assert_eq!(
            rotate_with(&normalize, Vec3::unit_x(), Vec3::zero(), 90.0),
            Err(QuaError::DivisionByZero("vector normalization"))
        );

        let require = RotationDescriptor {
            axis: AxisPolicy::Require,
            ..Default::default()
        };
        assert!(matches!(
            rotate_with(&require, Vec3::unit_x(), long_z, 90.0),
            Err(QuaError::InvalidArgument(_))
        ));
        assert!(rotate_with(&require, Vec3::unit_x(), Vec3::unit_z(), 90.0).is_ok());
    }

    #[test]
    fn non_unit_axis_is_used_as_given() {
        init();
        // The sandwich product cancels the rotor's scale, but the angle is
        // distorted because sin/cos were taken before scaling.
        let as_given = rotate(Vec3::unit_x(), Vec3::new(0.0, 0.0, 2.0), 90.0).unwrap();
        let unit = rotate(Vec3::unit_x(), Vec3::unit_z(), 90.0).unwrap();
        assert!((as_given - unit).len() > 1e-3);
    }

    #[test]
    fn rotor_matches_matrix() {
        init();
        let axis = Vec3::new(-2.0, 1.0, 0.5).normalized().unwrap();
        let rotor = Quaternion::from_axis_angle(axis, 63.0);
        let p = Vec3::new(4.0, 0.0, -1.0);

        let by_matrix = crate::matrix::Mat3x3::from(rotor) * p;
        assert_vec_eq(rotor.rotate_vector(p).unwrap(), by_matrix);
    }
}
