use approx::{assert_abs_diff_eq, assert_relative_eq};
use cgmath::{Deg, Rotation3};

use quaternionic::{rotate, Complex, QuaError, QuaInput, Quaternion, Vec3};

const EPS: f64 = 1e-12;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(1.0, 2.0, 3.0, 4.0),
        Quaternion::new(-0.5, 0.25, -7.0, 1.5),
        Quaternion::new(0.0, 0.0, 0.0, 3.0),
        Quaternion::new(10.0, -1.0, 0.1, 0.0),
        Quaternion::new(0.3, 0.3, -0.3, 0.3),
        Quaternion::i(),
    ]
}

fn assert_qua_eq(a: Quaternion, b: Quaternion) {
    assert!(a.approx_eq(&b, EPS), "{a} != {b}");
}

#[test]
fn additive_identity_and_inverse() {
    init();
    for q in samples() {
        assert_eq!(q + Quaternion::zero(), q);
        assert_eq!(q + (-1.0) * q, Quaternion::zero());
        assert_eq!(q - q, Quaternion::zero());
    }
}

#[test]
fn multiplicative_identity() {
    init();
    for q in samples() {
        assert_eq!(q * Quaternion::one(), q);
        assert_eq!(Quaternion::one() * q, q);
    }
}

#[test]
fn multiplication_is_not_commutative() {
    init();
    assert_eq!(Quaternion::i() * Quaternion::j(), Quaternion::k());
    assert_eq!(Quaternion::j() * Quaternion::i(), Quaternion::new(0.0, 0.0, 0.0, -1.0));
}

#[test]
fn multiplication_is_associative() {
    init();
    let qs = samples();
    for p in &qs {
        for q in &qs {
            for r in &qs {
                let lhs = (*p * *q) * *r;
                let rhs = *p * (*q * *r);
                assert!(lhs.approx_eq(&rhs, 1e-9), "{lhs} != {rhs}");
            }
        }
    }
}

#[test]
fn hamilton_product_matches_cgmath() {
    init();
    for p in samples() {
        for q in samples() {
            let cp: cgmath::Quaternion<f64> = p.into();
            let cq: cgmath::Quaternion<f64> = q.into();
            assert_qua_eq(p * q, Quaternion::from(cp * cq));
        }
    }
}

#[test]
fn inverse_round_trip() {
    init();
    for q in samples() {
        let inv = q.inverse().unwrap();
        assert_qua_eq(q * inv, Quaternion::one());
        assert_qua_eq(inv * q, Quaternion::one());
        assert_qua_eq((q / q).unwrap(), Quaternion::one());
    }
}

#[test]
fn norm_is_multiplicative() {
    init();
    for p in samples() {
        for q in samples() {
            assert_relative_eq!((p * q).norm(), p.norm() * q.norm(), max_relative = 1e-12);
        }
    }
}

#[test]
fn normalization() {
    init();
    for q in samples() {
        let n = q.normalize().unwrap();
        assert_abs_diff_eq!(n.abs(), 1.0, epsilon = EPS);
        assert!(n.is_unit(EPS));

        let mut m = q;
        let same = *m.normalize_mut().unwrap();
        assert_eq!(same, n);
        assert_eq!(m, n);
    }
    assert_eq!(Quaternion::zero().normalize(), Err(QuaError::DivisionByZero("normalize")));
}

#[test]
fn conjugate_is_an_involution() {
    init();
    for q in samples() {
        assert_eq!(q.conjugate().conjugate(), q);
        assert_qua_eq((q * q.conjugate()).conjugate(), q * q.conjugate());
    }
}

#[test]
fn construction_equivalence() {
    init();
    let a = Quaternion::build(QuaInput::ScalarVector(1.0, Vec3::new(2.0, 3.0, 4.0))).unwrap();
    let b = Quaternion::build(QuaInput::Components(1.0, 2.0, 3.0, 4.0)).unwrap();
    let c = Quaternion::build(QuaInput::Sequence(vec![1.0, 2.0, 3.0, 4.0])).unwrap();
    let d = Quaternion::build(QuaInput::ComplexPair(
        Complex::new(1.0, 2.0),
        Complex::new(3.0, 4.0),
    ))
    .unwrap();

    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(c, d);
    assert_eq!(a.to_string(), "Qua(1.0; [2.0, 3.0, 4.0])");
}

#[test]
fn division_by_zero_quaternion() {
    init();
    for q in samples() {
        assert_eq!(q / Quaternion::zero(), Err(QuaError::DivisionByZero("inverse")));
        assert_eq!(q.checked_div(Quaternion::zero()), Err(QuaError::DivisionByZero("inverse")));
    }
}

#[test]
fn rotation_quarter_turn() {
    init();
    let p = rotate(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0), 90.0).unwrap();
    assert_abs_diff_eq!(p.x, 0.0, epsilon = EPS);
    assert_abs_diff_eq!(p.y, 1.0, epsilon = EPS);
    assert_abs_diff_eq!(p.z, 0.0, epsilon = EPS);
}

#[test]
fn rotation_of_zero_vector() {
    init();
    let axis = Vec3::new(0.6, 0.0, 0.8);
    for angle in [0.0, 12.5, 90.0, 180.0, 359.0] {
        assert_eq!(rotate(Vec3::zero(), axis, angle).unwrap(), Vec3::zero());
    }
}

#[test]
fn rotation_matches_cgmath() {
    init();
    let axis = Vec3::new(1.0, -2.0, 2.0).normalized().unwrap();
    let point = Vec3::new(0.5, 4.0, -3.0);

    for angle in [15.0, 90.0, 133.0, -60.0] {
        let ours = rotate(point, axis, angle).unwrap();

        let rotor: cgmath::Quaternion<f64> =
            cgmath::Quaternion::from_axis_angle(cgmath::Vector3::<f64>::from(axis), Deg(angle));
        let theirs = Vec3::from(rotor * cgmath::Vector3::<f64>::from(point));

        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-10);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-10);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-10);
    }
}

#[test]
fn rotor_matches_cgmath() {
    init();
    let axis = Vec3::new(0.0, 0.6, -0.8);
    let ours = Quaternion::from_axis_angle(axis, 48.0);
    let rotor: cgmath::Quaternion<f64> =
        cgmath::Quaternion::from_axis_angle(cgmath::Vector3::<f64>::from(axis), Deg(48.0));
    let theirs = Quaternion::from(rotor);
    assert_qua_eq(ours, theirs);
}

fn extreme_samples() -> Vec<Quaternion> {
    vec![
        Quaternion::new(1e-160, 2e-160, 0.0, -1e-160),
        Quaternion::new(0.0, 0.0, 1e-170, 0.0),
        Quaternion::new(1e200, -3e200, 1e199, 0.0),
        Quaternion::new(f64::MAX, 0.0, 0.0, -f64::MAX),
    ]
}

#[test]
fn inverse_round_trip_at_extreme_magnitudes() {
    init();
    for q in extreme_samples() {
        let inv = q.inverse().unwrap();
        assert!(inv.to_array().iter().all(|c| c.is_finite()), "{q} -> {inv}");
        assert_qua_eq(q * inv, Quaternion::one());
        assert_qua_eq(inv * q, Quaternion::one());
    }
}

#[test]
fn normalization_at_extreme_magnitudes() {
    init();
    for q in extreme_samples() {
        let n = q.normalize().unwrap();
        assert_abs_diff_eq!(n.abs(), 1.0, epsilon = EPS);
        assert_eq!(n.csgn(), q.csgn());
    }
}

#[test]
fn division_by_tiny_scalar() {
    init();
    let q = (Quaternion::new(1e-300, 0.0, 0.0, 0.0) / 1e-310).unwrap();
    assert_relative_eq!(q.s, 1e10, max_relative = 1e-9);
    assert_eq!(q.imag(), Vec3::zero());
}

#[test]
fn rounding_digit_boundary() {
    init();
    let q = Quaternion::new(1234.5, -0.125, 3.0, 7.0);
    assert_eq!(q.round(u32::MAX), q);
    assert_eq!(q.round(309), q);
    assert_eq!(q.round(2), Quaternion::new(1234.5, -0.13, 3.0, 7.0));
}
