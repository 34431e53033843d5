use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div};
use std::fmt;

use crate::complex::Complex;
use crate::error::{QuaError, QuaResult};
use crate::matrix::Mat3x3;
use crate::vector::{Vec3, round_to};

/// A quaternion `s + v.x·i + v.y·j + v.z·k`.
///
/// Every arithmetic operation returns a new value; `normalize_mut` is the
/// only method that rewrites the receiver. Equality is exact component
/// equality with no tolerance, so results that went through `sqrt` or a
/// division should be compared with [`Quaternion::approx_eq`].
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub s: f64,
    pub v: Vec3,
}

/// The shapes a quaternion can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum QuaInput {
    Components(f64, f64, f64, f64),
    ScalarVector(f64, Vec3),
    /// Scalar plus a vector part of unchecked length.
    ScalarSlice(f64, Vec<f64>),
    /// All four components in order, unchecked length.
    Sequence(Vec<f64>),
    /// `z1 = a + b·i`, `z2 = c + d·i`.
    ComplexPair(Complex, Complex),
    Matrix(Mat3x3),
    /// Right ascension, declination and roll in degrees.
    Euler(f64, f64, f64),
}

/// Right-hand side of the checked operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Qua(Quaternion),
}
impl From<f64> for Operand {
    fn from(k: f64) -> Self {
        Self::Scalar(k)
    }
}
impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Self {
        Self::Qua(q)
    }
}

impl Quaternion {
    pub const fn new(s: f64, xi: f64, yj: f64, zk: f64) -> Self {
        Self {
            s,
            v: Vec3::new(xi, yj, zk),
        }
    }

    pub const fn from_scalar_vector(s: f64, v: Vec3) -> Self {
        Self { s, v }
    }

    pub fn from_scalar_slice(s: f64, v: &[f64]) -> QuaResult<Self> {
        Ok(Self::from_scalar_vector(s, Vec3::from_slice(v)?))
    }

    pub fn from_slice(values: &[f64]) -> QuaResult<Self> {
        match *values {
            [a, b, c, d] => Ok(Self::new(a, b, c, d)),
            _ => Err(QuaError::invalid(format!(
                "expected 4 quaternion components, got {}",
                values.len()
            ))),
        }
    }

    /// `(z1.re, z1.im, z2.re, z2.im)`.
    pub const fn from_complex(z1: Complex, z2: Complex) -> Self {
        Self::new(z1.re, z1.im, z2.re, z2.im)
    }

    /// Not supported; always fails with `NotImplemented`.
    pub fn from_matrix(_mat: Mat3x3) -> QuaResult<Self> {
        Err(QuaError::NotImplemented("rotation matrix"))
    }

    /// Not supported; always fails with `NotImplemented`.
    pub fn from_euler(_ra: f64, _dec: f64, _roll: f64) -> QuaResult<Self> {
        Err(QuaError::NotImplemented("euler angles"))
    }

    pub fn build(input: QuaInput) -> QuaResult<Self> {
        match input {
            QuaInput::Components(a, b, c, d) => Ok(Self::new(a, b, c, d)),
            QuaInput::ScalarVector(s, v) => Ok(Self::from_scalar_vector(s, v)),
            QuaInput::ScalarSlice(s, v) => Self::from_scalar_slice(s, &v),
            QuaInput::Sequence(values) => Self::from_slice(&values),
            QuaInput::ComplexPair(z1, z2) => Ok(Self::from_complex(z1, z2)),
            QuaInput::Matrix(mat) => Self::from_matrix(mat),
            QuaInput::Euler(ra, dec, roll) => Self::from_euler(ra, dec, roll),
        }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Multiplicative identity.
    pub const fn one() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub const fn i() -> Self {
        Self::new(0.0, 1.0, 0.0, 0.0)
    }

    pub const fn j() -> Self {
        Self::new(0.0, 0.0, 1.0, 0.0)
    }

    pub const fn k() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn real(&self) -> f64 {
        self.s
    }

    pub fn scalar(&self) -> f64 {
        self.real()
    }

    pub fn re(&self) -> f64 {
        self.real()
    }

    pub fn real_part(&self) -> f64 {
        self.real()
    }

    /// The vector part, returned by value.
    pub fn imag(&self) -> Vec3 {
        self.v
    }

    pub fn vector(&self) -> Vec3 {
        self.imag()
    }

    pub fn im(&self) -> Vec3 {
        self.imag()
    }

    pub fn imaginary(&self) -> Vec3 {
        self.imag()
    }

    pub fn imaginary_part(&self) -> Vec3 {
        self.imag()
    }

    pub fn i_part(&self) -> f64 {
        self.v.x
    }

    pub fn j_part(&self) -> f64 {
        self.v.y
    }

    pub fn k_part(&self) -> f64 {
        self.v.z
    }

    pub fn norm_imag(&self) -> f64 {
        self.v.len_sq()
    }

    pub fn abs_imag(&self) -> f64 {
        self.norm_imag().sqrt()
    }

    /// Angle to the real axis, in `[0, π]`.
    pub fn arg(&self) -> f64 {
        self.abs_imag().atan2(self.s)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.s, self.v.x, self.v.y, self.v.z]
    }

    /// Splits into `(a + b·i, c + d·i)`.
    pub fn to_complex(self) -> (Complex, Complex) {
        (Complex::new(self.s, self.v.x), Complex::new(self.v.y, self.v.z))
    }

    /// Four-component inner product.
    pub fn dot(&self, other: &Quaternion) -> f64 {
        self.s * other.s + self.v.dot(other.v)
    }

    /// Squared magnitude.
    pub fn norm(&self) -> f64 {
        self.dot(self)
    }

    /// `sqrt(norm)`, rescaled by the largest component when the squares
    /// overflow or underflow.
    pub fn magnitude(&self) -> f64 {
        let norm = self.norm();
        if norm.is_normal() {
            return norm.sqrt();
        }
        let max = self.max_abs();
        if max == 0.0 || !max.is_finite() {
            return norm.sqrt();
        }
        max * self.div_components(max).norm().sqrt()
    }

    /// Largest absolute component.
    fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0, |max: f64, c| max.max(c.abs()))
    }

    fn div_components(&self, k: f64) -> Self {
        Self::from_scalar_vector(self.s / k, self.v / k)
    }

    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    pub fn conjugate(&self) -> Self {
        Self::from_scalar_vector(self.s, -self.v)
    }

    /// `conjugate / norm`. Components are first divided by the largest
    /// one, so only the zero quaternion fails.
    pub fn inverse(&self) -> QuaResult<Self> {
        let max = self.max_abs();
        if max == 0.0 {
            return Err(QuaError::div_zero("inverse"));
        }
        let unit = self.div_components(max);
        Ok(unit.conjugate().div_components(unit.norm()).div_components(max))
    }

    /// `self / magnitude`. Fails only for the zero quaternion.
    pub fn normalize(&self) -> QuaResult<Self> {
        let max = self.max_abs();
        if max == 0.0 {
            return Err(QuaError::div_zero("normalize"));
        }
        let unit = self.div_components(max);
        Ok(unit.div_components(unit.norm().sqrt()))
    }

    /// Normalizes in place. The receiver is untouched on failure.
    pub fn normalize_mut(&mut self) -> QuaResult<&mut Self> {
        *self = self.normalize()?;
        Ok(self)
    }

    pub fn is_unit(&self, eps: f64) -> bool {
        (self.magnitude() - 1.0).abs() <= eps
    }

    /// Sign of the scalar part: `Some(0)` for the zero quaternion,
    /// `Some(1)`/`Some(-1)` for a positive/negative scalar.
    ///
    /// A zero scalar with a non-zero vector part has no defined sign and
    /// yields `None`.
    pub fn csgn(&self) -> Option<i8> {
        if self.s == 0.0 {
            if self.v.is_zero() { Some(0) } else { None }
        }
        else if self.s > 0.0 {
            Some(1)
        }
        else {
            Some(-1)
        }
    }

    /// Rounds every component to `digits` fractional digits.
    pub fn round(&self, digits: u32) -> Self {
        Self::from_scalar_vector(round_to(self.s, digits), self.v.round(digits))
    }

    /// Component-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Quaternion, eps: f64) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Applies `self * (0, v) * self⁻¹` and returns the vector part.
    pub fn rotate_vector(&self, v: Vec3) -> QuaResult<Vec3> {
        let p = Self::from_scalar_vector(0.0, v);
        Ok((*self * p * self.inverse()?).imag())
    }

    pub fn checked_eq(&self, other: impl Into<Operand>) -> QuaResult<bool> {
        match other.into() {
            Operand::Qua(q) => Ok(*self == q),
            Operand::Scalar(_) => Err(QuaError::invalid("Wrong type given to compare")),
        }
    }

    pub fn checked_add(&self, other: impl Into<Operand>) -> QuaResult<Self> {
        match other.into() {
            Operand::Qua(q) => Ok(*self + q),
            Operand::Scalar(_) => Err(QuaError::invalid("cannot add a scalar to a quaternion")),
        }
    }

    pub fn checked_sub(&self, other: impl Into<Operand>) -> QuaResult<Self> {
        match other.into() {
            Operand::Qua(q) => Ok(*self - q),
            Operand::Scalar(_) => Err(QuaError::invalid("cannot subtract a scalar from a quaternion")),
        }
    }

    pub fn checked_mul(&self, other: impl Into<Operand>) -> QuaResult<Self> {
        Ok(match other.into() {
            Operand::Qua(q) => *self * q,
            Operand::Scalar(k) => *self * k,
        })
    }

    pub fn checked_div(&self, other: impl Into<Operand>) -> QuaResult<Self> {
        match other.into() {
            Operand::Qua(q) => *self / q,
            Operand::Scalar(k) => *self / k,
        }
    }
}

/// `k * q`, for call sites that prefer a function over the operator.
pub fn scale(k: f64, q: Quaternion) -> Quaternion {
    q * k
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_scalar_vector(-self.s, -self.v)
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::from_scalar_vector(self.s + other.s, self.v + other.v)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self + other * -1.0
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. Not commutative.
    fn mul(self, other: Self) -> Self::Output {
        Self::from_scalar_vector(
            self.s * other.s - self.v.dot(other.v),
            other.v * self.s + self.v * other.s + self.v.cross(other.v),
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, k: f64) -> Self::Output {
        Self::from_scalar_vector(self.s * k, self.v * k)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Self::Output {
        q * self
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, k: f64) {
        *self = *self * k;
    }
}

impl Div<f64> for Quaternion {
    type Output = QuaResult<Self>;

    fn div(self, k: f64) -> Self::Output {
        if k == 0.0 {
            return Err(QuaError::div_zero("scalar division"));
        }
        Ok(self.div_components(k))
    }
}

impl Div for Quaternion {
    type Output = QuaResult<Self>;

    fn div(self, other: Self) -> Self::Output {
        Ok(self * other.inverse()?)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<(f64, [f64; 3])> for Quaternion {
    fn from((s, v): (f64, [f64; 3])) -> Self {
        Self::from_scalar_vector(s, v.into())
    }
}

impl From<(f64, Vec3)> for Quaternion {
    fn from((s, v): (f64, Vec3)) -> Self {
        Self::from_scalar_vector(s, v)
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuaError;

    fn try_from(values: &[f64]) -> QuaResult<Self> {
        Self::from_slice(values)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> [f64; 4] {
        q.to_array()
    }
}

impl From<cgmath::Quaternion<f64>> for Quaternion {
    fn from(q: cgmath::Quaternion<f64>) -> Self {
        Self::from_scalar_vector(q.s, q.v.into())
    }
}

impl From<Quaternion> for cgmath::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        cgmath::Quaternion::from_sv(q.s, q.v.into())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qua({:?}; {})", self.s, self.v)
    }
}


#[test]
fn basis_products() {
    let (i, j, k) = (Quaternion::i(), Quaternion::j(), Quaternion::k());
    let minus_one = Quaternion::new(-1.0, 0.0, 0.0, 0.0);

    assert_eq!(i * j, k);
    assert_eq!(j * i, -k);
    assert_eq!(j * k, i);
    assert_eq!(k * j, -i);
    assert_eq!(k * i, j);
    assert_eq!(i * k, -j);
    assert_eq!(i * i, minus_one);
    assert_eq!(j * j, minus_one);
    assert_eq!(k * k, minus_one);
    assert_eq!(i * j * k, minus_one);
}

#[test]
fn hamilton_product() {
    let p = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let q = Quaternion::new(5.0, 6.0, 7.0, 8.0);

    assert_eq!(p * q, Quaternion::new(-60.0, 12.0, 30.0, 24.0));
    assert_eq!(q * p, Quaternion::new(-60.0, 20.0, 14.0, 32.0));
}

#[test]
fn construction_forms_agree() {
    let expected = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(Quaternion::from((1.0, [2.0, 3.0, 4.0])), expected);
    assert_eq!(Quaternion::from([1.0, 2.0, 3.0, 4.0]), expected);
    assert_eq!(Quaternion::from_scalar_vector(1.0, Vec3::new(2.0, 3.0, 4.0)), expected);
    assert_eq!(Quaternion::from_scalar_slice(1.0, &[2.0, 3.0, 4.0]).unwrap(), expected);
    assert_eq!(
        Quaternion::from_complex(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)),
        expected
    );
    assert_eq!(
        Quaternion::build(QuaInput::Sequence(vec![1.0, 2.0, 3.0, 4.0])).unwrap(),
        expected
    );
    assert_eq!(
        Quaternion::build(QuaInput::Components(1.0, 2.0, 3.0, 4.0)).unwrap(),
        expected
    );
}

#[test]
fn construction_rejects_bad_arity() {
    let short: &[f64] = &[1.0, 2.0, 3.0];

    assert!(matches!(Quaternion::try_from(short), Err(QuaError::InvalidArgument(_))));
    assert!(matches!(
        Quaternion::build(QuaInput::ScalarSlice(1.0, vec![2.0, 3.0])),
        Err(QuaError::InvalidArgument(_))
    ));
    assert!(matches!(
        Quaternion::build(QuaInput::Sequence(vec![])),
        Err(QuaError::InvalidArgument(_))
    ));
}

#[test]
fn unsupported_construction() {
    assert_eq!(
        Quaternion::build(QuaInput::Matrix(Mat3x3::identity())),
        Err(QuaError::NotImplemented("rotation matrix"))
    );
    assert_eq!(
        Quaternion::build(QuaInput::Euler(10.0, 20.0, 30.0)),
        Err(QuaError::NotImplemented("euler angles"))
    );
}

#[test]
fn accessors() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(q.real(), 1.0);
    assert_eq!(q.scalar(), q.re());
    assert_eq!(q.real_part(), 1.0);
    assert_eq!(q.imag(), Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(q.imaginary(), q.imag());
    assert_eq!(q.imaginary_part(), q.im());
    assert_eq!((q.i_part(), q.j_part(), q.k_part()), (2.0, 3.0, 4.0));
    assert_eq!(q.norm_imag(), 29.0);
    assert_eq!(q.abs_imag(), 29f64.sqrt());
    assert_eq!(q.to_complex(), (Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)));

    assert_eq!(Quaternion::one().arg(), 0.0);
    assert_eq!(Quaternion::new(-1.0, 0.0, 0.0, 0.0).arg(), std::f64::consts::PI);
    assert_eq!(Quaternion::i().arg(), std::f64::consts::FRAC_PI_2);
}

#[test]
fn vector_accessor_is_a_copy() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let mut v = q.vector();
    v.x = 100.0;

    assert_eq!(q.i_part(), 2.0);
}

#[test]
fn norm_and_conjugate() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(q.norm(), 30.0);
    assert_eq!(q.magnitude(), 30f64.sqrt());
    assert_eq!(q.conjugate(), Quaternion::new(1.0, -2.0, -3.0, -4.0));
    assert_eq!(q.conjugate().conjugate(), q);
    assert_eq!(q * q.conjugate(), Quaternion::new(30.0, 0.0, 0.0, 0.0));
}

#[test]
fn inverse_of_zero() {
    assert_eq!(Quaternion::zero().inverse(), Err(QuaError::DivisionByZero("inverse")));
    assert_eq!(Quaternion::one() / Quaternion::zero(), Err(QuaError::DivisionByZero("inverse")));
    assert_eq!(Quaternion::one() / 0.0, Err(QuaError::DivisionByZero("scalar division")));
}

#[test]
fn scalar_division() {
    let q = Quaternion::new(2.0, 4.0, 6.0, 8.0);
    assert_eq!((q / 2.0).unwrap(), Quaternion::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn inverse_of_tiny_quaternion() {
    // norm is subnormal; its reciprocal would overflow.
    let inv = Quaternion::new(1e-160, 0.0, 0.0, 0.0).inverse().unwrap();
    assert!(inv.to_array().iter().all(|c| c.is_finite()));
    assert!((inv.s / 1e160 - 1.0).abs() < 1e-12);
    assert_eq!(inv.v, Vec3::zero());

    // norm underflows to zero, yet the input is not zero.
    let inv = Quaternion::new(0.0, 0.0, 1e-170, 0.0).inverse().unwrap();
    assert!((inv.v.y / -1e170 - 1.0).abs() < 1e-12);
}

#[test]
fn inverse_of_huge_quaternion() {
    let inv = Quaternion::new(1e200, 1e200, 0.0, 0.0).inverse().unwrap();
    assert!((inv.s / 5e-201 - 1.0).abs() < 1e-12);
    assert!((inv.v.x / -5e-201 - 1.0).abs() < 1e-12);
    assert_eq!(inv.v.y, 0.0);
}

#[test]
fn division_by_tiny_scalar() {
    let q = (Quaternion::new(1e-300, 0.0, 0.0, 0.0) / 1e-310).unwrap();
    assert!((q.s / 1e10 - 1.0).abs() < 1e-9);
    assert_eq!(q.v, Vec3::zero());
}

#[test]
fn normalize_extreme_magnitudes() {
    let half = std::f64::consts::FRAC_1_SQRT_2;

    let n = Quaternion::new(1e200, 1e200, 0.0, 0.0).normalize().unwrap();
    assert!(n.approx_eq(&Quaternion::new(half, half, 0.0, 0.0), 1e-15));
    assert!(n.is_unit(1e-15));

    let n = Quaternion::new(-1e-170, 0.0, 1e-170, 0.0).normalize().unwrap();
    assert!(n.approx_eq(&Quaternion::new(-half, 0.0, half, 0.0), 1e-15));

    let n = Quaternion::new(f64::MAX, f64::MAX, 0.0, 0.0).normalize().unwrap();
    assert!(n.approx_eq(&Quaternion::new(half, half, 0.0, 0.0), 1e-15));
}

#[test]
fn magnitude_extreme_components() {
    let q = Quaternion::new(3e200, 0.0, 4e200, 0.0);
    assert!((q.magnitude() / 5e200 - 1.0).abs() < 1e-15);

    let q = Quaternion::new(0.0, 3e-170, 0.0, 4e-170);
    assert!((q.magnitude() / 5e-170 - 1.0).abs() < 1e-15);
}

#[test]
fn normalize_mut_is_atomic() {
    let mut zero = Quaternion::zero();
    assert!(zero.normalize_mut().is_err());
    assert_eq!(zero, Quaternion::zero());

    let mut q = Quaternion::new(0.0, 3.0, 0.0, 4.0);
    q.normalize_mut().unwrap();
    assert_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8));
}

#[test]
fn csgn_cases() {
    assert_eq!(Quaternion::zero().csgn(), Some(0));
    assert_eq!(Quaternion::new(2.0, -1.0, 0.0, 0.0).csgn(), Some(1));
    assert_eq!(Quaternion::new(-0.5, 1.0, 0.0, 0.0).csgn(), Some(-1));
    assert_eq!(Quaternion::j().csgn(), None);
}

#[test]
fn round_components() {
    let q = Quaternion::new(1.23456, 2.5, -3.14159, 0.004);
    assert_eq!(q.round(2), Quaternion::new(1.23, 2.5, -3.14, 0.0));
}

#[test]
fn round_with_huge_digit_counts() {
    let q = Quaternion::new(1234.5, -0.1, 3.0, 1e-300);
    assert_eq!(q.round(u32::MAX), q);
    assert_eq!(q.round(i32::MAX as u32 + 1), q);
    assert_eq!(q.round(400), q);
    assert_eq!(q.round(30).s, 1234.5);
}

#[test]
fn checked_operands() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(q.checked_eq(q), Ok(true));
    assert_eq!(q.checked_eq(Quaternion::one()), Ok(false));
    assert!(matches!(q.checked_eq(1.0), Err(QuaError::InvalidArgument(_))));
    assert!(matches!(q.checked_add(1.0), Err(QuaError::InvalidArgument(_))));
    assert!(matches!(q.checked_sub(1.0), Err(QuaError::InvalidArgument(_))));
    assert_eq!(q.checked_add(q), Ok(q * 2.0));
    assert_eq!(q.checked_sub(q), Ok(Quaternion::zero()));
    assert_eq!(q.checked_mul(2.0), Ok(2.0 * q));
    assert_eq!(q.checked_mul(Quaternion::one()), Ok(q));
    assert_eq!(q.checked_div(0.0), Err(QuaError::DivisionByZero("scalar division")));
}

#[test]
fn left_and_right_scaling() {
    let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
    let expected = Quaternion::new(2.5, -5.0, 7.5, -10.0);

    assert_eq!(2.5 * q, expected);
    assert_eq!(q * 2.5, expected);
    assert_eq!(scale(2.5, q), expected);
}

#[test]
fn display_format() {
    assert_eq!(Quaternion::new(1.0, 2.0, 3.0, 4.0).to_string(), "Qua(1.0; [2.0, 3.0, 4.0])");
    assert_eq!(Quaternion::new(-0.5, 0.0, 1.5, -2.0).to_string(), "Qua(-0.5; [0.0, 1.5, -2.0])");
}

#[test]
fn byte_layout() {
    let quats = [Quaternion::new(1.0, 2.0, 3.0, 4.0)];
    let bytes: &[u8] = bytemuck::cast_slice(&quats);
    assert_eq!(bytes.len(), 32);
    let back: &[f64] = bytemuck::cast_slice(&quats);
    assert_eq!(back, &[1.0, 2.0, 3.0, 4.0]);
}
