use std::ops::{Neg, Add, AddAssign, Sub, Mul, Div};
use std::fmt;

use crate::error::{QuaError, QuaResult};

/// Ordered 3-component vector. Holds the imaginary part of a quaternion
/// and the points/axes fed to rotation.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub fn len(&self) -> f64 {
        self.len_sq().sqrt()
    }

    pub fn len_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn dot(&self, vec: Vec3) -> f64 {
        self.x*vec.x + self.y*vec.y + self.z*vec.z
    }

    pub fn cross(&self, vec: Vec3) -> Self {
        Self::new(
            self.y*vec.z - self.z*vec.y,
            self.z*vec.x - self.x*vec.z,
            self.x*vec.y - self.y*vec.x,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Unit vector in the same direction. Fails on the zero vector.
    pub fn normalized(&self) -> QuaResult<Self> {
        let max = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if max == 0.0 {
            return Err(QuaError::div_zero("vector normalization"));
        }
        // Dividing by the largest component first keeps len_sq finite and normal.
        let unit = *self / max;
        Ok(unit / unit.len())
    }

    /// Rounds each component to `digits` fractional digits.
    pub fn round(&self, digits: u32) -> Self {
        Self::new(
            round_to(self.x, digits),
            round_to(self.y, digits),
            round_to(self.z, digits),
        )
    }

    /// Copies the components out of a slice of exactly three values.
    pub fn from_slice(values: &[f64]) -> QuaResult<Self> {
        match *values {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(QuaError::invalid(format!(
                "expected 3 vector components, got {}",
                values.len()
            ))),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// Round half away from zero at `digits` fractional digits.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    const INTEGRAL: f64 = 4503599627370496.0; // 2^52

    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * scale;
    // No fractional digits left to round at this scale.
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL {
        return value;
    }
    scaled.round() / scale
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Self::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Self::Output {
        other * self
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, other: f64) -> Self::Output {
        Self::new(self.x / other, self.y / other, self.z / other)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(arr: [f64; 3]) -> Vec3 {
        Vec3::new(arr[0], arr[1], arr[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(vec: Vec3) -> [f64; 3] {
        vec.to_array()
    }
}

impl From<cgmath::Vector3<f64>> for Vec3 {
    fn from(vec: cgmath::Vector3<f64>) -> Vec3 {
        Vec3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vec3> for cgmath::Vector3<f64> {
    fn from(vec: Vec3) -> cgmath::Vector3<f64> {
        cgmath::Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}, {:?}, {:?}]", self.x, self.y, self.z)
    }
}


#[test]
fn cross_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let cross = v.cross(v2);
    assert!(cross == Vec3::new(-45.0, 0.0, 30.0));
    assert!(v2.cross(v) == -cross);
}

#[test]
fn dot_test() {
    let v  = Vec3::new(4.0, 3.0, 6.0);
    let v2 = Vec3::new(2.0, 9.0, 3.0);

    let dot = v.dot(v2);
    assert!(dot == 53.0);
}

#[test]
fn normalized_test() {
    let v = Vec3::new(3.0, 0.0, 4.0);
    assert!(v.normalized().unwrap() == Vec3::new(0.6, 0.0, 0.8));
    assert_eq!(
        Vec3::zero().normalized(),
        Err(QuaError::DivisionByZero("vector normalization"))
    );
}

#[test]
fn slice_arity() {
    assert!(Vec3::from_slice(&[1.0, 2.0, 3.0]).unwrap() == Vec3::new(1.0, 2.0, 3.0));
    assert!(matches!(Vec3::from_slice(&[1.0, 2.0]), Err(QuaError::InvalidArgument(_))));
    assert!(matches!(Vec3::from_slice(&[1.0; 4]), Err(QuaError::InvalidArgument(_))));
}

#[test]
fn round_test() {
    let v = Vec3::new(1.23456, -2.5, 0.005);
    assert!(v.round(2) == Vec3::new(1.23, -2.5, 0.01));
    assert!(v.round(0) == Vec3::new(1.0, -3.0, 0.0));
}

#[test]
fn round_keeps_value_past_representable_digits() {
    assert_eq!(round_to(1234.5, u32::MAX), 1234.5);
    assert_eq!(round_to(1234.5, 1 << 31), 1234.5);
    assert_eq!(round_to(-0.1, 320), -0.1);
    assert_eq!(round_to(0.0, u32::MAX), 0.0);
    assert_eq!(round_to(1e20, 0), 1e20);
}

#[test]
fn normalized_extreme_lengths() {
    let v = Vec3::new(3e200, 0.0, -4e200).normalized().unwrap();
    assert!((v - Vec3::new(0.6, 0.0, -0.8)).len() < 1e-15);

    let v = Vec3::new(0.0, 1e-170, 0.0).normalized().unwrap();
    assert!(v == Vec3::unit_y());
}

#[test]
fn display_test() {
    assert_eq!(Vec3::new(2.0, 3.0, 4.0).to_string(), "[2.0, 3.0, 4.0]");
}
