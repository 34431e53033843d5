use std::ops::Mul;

use crate::vector::Vec3;
use crate::quaternion::Quaternion;

/// Column-major 3 x 3 matrix.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Mat3x3 {
    pub c0: Vec3,
    pub c1: Vec3,
    pub c2: Vec3,
}
impl Mat3x3 {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        c0r0: f64, c0r1: f64, c0r2: f64,
        c1r0: f64, c1r1: f64, c1r2: f64,
        c2r0: f64, c2r1: f64, c2r2: f64,
    ) -> Self {
        Self::from_cols(
            Vec3::new(c0r0, c0r1, c0r2),
            Vec3::new(c1r0, c1r1, c1r2),
            Vec3::new(c2r0, c2r1, c2r2),
        )
    }

    pub fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self {
            c0,
            c1,
            c2,
        }
    }

    pub fn identity() -> Self {
        Self::new(
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }
}

impl From<[[f64; 3]; 3]> for Mat3x3 {
    fn from(mat: [[f64; 3]; 3]) -> Mat3x3 {
        Self::from_cols(mat[0].into(), mat[1].into(), mat[2].into())
    }
}

impl From<Mat3x3> for [[f64; 3]; 3] {
    fn from(mat: Mat3x3) -> [[f64; 3]; 3] {
        [mat.c0.into(), mat.c1.into(), mat.c2.into()]
    }
}

impl From<Quaternion> for Mat3x3 {
    /// Convert a unit quaternion to a 3 x 3 rotation matrix.
    fn from(quat: Quaternion) -> Mat3x3 {
        let v = quat.imag();
        let s = quat.real();

        let x2 = v.x + v.x;
        let y2 = v.y + v.y;
        let z2 = v.z + v.z;

        let xx2 = x2 * v.x;
        let xy2 = x2 * v.y;
        let xz2 = x2 * v.z;

        let yy2 = y2 * v.y;
        let yz2 = y2 * v.z;
        let zz2 = z2 * v.z;

        let sy2 = y2 * s;
        let sz2 = z2 * s;
        let sx2 = x2 * s;

        Mat3x3::new(
            1.0 - yy2 - zz2, xy2 + sz2,       xz2 - sy2,
            xy2 - sz2,       1.0 - xx2 - zz2, yz2 + sx2,
            xz2 + sy2,       yz2 - sx2,       1.0 - xx2 - yy2,
        )
    }
}

impl Mul<Vec3> for Mat3x3 {
    type Output = Vec3;

    fn mul(self, vec: Vec3) -> Self::Output {
        self.c0 * vec.x + self.c1 * vec.y + self.c2 * vec.z
    }
}

impl Mul for Mat3x3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        Mat3x3::from_cols(self * other.c0, self * other.c1, self * other.c2)
    }
}

#[test]
fn mat_multiply() {
    let mat1 = Mat3x3::new(
        1.0, 4.0, 7.0,
        2.0, 5.0, 8.0,
        3.0, 6.0, 9.0,
    );
    let mat2 = Mat3x3::new(
        9.0, 6.0, 3.0,
        8.0, 5.0, 2.0,
        7.0, 4.0, 1.0,
    );
    let res = mat1 * mat2;

    assert!(res == Mat3x3::new(
        30.0, 84.0, 138.0,
        24.0, 69.0, 114.0,
        18.0, 54.0, 90.0,
    ));
    assert!(mat1 * Mat3x3::identity() == mat1);
}

#[test]
fn identity_quaternion_is_identity_matrix() {
    assert!(Mat3x3::from(Quaternion::one()) == Mat3x3::identity());
}
