use std::fmt;

/// A complex number `re + im·i`. Only used to split a quaternion into the
/// pair `(a + b·i, c + d·i)` and back.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}
impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{:?}-{:?}i", self.re, -self.im)
        }
        else {
            write!(f, "{:?}+{:?}i", self.re, self.im.abs())
        }
    }
}

#[test]
fn display_test() {
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1.0+2.0i");
    assert_eq!(Complex::new(3.0, -4.5).to_string(), "3.0-4.5i");
    assert_eq!(Complex::new(1.0, -0.0).to_string(), "1.0+0.0i");
}
