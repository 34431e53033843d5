use std::error;
use std::fmt;

pub type QuaResult<T> = Result<T, QuaError>;

#[derive(Debug, Clone, PartialEq)]
pub enum QuaError {
    /// Wrong arity or wrong operand kind.
    InvalidArgument(String),
    /// Zero scalar divisor, or a zero-norm quaternion/vector where a
    /// reciprocal is needed.
    DivisionByZero(&'static str),
    /// Construction forms that are deliberately left unsupported.
    NotImplemented(&'static str),
}
impl QuaError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("invalid argument: {msg}");
        Self::InvalidArgument(msg)
    }

    pub(crate) fn div_zero(op: &'static str) -> Self {
        log::debug!("division by zero in {op}");
        Self::DivisionByZero(op)
    }
}
impl fmt::Display for QuaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuaError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {msg}")
            }
            QuaError::DivisionByZero(op) => {
                write!(f, "Division by zero in {op}")
            }
            QuaError::NotImplemented(form) => {
                write!(f, "Construction from {form} is not implemented")
            }
        }
    }
}
impl error::Error for QuaError {}

#[test]
fn error_messages() {
    assert_eq!(
        QuaError::DivisionByZero("inverse").to_string(),
        "Division by zero in inverse"
    );
    assert_eq!(
        QuaError::NotImplemented("euler angles").to_string(),
        "Construction from euler angles is not implemented"
    );
    assert_eq!(
        QuaError::invalid("expected 4 components, got 3").to_string(),
        "Invalid argument: expected 4 components, got 3"
    );
}
