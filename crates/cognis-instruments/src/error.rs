use thiserror::Error;

/// A raw answer value that could not be read as the expected number.
///
/// Scoring always recovers from this by counting the answer as zero.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    #[error("expected a number, found {0}")]
    WrongType(&'static str),

    #[error("cannot parse {0:?} as a number")]
    Unparseable(String),

    #[error("value {0} is not finite")]
    NonFinite(f64),

    #[error("value {0} does not fit in an integer")]
    OutOfRange(f64),
}
