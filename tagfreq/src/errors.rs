//! Definition of errors.

use std::error::Error;
use std::fmt;

pub type Result<T, E = TagFreqError> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum TagFreqError {
    InvalidModel(InvalidModelError),
    InvalidArgument(InvalidArgumentError),
    CastError(std::num::TryFromIntError),
    IOError(std::io::Error),
}

impl TagFreqError {
    pub(crate) fn invalid_model<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidModel(InvalidModelError { msg: msg.into() })
    }

    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    /// Returns `true` if the error was caused by a stream that ended in the middle of a record.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::IOError(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

impl fmt::Display for TagFreqError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidModel(e) => e.fmt(f),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::CastError(e) => e.fmt(f),
            Self::IOError(e) => e.fmt(f),
        }
    }
}

impl Error for TagFreqError {}

/// Error used when the model is invalid.
#[derive(Debug)]
pub struct InvalidModelError {
    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidModelError: {}", self.msg)
    }
}

impl Error for InvalidModelError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<std::num::TryFromIntError> for TagFreqError {
    fn from(error: std::num::TryFromIntError) -> Self {
        Self::CastError(error)
    }
}

impl From<std::io::Error> for TagFreqError {
    fn from(error: std::io::Error) -> Self {
        Self::IOError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_model_message() {
        let e = TagFreqError::invalid_model("negative count");

        assert_eq!("InvalidModelError: negative count", e.to_string());
    }

    #[test]
    fn test_invalid_argument_message() {
        let e = TagFreqError::invalid_argument("tag", "reserved");

        assert_eq!("InvalidArgumentError: tag: reserved", e.to_string());
    }

    #[test]
    fn test_is_truncated() {
        let e = TagFreqError::from(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(e.is_truncated());

        let e = TagFreqError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(!e.is_truncated());
        assert!(!TagFreqError::invalid_model("x").is_truncated());
    }
}
