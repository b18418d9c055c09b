//! Defines [`EwkbError`], representing all errors returned by this crate.

use std::num::TryFromIntError;

use thiserror::Error;

use crate::datatypes::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EwkbError {
    /// The byte order selector was neither `0x00` nor `0x01`.
    #[error("Invalid EWKB encoding: unexpected byte order {0:#04x}")]
    MalformedHeader(u8),

    /// The base type code is not one of the seven supported kinds.
    #[error("Unsupported geometry type {0}")]
    UnsupportedType(u32),

    /// A child geometry is not the kind its container requires.
    #[error("Invalid geometry: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind the container requires
        expected: GeometryType,
        /// The kind actually present
        found: GeometryType,
    },

    /// A value that is not one of the seven supported kinds was given to the encoder.
    #[error("Unsupported geometry class <{0}>")]
    UnsupportedClass(String),

    /// The hex text could not be decoded.
    #[error("Invalid hex text: {0}")]
    MalformedText(#[from] hex::FromHexError),

    /// Fewer bytes remain than a read requires.
    #[error("Truncated EWKB buffer")]
    TruncatedBuffer,

    /// Tagged children are nested deeper than [MAX_NESTING_DEPTH](crate::io::ewkb::MAX_NESTING_DEPTH).
    #[error("Geometry nesting exceeds {0} levels")]
    NestingTooDeep(usize),

    /// A child count does not fit in the 32-bit count field.
    #[error("Overflow: element count does not fit in u32")]
    Overflow,

    /// [std::io::Error] raised by the output sink
    #[error(transparent)]
    IOError(std::io::Error),
}

/// Crate-specific result type.
pub type EwkbResult<T> = std::result::Result<T, EwkbError>;

impl From<std::io::Error> for EwkbError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => EwkbError::TruncatedBuffer,
            _ => EwkbError::IOError(err),
        }
    }
}

impl From<TryFromIntError> for EwkbError {
    fn from(_value: TryFromIntError) -> Self {
        EwkbError::Overflow
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let header = EwkbError::MalformedHeader(2);
        assert_eq!(
            header.to_string(),
            "Invalid EWKB encoding: unexpected byte order 0x02"
        );

        let mismatch = EwkbError::TypeMismatch {
            expected: GeometryType::Point,
            found: GeometryType::LineString,
        };
        assert_eq!(
            mismatch.to_string(),
            "Invalid geometry: expected Point, found LineString"
        );

        let eof = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        assert!(matches!(EwkbError::from(eof), EwkbError::TruncatedBuffer));

        let other = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(matches!(EwkbError::from(other), EwkbError::IOError(_)));
    }
}
