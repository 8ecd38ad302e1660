// Copyright 2014-2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::error::Error;
use std::fmt;

/// How the actual value of a [`ShapeError::DimensionMismatch`] relates to
/// the expected one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// the values should have been equal
    NotEqual,
    /// the actual value is smaller than allowed
    Less,
    /// the actual value is larger than allowed
    Greater,
}

impl Relation {
    fn as_str(self) -> &'static str {
        match self {
            Relation::NotEqual => "!=",
            Relation::Less => "<",
            Relation::Greater => ">",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error related to array shape, indexing or element data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// An argument had the wrong kind or structure, for example an empty
    /// coordinate or a record of another dtype.
    InvalidArgumentType(&'static str),
    /// A rank, length or extent did not match what the operation requires.
    DimensionMismatch {
        actual: usize,
        expected: usize,
        relation: Relation,
    },
    /// A coordinate lies outside `[min, max]`.
    IndexOutOfRange { index: usize, min: usize, max: usize },
    /// The operation is only defined for arrays of rank `expected`.
    UnsupportedRank { ndim: usize, expected: usize },
}

/// Error code for a [`ShapeError`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// wrong argument kind or structure
    InvalidArgumentType,
    /// incompatible rank, length or extent
    DimensionMismatch,
    /// coordinate out of bounds
    IndexOutOfRange,
    /// operation not defined for this rank
    UnsupportedRank,
}

impl ShapeError {
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShapeError::InvalidArgumentType(_) => ErrorKind::InvalidArgumentType,
            ShapeError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            ShapeError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            ShapeError::UnsupportedRank { .. } => ErrorKind::UnsupportedRank,
        }
    }
}

impl Error for ShapeError {}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ShapeError::InvalidArgumentType(what) => write!(f, "invalid argument: {}", what),
            ShapeError::DimensionMismatch {
                actual,
                expected,
                relation,
            } => write!(f, "Dimension mismatch ({} {} {})", actual, relation, expected),
            ShapeError::IndexOutOfRange { index, min, max } => {
                if index < min {
                    write!(f, "Index out of range ({} < {})", index, min)
                } else {
                    write!(f, "Index out of range ({} > {})", index, max)
                }
            }
            ShapeError::UnsupportedRank { ndim, expected } => write!(
                f,
                "operation requires a {}-dimensional array, got {} dimension(s)",
                expected, ndim
            ),
        }
    }
}

#[inline]
pub(crate) fn mismatch(actual: usize, expected: usize) -> ShapeError {
    ShapeError::DimensionMismatch {
        actual,
        expected,
        relation: Relation::NotEqual,
    }
}

#[inline]
pub(crate) fn too_large(actual: usize, expected: usize) -> ShapeError {
    ShapeError::DimensionMismatch {
        actual,
        expected,
        relation: Relation::Greater,
    }
}

#[inline]
pub(crate) fn out_of_range(index: usize, len: usize) -> ShapeError {
    ShapeError::IndexOutOfRange {
        index,
        min: 0,
        max: len.saturating_sub(1),
    }
}

#[inline]
pub(crate) fn require_rank(ndim: usize, expected: usize) -> Result<(), ShapeError> {
    if ndim != expected {
        return Err(ShapeError::UnsupportedRank { ndim, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(mismatch(3, 4).to_string(), "Dimension mismatch (3 != 4)");
        assert_eq!(too_large(3, 2).to_string(), "Dimension mismatch (3 > 2)");
        assert_eq!(out_of_range(5, 4).to_string(), "Index out of range (5 > 3)");
        assert_eq!(
            ShapeError::UnsupportedRank { ndim: 3, expected: 2 }.to_string(),
            "operation requires a 2-dimensional array, got 3 dimension(s)"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(mismatch(1, 2).kind(), ErrorKind::DimensionMismatch);
        assert_eq!(out_of_range(1, 1).kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(require_rank(1, 2).unwrap_err().kind(), ErrorKind::UnsupportedRank);
        assert!(require_rank(2, 2).is_ok());
    }
}
