//! Errors of the builders and of the dynamically typed front end.

use einsor_core::error::{
    CombineError, ReshapeError, RingMismatch, ShapeError, SignatureParseError,
};
use thiserror::Error;

/// Failure to build a tensor, function or ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Malformed signature string.
    #[error(transparent)]
    Signature(#[from] SignatureParseError),
    /// Signature and dimensions do not fit together.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Rows of a matrix have different lengths.
    #[error("matrix rows have different lengths")]
    Ragged,
    /// Modulus of a modular ring is not positive.
    #[error("modulus must be positive, got {0}")]
    InvalidModulus(i64),
}

/// Failure of an operation on [`AnyTensor`](crate::any::AnyTensor)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnyError {
    /// Operands live in different rings.
    #[error(transparent)]
    Type(#[from] RingMismatch),
    /// Operands have incompatible shapes.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Replacement signature has the wrong length.
    #[error(transparent)]
    Reshape(#[from] ReshapeError),
}

impl From<CombineError> for AnyError {
    fn from(err: CombineError) -> Self {
        match err {
            CombineError::Type(e) => AnyError::Type(e),
            CombineError::Shape(e) => AnyError::Shape(e),
        }
    }
}
