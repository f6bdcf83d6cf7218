//! Error types shared by the tensor operators and the evaluator.

use alloc::{string::String, vec::Vec};
use thiserror::Error;

use crate::signature::Signature;

/// Structural errors: ranks, axes and dimensions that do not fit together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// Signature and dimension list disagree in length.
    #[error("signature has {signature} axes but dimension list has {dimension}")]
    RankMismatch {
        /// number of variance markers
        signature: usize,
        /// number of axis sizes
        dimension: usize,
    },
    /// An axis was declared with size zero.
    #[error("axis {axis} has size zero")]
    ZeroDimension {
        /// offending axis
        axis: usize,
    },
    /// Axis index does not exist on the tensor.
    #[error("axis {axis} is out of range for a rank {rank} tensor")]
    AxisOutOfRange {
        /// requested axis
        axis: usize,
        /// rank of the tensor
        rank: usize,
    },
    /// Trace requested over a single axis.
    #[error("cannot trace axis {0} against itself")]
    SameAxis(usize),
    /// Traced axes have different sizes.
    #[error("cannot trace axes {a} and {b}: sizes {dim_a} and {dim_b} differ")]
    TraceDimensionMismatch {
        /// first axis
        a: usize,
        /// second axis
        b: usize,
        /// size of `a`
        dim_a: usize,
        /// size of `b`
        dim_b: usize,
    },
    /// Elementwise operands have different dimension lists.
    #[error("dimension mismatch: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// left dimensions
        lhs: Vec<usize>,
        /// right dimensions
        rhs: Vec<usize>,
    },
    /// Elementwise operands have different signatures.
    #[error("signature mismatch: `{lhs}` vs `{rhs}`")]
    SignatureMismatch {
        /// left signature
        lhs: Signature,
        /// right signature
        rhs: Signature,
    },
    /// A coordinate lies outside the tensor.
    #[error("coordinate {index:?} is out of bounds for dimension {dimension:?}")]
    CoordinateOutOfBounds {
        /// requested coordinate
        index: Vec<usize>,
        /// dimension list of the tensor
        dimension: Vec<usize>,
    },
}

/// Two operands live in different rings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ring mismatch: `{lhs}` cannot be combined with `{rhs}`")]
pub struct RingMismatch {
    /// name of the left ring
    pub lhs: String,
    /// name of the right ring
    pub rhs: String,
}

/// Errors in index labels of a term.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// An index occurs more than twice in a term.
    #[error("index `{label}` occurs {count} times, at most 2 allowed")]
    RepeatedTooOften {
        /// the label
        label: char,
        /// number of occurrences in the term
        count: usize,
    },
    /// A factor carries a different number of labels than its rank.
    #[error("labels `{labels}` do not fit a rank {rank} tensor")]
    ArityMismatch {
        /// labels attached to the factor
        labels: String,
        /// rank of the factor
        rank: usize,
    },
}

/// A replacement signature has the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reshape expects {expected} variance markers, got {found}")]
pub struct ReshapeError {
    /// rank of the tensor
    pub expected: usize,
    /// length of the given signature
    pub found: usize,
}

/// A signature string contains something other than `u` or `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid variance marker `{0}`, expected `u` or `d`")]
pub struct SignatureParseError(pub char);

/// Failure of an elementwise operator (`Plus`, `Apply`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombineError {
    /// operands live in different rings
    #[error(transparent)]
    Type(#[from] RingMismatch),
    /// operands have different shapes
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Failure of a term or expression evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Term without factors.
    #[error("cannot evaluate an empty term")]
    EmptyTerm,
    /// Invalid index labels.
    #[error(transparent)]
    Label(#[from] LabelError),
    /// Incompatible shapes.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// Incompatible rings.
    #[error(transparent)]
    Type(#[from] RingMismatch),
    /// Invalid signature override.
    #[error(transparent)]
    Reshape(#[from] ReshapeError),
}

impl From<CombineError> for EvalError {
    fn from(err: CombineError) -> Self {
        match err {
            CombineError::Type(e) => EvalError::Type(e),
            CombineError::Shape(e) => EvalError::Shape(e),
        }
    }
}
