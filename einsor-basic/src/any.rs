//! Dynamically ring-typed tensors.
//!
//! The typed API rejects mixed rings at compile time. [`AnyTensor`] erases the ring to a tag so that tensors of different rings can share one collection, at the price of checking ring identity at run time: combining tensors of different rings yields [`AnyError::Type`].

use alloc::{string::String, vec::Vec};
use core::fmt;

use einsor_core::{
    error::RingMismatch,
    ops::{Apply, Function, Plus, Product, Trace, transpose},
    reify::Table,
    ring::Ring,
    signature::Signature,
    tensor::{Tensor, TensorDefaultTask},
};
use num_complex::Complex64;

use crate::{
    error::AnyError,
    ring::{ComplexRing, IntRing, RealRing, StringRing},
};

/// Entry of an [`AnyTensor`].
#[derive(Debug, Clone, PartialEq)]
pub enum AnyScalar {
    /// integer
    Int(i64),
    /// real
    Real(f64),
    /// complex
    Complex(Complex64),
    /// string
    Str(String),
}

impl fmt::Display for AnyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyScalar::Int(x) => write!(f, "{x}"),
            AnyScalar::Real(x) => write!(f, "{x}"),
            AnyScalar::Complex(x) => write!(f, "{x}"),
            AnyScalar::Str(x) => write!(f, "{x}"),
        }
    }
}

/// Tensor over one of the built-in rings, tagged with its ring at run time.
#[derive(Debug, Clone)]
pub enum AnyTensor {
    /// over [`IntRing`]
    Int(Tensor<IntRing>),
    /// over [`RealRing`]
    Real(Tensor<RealRing>),
    /// over [`ComplexRing`]
    Complex(Tensor<ComplexRing>),
    /// over [`StringRing`]
    Str(Tensor<StringRing>),
}

/// Unary function over one of the built-in rings.
#[derive(Debug, Clone)]
pub enum AnyFunction {
    /// over [`IntRing`]
    Int(Function<IntRing>),
    /// over [`RealRing`]
    Real(Function<RealRing>),
    /// over [`ComplexRing`]
    Complex(Function<ComplexRing>),
    /// over [`StringRing`]
    Str(Function<StringRing>),
}

macro_rules! impl_from {
    ($variant:ident, $ring:ty, $elem:ty) => {
        impl From<Tensor<$ring>> for AnyTensor {
            fn from(t: Tensor<$ring>) -> Self {
                AnyTensor::$variant(t)
            }
        }
        impl From<Function<$ring>> for AnyFunction {
            fn from(f: Function<$ring>) -> Self {
                AnyFunction::$variant(f)
            }
        }
        impl From<$elem> for AnyScalar {
            fn from(x: $elem) -> Self {
                AnyScalar::$variant(x)
            }
        }
    };
}

impl_from!(Int, IntRing, i64);
impl_from!(Real, RealRing, f64);
impl_from!(Complex, ComplexRing, Complex64);
impl_from!(Str, StringRing, String);

// evaluates `$body` on the inner tensor, whatever its ring
macro_rules! with_any {
    ($value:expr, |$t:ident| $body:expr) => {
        match $value {
            AnyTensor::Int($t) => $body,
            AnyTensor::Real($t) => $body,
            AnyTensor::Complex($t) => $body,
            AnyTensor::Str($t) => $body,
        }
    };
}

// rewraps the tensor produced by `$body` under the same tag
macro_rules! map_any {
    ($value:expr, |$t:ident| $body:expr) => {
        match $value {
            AnyTensor::Int($t) => AnyTensor::Int($body),
            AnyTensor::Real($t) => AnyTensor::Real($body),
            AnyTensor::Complex($t) => AnyTensor::Complex($body),
            AnyTensor::Str($t) => AnyTensor::Str($body),
        }
    };
}

// like `map_any`, for two operands that must share a tag
macro_rules! zip_any {
    ($lhs:expr, $rhs:expr, |$l:ident, $r:ident| $body:expr) => {
        match ($lhs, $rhs) {
            (AnyTensor::Int($l), AnyTensor::Int($r)) => AnyTensor::Int($body),
            (AnyTensor::Real($l), AnyTensor::Real($r)) => AnyTensor::Real($body),
            (AnyTensor::Complex($l), AnyTensor::Complex($r)) => AnyTensor::Complex($body),
            (AnyTensor::Str($l), AnyTensor::Str($r)) => AnyTensor::Str($body),
            (l, r) => {
                return Err(RingMismatch {
                    lhs: l.ring_name(),
                    rhs: r.ring_name(),
                }
                .into());
            }
        }
    };
}

fn to_any_table<E: Into<AnyScalar>>(table: Table<E>) -> Table<AnyScalar> {
    table
        .into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

impl AnyTensor {
    /// Name of the ring of the entries.
    pub fn ring_name(&self) -> String {
        with_any!(self, |t| t.ring().name())
    }

    /// Variances of the axes.
    pub fn signature(&self) -> &Signature {
        with_any!(self, |t| t.signature())
    }

    /// Sizes of the axes.
    pub fn dimension(&self) -> &[usize] {
        with_any!(self, |t| t.dimension())
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        with_any!(self, |t| t.rank())
    }

    /// Elementwise sum; fails on different rings, dimensions or signatures.
    pub fn plus(&self, other: &AnyTensor) -> Result<AnyTensor, AnyError> {
        Ok(zip_any!(self, other, |l, r| Plus::new(l, r)?.exec()))
    }

    /// Outer product; fails on different rings.
    pub fn product(&self, other: &AnyTensor) -> Result<AnyTensor, AnyError> {
        Ok(zip_any!(self, other, |l, r| Product::new(l, r)?.exec()))
    }

    /// Contraction of axes `a` and `b`.
    pub fn trace(&self, a: usize, b: usize) -> Result<AnyTensor, AnyError> {
        Ok(map_any!(self, |t| Trace::new(t, a, b)?.exec()))
    }

    /// Swaps axes `a` and `b`.
    pub fn transpose(&self, a: usize, b: usize) -> Result<AnyTensor, AnyError> {
        Ok(map_any!(self, |t| transpose(t, a, b)?))
    }

    /// Same entries under another signature.
    pub fn reshape(&self, signature: Signature) -> Result<AnyTensor, AnyError> {
        Ok(map_any!(self, |t| t.reshape(signature)?))
    }

    /// Maps `function` over the entries; fails when the function belongs to another ring.
    pub fn apply(&self, function: &AnyFunction) -> Result<AnyTensor, AnyError> {
        Ok(match (function, self) {
            (AnyFunction::Int(f), AnyTensor::Int(t)) => AnyTensor::Int(Apply::new(f, t)?.exec()),
            (AnyFunction::Real(f), AnyTensor::Real(t)) => {
                AnyTensor::Real(Apply::new(f, t)?.exec())
            }
            (AnyFunction::Complex(f), AnyTensor::Complex(t)) => {
                AnyTensor::Complex(Apply::new(f, t)?.exec())
            }
            (AnyFunction::Str(f), AnyTensor::Str(t)) => AnyTensor::Str(Apply::new(f, t)?.exec()),
            (f, t) => {
                return Err(RingMismatch {
                    lhs: f.ring_name(),
                    rhs: t.ring_name(),
                }
                .into());
            }
        })
    }

    /// Materializes the entries into a table, see [`Tensor::reify`].
    pub fn reify(&self) -> Table<AnyScalar> {
        with_any!(self, |t| to_any_table(t.reify()))
    }
}

impl AnyFunction {
    /// Name of the ring the function maps within.
    pub fn ring_name(&self) -> String {
        match self {
            AnyFunction::Int(f) => f.ring().name(),
            AnyFunction::Real(f) => f.ring().name(),
            AnyFunction::Complex(f) => f.ring().name(),
            AnyFunction::Str(f) => f.ring().name(),
        }
    }
}

impl fmt::Display for AnyTensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_any!(self, |t| write!(f, "{t}"))
    }
}

/// Collects rows of any scalars, for comparisons in tests and renderers.
pub fn any_table<E: Into<AnyScalar> + Clone>(rows: &[Vec<E>]) -> Table<AnyScalar> {
    to_any_table(rows.to_vec())
}
