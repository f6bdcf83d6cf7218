//! Variance markers and tensor signatures.
//!
//! A signature is the ordered list of variances of a tensor's axes. Its textual
//! form is a string over `u` (contravariant, "up") and `d` (covariant, "down"),
//! e.g. `"ud"` for a linear map.

use alloc::{string::String, vec::Vec};
use core::{fmt, ops::Index, str::FromStr};

use crate::error::SignatureParseError;

/// Variance of a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variance {
    /// Contravariant axis, written `u`.
    Up,
    /// Covariant axis, written `d`.
    Down,
}

impl Variance {
    /// Parses a single marker.
    pub fn from_char(c: char) -> Result<Self, SignatureParseError> {
        match c {
            'u' => Ok(Variance::Up),
            'd' => Ok(Variance::Down),
            other => Err(SignatureParseError(other)),
        }
    }

    /// Textual marker of the variance.
    pub fn as_char(self) -> char {
        match self {
            Variance::Up => 'u',
            Variance::Down => 'd',
        }
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered variances of a tensor's axes.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(Vec<Variance>);

impl Signature {
    /// Signature of a rank-0 tensor.
    pub fn scalar() -> Self {
        Self(Vec::new())
    }

    /// Wraps a list of variances.
    pub fn from_raw(variances: Vec<Variance>) -> Self {
        Self(variances)
    }

    /// Unwraps into the list of variances.
    pub fn into_raw(self) -> Vec<Variance> {
        self.0
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature belongs to a rank-0 tensor.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Variances as a slice.
    pub fn as_slice(&self) -> &[Variance] {
        &self.0
    }

    /// Iterates the variances in axis order.
    pub fn iter(&self) -> impl Iterator<Item = Variance> + '_ {
        self.0.iter().copied()
    }

    /// Number of axes with the given variance.
    pub fn count(&self, variance: Variance) -> usize {
        self.0.iter().filter(|&&v| v == variance).count()
    }

    /// Concatenation `self ++ other`.
    pub fn concat(&self, other: &Signature) -> Signature {
        let mut v = Vec::with_capacity(self.len() + other.len());
        v.extend_from_slice(&self.0);
        v.extend_from_slice(&other.0);
        Signature(v)
    }

    /// Removes the axes `a` and `b` (`a < b`), keeping the order of the others.
    pub(crate) fn remove_pair(&mut self, a: usize, b: usize) {
        debug_assert!(a < b);
        self.0.remove(b);
        self.0.remove(a);
    }

    /// Swaps the variances of axes `a` and `b`.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }
}

impl Index<usize> for Signature {
    type Output = Variance;
    fn index(&self, index: usize) -> &Variance {
        &self.0[index]
    }
}

impl FromStr for Signature {
    type Err = SignatureParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Variance::from_char).collect()
    }
}

impl FromIterator<Variance> for Signature {
    fn from_iter<I: IntoIterator<Item = Variance>>(iter: I) -> Self {
        Signature(iter.into_iter().collect())
    }
}

impl From<Vec<Variance>> for Signature {
    fn from(v: Vec<Variance>) -> Self {
        Signature(v)
    }
}

impl From<&Signature> for String {
    fn from(sig: &Signature) -> Self {
        sig.iter().map(Variance::as_char).collect()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.0 {
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
