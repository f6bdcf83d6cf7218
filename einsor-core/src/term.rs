//! Labelled tensors and terms in abstract index notation.
//!
//! ```ignore
//! // c^i_k = a^i_j b^j_k
//! let (c, profiler) = term![a.up("i").down("j"), b.up("j").down("k")].eval()?;
//! ```

use alloc::{string::String, vec::Vec};

use crate::{
    error::EvalError,
    profiler::Profiler,
    ring::Ring,
    signature::{Signature, Variance},
    tensor::Tensor,
};

/// A tensor with one index label per axis, and the variances the labels are written with.
///
/// The written variances override the tensor's own signature inside a term.
#[derive(Clone, Debug)]
pub struct Labelled<R: Ring> {
    tensor: Tensor<R>,
    labels: Vec<char>,
    signature: Signature,
}

impl<R: Ring> Labelled<R> {
    /// A labelled view of `tensor` without labels yet.
    pub fn new(tensor: &Tensor<R>) -> Self {
        Self {
            tensor: tensor.clone(),
            labels: Vec::new(),
            signature: Signature::scalar(),
        }
    }

    fn push(mut self, labels: &str, variance: Variance) -> Self {
        for c in labels.chars() {
            self.labels.push(c);
        }
        self.signature = self
            .signature
            .iter()
            .chain(labels.chars().map(|_| variance))
            .collect();
        self
    }

    /// Appends contravariant labels.
    pub fn up(self, labels: &str) -> Self {
        self.push(labels, Variance::Up)
    }

    /// Appends covariant labels.
    pub fn down(self, labels: &str) -> Self {
        self.push(labels, Variance::Down)
    }

    /// The labelled tensor.
    pub fn tensor(&self) -> &Tensor<R> {
        &self.tensor
    }

    /// The labels, one per axis.
    pub fn labels(&self) -> &[char] {
        &self.labels
    }

    /// The written variances, one per label.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub(crate) fn label_string(&self) -> String {
        self.labels.iter().collect()
    }
}

impl<R: Ring> Tensor<R> {
    /// Labels leading axes as contravariant; chain with [`Labelled::down`] for mixed variance.
    pub fn up(&self, labels: &str) -> Labelled<R> {
        Labelled::new(self).up(labels)
    }

    /// Labels leading axes as covariant; chain with [`Labelled::up`] for mixed variance.
    pub fn down(&self, labels: &str) -> Labelled<R> {
        Labelled::new(self).down(labels)
    }
}

/// An ordered product of labelled tensors: the unit of evaluation.
///
/// A label on exactly two axes across the term is summed over; a label on one axis is a free axis of the result. More than two occurrences is an error.
#[derive(Clone, Debug)]
pub struct Term<R: Ring> {
    factors: Vec<Labelled<R>>,
}

impl<R: Ring> Term<R> {
    /// A term with the given factors, in order.
    pub fn new(factors: Vec<Labelled<R>>) -> Self {
        Self { factors }
    }

    /// Collects factors from any iterable.
    pub fn from_factors(factors: impl IntoIterator<Item = Labelled<R>>) -> Self {
        factors.into_iter().collect()
    }

    /// Appends a factor.
    pub fn push(&mut self, factor: Labelled<R>) {
        self.factors.push(factor);
    }

    /// The factors, in order.
    pub fn factors(&self) -> &[Labelled<R>] {
        &self.factors
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the term has no factors.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Evaluates with the default [`Evaluator`](crate::eval::Evaluator).
    pub fn eval(&self) -> Result<(Tensor<R>, Profiler), EvalError> {
        crate::eval::evaluate(self)
    }
}

impl<R: Ring> Default for Term<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: Ring> FromIterator<Labelled<R>> for Term<R> {
    fn from_iter<I: IntoIterator<Item = Labelled<R>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R: Ring> From<Vec<Labelled<R>>> for Term<R> {
    fn from(factors: Vec<Labelled<R>>) -> Self {
        Self::new(factors)
    }
}

impl<R: Ring> From<Labelled<R>> for Term<R> {
    fn from(factor: Labelled<R>) -> Self {
        Self::new(alloc::vec![factor])
    }
}

/// Builds a [`Term`] from labelled tensors.
#[macro_export]
macro_rules! term {
    ( $( $x:expr ),* $(,)? ) => {
        $crate::term::Term::from_factors([$($x),*])
    };
}
