//! Composite expressions: sums and function applications over evaluated terms.

use alloc::boxed::Box;

use crate::{
    error::EvalError,
    eval::Evaluator,
    ops::{Apply, Function, Plus},
    profiler::Profiler,
    ring::Ring,
    tensor::{Tensor, TensorTask},
    term::Term,
};

/// Expression tree whose leaves are tensors or terms.
///
/// A layer of a feed-forward network, for instance, reads `Apply(sigmoid, Plus(biases, Term[w.up("i").down("j"), x.up("j")]))`.
#[derive(Clone, Debug)]
pub enum Expr<R: Ring> {
    /// A tensor taken as is.
    Tensor(Tensor<R>),
    /// A term, evaluated by Einstein summation.
    Term(Term<R>),
    /// Elementwise sum.
    Plus(Box<Expr<R>>, Box<Expr<R>>),
    /// Elementwise function application.
    Apply(Function<R>, Box<Expr<R>>),
}

impl<R: Ring> Expr<R> {
    /// `lhs + rhs`
    pub fn plus(lhs: impl Into<Expr<R>>, rhs: impl Into<Expr<R>>) -> Self {
        Expr::Plus(Box::new(lhs.into()), Box::new(rhs.into()))
    }

    /// `f(inner)` entrywise.
    pub fn apply(function: &Function<R>, inner: impl Into<Expr<R>>) -> Self {
        Expr::Apply(function.clone(), Box::new(inner.into()))
    }

    /// Evaluates with the default evaluator.
    pub fn eval(&self) -> Result<(Tensor<R>, Profiler), EvalError> {
        self.eval_with(&Evaluator::default())
    }

    /// Evaluates every node with `evaluator`, sharing one profiler across the whole tree.
    pub fn eval_with(&self, evaluator: &Evaluator) -> Result<(Tensor<R>, Profiler), EvalError> {
        let profiler = Profiler::new();
        let tensor = self.eval_into(evaluator, &profiler)?;
        Ok((tensor, profiler))
    }

    fn eval_into(
        &self,
        evaluator: &Evaluator,
        profiler: &Profiler,
    ) -> Result<Tensor<R>, EvalError> {
        Ok(match self {
            Expr::Tensor(t) => t.clone(),
            Expr::Term(term) => evaluator.evaluate_profiled(term, profiler)?,
            Expr::Plus(lhs, rhs) => {
                let lhs = lhs.eval_into(evaluator, profiler)?;
                let rhs = rhs.eval_into(evaluator, profiler)?;
                Plus::new(lhs, rhs)?.with(profiler)
            }
            Expr::Apply(function, inner) => {
                let inner = inner.eval_into(evaluator, profiler)?;
                Apply::new(function, inner)?.with(profiler)
            }
        })
    }
}

impl<R: Ring> From<Tensor<R>> for Expr<R> {
    fn from(t: Tensor<R>) -> Self {
        Expr::Tensor(t)
    }
}

impl<R: Ring> From<Term<R>> for Expr<R> {
    fn from(t: Term<R>) -> Self {
        Expr::Term(t)
    }
}
