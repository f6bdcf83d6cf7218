//! Einstein-summation evaluator for [`Term`]s.

use alloc::{string::String, vec::Vec};
use tracing::{debug, warn};

use crate::{
    error::{EvalError, LabelError},
    ops::{Product, Trace},
    profiler::Profiler,
    ring::Ring,
    signature::Signature,
    tensor::{Tensor, TensorTask},
    term::Term,
};

/// Knobs of an [`Evaluator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    /// Memoize the entries of every contraction step.
    pub memoize_traces: bool,
    /// Emit a warning when a contracted label pair has the same variance on both sides.
    pub flag_same_variance: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            memoize_traces: true,
            flag_same_variance: true,
        }
    }
}

/// Evaluates terms by outer product followed by repeated contraction.
///
/// 1. Every factor is checked: each carries exactly one label per axis, and no label occurs more than twice in the whole term. Nothing is computed for an invalid term.
/// 2. The factors are multiplied in order into one tensor whose axes line up with the concatenated labels, carrying the concatenated *written* variances.
/// 3. While some label occurs twice, the leftmost such label is contracted and its two axes are dropped.
///
/// The result keeps the free labels in order, with their written variances. A contracted pair is not required to have opposite variance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// An evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluates `term` with a fresh profiler.
    pub fn evaluate<R: Ring>(&self, term: &Term<R>) -> Result<(Tensor<R>, Profiler), EvalError> {
        let profiler = Profiler::new();
        let tensor = self.evaluate_profiled(term, &profiler)?;
        Ok((tensor, profiler))
    }

    /// Evaluates `term`, tallying into `profiler`.
    pub fn evaluate_profiled<R: Ring>(
        &self,
        term: &Term<R>,
        profiler: &Profiler,
    ) -> Result<Tensor<R>, EvalError> {
        let factors = term.factors();
        let (first, rest) = factors.split_first().ok_or(EvalError::EmptyTerm)?;

        for factor in factors {
            if factor.labels().len() != factor.tensor().rank() {
                return Err(LabelError::ArityMismatch {
                    labels: factor.label_string(),
                    rank: factor.tensor().rank(),
                }
                .into());
            }
        }
        let mut labels: Vec<char> = factors
            .iter()
            .flat_map(|f| f.labels().iter().copied())
            .collect();
        check_multiplicity(&labels)?;
        let mut signature: Signature = factors.iter().flat_map(|f| f.signature().iter()).collect();

        debug!(
            labels = %labels.iter().collect::<String>(),
            signature = %signature,
            factors = factors.len(),
            "evaluating term"
        );

        let mut current = first.tensor().clone();
        for factor in rest {
            current = Product::new(&current, factor.tensor())?.with(profiler);
        }
        current = current.reshape(signature.clone())?;

        while let Some((a, b)) = next_pair(&labels) {
            let label = labels[a];
            if self.config.flag_same_variance && signature[a] == signature[b] {
                warn!(
                    label = %label,
                    variance = %signature[a],
                    "contracting a same-variance index pair"
                );
            }
            current = Trace::new(&current, a, b)?
                .memoize(self.config.memoize_traces)
                .with(profiler);
            profiler.record_contraction();
            labels.remove(b);
            labels.remove(a);
            signature.remove_pair(a, b);
            debug!(label = %label, a, b, rank = current.rank(), "contracted");
        }
        Ok(current)
    }
}

/// Evaluates `term` with the default configuration.
pub fn evaluate<R: Ring>(term: &Term<R>) -> Result<(Tensor<R>, Profiler), EvalError> {
    Evaluator::default().evaluate(term)
}

fn check_multiplicity(labels: &[char]) -> Result<(), LabelError> {
    for &label in labels {
        let count = labels.iter().filter(|&&l| l == label).count();
        if count > 2 {
            return Err(LabelError::RepeatedTooOften { label, count });
        }
    }
    Ok(())
}

// leftmost label with a second occurrence, as positions (first, second)
fn next_pair(labels: &[char]) -> Option<(usize, usize)> {
    labels.iter().enumerate().find_map(|(i, l)| {
        labels[i + 1..]
            .iter()
            .position(|x| x == l)
            .map(|offset| (i, i + 1 + offset))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ShapeError, ring::tests::Z, term};
    use alloc::{string::ToString, vec};

    fn vector(values: &'static [i64], sig: &str) -> Tensor<Z> {
        Tensor::new(
            Z,
            move |i: &[usize]| values[i[0]],
            sig.parse().unwrap(),
            vec![values.len()],
        )
        .unwrap()
    }

    fn matrix(rows: &'static [[i64; 2]; 2]) -> Tensor<Z> {
        Tensor::new(
            Z,
            move |i: &[usize]| rows[i[0]][i[1]],
            "ud".parse().unwrap(),
            vec![2, 2],
        )
        .unwrap()
    }

    #[test]
    fn pair_scan_is_leftmost() {
        assert_eq!(next_pair(&['i', 'j', 'j', 'i']), Some((0, 3)));
        assert_eq!(next_pair(&['a', 'j', 'b', 'j']), Some((1, 3)));
        assert_eq!(next_pair(&['a', 'b']), None);
    }

    #[test]
    fn dot_product() -> anyhow::Result<()> {
        let a = vector(&[1, 2, 3], "u");
        let b = vector(&[4, 5, 6], "d");
        let (t, profiler) = term![a.up("i"), b.down("i")].eval()?;
        assert_eq!(t.rank(), 0);
        assert_eq!(t.reify(), vec![vec![32]]);
        assert_eq!(profiler.multiplies(), 3);
        assert_eq!(profiler.adds(), 2);
        assert_eq!(profiler.contractions(), 1);
        Ok(())
    }

    #[test]
    fn matrix_product() -> anyhow::Result<()> {
        let a = matrix(&[[1, 2], [3, 4]]);
        let b = matrix(&[[5, 6], [7, 8]]);
        let (c, _) = evaluate(&term![a.up("i").down("j"), b.up("j").down("k")])?;
        assert_eq!(c.signature().to_string(), "ud");
        assert_eq!(c.reify(), vec![vec![19, 22], vec![43, 50]]);
        Ok(())
    }

    #[test]
    fn free_labels_keep_written_variance() -> anyhow::Result<()> {
        let a = matrix(&[[1, 2], [3, 4]]);
        let (t, _) = term![a.down("ij")].eval()?;
        assert_eq!(t.signature().to_string(), "dd");
        assert_eq!(t.reify(), vec![vec![1, 2, 3, 4]]);
        Ok(())
    }

    #[test]
    fn same_variance_pair_is_contracted() -> anyhow::Result<()> {
        let a = vector(&[1, 2, 3], "u");
        let (t, _) = term![a.up("i"), a.up("i")].eval()?;
        assert_eq!(t.get(&[])?, 14);
        let quiet = Evaluator::new(EvalConfig {
            flag_same_variance: false,
            ..EvalConfig::default()
        });
        assert!(!quiet.config().flag_same_variance);
        assert!(quiet.config().memoize_traces);
        let (t, _) = quiet.evaluate(&term![a.up("i"), a.up("i")])?;
        assert_eq!(t.get(&[])?, 14);
        Ok(())
    }

    #[test]
    fn empty_term() {
        let t: Term<Z> = Term::default();
        assert_eq!(t.eval().unwrap_err(), EvalError::EmptyTerm);
    }

    #[test]
    fn repeated_label() {
        let a = vector(&[1, 2], "u");
        let err = term![a.up("i"), a.down("i"), a.up("i")].eval().unwrap_err();
        assert_eq!(
            err,
            EvalError::Label(LabelError::RepeatedTooOften {
                label: 'i',
                count: 3
            })
        );
    }

    #[test]
    fn arity_mismatch() {
        let a = matrix(&[[1, 2], [3, 4]]);
        let err = term![a.up("i")].eval().unwrap_err();
        assert_eq!(
            err,
            EvalError::Label(LabelError::ArityMismatch {
                labels: "i".to_string(),
                rank: 2
            })
        );
    }

    #[test]
    fn contraction_dimension_mismatch() {
        let a = vector(&[1, 2], "u");
        let b = vector(&[1, 2, 3], "d");
        let err = term![a.up("i"), b.down("i")].eval().unwrap_err();
        assert!(matches!(
            err,
            EvalError::Shape(ShapeError::TraceDimensionMismatch { .. })
        ));
    }

    #[test]
    fn memo_off_matches_memo_on() -> anyhow::Result<()> {
        let a = matrix(&[[1, 2], [3, 4]]);
        let term = term![a.up("i").down("j"), a.up("j").down("k"), a.up("k").down("l")];
        let (on, _) = Evaluator::default().evaluate(&term)?;
        let (off, _) = Evaluator::new(EvalConfig {
            memoize_traces: false,
            ..EvalConfig::default()
        })
        .evaluate(&term)?;
        assert_eq!(on.reify(), off.reify());
        assert_eq!(on.reify(), vec![vec![37, 54], vec![81, 118]]);
        Ok(())
    }
}
