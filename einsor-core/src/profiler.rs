//! Evaluation-scoped operation counters.

use alloc::rc::Rc;
use core::{cell::Cell, fmt};

#[derive(Debug, Default)]
struct Counters {
    multiplies: Cell<usize>,
    adds: Cell<usize>,
    cache_hits: Cell<usize>,
    contractions: Cell<usize>,
}

/// Counts the ring operations performed by lazily evaluated tensors.
///
/// A profiler is a shared handle: clones observe and update the same counters. Tensors built with a `&Profiler` context keep a handle and tally into it every time one of their entries is computed, so the counts keep growing as the result is queried.
///
/// Purely diagnostic; never affects results.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    counters: Rc<Counters>,
}

fn bump(c: &Cell<usize>) {
    c.set(c.get() + 1);
}

impl Profiler {
    /// A profiler with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring multiplications performed so far.
    pub fn multiplies(&self) -> usize {
        self.counters.multiplies.get()
    }

    /// Ring additions performed so far.
    pub fn adds(&self) -> usize {
        self.counters.adds.get()
    }

    /// Trace entries answered from the memo cache.
    pub fn cache_hits(&self) -> usize {
        self.counters.cache_hits.get()
    }

    /// Contraction steps performed by the evaluator.
    pub fn contractions(&self) -> usize {
        self.counters.contractions.get()
    }

    /// Snapshot of all counters.
    pub fn report(&self) -> ProfileReport {
        ProfileReport {
            multiplies: self.multiplies(),
            adds: self.adds(),
            cache_hits: self.cache_hits(),
            contractions: self.contractions(),
        }
    }

    pub(crate) fn record_multiply(&self) {
        bump(&self.counters.multiplies);
    }

    pub(crate) fn record_add(&self) {
        bump(&self.counters.adds);
    }

    pub(crate) fn record_cache_hit(&self) {
        bump(&self.counters.cache_hits);
    }

    pub(crate) fn record_contraction(&self) {
        bump(&self.counters.contractions);
    }
}

/// Copy of the counters of a [`Profiler`] at one point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProfileReport {
    /// ring multiplications
    pub multiplies: usize,
    /// ring additions
    pub adds: usize,
    /// memoized trace entries reused
    pub cache_hits: usize,
    /// evaluator contraction steps
    pub contractions: usize,
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "multiplies: {}, adds: {}, cache hits: {}, contractions: {}",
            self.multiplies, self.adds, self.cache_hits, self.contractions
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn clones_share_counters() {
        let p = Profiler::new();
        let q = p.clone();
        q.record_multiply();
        q.record_multiply();
        p.record_add();
        assert_eq!(p.multiplies(), 2);
        assert_eq!(q.adds(), 1);
    }

    #[test]
    fn report_prints_all_counters() {
        let p = Profiler::new();
        p.record_cache_hit();
        p.record_contraction();
        assert_eq!(
            p.report().to_string(),
            "multiplies: 0, adds: 0, cache hits: 1, contractions: 1"
        );
    }
}
