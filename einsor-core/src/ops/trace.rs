//! Contraction of two axes, with an optional per-entry cache.

use alloc::{collections::BTreeMap, rc::Rc, vec::Vec};
use core::cell::RefCell;

use crate::{
    coord::spread,
    error::ShapeError,
    profiler::Profiler,
    ring::Ring,
    tensor::{CoordFn, Tensor, ToTensor},
};

/// Intermediate task struct for contracting two axes of one tensor.
///
/// Axes `a` and `b` are removed (the other axes keep their relative order) and every entry of the result is the ring sum, over `k`, of the input entry with `k` reinserted at both positions. The axis order passed in does not matter.
///
/// The result memoizes its entries per reduced coordinate, in a cache owned by that one result. Disable with [`Trace::memoize`].
#[derive(Clone, Debug)]
pub struct Trace<R: Ring> {
    tensor: Tensor<R>,
    a: usize,
    b: usize,
    memoize: bool,
}

impl<R: Ring> Trace<R> {
    /// Construct a `Trace` over axes `a` and `b`, checking both exist, differ, and have equal sizes.
    pub fn new(tensor: impl ToTensor<Ring = R>, a: usize, b: usize) -> Result<Self, ShapeError> {
        let tensor = tensor.to_tensor();
        let rank = tensor.rank();
        for axis in [a, b] {
            if axis >= rank {
                return Err(ShapeError::AxisOutOfRange { axis, rank });
            }
        }
        if a == b {
            return Err(ShapeError::SameAxis(a));
        }
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        let (dim_a, dim_b) = (tensor.dimension()[a], tensor.dimension()[b]);
        if dim_a != dim_b {
            return Err(ShapeError::TraceDimensionMismatch { a, b, dim_a, dim_b });
        }
        Ok(Self {
            tensor,
            a,
            b,
            memoize: true,
        })
    }

    /// Enables or disables the entry cache of the result.
    pub fn memoize(self, memoize: bool) -> Self {
        Self { memoize, ..self }
    }

    /// The contracted axes, smaller first.
    pub fn axes(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    fn build(self, profiler: Option<Profiler>) -> Tensor<R> {
        let (a, b) = (self.a, self.b);
        let (inner, mut signature, mut dimension, ring) = self.tensor.into_raw();
        let extent = dimension[a];
        signature.remove_pair(a, b);
        dimension.remove(b);
        dimension.remove(a);

        let cache: Option<RefCell<BTreeMap<Vec<usize>, R::Elem>>> =
            self.memoize.then(RefCell::default);
        let sum_ring = ring.clone();
        let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| {
            if let Some(cache) = &cache {
                if let Some(hit) = cache.borrow().get(index) {
                    if let Some(p) = &profiler {
                        p.record_cache_hit();
                    }
                    return hit.clone();
                }
            }
            let mut full = spread(index, a, b, 0);
            let mut acc = inner(&full);
            for k in 1..extent {
                full[a] = k;
                full[b] = k;
                let term = inner(&full);
                if let Some(p) = &profiler {
                    p.record_add();
                }
                acc = sum_ring.add(&acc, &term);
            }
            if let Some(cache) = &cache {
                cache.borrow_mut().insert(index.to_vec(), acc.clone());
            }
            acc
        });
        unsafe { Tensor::from_raw_unchecked(coords, signature, dimension, ring) }
    }
}

impl_task!(Trace);
