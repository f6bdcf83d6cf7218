//! Elementwise application of a unary function.

use alloc::rc::Rc;
use core::fmt;

use crate::{
    error::RingMismatch,
    profiler::Profiler,
    ring::{Ring, ensure_same_ring},
    tensor::{CoordFn, Tensor, ToTensor},
};

/// A unary function bound to a ring.
#[derive(Clone)]
pub struct Function<R: Ring> {
    ring: R,
    f: Rc<dyn Fn(&R::Elem) -> R::Elem>,
}

impl<R: Ring> Function<R> {
    /// Binds `f` to `ring`.
    pub fn new(ring: R, f: impl Fn(&R::Elem) -> R::Elem + 'static) -> Self {
        Self { ring, f: Rc::new(f) }
    }

    /// The ring the function maps within.
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Evaluates the function at `x`.
    pub fn call(&self, x: &R::Elem) -> R::Elem {
        (self.f)(x)
    }
}

impl<R: Ring> fmt::Debug for Function<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

/// Intermediate task struct for mapping a [`Function`] over every entry.
#[derive(Clone, Debug)]
pub struct Apply<R: Ring> {
    function: Function<R>,
    tensor: Tensor<R>,
}

impl<R: Ring> Apply<R> {
    /// Construct an `Apply`, checking the function and the tensor share one ring.
    pub fn new(
        function: &Function<R>,
        tensor: impl ToTensor<Ring = R>,
    ) -> Result<Self, RingMismatch> {
        let tensor = tensor.to_tensor();
        ensure_same_ring(function.ring(), tensor.ring())?;
        Ok(Self {
            function: function.clone(),
            tensor,
        })
    }

    // applying the function is not a ring operation, so the profiler has nothing to count
    fn build(self, _profiler: Option<Profiler>) -> Tensor<R> {
        let (inner, signature, dimension, ring) = self.tensor.into_raw();
        let f = self.function.f;
        let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| f(&inner(index)));
        unsafe { Tensor::from_raw_unchecked(coords, signature, dimension, ring) }
    }
}

impl_task!(Apply);
