//! Outer product.

use core::ops::Mul;

use alloc::rc::Rc;

use crate::{
    error::RingMismatch,
    profiler::Profiler,
    ring::{Ring, ensure_same_ring},
    tensor::{CoordFn, Tensor, ToTensor},
};

/// Intermediate task struct for the outer product.
///
/// The result has rank `lhs.rank() + rhs.rank()`, signature and dimension `lhs ++ rhs`, and entry `lhs[i] * rhs[j]` at the concatenated coordinate `i ++ j`. No summation occurs.
#[derive(Clone, Debug)]
pub struct Product<R: Ring> {
    lhs: Tensor<R>,
    rhs: Tensor<R>,
}

impl<R: Ring> Product<R> {
    /// Construct a `Product`, checking both factors share one ring.
    pub fn new(
        lhs: impl ToTensor<Ring = R>,
        rhs: impl ToTensor<Ring = R>,
    ) -> Result<Self, RingMismatch> {
        let lhs = lhs.to_tensor();
        let rhs = rhs.to_tensor();
        ensure_same_ring(lhs.ring(), rhs.ring())?;
        Ok(Self { lhs, rhs })
    }

    fn build(self, profiler: Option<Profiler>) -> Tensor<R> {
        let split = self.lhs.rank();
        let signature = self.lhs.signature().concat(self.rhs.signature());
        let mut dimension = self.lhs.dimension().to_vec();
        dimension.extend_from_slice(self.rhs.dimension());

        let (lf, _, _, ring) = self.lhs.into_raw();
        let rf = self.rhs.coords().clone();
        let mul_ring = ring.clone();
        let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| {
            let (i, j) = index.split_at(split);
            if let Some(p) = &profiler {
                p.record_multiply();
            }
            mul_ring.multiply(&lf(i), &rf(j))
        });
        unsafe { Tensor::from_raw_unchecked(coords, signature, dimension, ring) }
    }
}

impl_task!(Product);

macro_rules! impl_mul {
    ($l:ty,$r:ty $(,$life:lifetime)* ) => {
        impl<$($life,)* R: Ring> Mul<$r> for $l {
            type Output = Result<Product<R>, RingMismatch>;
            fn mul(self, rhs: $r) -> Self::Output {
                Product::new(self, rhs)
            }
        }
    };
}

impl_mul!(Tensor<R>, Tensor<R>);
impl_mul!(&'l Tensor<R>, Tensor<R>, 'l);
impl_mul!(Tensor<R>, &'r Tensor<R>, 'r);
impl_mul!(&'l Tensor<R>, &'r Tensor<R>, 'l, 'r);
