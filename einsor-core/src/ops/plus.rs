//! Elementwise sum of two tensors of the same shape.

use alloc::rc::Rc;
use core::ops::Add;

use crate::{
    error::{CombineError, ShapeError},
    profiler::Profiler,
    ring::{Ring, ensure_same_ring},
    tensor::{CoordFn, Tensor, ToTensor},
};

/// Intermediate task struct for elementwise addition.
///
/// Both operands must share ring, dimension and signature; nothing is broadcast or coerced.
#[derive(Clone, Debug)]
pub struct Plus<R: Ring> {
    lhs: Tensor<R>,
    rhs: Tensor<R>,
}

impl<R: Ring> Plus<R> {
    /// Construct a `Plus`, checking ring, then dimension, then signature.
    pub fn new(
        lhs: impl ToTensor<Ring = R>,
        rhs: impl ToTensor<Ring = R>,
    ) -> Result<Self, CombineError> {
        let lhs = lhs.to_tensor();
        let rhs = rhs.to_tensor();
        ensure_same_ring(lhs.ring(), rhs.ring())?;
        if lhs.dimension() != rhs.dimension() {
            return Err(ShapeError::DimensionMismatch {
                lhs: lhs.dimension().to_vec(),
                rhs: rhs.dimension().to_vec(),
            }
            .into());
        }
        if lhs.signature() != rhs.signature() {
            return Err(ShapeError::SignatureMismatch {
                lhs: lhs.signature().clone(),
                rhs: rhs.signature().clone(),
            }
            .into());
        }
        Ok(Self { lhs, rhs })
    }

    fn build(self, profiler: Option<Profiler>) -> Tensor<R> {
        let (lf, signature, dimension, ring) = self.lhs.into_raw();
        let rf = self.rhs.coords().clone();
        let add_ring = ring.clone();
        let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| {
            if let Some(p) = &profiler {
                p.record_add();
            }
            add_ring.add(&lf(index), &rf(index))
        });
        unsafe { Tensor::from_raw_unchecked(coords, signature, dimension, ring) }
    }
}

impl_task!(Plus);

macro_rules! impl_add {
    ($l:ty,$r:ty $(,$life:lifetime)* ) => {
        impl<$($life,)* R: Ring> Add<$r> for $l {
            type Output = Result<Plus<R>, CombineError>;
            fn add(self, rhs: $r) -> Self::Output {
                Plus::new(self, rhs)
            }
        }
    };
}

impl_add!(Tensor<R>, Tensor<R>);
impl_add!(&'l Tensor<R>, Tensor<R>, 'l);
impl_add!(Tensor<R>, &'r Tensor<R>, 'r);
impl_add!(&'l Tensor<R>, &'r Tensor<R>, 'l, 'r);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ring::tests::{Mod, Z},
        tensor::{TensorDefaultTask, TensorTask},
    };
    use alloc::vec;

    fn filled(v: i64, sig: &str, dims: &[usize]) -> Tensor<Z> {
        Tensor::new(Z, move |_: &[usize]| v, sig.parse().unwrap(), dims.to_vec()).unwrap()
    }

    #[test]
    fn adds_entrywise() -> anyhow::Result<()> {
        let a = filled(2, "ud", &[2, 2]);
        let b = filled(5, "ud", &[2, 2]);
        let profiler = Profiler::new();
        let c = (&a + &b)?.with(&profiler);
        assert_eq!(c.get(&[1, 0])?, 7);
        assert_eq!(profiler.adds(), 1);
        Ok(())
    }

    #[test]
    fn dimension_mismatch() {
        let err = (filled(1, "ud", &[2, 2]) + filled(1, "ud", &[2, 3])).unwrap_err();
        assert_eq!(
            err,
            CombineError::Shape(ShapeError::DimensionMismatch {
                lhs: vec![2, 2],
                rhs: vec![2, 3]
            })
        );
    }

    #[test]
    fn signature_mismatch() {
        let err = Plus::new(filled(1, "ud", &[2, 2]), filled(1, "uu", &[2, 2])).unwrap_err();
        assert!(matches!(
            err,
            CombineError::Shape(ShapeError::SignatureMismatch { .. })
        ));
    }

    #[test]
    fn ring_mismatch_comes_first() {
        let a = Tensor::new(Mod(5), |_: &[usize]| 1, "u".parse().unwrap(), vec![2]).unwrap();
        let b = Tensor::new(Mod(7), |_: &[usize]| 1, "d".parse().unwrap(), vec![3]).unwrap();
        assert!(matches!((&a + &b).unwrap_err(), CombineError::Type(_)));
    }

    #[test]
    fn exec_without_profiler() -> anyhow::Result<()> {
        let a = filled(2, "u", &[3]);
        let c = Plus::new(&a, &a)?.exec();
        assert_eq!(c.get(&[2])?, 4);
        Ok(())
    }
}
