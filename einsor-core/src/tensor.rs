//! Lazy tensor concept: a coordinate function together with its signature, dimensions and ring.

use alloc::{rc::Rc, vec::Vec};
use core::fmt;

use crate::{
    coord::Coords,
    error::{ReshapeError, ShapeError},
    ring::Ring,
    signature::{Signature, Variance},
};

/// Shared coordinate function of a tensor.
pub type CoordFn<E> = Rc<dyn Fn(&[usize]) -> E>;

/// A lazy tensor.
///
/// In the conceptual model, a tensor is a multi-axis array without storage: every entry is computed on demand by its coordinate function. Each axis has a variance (`u` or `d`) and a positive size.
///
/// In practice, this struct is a cheap-to-clone immutable value. Derived tensors (products, traces, ...) close over the coordinate functions of their parents, so querying an entry walks the whole chain of operators it was built from. Use [`Tensor::materialize`] to cut a long chain.
///
/// # Invariants
///
/// - `signature.len() == dimension.len()`, the common value being the rank.
/// - every dimension is positive.
/// - the coordinate function is total over the coordinates within the dimensions.
///
/// Nothing mutates a tensor after construction; relabelling operations such as [`Tensor::reshape`] return a new tensor sharing the same coordinate function.
#[derive(Clone)]
pub struct Tensor<R: Ring> {
    coords: CoordFn<R::Elem>,
    signature: Signature,
    dimension: Vec<usize>,
    ring: R,
}

impl<R: Ring> Tensor<R> {
    /// Create a tensor from a coordinate function, checking that `signature` and `dimension` fit together.
    pub fn new(
        ring: R,
        f: impl Fn(&[usize]) -> R::Elem + 'static,
        signature: Signature,
        dimension: Vec<usize>,
    ) -> Result<Self, ShapeError> {
        Self::from_raw(Rc::new(f), signature, dimension, ring)
    }

    /// Create a tensor from raw parts, checking the invariants `signature.len() == dimension.len()` and `dimension[i] > 0`.
    pub fn from_raw(
        coords: CoordFn<R::Elem>,
        signature: Signature,
        dimension: Vec<usize>,
        ring: R,
    ) -> Result<Self, ShapeError> {
        if signature.len() != dimension.len() {
            return Err(ShapeError::RankMismatch {
                signature: signature.len(),
                dimension: dimension.len(),
            });
        }
        if let Some(axis) = dimension.iter().position(|&d| d == 0) {
            return Err(ShapeError::ZeroDimension { axis });
        }
        Ok(unsafe { Self::from_raw_unchecked(coords, signature, dimension, ring) })
    }

    /// Create a tensor from raw parts without checking.
    ///
    /// # Safety
    ///
    /// caller must ensure `signature.len() == dimension.len()`, that every dimension is positive, and that `coords` accepts every coordinate within `dimension`.
    pub unsafe fn from_raw_unchecked(
        coords: CoordFn<R::Elem>,
        signature: Signature,
        dimension: Vec<usize>,
        ring: R,
    ) -> Self {
        Self {
            coords,
            signature,
            dimension,
            ring,
        }
    }

    /// Decompose the tensor into its raw parts.
    pub fn into_raw(self) -> (CoordFn<R::Elem>, Signature, Vec<usize>, R) {
        (self.coords, self.signature, self.dimension, self.ring)
    }

    /// Variances of the axes.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Sizes of the axes.
    pub fn dimension(&self) -> &[usize] {
        &self.dimension
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dimension.len()
    }

    /// The ring the entries live in.
    pub fn ring(&self) -> &R {
        &self.ring
    }

    /// Bounds-checked query of one entry.
    pub fn get(&self, index: &[usize]) -> Result<R::Elem, ShapeError> {
        let fits = index.len() == self.rank()
            && index.iter().zip(&self.dimension).all(|(&i, &d)| i < d);
        if fits {
            Ok((self.coords)(index))
        } else {
            Err(ShapeError::CoordinateOutOfBounds {
                index: index.to_vec(),
                dimension: self.dimension.clone(),
            })
        }
    }

    /// Unchecked query; `index` must lie within the dimensions.
    #[inline]
    pub(crate) fn at(&self, index: &[usize]) -> R::Elem {
        (self.coords)(index)
    }

    pub(crate) fn coords(&self) -> &CoordFn<R::Elem> {
        &self.coords
    }

    /// Same entries under a different signature.
    pub fn reshape(&self, signature: Signature) -> Result<Self, ReshapeError> {
        if signature.len() != self.rank() {
            return Err(ReshapeError {
                expected: self.rank(),
                found: signature.len(),
            });
        }
        Ok(Self {
            signature,
            ..self.clone()
        })
    }

    /// Sizes of the contravariant (`u`) axes, in axis order.
    pub fn contravariant_dimensions(&self) -> Vec<usize> {
        self.dimensions_of(Variance::Up)
    }

    /// Sizes of the covariant (`d`) axes, in axis order.
    pub fn covariant_dimensions(&self) -> Vec<usize> {
        self.dimensions_of(Variance::Down)
    }

    fn dimensions_of(&self, variance: Variance) -> Vec<usize> {
        self.signature
            .iter()
            .zip(&self.dimension)
            .filter(|(v, _)| *v == variance)
            .map(|(_, &d)| d)
            .collect()
    }

    /// Evaluates every entry once and returns a tensor reading from the stored values.
    ///
    /// The result is observably identical to `self`, but querying it no longer walks the operator chain `self` was built from.
    pub fn materialize(&self) -> Self {
        let values: Vec<R::Elem> = Coords::new(&self.dimension).map(|c| self.at(&c)).collect();
        let strides = row_major_strides(&self.dimension);
        let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| {
            let offset: usize = index.iter().zip(&strides).map(|(i, s)| i * s).sum();
            values[offset].clone()
        });
        unsafe {
            Self::from_raw_unchecked(
                coords,
                self.signature.clone(),
                self.dimension.clone(),
                self.ring.clone(),
            )
        }
    }
}

fn row_major_strides(dimension: &[usize]) -> Vec<usize> {
    let mut strides = alloc::vec![1; dimension.len()];
    for axis in (0..dimension.len().saturating_sub(1)).rev() {
        strides[axis] = strides[axis + 1] * dimension[axis + 1];
    }
    strides
}

impl<R: Ring> fmt::Debug for Tensor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("signature", &self.signature)
            .field("dimension", &self.dimension)
            .field("ring", &self.ring)
            .finish_non_exhaustive()
    }
}

mod private {
    use crate::{ring::Ring, tensor::Tensor};
    pub trait ToTensorSealed {}
    impl<R: Ring> ToTensorSealed for Tensor<R> {}
    impl<R: Ring> ToTensorSealed for &Tensor<R> {}
}

/// Conversion trait to Tensor.
///
/// This trait is sealed, and implemented for Tensor and &Tensor. &Tensor is converted with a clone, which only bumps the reference count of the coordinate function.
///
/// This trait is useful for unifying the operator boilerplate for Tensor and &Tensor.
pub trait ToTensor: private::ToTensorSealed {
    /// The ring of the resulting tensor.
    type Ring: Ring;
    /// Converts itself to a tensor.
    fn to_tensor(self) -> Tensor<Self::Ring>;
}

impl<R: Ring> ToTensor for Tensor<R> {
    type Ring = R;
    fn to_tensor(self) -> Tensor<R> {
        self
    }
}

impl<R: Ring> ToTensor for &Tensor<R> {
    type Ring = R;
    fn to_tensor(self) -> Tensor<R> {
        self.clone()
    }
}

/// Trait expressing a tensor operation "task" that can be executed with a context.
///
/// Every operator is first built as a "task": construction validates the operands (axes, dimensions, rings) and fails early. Executing the task with a "context" produces the lazy result. The context decides how the work is observed: `()` runs it silently, `&Profiler` tallies every ring operation the result performs when it is queried.
pub trait TensorTask<C> {
    /// The output type of the task.
    type Output;
    /// Executes the task with `ctx`.
    fn with(self, ctx: C) -> Self::Output;
}

/// Utility trait for executing a tensor task with the default context `()`.
pub trait TensorDefaultTask: TensorTask<()> {
    /// Executes the task with the default context `()`.
    fn exec(self) -> Self::Output;
}
impl<T: TensorTask<()>> TensorDefaultTask for T {
    fn exec(self) -> Self::Output {
        self.with(())
    }
}
