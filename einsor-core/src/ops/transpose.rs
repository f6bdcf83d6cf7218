//! Axis swap.

use alloc::rc::Rc;

use crate::{
    error::ShapeError,
    ring::Ring,
    tensor::{CoordFn, Tensor},
};

/// Swaps axes `a` and `b`: signature, dimension and the coordinate function's argument order all trade places.
///
/// Transposing an axis with itself returns an equal tensor.
pub fn transpose<R: Ring>(
    tensor: &Tensor<R>,
    a: usize,
    b: usize,
) -> Result<Tensor<R>, ShapeError> {
    let rank = tensor.rank();
    for axis in [a, b] {
        if axis >= rank {
            return Err(ShapeError::AxisOutOfRange { axis, rank });
        }
    }
    if a == b {
        return Ok(tensor.clone());
    }
    let (a, b) = if a < b { (a, b) } else { (b, a) };
    let (inner, mut signature, mut dimension, ring) = tensor.clone().into_raw();
    signature.swap(a, b);
    dimension.swap(a, b);
    let coords: CoordFn<R::Elem> = Rc::new(move |index: &[usize]| {
        let mut original = index.to_vec();
        original.swap(a, b);
        inner(&original)
    });
    Ok(unsafe { Tensor::from_raw_unchecked(coords, signature, dimension, ring) })
}

impl<R: Ring> Tensor<R> {
    /// Method form of [`transpose`].
    pub fn transpose(&self, a: usize, b: usize) -> Result<Self, ShapeError> {
        transpose(self, a, b)
    }
}
