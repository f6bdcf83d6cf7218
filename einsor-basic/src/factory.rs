//! Builders for tensors and functions over the built-in rings.

use alloc::{string::String, vec, vec::Vec};

use einsor_core::{
    ops::Function,
    ring::Ring,
    signature::{Signature, Variance},
    tensor::Tensor,
};
use num_complex::Complex64;

use crate::{
    error::BuildError,
    ring::{ComplexRing, IntRing, ModularRing, NumericRing, RealRing, Scalar, StringRing},
};

/// Builds a tensor over `ring` from a coordinate function and a signature string such as `"ud"`.
pub fn tensor<R: Ring>(
    ring: R,
    f: impl Fn(&[usize]) -> R::Elem + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<R>, BuildError> {
    let signature: Signature = signature.parse()?;
    Ok(Tensor::new(ring, f, signature, dimension.to_vec())?)
}

/// Integer tensor.
pub fn int_tensor(
    f: impl Fn(&[usize]) -> i64 + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<IntRing>, BuildError> {
    tensor(IntRing::new(), f, signature, dimension)
}

/// Real tensor.
pub fn real_tensor(
    f: impl Fn(&[usize]) -> f64 + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<RealRing>, BuildError> {
    tensor(RealRing::new(), f, signature, dimension)
}

/// Complex tensor.
pub fn complex_tensor(
    f: impl Fn(&[usize]) -> Complex64 + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<ComplexRing>, BuildError> {
    tensor(ComplexRing::new(), f, signature, dimension)
}

/// Tensor over the symbolic string ring.
pub fn string_tensor(
    f: impl Fn(&[usize]) -> String + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<StringRing>, BuildError> {
    tensor(StringRing, f, signature, dimension)
}

/// Tensor over integers modulo `ring.modulus()`; entries are reduced on the way out.
pub fn modular_tensor(
    ring: ModularRing,
    f: impl Fn(&[usize]) -> i64 + 'static,
    signature: &str,
    dimension: &[usize],
) -> Result<Tensor<ModularRing>, BuildError> {
    tensor(ring, move |i: &[usize]| ring.reduce(f(i)), signature, dimension)
}

/// Rank-0 tensor holding `value`.
pub fn scalar<R: Ring>(ring: R, value: R::Elem) -> Tensor<R> {
    let f = move |_: &[usize]| value.clone();
    // rank 0 with an empty dimension list always satisfies the tensor invariants
    unsafe {
        Tensor::from_raw_unchecked(
            alloc::rc::Rc::new(f),
            Signature::scalar(),
            Vec::new(),
            ring,
        )
    }
}

/// Rank-0 integer tensor.
pub fn int_scalar(value: i64) -> Tensor<IntRing> {
    scalar(IntRing::new(), value)
}

/// Rank-0 real tensor.
pub fn real_scalar(value: f64) -> Tensor<RealRing> {
    scalar(RealRing::new(), value)
}

/// Rank-0 complex tensor.
pub fn complex_scalar(value: Complex64) -> Tensor<ComplexRing> {
    scalar(ComplexRing::new(), value)
}

/// Rank-0 string tensor.
pub fn string_scalar(value: impl Into<String>) -> Tensor<StringRing> {
    scalar(StringRing, value.into())
}

/// Rank-1 tensor holding `values`.
pub fn vector<R: Ring>(
    ring: R,
    values: Vec<R::Elem>,
    variance: Variance,
) -> Result<Tensor<R>, BuildError> {
    let n = values.len();
    let f = move |i: &[usize]| values[i[0]].clone();
    Ok(Tensor::new(ring, f, Signature::from_raw(vec![variance]), vec![n])?)
}

/// Rank-2 tensor holding `rows`, indexed `[row, column]`.
pub fn matrix<R: Ring>(
    ring: R,
    rows: Vec<Vec<R::Elem>>,
    signature: &str,
) -> Result<Tensor<R>, BuildError> {
    let cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != cols) {
        return Err(BuildError::Ragged);
    }
    let dimension = [rows.len(), cols];
    tensor(ring, move |i: &[usize]| rows[i[0]][i[1]].clone(), signature, &dimension)
}

/// Generalized Kronecker delta: one where all indices agree, zero elsewhere.
///
/// With signature `"udd"` this is the indicator used to write a Hadamard product as a contraction.
pub fn kronecker<T: Scalar>(
    signature: &str,
    size: usize,
) -> Result<Tensor<NumericRing<T>>, BuildError> {
    let rank = signature.chars().count();
    let f = |i: &[usize]| {
        if i.windows(2).all(|w| w[0] == w[1]) {
            T::one()
        } else {
            T::zero()
        }
    };
    tensor(NumericRing::new(), f, signature, &vec![size; rank])
}

/// Levi-Civita symbol of rank `signature.len()`: the sign of the permutation, zero on repeated indices.
pub fn levi_civita<T: Scalar>(signature: &str) -> Result<Tensor<NumericRing<T>>, BuildError> {
    let rank = signature.chars().count();
    let f = |i: &[usize]| {
        let mut inversions = 0;
        for (a, x) in i.iter().enumerate() {
            for y in &i[a + 1..] {
                if x == y {
                    return T::zero();
                }
                if x > y {
                    inversions += 1;
                }
            }
        }
        if inversions % 2 == 0 {
            T::one()
        } else {
            T::zero() - T::one()
        }
    };
    tensor(NumericRing::new(), f, signature, &vec![rank; rank])
}

/// Integer function.
pub fn int_function(f: impl Fn(i64) -> i64 + 'static) -> Function<IntRing> {
    Function::new(IntRing::new(), move |x: &i64| f(*x))
}

/// Real function.
pub fn real_function(f: impl Fn(f64) -> f64 + 'static) -> Function<RealRing> {
    Function::new(RealRing::new(), move |x: &f64| f(*x))
}

/// Complex function.
pub fn complex_function(f: impl Fn(Complex64) -> Complex64 + 'static) -> Function<ComplexRing> {
    Function::new(ComplexRing::new(), move |x: &Complex64| f(*x))
}

/// String function.
pub fn string_function(f: impl Fn(&str) -> String + 'static) -> Function<StringRing> {
    Function::new(StringRing, move |x: &String| f(x))
}
