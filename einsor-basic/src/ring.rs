//! Built-in rings.

use alloc::{format, string::String};
use core::{fmt::Debug, marker::PhantomData};

use einsor_core::ring::Ring;
use num_complex::{Complex32, Complex64};
use num_traits::{Num, WrappingAdd, WrappingMul};

use crate::error::BuildError;

/// Primitive numbers usable as entries of a [`NumericRing`].
///
/// The ring operations must be total: integer types wrap on overflow instead of panicking.
pub trait Scalar: Num + Copy + Debug + 'static {
    /// Name of the ring over this type.
    const RING_NAME: &'static str;

    /// `self + rhs` in the ring.
    #[inline]
    fn ring_add(self, rhs: Self) -> Self {
        self + rhs
    }

    /// `self * rhs` in the ring.
    #[inline]
    fn ring_mul(self, rhs: Self) -> Self {
        self * rhs
    }
}

macro_rules! impl_scalar {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Scalar for $t {
                const RING_NAME: &'static str = $name;
            }
        )*
    };
}

macro_rules! impl_wrapping_scalar {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Scalar for $t {
                const RING_NAME: &'static str = $name;

                #[inline]
                fn ring_add(self, rhs: Self) -> Self {
                    WrappingAdd::wrapping_add(&self, &rhs)
                }

                #[inline]
                fn ring_mul(self, rhs: Self) -> Self {
                    WrappingMul::wrapping_mul(&self, &rhs)
                }
            }
        )*
    };
}

impl_wrapping_scalar!(
    i32 => "i32",
    i64 => "int",
);

impl_scalar!(
    f32 => "f32",
    f64 => "real",
    Complex32 => "complex32",
    Complex64 => "complex",
);

/// A primitive number type under its own `+` and `*`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRing<T>(PhantomData<fn() -> T>);

impl<T: Scalar> NumericRing<T> {
    /// The ring over `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Scalar> Ring for NumericRing<T> {
    type Elem = T;

    fn name(&self) -> String {
        String::from(T::RING_NAME)
    }

    #[inline]
    fn add(&self, lhs: &T, rhs: &T) -> T {
        lhs.ring_add(*rhs)
    }

    #[inline]
    fn multiply(&self, lhs: &T, rhs: &T) -> T {
        lhs.ring_mul(*rhs)
    }
}

/// 64-bit integers.
pub type IntRing = NumericRing<i64>;

/// Double precision reals.
pub type RealRing = NumericRing<f64>;

/// Double precision complex numbers.
pub type ComplexRing = NumericRing<Complex64>;

/// Symbolic ring over strings.
///
/// `multiply(x, y) = "(x)(y)"` and `add(x, y) = "x + y"`, so a reified entry spells out which products were summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringRing;

impl Ring for StringRing {
    type Elem = String;

    fn name(&self) -> String {
        String::from("string")
    }

    fn add(&self, lhs: &String, rhs: &String) -> String {
        format!("{lhs} + {rhs}")
    }

    fn multiply(&self, lhs: &String, rhs: &String) -> String {
        format!("({lhs})({rhs})")
    }
}

/// Integers modulo a positive modulus.
///
/// Rings with different moduli are different rings: their tensors cannot be summed or multiplied together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModularRing {
    modulus: i64,
}

impl ModularRing {
    /// Integers modulo `modulus`.
    pub fn new(modulus: i64) -> Result<Self, BuildError> {
        if modulus > 0 {
            Ok(Self { modulus })
        } else {
            Err(BuildError::InvalidModulus(modulus))
        }
    }

    /// The modulus.
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Canonical representative of `x`, in `0..modulus`.
    pub fn reduce(&self, x: i64) -> i64 {
        x.rem_euclid(self.modulus)
    }

    fn reduce_wide(&self, x: i128) -> i64 {
        // the remainder is below the modulus, which fits i64
        x.rem_euclid(i128::from(self.modulus)) as i64
    }
}

impl Ring for ModularRing {
    type Elem = i64;

    fn name(&self) -> String {
        format!("int mod {}", self.modulus)
    }

    fn add(&self, lhs: &i64, rhs: &i64) -> i64 {
        self.reduce_wide(i128::from(*lhs) + i128::from(*rhs))
    }

    fn multiply(&self, lhs: &i64, rhs: &i64) -> i64 {
        self.reduce_wide(i128::from(*lhs) * i128::from(*rhs))
    }
}
