//! Ring concept: the algebra tensor entries are combined with.

use alloc::string::String;
use core::fmt::Debug;

use crate::error::RingMismatch;

/// Element algebra of a tensor.
///
/// A ring supplies an addition and a multiplication over its element type. Both are assumed associative and addition commutative; neither identity is required, so sums are always folded from their first term.
///
/// The ring *value* is part of a tensor's identity: elementwise operators only combine tensors whose rings compare equal. Stateless rings are unit structs and always compare equal, while parametrised rings (e.g. integers modulo `n`) compare their parameters.
pub trait Ring: Clone + PartialEq + Debug + 'static {
    /// The element type.
    type Elem: Clone + Debug + 'static;

    /// Human readable identity of the ring, used in error messages.
    fn name(&self) -> String;

    /// `lhs + rhs`
    fn add(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Self::Elem;

    /// `lhs * rhs`
    fn multiply(&self, lhs: &Self::Elem, rhs: &Self::Elem) -> Self::Elem;
}

/// Fails with [`RingMismatch`] unless both ring values are identical.
pub fn ensure_same_ring<R: Ring>(lhs: &R, rhs: &R) -> Result<(), RingMismatch> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(RingMismatch {
            lhs: lhs.name(),
            rhs: rhs.name(),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::format;

    /// (max, +) over `i64`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub(crate) struct Tropical;

    impl Ring for Tropical {
        type Elem = i64;
        fn name(&self) -> String {
            String::from("tropical")
        }
        fn add(&self, lhs: &i64, rhs: &i64) -> i64 {
            *lhs.max(rhs)
        }
        fn multiply(&self, lhs: &i64, rhs: &i64) -> i64 {
            lhs + rhs
        }
    }

    /// Plain integers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub(crate) struct Z;

    impl Ring for Z {
        type Elem = i64;
        fn name(&self) -> String {
            String::from("Z")
        }
        fn add(&self, lhs: &i64, rhs: &i64) -> i64 {
            lhs + rhs
        }
        fn multiply(&self, lhs: &i64, rhs: &i64) -> i64 {
            lhs * rhs
        }
    }

    /// Integers modulo `0`-th parameter.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub(crate) struct Mod(pub i64);

    impl Ring for Mod {
        type Elem = i64;
        fn name(&self) -> String {
            format!("Z/{}", self.0)
        }
        fn add(&self, lhs: &i64, rhs: &i64) -> i64 {
            (lhs + rhs).rem_euclid(self.0)
        }
        fn multiply(&self, lhs: &i64, rhs: &i64) -> i64 {
            (lhs * rhs).rem_euclid(self.0)
        }
    }

    #[test]
    fn same_ring_passes() {
        assert!(ensure_same_ring(&Z, &Z).is_ok());
        assert!(ensure_same_ring(&Mod(5), &Mod(5)).is_ok());
    }

    #[test]
    fn parametrised_rings_differ() {
        let err = ensure_same_ring(&Mod(5), &Mod(7)).unwrap_err();
        assert_eq!(err.lhs, "Z/5");
        assert_eq!(err.rhs, "Z/7");
    }

    #[test]
    fn tropical_algebra() {
        assert_eq!(Tropical.add(&3, &5), 5);
        assert_eq!(Tropical.multiply(&3, &5), 8);
    }
}
