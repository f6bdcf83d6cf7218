//! Core crate of einsor.

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

// core concepts

pub mod ring;

pub mod signature;

pub mod tensor;

pub mod error;

// operators built on core concepts
// every operator is lazy: it returns a new tensor whose coordinate function
// composes the inputs' coordinate functions

pub mod ops;

pub mod profiler;

pub mod reify;

// abstract index notation

pub mod term;

pub mod eval;

pub mod expr;

// common

mod coord;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::error::*;
    pub use crate::eval::*;
    pub use crate::expr::*;
    pub use crate::ops::*;
    pub use crate::profiler::*;
    pub use crate::reify::*;
    pub use crate::ring::*;
    pub use crate::signature::*;
    pub use crate::tensor::*;
    pub use crate::term::*;

    pub use crate::term;
}
