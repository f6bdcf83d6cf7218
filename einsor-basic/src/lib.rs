//! Built-in rings, tensor builders and a dynamically typed front end for einsor.

#![warn(missing_docs)]
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

pub mod ring;

pub mod factory;

pub mod any;

pub mod error;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::any::*;
    pub use crate::error::*;
    pub use crate::factory::*;
    pub use crate::ring::*;
}
