//! Lazy tensor algebra over arbitrary rings, written in abstract index notation.
//!
//! Tensors are coordinate functions: nothing is stored, every entry is computed when queried. Terms such as `a^i_j b^j_k` are written with [`term!`] and evaluated by outer product followed by contraction of the repeated labels.
//!
//! ```
//! use einsor::prelude::*;
//!
//! let a = int_tensor(|i: &[usize]| (i[0] * 2 + i[1]) as i64, "ud", &[2, 2])?;
//! let (square, profiler) = term![a.up("i").down("j"), a.up("j").down("k")].eval()?;
//! assert_eq!(square.reify(), vec![vec![2, 3], vec![6, 11]]);
//! assert_eq!(profiler.contractions(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// core traits, lazy tensors, operators and the evaluator
pub use einsor_core::{error, eval, expr, ops, profiler, reify, ring, signature, tensor};

/// built-in rings, builders and dynamically typed tensors
pub use einsor_basic as basic;

/// labelled tensors and terms, and the `term!` macro building them
pub use einsor_core::term;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use einsor_basic::prelude::*;
    pub use einsor_core::prelude::*;
}
