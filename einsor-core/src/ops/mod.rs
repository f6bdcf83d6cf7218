//! Structural operators on lazy tensors.
//!
//! Every operator follows the same shape: a task struct validated at construction, executed with a context (`()` or `&Profiler`) into a new lazy [`Tensor`](crate::tensor::Tensor).

// implements `TensorTask<()>` and `TensorTask<&Profiler>` for a task with a `build(self, Option<Profiler>)` method
macro_rules! impl_task {
    ($task:ident) => {
        impl<R: $crate::ring::Ring> $crate::tensor::TensorTask<()> for $task<R> {
            type Output = $crate::tensor::Tensor<R>;
            fn with(self, _: ()) -> Self::Output {
                self.build(None)
            }
        }
        impl<R: $crate::ring::Ring> $crate::tensor::TensorTask<&$crate::profiler::Profiler>
            for $task<R>
        {
            type Output = $crate::tensor::Tensor<R>;
            fn with(self, profiler: &$crate::profiler::Profiler) -> Self::Output {
                self.build(Some(profiler.clone()))
            }
        }
    };
}

pub mod apply;
pub mod plus;
pub mod product;
pub mod trace;
pub mod transpose;

pub use apply::*;
pub use plus::*;
pub use product::*;
pub use trace::*;
pub use transpose::*;
