//! Materialization of a tensor into a two-dimensional table.

use alloc::vec::Vec;
use core::fmt;

use crate::{coord::unravel, ring::Ring, signature::Variance, tensor::Tensor};

/// Rows of reified entries.
pub type Table<E> = Vec<Vec<E>>;

impl<R: Ring> Tensor<R> {
    /// Materializes the tensor into a table.
    ///
    /// The `u` axes, in signature order, form one row-major composite row index; the `d` axes form the column index the same way. A rank-0 tensor gives a 1×1 table, an all-`u` tensor a single column and an all-`d` tensor a single row.
    pub fn reify(&self) -> Table<R::Elem> {
        let up = self.contravariant_dimensions();
        let down = self.covariant_dimensions();
        let rows: usize = up.iter().product();
        let cols: usize = down.iter().product();

        let mut index = alloc::vec![0; self.rank()];
        (0..rows)
            .map(|r| {
                let row_coord = unravel(&up, r);
                (0..cols)
                    .map(|c| {
                        let col_coord = unravel(&down, c);
                        let (mut ui, mut di) = (row_coord.iter(), col_coord.iter());
                        for (slot, v) in index.iter_mut().zip(self.signature().iter()) {
                            let next = match v {
                                Variance::Up => ui.next(),
                                Variance::Down => di.next(),
                            };
                            *slot = next.copied().unwrap_or_default();
                        }
                        self.at(&index)
                    })
                    .collect()
            })
            .collect()
    }
}

impl<R: Ring> fmt::Display for Tensor<R>
where
    R::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.reify() {
            let mut first = true;
            for e in row {
                if !first {
                    write!(f, "\t")?;
                }
                write!(f, "{e}")?;
                first = false;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "signature: \"{}\", dimension: {:?}",
            self.signature(),
            self.dimension()
        )
    }
}
