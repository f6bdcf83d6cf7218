//! Shared pieces of the einsor demo binaries: logging setup, fixtures and a text renderer.

use std::{
    f64::consts::PI,
    fmt::{self, Display},
};

use einsor::prelude::*;
use num_complex::Complex64;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (`info` when unset).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Text rendering of a tensor's reified table.
///
/// Rows run over the `u` axes and columns over the `d` axes. Where a row starts a new block of an outer `u` axis, separator lines are drawn, one per axis whose block boundary it is; cells starting a block of an outer `d` axis get bars the same way.
pub struct Grid<'a, R: Ring>(pub &'a Tensor<R>);

// number of nested blocks (over `dims`, innermost first) starting at composite index `i`
fn boundaries(dims: &[usize], i: usize) -> usize {
    if i == 0 {
        return 0;
    }
    let mut stride = 1;
    let mut count = 0;
    for &d in dims.iter().rev() {
        stride *= d;
        if i % stride == 0 {
            count += 1;
        }
    }
    count
}

impl<R: Ring> Display for Grid<'_, R>
where
    R::Elem: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tensor = self.0;
        let up = tensor.contravariant_dimensions();
        let down = tensor.covariant_dimensions();
        for (y, row) in tensor.reify().iter().enumerate() {
            for _ in 0..boundaries(&up, y) {
                writeln!(f, "{}", "######\t".repeat(row.len()))?;
            }
            for (x, cell) in row.iter().enumerate() {
                write!(f, "{}{cell}\t", "|".repeat(boundaries(&down, x)))?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "signature \"{}\", dimension {:?}",
            tensor.signature(),
            tensor.dimension()
        )
    }
}

/// Row-major coordinates of a small integer table, as a tensor.
pub fn int_table(rows: &[&[i64]], signature: &str) -> anyhow::Result<Tensor<IntRing>> {
    Ok(matrix(
        IntRing::new(),
        rows.iter().map(|r| r.to_vec()).collect(),
        signature,
    )?)
}

// first row of the DFT matrix of size n
fn mother_row(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|j| Complex64::from_polar(1.0, -2.0 * PI * j as f64 / n as f64))
        .collect()
}

/// The `n x n` discrete Fourier transform matrix, signature `"ud"`.
pub fn dft(n: usize) -> anyhow::Result<Tensor<ComplexRing>> {
    let row = mother_row(n);
    Ok(complex_tensor(
        move |i: &[usize]| row[i[0] * i[1] % n],
        "ud",
        &[n, n],
    )?)
}

/// Inverse of [`dft`].
pub fn idft(n: usize) -> anyhow::Result<Tensor<ComplexRing>> {
    let row = mother_row(n);
    Ok(complex_tensor(
        move |i: &[usize]| row[i[0] * i[1] % n].conj() / n as f64,
        "ud",
        &[n, n],
    )?)
}

/// Zero-padding of an `input`-vector to an `output`-vector.
pub fn embed(input: usize, output: usize) -> anyhow::Result<Tensor<ComplexRing>> {
    Ok(complex_tensor(
        |i: &[usize]| Complex64::new(f64::from(u8::from(i[0] == i[1])), 0.0),
        "ud",
        &[output, input],
    )?)
}

/// Column vector of real coefficients over the complex ring.
pub fn complex_column(values: &[f64]) -> anyhow::Result<Tensor<ComplexRing>> {
    let values = values.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    Ok(vector(ComplexRing::new(), values, Variance::Up)?)
}
