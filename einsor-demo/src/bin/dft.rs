//! Discrete Fourier transforms as tensors, and polynomial multiplication through them.

use einsor::prelude::*;
use einsor_demo::{Grid, complex_column, dft, embed, idft, init_tracing};
use num_complex::Complex64;

fn main() -> anyhow::Result<()> {
    init_tracing();

    for n in [2, 3, 4] {
        println!("DFT of size {n}\n{}\n", Grid(&dft(n)?));
    }

    let (identity, profiler) = term![dft(5)?.up("i").down("j"), idft(5)?.up("j").down("k")].eval()?;
    let rounded = identity
        .reify()
        .into_iter()
        .flatten()
        .map(|z| Complex64::new(z.re.round(), z.im.round()))
        .collect::<Vec<_>>();
    println!("DFT(5) times its inverse, rounded: {rounded:?}\n{}\n", profiler.report());

    // (5x^4 + 4x^3 + 3x^2 + 2x + 1)(9x^4 + 8x^3 + 7x^2 + 6x + 5), lowest degree first
    let n = 9;
    let profiler = Profiler::new();
    let evaluator = Evaluator::default();
    let transform = |coefficients: &[f64]| -> anyhow::Result<Tensor<ComplexRing>> {
        let t = term![
            dft(n)?.up("f").down("a"),
            embed(coefficients.len(), n)?.up("a").down("b"),
            complex_column(coefficients)?.up("b"),
        ];
        // stage the transformed vectors so the final term does not recompute them per entry
        Ok(evaluator.evaluate_profiled(&t, &profiler)?.materialize())
    };
    let lhs = transform(&[5.0, 4.0, 3.0, 2.0, 1.0])?;
    let rhs = transform(&[5.0, 6.0, 7.0, 8.0, 9.0])?;
    let dirac = kronecker::<Complex64>("udd", n)?;
    let product = evaluator.evaluate_profiled(
        &term![
            idft(n)?.up("z").down("h"),
            dirac.up("h").down("f").down("g"),
            lhs.up("f"),
            rhs.up("g"),
        ],
        &profiler,
    )?;
    let coefficients = product
        .reify()
        .into_iter()
        .flatten()
        .map(|z| z.re.round() as i64)
        .collect::<Vec<_>>();
    println!("polynomial product by DFT: {coefficients:?}\n{}", profiler.report());
    Ok(())
}
