//! Forward pass of a small sigmoid network, one [`Expr`] per layer.
//!
//! Weights and inputs follow Matt Mazur's step-by-step backpropagation example: two inputs, two
//! hidden neurons, two outputs.

use einsor::prelude::*;
use einsor_demo::{Grid, init_tracing};
use tracing::info;

fn sigmoid() -> Function<RealRing> {
    real_function(|x| 1.0 / (1.0 + (-x).exp()))
}

// sigma(W a + b)
fn layer(
    weights: &Tensor<RealRing>,
    bias: &Tensor<RealRing>,
    activation: &Tensor<RealRing>,
) -> Expr<RealRing> {
    Expr::apply(
        &sigmoid(),
        Expr::plus(
            bias.clone(),
            term![weights.up("i").down("j"), activation.up("j")],
        ),
    )
}

fn column(values: &[f64]) -> anyhow::Result<Tensor<RealRing>> {
    Ok(vector(RealRing::new(), values.to_vec(), Variance::Up)?)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let input = column(&[0.05, 0.10])?;
    let target = column(&[0.01, 0.99])?;
    let hidden_weights = matrix(
        RealRing::new(),
        vec![vec![0.15, 0.20], vec![0.25, 0.30]],
        "ud",
    )?;
    let output_weights = matrix(
        RealRing::new(),
        vec![vec![0.40, 0.45], vec![0.50, 0.55]],
        "ud",
    )?;
    let hidden_bias = column(&[0.35, 0.35])?;
    let output_bias = column(&[0.60, 0.60])?;

    let (hidden, profiler) = layer(&hidden_weights, &hidden_bias, &input).eval()?;
    println!("hidden layer\n{}\n{}\n", Grid(&hidden), profiler.report());

    let (output, profiler) = layer(&output_weights, &output_bias, &hidden.materialize()).eval()?;
    println!("output layer\n{}\n{}\n", Grid(&output), profiler.report());

    // squared error against the target, as a contraction of the difference with itself
    let negate = real_function(|x| -x);
    let (difference, _) = Expr::plus(output, Expr::apply(&negate, target)).eval()?;
    let halved = real_scalar(0.5);
    let (error, _) = term![
        halved.up(""),
        difference.up("k"),
        difference.down("k"),
    ]
    .eval()?;
    let total = error.get(&[])?;
    info!(total, "total error");
    println!("total error: {total}");
    Ok(())
}
