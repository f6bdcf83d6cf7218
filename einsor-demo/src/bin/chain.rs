//! Multiplies the same 2 x 2 matrix many times in a single term and compares against a staged fold.
//!
//! Usage: `chain [LENGTH]`, 21 by default and at most 25. A single lazy term re-evaluates every
//! inner contraction for each outer entry, so its cost doubles with each extra factor; the staged
//! fold materializes after every step and stays linear. The cap keeps the single term within
//! seconds, and the entries of higher powers run out of `i64` range.

use std::time::Instant;

use einsor::prelude::*;
use einsor_demo::{Grid, init_tracing, int_table};
use tracing::info;

// labels for consecutive factors: factor k is written up(k) down(k + 1)
const LABELS: &str = "abcdefghijklmnopqrstuvwxyz";

const MAX_LENGTH: usize = 25;

fn chain_length(arg: Option<&str>) -> anyhow::Result<usize> {
    let length: usize = match arg {
        Some(arg) => arg.parse()?,
        None => 21,
    };
    anyhow::ensure!(
        (1..=MAX_LENGTH).contains(&length),
        "chain length must be between 1 and {MAX_LENGTH}"
    );
    Ok(length)
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let length = chain_length(std::env::args().nth(1).as_deref())?;
    let labels: Vec<char> = LABELS.chars().collect();
    let matrix = int_table(&[&[1, 2], &[3, 4]], "ud")?;

    // deep chains would memoize every intermediate coordinate, so the memo stays off here
    let evaluator = Evaluator::new(EvalConfig {
        memoize_traces: false,
        ..EvalConfig::default()
    });
    let term: Term<IntRing> = (0..length)
        .map(|k| {
            matrix
                .up(&labels[k].to_string())
                .down(&labels[k + 1].to_string())
        })
        .collect();
    let start = Instant::now();
    let (single, profiler) = evaluator.evaluate(&term)?;
    let single = single.materialize();
    info!(
        length,
        memoize = evaluator.config().memoize_traces,
        elapsed = ?start.elapsed(),
        "single term"
    );
    println!(
        "Multiplying the same 2 x 2 matrix {length} times in one term.\n{}\n{}\n",
        Grid(&single),
        profiler.report()
    );

    let profiler = Profiler::new();
    let start = Instant::now();
    let mut staged = matrix.clone();
    for _ in 1..length {
        let step = term![staged.up("i").down("j"), matrix.up("j").down("k")];
        staged = Evaluator::default()
            .evaluate_profiled(&step, &profiler)?
            .materialize();
    }
    info!(length, elapsed = ?start.elapsed(), "staged fold");
    println!(
        "The same product, one factor at a time.\n{}\n{}",
        Grid(&staged),
        profiler.report()
    );

    anyhow::ensure!(single.reify() == staged.reify(), "chain results disagree");
    Ok(())
}
