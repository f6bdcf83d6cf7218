//! Derivatives and products of polynomials written as tensor contractions.
//!
//! Coefficients are stored highest degree first, so `[3, 5, 10]` is `3x^2 + 5x + 10`.

use einsor::prelude::*;
use einsor_demo::{Grid, init_tracing, int_table};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let d3 = int_table(&[&[0, 0, 0], &[2, 0, 0], &[0, 1, 0]], "ud")?;
    let p1 = vector(IntRing::new(), vec![3, 5, 10], Variance::Up)?;
    // rows: powers of x, columns: powers of y
    let p2 = int_table(&[&[1, 3, 1], &[5, 4, 0], &[1, 0, 2]], "uu")?;
    // 4 x^2 y z^2 + 7 y^2, indexed [x][y][z]
    let p3 = int_tensor(
        |i: &[usize]| match i {
            [0, 1, 0] => 4,
            [2, 0, 2] => 7,
            _ => 0,
        },
        "uuu",
        &[3, 3, 3],
    )?;

    let runs: [(&str, Term<IntRing>, &str, Option<(usize, usize)>); 5] = [
        (
            "derivative of 3x^2 + 5x + 10",
            term![d3.up("i").down("j"), p1.up("j")],
            "u",
            None,
        ),
        (
            "partial x derivative of a two variable polynomial",
            term![d3.up("i").down("m"), p2.up("m").up("k")],
            "ud",
            None,
        ),
        (
            "partial y derivative of a two variable polynomial",
            term![d3.up("i").down("k"), p2.up("m").up("k")],
            "ud",
            Some((0, 1)),
        ),
        (
            "partial z derivative of a three variable polynomial",
            term![d3.up("i").down("c"), p3.up("a").up("b").up("c")],
            // rows: powers of z, columns: powers of x then y
            "udd",
            None,
        ),
        (
            "second partial x derivative of a three variable polynomial",
            term![
                d3.up("i").down("j"),
                d3.up("j").down("a"),
                p3.up("a").up("b").up("c"),
            ],
            "udd",
            None,
        ),
    ];

    for (desc, term, reshape, swap) in runs {
        let (mut t, profiler) = term.eval()?;
        if let Some((a, b)) = swap {
            t = t.transpose(a, b)?;
        }
        let t = t.reshape(reshape.parse()?)?;
        info!(%desc, "evaluated");
        println!("{desc}\n{}\n{}\n", Grid(&t), profiler.report());
    }

    // (x + 2)(3x + 1) by summing progressively shifted copies of one factor
    let shift = int_tensor(|i: &[usize]| i64::from(i[0] + i[2] == i[1]), "dud", &[3, 3, 3])?;
    let ones = vector(IntRing::new(), vec![1, 1, 1], Variance::Up)?;
    let dirac = kronecker::<i64>("uud", 3)?;
    let a = vector(IntRing::new(), vec![2, 1, 0], Variance::Up)?;
    let b = vector(IntRing::new(), vec![1, 3, 0], Variance::Up)?;
    let (product, profiler) = term![
        ones.up("a"),
        dirac.up("a").up("b").down("i"),
        shift.down("b").up("x").down("l"),
        a.up("i"),
        b.up("l"),
    ]
    .eval()?;
    println!(
        "(x + 2)(3x + 1), lowest degree first\n{}\n{}",
        Grid(&product),
        profiler.report()
    );
    Ok(())
}
