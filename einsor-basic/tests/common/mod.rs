#![allow(dead_code)]

use std::f64::consts::PI;

use einsor_basic::prelude::*;
use einsor_core::prelude::*;
use num_complex::Complex64;

pub fn int_vec(values: &[i64]) -> Tensor<IntRing> {
    vector(IntRing::new(), values.to_vec(), Variance::Up).unwrap()
}

pub fn int_row(values: &[i64]) -> Tensor<IntRing> {
    vector(IntRing::new(), values.to_vec(), Variance::Down).unwrap()
}

pub fn int_matrix(rows: &[&[i64]]) -> Tensor<IntRing> {
    matrix(IntRing::new(), rows.iter().map(|r| r.to_vec()).collect(), "ud").unwrap()
}

pub fn string_matrix(rows: &[&[&str]]) -> Tensor<StringRing> {
    let rows = rows
        .iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect();
    matrix(StringRing, rows, "ud").unwrap()
}

/// diag(1, 2, 3)
pub fn det1() -> Tensor<IntRing> {
    int_tensor(
        |i: &[usize]| if i[0] == i[1] { i[0] as i64 + 1 } else { 0 },
        "ud",
        &[3, 3],
    )
    .unwrap()
}

pub fn eps() -> Tensor<IntRing> {
    levi_civita("ddd").unwrap()
}

pub fn dirac3(size: usize) -> Tensor<IntRing> {
    kronecker("udd", size).unwrap()
}

// first row of the DFT matrix of size n
fn mother_row(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|j| {
            let angle = -2.0 * PI * j as f64 / n as f64;
            Complex64::new(angle.cos(), angle.sin())
        })
        .collect()
}

pub fn dft(n: usize) -> Tensor<ComplexRing> {
    let row = mother_row(n);
    complex_tensor(move |i: &[usize]| row[i[0] * i[1] % n], "ud", &[n, n]).unwrap()
}

pub fn idft(n: usize) -> Tensor<ComplexRing> {
    let row = mother_row(n);
    complex_tensor(
        move |i: &[usize]| row[i[0] * i[1] % n].conj() / n as f64,
        "ud",
        &[n, n],
    )
    .unwrap()
}

/// zero-padding embedding of an `input`-vector into an `output`-vector
pub fn embed(input: usize, output: usize) -> Tensor<ComplexRing> {
    complex_tensor(
        |i: &[usize]| {
            if i[0] == i[1] {
                Complex64::new(1.0, 0.0)
            } else {
                Complex64::new(0.0, 0.0)
            }
        },
        "ud",
        &[output, input],
    )
    .unwrap()
}

pub fn complex_vec(values: &[f64]) -> Tensor<ComplexRing> {
    let values = values.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    vector(ComplexRing::new(), values, Variance::Up).unwrap()
}

pub fn assert_close(got: Complex64, want: f64) {
    assert!(
        (got - Complex64::new(want, 0.0)).norm() < 1e-9,
        "got {got}, want {want}"
    );
}
