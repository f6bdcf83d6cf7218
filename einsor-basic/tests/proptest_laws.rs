//! Property tests for the tensor algebra laws.

use einsor_basic::prelude::*;
use einsor_core::prelude::*;
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

/// Integer tensor reading its entries from a row-major value list.
fn build(axes: &[(usize, Variance)], values: Vec<i64>) -> Tensor<IntRing> {
    let dims: Vec<usize> = axes.iter().map(|&(d, _)| d).collect();
    let signature: Signature = axes.iter().map(|&(_, v)| v).collect();
    let shape = dims.clone();
    let f = move |i: &[usize]| {
        let offset = i.iter().zip(&shape).fold(0, |acc, (&x, &d)| acc * d + x);
        values[offset]
    };
    Tensor::new(IntRing::new(), f, signature, dims).unwrap()
}

fn arb_variance() -> impl Strategy<Value = Variance> {
    prop_oneof![Just(Variance::Up), Just(Variance::Down)]
}

fn arb_tensor_with(
    axes: impl Strategy<Value = Vec<(usize, Variance)>>,
) -> impl Strategy<Value = Tensor<IntRing>> {
    axes.prop_flat_map(|axes| {
        let size: usize = axes.iter().map(|&(d, _)| d).product();
        (Just(axes), proptest::collection::vec(-9i64..10, size))
    })
    .prop_map(|(axes, values)| build(&axes, values))
}

fn arb_tensor(max_rank: usize) -> impl Strategy<Value = Tensor<IntRing>> {
    arb_tensor_with(proptest::collection::vec(
        (1usize..4, arb_variance()),
        0..=max_rank,
    ))
}

fn arb_uniform_tensor(variance: Variance) -> impl Strategy<Value = Tensor<IntRing>> {
    arb_tensor_with(proptest::collection::vec((1usize..4, Just(variance)), 0..3))
}

fn arb_square(n: usize) -> impl Strategy<Value = Tensor<IntRing>> {
    arb_tensor_with(Just(vec![(n, Variance::Up), (n, Variance::Down)]))
}

/// Every coordinate of `dims`, row-major.
fn coordinates(dims: &[usize]) -> Vec<Vec<usize>> {
    dims.iter().fold(vec![vec![]], |acc, &d| {
        acc.into_iter()
            .flat_map(|prefix| {
                (0..d).map(move |x| {
                    let mut c = prefix.clone();
                    c.push(x);
                    c
                })
            })
            .collect()
    })
}

// ============================================================================
// Product
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// rank(a ⊗ b) = rank(a) + rank(b), and every entry is a product of entries
    #[test]
    fn product_law(a in arb_tensor(3), b in arb_tensor(2)) {
        let p = (&a * &b).unwrap().exec();
        prop_assert_eq!(p.rank(), a.rank() + b.rank());
        for i in coordinates(a.dimension()) {
            for j in coordinates(b.dimension()) {
                let ij: Vec<usize> = i.iter().chain(&j).copied().collect();
                prop_assert_eq!(p.get(&ij).unwrap(), a.get(&i).unwrap() * b.get(&j).unwrap());
            }
        }
    }

    /// column ⊗ row reifies to the outer product of the two tables
    #[test]
    fn product_law_on_tables(
        a in arb_uniform_tensor(Variance::Up),
        b in arb_uniform_tensor(Variance::Down),
    ) {
        let table = (&a * &b).unwrap().exec().reify();
        let (col, row) = (a.reify(), b.reify());
        prop_assert_eq!(table.len(), col.len());
        for (r, line) in table.iter().enumerate() {
            prop_assert_eq!(line.len(), row[0].len());
            for (c, x) in line.iter().enumerate() {
                prop_assert_eq!(*x, col[r][0] * row[0][c]);
            }
        }
    }
}

// ============================================================================
// Trace
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// the axis order passed to `Trace` does not matter
    #[test]
    fn trace_order_normalization(
        t in (1usize..4, 2usize..5).prop_flat_map(|(n, rank)| {
            arb_tensor_with(proptest::collection::vec((Just(n), arb_variance()), rank))
        }),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let a = a.index(t.rank());
        let b = b.index(t.rank());
        prop_assume!(a != b);
        let ab = Trace::new(&t, a, b).unwrap().exec();
        let ba = Trace::new(&t, b, a).unwrap().exec();
        prop_assert_eq!(ab.rank(), t.rank() - 2);
        prop_assert_eq!(ab.signature(), ba.signature());
        prop_assert_eq!(ab.reify(), ba.reify());
    }

    /// memoized and plain traces agree
    #[test]
    fn trace_memo_is_transparent(t in arb_square(3)) {
        let memo = Trace::new(&t, 0, 1).unwrap().exec();
        let plain = Trace::new(&t, 0, 1).unwrap().memoize(false).exec();
        prop_assert_eq!(memo.reify(), plain.reify());
        prop_assert_eq!(memo.reify(), plain.reify());
    }
}

// ============================================================================
// Reify
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// reify is idempotent
    #[test]
    fn reify_idempotent(t in arb_tensor(4)) {
        prop_assert_eq!(t.reify(), t.reify());
    }

    /// the table holds every entry exactly once
    #[test]
    fn reify_covers_all_entries(t in arb_tensor(4)) {
        let table = t.reify();
        let cells: usize = table.iter().map(Vec::len).sum();
        prop_assert_eq!(cells, t.dimension().iter().product::<usize>());
        prop_assert_eq!(table.len(), t.contravariant_dimensions().iter().product::<usize>());
    }
}

// ============================================================================
// Evaluate
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// contracting `k` before `j` gives the same numbers as the evaluator's leftmost-first order
    #[test]
    fn contraction_order_invariance(
        x in arb_square(3),
        y in arb_square(3),
        z in arb_square(3),
    ) {
        let (eval, _) = term![x.up("i").down("j"), y.up("j").down("k"), z.up("k").down("l")]
            .eval()
            .unwrap();

        let p = (&(&x * &y).unwrap().exec() * &z).unwrap().exec();
        let k_first = Trace::new(&p, 3, 4).unwrap().exec();
        let then_j = Trace::new(&k_first, 1, 2).unwrap().exec();
        prop_assert_eq!(eval.reify(), then_j.reify());
    }

    /// listing the factors in another order only permutes the free axes
    #[test]
    fn factor_order_invariance(
        x in arb_square(2),
        y in arb_square(2),
        z in arb_square(2),
    ) {
        let (forward, _) = term![x.up("i").down("j"), y.up("j").down("k"), z.up("k").down("l")]
            .eval()
            .unwrap();
        let (backward, _) = term![z.up("k").down("l"), y.up("j").down("k"), x.up("i").down("j")]
            .eval()
            .unwrap();
        // backward keeps the free labels as (l, i)
        let backward = transpose(&backward, 0, 1).unwrap();
        prop_assert_eq!(forward.signature(), backward.signature());
        prop_assert_eq!(forward.reify(), backward.reify());
    }
}
