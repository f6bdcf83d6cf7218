// Coordinate arithmetic shared by the operators.

use alloc::vec::Vec;

/// Decodes composite index `i` into a row-major coordinate over `dims`.
pub(crate) fn unravel(dims: &[usize], mut i: usize) -> Vec<usize> {
    let mut coord = alloc::vec![0; dims.len()];
    for (slot, &d) in coord.iter_mut().zip(dims).rev() {
        *slot = i % d;
        i /= d;
    }
    coord
}

/// Widens `reduced` by two axes at positions `a < b`, both set to `k`.
pub(crate) fn spread(reduced: &[usize], a: usize, b: usize, k: usize) -> Vec<usize> {
    let mut full = Vec::with_capacity(reduced.len() + 2);
    let mut rest = reduced.iter().copied();
    for pos in 0..reduced.len() + 2 {
        if pos == a || pos == b {
            full.push(k);
        } else if let Some(x) = rest.next() {
            full.push(x);
        }
    }
    full
}

/// Iterates every coordinate of `dims` in row-major order.
#[derive(Debug, Clone)]
pub(crate) struct Coords {
    dims: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Coords {
    pub(crate) fn new(dims: &[usize]) -> Self {
        let next = if dims.contains(&0) {
            None
        } else {
            Some(alloc::vec![0; dims.len()])
        };
        Self {
            dims: dims.to_vec(),
            next,
        }
    }
}

impl Iterator for Coords {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut succ = current.clone();
        for axis in (0..succ.len()).rev() {
            succ[axis] += 1;
            if succ[axis] < self.dims[axis] {
                self.next = Some(succ);
                return Some(current);
            }
            succ[axis] = 0;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn unravel_row_major() {
        assert_eq!(unravel(&[4, 2], 0), vec![0, 0]);
        assert_eq!(unravel(&[4, 2], 1), vec![0, 1]);
        assert_eq!(unravel(&[4, 2], 5), vec![2, 1]);
        assert_eq!(unravel(&[], 0), Vec::<usize>::new());
    }

    #[test]
    fn spread_inserts_both_axes() {
        assert_eq!(spread(&[7, 8], 0, 3, 1), vec![1, 7, 8, 1]);
        assert_eq!(spread(&[7, 8], 1, 2, 0), vec![7, 0, 0, 8]);
        assert_eq!(spread(&[], 0, 1, 2), vec![2, 2]);
    }

    #[test]
    fn coords_visit_everything_once() {
        let all: Vec<_> = Coords::new(&[2, 3]).collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], vec![0, 0]);
        assert_eq!(all[1], vec![0, 1]);
        assert_eq!(all[5], vec![1, 2]);
        assert_eq!(Coords::new(&[]).count(), 1);
    }
}
