//! Ordered selections without repetition.
//!
//! A [`Selections`] value describes every k-tuple of distinct indices drawn
//! from `{0, ..., n-1}`. Iteration walks the increasing k-subsets in
//! lexicographic order and, for each subset, every ordering of it:
//!
//! ```text
//! n = 3, k = 2:  (0,1) (1,0) | (0,2) (2,0) | (1,2) (2,1)
//! ```
//!
//! The value itself is `Copy`; each call to [`Selections::iter`] starts a
//! fresh pass, so the sequence can be replayed any number of times.

use crate::error::Result;
use crate::validate::{require_non_negative, to_index};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Returns the restartable sequence of ordered k-selections from an n-set.
///
/// `k > n` describes an empty sequence; `k == 0` describes a single empty
/// tuple.
///
/// ```
/// use combinat_kernel::enumerate_selections;
///
/// let tuples: Vec<Vec<usize>> = enumerate_selections(3, 2).unwrap().iter().collect();
/// assert_eq!(tuples.len(), 6);
/// assert_eq!(tuples[1], vec![1, 0]);
/// ```
pub fn enumerate_selections(n: i64, k: i64) -> Result<Selections> {
    require_non_negative("enumerate_selections", &[n, k])?;
    Ok(Selections {
        n: to_index("enumerate_selections", n)?,
        k: to_index("enumerate_selections", k)?,
    })
}

/// The ordered k-selections without repetition from `{0, ..., n-1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selections {
    n: usize,
    k: usize,
}

impl Selections {
    /// Size of the index set.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Length of each tuple.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of tuples a full pass yields: the falling factorial
    /// `n (n-1) ... (n-k+1)`.
    pub fn total(&self) -> BigUint {
        if self.k > self.n {
            return BigUint::zero();
        }
        (self.n - self.k + 1..=self.n).fold(BigUint::one(), |acc, factor| acc * factor)
    }

    /// Starts a new pass over the tuples.
    pub fn iter(&self) -> SelectionIter {
        SelectionIter {
            subsets: Subsets::new(self.n, self.k),
            orderings: None,
        }
    }
}

impl IntoIterator for Selections {
    type Item = Vec<usize>;
    type IntoIter = SelectionIter;

    fn into_iter(self) -> SelectionIter {
        self.iter()
    }
}

impl IntoIterator for &Selections {
    type Item = Vec<usize>;
    type IntoIter = SelectionIter;

    fn into_iter(self) -> SelectionIter {
        self.iter()
    }
}

/// One pass over a [`Selections`] sequence.
#[derive(Debug, Clone)]
pub struct SelectionIter {
    subsets: Subsets,
    orderings: Option<Orderings>,
}

impl Iterator for SelectionIter {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        loop {
            if let Some(tuple) = self.orderings.as_mut().and_then(Iterator::next) {
                return Some(tuple);
            }
            let subset = self.subsets.next()?;
            self.orderings = Some(Orderings::new(subset));
        }
    }
}

impl std::iter::FusedIterator for SelectionIter {}

/// Increasing r-subsets of `{0, ..., n-1}` in lexicographic order.
///
/// Each subset is a vector `i_0 < i_1 < ... < i_{r-1}`; advancing bumps the
/// rightmost index that still has room and resets everything to its right.
#[derive(Debug, Clone)]
struct Subsets {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl Subsets {
    fn new(n: usize, r: usize) -> Self {
        if r > n {
            return Self {
                n,
                indices: Vec::new(),
                first: true,
                done: true,
            };
        }

        Self {
            n,
            indices: (0..r).collect(),
            first: true,
            done: false,
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }

        let r = self.indices.len();
        if self.first {
            self.first = false;
            if r == 0 {
                self.done = true;
            }
            return Some(self.indices.clone());
        }

        // Find the rightmost index that can be incremented
        let Some(i) = (0..r)
            .rev()
            .find(|&i| self.indices[i] != i + self.n - r)
        else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in (i + 1)..r {
            self.indices[j] = self.indices[j - 1] + 1;
        }

        Some(self.indices.clone())
    }
}

/// Every ordering of a fixed pool, starting from the pool's own order.
///
/// Uses the cycle-counter scheme: `cycles[i]` counts the swaps left at
/// position `i` before the suffix `indices[i..]` is rotated back into place.
#[derive(Debug, Clone)]
struct Orderings {
    pool: Vec<usize>,
    indices: Vec<usize>,
    cycles: Vec<usize>,
    first: bool,
    done: bool,
}

impl Orderings {
    fn new(pool: Vec<usize>) -> Self {
        let n = pool.len();
        Self {
            pool,
            indices: (0..n).collect(),
            cycles: (1..=n).rev().collect(),
            first: true,
            done: false,
        }
    }

    fn current(&self) -> Vec<usize> {
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }
}

impl Iterator for Orderings {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }

        if self.first {
            self.first = false;
            return Some(self.current());
        }

        let n = self.pool.len();
        for i in (0..n).rev() {
            self.cycles[i] -= 1;
            if self.cycles[i] == 0 {
                self.indices[i..].rotate_left(1);
                self.cycles[i] = n - i;
            } else {
                let j = n - self.cycles[i];
                self.indices.swap(i, j);
                return Some(self.current());
            }
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn collect(n: i64, k: i64) -> Vec<Vec<usize>> {
        enumerate_selections(n, k).unwrap().iter().collect()
    }

    #[test]
    fn three_choose_two_ordered() {
        assert_eq!(
            collect(3, 2),
            vec![
                vec![0, 1],
                vec![1, 0],
                vec![0, 2],
                vec![2, 0],
                vec![1, 2],
                vec![2, 1],
            ]
        );
    }

    #[test]
    fn empty_and_degenerate_selections() {
        assert_eq!(collect(4, 0), vec![Vec::<usize>::new()]);
        assert_eq!(collect(0, 0), vec![Vec::<usize>::new()]);
        assert!(collect(2, 3).is_empty());
        assert!(collect(0, 1).is_empty());
    }

    #[test]
    fn full_permutations_are_distinct() {
        let tuples = collect(4, 4);
        assert_eq!(tuples.len(), 24);
        let distinct: BTreeSet<_> = tuples.iter().cloned().collect();
        assert_eq!(distinct.len(), 24);
    }

    #[test]
    fn restartable() {
        let selections = enumerate_selections(5, 3).unwrap();
        let first: Vec<_> = selections.iter().collect();
        let second: Vec<_> = selections.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(BigUint::from(first.len()), selections.total());
    }

    #[test]
    fn subsets_in_lexicographic_order() {
        let subsets: Vec<_> = Subsets::new(4, 2).collect();
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn orderings_of_three() {
        let orderings: Vec<_> = Orderings::new(vec![2, 5, 7]).collect();
        assert_eq!(
            orderings,
            vec![
                vec![2, 5, 7],
                vec![2, 7, 5],
                vec![5, 2, 7],
                vec![5, 7, 2],
                vec![7, 2, 5],
                vec![7, 5, 2],
            ]
        );
    }

    #[test]
    fn negative_arguments_rejected() {
        assert!(enumerate_selections(-1, 2).is_err());
        assert!(enumerate_selections(3, -2).is_err());
    }
}
