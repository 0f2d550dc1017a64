//! Lexicographic stepping through non-decreasing arrays of fixed sum.
//!
//! An array `a0 <= a1 <= ... <= a(m-1)` with a fixed total is the canonical
//! form of an integer partition into at most `m` parts. [`advance`] moves such
//! an array to its lexicographic successor; [`SortedArrays`] drives it from
//! `[0, ..., 0, sum]` through to the most balanced array.
//!
//! ```text
//! [0, 0, 6] → [0, 1, 5] → [0, 2, 4] → [0, 3, 3] → [1, 1, 4] → [1, 2, 3] → [2, 2, 2]
//! ```

use crate::error::Result;
use crate::validate::{require_non_negative, to_index};

/// Steps `values` to the next non-decreasing array with sum `sum_condition`.
///
/// Returns `false`, leaving `values` untouched, when `values` is already the
/// last such array. The successor is assembled in a scratch buffer and only
/// copied back once it is known to be valid.
///
/// `values` must be sorted and sum to `sum_condition`. Other input produces
/// an unspecified array but never panics.
///
/// ```
/// use combinat_kernel::advance;
///
/// let mut values = [1, 1, 4];
/// assert!(advance(&mut values, 6));
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn advance(values: &mut [i64], sum_condition: i64) -> bool {
    match successor(values, sum_condition) {
        Some(next) => {
            values.copy_from_slice(&next);
            true
        }
        None => false,
    }
}

fn successor(values: &[i64], sum_condition: i64) -> Option<Vec<i64>> {
    let len = values.len();
    if len == 0 {
        return None;
    }

    // Rightmost strict ascent, read from the tail: the position that gives up
    // one unit.
    let dec = (1..len)
        .rev()
        .find(|&i| values[i] > values[i - 1])
        .unwrap_or(0);

    // Rightmost position left of `dec` that can take the unit and still stay
    // below the decremented value.
    let inc = (0..dec)
        .rev()
        .find(|&j| i128::from(values[dec]) - i128::from(values[j]) > 1)
        .unwrap_or(0);

    if inc == 0 {
        // The head value repeated over all but the last slot must leave the
        // last slot at least as large as the head.
        let head = i128::from(values[0]) + 1;
        let last = i128::from(sum_condition) - head * (len as i128 - 1);
        if head > last {
            return None;
        }
    }

    let mut next = values.to_vec();
    next[inc] = next[inc].checked_add(1)?;
    next[dec] = next[dec].checked_sub(1)?;

    if i128::from(next[inc]) + i128::from(next[dec]) == i128::from(sum_condition) {
        return Some(next);
    }

    // Reset everything after `inc` to the smallest sorted tail.
    let fill = next[inc];
    let mut running: i128 = next[..inc].iter().copied().map(i128::from).sum();
    for slot in inc + 1..len {
        running += i128::from(fill);
        next[slot] = if slot == len - 1 {
            i64::try_from(i128::from(sum_condition) - running).ok()?
        } else {
            fill
        };
    }

    Some(next)
}

/// Iterator over every non-decreasing array of non-negative integers with a
/// given length and sum, in lexicographic order.
///
/// The number of arrays equals the number of partitions of `sum` into at most
/// `len` parts.
#[derive(Debug, Clone)]
pub struct SortedArrays {
    current: Option<Vec<i64>>,
    sum: i64,
}

impl SortedArrays {
    /// Starts at `[0, ..., 0, sum]`.
    ///
    /// A zero-length array only exists for `sum == 0`.
    pub fn new(len: i64, sum: i64) -> Result<Self> {
        require_non_negative("sorted_arrays", &[len, sum])?;
        let len = to_index("sorted_arrays", len)?;

        let current = match len {
            0 if sum == 0 => Some(Vec::new()),
            0 => None,
            _ => {
                let mut first = vec![0; len];
                first[len - 1] = sum;
                Some(first)
            }
        };

        Ok(Self { current, sum })
    }
}

impl Iterator for SortedArrays {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        let current = self.current.as_mut()?;
        let emitted = current.clone();
        if !advance(current, self.sum) {
            tracing::trace!(sum = self.sum, last = ?emitted, "sorted arrays exhausted");
            self.current = None;
        }
        Some(emitted)
    }
}

impl std::iter::FusedIterator for SortedArrays {}
