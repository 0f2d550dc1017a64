//! Exact counts of selections, maps, and set partitions.
//!
//! Every function takes `(n, k)` as signed integers and rejects negative
//! input with [`CombinatoricsError::InvalidArgument`](crate::CombinatoricsError).
//! Out-of-range but well-formed input (such as `k > n`) resolves to a base
//! case instead of an error.

use crate::error::Result;
use crate::range::{factorial, product};
use crate::stirling::StirlingTable;
use crate::validate::{require_non_negative, to_index};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of k-element subsets of an n-element set.
///
/// ```
/// use combinat_kernel::{BigUint, choose};
///
/// assert_eq!(choose(5, 2).unwrap(), BigUint::from(10u32));
/// assert_eq!(choose(2, 5).unwrap(), BigUint::from(0u32));
/// ```
pub fn choose(n: i64, k: i64) -> Result<BigUint> {
    require_non_negative("choose", &[n, k])?;

    if k > n {
        return Ok(BigUint::zero());
    }
    if k == n || k == 0 {
        return Ok(BigUint::one());
    }
    Ok(product(n - k + 1, n)? / product(1, k)?)
}

/// Number of injective maps from a k-element domain into an n-element
/// codomain, i.e. the falling factorial `n (n-1) ... (n-k+1)`.
pub fn injections(n: i64, k: i64) -> Result<BigUint> {
    require_non_negative("injections", &[n, k])?;

    if k > n {
        return Ok(BigUint::zero());
    }
    if k == 0 {
        return Ok(BigUint::one());
    }
    // k == n falls through: the bijections number n!, not 1.
    product(n - k + 1, n)
}

/// Stirling number of the second kind `S(n, k)`: the number of ways to split
/// an n-element set into exactly k non-empty, unlabeled blocks.
///
/// Base cases: `k > n` gives 0; `k == n`, `k == 0` and `k == 1` give 1.
/// Everything else is read from a bottom-up table built for this call.
pub fn stirling_second_kind(n: i64, k: i64) -> Result<BigUint> {
    require_non_negative("stirling_second_kind", &[n, k])?;

    if k > n {
        return Ok(BigUint::zero());
    }
    if k == n || k == 0 || k == 1 {
        return Ok(BigUint::one());
    }

    let rows = to_index("stirling_second_kind", n)?;
    let columns = to_index("stirling_second_kind", k)?;
    let table = StirlingTable::build(rows, columns);
    Ok(table.cell(rows, columns).clone())
}

/// Number of surjective maps from an n-element domain onto a k-element
/// codomain: `k! * S(n, k)`.
pub fn surjections(n: i64, k: i64) -> Result<BigUint> {
    require_non_negative("surjections", &[n, k])?;
    Ok(factorial(k)? * stirling_second_kind(n, k)?)
}

/// Bell number `B(n)`: the number of partitions of an n-element set into any
/// number of non-empty blocks.
///
/// Sums `S(n, k)` for `1 <= k <= n` from a single table; `B(0) = 1`.
pub fn bell_number(n: i64) -> Result<BigUint> {
    require_non_negative("bell_number", &[n])?;
    if n == 0 {
        return Ok(BigUint::one());
    }

    let rows = to_index("bell_number", n)?;
    let table = StirlingTable::build(rows, rows);
    Ok((1..=rows).map(|k| table.cell(rows, k)).sum())
}
