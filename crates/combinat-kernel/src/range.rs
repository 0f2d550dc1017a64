//! Products over contiguous integer ranges.
//!
//! Almost every count in the kernel reduces to a product over `[start, end]`:
//! factorials are `product(1, k)` and falling factorials are
//! `product(n - k + 1, n)`.

use crate::error::{CombinatoricsError, Result};
use crate::validate::require_non_negative;
use num_bigint::BigUint;
use num_traits::One;

/// Returns the product of every integer in `[start, end]`, inclusive.
///
/// Both bounds must be non-negative and `start <= end`. An inverted range is
/// rejected rather than treated as the empty product; callers that need
/// `0! = 1` go through [`factorial`].
///
/// ```
/// use combinat_kernel::{BigUint, product};
///
/// assert_eq!(product(3, 5).unwrap(), BigUint::from(60u32));
/// assert!(product(5, 3).is_err());
/// ```
pub fn product(start: i64, end: i64) -> Result<BigUint> {
    require_non_negative("product", &[start, end])?;
    if start > end {
        return Err(CombinatoricsError::invalid(format!(
            "product: range start {start} exceeds end {end}"
        )));
    }

    Ok((start..=end).fold(BigUint::one(), |acc, factor| acc * factor as u64))
}

/// Returns `n!`, with `0! = 1`.
pub fn factorial(n: i64) -> Result<BigUint> {
    require_non_negative("factorial", &[n])?;
    if n == 0 {
        return Ok(BigUint::one());
    }
    product(1, n)
}
