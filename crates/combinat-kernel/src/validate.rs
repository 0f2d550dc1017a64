//! Argument guards shared by the public counting functions.

use crate::error::{CombinatoricsError, Result};

/// Returns true iff any of `numbers` is negative.
///
/// Stops at the first negative value.
pub fn has_negative(numbers: &[i64]) -> bool {
    numbers.iter().any(|&number| number < 0)
}

/// Rejects `numbers` with [`CombinatoricsError::InvalidArgument`] if any of
/// them is negative.
///
/// `operation` names the caller in the error message, e.g. `"choose"`.
pub fn require_non_negative(operation: &str, numbers: &[i64]) -> Result<()> {
    if has_negative(numbers) {
        tracing::debug!(operation, ?numbers, "rejecting negative argument");
        return Err(CombinatoricsError::invalid(format!(
            "{operation}: arguments must be non-negative, got {numbers:?}"
        )));
    }
    Ok(())
}

/// Converts a validated, non-negative count into an index bound.
pub(crate) fn to_index(operation: &str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        CombinatoricsError::invalid(format!(
            "{operation}: {value} is not a valid non-negative size"
        ))
    })
}
