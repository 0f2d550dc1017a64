//! # Combinat Kernel
//!
//! Exact counting and ordered enumeration of classical combinatorial
//! objects: binomial coefficients, injections, surjections, Stirling numbers
//! of the second kind, ordered selections, and sorted fixed-sum arrays.
//!
//! Every count is an arbitrary-precision [`BigUint`]; every argument is a
//! signed integer so that negative input is rejected with
//! [`CombinatoricsError::InvalidArgument`] rather than wrapped.
//!
//! ## Architecture
//!
//! ```text
//! validate               ← has_negative / require_non_negative
//!     │
//! range                  ← product(start, end), factorial(n)
//!     │
//! stirling               ← bottom-up S(i, j) table, one per query
//!     │
//! counting               ← choose, injections, stirling_second_kind, surjections
//!     │
//! counter                ← Counter: dispatch by name
//!
//! ordered                ← advance(A, sum), SortedArrays
//! selection              ← enumerate_selections(n, k) → Selections
//! ```
//!
//! All operations are pure apart from [`advance`], which rewrites the
//! caller's slice in place (and only on success).

pub mod counter;
pub mod counting;
pub mod error;
pub mod ordered;
pub mod range;
pub mod selection;
mod stirling;
pub mod validate;

pub use counter::Counter;
pub use counting::{bell_number, choose, injections, stirling_second_kind, surjections};
pub use error::{CombinatoricsError, Result};
pub use num_bigint::BigUint;
pub use ordered::{SortedArrays, advance};
pub use range::{factorial, product};
pub use selection::{SelectionIter, Selections, enumerate_selections};
pub use validate::{has_negative, require_non_negative};
