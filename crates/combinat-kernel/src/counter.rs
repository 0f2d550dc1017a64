//! Named selector over the `(n, k)` counting functions.
//!
//! Front ends dispatch on a [`Counter`] instead of matching on function
//! names themselves:
//!
//! - **Choose**: unordered selections, `C(n, k)`
//! - **Injections**: ordered selections, `n! / (n-k)!`
//! - **Stirling2**: set partitions into k blocks, `S(n, k)`
//! - **Surjections**: onto maps, `k! S(n, k)`

use crate::counting::{choose, injections, stirling_second_kind, surjections};
use crate::error::Result;
use num_bigint::BigUint;

/// One of the four `(n, k)` counting functions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    /// k-subsets of an n-set.
    Choose,

    /// Injective maps from a k-set into an n-set.
    Injections,

    /// Partitions of an n-set into k non-empty blocks.
    Stirling2,

    /// Surjective maps from an n-set onto a k-set.
    Surjections,
}

impl Counter {
    /// Every counter, in declaration order.
    pub const ALL: [Counter; 4] = [
        Self::Choose,
        Self::Injections,
        Self::Stirling2,
        Self::Surjections,
    ];

    /// Evaluates this counter at `(n, k)`.
    pub fn count(self, n: i64, k: i64) -> Result<BigUint> {
        match self {
            Self::Choose => choose(n, k),
            Self::Injections => injections(n, k),
            Self::Stirling2 => stirling_second_kind(n, k),
            Self::Surjections => surjections(n, k),
        }
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choose => write!(f, "choose"),
            Self::Injections => write!(f, "injections"),
            Self::Stirling2 => write!(f, "stirling2"),
            Self::Surjections => write!(f, "surjections"),
        }
    }
}

impl std::str::FromStr for Counter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "choose" | "binomial" => Ok(Self::Choose),
            "injections" | "falling" => Ok(Self::Injections),
            "stirling2" | "stirling_second_kind" | "parts" => Ok(Self::Stirling2),
            "surjections" => Ok(Self::Surjections),
            _ => Err(format!("unknown counter: {s}")),
        }
    }
}
