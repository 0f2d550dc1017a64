use crate::support::DEFAULT_SAMPLE_LIMIT;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "combinat",
    about = "Combinat: exact combinatorial counts and ordered enumerations",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Product of every integer in [START, END]
    Product {
        /// First factor (inclusive)
        #[arg(allow_negative_numbers = true)]
        start: i64,

        /// Last factor (inclusive)
        #[arg(allow_negative_numbers = true)]
        end: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate one (n, k) counter
    Count {
        /// Counter: choose, injections, stirling2, or surjections
        counter: String,

        /// Size of the ground set
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Size of the selection, codomain, or block count
        #[arg(allow_negative_numbers = true)]
        k: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Number of partitions of an N-element set
    Bell {
        /// Size of the set
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step a sorted array to its next fixed-sum successor
    Advance {
        /// Sorted values (a0 <= a1 <= ...)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,

        /// Fixed sum; defaults to the sum of VALUES
        #[arg(long, allow_negative_numbers = true)]
        sum: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List sorted arrays of LEN non-negative integers summing to SUM
    Partitions {
        /// Array length (maximum number of parts)
        #[arg(allow_negative_numbers = true)]
        len: i64,

        /// Fixed sum
        #[arg(allow_negative_numbers = true)]
        sum: i64,

        /// Maximum number of arrays to print
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List ordered K-selections without repetition from {0, ..., N-1}
    Selections {
        /// Size of the index set
        #[arg(allow_negative_numbers = true)]
        n: i64,

        /// Tuple length
        #[arg(allow_negative_numbers = true)]
        k: i64,

        /// Maximum number of tuples to print
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
