pub mod advance;
pub mod bell;
pub mod count;
pub mod partitions;
pub mod product;
pub mod selections;
