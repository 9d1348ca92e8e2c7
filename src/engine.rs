//! Rule execution engine and violation aggregation

pub mod aggregator;
pub mod executor;
pub mod file_walker;

pub use aggregator::{AggregationResult, Outcome, ViolationAggregator};
pub use executor::{ExecutionEngine, ExecutionResult};
pub use file_walker::{FileWalker, FileWalkerError, WalkOptions};
