pub mod aggregator;
pub mod collation;

pub use aggregator::{total_quantity, AggregateGroup, Aggregator};
pub use collation::Collation;
