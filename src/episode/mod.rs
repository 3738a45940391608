mod aggregate;

pub use aggregate::{Aggregator, Episode, TrailingPolicy, aggregate};
