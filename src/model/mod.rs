pub mod metrics;

pub use metrics::{Category, Metric, MetricSet};
