//! Read access to every graph type of the crate.

mod graph;
pub mod internal;
mod metric_ops;

pub use graph::GraphViewOps;
pub use linkstream_api::iter::{BoxedIter, BoxedLIter};
pub use metric_ops::MetricOps;
