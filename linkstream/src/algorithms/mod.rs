//! Algorithms over the graph types of the crate.

pub mod bipartite_projection;
pub mod metrics;
