use crate::{
    core::{utils::errors::GraphError, AsVertexRef},
    db::api::view::GraphViewOps,
};

/// Degree, edge count and density.
///
/// Plain graphs count edges. Link streams weight every edge by the share of the
/// definition window it is active in, so an edge active half of the time counts for `0.5`.
pub trait MetricOps: GraphViewOps {
    /// Degree of `v`, in plus out for directed graphs.
    fn degree<V: AsVertexRef>(&self, v: V) -> Result<f64, GraphError>;

    fn num_edges(&self) -> f64;

    /// Share of the possible edges that are present, `0.0` with fewer than two vertices.
    fn density(&self) -> f64;
}
