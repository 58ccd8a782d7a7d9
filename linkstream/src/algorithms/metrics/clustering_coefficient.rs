//! Local clustering coefficient: the share of pairs of neighbours that are linked.
//!
//! Direction is ignored, `u` and `w` are neighbours of `v` if any edge links them to `v`.
//! Activity is ignored as well, every edge of a link stream counts.

use crate::{
    core::{utils::errors::GraphError, AsVertexRef, Direction, VID},
    db::api::view::{internal::InternalStorageOps, GraphViewOps},
};
use itertools::Itertools;

fn lcc<G: GraphViewOps>(graph: &G, v: VID) -> f64 {
    let storage = graph.storage();
    let neighbours = storage.neighbours(v, Direction::BOTH).collect_vec();
    let k = neighbours.len() as f64;
    if k < 2.0 {
        return 0.0;
    }
    let links = neighbours
        .iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| storage.has_edge(a, b) || storage.has_edge(b, a))
        .count() as f64;
    2.0 * links / (k * (k - 1.0))
}

/// Local clustering coefficient of `v`, `0.0` if `v` has fewer than two neighbours.
///
/// # Arguments
///
/// * `graph` - Any graph, directed graphs are treated as undirected
/// * `v` - The vertex
pub fn local_clustering_coefficient<G: GraphViewOps, V: AsVertexRef>(
    graph: &G,
    v: V,
) -> Result<f64, GraphError> {
    let vid = graph.resolve(v)?;
    Ok(lcc(graph, vid))
}

/// Mean of the local clustering coefficients, `0.0` for an empty graph.
pub fn average_clustering<G: GraphViewOps>(graph: &G) -> f64 {
    let n = graph.num_vertices();
    if n == 0 {
        return 0.0;
    }
    graph.vertices().map(|v| lcc(graph, v)).sum::<f64>() / n as f64
}
