//! Projection of a bipartite graph onto one of its groups.
//!
//! Two vertices of the focus group are linked in the projection when they share a
//! neighbour in the other group. For bipartite link streams the shared neighbour has to
//! be linked to both at the same time, and the projected edge is active whenever that is
//! the case.
//!
//! The projection keeps the focus vertices in id order with their labels, so vertex `i`
//! of the projection is the `i`-th focus vertex of the source. Every pair of focus
//! vertices is tested against every vertex of the other group.
//!
//! # Examples
//!
//! ```rust
//! use linkstream::{algorithms::bipartite_projection::projected_graph, prelude::*};
//!
//! let mut g = Bipartite::new();
//! g.add_edge("A", "B").unwrap();
//! g.add_edge("C", "B").unwrap();
//!
//! let projection = projected_graph(VertexGroup::Top, &g).unwrap();
//! assert_eq!(projection.num_vertices(), 2);
//! assert!(projection.has_edge("A", "C"));
//! ```

use crate::{
    core::{utils::errors::GraphError, IntervalSet, VertexGroup, VID},
    db::{
        api::view::internal::InternalStorageOps,
        graph::{
            bi_link_stream::BiLinkStream,
            bipartite::{check_group_argument, check_grouped, Bipartite},
            graph::Graph,
            link_stream::LinkStream,
        },
    },
};
use itertools::Itertools;
use linkstream_core::entities::graph::storage::GraphStorage;
use tracing::debug;

/// Focus and other group vertices of a well formed bipartite graph, in id order.
fn split_groups<E>(
    storage: &GraphStorage<E>,
    group: VertexGroup,
) -> Result<(Vec<VID>, Vec<VID>), GraphError> {
    check_group_argument(group)?;
    check_grouped(storage)?;
    let other = group.opposite().ok_or(GraphError::InvalidGroup(group))?;
    Ok((
        storage.vertices_in_group(group).collect(),
        storage.vertices_in_group(other).collect(),
    ))
}

/// Copy of the vertices of `storage` without edges and without the `other` vertices.
fn focus_copy<E, E2>(
    storage: &GraphStorage<E>,
    other: &[VID],
) -> Result<GraphStorage<E2>, GraphError> {
    let mut copy = storage.clone_vertices();
    for &v in other.iter().rev() {
        copy.remove_vertex(v)?;
    }
    Ok(copy)
}

/// Projects a bipartite graph onto `group`.
///
/// # Arguments
///
/// * `group` - The group to keep, `Top` or `Bottom`
/// * `graph` - The bipartite graph
///
/// # Returns
///
/// A graph over the vertices of `group` linking every pair with a common neighbour.
/// Fails for the `Null` group or if a vertex of `graph` has no group.
pub fn projected_graph(group: VertexGroup, graph: &Bipartite) -> Result<Graph, GraphError> {
    let storage = graph.storage();
    let (focus, other) = split_groups(storage, group)?;
    let mut projected: GraphStorage<()> = focus_copy(storage, &other)?;

    for ((a, &i), (b, &j)) in focus.iter().enumerate().tuple_combinations() {
        let linked = other
            .iter()
            .any(|&k| storage.has_edge(i, k) && storage.has_edge(j, k));
        if linked {
            projected.add_edge_with(VID(a), VID(b), || ())?;
        }
    }
    debug!(
        %group,
        vertices = projected.num_vertices(),
        edges = projected.num_edges(),
        "projected bipartite graph"
    );
    Ok(Graph::from_storage(projected))
}

/// Projects a bipartite link stream onto `group`.
///
/// The projection has the definition window of `graph`. Vertices `i` and `j` are linked
/// during the union over every common neighbour `k` of the times both `i - k` and
/// `j - k` are active. Shared activity is copied as the source holds it, even when the
/// window of `graph` was narrowed after its edges were added.
pub fn projected_linkstream(
    group: VertexGroup,
    graph: &BiLinkStream,
) -> Result<LinkStream, GraphError> {
    let storage = graph.storage();
    let (focus, other) = split_groups(storage, group)?;
    let mut projected: GraphStorage<IntervalSet> = focus_copy(storage, &other)?;
    // projected edges are defined on every source edge definition
    let edge_definition = storage
        .edges()
        .fold(graph.definition(), |hull, (_, set)| hull.hull(&set.definition()));

    for ((a, &i), (b, &j)) in focus.iter().enumerate().tuple_combinations() {
        for &k in &other {
            if let (Some(ik), Some(jk)) = (storage.edge(i, k), storage.edge(j, k)) {
                if ik.intersects(jk) {
                    let shared = ik.intersection(jk)?;
                    let set = projected.add_edge_with(VID(a), VID(b), || {
                        IntervalSet::with_definition(edge_definition)
                    })?;
                    set.extend(&shared);
                }
            }
        }
    }
    debug!(
        %group,
        vertices = projected.num_vertices(),
        edges = projected.num_edges(),
        "projected bipartite link stream"
    );
    Ok(LinkStream::from_parts(projected, graph.definition()))
}
