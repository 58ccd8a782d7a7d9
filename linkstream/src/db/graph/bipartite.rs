//! Bipartite graphs: every vertex is `Top` or `Bottom` and edges only link the two groups.
//!
//! Edges between vertices that do not exist yet follow one creation policy: the source
//! label becomes a `Top` vertex and the destination label a `Bottom` vertex. The groups
//! are checked before anything is created.
//!
//! # Examples
//!
//! ```rust
//! use linkstream::prelude::*;
//!
//! let mut g = Bipartite::new();
//! g.add_edge("alice", "paper").unwrap();
//! g.add_edge("bob", "paper").unwrap();
//!
//! assert_eq!(g.group("alice").unwrap(), VertexGroup::Top);
//! assert_eq!(g.group("paper").unwrap(), VertexGroup::Bottom);
//! assert!(g.add_edge("alice", "bob").is_err());
//! ```

use crate::{
    core::{
        utils::errors::GraphError, AdjacencyMatrix, AsVertexRef, EdgeRef, VertexGroup, VertexRef,
        VID,
    },
    db::{
        api::{
            mutation::{internal::InternalMutationOps, EdgeAdditionOps},
            view::{internal::InternalStorageOps, GraphViewOps, MetricOps},
        },
        graph::graph::Graph,
    },
};
use itertools::Itertools;
use linkstream_core::entities::graph::storage::GraphStorage;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// Groups given to endpoints created from labels by a bipartite edge addition.
pub(crate) const NEW_ENDPOINT_GROUPS: (VertexGroup, VertexGroup) =
    (VertexGroup::Top, VertexGroup::Bottom);

/// Checks that `src -> dst` links a `Top` and a `Bottom` vertex, using
/// [`NEW_ENDPOINT_GROUPS`] for endpoints that do not exist yet.
pub(crate) fn check_bipartite_edge<E>(
    storage: &GraphStorage<E>,
    src: VertexRef<'_>,
    dst: VertexRef<'_>,
) -> Result<(), GraphError> {
    let group_of = |v: VertexRef<'_>, new: VertexGroup| -> Result<VertexGroup, GraphError> {
        Ok(match storage.lookup(v)? {
            Some(vid) => storage.group(vid).unwrap_or_default(),
            None => new,
        })
    };
    let s = group_of(src, NEW_ENDPOINT_GROUPS.0)?;
    let d = group_of(dst, NEW_ENDPOINT_GROUPS.1)?;
    if s.is_null() {
        return Err(GraphError::UngroupedVertex(src.to_string()));
    }
    if d.is_null() {
        return Err(GraphError::UngroupedVertex(dst.to_string()));
    }
    if s == d {
        return Err(GraphError::SameGroupEdge {
            src: src.to_string(),
            dst: dst.to_string(),
            group: s,
        });
    }
    Ok(())
}

/// Fails on the first vertex without group.
pub(crate) fn check_grouped<E>(storage: &GraphStorage<E>) -> Result<(), GraphError> {
    match storage.vertices_in_group(VertexGroup::Null).next() {
        Some(v) => Err(GraphError::ungrouped(v, storage.label(v))),
        None => Ok(()),
    }
}

pub(crate) fn check_group_argument(group: VertexGroup) -> Result<(), GraphError> {
    if group.is_null() {
        Err(GraphError::InvalidGroup(group))
    } else {
        Ok(())
    }
}

pub(crate) fn add_grouped_vertex<E>(
    storage: &mut GraphStorage<E>,
    group: VertexGroup,
    label: Option<&str>,
) -> Result<VID, GraphError> {
    check_group_argument(group)?;
    Ok(storage.add_vertex(label, group)?)
}

/// Removes every vertex of `group`. Nothing is removed if the graph has a vertex
/// without group.
pub(crate) fn clear_group<E>(
    storage: &mut GraphStorage<E>,
    group: VertexGroup,
) -> Result<(), GraphError> {
    check_group_argument(group)?;
    check_grouped(storage)?;
    let doomed = storage.vertices_in_group(group).collect_vec();
    debug!(%group, vertices = doomed.len(), "clearing vertex group");
    // highest id first so the remaining ids stay valid
    for v in doomed.into_iter().rev() {
        storage.remove_vertex(v)?;
    }
    Ok(())
}

/// `|top| x |bottom|` matrix, rows and columns in id order.
pub(crate) fn biadjacency<E>(storage: &GraphStorage<E>) -> AdjacencyMatrix {
    let top = storage.vertices_in_group(VertexGroup::Top).collect_vec();
    let bottom = storage
        .vertices_in_group(VertexGroup::Bottom)
        .collect_vec();
    let mut matrix = AdjacencyMatrix::zeros(top.len(), bottom.len());
    for (row, &t) in top.iter().enumerate() {
        for (col, &b) in bottom.iter().enumerate() {
            if storage.has_edge(t, b) {
                matrix.set(row, col, 1.0);
            }
        }
    }
    matrix
}

/// Number of possible edges.
pub(crate) fn bipartite_pairs<E>(storage: &GraphStorage<E>) -> f64 {
    (storage.count_group(VertexGroup::Top) * storage.count_group(VertexGroup::Bottom)) as f64
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bipartite {
    graph: Graph,
}

impl Bipartite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex to the `Top` or `Bottom` group.
    pub fn add_vertex_w_group(
        &mut self,
        group: VertexGroup,
        label: Option<&str>,
    ) -> Result<VID, GraphError> {
        add_grouped_vertex(self.graph.storage_mut(), group, label)
    }

    pub fn num_top_vertices(&self) -> usize {
        self.storage().count_group(VertexGroup::Top)
    }

    pub fn num_bottom_vertices(&self) -> usize {
        self.storage().count_group(VertexGroup::Bottom)
    }

    /// Removes every vertex of `group` with its edges. The remaining vertices are
    /// renumbered.
    pub fn clear_vertex_w_group(&mut self, group: VertexGroup) -> Result<(), GraphError> {
        clear_group(self.graph.storage_mut(), group)
    }

    /// Biadjacency matrix: one row per `Top` vertex, one column per `Bottom` vertex.
    pub fn adjacency(&self) -> AdjacencyMatrix {
        biadjacency(self.storage())
    }
}

impl InternalStorageOps for Bipartite {
    type EdgeData = ();

    fn storage(&self) -> &GraphStorage<()> {
        self.graph.storage()
    }
}

impl InternalMutationOps for Bipartite {
    fn storage_mut(&mut self) -> &mut GraphStorage<()> {
        self.graph.storage_mut()
    }
}

impl EdgeAdditionOps for Bipartite {
    /// Links a `Top` and a `Bottom` vertex. Unknown source labels become `Top` vertices,
    /// unknown destination labels `Bottom` vertices.
    fn add_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<EdgeRef, GraphError> {
        check_bipartite_edge(self.storage(), src.as_vertex_ref(), dst.as_vertex_ref())?;
        self.graph.add_edge_w_groups(src, dst, NEW_ENDPOINT_GROUPS)
    }
}

impl MetricOps for Bipartite {
    fn degree<V: AsVertexRef>(&self, v: V) -> Result<f64, GraphError> {
        self.graph.degree(v)
    }

    fn num_edges(&self) -> f64 {
        self.graph.num_edges()
    }

    /// `|E| / (|top| * |bottom|)`, `0.0` if a group is empty.
    fn density(&self) -> f64 {
        let pairs = bipartite_pairs(self.storage());
        if pairs == 0.0 {
            return 0.0;
        }
        self.num_edges() / pairs
    }
}

impl Display for Bipartite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bipartite(|top|={}, |bottom|={}, |E|={})",
            self.num_top_vertices(),
            self.num_bottom_vertices(),
            self.count_edges()
        )
    }
}
