use crate::{
    core::{
        utils::errors::GraphError, AdjacencyMatrix, AsVertexRef, Direction, EdgeRef, VertexGroup,
        VID,
    },
    db::api::view::{internal::InternalStorageOps, BoxedLIter},
};

/// Structural queries shared by every graph type.
///
/// Vertex arguments are anything implementing [`AsVertexRef`]: a [`VID`], a label or a
/// [`VertexRef`](crate::core::VertexRef). Ids are only valid until the next vertex removal.
pub trait GraphViewOps: InternalStorageOps {
    fn is_directed(&self) -> bool {
        self.storage().is_directed()
    }

    fn num_vertices(&self) -> usize {
        self.storage().num_vertices()
    }

    /// Number of edges, ignoring any activity.
    fn count_edges(&self) -> usize {
        self.storage().num_edges()
    }

    fn has_vertex<V: AsVertexRef>(&self, v: V) -> bool {
        self.storage().resolve(v.as_vertex_ref()).is_some()
    }

    /// Checks for the edge `src -> dst`. Direction is ignored for undirected graphs.
    fn has_edge<S: AsVertexRef, T: AsVertexRef>(&self, src: S, dst: T) -> bool {
        let storage = self.storage();
        match (
            storage.resolve(src.as_vertex_ref()),
            storage.resolve(dst.as_vertex_ref()),
        ) {
            (Some(s), Some(d)) => storage.has_edge(s, d),
            _ => false,
        }
    }

    /// Physical id of the vertex with this label.
    fn vertex(&self, label: &str) -> Option<VID> {
        self.storage().vertex(label)
    }

    fn label(&self, v: VID) -> Option<&str> {
        self.storage().label(v)
    }

    /// Labels of the labelled vertices in id order.
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.storage().labels()
    }

    /// Label of the vertex or its id if it has none.
    fn vertex_name(&self, v: VID) -> String {
        self.label(v).map_or_else(|| v.to_string(), str::to_owned)
    }

    fn resolve<V: AsVertexRef>(&self, v: V) -> Result<VID, GraphError> {
        Ok(self.storage().resolve_or_err(v.as_vertex_ref())?)
    }

    fn vertices(&self) -> impl Iterator<Item = VID> + '_ {
        self.storage().vertices()
    }

    /// Every edge once, ordered by `(src, dst)`. Undirected edges have `src < dst`.
    fn edges(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.storage().edges().map(|(e, _)| e)
    }

    /// Neighbours of `v`, successors only for directed graphs.
    fn neighbours<V: AsVertexRef>(&self, v: V) -> Result<BoxedLIter<'_, VID>, GraphError> {
        self.neighbours_dir(v, Direction::OUT)
    }

    fn in_neighbours<V: AsVertexRef>(&self, v: V) -> Result<BoxedLIter<'_, VID>, GraphError> {
        self.neighbours_dir(v, Direction::IN)
    }

    fn neighbours_dir<V: AsVertexRef>(
        &self,
        v: V,
        dir: Direction,
    ) -> Result<BoxedLIter<'_, VID>, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.storage().neighbours(vid, dir))
    }

    /// Number of successors. Same as [`GraphViewOps::in_degree`] for undirected graphs.
    fn out_degree<V: AsVertexRef>(&self, v: V) -> Result<usize, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.storage().degree(vid, Direction::OUT).unwrap_or(0))
    }

    fn in_degree<V: AsVertexRef>(&self, v: V) -> Result<usize, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.storage().degree(vid, Direction::IN).unwrap_or(0))
    }

    fn group<V: AsVertexRef>(&self, v: V) -> Result<VertexGroup, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.storage().group(vid).unwrap_or_default())
    }

    /// Dense `|V| x |V|` adjacency matrix indexed by vertex id.
    fn adjacency(&self) -> AdjacencyMatrix {
        self.storage().adjacency()
    }
}

impl<G: InternalStorageOps + ?Sized> GraphViewOps for G {}
