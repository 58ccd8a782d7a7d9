use crate::{
    entities::{
        graph::logical_to_physical::Mapping, vertices::vertex_store::VertexStore, EdgeRef,
        VertexGroup, VertexRef, VID,
    },
    utils::{errors::MutateGraphError, matrix::AdjacencyMatrix},
};
use itertools::Itertools;
use linkstream_api::{core::Direction, iter::BoxedLIter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// Adjacency-list graph with labelled vertices and a payload `E` on every edge.
///
/// Edges of undirected graphs are keyed by their canonical reference (`src <= dst`), so an
/// undirected edge and its payload exist exactly once. Self loops and parallel edges are
/// not representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStorage<E> {
    directed: bool,
    nodes: Vec<VertexStore>,
    edges: BTreeMap<EdgeRef, E>,
    logical_to_physical: Mapping,
}

impl<E> GraphStorage<E> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: BTreeMap::new(),
            logical_to_physical: Mapping::new(),
        }
    }

    /// Storage pre-populated with `num_vertices` unlabelled vertices.
    pub fn with_vertices(directed: bool, num_vertices: usize) -> Self {
        let mut storage = Self::new(directed);
        storage
            .nodes
            .resize_with(num_vertices, VertexStore::default);
        storage
    }

    /// Copies the vertices (labels and groups) into a storage without edges. The edge
    /// payload type of the copy is free.
    pub fn clone_vertices<E2>(&self) -> GraphStorage<E2> {
        let nodes = self
            .nodes
            .iter()
            .map(|node| VertexStore::new(node.label().map(str::to_owned), node.group()))
            .collect();
        GraphStorage {
            directed: self.directed,
            nodes,
            edges: BTreeMap::new(),
            logical_to_physical: self.logical_to_physical.clone(),
        }
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn has_vertex(&self, v: VID) -> bool {
        v.0 < self.nodes.len()
    }

    pub fn vertex(&self, label: &str) -> Option<VID> {
        self.logical_to_physical.get(label)
    }

    pub fn vertex_store(&self, v: VID) -> Option<&VertexStore> {
        self.nodes.get(v.0)
    }

    pub fn label(&self, v: VID) -> Option<&str> {
        self.nodes.get(v.0).and_then(|node| node.label())
    }

    /// Labels of the labelled vertices in id order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().filter_map(|node| node.label())
    }

    pub fn group(&self, v: VID) -> Option<VertexGroup> {
        self.nodes.get(v.0).map(|node| node.group())
    }

    pub fn set_group(&mut self, v: VID, group: VertexGroup) -> Result<(), MutateGraphError> {
        let node = self
            .nodes
            .get_mut(v.0)
            .ok_or(MutateGraphError::VertexNotFound(v))?;
        node.set_group(group);
        Ok(())
    }

    pub fn vertices(&self) -> impl Iterator<Item = VID> + '_ {
        (0..self.nodes.len()).map(VID)
    }

    pub fn vertices_in_group(&self, group: VertexGroup) -> impl Iterator<Item = VID> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, node)| node.group() == group)
            .map(|(i, _)| VID(i))
    }

    pub fn count_group(&self, group: VertexGroup) -> usize {
        self.nodes.iter().filter(|node| node.group() == group).count()
    }

    /// Physical id of an existing vertex.
    pub fn resolve(&self, v: VertexRef<'_>) -> Option<VID> {
        match v {
            VertexRef::Internal(vid) => self.has_vertex(vid).then_some(vid),
            VertexRef::Label(label) => self.vertex(label),
        }
    }

    pub fn resolve_or_err(&self, v: VertexRef<'_>) -> Result<VID, MutateGraphError> {
        self.resolve(v).ok_or_else(|| match v {
            VertexRef::Internal(vid) => MutateGraphError::VertexNotFound(vid),
            VertexRef::Label(label) => MutateGraphError::LabelNotFound(label.to_owned()),
        })
    }

    pub fn add_vertex(
        &mut self,
        label: Option<&str>,
        group: VertexGroup,
    ) -> Result<VID, MutateGraphError> {
        let vid = VID(self.nodes.len());
        if let Some(label) = label {
            self.logical_to_physical.insert(label, vid)?;
        }
        self.nodes
            .push(VertexStore::new(label.map(str::to_owned), group));
        Ok(vid)
    }

    /// Looks `v` up without creating anything. An unknown label is `Ok(None)`, an unknown
    /// id is an error.
    pub fn lookup(&self, v: VertexRef<'_>) -> Result<Option<VID>, MutateGraphError> {
        match v {
            VertexRef::Internal(vid) if self.has_vertex(vid) => Ok(Some(vid)),
            VertexRef::Internal(vid) => Err(MutateGraphError::VertexNotFound(vid)),
            VertexRef::Label(label) => Ok(self.vertex(label)),
        }
    }

    /// Resolves the endpoints of a new edge, creating unknown labels with the given groups.
    ///
    /// Nothing is created unless both endpoints are valid and distinct.
    pub fn resolve_endpoints(
        &mut self,
        src: VertexRef<'_>,
        dst: VertexRef<'_>,
        groups: (VertexGroup, VertexGroup),
    ) -> Result<(VID, VID), MutateGraphError> {
        let s = self.lookup(src)?;
        let d = self.lookup(dst)?;
        let same = match (s, d) {
            (Some(s), Some(d)) => s == d,
            (None, None) => src.as_label() == dst.as_label(),
            _ => false,
        };
        if same {
            return Err(MutateGraphError::SelfLoop(src.to_string()));
        }
        let s = match s {
            Some(s) => s,
            None => self.add_vertex(src.as_label(), groups.0)?,
        };
        let d = match d {
            Some(d) => d,
            None => self.add_vertex(dst.as_label(), groups.1)?,
        };
        Ok((s, d))
    }

    #[inline]
    fn key(&self, src: VID, dst: VID) -> EdgeRef {
        let e = EdgeRef::new(src, dst);
        if self.directed {
            e
        } else {
            e.canonical()
        }
    }

    pub fn has_edge(&self, src: VID, dst: VID) -> bool {
        self.edges.contains_key(&self.key(src, dst))
    }

    pub fn edge(&self, src: VID, dst: VID) -> Option<&E> {
        self.edges.get(&self.key(src, dst))
    }

    pub fn edge_mut(&mut self, src: VID, dst: VID) -> Option<&mut E> {
        let key = self.key(src, dst);
        self.edges.get_mut(&key)
    }

    /// Returns the payload of the edge `src -> dst`, creating the edge with `init` first if
    /// it does not exist yet.
    pub fn add_edge_with(
        &mut self,
        src: VID,
        dst: VID,
        init: impl FnOnce() -> E,
    ) -> Result<&mut E, MutateGraphError> {
        self.check_edge_endpoints(src, dst)?;
        let key = self.key(src, dst);
        if !self.edges.contains_key(&key) {
            self.nodes[src.0].add_out(dst);
            if self.directed {
                self.nodes[dst.0].add_in(src);
            } else {
                self.nodes[dst.0].add_out(src);
            }
        }
        Ok(self.edges.entry(key).or_insert_with(init))
    }

    pub fn check_edge_endpoints(&self, src: VID, dst: VID) -> Result<(), MutateGraphError> {
        if !self.has_vertex(src) {
            return Err(MutateGraphError::VertexNotFound(src));
        }
        if !self.has_vertex(dst) {
            return Err(MutateGraphError::VertexNotFound(dst));
        }
        if src == dst {
            return Err(MutateGraphError::SelfLoop(src.to_string()));
        }
        Ok(())
    }

    /// Removes the edge and hands back its payload.
    pub fn remove_edge(&mut self, src: VID, dst: VID) -> Result<E, MutateGraphError> {
        let key = self.key(src, dst);
        let data = self
            .edges
            .remove(&key)
            .ok_or(MutateGraphError::MissingEdge { src, dst })?;
        self.nodes[src.0].remove_out(dst);
        if self.directed {
            self.nodes[dst.0].remove_in(src);
        } else {
            self.nodes[dst.0].remove_out(src);
        }
        Ok(data)
    }

    /// Removes the vertex and every incident edge. Every vertex with a higher id moves one
    /// position down.
    pub fn remove_vertex(&mut self, v: VID) -> Result<(), MutateGraphError> {
        if !self.has_vertex(v) {
            return Err(MutateGraphError::VertexNotFound(v));
        }
        let shift = |u: VID| if u > v { VID(u.0 - 1) } else { u };
        let edges = std::mem::take(&mut self.edges);
        let before = edges.len();
        self.edges = edges
            .into_iter()
            .filter(|(e, _)| e.src() != v && e.dst() != v)
            .map(|(e, data)| (EdgeRef::new(shift(e.src()), shift(e.dst())), data))
            .collect();
        trace!(
            vertex = v.0,
            removed_edges = before - self.edges.len(),
            "removed vertex"
        );

        self.nodes.remove(v.0);
        for node in self.nodes.iter_mut() {
            node.shift_after_removal(v);
        }
        let labels = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (VID(i), node.label()));
        self.logical_to_physical.rebuild(labels);
        Ok(())
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.logical_to_physical.clear();
    }

    /// Removes every edge, vertices stay.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        for node in self.nodes.iter_mut() {
            node.clear_adjacency();
        }
    }

    /// Neighbours of `v` in ascending id order. Undirected graphs ignore `dir`; for
    /// directed graphs `BOTH` yields the union of successors and predecessors.
    pub fn neighbours(&self, v: VID, dir: Direction) -> BoxedLIter<'_, VID> {
        let Some(node) = self.nodes.get(v.0) else {
            return Box::new(std::iter::empty());
        };
        if !self.directed {
            return Box::new(node.out_neighbours().iter().copied());
        }
        match dir {
            Direction::OUT => Box::new(node.out_neighbours().iter().copied()),
            Direction::IN => Box::new(node.in_neighbours().iter().copied()),
            Direction::BOTH => Box::new(
                node.out_neighbours()
                    .iter()
                    .merge(node.in_neighbours().iter())
                    .dedup()
                    .copied(),
            ),
        }
    }

    pub fn degree(&self, v: VID, dir: Direction) -> Option<usize> {
        self.nodes
            .get(v.0)
            .map(|node| node.degree(dir, self.directed))
    }

    /// Edges touching `v` with their payloads. For directed graphs out-edges come first.
    pub fn incident_edges(&self, v: VID) -> impl Iterator<Item = (EdgeRef, &E)> + '_ {
        let (out, into) = match self.nodes.get(v.0) {
            Some(node) if self.directed => (Some(node.out_neighbours()), Some(node.in_neighbours())),
            Some(node) => (Some(node.out_neighbours()), None),
            None => (None, None),
        };
        let out = out
            .into_iter()
            .flatten()
            .map(move |&u| self.key(v, u));
        let into = into
            .into_iter()
            .flatten()
            .map(move |&u| self.key(u, v));
        out.chain(into)
            .filter_map(move |key| self.edges.get(&key).map(|data| (key, data)))
    }

    /// Every edge once, ordered by `(src, dst)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeRef, &E)> + '_ {
        self.edges.iter().map(|(e, data)| (*e, data))
    }

    pub fn edges_mut(&mut self) -> impl Iterator<Item = (EdgeRef, &mut E)> + '_ {
        self.edges.iter_mut().map(|(e, data)| (*e, data))
    }

    /// Dense `|V| x |V|` adjacency matrix, symmetric for undirected graphs.
    pub fn adjacency(&self) -> AdjacencyMatrix {
        let n = self.nodes.len();
        let mut matrix = AdjacencyMatrix::zeros(n, n);
        for e in self.edges.keys() {
            matrix.set(e.src().0, e.dst().0, 1.0);
            if !self.directed {
                matrix.set(e.dst().0, e.src().0, 1.0);
            }
        }
        matrix
    }
}

impl<E> Default for GraphStorage<E> {
    fn default() -> Self {
        Self::new(false)
    }
}
