//! Plain graphs without activity.
//!
//! [`Graph`] and [`DiGraph`] share one implementation, [`BaseGraph`], parameterised by a
//! [`GraphType`] marker.
//!
//! # Examples
//!
//! ```rust
//! use linkstream::prelude::*;
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b").unwrap();
//! g.add_edge("b", "c").unwrap();
//! g.add_edge("c", "a").unwrap();
//!
//! assert_eq!(g.num_vertices(), 3);
//! assert_eq!(g.num_edges(), 3.0);
//! assert_eq!(g.density(), 1.0);
//! ```

use crate::{
    config::GraphConfig,
    core::{utils::errors::GraphError, AsVertexRef, Direction, EdgeRef, VertexGroup},
    db::api::{
        mutation::{internal::InternalMutationOps, EdgeAdditionOps},
        view::{internal::InternalStorageOps, GraphViewOps, MetricOps},
    },
};
use linkstream_core::entities::graph::storage::GraphStorage;
use std::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
};

/// Selects the directedness of a graph type at compile time.
pub trait GraphType: Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    const DIRECTED: bool;
    const NAME: &'static str;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Undirected;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Directed;

impl GraphType for Undirected {
    const DIRECTED: bool = false;
    const NAME: &'static str = "Graph";
}

impl GraphType for Directed {
    const DIRECTED: bool = true;
    const NAME: &'static str = "DiGraph";
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseGraph<D: GraphType> {
    storage: GraphStorage<()>,
    graph_type: PhantomData<D>,
}

pub type Graph = BaseGraph<Undirected>;
pub type DiGraph = BaseGraph<Directed>;

impl<D: GraphType> BaseGraph<D> {
    pub fn new() -> Self {
        Self::from_storage(GraphStorage::new(D::DIRECTED))
    }

    /// Graph with `num_vertices` unlabelled vertices and no edges.
    pub fn with_vertices(num_vertices: usize) -> Self {
        Self::from_storage(GraphStorage::with_vertices(D::DIRECTED, num_vertices))
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::with_vertices(config.num_vertex)
    }

    pub(crate) fn from_storage(storage: GraphStorage<()>) -> Self {
        Self {
            storage,
            graph_type: PhantomData,
        }
    }

    /// Adds the edge with the given groups for endpoints created from labels.
    pub(crate) fn add_edge_w_groups<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        groups: (VertexGroup, VertexGroup),
    ) -> Result<EdgeRef, GraphError> {
        let (s, d) =
            self.storage
                .resolve_endpoints(src.as_vertex_ref(), dst.as_vertex_ref(), groups)?;
        self.storage.add_edge_with(s, d, || ())?;
        Ok(EdgeRef::new(s, d))
    }
}

impl<D: GraphType> Default for BaseGraph<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: GraphType> InternalStorageOps for BaseGraph<D> {
    type EdgeData = ();

    fn storage(&self) -> &GraphStorage<()> {
        &self.storage
    }
}

impl<D: GraphType> InternalMutationOps for BaseGraph<D> {
    fn storage_mut(&mut self) -> &mut GraphStorage<()> {
        &mut self.storage
    }
}

impl<D: GraphType> EdgeAdditionOps for BaseGraph<D> {
    fn add_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<EdgeRef, GraphError> {
        self.add_edge_w_groups(src, dst, (VertexGroup::Null, VertexGroup::Null))
    }
}

impl<D: GraphType> MetricOps for BaseGraph<D> {
    fn degree<V: AsVertexRef>(&self, v: V) -> Result<f64, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.storage.degree(vid, Direction::BOTH).unwrap_or(0) as f64)
    }

    fn num_edges(&self) -> f64 {
        self.storage.num_edges() as f64
    }

    fn density(&self) -> f64 {
        let n = self.storage.num_vertices() as f64;
        if n < 2.0 {
            return 0.0;
        }
        let possible = n * (n - 1.0);
        if D::DIRECTED {
            self.num_edges() / possible
        } else {
            2.0 * self.num_edges() / possible
        }
    }
}

impl<D: GraphType> Display for BaseGraph<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(|V|={}, |E|={})",
            D::NAME,
            self.num_vertices(),
            self.count_edges()
        )
    }
}

#[cfg(test)]
mod db_tests {
    use crate::{
        core::utils::errors::ErrorKind,
        prelude::*,
        test_utils::{build_edge_list, build_graph},
    };
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn triangle<D: GraphType>() -> BaseGraph<D> {
        let mut g = BaseGraph::<D>::new();
        g.add_edge("a", "b").unwrap();
        g.add_edge("b", "c").unwrap();
        g.add_edge("c", "a").unwrap();
        g
    }

    #[test]
    fn triangle_density() {
        let g: Graph = triangle();
        assert_eq!(g.density(), 1.0);
        let g: DiGraph = triangle();
        assert_eq!(g.density(), 0.5);
    }

    #[test]
    fn density_of_tiny_graphs_is_zero() {
        assert_eq!(Graph::new().density(), 0.0);
        assert_eq!(Graph::with_vertices(1).density(), 0.0);
    }

    #[test]
    fn label_endpoints_are_created_on_demand() {
        let mut g = Graph::new();
        let e = g.add_edge("x", "y").unwrap();
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.vertex("x"), Some(e.src()));
        assert_eq!(g.vertex("y"), Some(e.dst()));
        assert_eq!(g.labels().collect_vec(), vec!["x", "y"]);

        // mixing an existing id with a new label
        g.add_edge(VID(0), "z").unwrap();
        assert!(g.has_edge("z", "x"));
    }

    #[test]
    fn failed_edge_additions_change_nothing() {
        let mut g = Graph::with_vertices(2);
        let err = g.add_edge("new", VID(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        let err = g.add_edge(VID(1), VID(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Structural);
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.count_edges(), 0);
    }

    #[test]
    fn directed_degrees() {
        let mut g = DiGraph::new();
        g.add_edge("a", "b").unwrap();
        g.add_edge("a", "c").unwrap();
        g.add_edge("c", "a").unwrap();

        assert_eq!(g.out_degree("a").unwrap(), 2);
        assert_eq!(g.in_degree("a").unwrap(), 1);
        assert_eq!(g.degree("a").unwrap(), 3.0);
        assert_eq!(g.neighbours("b").unwrap().count(), 0);
        assert_eq!(
            g.in_neighbours("a").unwrap().collect_vec(),
            vec![g.vertex("c").unwrap()]
        );
        assert!(g.has_edge("a", "b"));
        assert!(!g.has_edge("b", "a"));
    }

    #[test]
    fn remove_and_clear() {
        let mut g: Graph = triangle();
        g.remove_edge("b", "a").unwrap();
        assert_eq!(g.count_edges(), 2);
        assert_eq!(
            g.remove_edge("b", "a").unwrap_err().kind(),
            ErrorKind::Structural
        );

        g.remove_vertex("b").unwrap();
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.vertex("c"), Some(VID(1)));
        assert_eq!(g.count_edges(), 1);

        g.clear_edges();
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.count_edges(), 0);

        g.clear();
        assert_eq!(g.num_vertices(), 0);
        assert!(!g.has_vertex("a"));
    }

    #[test]
    fn adjacency_matrix() {
        let mut g = DiGraph::with_vertices(3);
        g.add_edge(VID(0), VID(2)).unwrap();
        assert_eq!(g.adjacency().to_string(), "0 0 1\n0 0 0\n0 0 0\n");
    }

    #[test]
    fn handshake() {
        proptest!(|(edges in build_edge_list(60, 15))| {
            let g: Graph = build_graph(15, &edges);
            let total: f64 = (0..15).map(|v| g.degree(VID(v)).unwrap()).sum();
            prop_assert_eq!(total, 2.0 * g.num_edges());

            let g: DiGraph = build_graph(15, &edges);
            let outs: usize = (0..15).map(|v| g.out_degree(VID(v)).unwrap()).sum();
            let ins: usize = (0..15).map(|v| g.in_degree(VID(v)).unwrap()).sum();
            prop_assert_eq!(outs, g.count_edges());
            prop_assert_eq!(ins, g.count_edges());
        });
    }

    #[test]
    fn display() {
        let g: Graph = triangle();
        assert_eq!(g.to_string(), "Graph(|V|=3, |E|=3)");
        let g: DiGraph = triangle();
        assert_eq!(g.to_string(), "DiGraph(|V|=3, |E|=3)");
    }
}
