//! Bipartite link streams: a [`LinkStream`] whose edges only link `Top` and `Bottom`
//! vertices.

use crate::{
    config::GraphConfig,
    core::{
        utils::errors::GraphError, AdjacencyMatrix, AsVertexRef, EdgeRef, Interval, IntervalSet,
        VertexGroup, VID,
    },
    db::{
        api::{
            mutation::{internal::InternalMutationOps, EdgeAdditionOps, TemporalAdditionOps},
            view::{internal::InternalStorageOps, GraphViewOps, MetricOps},
        },
        graph::{
            bipartite::{
                add_grouped_vertex, biadjacency, bipartite_pairs, check_bipartite_edge,
                check_group_argument, check_grouped, clear_group, NEW_ENDPOINT_GROUPS,
            },
            link_stream::{sweep, LinkStream},
        },
    },
};
use itertools::Itertools;
use linkstream_core::entities::graph::storage::GraphStorage;
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BiLinkStream {
    stream: LinkStream,
}

impl BiLinkStream {
    /// Empty bipartite link stream over `[0, MAX_TIME)`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(start: i64, end: i64) -> Result<Self, GraphError> {
        Ok(Self {
            stream: LinkStream::with_window(start, end)?,
        })
    }

    /// Only the window of the config is used, bipartite vertices need a group.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            stream: LinkStream::from_parts(GraphStorage::new(false), config.window),
        }
    }

    pub fn definition(&self) -> Interval {
        self.stream.definition()
    }

    pub fn set_definition(&mut self, start: i64, end: i64) -> Result<(), GraphError> {
        self.stream.set_definition(start, end)
    }

    pub fn definition_length(&self) -> i64 {
        self.stream.definition_length()
    }

    pub fn add_vertex_w_group(
        &mut self,
        group: VertexGroup,
        label: Option<&str>,
    ) -> Result<VID, GraphError> {
        add_grouped_vertex(self.stream.storage_mut(), group, label)
    }

    pub fn num_top_vertices(&self) -> usize {
        self.storage().count_group(VertexGroup::Top)
    }

    pub fn num_bottom_vertices(&self) -> usize {
        self.storage().count_group(VertexGroup::Bottom)
    }

    pub fn clear_vertex_w_group(&mut self, group: VertexGroup) -> Result<(), GraphError> {
        clear_group(self.stream.storage_mut(), group)
    }

    /// Biadjacency matrix of the underlying structure, activity is ignored.
    pub fn adjacency(&self) -> AdjacencyMatrix {
        biadjacency(self.storage())
    }

    pub fn is_edge_active<S: AsVertexRef, T: AsVertexRef>(
        &self,
        src: S,
        dst: T,
        start: i64,
        end: i64,
    ) -> bool {
        self.stream.is_edge_active(src, dst, start, end)
    }

    pub fn edge_interval_set<S: AsVertexRef, T: AsVertexRef>(
        &self,
        src: S,
        dst: T,
    ) -> Result<&IntervalSet, GraphError> {
        self.stream.edge_interval_set(src, dst)
    }

    pub fn describe_edges(&self) -> String {
        self.stream.describe_edges()
    }

    pub fn instantaneous_degree<V: AsVertexRef>(
        &self,
        v: V,
    ) -> Result<BTreeMap<i64, i64>, GraphError> {
        self.stream.instantaneous_degree(v)
    }

    /// Number of active edges of the whole `group` as a step function of time.
    ///
    /// Fails for the `Null` group and for graphs with a vertex without group.
    pub fn instantaneous_group_degree(
        &self,
        group: VertexGroup,
    ) -> Result<BTreeMap<i64, i64>, GraphError> {
        check_group_argument(group)?;
        let storage = self.storage();
        check_grouped(storage)?;
        let in_group = |v: VID| storage.group(v) == Some(group);
        let sets = storage
            .edges()
            .filter(|(e, _)| in_group(e.src()) || in_group(e.dst()))
            .map(|(_, set)| set);
        Ok(sweep(sets, self.definition().start()))
    }

    pub(crate) fn stream(&self) -> &LinkStream {
        &self.stream
    }

    fn add_bipartite_activity<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        intervals: &[Interval],
    ) -> Result<EdgeRef, GraphError> {
        check_bipartite_edge(self.storage(), src.as_vertex_ref(), dst.as_vertex_ref())?;
        self.stream
            .add_activity(src, dst, intervals, NEW_ENDPOINT_GROUPS)
    }
}

impl InternalStorageOps for BiLinkStream {
    type EdgeData = IntervalSet;

    fn storage(&self) -> &GraphStorage<IntervalSet> {
        self.stream.storage()
    }
}

impl InternalMutationOps for BiLinkStream {
    fn storage_mut(&mut self) -> &mut GraphStorage<IntervalSet> {
        self.stream.storage_mut()
    }
}

impl EdgeAdditionOps for BiLinkStream {
    fn add_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<EdgeRef, GraphError> {
        let window = self.definition();
        self.add_bipartite_activity(src, dst, &[window])
    }
}

impl TemporalAdditionOps for BiLinkStream {
    fn add_edge_w_time<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        start: i64,
        end: i64,
    ) -> Result<EdgeRef, GraphError> {
        let interval = Interval::new(start, end)?;
        self.add_bipartite_activity(src, dst, &[interval])
    }

    fn add_edge_w_intervals<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        intervals: &IntervalSet,
    ) -> Result<EdgeRef, GraphError> {
        let intervals = intervals.iter().collect_vec();
        self.add_bipartite_activity(src, dst, &intervals)
    }
}

impl MetricOps for BiLinkStream {
    fn degree<V: AsVertexRef>(&self, v: V) -> Result<f64, GraphError> {
        self.stream.degree(v)
    }

    fn num_edges(&self) -> f64 {
        self.stream.num_edges()
    }

    /// Total activity over `|top| * |bottom| * T`.
    fn density(&self) -> f64 {
        let pairs = bipartite_pairs(self.storage());
        if pairs == 0.0 {
            return 0.0;
        }
        self.stream.total_length() / (pairs * self.definition_length() as f64)
    }
}

impl Display for BiLinkStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BiLinkStream(|top|={}, |bottom|={}, |E|={}, window={})",
            self.num_top_vertices(),
            self.num_bottom_vertices(),
            self.num_edges(),
            self.definition()
        )
    }
}
