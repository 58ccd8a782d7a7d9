//! Link streams: graphs whose edges are active during a set of time intervals.
//!
//! Every edge carries an [`IntervalSet`] defined on the definition window of the stream.
//! Degree, edge count and density are time integrals: an edge contributes the share of
//! the window it is active in.
//!
//! # Examples
//!
//! ```rust
//! use linkstream::prelude::*;
//!
//! let mut ls = LinkStream::with_window(0, 10).unwrap();
//! ls.add_edge_w_time("a", "b", 0, 5).unwrap();
//! ls.add_edge_w_time("b", "c", 0, 5).unwrap();
//! ls.add_edge_w_time("c", "a", 0, 5).unwrap();
//!
//! assert_eq!(ls.num_edges(), 1.5);
//! assert_eq!(ls.density(), 0.5);
//! assert!(ls.add_edge_w_time("a", "b", 8, 12).is_err());
//! ```

use crate::{
    config::GraphConfig,
    core::{
        utils::errors::GraphError, AsVertexRef, EdgeRef, Interval, IntervalSet, TimeError,
        VertexGroup, VertexRef, VID,
    },
    db::{
        api::{
            mutation::{internal::InternalMutationOps, EdgeAdditionOps, TemporalAdditionOps},
            view::{internal::InternalStorageOps, GraphViewOps, MetricOps},
        },
        graph::graph::{Directed, GraphType, Undirected},
    },
};
use itertools::Itertools;
use linkstream_core::entities::graph::storage::GraphStorage;
use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    marker::PhantomData,
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct LinkStreamBase<D: GraphType> {
    storage: GraphStorage<IntervalSet>,
    definition: Interval,
    graph_type: PhantomData<D>,
}

pub type LinkStream = LinkStreamBase<Undirected>;
pub type DiLinkStream = LinkStreamBase<Directed>;

impl<D: GraphType> LinkStreamBase<D> {
    /// Empty link stream over `[0, MAX_TIME)`.
    pub fn new() -> Self {
        Self::from_parts(GraphStorage::new(D::DIRECTED), Interval::default())
    }

    /// Empty link stream over `[start, end)`.
    pub fn with_window(start: i64, end: i64) -> Result<Self, GraphError> {
        Ok(Self::from_parts(
            GraphStorage::new(D::DIRECTED),
            Interval::new(start, end)?,
        ))
    }

    /// Link stream over `[start, end)` with `num_vertices` unlabelled vertices.
    pub fn with_vertices(num_vertices: usize, start: i64, end: i64) -> Result<Self, GraphError> {
        Ok(Self::from_parts(
            GraphStorage::with_vertices(D::DIRECTED, num_vertices),
            Interval::new(start, end)?,
        ))
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::from_parts(
            GraphStorage::with_vertices(D::DIRECTED, config.num_vertex),
            config.window,
        )
    }

    pub(crate) fn from_parts(storage: GraphStorage<IntervalSet>, definition: Interval) -> Self {
        Self {
            storage,
            definition,
            graph_type: PhantomData,
        }
    }

    pub fn definition(&self) -> Interval {
        self.definition
    }

    /// Changes the definition window used by new edges and by the time-weighted metrics.
    ///
    /// Edges that already exist keep their own definition interval, activity added to them
    /// later still has to fit in it.
    pub fn set_definition(&mut self, start: i64, end: i64) -> Result<(), GraphError> {
        let definition = Interval::new(start, end)?;
        debug!(old = %self.definition, new = %definition, "changing definition window");
        self.definition = definition;
        Ok(())
    }

    pub fn definition_length(&self) -> i64 {
        self.definition.len()
    }

    /// True iff the edge exists and is active during the whole of `[start, end)`.
    pub fn is_edge_active<S: AsVertexRef, T: AsVertexRef>(
        &self,
        src: S,
        dst: T,
        start: i64,
        end: i64,
    ) -> bool {
        match (self.find_edge(src.as_vertex_ref(), dst.as_vertex_ref()), Interval::new(start, end)) {
            (Some(set), Ok(interval)) => set.contains_interval(&interval),
            _ => false,
        }
    }

    /// Activity of the edge `src -> dst`.
    pub fn edge_interval_set<S: AsVertexRef, T: AsVertexRef>(
        &self,
        src: S,
        dst: T,
    ) -> Result<&IntervalSet, GraphError> {
        let (src, dst) = (src.as_vertex_ref(), dst.as_vertex_ref());
        self.find_edge(src, dst)
            .ok_or_else(|| GraphError::NoEdgeActivity {
                src: src.to_string(),
                dst: dst.to_string(),
            })
    }

    fn find_edge(&self, src: VertexRef<'_>, dst: VertexRef<'_>) -> Option<&IntervalSet> {
        let s = self.storage.resolve(src)?;
        let d = self.storage.resolve(dst)?;
        self.storage.edge(s, d)
    }

    /// Every edge with its activity, one per line.
    pub fn describe_edges(&self) -> String {
        let arrow = if D::DIRECTED { "->" } else { "--" };
        self.storage
            .edges()
            .map(|(e, set)| {
                format!(
                    "{} {} {}: {}",
                    self.vertex_name(e.src()),
                    arrow,
                    self.vertex_name(e.dst()),
                    set
                )
            })
            .join("\n")
    }

    /// Degree of `v` as a step function of time.
    ///
    /// Maps every time an incident edge starts or stops being active to the number of
    /// incident edges active from that time on. A vertex without neighbours maps the start
    /// of the window to `0`.
    pub fn instantaneous_degree<V: AsVertexRef>(
        &self,
        v: V,
    ) -> Result<BTreeMap<i64, i64>, GraphError> {
        let vid = self.resolve(v)?;
        let sets = self.storage.incident_edges(vid).map(|(_, set)| set);
        Ok(sweep(sets, self.definition.start()))
    }

    /// Total activity of all edges.
    pub(crate) fn total_length(&self) -> f64 {
        self.storage
            .edges()
            .map(|(_, set)| set.length() as f64)
            .sum()
    }

    pub(crate) fn vertex_length(&self, v: VID) -> f64 {
        self.storage
            .incident_edges(v)
            .map(|(_, set)| set.length() as f64)
            .sum()
    }

    fn check_window(&self, interval: &Interval) -> Result<(), GraphError> {
        if self.definition.contains(interval) {
            Ok(())
        } else {
            Err(GraphError::OutsideWindow {
                interval: *interval,
                window: self.definition,
            })
        }
    }

    /// Checks the intervals against the definition of the edge if it already exists.
    fn check_edge_definition<'a>(
        &self,
        src: VertexRef<'_>,
        dst: VertexRef<'_>,
        intervals: impl IntoIterator<Item = &'a Interval>,
    ) -> Result<(), GraphError> {
        if let Some(set) = self.find_edge(src, dst) {
            let definition = set.definition();
            if let Some(interval) = intervals.into_iter().find(|i| !definition.contains(i)) {
                return Err(TimeError::OutOfDefinition {
                    interval: *interval,
                    definition,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Adds activity to an edge, creating unknown label endpoints with the given groups.
    /// Every check runs before the graph is touched.
    pub(crate) fn add_activity<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        intervals: &[Interval],
        groups: (VertexGroup, VertexGroup),
    ) -> Result<EdgeRef, GraphError> {
        let (src, dst) = (src.as_vertex_ref(), dst.as_vertex_ref());
        for interval in intervals {
            self.check_window(interval)?;
        }
        self.check_edge_definition(src, dst, intervals)?;

        let (s, d) = self.storage.resolve_endpoints(src, dst, groups)?;
        let definition = self.definition;
        let set = self
            .storage
            .add_edge_with(s, d, || IntervalSet::with_definition(definition))?;
        for interval in intervals {
            set.append_interval(*interval);
        }
        Ok(EdgeRef::new(s, d))
    }
}

/// Sweep line over the activity of a set of edges.
pub(crate) fn sweep<'a>(
    sets: impl Iterator<Item = &'a IntervalSet>,
    origin: i64,
) -> BTreeMap<i64, i64> {
    let mut events: BTreeMap<i64, i64> = BTreeMap::new();
    for interval in sets.flat_map(|set| set.iter()) {
        *events.entry(interval.start()).or_default() += 1;
        *events.entry(interval.end()).or_default() -= 1;
    }
    if events.is_empty() {
        return BTreeMap::from([(origin, 0)]);
    }
    let mut degree = 0;
    for count in events.values_mut() {
        degree += *count;
        *count = degree;
    }
    events
}

impl<D: GraphType> Default for LinkStreamBase<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: GraphType> InternalStorageOps for LinkStreamBase<D> {
    type EdgeData = IntervalSet;

    fn storage(&self) -> &GraphStorage<IntervalSet> {
        &self.storage
    }
}

impl<D: GraphType> InternalMutationOps for LinkStreamBase<D> {
    fn storage_mut(&mut self) -> &mut GraphStorage<IntervalSet> {
        &mut self.storage
    }
}

impl<D: GraphType> EdgeAdditionOps for LinkStreamBase<D> {
    /// Activates the edge over the whole definition window.
    fn add_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<EdgeRef, GraphError> {
        let window = self.definition;
        self.add_activity(src, dst, &[window], (VertexGroup::Null, VertexGroup::Null))
    }
}

impl<D: GraphType> TemporalAdditionOps for LinkStreamBase<D> {
    fn add_edge_w_time<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        start: i64,
        end: i64,
    ) -> Result<EdgeRef, GraphError> {
        let interval = Interval::new(start, end)?;
        self.add_activity(src, dst, &[interval], (VertexGroup::Null, VertexGroup::Null))
    }

    fn add_edge_w_intervals<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        intervals: &IntervalSet,
    ) -> Result<EdgeRef, GraphError> {
        let intervals = intervals.iter().collect_vec();
        self.add_activity(src, dst, &intervals, (VertexGroup::Null, VertexGroup::Null))
    }
}

impl<D: GraphType> MetricOps for LinkStreamBase<D> {
    fn degree<V: AsVertexRef>(&self, v: V) -> Result<f64, GraphError> {
        let vid = self.resolve(v)?;
        Ok(self.vertex_length(vid) / self.definition_length() as f64)
    }

    fn num_edges(&self) -> f64 {
        self.total_length() / self.definition_length() as f64
    }

    fn density(&self) -> f64 {
        let n = self.num_vertices() as f64;
        if n < 2.0 {
            return 0.0;
        }
        let possible = n * (n - 1.0) * self.definition_length() as f64;
        if D::DIRECTED {
            self.total_length() / possible
        } else {
            2.0 * self.total_length() / possible
        }
    }
}

impl<D: GraphType> Display for LinkStreamBase<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = if D::DIRECTED {
            "DiLinkStream"
        } else {
            "LinkStream"
        };
        write!(
            f,
            "{}(|V|={}, |E|={}, window={})",
            name,
            self.num_vertices(),
            self.num_edges(),
            self.definition
        )
    }
}
