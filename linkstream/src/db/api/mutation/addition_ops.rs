use crate::{
    core::{utils::errors::GraphError, AsVertexRef, EdgeRef, IntervalSet, VertexGroup, VID},
    db::api::mutation::internal::InternalMutationOps,
};

pub trait AdditionOps: InternalMutationOps {
    /// Adds a vertex without group and returns its id.
    ///
    /// # Example
    ///
    /// ```
    /// use linkstream::prelude::*;
    ///
    /// let mut g = Graph::new();
    /// let alice = g.add_vertex(Some("Alice")).unwrap();
    /// assert_eq!(g.vertex("Alice"), Some(alice));
    /// assert!(g.add_vertex(Some("Alice")).is_err());
    /// ```
    fn add_vertex(&mut self, label: Option<&str>) -> Result<VID, GraphError> {
        Ok(self.storage_mut().add_vertex(label, VertexGroup::Null)?)
    }

    /// Adds `n` unlabelled vertices and returns the id of the first one.
    fn add_vertices(&mut self, n: usize) -> Result<VID, GraphError> {
        let first = VID(self.storage_mut().num_vertices());
        for _ in 0..n {
            self.add_vertex(None)?;
        }
        Ok(first)
    }
}

impl<G: InternalMutationOps + ?Sized> AdditionOps for G {}

/// Edge creation. Label endpoints that do not exist yet are created, id endpoints must
/// exist. A failed call leaves the graph unchanged.
pub trait EdgeAdditionOps {
    /// Adds the edge `src -> dst`. Adding an existing edge does not change the structure;
    /// on a link stream it activates the edge over the whole definition window.
    fn add_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<EdgeRef, GraphError>;
}

/// Edge creation with activity.
pub trait TemporalAdditionOps: EdgeAdditionOps {
    /// Activates `src -> dst` during `[start, end)`, creating the edge if needed.
    ///
    /// Fails if `start >= end` or the interval is not contained in the definition window.
    fn add_edge_w_time<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        start: i64,
        end: i64,
    ) -> Result<EdgeRef, GraphError>;

    /// Activates `src -> dst` during every member of `intervals`.
    fn add_edge_w_intervals<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
        intervals: &IntervalSet,
    ) -> Result<EdgeRef, GraphError>;
}
