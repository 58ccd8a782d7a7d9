use crate::{
    core::{utils::errors::GraphError, AsVertexRef},
    db::api::{mutation::internal::InternalMutationOps, view::GraphViewOps},
};
use tracing::debug;

pub trait DeletionOps: InternalMutationOps {
    /// Removes `v` with every incident edge.
    ///
    /// Every vertex with a higher id moves one position down, labels are unaffected.
    fn remove_vertex<V: AsVertexRef>(&mut self, v: V) -> Result<(), GraphError> {
        let vid = self.resolve(v)?;
        debug!(vertex = vid.0, "removing vertex");
        self.storage_mut().remove_vertex(vid)?;
        Ok(())
    }

    /// Removes the edge `src -> dst` and its activity.
    fn remove_edge<S: AsVertexRef, T: AsVertexRef>(
        &mut self,
        src: S,
        dst: T,
    ) -> Result<(), GraphError> {
        let s = self.resolve(src)?;
        let d = self.resolve(dst)?;
        self.storage_mut().remove_edge(s, d)?;
        Ok(())
    }

    /// Removes every vertex and edge.
    fn clear(&mut self) {
        self.storage_mut().clear();
    }

    /// Removes every edge, vertices are kept.
    fn clear_edges(&mut self) {
        self.storage_mut().clear_edges();
    }
}

impl<G: InternalMutationOps + ?Sized> DeletionOps for G {}
