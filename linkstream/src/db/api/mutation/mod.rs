//! Mutation apis. Vertex creation and deletions are shared by every graph type, edge
//! creation depends on the type (plain, temporal, bipartite).

mod addition_ops;
mod deletion_ops;
pub mod internal;

pub use addition_ops::{AdditionOps, EdgeAdditionOps, TemporalAdditionOps};
pub use deletion_ops::DeletionOps;
