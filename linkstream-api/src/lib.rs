//! Common building blocks shared by the linkstream crates: vertex and edge ids, the
//! bipartite vertex groups and the time interval algebra every temporal edge is built on.

pub mod core;
pub mod iter;
