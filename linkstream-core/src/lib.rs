//! # linkstream-core
//!
//! Storage layer of the linkstream library. [`entities::graph::storage::GraphStorage`] is
//! the adjacency-list graph every graph type is built on: a vertex arena with optional
//! labels and bipartite group tags, plus one payload per edge. Plain graphs store `()` on
//! their edges, link streams store an interval set.
//!
//! **Note** this crate is not meant to be used on its own, the graph types live in the
//! `linkstream` crate.

pub mod entities;
pub mod utils;
