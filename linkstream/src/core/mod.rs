//! Core types re-exported from the storage crates plus the error types of this crate.

pub mod utils;

pub use linkstream_api::core::{
    entities::{
        edges::edge_ref::EdgeRef,
        vertices::vertex_ref::{AsVertexRef, VertexRef},
        VertexGroup, VID,
    },
    storage::{interval::Interval, interval_set::IntervalSet},
    utils::time::{TimeError, MAX_TIME},
    Direction,
};
pub use linkstream_core::utils::matrix::AdjacencyMatrix;
