pub mod graph;
pub mod vertices;

pub use linkstream_api::core::entities::{
    edges::edge_ref::EdgeRef, vertices::vertex_ref::VertexRef, VertexGroup, VID,
};
