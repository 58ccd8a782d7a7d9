//! # linkstream
//!
//! `linkstream` models graphs whose edges are only active during some time intervals,
//! also called link streams. Every edge of a link stream carries an
//! [`IntervalSet`](core::IntervalSet): disjoint half-open intervals inside the definition
//! window of the stream. Degree, edge count and density are time integrals over these
//! sets.
//!
//! The crate provides
//!
//! - [`Graph`](db::graph::graph::Graph) and [`DiGraph`](db::graph::graph::DiGraph), plain
//!   graphs with optionally labelled vertices,
//! - [`LinkStream`](db::graph::link_stream::LinkStream) and
//!   [`DiLinkStream`](db::graph::link_stream::DiLinkStream), their temporal counterparts,
//! - [`Bipartite`](db::graph::bipartite::Bipartite) and
//!   [`BiLinkStream`](db::graph::bi_link_stream::BiLinkStream), where edges only link
//!   `Top` and `Bottom` vertices, with their
//!   [projections](algorithms::bipartite_projection) onto one group,
//! - degree and clustering [metrics](algorithms::metrics), an
//!   [Erdős-Rényi generator](graphgen::erdos_renyi) and a [csv loader](graph_loader).
//!
//! Vertex ids are dense and shift down when a vertex with a lower id is removed. Labels
//! do not change and are the way to refer to a vertex across removals.
//!
//! # Example
//!
//! ```rust
//! use linkstream::prelude::*;
//!
//! let mut ls = LinkStream::with_window(0, 10).unwrap();
//! ls.add_edge_w_time("a", "b", 0, 4).unwrap();
//! ls.add_edge_w_time("a", "b", 6, 9).unwrap();
//! ls.add_edge_w_time("a", "c", 2, 5).unwrap();
//!
//! assert_eq!(ls.edge_interval_set("a", "b").unwrap().length(), 7);
//! assert_eq!(ls.degree("a").unwrap(), 1.0);
//! println!("{:?}", ls.instantaneous_degree("a").unwrap());
//! ```

pub mod algorithms;
pub mod config;
pub mod core;
pub mod db;
#[cfg(feature = "io")]
pub mod graph_loader;
pub mod graphgen;

pub mod prelude {
    pub use crate::{
        core::{
            utils::errors::{ErrorKind, GraphError},
            AsVertexRef, Direction, EdgeRef, Interval, IntervalSet, VertexGroup, VertexRef,
            MAX_TIME, VID,
        },
        db::{
            api::{
                mutation::{AdditionOps, DeletionOps, EdgeAdditionOps, TemporalAdditionOps},
                view::{GraphViewOps, MetricOps},
            },
            graph::{
                bi_link_stream::BiLinkStream,
                bipartite::Bipartite,
                graph::{BaseGraph, DiGraph, Directed, Graph, GraphType, Undirected},
                link_stream::{DiLinkStream, LinkStream, LinkStreamBase},
            },
        },
    };
}

pub use linkstream_api::core::utils::logging;

#[cfg(test)]
mod test_utils;
