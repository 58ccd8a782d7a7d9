use crate::{
    algorithms::metrics::{
        clustering_coefficient::average_clustering,
        degree::{average_degree, max_degree, min_degree},
    },
    core::utils::errors::GraphError,
    db::api::view::MetricOps,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Headline numbers of a graph, printable with `Display`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub directed: bool,
    pub num_vertices: usize,
    pub count_edges: usize,
    /// Time-weighted for link streams.
    pub num_edges: f64,
    pub density: f64,
    pub average_degree: f64,
    pub min_degree: f64,
    pub max_degree: f64,
    pub average_clustering: f64,
}

impl GraphSummary {
    pub fn new<G: MetricOps>(graph: &G) -> Result<Self, GraphError> {
        Ok(Self {
            directed: graph.is_directed(),
            num_vertices: graph.num_vertices(),
            count_edges: graph.count_edges(),
            num_edges: graph.num_edges(),
            density: graph.density(),
            average_degree: average_degree(graph)?,
            min_degree: min_degree(graph)?,
            max_degree: max_degree(graph)?,
            average_clustering: average_clustering(graph),
        })
    }
}

impl Display for GraphSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "directed: {}", self.directed)?;
        writeln!(f, "vertices: {}", self.num_vertices)?;
        writeln!(f, "edges: {} (weighted {})", self.count_edges, self.num_edges)?;
        writeln!(f, "density: {}", self.density)?;
        writeln!(
            f,
            "degree: average {}, min {}, max {}",
            self.average_degree, self.min_degree, self.max_degree
        )?;
        write!(f, "average clustering: {}", self.average_clustering)
    }
}
