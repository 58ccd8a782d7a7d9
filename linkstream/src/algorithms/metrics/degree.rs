//! Degree statistics over the whole graph.
//!
//! `max_degree`, `min_degree` and `average_degree` use [`MetricOps::degree`], so they are
//! time-weighted on link streams. The in and out variants count neighbours and ignore
//! activity.
//!
//! # Examples
//!
//! ```rust
//! use linkstream::algorithms::metrics::degree::*;
//! use linkstream::prelude::*;
//!
//! let mut g = DiGraph::new();
//! for (src, dst) in [("1", "2"), ("1", "3"), ("2", "1"), ("3", "2"), ("1", "4"), ("4", "5")] {
//!     g.add_edge(src, dst).unwrap();
//! }
//!
//! println!("Max out degree: {}", max_out_degree(&g));
//! println!("Min in degree: {}", min_in_degree(&g));
//! println!("Average degree: {:?}", average_degree(&g));
//! ```

use crate::{
    core::{utils::errors::GraphError, Direction},
    db::api::view::{internal::InternalStorageOps, GraphViewOps, MetricOps},
};

fn degrees<G: MetricOps>(graph: &G) -> Result<Vec<f64>, GraphError> {
    graph.vertices().map(|v| graph.degree(v)).collect()
}

fn structural_degrees<G: GraphViewOps>(
    graph: &G,
    dir: Direction,
) -> impl Iterator<Item = usize> + '_ {
    graph
        .vertices()
        .map(move |v| graph.storage().degree(v, dir).unwrap_or(0))
}

/// The maximum degree of any vertex in the graph, `0.0` for an empty graph.
pub fn max_degree<G: MetricOps>(graph: &G) -> Result<f64, GraphError> {
    Ok(degrees(graph)?.into_iter().reduce(f64::max).unwrap_or(0.0))
}

/// The minimum degree of any vertex in the graph, `0.0` for an empty graph.
pub fn min_degree<G: MetricOps>(graph: &G) -> Result<f64, GraphError> {
    Ok(degrees(graph)?.into_iter().reduce(f64::min).unwrap_or(0.0))
}

/// The average degree of all vertices in the graph, `0.0` for an empty graph.
pub fn average_degree<G: MetricOps>(graph: &G) -> Result<f64, GraphError> {
    let degrees = degrees(graph)?;
    if degrees.is_empty() {
        return Ok(0.0);
    }
    Ok(degrees.iter().sum::<f64>() / degrees.len() as f64)
}

/// The maximum out degree of any vertex in the graph.
pub fn max_out_degree<G: GraphViewOps>(graph: &G) -> usize {
    structural_degrees(graph, Direction::OUT).max().unwrap_or(0)
}

/// The maximum in degree of any vertex in the graph.
pub fn max_in_degree<G: GraphViewOps>(graph: &G) -> usize {
    structural_degrees(graph, Direction::IN).max().unwrap_or(0)
}

/// The minimum out degree of any vertex in the graph.
pub fn min_out_degree<G: GraphViewOps>(graph: &G) -> usize {
    structural_degrees(graph, Direction::OUT).min().unwrap_or(0)
}

/// The minimum in degree of any vertex in the graph.
pub fn min_in_degree<G: GraphViewOps>(graph: &G) -> usize {
    structural_degrees(graph, Direction::IN).min().unwrap_or(0)
}

#[cfg(test)]
mod degree_test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn degree_test() {
        let mut g = DiGraph::new();
        let vs = vec![("1", "2"), ("1", "3"), ("2", "1"), ("3", "2"), ("1", "4"), ("4", "5")];

        for (src, dst) in &vs {
            g.add_edge(*src, *dst).unwrap();
        }

        assert_eq!(max_out_degree(&g), 3);
        assert_eq!(max_in_degree(&g), 2);
        assert_eq!(min_out_degree(&g), 0);
        assert_eq!(min_in_degree(&g), 1);
        assert_eq!(average_degree(&g).unwrap(), 2.4);
        assert_eq!(max_degree(&g).unwrap(), 4.0);
        assert_eq!(min_degree(&g).unwrap(), 1.0);
    }

    #[test]
    fn time_weighted_degrees() {
        let mut ls = LinkStream::with_window(0, 10).unwrap();
        ls.add_edge_w_time("a", "b", 0, 10).unwrap();
        ls.add_edge_w_time("b", "c", 0, 5).unwrap();

        assert_eq!(max_degree(&ls).unwrap(), 1.5);
        assert_eq!(min_degree(&ls).unwrap(), 0.5);
        assert_eq!(average_degree(&ls).unwrap(), 1.0);
        assert_eq!(max_out_degree(&ls), 2);
    }

    #[test]
    fn empty_graph() {
        let g = Graph::new();
        assert_eq!(average_degree(&g).unwrap(), 0.0);
        assert_eq!(max_degree(&g).unwrap(), 0.0);
        assert_eq!(min_in_degree(&g), 0);
    }
}
