//! Generates a graph using the Erdős-Rényi model
//!
//! # Examples
//!
//! ```
//! use linkstream::{graphgen::erdos_renyi::erdos_renyi, prelude::*};
//! let graph = erdos_renyi::<Undirected>(1000, 0.1, None).unwrap();
//! ```

use crate::{
    core::{utils::errors::GraphError, VID},
    db::{
        api::mutation::{AdditionOps, EdgeAdditionOps},
        graph::graph::{BaseGraph, GraphType},
    },
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

/// Generates an Erdős-Rényi random graph and returns it.
///
/// # Arguments
/// * `num_vertices` - Number of unlabelled vertices to create.
/// * `p` - Probability of linking a pair of vertices (0.0 = no edges, 1.0 = complete graph).
/// * `seed` - Optional 64-bit seed for deterministic generation. If `None`, uses entropy.
///
/// # Behavior
/// - Undirected graphs draw once per unordered pair of distinct vertices.
/// - Directed graphs draw once per ordered pair, so `a -> b` and `b -> a` are independent.
/// - Fails if `p` is not in `[0, 1]`.
///
/// # Example
/// ```
/// use linkstream::{graphgen::erdos_renyi::erdos_renyi, prelude::*};
///
/// // Create a random directed graph with 10 vertices and 20% edge probability
/// let graph = erdos_renyi::<Directed>(10, 0.2, Some(42)).unwrap();
/// assert_eq!(graph.num_vertices(), 10);
/// ```
pub fn erdos_renyi<D: GraphType>(
    num_vertices: usize,
    p: f64,
    seed: Option<u64>,
) -> Result<BaseGraph<D>, GraphError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(GraphError::InvalidProbability(p));
    }
    let mut rng = match seed {
        Some(seed_value) => StdRng::seed_from_u64(seed_value),
        None => StdRng::from_entropy(),
    };
    let mut graph = BaseGraph::<D>::new();
    graph.add_vertices(num_vertices)?;
    for i in 0..num_vertices {
        let first = if D::DIRECTED { 0 } else { i + 1 };
        for j in first..num_vertices {
            if i != j && rng.gen_bool(p) {
                graph.add_edge(VID(i), VID(j))?;
            }
        }
    }
    debug!(
        vertices = num_vertices,
        p,
        seed,
        directed = D::DIRECTED,
        "generated erdos-renyi graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use crate::{core::utils::errors::ErrorKind, graphgen::erdos_renyi::erdos_renyi, prelude::*};

    #[test]
    fn test_erdos_renyi_half_probability() {
        let n_vertices = 20;
        let graph = erdos_renyi::<Undirected>(n_vertices, 0.5, Some(42)).unwrap();
        assert_eq!(graph.num_vertices(), n_vertices);
        assert!(graph.count_edges() > 0);
        assert!(graph.count_edges() < n_vertices * (n_vertices - 1) / 2);
    }

    #[test]
    fn test_erdos_renyi_zero_probability() {
        let graph = erdos_renyi::<Directed>(20, 0.0, Some(42)).unwrap();
        assert_eq!(graph.num_vertices(), 20);
        assert_eq!(graph.count_edges(), 0);
    }

    #[test]
    fn test_erdos_renyi_full_probability() {
        let n_vertices = 20;
        let graph = erdos_renyi::<Undirected>(n_vertices, 1.0, None).unwrap();
        assert_eq!(graph.count_edges(), n_vertices * (n_vertices - 1) / 2);
        assert_eq!(graph.density(), 1.0);

        let graph = erdos_renyi::<Directed>(n_vertices, 1.0, None).unwrap();
        assert_eq!(graph.count_edges(), n_vertices * (n_vertices - 1));
        assert_eq!(graph.density(), 1.0);
    }

    #[test]
    fn test_erdos_renyi_is_deterministic_with_seed() {
        let g1 = erdos_renyi::<Directed>(30, 0.3, Some(7)).unwrap();
        let g2 = erdos_renyi::<Directed>(30, 0.3, Some(7)).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_erdos_renyi_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = erdos_renyi::<Undirected>(5, p, Some(1)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }
}
