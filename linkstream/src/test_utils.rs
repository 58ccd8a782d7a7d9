use crate::prelude::*;
use proptest::prelude::*;

pub fn build_edge_list(
    len: usize,
    num_vertices: usize,
) -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..num_vertices, 0..num_vertices), 0..=len)
}

/// Edges `(src, dst, start, end)` with `0 <= start < end <= window_end`.
pub fn build_timed_edge_list(
    len: usize,
    num_vertices: usize,
    window_end: i64,
) -> impl Strategy<Value = Vec<(usize, usize, i64, i64)>> {
    proptest::collection::vec(
        (
            0..num_vertices,
            0..num_vertices,
            0..window_end,
            1..=window_end,
        )
            .prop_map(move |(s, d, start, len)| (s, d, start, (start + len).min(window_end))),
        0..=len,
    )
}

/// Graph over `num_vertices` unlabelled vertices, self loops are dropped.
pub fn build_graph<D: GraphType>(num_vertices: usize, edges: &[(usize, usize)]) -> BaseGraph<D> {
    let mut g = BaseGraph::<D>::with_vertices(num_vertices);
    for &(s, d) in edges {
        if s != d {
            g.add_edge(VID(s), VID(d)).unwrap();
        }
    }
    g
}

/// Link stream over `[0, window_end)`, self loops are dropped.
pub fn build_linkstream<D: GraphType>(
    num_vertices: usize,
    window_end: i64,
    edges: &[(usize, usize, i64, i64)],
) -> LinkStreamBase<D> {
    let mut ls = LinkStreamBase::<D>::with_vertices(num_vertices, 0, window_end).unwrap();
    for &(s, d, start, end) in edges {
        if s != d {
            ls.add_edge_w_time(VID(s), VID(d), start, end).unwrap();
        }
    }
    ls
}

/// Bipartite graph with `num_top` top vertices `t0, t1, ...` and `num_bottom` bottom
/// vertices `b0, b1, ...`.
pub fn build_bipartite(num_top: usize, num_bottom: usize, edges: &[(usize, usize)]) -> Bipartite {
    let mut g = Bipartite::new();
    for t in 0..num_top {
        g.add_vertex_w_group(VertexGroup::Top, Some(&format!("t{t}")))
            .unwrap();
    }
    for b in 0..num_bottom {
        g.add_vertex_w_group(VertexGroup::Bottom, Some(&format!("b{b}")))
            .unwrap();
    }
    for &(t, b) in edges {
        g.add_edge(format!("t{t}"), format!("b{b}")).unwrap();
    }
    g
}
