use itertools::Itertools;
use linkstream::{
    algorithms::{
        bipartite_projection::{projected_graph, projected_linkstream},
        metrics::summary::GraphSummary,
    },
    prelude::*,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn interval_set_append_and_contains() {
    proptest!(|(bounds in proptest::collection::vec((0i64..100, 1i64..20), 0..30))| {
        let mut set = IntervalSet::new(0, 100).unwrap();
        for (start, len) in bounds {
            let end = start + len;
            let (size, length) = (set.size(), set.length());
            let appended = set.append(start, end).unwrap();
            if end <= 100 {
                prop_assert!(appended);
                prop_assert!(set.contains(start, end).unwrap());
                prop_assert!(set.length() <= length + len);
            } else {
                prop_assert!(!appended);
                prop_assert_eq!(set.size(), size);
                prop_assert_eq!(set.length(), length);
            }
        }
        for (a, b) in set.iter().tuple_windows() {
            prop_assert!(a.end() < b.start());
        }
    });
}

#[test]
fn activity_length_is_not_double_counted() {
    let mut ls = LinkStream::with_window(0, 10).unwrap();
    ls.add_edge_w_time("a", "b", 0, 4).unwrap();
    ls.add_edge_w_time("a", "b", 6, 9).unwrap();
    ls.add_edge_w_time("b", "a", 1, 3).unwrap();
    assert_eq!(ls.edge_interval_set("a", "b").unwrap().length(), 7);
}

#[test]
fn out_of_window_activity_changes_nothing() {
    let mut ls = LinkStream::with_window(0, 10).unwrap();
    ls.add_edge_w_time("a", "b", 0, 4).unwrap();
    let before = ls.clone();

    assert!(ls.add_edge_w_time("a", "b", 8, 11).is_err());
    assert!(ls.add_edge_w_time("a", "new", -1, 2).is_err());
    assert_eq!(ls, before);
}

#[test]
fn bipartite_edges_cross_groups() {
    let mut g = Bipartite::new();
    g.add_vertex_w_group(VertexGroup::Top, Some("t1")).unwrap();
    g.add_vertex_w_group(VertexGroup::Top, Some("t2")).unwrap();
    g.add_vertex_w_group(VertexGroup::Bottom, Some("b1")).unwrap();

    let err = g.add_edge("t1", "t2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Bipartite);
    assert!(g.add_edge("t1", "b1").is_ok());
    assert_eq!(g.count_edges(), 1);
}

#[test]
fn projection_of_a_path() {
    let mut g = Bipartite::new();
    g.add_vertex_w_group(VertexGroup::Top, Some("A")).unwrap();
    g.add_vertex_w_group(VertexGroup::Bottom, Some("B")).unwrap();
    g.add_vertex_w_group(VertexGroup::Top, Some("C")).unwrap();
    g.add_edge("A", "B").unwrap();
    g.add_edge("C", "B").unwrap();

    let p = projected_graph(VertexGroup::Top, &g).unwrap();
    assert_eq!(p.labels().collect_vec(), vec!["A", "C"]);
    assert_eq!(p.count_edges(), 1);
    assert!(p.has_edge("A", "C"));
    // the source is left untouched
    assert_eq!(g.num_vertices(), 3);

    let p = projected_graph(VertexGroup::Bottom, &g).unwrap();
    assert_eq!(p.labels().collect_vec(), vec!["B"]);
    assert_eq!(p.count_edges(), 0);
}

#[test]
fn temporal_projection_needs_overlap() {
    let mut g = BiLinkStream::with_window(0, 10).unwrap();
    g.add_edge_w_time("A", "B", 0, 4).unwrap();
    g.add_edge_w_time("C", "B", 4, 8).unwrap();
    g.add_edge_w_time("D", "B", 2, 6).unwrap();

    let p = projected_linkstream(VertexGroup::Top, &g).unwrap();
    assert!(!p.has_edge("A", "C"));
    assert!(p.is_edge_active("A", "D", 2, 4));
    assert!(p.is_edge_active("C", "D", 4, 6));
    assert_eq!(p.num_edges(), 0.4);
}

#[test]
fn sweep_line_degree() {
    let mut ls = LinkStream::with_window(0, 10).unwrap();
    ls.add_edge_w_time("v", "a", 0, 4).unwrap();
    ls.add_edge_w_time("v", "a", 6, 9).unwrap();
    ls.add_edge_w_time("v", "b", 2, 5).unwrap();
    assert_eq!(
        ls.instantaneous_degree("v").unwrap(),
        BTreeMap::from([(0, 1), (2, 2), (4, 1), (5, 0), (6, 1), (9, 0)])
    );
}

#[test]
fn clones_are_deep() {
    let mut g = Graph::new();
    g.add_edge("a", "b").unwrap();
    g.add_edge("b", "c").unwrap();

    let mut copy = g.clone();
    assert_eq!(copy.labels().collect_vec(), g.labels().collect_vec());
    for v in g.vertices() {
        assert_eq!(copy.degree(v).unwrap(), g.degree(v).unwrap());
    }

    copy.remove_vertex("b").unwrap();
    assert_eq!(g.degree("b").unwrap(), 2.0);
    assert_eq!(g.count_edges(), 2);

    let mut ls = LinkStream::with_window(0, 10).unwrap();
    ls.add_edge_w_time("a", "b", 0, 4).unwrap();
    let mut copy = ls.clone();
    copy.add_edge_w_time("a", "b", 5, 9).unwrap();
    assert_eq!(ls.edge_interval_set("a", "b").unwrap().length(), 4);
    assert_eq!(copy.edge_interval_set("a", "b").unwrap().length(), 8);
}

#[test]
fn triangle_density() {
    fn triangle<D: GraphType>() -> BaseGraph<D> {
        let mut g = BaseGraph::<D>::new();
        g.add_edge("a", "b").unwrap();
        g.add_edge("b", "c").unwrap();
        g.add_edge("c", "a").unwrap();
        g
    }
    assert_eq!(triangle::<Undirected>().density(), 1.0);
    assert_eq!(triangle::<Directed>().density(), 0.5);
}

#[test]
fn summary_of_a_link_stream() {
    let mut ls = LinkStream::with_window(0, 10).unwrap();
    ls.add_edge_w_time("a", "b", 0, 10).unwrap();
    ls.add_edge_w_time("b", "c", 0, 5).unwrap();

    let summary = GraphSummary::new(&ls).unwrap();
    assert_eq!(summary.num_vertices, 3);
    assert_eq!(summary.count_edges, 2);
    assert_eq!(summary.num_edges, 1.5);
    assert_eq!(summary.max_degree, 1.5);
    assert_eq!(summary.min_degree, 0.5);
    assert_eq!(summary.average_degree, 1.0);
}
