use linkstream::{
    config::{CsvConfig, GraphConfig},
    graph_loader::csv_reader::CsvReader,
    logging::{global_debug_logger, LoggingConfig},
    prelude::*,
};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn link_stream_from_csv_and_config() {
    global_debug_logger();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "% src;dst;begin;end").unwrap();
    writeln!(file, "alice;paper1;0;5").unwrap();
    writeln!(file, "bob;paper1;3;8").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "alice;paper2;6;10").unwrap();

    let config: CsvConfig =
        serde_json::from_str(r#"{"delimiter": ";", "comment_prefix": "%"}"#).unwrap();
    let ls: LinkStream = CsvReader::from_config(file.path(), &config)
        .read_linkstream()
        .unwrap();

    assert_eq!(ls.definition(), Interval::new(0, 10).unwrap());
    assert_eq!(ls.num_vertices(), 4);
    assert_eq!(ls.count_edges(), 3);
    assert_eq!(ls.degree("alice").unwrap(), 0.9);
    assert_eq!(
        ls.describe_edges(),
        "alice -- paper1: {[0,5)}\nalice -- paper2: {[6,10)}\npaper1 -- bob: {[3,8)}"
    );
}

#[test]
fn graph_from_config() {
    let config: GraphConfig =
        serde_json::from_str(r#"{"num_vertex": 3, "window": [5, 15]}"#).unwrap();

    let g = DiGraph::from_config(&config);
    assert_eq!(g.num_vertices(), 3);
    assert!(g.is_directed());

    let mut ls = DiLinkStream::from_config(&config);
    assert_eq!(ls.definition_length(), 10);
    ls.add_edge(VID(0), VID(2)).unwrap();
    assert!(ls.is_edge_active(VID(0), VID(2), 5, 15));
    assert!(ls.add_edge_w_time(VID(0), VID(1), 0, 6).is_err());
}

#[test]
fn logging_config() {
    let config: LoggingConfig = serde_json::from_str(r#"{"log_level": "TRACE"}"#).unwrap();
    config.init();
    let mut g = Graph::with_vertices(2);
    g.remove_vertex(VID(0)).unwrap();
    assert_eq!(g.num_vertices(), 1);
}
