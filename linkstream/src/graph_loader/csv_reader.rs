//! Loads edge lists from delimited text files.
//!
//! Plain graphs read two fields per line, `src,dst`. Link streams read four,
//! `src,dst,begin,end`, and take the smallest `begin` and the largest `end` of the file as
//! their definition window. Fields are trimmed, blank lines and lines starting with the
//! comment prefix are skipped. Vertices are labelled with the field values and created in
//! the order they first appear.
//!
//! # Example
//! ```no_run
//! use linkstream::{graph_loader::csv_reader::CsvReader, prelude::*};
//!
//! let ls: LinkStream = CsvReader::new("contacts.csv")
//!     .set_delimiter(";")
//!     .set_comment_prefix("%")
//!     .read_linkstream()
//!     .unwrap();
//! println!("{}", ls);
//! ```

use crate::{
    config::CsvConfig,
    core::utils::errors::GraphError,
    db::{
        api::mutation::{EdgeAdditionOps, TemporalAdditionOps},
        graph::{
            graph::{BaseGraph, GraphType},
            link_stream::LinkStreamBase,
        },
    },
};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A data line of the file with its line number.
struct Row {
    line: u64,
    record: StringRecord,
}

impl Row {
    fn field(&self, i: usize) -> &str {
        self.record.get(i).unwrap_or_default()
    }

    fn time(&self, i: usize) -> Result<i64, GraphError> {
        let value = self.field(i);
        value.parse().map_err(|_| GraphError::TimeParseError {
            line: self.line,
            value: value.to_string(),
        })
    }
}

/// Builder style reader for edge list files.
#[derive(Debug, Clone)]
pub struct CsvReader {
    path: PathBuf,
    delimiter: u8,
    comment_prefix: String,
}

impl CsvReader {
    /// Reader for `path` splitting on `,` and skipping lines starting with `#`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
            comment_prefix: "#".to_string(),
        }
    }

    pub fn from_config<P: Into<PathBuf>>(path: P, config: &CsvConfig) -> Self {
        Self::new(path)
            .set_delimiter(&config.delimiter)
            .set_comment_prefix(&config.comment_prefix)
    }

    /// Sets the delimiter, only the first byte of `d` is used. An empty string keeps the
    /// current delimiter.
    pub fn set_delimiter(mut self, d: &str) -> Self {
        if let Some(&byte) = d.as_bytes().first() {
            self.delimiter = byte;
        }
        self
    }

    /// Lines starting with `prefix` are skipped. An empty prefix disables comments.
    pub fn set_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = prefix.to_string();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_skipped(&self, record: &StringRecord) -> bool {
        let first = record.get(0).unwrap_or_default();
        let blank = record.len() == 1 && first.is_empty();
        let comment = !self.comment_prefix.is_empty() && first.starts_with(&self.comment_prefix);
        blank || comment
    }

    /// Data lines of the file, each with exactly `fields` fields.
    fn rows(&self, fields: usize) -> Result<Vec<Row>, GraphError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_path(&self.path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if self.is_skipped(&record) {
                continue;
            }
            let line = record.position().map_or(0, |p| p.line());
            if record.len() != fields {
                return Err(GraphError::WrongFieldCount {
                    line,
                    expected: fields,
                    found: record.len(),
                });
            }
            rows.push(Row { line, record });
        }
        debug!(path = %self.path.display(), rows = rows.len(), "read edge list");
        Ok(rows)
    }

    /// Reads a `src,dst` edge list.
    pub fn read_graph<D: GraphType>(&self) -> Result<BaseGraph<D>, GraphError> {
        let mut graph = BaseGraph::<D>::new();
        for row in self.rows(2)? {
            graph.add_edge(row.field(0), row.field(1))?;
        }
        Ok(graph)
    }

    /// Reads a `src,dst,begin,end` edge list.
    ///
    /// The whole file is parsed before the graph is built, the definition window spans
    /// every interval of the file. An empty file gives an empty stream over
    /// `[0, MAX_TIME)`.
    pub fn read_linkstream<D: GraphType>(&self) -> Result<LinkStreamBase<D>, GraphError> {
        let rows = self.rows(4)?;
        let mut times = Vec::with_capacity(rows.len());
        for row in &rows {
            times.push((row.time(2)?, row.time(3)?));
        }
        let start = times.iter().map(|(b, _)| *b).min();
        let end = times.iter().map(|(_, e)| *e).max();
        let mut stream = match start.zip(end) {
            Some((start, end)) => LinkStreamBase::<D>::with_window(start, end)?,
            None => LinkStreamBase::<D>::new(),
        };
        debug!(window = %stream.definition(), "building link stream");
        for (row, (b, e)) in rows.iter().zip(times) {
            stream.add_edge_w_time(row.field(0), row.field(1), b, e)?;
        }
        Ok(stream)
    }
}

impl<D: GraphType> LinkStreamBase<D> {
    /// Loads a `src,dst,begin,end` file split on `delimiter`, see
    /// [`CsvReader::read_linkstream`].
    pub fn read_csv<P: Into<PathBuf>>(path: P, delimiter: &str) -> Result<Self, GraphError> {
        CsvReader::new(path)
            .set_delimiter(delimiter)
            .read_linkstream()
    }
}

#[cfg(test)]
mod csv_reader_tests {
    use super::CsvReader;
    use crate::{config::CsvConfig, core::utils::errors::ErrorKind, prelude::*};
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_graph_in_first_sight_order() {
        let file = file_with("# authors\nb,a\n\n a , c \nc,b\n");
        let g: Graph = CsvReader::new(file.path()).read_graph().unwrap();
        assert_eq!(g.labels().collect_vec(), vec!["b", "a", "c"]);
        assert_eq!(g.count_edges(), 3);
        assert!(g.has_edge("a", "c"));
    }

    #[test]
    fn reads_directed_graph() {
        let file = file_with("a;b\nb;a\na;c\n");
        let g: DiGraph = CsvReader::new(file.path())
            .set_delimiter(";")
            .read_graph()
            .unwrap();
        assert_eq!(g.count_edges(), 3);
        assert_eq!(g.out_degree("a").unwrap(), 2);
    }

    #[test]
    fn two_pass_window() {
        let file = file_with("% contacts\na,b,2,5\nb,c,4,9\na,b,7,8\n");
        let config = CsvConfig {
            comment_prefix: "%".to_string(),
            ..Default::default()
        };
        let ls: LinkStream = CsvReader::from_config(file.path(), &config)
            .read_linkstream()
            .unwrap();
        assert_eq!(ls.definition(), Interval::new(2, 9).unwrap());
        assert_eq!(ls.edge_interval_set("a", "b").unwrap().length(), 4);
        assert_eq!(ls.num_edges(), 9.0 / 7.0);
    }

    #[test]
    fn read_csv_shortcut() {
        let file = file_with("a\tb\t0\t10\n");
        let ls = DiLinkStream::read_csv(file.path(), "\t").unwrap();
        assert!(ls.is_edge_active("a", "b", 0, 10));
        assert!(!ls.has_edge("b", "a"));
    }

    #[test]
    fn empty_file_gives_default_window() {
        let file = file_with("# nothing here\n");
        let ls: LinkStream = CsvReader::new(file.path()).read_linkstream().unwrap();
        assert_eq!(ls.definition(), Interval::default());
        assert_eq!(ls.num_vertices(), 0);
    }

    #[test]
    fn format_errors_carry_the_line() {
        let file = file_with("a,b,0,4\n# skipped\na,b,3\n");
        let err = CsvReader::new(file.path())
            .read_linkstream::<Undirected>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "Line 3: expected 4 fields, found 3");

        let file = file_with("a,b,zero,4\n");
        let err = CsvReader::new(file.path())
            .read_linkstream::<Undirected>()
            .unwrap_err();
        assert_eq!(err.to_string(), "Line 1: cannot parse time 'zero'");
    }

    #[test]
    fn missing_file() {
        let err = CsvReader::new("/definitely/not/here.csv")
            .read_graph::<Undirected>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
