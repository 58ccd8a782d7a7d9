use crate::core::{Interval, TimeError, VertexGroup, VID};
pub use linkstream_core::utils::errors::MutateGraphError;
use std::fmt::{self, Display, Formatter};

/// Coarse classification of a [`GraphError`].
///
/// Lets callers tell bad input (a time range outside the window, a malformed csv file)
/// apart from operations on a graph that violates its own invariants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Duplicate label, unknown vertex or edge, self loop.
    Structural,
    /// Same-group edge or a vertex without group where one is required.
    Bipartite,
    /// Edge activity outside of the definition window.
    TemporalContainment,
    /// Interval arithmetic that has no result.
    TemporalComputation,
    /// Unreadable or malformed input file.
    Io,
    InvalidArgument,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::Structural => "structural",
            ErrorKind::Bipartite => "bipartite",
            ErrorKind::TemporalContainment => "temporal containment",
            ErrorKind::TemporalComputation => "temporal computation",
            ErrorKind::Io => "io",
            ErrorKind::InvalidArgument => "invalid argument",
        };
        write!(f, "{}", kind)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    #[error("Failed to mutate graph: {source}")]
    FailedToMutateGraph {
        #[from]
        source: MutateGraphError,
    },
    #[error("Time error: {source}")]
    Time {
        #[from]
        source: TimeError,
    },
    #[error("Edge ({src}, {dst}) links two vertices of group {group}")]
    SameGroupEdge {
        src: String,
        dst: String,
        group: VertexGroup,
    },
    #[error("Vertex {0} has no group, the bipartite graph is malformed")]
    UngroupedVertex(String),
    #[error("Expected a top or bottom group, got {0}")]
    InvalidGroup(VertexGroup),
    #[error("Edge ({src}, {dst}) does not exist and has no activity")]
    NoEdgeActivity { src: String, dst: String },
    #[error("Interval {interval} is outside of the definition window {window}")]
    OutsideWindow { interval: Interval, window: Interval },
    #[error("IO operation failed: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
    #[cfg(feature = "io")]
    #[error("CSV error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("Line {line}: expected {expected} fields, found {found}")]
    WrongFieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: cannot parse time '{value}'")]
    TimeParseError { line: u64, value: String },
    #[error("Edge probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::FailedToMutateGraph { .. } => ErrorKind::Structural,
            GraphError::Time { source } => match source {
                TimeError::OutOfDefinition { .. } => ErrorKind::TemporalContainment,
                TimeError::InvalidInterval { .. } | TimeError::DisjointIntervalSets => {
                    ErrorKind::TemporalComputation
                }
            },
            GraphError::SameGroupEdge { .. }
            | GraphError::UngroupedVertex(_)
            | GraphError::InvalidGroup(_) => ErrorKind::Bipartite,
            GraphError::OutsideWindow { .. } => ErrorKind::TemporalContainment,
            GraphError::NoEdgeActivity { .. } => ErrorKind::TemporalComputation,
            GraphError::IOError { .. }
            | GraphError::WrongFieldCount { .. }
            | GraphError::TimeParseError { .. } => ErrorKind::Io,
            #[cfg(feature = "io")]
            GraphError::CsvError { .. } => ErrorKind::Io,
            GraphError::InvalidProbability(_) => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn ungrouped(v: VID, label: Option<&str>) -> Self {
        GraphError::UngroupedVertex(label.map_or_else(|| v.to_string(), str::to_owned))
    }
}
