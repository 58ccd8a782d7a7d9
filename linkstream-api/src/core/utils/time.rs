use crate::core::storage::interval::Interval;

/// Largest representable time. Used as the end of unbounded definition windows.
pub const MAX_TIME: i64 = i64::MAX;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid time interval [{start},{end}): start must be strictly before end")]
    InvalidInterval { start: i64, end: i64 },
    #[error("The two time interval sets are disjoint")]
    DisjointIntervalSets,
    #[error("Time interval {interval} is not contained in the definition interval {definition}")]
    OutOfDefinition {
        interval: Interval,
        definition: Interval,
    },
}
