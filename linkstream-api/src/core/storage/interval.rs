use crate::core::utils::time::{TimeError, MAX_TIME};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Half-open time interval `[start, end)` with `start < end`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Interval {
    start: i64,
    end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Result<Self, TimeError> {
        if start >= end {
            return Err(TimeError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    #[inline]
    pub fn len(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_unbounded(&self) -> bool {
        self.end == MAX_TIME
    }

    /// `other ⊆ self`
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_time(&self, t: i64) -> bool {
        self.start <= t && t < self.end
    }

    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(Interval { start, end })
    }

    /// Smallest interval containing both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Default for Interval {
    /// `[0, MAX_TIME)`
    fn default() -> Self {
        Self {
            start: 0,
            end: MAX_TIME,
        }
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = TimeError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Interval::new(start, end)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(value: Interval) -> Self {
        (value.start, value.end)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_and_reversed() {
        assert_eq!(
            Interval::new(3, 3),
            Err(TimeError::InvalidInterval { start: 3, end: 3 })
        );
        assert!(Interval::new(4, 1).is_err());
        assert!(Interval::new(-5, -1).is_ok());
    }

    #[test]
    fn containment_and_overlap() {
        let outer = Interval::new(0, 10).unwrap();
        let inner = Interval::new(2, 10).unwrap();
        let after = Interval::new(10, 12).unwrap();

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.overlaps(&after));
        assert_eq!(outer.intersection(&after), None);
        assert_eq!(
            outer.intersection(&Interval::new(8, 15).unwrap()),
            Some(Interval::new(8, 10).unwrap())
        );
        assert!(outer.contains_time(0));
        assert!(!outer.contains_time(10));
        assert_eq!(
            Interval::new(2, 4).unwrap().hull(&after),
            Interval::new(2, 12).unwrap()
        );
    }

    #[test]
    fn serde_validates_bounds() {
        let iv: Interval = serde_json::from_str("[1, 5]").unwrap();
        assert_eq!(iv, Interval::new(1, 5).unwrap());
        assert_eq!(serde_json::to_string(&iv).unwrap(), "[1,5]");
        assert!(serde_json::from_str::<Interval>("[5, 1]").is_err());
    }

    #[test]
    fn default_is_unbounded() {
        let def = Interval::default();
        assert_eq!(def.start(), 0);
        assert!(def.is_unbounded());
        assert_eq!(def.to_string(), format!("[0,{})", i64::MAX));
    }
}
