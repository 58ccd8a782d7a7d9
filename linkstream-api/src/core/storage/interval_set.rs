//! Sets of disjoint time intervals bounded by a definition interval.
//!
//! An [`IntervalSet`] is the activity pattern of a temporal edge. Inserted intervals are
//! merged with every member they overlap or touch, so the members are always pairwise
//! disjoint, non-adjacent and sorted by start time.
//!
//! # Example
//!
//! ```
//! use linkstream_api::core::storage::interval_set::IntervalSet;
//!
//! let mut set = IntervalSet::new(0, 10).unwrap();
//! assert!(set.append(0, 4).unwrap());
//! assert!(set.append(6, 9).unwrap());
//! assert!(!set.append(8, 12).unwrap()); // outside of [0,10)
//!
//! assert_eq!(set.length(), 7);
//! assert_eq!(set.size(), 2);
//! assert_eq!(set.to_string(), "{[0,4), [6,9)}");
//! ```

use crate::core::{storage::interval::Interval, utils::time::TimeError};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    collections::{btree_map, BTreeMap},
    fmt::{self, Display, Formatter},
    iter::FusedIterator,
};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "IntervalSetRepr", into = "IntervalSetRepr")]
pub struct IntervalSet {
    definition: Interval,
    // start -> end of every member interval
    intervals: BTreeMap<i64, i64>,
}

/// Serialised form of an [`IntervalSet`]: the definition and the members as
/// `[start, end]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalSetRepr {
    pub definition: Interval,
    pub intervals: Vec<Interval>,
}

impl TryFrom<IntervalSetRepr> for IntervalSet {
    type Error = TimeError;

    /// Rebuilds the set member by member, so overlapping members are merged and members
    /// outside the definition are rejected.
    fn try_from(repr: IntervalSetRepr) -> Result<Self, Self::Error> {
        let mut set = IntervalSet::with_definition(repr.definition);
        for interval in repr.intervals {
            if !set.append_interval(interval) {
                return Err(TimeError::OutOfDefinition {
                    interval,
                    definition: repr.definition,
                });
            }
        }
        Ok(set)
    }
}

impl From<IntervalSet> for IntervalSetRepr {
    fn from(set: IntervalSet) -> Self {
        Self {
            definition: set.definition,
            intervals: set.iter().collect(),
        }
    }
}

impl IntervalSet {
    /// Empty set defined on `[start, end)`.
    pub fn new(start: i64, end: i64) -> Result<Self, TimeError> {
        Ok(Self::with_definition(Interval::new(start, end)?))
    }

    pub fn with_definition(definition: Interval) -> Self {
        Self {
            definition,
            intervals: BTreeMap::new(),
        }
    }

    pub fn definition(&self) -> Interval {
        self.definition
    }

    /// Changes the definition interval. Members are kept as they are, even if they no
    /// longer fit in the new definition.
    pub fn set_definition(&mut self, start: i64, end: i64) -> Result<(), TimeError> {
        self.definition = Interval::new(start, end)?;
        Ok(())
    }

    pub fn definition_length(&self) -> i64 {
        self.definition.len()
    }

    /// Adds `[start, end)` to the set.
    ///
    /// Returns `Ok(false)` and leaves the set untouched if the interval is not contained in
    /// the definition interval. Fails if `start >= end`.
    pub fn append(&mut self, start: i64, end: i64) -> Result<bool, TimeError> {
        Ok(self.append_interval(Interval::new(start, end)?))
    }

    /// Same as [`IntervalSet::append`] for an already validated interval.
    pub fn append_interval(&mut self, interval: Interval) -> bool {
        if !self.definition.contains(&interval) {
            return false;
        }
        self.insert(interval);
        true
    }

    fn insert(&mut self, interval: Interval) {
        let mut start = interval.start();
        let mut end = interval.end();

        if let Some((&s, &e)) = self.intervals.range(..=start).next_back() {
            if e >= start {
                start = s;
                end = end.max(e);
            }
        }
        let merged = self
            .intervals
            .range(start..=end)
            .map(|(&s, _)| s)
            .collect_vec();
        for s in merged {
            if let Some(e) = self.intervals.remove(&s) {
                end = end.max(e);
            }
        }
        self.intervals.insert(start, end);
    }

    /// True iff `[start, end)` is entirely covered by the set. Fails if `start >= end`.
    pub fn contains(&self, start: i64, end: i64) -> Result<bool, TimeError> {
        Ok(self.contains_interval(&Interval::new(start, end)?))
    }

    pub fn contains_interval(&self, interval: &Interval) -> bool {
        // members never touch, so a covered interval sits inside a single member
        self.intervals
            .range(..=interval.start())
            .next_back()
            .is_some_and(|(_, &e)| e >= interval.end())
    }

    pub fn contains_time(&self, t: i64) -> bool {
        self.intervals
            .range(..=t)
            .next_back()
            .is_some_and(|(_, &e)| t < e)
    }

    /// True iff the two sets share at least one instant.
    pub fn intersects(&self, other: &IntervalSet) -> bool {
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
            if l.overlaps(r) {
                return true;
            }
            if l.end() <= r.end() {
                left.next();
            } else {
                right.next();
            }
        }
        false
    }

    /// The instants shared by both sets, defined on this set's definition interval.
    ///
    /// Intersection is only defined for sets that intersect; check with
    /// [`IntervalSet::intersects`] first or handle [`TimeError::DisjointIntervalSets`].
    pub fn intersection(&self, other: &IntervalSet) -> Result<IntervalSet, TimeError> {
        let mut result = IntervalSet::with_definition(self.definition);
        let mut left = self.iter().peekable();
        let mut right = other.iter().peekable();
        while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
            if let Some(shared) = l.intersection(r) {
                result.insert(shared);
            }
            if l.end() <= r.end() {
                left.next();
            } else {
                right.next();
            }
        }
        if result.is_empty() {
            Err(TimeError::DisjointIntervalSets)
        } else {
            Ok(result)
        }
    }

    /// Total measure of the set, i.e. the sum of the lengths of its members.
    pub fn length(&self) -> i64 {
        self.intervals
            .iter()
            .fold(0i64, |acc, (s, e)| acc.saturating_add(e.saturating_sub(*s)))
    }

    /// Number of disjoint members.
    pub fn size(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Removes every member, keeps the definition interval.
    pub fn erase(&mut self) {
        self.intervals.clear();
    }

    /// Earliest start and latest end of the members.
    pub fn span(&self) -> Option<Interval> {
        let (&start, _) = self.intervals.first_key_value()?;
        let (_, &end) = self.intervals.last_key_value()?;
        Interval::new(start, end).ok()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.intervals.iter(),
        }
    }
}

/// Ascending iterator over the members of an [`IntervalSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, i64, i64>,
}

impl Iterator for Iter<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .and_then(|(&s, &e)| Interval::new(s, e).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .and_then(|(&s, &e)| Interval::new(s, e).ok())
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a IntervalSet {
    type Item = Interval;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Interval> for IntervalSet {
    /// Appends every interval, silently skipping the ones outside the definition.
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.append_interval(interval);
        }
    }
}

impl Display for IntervalSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}
