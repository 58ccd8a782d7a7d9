use crate::{entities::VID, utils::errors::MutateGraphError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

/// Maps vertex labels (logical ids) to their position in the vertex arena (physical ids).
///
/// Only labelled vertices are present. The physical side shifts when a vertex is removed,
/// callers rebuild the mapping from the arena afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    map: FxHashMap<String, VID>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<VID> {
        self.map.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.map.contains_key(label)
    }

    pub fn insert(&mut self, label: &str, vid: VID) -> Result<(), MutateGraphError> {
        match self.map.entry(label.to_owned()) {
            Entry::Occupied(_) => Err(MutateGraphError::LabelExists(label.to_owned())),
            Entry::Vacant(entry) => {
                entry.insert(vid);
                Ok(())
            }
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn rebuild<'a>(&mut self, labels: impl Iterator<Item = (VID, Option<&'a str>)>) {
        self.map.clear();
        for (vid, label) in labels {
            if let Some(label) = label {
                self.map.insert(label.to_owned(), vid);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_label_is_rejected() {
        let mut mapping = Mapping::new();
        mapping.insert("a", VID(0)).unwrap();
        assert_eq!(
            mapping.insert("a", VID(1)),
            Err(MutateGraphError::LabelExists("a".to_string()))
        );
        assert_eq!(mapping.get("a"), Some(VID(0)));
    }

    #[test]
    fn rebuild_skips_unlabelled() {
        let mut mapping = Mapping::new();
        mapping.insert("stale", VID(9)).unwrap();
        mapping.rebuild([(VID(0), Some("a")), (VID(1), None), (VID(2), Some("c"))].into_iter());
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("c"), Some(VID(2)));
        assert!(!mapping.contains("stale"));
    }
}
