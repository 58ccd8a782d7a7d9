use crate::entities::{VertexGroup, VID};
use linkstream_api::core::Direction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Per-vertex record: label, group tag and adjacency.
///
/// Undirected graphs keep every neighbour in `out`, directed graphs split successors
/// (`out`) and predecessors (`into`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VertexStore {
    label: Option<String>,
    group: VertexGroup,
    out: BTreeSet<VID>,
    into: BTreeSet<VID>,
}

impl VertexStore {
    pub fn new(label: Option<String>, group: VertexGroup) -> Self {
        Self {
            label,
            group,
            out: BTreeSet::new(),
            into: BTreeSet::new(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn group(&self) -> VertexGroup {
        self.group
    }

    pub(crate) fn set_group(&mut self, group: VertexGroup) {
        self.group = group;
    }

    pub fn out_neighbours(&self) -> &BTreeSet<VID> {
        &self.out
    }

    pub fn in_neighbours(&self) -> &BTreeSet<VID> {
        &self.into
    }

    pub(crate) fn add_out(&mut self, v: VID) {
        self.out.insert(v);
    }

    pub(crate) fn add_in(&mut self, v: VID) {
        self.into.insert(v);
    }

    pub(crate) fn remove_out(&mut self, v: VID) {
        self.out.remove(&v);
    }

    pub(crate) fn remove_in(&mut self, v: VID) {
        self.into.remove(&v);
    }

    pub(crate) fn clear_adjacency(&mut self) {
        self.out.clear();
        self.into.clear();
    }

    /// Rewrites neighbour ids after the vertex `removed` left the arena.
    pub(crate) fn shift_after_removal(&mut self, removed: VID) {
        let shift = |set: &BTreeSet<VID>| {
            set.iter()
                .filter(|v| **v != removed)
                .map(|v| if *v > removed { VID(v.0 - 1) } else { *v })
                .collect::<BTreeSet<_>>()
        };
        self.out = shift(&self.out);
        self.into = shift(&self.into);
    }

    pub fn degree(&self, dir: Direction, directed: bool) -> usize {
        if !directed {
            return self.out.len();
        }
        match dir {
            Direction::OUT => self.out.len(),
            Direction::IN => self.into.len(),
            Direction::BOTH => self.out.len() + self.into.len(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shift_drops_and_renumbers() {
        let mut store = VertexStore::new(Some("a".to_string()), VertexGroup::Top);
        store.add_out(VID(1));
        store.add_out(VID(3));
        store.add_in(VID(2));
        store.add_in(VID(4));

        store.shift_after_removal(VID(2));

        assert_eq!(store.out_neighbours().iter().copied().collect::<Vec<_>>(), vec![VID(1), VID(2)]);
        assert_eq!(store.in_neighbours().iter().copied().collect::<Vec<_>>(), vec![VID(3)]);
        assert_eq!(store.degree(Direction::BOTH, true), 3);
        assert_eq!(store.degree(Direction::BOTH, false), 2);
    }
}
