use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod edges;
pub mod vertices;

/// Dense physical id of a vertex.
///
/// Ids are positions in the vertex arena of a graph. Removing a vertex shifts every
/// higher id down by one, so a `VID` is only valid until the next removal. Use the vertex
/// label when a reference has to survive removals.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub struct VID(pub usize);

impl VID {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VID {
    fn from(id: usize) -> Self {
        VID(id)
    }
}

impl From<VID> for usize {
    fn from(id: VID) -> Self {
        id.0
    }
}

impl Display for VID {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group tag of a vertex in a bipartite graph.
///
/// Vertices created without a group are `Null`. A bipartite graph only ever links a `Top`
/// vertex to a `Bottom` vertex.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Default,
)]
pub enum VertexGroup {
    #[default]
    Null,
    Top,
    Bottom,
}

impl VertexGroup {
    /// The group on the other side of the partition, `None` for `Null`.
    pub fn opposite(&self) -> Option<VertexGroup> {
        match self {
            VertexGroup::Null => None,
            VertexGroup::Top => Some(VertexGroup::Bottom),
            VertexGroup::Bottom => Some(VertexGroup::Top),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, VertexGroup::Null)
    }
}

impl Display for VertexGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let group = match self {
            VertexGroup::Null => "null",
            VertexGroup::Top => "top",
            VertexGroup::Bottom => "bottom",
        };
        write!(f, "{}", group)
    }
}
