use crate::core::entities::VID;
use std::fmt::{self, Display, Formatter};

/// A vertex given either by its physical id or by its label.
///
/// Mutation apis create missing vertices when they are referenced by label, references by
/// id must point at an existing vertex.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum VertexRef<'a> {
    Internal(VID),
    Label(&'a str),
}

impl<'a> VertexRef<'a> {
    /// Makes a new vertex reference from an internal `VID`.
    /// Values are unchecked and the vertex is assumed to exist so use with caution!
    pub fn new(vid: VID) -> Self {
        VertexRef::Internal(vid)
    }

    pub fn as_label(&self) -> Option<&'a str> {
        match self {
            VertexRef::Label(label) => Some(label),
            VertexRef::Internal(_) => None,
        }
    }
}

impl From<VID> for VertexRef<'_> {
    fn from(value: VID) -> Self {
        VertexRef::Internal(value)
    }
}

impl<'a> From<&'a str> for VertexRef<'a> {
    fn from(value: &'a str) -> Self {
        VertexRef::Label(value)
    }
}

impl<'a> From<&'a String> for VertexRef<'a> {
    fn from(value: &'a String) -> Self {
        VertexRef::Label(value.as_str())
    }
}

/// Anything a vertex argument can be given as: a [`VID`], a label or a [`VertexRef`].
pub trait AsVertexRef {
    fn as_vertex_ref(&self) -> VertexRef<'_>;
}

impl AsVertexRef for VID {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        VertexRef::Internal(*self)
    }
}

impl AsVertexRef for str {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        VertexRef::Label(self)
    }
}

impl AsVertexRef for String {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        VertexRef::Label(self.as_str())
    }
}

impl AsVertexRef for VertexRef<'_> {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        *self
    }
}

impl<V: AsVertexRef + ?Sized> AsVertexRef for &V {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        V::as_vertex_ref(self)
    }
}

impl Display for VertexRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VertexRef::Internal(vid) => write!(f, "{}", vid),
            VertexRef::Label(label) => write!(f, "{}", label),
        }
    }
}
