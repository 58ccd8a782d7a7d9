use crate::core::entities::VID;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Reference to an edge by its endpoints.
///
/// For undirected graphs `src` and `dst` are given in the order the caller used, the edge
/// itself has no orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeRef {
    src_pid: VID,
    dst_pid: VID,
}

impl EdgeRef {
    #[inline]
    pub fn new(src_pid: VID, dst_pid: VID) -> Self {
        EdgeRef { src_pid, dst_pid }
    }

    #[inline(always)]
    pub fn src(&self) -> VID {
        self.src_pid
    }

    #[inline(always)]
    pub fn dst(&self) -> VID {
        self.dst_pid
    }

    /// The endpoint that is not `v`, `None` if `v` is not an endpoint.
    pub fn remote(&self, v: VID) -> Option<VID> {
        if self.src_pid == v {
            Some(self.dst_pid)
        } else if self.dst_pid == v {
            Some(self.src_pid)
        } else {
            None
        }
    }

    /// Same edge with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        EdgeRef::new(self.dst_pid, self.src_pid)
    }

    /// Orders the endpoints so that `src <= dst`. Two references to the same undirected
    /// edge have the same canonical form.
    pub fn canonical(&self) -> Self {
        if self.src_pid <= self.dst_pid {
            *self
        } else {
            self.reversed()
        }
    }
}

impl Display for EdgeRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.src_pid, self.dst_pid)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn canonical_orders_endpoints() {
        let e = EdgeRef::new(VID(4), VID(1));
        assert_eq!(e.canonical(), EdgeRef::new(VID(1), VID(4)));
        assert_eq!(e.canonical(), e.reversed().canonical());
        assert_eq!(e.remote(VID(4)), Some(VID(1)));
        assert_eq!(e.remote(VID(7)), None);
        assert_eq!(e.to_string(), "(4,1)");
    }
}
