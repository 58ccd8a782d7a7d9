use linkstream_core::entities::graph::storage::GraphStorage;

/// Access to the adjacency storage backing a graph.
///
/// Implementing this trait is enough to get the whole of [`GraphViewOps`](super::GraphViewOps).
pub trait InternalStorageOps {
    /// Payload stored on every edge, `()` for plain graphs.
    type EdgeData;

    fn storage(&self) -> &GraphStorage<Self::EdgeData>;
}
