use crate::db::api::view::internal::InternalStorageOps;
use linkstream_core::entities::graph::storage::GraphStorage;

pub trait InternalMutationOps: InternalStorageOps {
    fn storage_mut(&mut self) -> &mut GraphStorage<Self::EdgeData>;
}
