pub mod logical_to_physical;
pub mod storage;
