pub mod vertex_store;
