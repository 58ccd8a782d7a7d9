pub mod vertex_ref;
