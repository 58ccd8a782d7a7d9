pub mod edge_ref;
