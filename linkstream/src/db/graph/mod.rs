pub mod bi_link_stream;
pub mod bipartite;
pub mod graph;
pub mod link_stream;
