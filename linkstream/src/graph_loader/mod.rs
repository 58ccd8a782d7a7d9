//! Loaders turning edge list files into graphs.

pub mod csv_reader;
