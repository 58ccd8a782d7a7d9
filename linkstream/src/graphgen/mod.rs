//! Random graph generators.

pub mod erdos_renyi;
