pub mod errors;
pub mod matrix;
