pub mod mutation;
pub mod view;
