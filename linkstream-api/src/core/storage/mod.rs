pub mod interval;
pub mod interval_set;
