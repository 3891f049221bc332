pub mod join;
pub mod param;
pub mod sort;
pub mod spec;
