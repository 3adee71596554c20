//! Statutory tax tables, one module per supported year.

mod year2024;

pub use year2024::tables_2024;
