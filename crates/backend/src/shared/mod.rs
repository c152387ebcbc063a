pub mod config;
pub mod csv_table;
pub mod data;
pub mod format;
pub mod validation;
