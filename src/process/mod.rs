// src/process/mod.rs
pub mod aggregate;
pub mod csv;
pub mod date_parser;
pub mod status;

pub use aggregate::{aggregate, Grouping, Summary};
pub use csv::{parse_csv, Record};
pub use status::Status;
