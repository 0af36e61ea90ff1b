pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod render;
pub mod report;

pub use config::Config;
pub use error::ReportError;
pub use report::{Report, ReportBuilder};
