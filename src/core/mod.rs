pub mod engine;
pub mod output;

pub use crate::domain::model::{BatchEntry, BatchReport, ErrorPolicy, Operation, Outcome, OutputFormat};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
