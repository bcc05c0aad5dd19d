pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::BatchConfig;
pub use crate::core::{engine::OpsEngine, output::render};
pub use crate::domain::ops::{checked_divide, divide, greet, subtract};
pub use crate::utils::error::{OpsError, Result};
