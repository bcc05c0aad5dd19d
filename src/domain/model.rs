use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One operation together with its operands, as read from a batch file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Greet { name: String },
    Subtract { a: f64, b: f64 },
    Divide { x: f64, y: f64 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Greet { .. } => "greet",
            Operation::Subtract { .. } => "subtract",
            Operation::Divide { .. } => "divide",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Text(String),
    Number(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Text(text) => f.write_str(text),
            Outcome::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What a batch does when a single operation fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    #[default]
    Continue,
    Abort,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub index: usize,
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub evaluated: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
