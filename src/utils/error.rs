use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    #[error("{failed} of {total} operations failed")]
    PartialFailure { failed: usize, total: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl OpsError {
    /// 錯誤嚴重程度，用於決定 CLI 退出碼
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OpsError::DivisionByZero { .. } | OpsError::PartialFailure { .. } => {
                ErrorSeverity::Medium
            }
            OpsError::IoError(_) | OpsError::ConfigValidationError { .. } => ErrorSeverity::High,
            OpsError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            OpsError::DivisionByZero { .. } => {
                "Use a non-zero divisor, or drop --strict to get inf/NaN instead"
            }
            OpsError::PartialFailure { .. } => "See the report above for the failed entries",
            OpsError::IoError(_) => "Check that the file exists and is readable",
            OpsError::SerializationError(_) => "Retry with --format text",
            OpsError::ConfigValidationError { .. } => "Fix the batch file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;
