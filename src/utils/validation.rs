use crate::utils::error::{OpsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_not_empty(field_name: &str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(OpsError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}
