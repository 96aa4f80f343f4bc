//! Request field validation

use crate::error::AppError;

/// Reject a required field that is empty or only whitespace
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(())
}
