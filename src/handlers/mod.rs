pub mod account;
pub mod analytics;
pub mod calendar;
pub mod notes;
pub mod tasks;

use crate::error::ApiError;

/// Required text field: must be present and non-empty after trimming. The
/// trimmed value is what gets stored, so the emptiness check and the stored
/// value always agree.
fn require_text(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    let trimmed = value.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
