//! Field validation rules

use std::sync::Arc;

/// Message shown when a required field is blank
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Maps the current text to an optional error message
pub type Validator = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Validate `text`
///
/// A blank required field reports [`REQUIRED_MESSAGE`] without consulting
/// `validator`; otherwise the validator decides.
pub fn validate(text: &str, required: bool, validator: Option<&Validator>) -> Option<String> {
    // Newlines count as blank too
    if required && text.trim().is_empty() {
        Some(REQUIRED_MESSAGE.to_string())
    } else if let Some(validator) = validator {
        validator(text)
    } else {
        None
    }
}
