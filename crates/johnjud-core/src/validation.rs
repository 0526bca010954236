//! Validation utilities.

use crate::JohnjudError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `JohnjudError` on failure.
    fn validate_request(&self) -> Result<(), JohnjudError> {
        self.validate().map_err(validation_errors_to_johnjud_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `JohnjudError::Validation`.
///
/// Field errors are flattened into `field: message` pairs, sorted by field
/// name so the message is stable.
#[must_use]
pub fn validation_errors_to_johnjud_error(errors: ValidationErrors) -> JohnjudError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();

    JohnjudError::Validation(parts.join("; "))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is a well-formed UUID.
    pub fn uuid(value: &str) -> Result<(), ValidationError> {
        uuid::Uuid::parse_str(value)
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_uuid"))
    }

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}
