//! Validation Utilities

use validator::{Validate, ValidationError, ValidationErrors};

use super::error::AppError;

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect();

    // field_errors() is a HashMap; keep the message stable
    messages.sort();

    if messages.is_empty() {
        // struct-level (schema) validation failures
        return AppError::Validation(errors.to_string());
    }

    AppError::Validation(messages.join("; "))
}

/// Validate a command before it reaches a use-case.
pub fn validate<T: Validate>(command: &T) -> Result<(), AppError> {
    command.validate().map_err(validation_error)
}

/// Rejects strings that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
