//! Helpers shared by the route groups.

use validator::{Validate, ValidationErrors};

use crate::response::ApiError;

/// Joins the messages of every failed field rule with `"; "`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

/// Runs the `validator` rules of `req`, mapping failures to a `400`.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), ApiError> {
    req.validate()
        .map_err(|errors| ApiError::Validation(format_validation_errors(&errors)))
}
