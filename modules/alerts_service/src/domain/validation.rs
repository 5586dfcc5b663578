//! Input validation for alerts

use crate::contract::AlertsError;

/// Validate an alert type
///
/// Must be non-empty, at most `max_len` characters and free of control
/// characters.
pub fn validate_alert_type(r#type: &str, max_len: usize) -> Result<(), AlertsError> {
    if r#type.trim().is_empty() {
        return Err(AlertsError::Validation {
            message: "alert type cannot be empty".to_string(),
        });
    }

    if r#type.chars().count() > max_len {
        return Err(AlertsError::Validation {
            message: format!("alert type exceeds {} characters", max_len),
        });
    }

    if r#type.chars().any(char::is_control) {
        return Err(AlertsError::Validation {
            message: format!("alert type '{}' contains control characters", r#type.escape_debug()),
        });
    }

    Ok(())
}
