//! Input validation for report items

use crate::contract::{NewReportItem, ReportsError};

fn validate_field(field: &str, value: &str, max_len: usize) -> Result<(), ReportsError> {
    if value.trim().is_empty() {
        return Err(ReportsError::Validation {
            message: format!("report item {} cannot be empty", field),
        });
    }

    if value.chars().count() > max_len {
        return Err(ReportsError::Validation {
            message: format!("report item {} exceeds {} characters", field, max_len),
        });
    }

    Ok(())
}

/// Type and title must be non-empty and at most `max_len` characters
pub fn validate_report_item(item: &NewReportItem, max_len: usize) -> Result<(), ReportsError> {
    validate_field("type", &item.r#type, max_len)?;
    validate_field("title", &item.title, max_len)
}
