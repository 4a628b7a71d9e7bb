use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::escape::escape_html;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenreForm {
    #[validate(length(min = 3, message = "Genre name must contain at least 3 characters"))]
    pub name: String,
}

/// One field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// A submission that failed validation. The candidate is the trimmed,
/// escaped value, echoed back so the user sees what they typed.
#[derive(Debug)]
pub struct NameRejection {
    pub candidate: String,
    pub errors: Vec<FieldError>,
}

/// Trim, validate, escape. Rules are checked against the trimmed raw
/// value and all failures are collected; escaping applies to whatever
/// gets persisted or redisplayed, valid or not.
pub fn screen_name(raw: &str) -> Result<String, NameRejection> {
    let form = CreateGenreForm {
        name: raw.trim().to_string(),
    };
    let candidate = escape_html(&form.name);

    match form.validate() {
        Ok(()) => Ok(candidate),
        Err(errors) => Err(NameRejection {
            candidate,
            errors: collect_field_errors(&errors),
        }),
    }
}

fn collect_field_errors(errors: &validator::ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            out.push(FieldError {
                field: field.to_string(),
                message: failure
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| failure.code.to_string()),
            });
        }
    }
    out
}
