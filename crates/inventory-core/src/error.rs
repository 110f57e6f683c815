//! Error Types
//!
//! Failures are turned into UI state; only their display strings reach the user.

use thiserror::Error;

/// Failure talking to the inventory backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{}", rejected_message(*status, body))]
    Rejected { status: u16, body: String },
    #[error("Could not read response: {0}")]
    Decode(String),
    #[error("CSRF token unavailable")]
    MissingCsrfToken,
}

fn rejected_message(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("Request failed with status code {}", status)
    } else {
        format!("Request failed with status code {}: {}", status, body)
    }
}

/// Rejected edit from the item form's generic field handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),
    #[error("{field} must be a whole number of zero or more, got `{value}`")]
    InvalidQuantity { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_with_and_without_body() {
        let bare = ApiError::Rejected { status: 403, body: "  ".to_string() };
        assert_eq!(bare.to_string(), "Request failed with status code 403");

        let detailed = ApiError::Rejected {
            status: 400,
            body: r#"{"name":["This field may not be blank."]}"#.to_string(),
        };
        assert_eq!(
            detailed.to_string(),
            r#"Request failed with status code 400: {"name":["This field may not be blank."]}"#
        );
    }
}
