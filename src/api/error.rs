//! Submission failures and how they are reported to the user

use serde::Deserialize;
use thiserror::Error;

/// Shown when a failure carries no usable message
pub const FALLBACK_ERROR_MESSAGE: &str = "Registration failed.";

/// Why a registration request did not succeed
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status
    #[error("registration rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response
    #[error("registration request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Message for the failure toast: the server's own message when it sent
    /// one, otherwise [`FALLBACK_ERROR_MESSAGE`]
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pull `message` out of an error response body. Bodies that are not JSON,
/// lack the field, or carry an empty message yield `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Email exists"}"#),
            Some("Email exists".to_string())
        );
    }

    #[test]
    fn test_ignores_unexpected_shapes() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("Bad Gateway"), None);
        assert_eq!(extract_error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"message":""}"#), None);
        assert_eq!(extract_error_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = SubmitError::Rejected {
            status: 409,
            message: Some("Email exists".to_string()),
        };
        assert_eq!(err.user_message(), "Email exists");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = SubmitError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Registration failed.");
    }

    #[test]
    fn test_display_includes_status() {
        let err = SubmitError::Rejected {
            status: 422,
            message: None,
        };
        assert_eq!(err.to_string(), "registration rejected with status 422");
    }
}
