//! API Client Errors

use thiserror::Error;

/// Generic text used when a non-2xx response carries no `detail`
pub const DEFAULT_ERROR_DETAIL: &str = "An error occurred";

/// Errors returned by the API client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// A response body that did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// The server answered with a non-2xx status
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },
}

/// Error body sent with non-2xx responses
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

impl ClientError {
    /// Text to show the user.
    ///
    /// Application failures use the server `detail` or `fallback`; transport
    /// failures always use the view's fixed `transport_message`.
    pub fn user_message(&self, fallback: &str, transport_message: &str) -> String {
        match self {
            ClientError::Api { detail: Some(detail), .. } => detail.clone(),
            ClientError::Api { detail: None, .. } => fallback.to_string(),
            ClientError::Network(_) | ClientError::Decode(_) => transport_message.to_string(),
        }
    }

    /// Classify a non-2xx response from its status code and raw body text.
    ///
    /// A body that is not a JSON object is a parse failure, not an
    /// application error without `detail`.
    pub fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ClientError::Api { status, detail: parsed.detail },
            Err(e) => ClientError::Decode(format!("status {}: {}", status, e)),
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_used_verbatim() {
        let err = ClientError::from_status(404, r#"{"detail":"Student not found"}"#);
        assert_eq!(
            err,
            ClientError::Api { status: 404, detail: Some("Student not found".to_string()) }
        );
        assert_eq!(err.user_message("fallback", "offline"), "Student not found");
    }

    #[test]
    fn test_missing_detail_uses_fallback() {
        let err = ClientError::from_status(400, "{}");
        assert_eq!(err, ClientError::Api { status: 400, detail: None });
        assert_eq!(err.user_message("Student not found.", "offline"), "Student not found.");

        let err = ClientError::from_status(500, r#"{"error":"boom"}"#);
        assert_eq!(err.user_message(DEFAULT_ERROR_DETAIL, "offline"), "An error occurred");
    }

    #[test]
    fn test_non_json_error_body_uses_transport_message() {
        let err = ClientError::from_status(502, "<html>Bad Gateway</html>");
        assert!(matches!(err, ClientError::Decode(_)));
        assert_eq!(
            err.user_message(DEFAULT_ERROR_DETAIL, "Failed to sign up. Please try again."),
            "Failed to sign up. Please try again."
        );

        let err = ClientError::from_status(500, "Internal Server Error");
        assert_eq!(err.user_message("x", "Failed to fetch profile."), "Failed to fetch profile.");
    }

    #[test]
    fn test_transport_uses_fixed_message() {
        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(
            err.user_message(DEFAULT_ERROR_DETAIL, "Failed to sign up. Please try again."),
            "Failed to sign up. Please try again."
        );

        let err = ClientError::Decode("expected value at line 1".to_string());
        assert_eq!(err.user_message("x", "Failed to fetch profile."), "Failed to fetch profile.");
    }

    #[test]
    fn test_display() {
        let err = ClientError::Api { status: 403, detail: Some("Permission denied".to_string()) };
        assert_eq!(err.to_string(), "API error 403: Permission denied");
        let err = ClientError::Api { status: 502, detail: None };
        assert_eq!(err.to_string(), "API error 502: no detail");
    }
}
