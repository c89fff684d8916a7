//! Error types shared across the client.

use std::fmt;

/// Failures surfaced by the client. `Display` prefixes each variant for
/// console logs; [`AppError::user_message`] is the text forms show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// Configuration problems, such as a blank API base URL.
    Config(String),
    /// Form input rejected before any request was made.
    Validation(String),
    /// Credentials or token rejected.
    Auth(String),
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-success status.
    Http { status: u16, message: String },
    /// The response body could not be understood.
    Parse(String),
    /// The request body could not be produced.
    Serialization(String),
}

impl AppError {
    /// Text shown inline in forms. Messages that already speak to the
    /// user (validation, rejected credentials, server-sent errors) pass
    /// through bare; transport noise keeps its prefix.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message)
            | AppError::Auth(message)
            | AppError::Config(message)
            | AppError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(f, "Config error: {message}"),
            AppError::Validation(message) => write!(f, "Validation error: {message}"),
            AppError::Auth(message) => write!(f, "Authentication failed: {message}"),
            AppError::Network(message) => write!(f, "Network error: {message}"),
            AppError::Http { status, message } => {
                write!(f, "Request failed ({status}): {message}")
            }
            AppError::Parse(message) => write!(f, "Response error: {message}"),
            AppError::Serialization(message) => write!(f, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_transport_errors() {
        let err = AppError::Network("Unable to reach the server: timeout".to_string());
        assert_eq!(
            err.to_string(),
            "Network error: Unable to reach the server: timeout"
        );
    }

    #[test]
    fn user_message_passes_server_text_through_bare() {
        let err = AppError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        };
        assert_eq!(err.user_message(), "Invalid credentials");
        assert_eq!(
            err.to_string(),
            "Request failed (401): Invalid credentials"
        );
    }

    #[test]
    fn user_message_keeps_prefix_for_parse_failures() {
        let err = AppError::Parse("Failed to decode response: eof".to_string());
        assert_eq!(
            err.user_message(),
            "Response error: Failed to decode response: eof"
        );
    }
}
