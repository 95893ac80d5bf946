use miette::Diagnostic;
use thiserror::Error;

/// Shown when a fetch fails without anything more useful to say
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Error, Debug, Diagnostic)]
pub enum PassfetchError {
    // ========================================================================
    // Request Errors
    // ========================================================================
    /// The API answered with a non-success status. The message format is
    /// what the password view shows verbatim.
    #[error("Error: {status} {status_text}")]
    #[diagnostic(
        code(passfetch::request::status),
        help("Check BASE_URL and API_KEY, the API rejected the request")
    )]
    Request { status: u16, status_text: String },

    /// Transport level failure (connection, DNS, timeout, bad URL)
    #[error("{0}")]
    #[diagnostic(
        code(passfetch::request::network),
        help("Ensure BASE_URL points at a reachable password API")
    )]
    Network(String),

    #[error("Failed to parse password response: {0}")]
    #[diagnostic(
        code(passfetch::response::decode),
        help("The API is expected to return {{\"random_password\": \"...\"}}")
    )]
    Decode(String),

    #[error("Failed to create HTTP client: {0}")]
    #[diagnostic(code(passfetch::request::client))]
    Client(String),

    // ========================================================================
    // Input Errors
    // ========================================================================
    #[error("Password length must be a positive integer, got '{input}'")]
    #[diagnostic(code(passfetch::length::invalid))]
    InvalidLength { input: String },

    // ========================================================================
    // Clipboard Errors
    // ========================================================================
    #[error("Clipboard not available: {0}")]
    #[diagnostic(code(passfetch::clipboard::unavailable))]
    ClipboardUnavailable(String),

    #[error("Failed to copy: {0}")]
    #[diagnostic(code(passfetch::clipboard::copy_failed))]
    ClipboardCopyFailed(String),

    #[error("No password available to copy")]
    #[diagnostic(code(passfetch::clipboard::empty))]
    NothingToCopy,

    // ========================================================================
    // Terminal Errors
    // ========================================================================
    #[error("Failed to initialize terminal: {0}")]
    #[diagnostic(code(passfetch::terminal::init))]
    TerminalInit(#[source] std::io::Error),

    #[error("Failed to render: {0}")]
    #[diagnostic(code(passfetch::terminal::render))]
    Render(#[source] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    #[diagnostic(code(passfetch::logging::init))]
    Logging(String),

    // ========================================================================
    // Generic I/O Errors (fallback)
    // ========================================================================
    #[error("I/O error: {0}")]
    #[diagnostic(code(passfetch::io::error))]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PassfetchError {
    fn from(err: serde_json::Error) -> Self {
        PassfetchError::Decode(err.to_string())
    }
}

impl PassfetchError {
    /// Text the password view displays for a failed fetch
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

pub type Result<T> = std::result::Result<T, PassfetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_message() {
        let err = PassfetchError::Request {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.user_message(), "Error: 500 Internal Server Error");
    }

    #[test]
    fn test_network_error_is_passed_through() {
        let err = PassfetchError::Network("timeout".to_string());
        assert_eq!(err.user_message(), "timeout");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let err = PassfetchError::Network(String::new());
        assert_eq!(err.user_message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_json_error_converts_to_decode() {
        let err: PassfetchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, PassfetchError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse password response"));
    }
}
