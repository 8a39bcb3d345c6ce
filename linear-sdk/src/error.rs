// ABOUTME: Custom error types for Linear SDK with user-friendly messages
// ABOUTME: Provides specific error handling for API, credential and upload failure modes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearError {
    #[error("Authentication failed. The API rejected the token")]
    Auth,

    #[error("Not authenticated for workspace \"{0}\"")]
    NotAuthenticated(String),

    #[error("Invalid or expired token for workspace \"{0}\"")]
    InvalidToken(String),

    #[error("Invalid API token")]
    TokenRejected,

    #[error("Issue {0} not found")]
    IssueNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {reason}")]
    Api { status: u16, reason: String },

    #[error("GraphQL error: {0}")]
    GraphQL(String),

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response format: {0}")]
    InvalidResponse(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Credential storage error: {0}")]
    CredentialStorage(String),

    #[error("File upload failed: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LinearError {
    pub fn help_text(&self) -> Option<String> {
        match self {
            LinearError::Auth | LinearError::TokenRejected => {
                Some("Get your API key from: https://linear.app/settings/api".to_string())
            }
            LinearError::NotAuthenticated(workspace) => Some(format!(
                "Please run \"lin login <api-token> --workspace={workspace}\" first."
            )),
            LinearError::InvalidToken(workspace) => Some(format!(
                "Please run \"lin login <api-token> --workspace={workspace}\" again."
            )),
            LinearError::IssueNotFound(_) => {
                Some("Please check the issue identifier format (e.g., ENG-123)".to_string())
            }
            LinearError::Network(_) => {
                Some("Check your internet connection and try again".to_string())
            }
            LinearError::RateLimit => {
                Some("Wait a moment before making another request".to_string())
            }
            LinearError::Timeout => Some("Try again or check your network connection".to_string()),
            LinearError::CredentialStorage(_) => {
                Some("Check that the system keychain is available and unlocked".to_string())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LinearError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LinearError::Timeout
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                401 => LinearError::Auth,
                429 => LinearError::RateLimit,
                code => LinearError::Api {
                    status: code,
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                },
            }
        } else if err.is_decode() {
            LinearError::InvalidResponse(err.to_string())
        } else {
            LinearError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LinearError {
    fn from(err: serde_json::Error) -> Self {
        LinearError::InvalidResponse(err.to_string())
    }
}
