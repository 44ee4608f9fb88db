use std::fmt;

use thiserror::Error;

use crate::analysis::InputField;

/// Broad category of an analysis failure, used to choose what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    AuthRequired,
    Network,
    ResponseParse,
    Schema,
}

impl ErrorKind {
    /// Failures that happen after the request is sent.
    pub fn is_upstream(self) -> bool {
        matches!(
            self,
            ErrorKind::Network | ErrorKind::ResponseParse | ErrorKind::Schema
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::AuthRequired => "auth-required",
            ErrorKind::Network => "network",
            ErrorKind::ResponseParse => "response-parse",
            ErrorKind::Schema => "schema",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Missing information: {field} is required")]
    InvalidInput { field: InputField },

    #[error("Authentication required: please sign in to analyze your project")]
    AuthRequired,

    #[error("Request to the AI service failed: {0}")]
    Network(String),

    #[error("Request to the AI service timed out after {0}s")]
    Timeout(u64),

    #[error("AI service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("AI service response contained no candidate text")]
    MissingCandidateText,

    #[error("No JSON object found in AI response")]
    NoJsonFound,

    #[error("Malformed JSON in AI response: {0}")]
    MalformedResponse(String),

    #[error("AI response does not match the analysis schema: {0}")]
    SchemaMismatch(String),
}

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Analysis failed: there was an error analyzing your project. Please try again.";

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InvalidInput { .. } => ErrorKind::Validation,
            AnalysisError::AuthRequired => ErrorKind::AuthRequired,
            AnalysisError::Network(_) | AnalysisError::Timeout(_) | AnalysisError::Status { .. } => {
                ErrorKind::Network
            }
            AnalysisError::MissingCandidateText
            | AnalysisError::NoJsonFound
            | AnalysisError::MalformedResponse(_) => ErrorKind::ResponseParse,
            AnalysisError::SchemaMismatch(_) => ErrorKind::Schema,
        }
    }

    /// Message shown to the user. Upstream failures all collapse into one notice.
    pub fn user_message(&self) -> String {
        if self.kind().is_upstream() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }

    pub(crate) fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                "Invalid API key. Please check your API key configuration.".to_string()
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                "Rate limit exceeded. Please wait a moment and try again.".to_string()
            }
            reqwest::StatusCode::BAD_REQUEST => format!("Invalid request: {body}"),
            s if s.is_server_error() => {
                "Service is temporarily unavailable. Please try again later.".to_string()
            }
            _ if body.trim().is_empty() => "Unknown error".to_string(),
            _ => body,
        };
        AnalysisError::Status {
            status: status.as_u16(),
            message,
        }
    }
}
