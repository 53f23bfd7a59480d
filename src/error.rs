// src/error.rs
//! User-facing failures. Infrastructure code stays on anyhow.

use thiserror::Error;

pub const GENERIC_REJECTION: &str = "Failed to analyze resume";
pub const GENERIC_TRANSPORT_FAILURE: &str = "An error occurred while analyzing the resume";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please select a resume file")]
    MissingFile,

    #[error("Please select a job description")]
    MissingJob,

    #[error("A resume analysis is already in progress")]
    Busy,

    #[error("An error occurred while analyzing the resume")]
    Transport { detail: String },

    #[error("{}", .message.as_deref().unwrap_or(GENERIC_REJECTION))]
    Rejected { message: Option<String> },
}

impl SubmitError {
    pub fn transport(detail: impl std::fmt::Display) -> Self {
        SubmitError::Transport {
            detail: detail.to_string(),
        }
    }

    pub fn rejected(message: Option<String>) -> Self {
        SubmitError::Rejected { message }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to reach job catalog: {0}")]
    Transport(String),

    #[error("job catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed job catalog response: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_prefers_server_message() {
        let err = SubmitError::rejected(Some("Could not extract text from PDF".to_string()));
        assert_eq!(err.to_string(), "Could not extract text from PDF");
        assert_eq!(SubmitError::rejected(None).to_string(), GENERIC_REJECTION);
    }

    #[test]
    fn test_transport_message_is_generic() {
        let err = SubmitError::transport("connection refused");
        assert_eq!(err.to_string(), GENERIC_TRANSPORT_FAILURE);
    }
}
