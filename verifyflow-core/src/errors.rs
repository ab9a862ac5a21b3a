//! errors.rs - Error types for the verifyflow-core library.
//!
//! Failures are split the way the audit workflow surfaces them: input problems
//! are caught locally before any request, transport problems come back from the
//! audit service, and session problems come from driving the session out of order.
//! Order-number findings are deliberately absent here: they are reported as
//! synthetic issues, never as errors.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Problems with the file chosen for upload. Raised before a request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unsupported file '{file_name}': only {allowed} files can be audited")]
    UnsupportedExtension { file_name: String, allowed: String },

    #[error("File '{file_name}' is empty")]
    EmptyFile { file_name: String },

    #[error("No file selected")]
    NoFileSelected,
}

/// Failures of the exchange with the audit service.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request to the audit service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body is kept verbatim; it is what the user gets to see.
    #[error("{body}")]
    Status { status: u16, body: String },

    #[error("Could not read the audit response: {0}")]
    Decode(String),

    #[error("Invalid audit service URL '{0}'")]
    InvalidUrl(String),
}

impl TransportError {
    /// The message shown in place of the report view.
    pub fn display_message(&self) -> String {
        match self {
            TransportError::Status { status, body } if body.trim().is_empty() => {
                format!("Audit service responded with status {}", status)
            }
            other => other.to_string(),
        }
    }
}

/// Misuse of a [`crate::session::ReportSession`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("An audit request is already in progress")]
    AuditInFlight,

    #[error("Annotation text is empty")]
    EmptyAnnotation,

    #[error("No audit report is available yet")]
    NoReport,
}

/// Umbrella error for the library.
///
/// `#[non_exhaustive]` lets new variants land without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VerifyflowError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_shows_body_verbatim() {
        let err = TransportError::Status {
            status: 400,
            body: "{\"detail\":\"Пустой файл\"}".to_string(),
        };
        assert_eq!(err.display_message(), "{\"detail\":\"Пустой файл\"}");
    }

    #[test]
    fn status_error_with_blank_body_names_the_status() {
        let err = TransportError::Status { status: 502, body: "  ".to_string() };
        assert_eq!(err.display_message(), "Audit service responded with status 502");
    }
}
