// verifyflow-core/src/client.rs
//! Client for the remote audit service.
//!
//! The service accepts one document per request and answers with a JSON
//! report. A non-success status carries a body that is shown to the user
//! verbatim. The exchange has no timeout: the caller waits until the service
//! answers or the connection fails.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use crate::errors::TransportError;
use crate::report::Report;
use crate::upload::Upload;

const CHECK_PATH: &str = "/api/check";
const HEALTH_PATH: &str = "/api/health";
const USER_AGENT: &str = concat!("verifyflow/", env!("CARGO_PKG_VERSION"));

/// The audit service as seen by a session.
pub trait AuditClient {
    /// Submits a document for auditing with the given profile.
    fn check(&self, upload: &Upload, profile: &str) -> Result<Report, TransportError>;

    /// Returns whether the service reports itself healthy.
    fn health(&self) -> Result<bool, TransportError>;
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    #[serde(default)]
    ok: bool,
}

/// Blocking HTTP implementation of [`AuditClient`].
#[derive(Debug, Clone)]
pub struct HttpAuditClient {
    client: Client,
    base_url: String,
}

impl HttpAuditClient {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, TransportError> {
        let raw = format!("{}{}", self.base_url, path);
        let parsed = if params.is_empty() { Url::parse(&raw) } else { Url::parse_with_params(&raw, params) };
        parsed.map_err(|_| TransportError::InvalidUrl(raw))
    }
}

impl AuditClient for HttpAuditClient {
    fn check(&self, upload: &Upload, profile: &str) -> Result<Report, TransportError> {
        let url = self.endpoint(CHECK_PATH, &[("profile", profile)])?;
        info!("Submitting '{}' ({} bytes) for audit with profile '{}'", upload.file_name, upload.bytes.len(), profile);

        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = Form::new().part("file", part);

        let response = self.client.post(url).multipart(form).send()?;
        let status = response.status();
        let body = response.text()?;
        debug!("Audit service answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16(), body });
        }

        let report: Report = serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
        info!("Audit finished: {} issues reported", report.issues.len());
        Ok(report)
    }

    fn health(&self) -> Result<bool, TransportError> {
        let url = self.endpoint(HEALTH_PATH, &[])?;
        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16(), body });
        }
        let health: HealthResponse = serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(health.ok)
    }
}
