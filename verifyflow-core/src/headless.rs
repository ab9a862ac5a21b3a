// verifyflow-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for non-interactive use: audit one file, attach the
//! order-number findings and notes, and render the export in a single call.

use chrono::NaiveDateTime;
use log::{debug, warn};
use std::path::Path;

use crate::client::AuditClient;
use crate::config::ClientConfig;
use crate::errors::VerifyflowError;
use crate::report::{Issue, Report};
use crate::session::ReportSession;
use crate::upload::Upload;

/// Inputs of a one-shot audit besides the file itself.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Audit profile. Falls back to the configured default.
    pub profile: Option<String>,
    pub order_number: Option<String>,
    /// Annotations as `(text, timestamp)` pairs.
    pub notes: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct HeadlessOutcome {
    pub report: Report,
    /// Report issues followed by order-number findings.
    pub display_issues: Vec<Issue>,
    pub export_text: String,
}

/// Audits the document at `path` and returns the report with its export.
///
/// # Arguments
///
/// * `client` - Audit service to submit to.
/// * `config` - Effective client configuration (extensions, default profile).
/// * `path` - Document to audit.
/// * `options` - Profile, order number and notes.
/// * `generated_at` - Timestamp written into the export header.
pub fn headless_audit_file(
    client: &dyn AuditClient,
    config: &ClientConfig,
    path: &Path,
    options: &HeadlessOptions,
    generated_at: NaiveDateTime,
) -> Result<HeadlessOutcome, VerifyflowError> {
    let upload = Upload::from_path(path, &config.allowed_extensions)?;
    let profile = options.profile.as_deref().unwrap_or(config.default_profile.as_str());

    let mut session = ReportSession::new();
    session.select_file(upload.file_name.clone());
    if let Some(order) = &options.order_number {
        session.set_order_number(order.clone());
    }

    let report = session.run_audit(client, &upload, profile)?.clone();

    for (text, timestamp) in &options.notes {
        if session.add_annotation(text, timestamp.clone()).is_err() {
            warn!("Skipping empty note in headless audit of {}", upload.file_name);
        }
    }
    let export_text = session.export(generated_at)?;
    debug!("Headless audit of {} produced {} display issues", upload.file_name, session.display_issues().len());

    Ok(HeadlessOutcome {
        report,
        display_issues: session.display_issues().to_vec(),
        export_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::report::Severity;
    use std::io::Write;

    struct CannedClient(Report);

    impl AuditClient for CannedClient {
        fn check(&self, _upload: &Upload, profile: &str) -> Result<Report, TransportError> {
            let mut report = self.0.clone();
            report.profile = profile.to_string();
            Ok(report)
        }

        fn health(&self) -> Result<bool, TransportError> {
            Ok(true)
        }
    }

    #[test]
    fn audits_file_and_appends_order_findings() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"PK\x03\x04").unwrap();

        let client = CannedClient(Report {
            issues: vec![Issue::new(Severity::Warning, "Шрифт не Times New Roman")],
            ..Default::default()
        });
        let config = ClientConfig::load_default().unwrap();
        let options = HeadlessOptions {
            order_number: Some("12".to_string()),
            notes: vec![("fix fonts".to_string(), "18.10.2026, 10:00:00".to_string())],
            ..Default::default()
        };
        let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(10, 0, 0).unwrap();

        let outcome = headless_audit_file(&client, &config, file.path(), &options, at).unwrap();
        assert_eq!(outcome.report.profile, "vkr_ru");
        assert_eq!(outcome.report.issues.len(), 1);
        assert!(outcome.display_issues.len() > 1);
        assert!(outcome.export_text.contains("Order number: 12"));
        assert!(outcome.export_text.contains("1. [18.10.2026, 10:00:00] fix fonts"));
    }

    #[test]
    fn blank_note_does_not_lose_the_report() {
        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        file.write_all(b"%PDF-1.7").unwrap();

        let client = CannedClient(Report {
            issues: vec![Issue::new(Severity::Info, "Заголовок без точки")],
            ..Default::default()
        });
        let config = ClientConfig::load_default().unwrap();
        let options = HeadlessOptions {
            notes: vec![
                ("   ".to_string(), "18.10.2026, 10:00:00".to_string()),
                ("recheck headings".to_string(), "18.10.2026, 10:01:00".to_string()),
            ],
            ..Default::default()
        };
        let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(10, 0, 0).unwrap();

        let outcome = headless_audit_file(&client, &config, file.path(), &options, at).unwrap();
        assert_eq!(outcome.report.issues.len(), 1);
        assert!(outcome.export_text.contains("1. [18.10.2026, 10:01:00] recheck headings"));
        assert!(!outcome.export_text.contains("2. [18.10.2026"));
    }

    #[test]
    fn rejects_unsupported_extension_before_request() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let client = CannedClient(Report::default());
        let config = ClientConfig::load_default().unwrap();
        let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(10, 0, 0).unwrap();
        let err = headless_audit_file(&client, &config, file.path(), &HeadlessOptions::default(), at).unwrap_err();
        assert!(matches!(err, VerifyflowError::Input(_)));
    }
}
