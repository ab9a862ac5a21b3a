//! Report session: the state of one audit workflow.
//!
//! The session owns the last report, the user's annotations, the severity
//! filter, the chosen file and the order number field. It is the only place
//! this state lives; every component receives it explicitly.
//!
//! At most one audit request is in flight per session. Whatever the outcome,
//! finishing an audit returns the session to idle so the user can resubmit.

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};

use crate::client::AuditClient;
use crate::errors::{SessionError, TransportError, VerifyflowError};
use crate::export::{export_report, ExportContext};
use crate::filter::{FilterView, SeverityFilter};
use crate::report::{Annotation, Issue, Report};
use crate::upload::Upload;
use crate::validators::validate_order_number;

/// Rendering used for annotation timestamps (day.month.year, time).
pub const ANNOTATION_TIME_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

const UNNAMED_SOURCE: &str = "document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuditState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct ReportSession {
    report: Option<Report>,
    annotations: Vec<Annotation>,
    filter: SeverityFilter,
    selected_file: Option<String>,
    order_number: Option<String>,
    state: AuditState,
    last_error: Option<String>,
    // Report issues followed by order-number findings.
    display: Vec<Issue>,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn filter(&self) -> SeverityFilter {
        self.filter
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn order_number(&self) -> Option<&str> {
        self.order_number.as_deref()
    }

    pub fn state(&self) -> AuditState {
        self.state
    }

    /// Message of the last failed audit, shown instead of the report.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Records a newly chosen file. Everything tied to the previous file is dropped.
    pub fn select_file(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        debug!("File selected: {}", file_name);
        self.selected_file = Some(file_name);
        self.report = None;
        self.annotations.clear();
        self.filter = SeverityFilter::All;
        self.last_error = None;
        self.refresh_display();
    }

    pub fn set_order_number(&mut self, text: impl Into<String>) {
        self.order_number = Some(text.into());
        self.refresh_display();
    }

    /// Marks an audit request as started.
    pub fn begin_audit(&mut self) -> Result<(), SessionError> {
        if self.state == AuditState::InFlight {
            warn!("Audit submission rejected: a request is already in flight");
            return Err(SessionError::AuditInFlight);
        }
        self.state = AuditState::InFlight;
        self.last_error = None;
        Ok(())
    }

    /// Completes the in-flight request. A successful report replaces the
    /// previous one wholesale and starts a fresh annotation list; a failure
    /// leaves the previous report untouched.
    pub fn finish_audit(&mut self, result: Result<Report, TransportError>) -> Result<&Report, VerifyflowError> {
        self.state = AuditState::Idle;
        match result {
            Ok(report) => {
                info!("Audit report received with {} issues", report.issues.len());
                self.annotations.clear();
                self.filter = SeverityFilter::All;
                self.last_error = None;
                let report = self.report.insert(report);
                self.display = merge_display(Some(&*report), self.order_number.as_deref());
                Ok(&*report)
            }
            Err(err) => {
                let message = err.display_message();
                warn!("Audit failed: {}", message);
                self.last_error = Some(message);
                Err(err.into())
            }
        }
    }

    /// Submits `upload` through `client` and records the outcome.
    pub fn run_audit(
        &mut self,
        client: &dyn AuditClient,
        upload: &Upload,
        profile: &str,
    ) -> Result<&Report, VerifyflowError> {
        if self.selected_file.as_deref() != Some(upload.file_name.as_str()) {
            self.select_file(upload.file_name.clone());
        }
        self.begin_audit()?;
        let result = client.check(upload, profile);
        self.finish_audit(result)
    }

    /// Appends a note with an explicit timestamp.
    pub fn add_annotation(&mut self, text: &str, timestamp: impl Into<String>) -> Result<&Annotation, SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyAnnotation);
        }
        self.annotations.push(Annotation { text: text.to_string(), timestamp: timestamp.into() });
        debug!("Annotation #{} added", self.annotations.len());
        self.annotations.last().ok_or(SessionError::EmptyAnnotation)
    }

    /// Appends a note stamped with the current local time.
    pub fn add_annotation_now(&mut self, text: &str) -> Result<&Annotation, SessionError> {
        let stamp = Local::now().format(ANNOTATION_TIME_FORMAT).to_string();
        self.add_annotation(text, stamp)
    }

    pub fn set_filter(&mut self, filter: SeverityFilter) {
        self.filter = filter;
    }

    /// Report issues followed by order-number findings, in display order.
    pub fn display_issues(&self) -> &[Issue] {
        &self.display
    }

    pub fn filter_view(&self) -> FilterView<'_> {
        self.filter.view(&self.display)
    }

    /// Exports the current report with the session's annotations.
    pub fn export(&self, generated_at: NaiveDateTime) -> Result<String, SessionError> {
        let report = self.report.as_ref().ok_or(SessionError::NoReport)?;
        let ctx = ExportContext {
            generated_at,
            source_filename: self.selected_file.clone().unwrap_or_else(|| UNNAMED_SOURCE.to_string()),
            order_number: self.order_number.clone(),
        };
        Ok(export_report(report, &self.annotations, &ctx))
    }

    /// Returns the session to its initial state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn refresh_display(&mut self) {
        self.display = merge_display(self.report.as_ref(), self.order_number.as_deref());
    }
}

fn merge_display(report: Option<&Report>, order_number: Option<&str>) -> Vec<Issue> {
    let mut issues: Vec<Issue> = report.map(|r| r.issues.clone()).unwrap_or_default();
    if let Some(text) = order_number {
        issues.extend(validate_order_number(text).into_issues());
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn report(messages: &[(&str, Severity)]) -> Report {
        Report {
            profile: "vkr_ru".to_string(),
            issues: messages.iter().map(|(m, s)| Issue::new(*s, *m)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn second_submission_is_rejected_while_in_flight() {
        let mut session = ReportSession::new();
        session.begin_audit().unwrap();
        assert_eq!(session.begin_audit(), Err(SessionError::AuditInFlight));
        session.finish_audit(Ok(report(&[]))).unwrap();
        assert_eq!(session.state(), AuditState::Idle);
        assert!(session.begin_audit().is_ok());
    }

    #[test]
    fn failure_returns_to_idle_and_keeps_previous_report() {
        let mut session = ReportSession::new();
        session.begin_audit().unwrap();
        session.finish_audit(Ok(report(&[("a", Severity::Info)]))).unwrap();

        session.begin_audit().unwrap();
        let err = session
            .finish_audit(Err(TransportError::Status { status: 400, body: "bad file".to_string() }))
            .unwrap_err();
        assert!(matches!(err, VerifyflowError::Transport(_)));
        assert_eq!(session.state(), AuditState::Idle);
        assert_eq!(session.last_error(), Some("bad file"));
        assert_eq!(session.report().map(|r| r.issues.len()), Some(1));
    }

    #[test]
    fn new_report_clears_annotations_and_filter() {
        let mut session = ReportSession::new();
        session.begin_audit().unwrap();
        session.finish_audit(Ok(report(&[("a", Severity::Warning)]))).unwrap();
        session.add_annotation("check page 3", "18.10.2026, 10:00:00").unwrap();
        session.set_filter(SeverityFilter::Only(Severity::Critical));

        session.begin_audit().unwrap();
        session.finish_audit(Ok(report(&[("b", Severity::Info)]))).unwrap();
        assert!(session.annotations().is_empty());
        assert_eq!(session.filter(), SeverityFilter::All);
    }

    #[test]
    fn selecting_a_file_resets_session_state() {
        let mut session = ReportSession::new();
        session.begin_audit().unwrap();
        session.finish_audit(Ok(report(&[("a", Severity::Warning)]))).unwrap();
        session.add_annotation("note", "t").unwrap();
        session.set_filter(SeverityFilter::Only(Severity::Warning));
        session.begin_audit().unwrap();
        let _ = session.finish_audit(Err(TransportError::Status { status: 500, body: "boom".to_string() }));
        assert_eq!(session.last_error(), Some("boom"));

        session.select_file("other.pdf");
        assert!(session.report().is_none());
        assert!(session.annotations().is_empty());
        assert_eq!(session.filter(), SeverityFilter::All);
        assert!(session.last_error().is_none());
        assert_eq!(session.selected_file(), Some("other.pdf"));
    }

    #[test]
    fn blank_annotation_is_rejected() {
        let mut session = ReportSession::new();
        assert_eq!(session.add_annotation("   ", "t").unwrap_err(), SessionError::EmptyAnnotation);
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn order_number_findings_follow_report_issues() {
        let mut session = ReportSession::new();
        session.set_order_number("ab");
        session.begin_audit().unwrap();
        session.finish_audit(Ok(report(&[("a", Severity::Warning)]))).unwrap();
        let display = session.display_issues();
        assert_eq!(display[0].message, "a");
        assert!(display[1..].iter().all(|i| i.rule.as_deref().map_or(false, |r| r.starts_with("OrderNumber."))));
    }

    #[test]
    fn export_requires_a_report() {
        let session = ReportSession::new();
        let now = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(session.export(now).unwrap_err(), SessionError::NoReport);
    }
}
