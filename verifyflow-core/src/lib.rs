// verifyflow-core/src/lib.rs
//! # VerifyFlow Core Library
//!
//! `verifyflow-core` holds the client-side logic of the document audit
//! workflow: it turns the audit service's raw report into something a person
//! can act on. Issues are grouped by where they occur, matched to a family of
//! fix-it hints, filtered by severity, and serialized into a plain-text
//! export. A local validator checks the order number the user typed in.
//!
//! The document analysis itself happens in the remote audit service; this
//! crate only submits files and interprets the answer.
//!
//! ## Modules
//!
//! * `report`: The report data model as received from the audit service.
//! * `location`: Maps location tokens and issue wording to human-readable groups.
//! * `keywords`: Keyword tables shared by the classifier and the hint families.
//! * `hints`: Ordered table of hint families; the first family that matches wins.
//! * `filter`: Severity filter over the issue list.
//! * `validators`: Local order-number validation, producing synthetic issues.
//! * `export`: Deterministic plain-text export and export file naming.
//! * `session`: The state of one audit workflow.
//! * `client`: `AuditClient` trait and its blocking HTTP implementation.
//! * `upload`: Extension and emptiness gate for submitted files.
//! * `config`: Layered client configuration.
//! * `headless`: One-shot audit and export.
//! * `errors`: Error taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use verifyflow_core::{export_report, ExportContext, Issue, Report, Severity};
//!
//! let report = Report {
//!     profile: "vkr_ru".to_string(),
//!     issues: vec![Issue::new(Severity::Critical, "ФИО студента не найдено").with_location("title_page")],
//!     ..Default::default()
//! };
//! let ctx = ExportContext {
//!     generated_at: chrono::NaiveDate::from_ymd_opt(2026, 10, 18)
//!         .unwrap()
//!         .and_hms_opt(12, 0, 0)
//!         .unwrap(),
//!     source_filename: "thesis.docx".to_string(),
//!     order_number: None,
//! };
//! let text = export_report(&report, &[], &ctx);
//! assert!(text.contains("Name errors: 1"));
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod client;
pub mod config;
pub mod errors;
pub mod export;
pub mod filter;
pub mod headless;
pub mod hints;
pub mod keywords;
pub mod location;
pub mod report;
pub mod session;
pub mod upload;
pub mod validators;

/// Re-exports the report data model.
pub use report::{
    Annotation, Detected, DominantFormatting, Issue, Report, SampleHeading, Severity, Summary, SummaryCounts,
};

/// Re-exports the error taxonomy.
pub use errors::{InputError, SessionError, TransportError, VerifyflowError};

pub use client::{AuditClient, HttpAuditClient};
pub use config::{config_candidate_paths, ClientConfig, PartialClientConfig};
pub use export::{export_filename, export_report, ExportContext};
pub use filter::{FilterView, SeverityFilter};
pub use headless::{headless_audit_file, HeadlessOptions, HeadlessOutcome};
pub use hints::{hint_for, match_family, FamilyKind, HintBlock, HintFamily, HintTable};
pub use location::{bucket_for, classify, distribution, LocationToken};
pub use session::{AuditState, ReportSession, ANNOTATION_TIME_FORMAT};
pub use upload::{check_extension, Upload};
pub use validators::{validate_order_number, OrderNumberValidation};
