//! Plain-text export of an audit report.
//!
//! The document has a fixed section order: header, summary, location
//! distribution, detailed issues with hints, annotations (only when present),
//! fix checklist and a closing instructions block. Identical input always
//! produces identical output; the generation time is supplied by the caller.
//!
//! License: MIT OR Apache-2.0

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::path::Path;

use crate::hints::hint_for;
use crate::location::distribution;
use crate::report::{Annotation, Report};

pub const REPORT_TITLE: &str = "DOCUMENT AUDIT REPORT";
pub const SPREAD_ACROSS_DOCUMENT: &str = "Issues are spread across the document.";
pub const NO_ISSUES: &str = "No issues found.";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NEXT_STEPS: [&str; 5] = [
    "Open the document in your editor.",
    "Apply the fixes described in the detailed issues section.",
    "Check off each checklist item as you fix it.",
    "Run the audit again to confirm the issues are resolved.",
    "Save the final version of the document.",
];

const HINT_INDENT: &str = "   ";

/// Values that do not come from the report itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContext {
    pub generated_at: NaiveDateTime,
    pub source_filename: String,
    pub order_number: Option<String>,
}

/// Serializes a report and its annotations into the export document.
pub fn export_report(report: &Report, annotations: &[Annotation], ctx: &ExportContext) -> String {
    let mut out: Vec<String> = Vec::new();

    write_header(&mut out, report, ctx);
    write_summary(&mut out, report);
    write_distribution(&mut out, report);
    write_issues(&mut out, report);
    if !annotations.is_empty() {
        write_annotations(&mut out, annotations);
    }
    write_checklist(&mut out, report);
    write_next_steps(&mut out);

    debug!(
        "Exported report with {} issues and {} annotations ({} lines)",
        report.issues.len(),
        annotations.len(),
        out.len()
    );

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn heading(out: &mut Vec<String>, title: &str) {
    out.push(title.to_string());
    out.push("-".repeat(title.chars().count()));
}

fn write_header(out: &mut Vec<String>, report: &Report, ctx: &ExportContext) {
    out.push(REPORT_TITLE.to_string());
    out.push("=".repeat(REPORT_TITLE.len()));
    out.push(format!("Generated: {}", ctx.generated_at.format(TIMESTAMP_FORMAT)));
    out.push(format!("Profile: {}", report.profile));
    out.push(format!("File: {}", ctx.source_filename));
    if let Some(order) = ctx.order_number.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        out.push(format!("Order number: {}", order));
    }
    if let Some(format) = &report.format {
        match report.pages {
            Some(1) => out.push(format!("Document: {}, 1 page", format)),
            Some(pages) => out.push(format!("Document: {}, {} pages", format, pages)),
            None => out.push(format!("Document: {}", format)),
        }
    }
    let font = report.detected.most_common.as_ref().and_then(|m| {
        m.font_name.as_ref().map(|name| match m.font_size {
            Some(size) => format!("{}, {} pt", name, size),
            None => name.clone(),
        })
    });
    if let Some(font) = font {
        out.push(format!("Dominant font: {}", font));
    }
    out.push(String::new());
}

fn write_summary(out: &mut Vec<String>, report: &Report) {
    let counts = report.summary_counts();
    heading(out, "SUMMARY");
    out.push(format!("Total issues: {}", counts.total));
    out.push(format!("Critical: {}", counts.critical));
    out.push(format!("Warnings: {}", counts.warning));
    out.push(format!("Info: {}", counts.info));
    out.push(String::new());
}

fn write_distribution(out: &mut Vec<String>, report: &Report) {
    heading(out, "ISSUES BY LOCATION");
    let buckets = distribution(&report.issues);
    if buckets.is_empty() {
        out.push(SPREAD_ACROSS_DOCUMENT.to_string());
    } else {
        for (label, count) in buckets {
            out.push(format!("{}: {}", label, count));
        }
    }
    out.push(String::new());
}

fn write_issues(out: &mut Vec<String>, report: &Report) {
    heading(out, "DETAILED ISSUES");
    if report.issues.is_empty() {
        out.push(NO_ISSUES.to_string());
        out.push(String::new());
        return;
    }
    for (index, issue) in report.issues.iter().enumerate() {
        out.push(format!("{}. [{}] {}", index + 1, issue.severity.label(), issue.message));
        for line in hint_for(issue).lines() {
            out.push(format!("{}{}", HINT_INDENT, line));
        }
        out.push(String::new());
    }
}

fn write_annotations(out: &mut Vec<String>, annotations: &[Annotation]) {
    heading(out, "ANNOTATIONS");
    for (index, note) in annotations.iter().enumerate() {
        out.push(format!("{}. [{}] {}", index + 1, note.timestamp, note.text));
    }
    out.push(String::new());
}

fn write_checklist(out: &mut Vec<String>, report: &Report) {
    heading(out, "FIX CHECKLIST");
    for issue in &report.issues {
        out.push(format!("[ ] {}", issue.message));
    }
    out.push(String::new());
}

fn write_next_steps(out: &mut Vec<String>) {
    heading(out, "NEXT STEPS");
    for (index, step) in NEXT_STEPS.iter().enumerate() {
        out.push(format!("{}. {}", index + 1, step));
    }
}

/// Download name for an export: `<prefix>_<sanitized stem>_<YYYY-MM-DD>.txt`.
pub fn export_filename(prefix: &str, source_filename: &str, date: NaiveDate) -> String {
    let stem = Path::new(source_filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let stem = if sanitized.trim_matches('_').is_empty() { "document".to_string() } else { sanitized };
    format!("{}_{}_{}.txt", prefix, stem, date.format("%Y-%m-%d"))
}
