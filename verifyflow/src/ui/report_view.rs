// verifyflow/src/ui/report_view.rs
//! Terminal view of an audit session: summary, location distribution,
//! filtered issue list with hints, and annotations.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use std::io::Write;

use verifyflow_core::export::SPREAD_ACROSS_DOCUMENT;
use verifyflow_core::{distribution, hint_for, ReportSession};

use crate::ui::output_format::{paint, print_heading};
use crate::ui::theme::{ThemeEntry, ThemeMap};

const HINT_INDENT: &str = "   ";

/// Writes the session's current report. Does nothing when there is no report.
pub fn print_report<W: Write>(writer: &mut W, session: &ReportSession, theme: &ThemeMap, supports_color: bool) -> Result<()> {
    let Some(report) = session.report() else {
        return Ok(());
    };

    print_heading(writer, "AUDIT REPORT", theme, supports_color)?;
    writeln!(writer, "Profile: {}", report.profile)?;
    if let Some(file) = session.selected_file() {
        writeln!(writer, "File: {}", file)?;
    }
    if let Some(order) = session.order_number().map(str::trim).filter(|o| !o.is_empty()) {
        writeln!(writer, "Order number: {}", order)?;
    }
    writeln!(writer)?;

    let counts = report.summary_counts();
    let mut summary = Table::new();
    summary
        .load_preset(UTF8_FULL)
        .set_header(vec!["Total", "Critical", "Warnings", "Info"])
        .add_row(vec![
            Cell::new(counts.total),
            Cell::new(counts.critical),
            Cell::new(counts.warning),
            Cell::new(counts.info),
        ]);
    writeln!(writer, "{}", summary)?;
    writeln!(writer)?;

    print_heading(writer, "ISSUES BY LOCATION", theme, supports_color)?;
    let buckets = distribution(&report.issues);
    if buckets.is_empty() {
        writeln!(writer, "{}", SPREAD_ACROSS_DOCUMENT)?;
    } else {
        let mut locations = Table::new();
        locations.load_preset(UTF8_FULL).set_header(vec!["Location", "Issues"]);
        for (label, count) in &buckets {
            locations.add_row(vec![
                Cell::new(paint(label, ThemeEntry::LocationLabel, theme, supports_color)),
                Cell::new(count),
            ]);
        }
        writeln!(writer, "{}", locations)?;
    }
    writeln!(writer)?;

    let view = session.filter_view();
    print_heading(writer, "ISSUES", theme, supports_color)?;
    writeln!(writer, "{}", paint(&format!("{} (filter: {})", view.counter(), view.filter), ThemeEntry::Counter, theme, supports_color))?;
    for (index, issue) in view.visible.iter().enumerate() {
        let line = format!("{}. [{}] {}", index + 1, issue.severity.label(), issue.message);
        writeln!(writer, "{}", paint(&line, ThemeEntry::for_severity(issue.severity), theme, supports_color))?;
        for hint in hint_for(issue).lines() {
            writeln!(writer, "{}", paint(&format!("{}{}", HINT_INDENT, hint), ThemeEntry::Hint, theme, supports_color))?;
        }
    }

    if !session.annotations().is_empty() {
        writeln!(writer)?;
        print_heading(writer, "ANNOTATIONS", theme, supports_color)?;
        for (index, note) in session.annotations().iter().enumerate() {
            let line = format!("{}. [{}] {}", index + 1, note.timestamp, note.text);
            writeln!(writer, "{}", paint(&line, ThemeEntry::Annotation, theme, supports_color))?;
        }
    }
    Ok(())
}
