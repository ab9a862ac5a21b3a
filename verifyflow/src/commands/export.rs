// verifyflow/src/commands/export.rs
//! `export` command: render the text export of a saved JSON report offline.

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use std::fs;
use std::io::{self, Write};

use verifyflow_core::{export_report, Annotation, ExportContext, Report, ANNOTATION_TIME_FORMAT};

use crate::cli::ExportCommand;
use crate::commands::{info_msg, warn_msg};
use crate::ui::theme::ThemeMap;

pub fn run_export(cmd: &ExportCommand, theme_map: &ThemeMap) -> Result<()> {
    let raw = fs::read_to_string(&cmd.report)
        .with_context(|| format!("Failed to read report file {}", cmd.report.display()))?;
    let report = Report::from_json(&raw)
        .with_context(|| format!("Failed to parse report file {}", cmd.report.display()))?;
    info!("Loaded report with {} issues from {}", report.issues.len(), cmd.report.display());

    let now = Local::now();
    let stamp = now.format(ANNOTATION_TIME_FORMAT).to_string();
    let mut annotations = Vec::new();
    for note in &cmd.notes {
        let text = note.trim();
        if text.is_empty() {
            warn_msg("Ignoring an empty note.", theme_map);
            continue;
        }
        annotations.push(Annotation { text: text.to_string(), timestamp: stamp.clone() });
    }

    let ctx = ExportContext {
        generated_at: now.naive_local(),
        source_filename: cmd.source_name.clone(),
        order_number: cmd.order_number.clone(),
    };
    let text = export_report(&report, &annotations, &ctx);

    match &cmd.output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write export file {}", path.display()))?;
            info_msg(format!("Report exported to {}", path.display()), theme_map);
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writer.write_all(text.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}
