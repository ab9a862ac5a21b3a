// verifyflow/src/commands/check.rs
//! `check` command: submit a document, show the report, optionally export it.

use anyhow::{Context, Result};
use chrono::Local;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use verifyflow_core::{
    export_filename, AuditClient, ClientConfig, ReportSession, Upload, VerifyflowError,
};

use crate::cli::CheckCommand;
use crate::commands::{info_msg, warn_msg, CommandError};
use crate::ui::report_view;
use crate::ui::theme::ThemeMap;

/// Runs one audit and renders the outcome.
pub fn run_check(
    cmd: &CheckCommand,
    config: &ClientConfig,
    client: &dyn AuditClient,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting check of {}", cmd.file.display());

    let upload = Upload::from_path(&cmd.file, &config.allowed_extensions)
        .with_context(|| format!("Cannot submit {}", cmd.file.display()))?;
    let profile = cmd.profile.as_deref().unwrap_or(config.default_profile.as_str());

    let mut session = ReportSession::new();
    session.select_file(upload.file_name.clone());
    if let Some(order) = &cmd.order_number {
        session.set_order_number(order.clone());
    }

    info_msg(format!("Auditing '{}' with profile '{}'...", upload.file_name, profile), theme_map);
    let outcome = session.run_audit(client, &upload, profile).map(|_| ());
    if let Err(err) = outcome {
        return Err(match err {
            VerifyflowError::Transport(_) => {
                CommandError::AuditFailed(session.last_error().unwrap_or_default().to_string()).into()
            }
            other => anyhow::Error::new(other),
        });
    }

    session.set_filter(cmd.filter);
    for note in &cmd.notes {
        if session.add_annotation_now(note).is_err() {
            warn_msg("Ignoring an empty note.", theme_map);
        }
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json {
        let report = session.report().context("No report after a successful audit")?;
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        writeln!(writer, "{}", json)?;
    } else {
        let supports_color = stdout.is_terminal();
        report_view::print_report(&mut writer, &session, theme_map, supports_color)?;
    }
    writer.flush()?;

    if let Some(path) = export_target(cmd, config, &upload.file_name) {
        let text = session.export(Local::now().naive_local())?;
        fs::write(&path, text).with_context(|| format!("Failed to write export file {}", path.display()))?;
        info_msg(format!("Report exported to {}", path.display()), theme_map);
    }

    debug!("Check finished with {} display issues", session.display_issues().len());
    Ok(())
}

fn export_target(cmd: &CheckCommand, config: &ClientConfig, file_name: &str) -> Option<PathBuf> {
    if let Some(path) = &cmd.export {
        return Some(path.clone());
    }
    cmd.export_dir
        .as_ref()
        .map(|dir| dir.join(export_filename(&config.export_prefix, file_name, Local::now().date_naive())))
}
