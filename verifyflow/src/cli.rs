// verifyflow/src/cli.rs
//! This file defines the command-line interface (CLI) for the verifyflow application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use verifyflow_core::SeverityFilter;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "verifyflow",
    author = "VerifyFlow Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Audit a thesis document and get an actionable report",
    long_about = "VerifyFlow submits a .docx or .pdf document to the audit service, groups the findings by where they occur in the document, attaches remediation hints to each one and can export the whole report as a plain-text checklist.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all log output.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a client configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, help = "Path to a client configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", env = "VERIFYFLOW_THEME", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// Base URL of the audit service; overrides configuration and environment.
    #[arg(long = "service-url", value_name = "URL", global = true, help = "Base URL of the audit service.")]
    pub service_url: Option<String>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `verifyflow` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submits a document to the audit service and prints the report.
    #[command(about = "Submits a document to the audit service and prints the report.")]
    Check(CheckCommand),

    /// Renders the text export of a previously saved JSON report.
    #[command(about = "Renders the text export of a previously saved JSON report.")]
    Export(ExportCommand),

    /// Checks an order number locally, without contacting the service.
    #[command(name = "validate-order", about = "Checks an order number locally, without contacting the service.")]
    ValidateOrder {
        /// The order number as written in the document.
        #[arg(value_name = "TEXT", allow_hyphen_values = true, help = "The order number as written in the document.")]
        text: String,
    },

    /// Probes the audit service.
    #[command(about = "Probes the audit service.")]
    Health,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// The document to audit (.docx or .pdf).
    #[arg(value_name = "FILE", help = "The document to audit (.docx or .pdf).")]
    pub file: PathBuf,

    /// Audit profile to apply.
    #[arg(long = "profile", short = 'p', value_name = "ID", help = "Audit profile to apply (defaults to the configured profile).")]
    pub profile: Option<String>,

    /// Order number as written in the document.
    #[arg(long = "order-number", short = 'o', value_name = "TEXT", allow_hyphen_values = true, help = "Order number to validate alongside the report.")]
    pub order_number: Option<String>,

    /// Show only issues of one severity.
    #[arg(long = "filter", short = 'f', value_name = "SEVERITY", default_value = "all", help = "Show only issues of one severity: all, critical, warning or info.")]
    pub filter: SeverityFilter,

    /// Notes to attach to the report. Repeatable.
    #[arg(long = "note", short = 'n', value_name = "TEXT", help = "Attach a note to the report (repeatable).")]
    pub notes: Vec<String>,

    /// Write the text export to this file.
    #[arg(long = "export", short = 'e', value_name = "PATH", conflicts_with = "export_dir", help = "Write the text export to this file.")]
    pub export: Option<PathBuf>,

    /// Write the text export into this directory under a generated name.
    #[arg(long = "export-dir", value_name = "DIR", help = "Write the text export into this directory under a generated name.")]
    pub export_dir: Option<PathBuf>,

    /// Print the raw report as JSON instead of the formatted view.
    #[arg(long = "json", help = "Print the raw report as JSON instead of the formatted view.")]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportCommand {
    /// A report saved with `check --json`.
    #[arg(long = "report", short = 'r', value_name = "FILE", help = "A JSON report saved with `check --json`.")]
    pub report: PathBuf,

    /// Name of the audited document, shown in the export header.
    #[arg(long = "source-name", short = 's', value_name = "NAME", help = "Name of the audited document.")]
    pub source_name: String,

    /// Order number shown in the export header.
    #[arg(long = "order-number", short = 'o', value_name = "TEXT", allow_hyphen_values = true, help = "Order number shown in the export header.")]
    pub order_number: Option<String>,

    /// Notes to attach. Repeatable.
    #[arg(long = "note", short = 'n', value_name = "TEXT", help = "Attach a note to the export (repeatable).")]
    pub notes: Vec<String>,

    /// Write the export to this file instead of stdout.
    #[arg(long = "output", value_name = "PATH", help = "Write the export to this file instead of stdout.")]
    pub output: Option<PathBuf>,
}
