// verifyflow/src/commands/mod.rs
//! Subcommand implementations and the stderr message helpers they share.

pub mod check;
pub mod export;
pub mod health;
pub mod validate;

use is_terminal::IsTerminal;
use std::io;
use thiserror::Error;

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Failures that end a command with a non-zero exit code after the
/// command has already explained itself.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Verbatim failure message from the audit service.
    #[error("{0}")]
    AuditFailed(String),

    #[error("Order number has {0} error(s)")]
    InvalidOrderNumber(usize),

    #[error("Audit service at {0} is not healthy")]
    Unhealthy(String),
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}
