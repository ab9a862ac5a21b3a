// verifyflow/src/commands/validate.rs
//! `validate-order` command.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use verifyflow_core::{hint_for, validate_order_number};

use crate::commands::CommandError;
use crate::ui::output_format::{paint, print_success_message};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Prints the validator's findings. Fails when the number has errors;
/// warnings alone do not.
pub fn run_validate_order<W: Write>(text: &str, writer: &mut W, theme_map: &ThemeMap, supports_color: bool) -> Result<()> {
    let validation = validate_order_number(text);
    let is_valid = validation.is_valid;
    let error_count = validation.errors.len();

    for issue in validation.into_issues() {
        let line = format!("[{}] {}", issue.severity.label(), issue.message);
        writeln!(writer, "{}", paint(&line, ThemeEntry::for_severity(issue.severity), theme_map, supports_color))?;
        for hint in hint_for(&issue).lines() {
            writeln!(writer, "{}", paint(&format!("   {}", hint), ThemeEntry::Hint, theme_map, supports_color))?;
        }
    }

    if is_valid {
        print_success_message(writer, "Order number is valid.", theme_map, supports_color)?;
        Ok(())
    } else {
        Err(CommandError::InvalidOrderNumber(error_count).into())
    }
}

/// Entry point used by the binary: writes to stdout.
pub fn run(text: &str, theme_map: &ThemeMap) -> Result<()> {
    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    run_validate_order(text, &mut writer, theme_map, supports_color)
}
