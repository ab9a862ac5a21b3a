// verifyflow/src/ui/output_format.rs
//! Themed message helpers shared by all commands.
//!
//! Every helper takes the writer and a `supports_color` flag so callers decide
//! whether ANSI sequences are emitted (only when the stream is a terminal).

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme colour for `entry` when `enable` is set.
pub fn paint(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable: bool) -> String {
    if !enable {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_prefixed<W: Write>(
    writer: &mut W,
    prefix: &str,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", paint(&format!("{}{}", prefix, msg), entry, theme, supports_color))
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Info, theme, supports_color)
}

pub fn print_success_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "", msg, ThemeEntry::Success, theme, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Warning: ", msg, ThemeEntry::Warn, theme, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_prefixed(writer, "Error: ", msg, ThemeEntry::Error, theme, supports_color)
}

/// A heading followed by an underline of the same width.
pub fn print_heading<W: Write>(writer: &mut W, title: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(title, ThemeEntry::Header, theme, supports_color))?;
    writeln!(writer, "{}", "-".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_no_escape_sequences() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Error: boom\n");
    }

    #[test]
    fn coloured_output_wraps_text() {
        let theme = ThemeStyle::default_theme_map();
        let painted = paint("x", ThemeEntry::Error, &theme, true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains('x'));
    }
}
