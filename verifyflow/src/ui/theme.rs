//! Module for managing the terminal colour theme.
//!
//! A theme maps each logical output element to a 16-colour ANSI foreground.
//! Themes are YAML files; entries a file leaves out keep their default colour.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use verifyflow_core::Severity;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles.
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Issue lines by severity.
    SeverityCritical,
    SeverityWarning,
    SeverityInfo,
    /// Remediation hint lines under an issue.
    Hint,
    /// Bucket labels in the location table.
    LocationLabel,
    /// The "Showing N of M issues" line.
    Counter,
    Annotation,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 12] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::SeverityCritical,
        ThemeEntry::SeverityWarning,
        ThemeEntry::SeverityInfo,
        ThemeEntry::Hint,
        ThemeEntry::LocationLabel,
        ThemeEntry::Counter,
        ThemeEntry::Annotation,
    ];

    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => ThemeEntry::SeverityCritical,
            Severity::Warning => ThemeEntry::SeverityWarning,
            Severity::Info => ThemeEntry::SeverityInfo,
        }
    }
}

/// Represents an ANSI color that can be used in the theme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match to_ansi(&lower) {
            Some(_) => Ok(ThemeColor::Named(lower)),
            None => Err(ParseThemeColorError),
        }
    }
}

impl ThemeColor {
    fn named(name: &str) -> Self {
        ThemeColor::Named(name.to_string())
    }

    /// Converts the colour into `owo_colors::AnsiColors`; unknown names render white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => to_ansi(&name.to_lowercase()).unwrap_or(AnsiColors::White),
        }
    }
}

fn to_ansi(name: &str) -> Option<AnsiColors> {
    let color = match name {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "brightblack" => AnsiColors::BrightBlack,
        "brightred" => AnsiColors::BrightRed,
        "brightgreen" => AnsiColors::BrightGreen,
        "brightyellow" => AnsiColors::BrightYellow,
        "brightblue" => AnsiColors::BrightBlue,
        "brightmagenta" => AnsiColors::BrightMagenta,
        "brightcyan" => AnsiColors::BrightCyan,
        "brightwhite" => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

impl ThemeStyle {
    fn fg(name: &str) -> Self {
        ThemeStyle { fg: Some(ThemeColor::named(name)) }
    }

    /// Loads a theme file and fills the entries it omits from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    pub fn default_theme_map() -> ThemeMap {
        HashMap::from([
            (ThemeEntry::Header, Self::fg("brightwhite")),
            (ThemeEntry::Success, Self::fg("green")),
            (ThemeEntry::Info, Self::fg("cyan")),
            (ThemeEntry::Warn, Self::fg("yellow")),
            (ThemeEntry::Error, Self::fg("red")),
            (ThemeEntry::SeverityCritical, Self::fg("brightred")),
            (ThemeEntry::SeverityWarning, Self::fg("yellow")),
            (ThemeEntry::SeverityInfo, Self::fg("blue")),
            (ThemeEntry::Hint, Self::fg("brightblack")),
            (ThemeEntry::LocationLabel, Self::fg("magenta")),
            (ThemeEntry::Counter, Self::fg("white")),
            (ThemeEntry::Annotation, Self::fg("cyan")),
        ])
    }
}

/// Location of the per-user theme picked up when no `--theme` is given.
pub fn user_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("verifyflow").join("theme.yaml"))
}

/// Loads the explicit theme, else the per-user theme if present, else the default.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        return ThemeStyle::load_from_file(path);
    }
    match user_theme_path().filter(|p| p.is_file()) {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.get(&entry).and_then(|s| s.fg.as_ref()).is_some(), "{:?} has no colour", entry);
        }
    }

    #[test]
    fn theme_file_overrides_only_listed_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"severity_critical:\n  fg: magenta\n").unwrap();

        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(theme[&ThemeEntry::SeverityCritical].fg.as_ref().unwrap().to_ansi_color(), AnsiColors::Magenta);
        assert_eq!(theme[&ThemeEntry::Error].fg.as_ref().unwrap().to_ansi_color(), AnsiColors::Red);
    }
}
