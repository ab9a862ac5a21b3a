// File: verifyflow-core/src/validators.rs
//! Programmatic validation of the free-text order number field.
//!
//! The validator is independent of the audit service. Its findings are shaped
//! like audit issues so they can be merged into the displayed issue list, and
//! they never block submitting a document.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{Issue, Severity};

pub const RULE_MISSING: &str = "OrderNumber.Missing";
pub const RULE_TOO_SHORT: &str = "OrderNumber.TooShort";
pub const RULE_FORMAT: &str = "OrderNumber.Format";
pub const RULE_INVALID_CHARACTERS: &str = "OrderNumber.InvalidCharacters";

pub const MSG_MISSING: &str = "Order number missing";
pub const MSG_TOO_SHORT: &str = "Order number is too short";
pub const MSG_FORMAT: &str = "Order number has a non-standard format";
pub const MSG_INVALID_CHARACTERS: &str = "Order number contains invalid characters";

/// Shortest order number accepted, in characters.
pub const MIN_ORDER_NUMBER_LENGTH: usize = 3;

// Number part, then "/" and a 2-4 digit year, optionally "-YYYY" or "/YYYY".
static ORDER_NUMBER_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\d\s./-]+/\d{2,4}(?:[-/]\d{2,4})?$").unwrap());

static DISALLOWED_CHARACTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\d ./-]").unwrap());

/// Outcome of validating one order number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderNumberValidation {
    pub is_valid: bool,
    /// Blocking findings, all critical.
    pub errors: Vec<Issue>,
    /// Non-blocking findings, all warnings.
    pub warnings: Vec<Issue>,
}

impl OrderNumberValidation {
    /// Errors followed by warnings, ready to merge into a display list.
    pub fn into_issues(self) -> Vec<Issue> {
        let mut issues = self.errors;
        issues.extend(self.warnings);
        issues
    }

    pub fn has_format_warning(&self) -> bool {
        self.warnings.iter().any(|w| w.rule.as_deref() == Some(RULE_FORMAT))
    }
}

/// Validates an order number.
///
/// Blank input yields a single "missing" warning and is still valid. Otherwise
/// the trimmed text is checked against every rule and all findings are
/// reported, not just the first.
///
/// # Arguments
///
/// * `text` - The raw field content.
///
/// # Returns
///
/// An [`OrderNumberValidation`] whose `is_valid` is true exactly when there are no errors.
pub fn validate_order_number(text: &str) -> OrderNumberValidation {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return OrderNumberValidation {
            is_valid: true,
            errors: Vec::new(),
            warnings: vec![synthetic(Severity::Warning, MSG_MISSING, RULE_MISSING, None)],
        };
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if trimmed.chars().count() < MIN_ORDER_NUMBER_LENGTH {
        errors.push(synthetic(Severity::Critical, MSG_TOO_SHORT, RULE_TOO_SHORT, Some(trimmed)));
    }

    if !ORDER_NUMBER_FORMAT.is_match(trimmed) {
        warnings.push(synthetic(Severity::Warning, MSG_FORMAT, RULE_FORMAT, Some(trimmed)));
    }

    if DISALLOWED_CHARACTER.is_match(trimmed) {
        errors.push(synthetic(
            Severity::Critical,
            MSG_INVALID_CHARACTERS,
            RULE_INVALID_CHARACTERS,
            Some(trimmed),
        ));
    }

    OrderNumberValidation { is_valid: errors.is_empty(), errors, warnings }
}

fn synthetic(severity: Severity, message: &str, rule: &str, evidence: Option<&str>) -> Issue {
    let issue = Issue::new(severity, message).with_rule(rule);
    match evidence {
        Some(text) => issue.with_evidence(text),
        None => issue,
    }
}
