//! Hints for the order number field.

use crate::hints::{FamilyKind, HintFamily};
use crate::keywords::{
    contains_any, is_order_number_issue, INVALID_CHARACTERS_KEYWORDS, NON_STANDARD_FORMAT_KEYWORDS,
    NOT_FOUND_KEYWORDS, TOO_SHORT_KEYWORDS,
};
use crate::report::Issue;

pub const NUMBER_NOT_FOUND: &str = "The order number was not found. Look in the document header (the \
approval block at the top of the title page) and copy the number exactly as issued, for example \
\"123/2024\", \"45-ст/2024\" or \"12/2023-2024\".";

pub const ACCEPTED_FORMATS: &str = "Use one of the accepted order number formats:
  <number>/<year>            e.g. 123/2024
  <number>-<letters>/<year>  e.g. 45-ст/2024
  <number>/<year>-<year>     e.g. 12/2023-2024";

pub const ALLOWED_CHARACTERS: &str = "The order number may only contain digits (0-9), the period (.), \
the hyphen (-) and the slash (/), plus letters and spaces. Remove any other characters.";

pub const MINIMUM_LENGTH: &str = "The order number is too short: it needs at least 3 characters, for \
example \"1/24\".";

pub const CHECK_ORDER_NUMBER: &str = "Check the order number against the approval order issued by the \
department.";

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderNumberFamily;

impl HintFamily for OrderNumberFamily {
    fn kind(&self) -> FamilyKind {
        FamilyKind::OrderNumber
    }

    fn matches(&self, issue: &Issue) -> bool {
        is_order_number_issue(&issue.message, issue.rule.as_deref())
    }

    fn guidance(&self, issue: &Issue) -> Vec<String> {
        let lower = issue.message.to_lowercase();
        let mut hints = Vec::new();

        if contains_any(&lower, NOT_FOUND_KEYWORDS) {
            hints.push(NUMBER_NOT_FOUND.to_string());
        }
        if contains_any(&lower, NON_STANDARD_FORMAT_KEYWORDS) {
            hints.push(ACCEPTED_FORMATS.to_string());
        }
        if contains_any(&lower, INVALID_CHARACTERS_KEYWORDS) {
            hints.push(ALLOWED_CHARACTERS.to_string());
        }
        if contains_any(&lower, TOO_SHORT_KEYWORDS) {
            hints.push(MINIMUM_LENGTH.to_string());
        }
        if hints.is_empty() {
            hints.push(CHECK_ORDER_NUMBER.to_string());
        }
        hints
    }
}
