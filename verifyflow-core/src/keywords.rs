//! Keyword tables and marker predicates for issue messages.
//!
//! The audit service words its findings in Russian; English equivalents are
//! accepted as well. All matching is case-insensitive substring matching on
//! lowercased text, except the initials pattern which is a regex.

use lazy_static::lazy_static;
use regex::Regex;

/// Full-name markers ("ФИО").
pub const FULL_NAME_KEYWORDS: &[&str] = &["фио", "full name", "fullname"];

/// Surname markers.
pub const SURNAME_KEYWORDS: &[&str] = &["фамили", "surname", "last name"];

/// Grammatical case markers.
pub const CASE_KEYWORDS: &[&str] = &[
    "падеж",
    "родительн",
    "именительн",
    "grammatical case",
    "genitive",
    "nominative",
];

/// Abbreviation markers.
pub const ABBREVIATION_KEYWORDS: &[&str] = &["сокращ", "инициал", "abbreviat", "initials"];

/// Student role markers.
pub const STUDENT_KEYWORDS: &[&str] = &["студент", "обучающ", "student"];

/// Supervisor role markers.
pub const SUPERVISOR_KEYWORDS: &[&str] = &["руководител", "supervisor"];

/// "Not found" markers.
pub const NOT_FOUND_KEYWORDS: &[&str] = &["не найден", "отсутств", "not found", "missing"];

/// Order-number markers in messages.
pub const ORDER_NUMBER_KEYWORDS: &[&str] = &["номер приказа", "приказ", "order number", "directive"];

/// Rule identifier prefix used by the order-number validator.
pub const ORDER_NUMBER_RULE_MARKER: &str = "ordernumber";

pub const NON_STANDARD_FORMAT_KEYWORDS: &[&str] = &["нестандартн", "формат", "non-standard", "format"];

pub const INVALID_CHARACTERS_KEYWORDS: &[&str] = &["недопустим", "invalid char"];

pub const TOO_SHORT_KEYWORDS: &[&str] = &["коротк", "too short"];

lazy_static! {
    /// Initials written with periods, e.g. "И.О." or "I. O.".
    static ref INITIALS_RE: Regex = Regex::new(r"\b\p{Lu}\.\s?\p{Lu}\.").unwrap();
}

/// True if the lowercased text contains any keyword of the group.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text_lower.contains(keyword))
}

/// Markers found in one issue message. Computed once, then consulted by the
/// classifier and the name-format hint family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameMarkers {
    pub full_name: bool,
    pub surname: bool,
    pub case: bool,
    pub abbreviation: bool,
    pub student: bool,
    pub supervisor: bool,
    pub not_found: bool,
}

impl NameMarkers {
    pub fn scan(message: &str) -> Self {
        let lower = message.to_lowercase();
        Self {
            full_name: contains_any(&lower, FULL_NAME_KEYWORDS),
            surname: contains_any(&lower, SURNAME_KEYWORDS),
            case: contains_any(&lower, CASE_KEYWORDS),
            abbreviation: contains_any(&lower, ABBREVIATION_KEYWORDS) || INITIALS_RE.is_match(message),
            student: contains_any(&lower, STUDENT_KEYWORDS),
            supervisor: contains_any(&lower, SUPERVISOR_KEYWORDS),
            not_found: contains_any(&lower, NOT_FOUND_KEYWORDS),
        }
    }

    /// Any name-related keyword at all. `not_found` alone does not count.
    pub fn is_name_related(&self) -> bool {
        self.full_name || self.surname || self.case || self.abbreviation || self.student || self.supervisor
    }
}

/// Whether a message talks about a person's name.
pub fn is_name_message(message: &str) -> bool {
    NameMarkers::scan(message).is_name_related()
}

/// Whether an issue belongs to the order-number family.
pub fn is_order_number_issue(message: &str, rule: Option<&str>) -> bool {
    let lower = message.to_lowercase();
    if contains_any(&lower, ORDER_NUMBER_KEYWORDS) {
        return true;
    }
    rule.map(|r| r.to_lowercase().replace(['.', '_', '-', ' '], "").contains(ORDER_NUMBER_RULE_MARKER))
        .unwrap_or(false)
}
