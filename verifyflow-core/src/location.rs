//! Location classifier: maps a raw location token to a human bucket label.
//!
//! Rules are evaluated in order and the first match wins. Name-related
//! messages are grouped together no matter where the service located them.

use log::debug;

use crate::keywords::is_name_message;
use crate::report::Issue;

pub const NAME_ERRORS: &str = "Name errors";
pub const TITLE_PAGE: &str = "Title page";
pub const SCHEDULE_TABLE: &str = "Schedule table";
pub const MAIN_BODY: &str = "Main body";

const TITLE_PAGE_TOKEN: &str = "title_page";
const CALENDAR_PLAN_TOKEN: &str = "calendar_plan_table";
const DOCUMENT_TOKEN: &str = "document";
const PAGE_PREFIX: &str = "page:";

/// What a location token points at, independent of any message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationToken<'a> {
    TitlePage,
    Page(&'a str),
    ScheduleTable,
    Document,
    Other(&'a str),
}

impl<'a> LocationToken<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token {
            TITLE_PAGE_TOKEN => LocationToken::TitlePage,
            CALENDAR_PLAN_TOKEN => LocationToken::ScheduleTable,
            DOCUMENT_TOKEN => LocationToken::Document,
            _ => match token.strip_prefix(PAGE_PREFIX) {
                Some(number) if !number.is_empty() => LocationToken::Page(number),
                _ => LocationToken::Other(token),
            },
        }
    }

    /// Bucket label for this token.
    pub fn label(&self) -> String {
        match self {
            LocationToken::TitlePage => TITLE_PAGE.to_string(),
            LocationToken::Page(n) => format!("Page {}", n),
            LocationToken::ScheduleTable => SCHEDULE_TABLE.to_string(),
            LocationToken::Document => MAIN_BODY.to_string(),
            LocationToken::Other(raw) => raw.to_string(),
        }
    }

    /// Sentence telling the user where to look.
    pub fn display_sentence(&self) -> String {
        match self {
            LocationToken::TitlePage => "Title page — first page of the document".to_string(),
            LocationToken::Page(n) => format!("Page {} — navigate to this page", n),
            LocationToken::ScheduleTable => SCHEDULE_TABLE.to_string(),
            LocationToken::Document => MAIN_BODY.to_string(),
            LocationToken::Other(raw) => raw.to_string(),
        }
    }
}

/// Classifies a location token given the owning issue's message.
pub fn classify(token: &str, message: &str) -> String {
    if is_name_message(message) {
        debug!("Location '{}' routed to '{}' by message keywords", token, NAME_ERRORS);
        return NAME_ERRORS.to_string();
    }
    LocationToken::parse(token).label()
}

/// Bucket for an issue, or `None` when it carries no location token.
pub fn bucket_for(issue: &Issue) -> Option<String> {
    issue
        .location
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| classify(token, &issue.message))
}

/// Label to issue count, in order of first appearance.
pub fn distribution<'a, I>(issues: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Issue>,
{
    let mut buckets: Vec<(String, usize)> = Vec::new();
    for label in issues.into_iter().filter_map(bucket_for) {
        match buckets.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => buckets.push((label, 1)),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    #[test]
    fn maps_known_tokens() {
        assert_eq!(classify("title_page", "Не найден год"), "Title page");
        assert_eq!(classify("page:3", "Поле left"), "Page 3");
        assert_eq!(classify("calendar_plan_table", "Некорректная дата"), "Schedule table");
        assert_eq!(classify("document", "Нет дат"), "Main body");
        assert_eq!(classify("docx:section1", "Поле left"), "docx:section1");
    }

    #[test]
    fn name_keywords_override_token() {
        assert_eq!(classify("page:3", "surname not found"), "Name errors");
        assert_eq!(classify("title_page", "ФИО студента не найдено"), "Name errors");
    }

    #[test]
    fn page_prefix_requires_a_value() {
        assert_eq!(classify("page:", "x"), "page:");
        assert_eq!(classify("pages:1..2", "x"), "pages:1..2");
    }

    #[test]
    fn classify_is_deterministic() {
        let first = classify("page:12", "Ошибка форматирования");
        let second = classify("page:12", "Ошибка форматирования");
        assert_eq!(first, second);
    }

    #[test]
    fn distribution_skips_issues_without_location() {
        let issues = vec![
            Issue::new(Severity::Warning, "a").with_location("page:1"),
            Issue::new(Severity::Info, "b"),
            Issue::new(Severity::Warning, "Шрифт не Times New Roman").with_location(""),
            Issue::new(Severity::Info, "d").with_location("   "),
            Issue::new(Severity::Warning, "c").with_location("page:1"),
            Issue::new(Severity::Critical, "ФИО руководителя содержит сокращения").with_location("title_page"),
        ];
        assert_eq!(
            distribution(&issues),
            vec![("Page 1".to_string(), 2), ("Name errors".to_string(), 1)]
        );
    }
}
