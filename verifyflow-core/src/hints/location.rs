//! Generic hint pointing the user at the issue's location.

use crate::hints::{FamilyKind, HintFamily};
use crate::location::LocationToken;
use crate::report::Issue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocationFamily;

impl HintFamily for LocationFamily {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Location
    }

    fn matches(&self, issue: &Issue) -> bool {
        issue.location.as_deref().map_or(false, |token| !token.trim().is_empty())
    }

    fn guidance(&self, issue: &Issue) -> Vec<String> {
        issue
            .location
            .as_deref()
            .map(|token| vec![format!("Location: {}", LocationToken::parse(token).display_sentence())])
            .unwrap_or_default()
    }
}
