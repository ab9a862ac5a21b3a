//! Severity filter over the issue list.
//!
//! The visible subset is a pure function of the issues and the selected filter;
//! the underlying sequence is never touched and its order is preserved.

use std::fmt;
use std::str::FromStr;

use crate::report::{Issue, ParseSeverityError, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    pub fn accepts(&self, issue: &Issue) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(severity) => issue.severity == *severity,
        }
    }

    pub fn apply<'a>(&self, issues: &'a [Issue]) -> Vec<&'a Issue> {
        issues.iter().filter(|issue| self.accepts(issue)).collect()
    }

    /// Visible subset together with the unfiltered total.
    pub fn view<'a>(&self, issues: &'a [Issue]) -> FilterView<'a> {
        FilterView { filter: *self, visible: self.apply(issues), total: issues.len() }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => f.write_str("all"),
            SeverityFilter::Only(severity) => write!(f, "{}", severity),
        }
    }
}

impl FromStr for SeverityFilter {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(SeverityFilter::All)
        } else {
            s.parse::<Severity>().map(SeverityFilter::Only)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterView<'a> {
    pub filter: SeverityFilter,
    pub visible: Vec<&'a Issue>,
    pub total: usize,
}

impl FilterView<'_> {
    /// "Showing N of M issues".
    pub fn counter(&self) -> String {
        format!("Showing {} of {} issues", self.visible.len(), self.total)
    }
}
