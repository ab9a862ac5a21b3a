//! Issue family matching and remediation hint generation.
//!
//! Each hint family is a [`HintFamily`]: a predicate deciding whether it applies
//! to an issue and a generator producing guidance text. A [`HintTable`] holds
//! the families in priority order and evaluates them top to bottom; the first
//! family that matches generates the hint. The table always ends with a
//! catch-all entry, so every issue gets a non-empty hint.
//!
//! Independently of the family, meaningful evidence, the issue's own fix
//! instructions and its rule identifier are appended to the hint block.
//!
//! License: MIT OR APACHE 2.0

pub mod fallback;
pub mod location;
pub mod name_format;
pub mod order_number;

use log::debug;
use once_cell::sync::Lazy;

use crate::report::Issue;

pub use fallback::FallbackFamily;
pub use location::LocationFamily;
pub use name_format::NameFormatFamily;
pub use order_number::OrderNumberFamily;

/// Identifies which family produced a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyKind {
    NameFormat,
    OrderNumber,
    Location,
    Fallback,
}

/// A predicate/generator pair in the hint table.
pub trait HintFamily: Send + Sync {
    fn kind(&self) -> FamilyKind;

    /// Decides whether this family handles the issue.
    fn matches(&self, issue: &Issue) -> bool;

    /// Produces guidance paragraphs. Only called when [`HintFamily::matches`]
    /// returned true. Paragraphs may contain line breaks.
    fn guidance(&self, issue: &Issue) -> Vec<String>;
}

/// Remediation guidance for one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintBlock {
    pub family: FamilyKind,
    pub guidance: Vec<String>,
    pub context: Option<String>,
    pub how_to_fix: Option<String>,
    pub rule: Option<String>,
}

impl HintBlock {
    /// Rendered lines in fixed order: guidance, context, fix instructions, rule.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .guidance
            .iter()
            .flat_map(|paragraph| paragraph.lines().map(str::to_string).collect::<Vec<_>>())
            .collect();
        if let Some(context) = &self.context {
            lines.push(format!("Context: {}", context));
        }
        if let Some(fix) = &self.how_to_fix {
            lines.push(format!("How to fix: {}", fix));
        }
        if let Some(rule) = &self.rule {
            lines.push(format!("Rule: {}", rule));
        }
        lines
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

/// Ordered hint families with a mandatory catch-all.
pub struct HintTable {
    families: Vec<Box<dyn HintFamily>>,
    fallback: FallbackFamily,
}

impl HintTable {
    /// Builds a table from families in priority order. The catch-all entry is
    /// always evaluated last and need not be listed.
    pub fn new(families: Vec<Box<dyn HintFamily>>) -> Self {
        Self { families, fallback: FallbackFamily }
    }

    /// Name format, then order number, then generic location.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(NameFormatFamily),
            Box::new(OrderNumberFamily),
            Box::new(LocationFamily),
        ])
    }

    /// The family that handles the issue.
    pub fn select(&self, issue: &Issue) -> &dyn HintFamily {
        self.families
            .iter()
            .find(|family| family.matches(issue))
            .map(|family| &**family)
            .unwrap_or(&self.fallback as &dyn HintFamily)
    }

    pub fn hint_for(&self, issue: &Issue) -> HintBlock {
        let family = self.select(issue);
        debug!("Issue '{}' matched hint family {:?}", issue.message, family.kind());

        let mut guidance = family.guidance(issue);
        if guidance.is_empty() {
            guidance = self.fallback.guidance(issue);
        }

        HintBlock {
            family: family.kind(),
            guidance,
            context: issue.meaningful_evidence().map(str::to_string),
            how_to_fix: issue.non_empty_how_to_fix().map(str::to_string),
            rule: issue.non_empty_rule().map(str::to_string),
        }
    }
}

impl Default for HintTable {
    fn default() -> Self {
        Self::standard()
    }
}

static STANDARD_TABLE: Lazy<HintTable> = Lazy::new(HintTable::standard);

/// Family selection with the standard table.
pub fn match_family(issue: &Issue) -> FamilyKind {
    STANDARD_TABLE.select(issue).kind()
}

/// Hint generation with the standard table.
pub fn hint_for(issue: &Issue) -> HintBlock {
    STANDARD_TABLE.hint_for(issue)
}
