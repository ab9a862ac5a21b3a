//! Catch-all entry of the hint table.

use crate::hints::{FamilyKind, HintFamily};
use crate::report::Issue;

pub const GENERIC_HINT: &str = "Find this issue in the document and correct it as described above.";

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackFamily;

impl HintFamily for FallbackFamily {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Fallback
    }

    fn matches(&self, _issue: &Issue) -> bool {
        true
    }

    fn guidance(&self, _issue: &Issue) -> Vec<String> {
        vec![GENERIC_HINT.to_string()]
    }
}
