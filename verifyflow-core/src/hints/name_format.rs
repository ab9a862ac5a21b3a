//! Hints for problems with student and supervisor names on the title page.
//!
//! Sub-hints are independent: a message that reports both an abbreviation and
//! a wrong grammatical case gets both paragraphs.

use crate::hints::{FamilyKind, HintFamily};
use crate::keywords::NameMarkers;
use crate::report::Issue;

pub const STUDENT_NOT_FOUND: &str = "The student's name was not found. On the title page, look next to the \
\"admitted\" / \"student\" wording (\"допустить\", \"обучающегося\", \"студента\") and write the student's \
full name right after it.";

pub const SUPERVISOR_NOT_FOUND: &str = "The supervisor's name was not found. On the title page, find the \
\"supervisor\" line (\"руководитель\") and write the supervisor's full name next to it.";

pub const EXPAND_INITIALS: &str = "Write the name in full instead of initials: surname, given name and patronymic.
  Before: Иванов И.И.
  After:  Иванов Иван Иванович";

pub const GENITIVE_AFTER_PREPOSITION: &str = "After phrases such as \"of the student\" (\"от студента\", \
\"обучающегося\") the name must be in the genitive case.
  Before: от студента Иванов Иван Иванович
  After:  от студента Иванова Ивана Ивановича";

pub const CHECK_ALL_NAMES: &str = "Check every occurrence of the student's and the supervisor's names on the \
title page: full form, correct spelling and grammatical case.";

#[derive(Debug, Clone, Copy, Default)]
pub struct NameFormatFamily;

impl HintFamily for NameFormatFamily {
    fn kind(&self) -> FamilyKind {
        FamilyKind::NameFormat
    }

    fn matches(&self, issue: &Issue) -> bool {
        NameMarkers::scan(&issue.message).is_name_related()
    }

    fn guidance(&self, issue: &Issue) -> Vec<String> {
        let markers = NameMarkers::scan(&issue.message);
        let mut hints = Vec::new();

        if markers.not_found && markers.student {
            hints.push(STUDENT_NOT_FOUND.to_string());
        }
        if markers.not_found && markers.supervisor {
            hints.push(SUPERVISOR_NOT_FOUND.to_string());
        }
        if markers.abbreviation {
            hints.push(EXPAND_INITIALS.to_string());
        }
        if markers.case {
            hints.push(GENITIVE_AFTER_PREPOSITION.to_string());
        }
        if hints.is_empty() {
            hints.push(CHECK_ALL_NAMES.to_string());
        }
        hints
    }
}
