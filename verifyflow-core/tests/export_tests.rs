// verifyflow-core/tests/export_tests.rs
use chrono::{NaiveDate, NaiveDateTime};

use verifyflow_core::hints::name_format::STUDENT_NOT_FOUND;
use verifyflow_core::report::{Detected, DominantFormatting};
use verifyflow_core::{export_report, Annotation, ExportContext, Issue, Report, Severity, Summary};

const NEXT_STEPS_BLOCK: &str = "NEXT STEPS
----------
1. Open the document in your editor.
2. Apply the fixes described in the detailed issues section.
3. Check off each checklist item as you fix it.
4. Run the audit again to confirm the issues are resolved.
5. Save the final version of the document.
";

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap().and_hms_opt(12, 30, 0).unwrap()
}

fn ctx(source: &str, order_number: Option<&str>) -> ExportContext {
    ExportContext {
        generated_at: at(),
        source_filename: source.to_string(),
        order_number: order_number.map(str::to_string),
    }
}

#[test]
fn empty_report_keeps_every_section() {
    let report = Report { profile: "vkr_ru".to_string(), ..Default::default() };
    let text = export_report(&report, &[], &ctx("empty.pdf", None));

    let expected = format!(
        "DOCUMENT AUDIT REPORT
=====================
Generated: 2026-10-18 12:30:00
Profile: vkr_ru
File: empty.pdf

SUMMARY
-------
Total issues: 0
Critical: 0
Warnings: 0
Info: 0

ISSUES BY LOCATION
------------------
Issues are spread across the document.

DETAILED ISSUES
---------------
No issues found.

FIX CHECKLIST
-------------

{}",
        NEXT_STEPS_BLOCK
    );
    assert_eq!(text, expected);
    assert!(!text.contains("ANNOTATIONS"));
}

#[test]
fn full_report_is_rendered_in_fixed_order() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        format: Some("docx".to_string()),
        pages: Some(12),
        detected: Detected {
            most_common: Some(DominantFormatting {
                font_name: Some("Times New Roman".to_string()),
                font_size: Some(14.0),
                line_spacing: Some(1.5),
            }),
            ..Default::default()
        },
        summary: Some(Summary { critical: Some(1), warning: Some(1), info: Some(0), total: Some(2) }),
        issues: vec![
            Issue::new(Severity::Critical, "ФИО студента не найдено").with_location("title_page"),
            Issue::new(Severity::Warning, "Поле left 25 мм")
                .with_location("page:3")
                .with_evidence("25 mm")
                .with_how_to_fix("Set the left margin to 30 mm")
                .with_rule("Margins.Left"),
        ],
        ..Default::default()
    };
    let annotations = vec![Annotation {
        text: "check title page".to_string(),
        timestamp: "18.10.2026, 12:31:05".to_string(),
    }];

    let text = export_report(&report, &annotations, &ctx("thesis.docx", Some("123/2024")));

    let expected = format!(
        "DOCUMENT AUDIT REPORT
=====================
Generated: 2026-10-18 12:30:00
Profile: vkr_ru
File: thesis.docx
Order number: 123/2024
Document: docx, 12 pages
Dominant font: Times New Roman, 14 pt

SUMMARY
-------
Total issues: 2
Critical: 1
Warnings: 1
Info: 0

ISSUES BY LOCATION
------------------
Name errors: 1
Page 3: 1

DETAILED ISSUES
---------------
1. [CRITICAL] ФИО студента не найдено
   {student}

2. [WARNING] Поле left 25 мм
   Location: Page 3 — navigate to this page
   Context: 25 mm
   How to fix: Set the left margin to 30 mm
   Rule: Margins.Left

ANNOTATIONS
-----------
1. [18.10.2026, 12:31:05] check title page

FIX CHECKLIST
-------------
[ ] ФИО студента не найдено
[ ] Поле left 25 мм

{steps}",
        student = STUDENT_NOT_FOUND,
        steps = NEXT_STEPS_BLOCK
    );
    assert_eq!(text, expected);
}

#[test]
fn identical_input_gives_identical_output() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        issues: vec![
            Issue::new(Severity::Info, "Заголовок без точки").with_location("document"),
            Issue::new(Severity::Warning, "Инициалы И.И. вместо полного имени руководителя"),
        ],
        ..Default::default()
    };
    let notes = vec![Annotation { text: "a".to_string(), timestamp: "t".to_string() }];
    let first = export_report(&report, &notes, &ctx("x.pdf", None));
    let second = export_report(&report, &notes, &ctx("x.pdf", None));
    assert_eq!(first, second);
}

#[test]
fn missing_summary_counts_fall_back() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        issues: vec![Issue::new(Severity::Warning, "a"), Issue::new(Severity::Info, "b")],
        ..Default::default()
    };
    let text = export_report(&report, &[], &ctx("x.pdf", None));
    assert!(text.contains("Total issues: 2\nCritical: 0\nWarnings: 0\nInfo: 0\n"));
    assert!(text.contains("Issues are spread across the document."));
}

#[test]
fn every_issue_gets_a_hint_line() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        issues: vec![Issue::new(Severity::Info, "Something odd")],
        ..Default::default()
    };
    let text = export_report(&report, &[], &ctx("x.pdf", None));
    assert!(text.contains(
        "1. [INFO] Something odd\n   Find this issue in the document and correct it as described above.\n"
    ));
}

#[test]
fn single_page_document_is_singular() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        format: Some("docx".to_string()),
        pages: Some(1),
        ..Default::default()
    };
    let text = export_report(&report, &[], &ctx("x.docx", None));
    assert!(text.contains("Document: docx, 1 page\n"));
}

#[test]
fn blank_location_counts_as_no_location() {
    let report = Report {
        profile: "vkr_ru".to_string(),
        issues: vec![Issue::new(Severity::Warning, "Шрифт не Times New Roman").with_location("")],
        ..Default::default()
    };
    let text = export_report(&report, &[], &ctx("x.pdf", None));
    assert!(text.contains("ISSUES BY LOCATION\n------------------\nIssues are spread across the document.\n"));
    assert!(!text.contains("\n: 1\n"));
}
