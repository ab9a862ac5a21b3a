//! Data model for audit results as returned by the audit service.
//!
//! A [`Report`] is created once per audit request and replaced wholesale by the
//! next one. Issues are immutable once received and their order is significant:
//! every view and the export preserve it.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How important an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Warning, Severity::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Uppercased label used in exported issue lists.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing an unknown severity string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(pub String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown severity '{}'; expected critical, warning or info.", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Severity::Critical),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Profiles are not consistent about casing, so `Critical` and `critical` both decode.
impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub message: String,
    pub severity: Severity,
    /// Opaque locator such as `title_page`, `page:3` or `calendar_plan_table`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_to_fix: Option<String>,
    /// Audit category (formal, logical, syntactic).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            location: None,
            rule: None,
            evidence: None,
            how_to_fix: None,
            kind: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }

    pub fn with_how_to_fix(mut self, how_to_fix: impl Into<String>) -> Self {
        self.how_to_fix = Some(how_to_fix.into());
        self
    }

    /// Evidence text, unless it is absent, blank or a placeholder dash.
    pub fn meaningful_evidence(&self) -> Option<&str> {
        non_placeholder(self.evidence.as_deref())
    }

    pub fn non_empty_how_to_fix(&self) -> Option<&str> {
        self.how_to_fix.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    pub fn non_empty_rule(&self) -> Option<&str> {
        self.rule.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

fn non_placeholder(text: Option<&str>) -> Option<&str> {
    let trimmed = text?.trim();
    match trimmed {
        "" | "—" | "-" => None,
        other => Some(other),
    }
}

/// Per-severity counts as reported by the service. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub critical: Option<usize>,
    #[serde(default)]
    pub warning: Option<usize>,
    #[serde(default)]
    pub info: Option<usize>,
    #[serde(default)]
    pub total: Option<usize>,
}

/// Most frequent run formatting found in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DominantFormatting {
    #[serde(default)]
    pub font_name: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub line_spacing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub right: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub bottom: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleHeading {
    pub text: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Document metadata detected by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Detected {
    #[serde(default)]
    pub most_common: Option<DominantFormatting>,
    #[serde(default)]
    pub margins_mm: Option<Margins>,
    #[serde(default)]
    pub headings_found: Option<usize>,
    #[serde(default)]
    pub sample_headings: Vec<SampleHeading>,
}

/// The outcome of one audit request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub meta: serde_json::Value,
    #[serde(default)]
    pub detected: Detected,
    #[serde(default)]
    pub summary: Option<Summary>,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Counts as displayed: severities fall back to zero, the total to the issue count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub total: usize,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl Report {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn summary_counts(&self) -> SummaryCounts {
        let summary = self.summary.clone().unwrap_or_default();
        SummaryCounts {
            total: summary.total.unwrap_or(self.issues.len()),
            critical: summary.critical.unwrap_or(0),
            warning: summary.warning.unwrap_or(0),
            info: summary.info.unwrap_or(0),
        }
    }

    /// Counts issues by severity directly from the issue list.
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// A user-authored note attached to the current audit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    /// Localized creation time, stored as rendered.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERVICE_JSON: &str = r#"{
        "profile": "ВКР (бакалавриат)",
        "format": "docx",
        "pages": 1,
        "meta": {"paragraphs": 120},
        "detected": {
            "most_common": {"font_name": "Times New Roman", "font_size": 14.0, "line_spacing": 1.5},
            "headings_found": 2,
            "sample_headings": [{"text": "ВВЕДЕНИЕ", "location": "p:10"}]
        },
        "summary": {"critical": 1, "warning": 1, "info": 0, "total": 2},
        "issues": [
            {"severity": "critical", "type": "formal", "rule": "StudentFIO.Missing",
             "message": "Не найдено ФИО обучающегося в титульной зоне (якоря: обучающегося/допустить).",
             "evidence": "—", "location": "title_page", "how_to_fix": "Добавь ФИО."},
            {"severity": "warning", "message": "В документе не найдено дат", "location": "document"}
        ]
    }"#;

    #[test]
    fn parses_service_response() {
        let report = Report::from_json(SERVICE_JSON).unwrap();
        assert_eq!(report.profile, "ВКР (бакалавриат)");
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].kind.as_deref(), Some("formal"));
        assert_eq!(report.issues[1].rule, None);
        assert_eq!(
            report.detected.most_common.as_ref().and_then(|m| m.font_name.as_deref()),
            Some("Times New Roman")
        );
    }

    #[test]
    fn placeholder_evidence_is_ignored() {
        let issue = Issue::new(Severity::Info, "x").with_evidence("—");
        assert_eq!(issue.meaningful_evidence(), None);
        let issue = Issue::new(Severity::Info, "x").with_evidence(" - ");
        assert_eq!(issue.meaningful_evidence(), None);
        let issue = Issue::new(Severity::Info, "x").with_evidence("left=25.0мм");
        assert_eq!(issue.meaningful_evidence(), Some("left=25.0мм"));
    }

    #[test]
    fn total_falls_back_to_issue_count() {
        let report = Report {
            summary: Some(Summary { critical: Some(1), ..Default::default() }),
            issues: vec![Issue::new(Severity::Critical, "a"), Issue::new(Severity::Info, "b")],
            ..Default::default()
        };
        let counts = report.summary_counts();
        assert_eq!(counts.total, 2);
        assert_eq!(counts.critical, 1);
        assert_eq!(counts.warning, 0);
        assert_eq!(counts.info, 0);
    }

    #[test]
    fn severity_decodes_regardless_of_case() {
        let issue: Issue = serde_json::from_str(r#"{"severity": "Critical", "message": "x"}"#).unwrap();
        assert_eq!(issue.severity, Severity::Critical);
        let issue: Issue = serde_json::from_str(r#"{"severity": "WARNING", "message": "y"}"#).unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert!(serde_json::from_str::<Issue>(r#"{"severity": "fatal", "message": "z"}"#).is_err());
        assert_eq!(serde_json::to_string(&Severity::Info).unwrap(), "\"info\"");
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert!("fatal".parse::<Severity>().is_err());
    }
}
