use serde::{Deserialize, Serialize};

/// Outcome of a single compliance check.
///
/// Variants are declared in severity order, so the derived `Ord` sorts the
/// most urgent outcome first: fail < warning < pass < not_applicable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Fail,
    Warning,
    Pass,
    NotApplicable,
}

impl CheckStatus {
    /// Every status, most severe first
    pub const ALL: [CheckStatus; 4] = [
        CheckStatus::Fail,
        CheckStatus::Warning,
        CheckStatus::Pass,
        CheckStatus::NotApplicable,
    ];

    pub fn severity_rank(self) -> u8 {
        match self {
            CheckStatus::Fail => 0,
            CheckStatus::Warning => 1,
            CheckStatus::Pass => 2,
            CheckStatus::NotApplicable => 3,
        }
    }

    /// Wire name (`"pass"`, `"not_applicable"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
            CheckStatus::Pass => "pass",
            CheckStatus::NotApplicable => "not_applicable",
        }
    }

    /// Parse a wire name; also accepts `"n/a"` and `"na"` for not applicable
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" | "failed" => Some(CheckStatus::Fail),
            "warning" | "warnings" => Some(CheckStatus::Warning),
            "pass" | "passed" => Some(CheckStatus::Pass),
            "not_applicable" | "n/a" | "na" => Some(CheckStatus::NotApplicable),
            _ => None,
        }
    }

    /// Short label shown next to a check
    pub fn label(self) -> &'static str {
        match self {
            CheckStatus::Fail => "Failed",
            CheckStatus::Warning => "Warning",
            CheckStatus::Pass => "Passed",
            CheckStatus::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramLocation {
    pub sheet: u32, // 1-based sheet number
    pub region: String,
}

/// A single compliance evaluation tied to an electrical code citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub id: String,
    pub name: String,
    pub status: CheckStatus,
    pub standard: String, // e.g., "NEC 250.30(A)(1)"
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<DiagramLocation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Analyzing,
    Complete,
    Error,
}

/// Per-outcome counts as reported by the analysis backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub passed: u32,
    pub warnings: u32,
    pub failed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>, // 0-100
}

impl DocumentSummary {
    /// Failed plus warnings, saturating at `u32::MAX`
    pub fn issue_count(&self) -> u32 {
        self.failed.saturating_add(self.warnings)
    }

    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }

    /// Sum of every reported outcome, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.passed
            .saturating_add(self.warnings)
            .saturating_add(self.failed)
            .saturating_add(self.not_applicable.unwrap_or(0))
    }

    /// Reported count for one outcome
    pub fn count_for(&self, status: CheckStatus) -> u32 {
        match status {
            CheckStatus::Fail => self.failed,
            CheckStatus::Warning => self.warnings,
            CheckStatus::Pass => self.passed,
            CheckStatus::NotApplicable => self.not_applicable.unwrap_or(0),
        }
    }
}

/// Summary counts that disagree with the checks actually present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryMismatch {
    pub summarized: u32,
    pub actual: usize,
}

/// One uploaded diagram and its aggregated check results.
///
/// Field names match what the browser front-end persisted, so stored
/// collections stay readable across both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: String, // YYYY-MM-DD
    #[serde(rename = "fileSize")]
    pub file_size: String, // display string, e.g. "64.8 KB"
    pub status: DocumentStatus,
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nec_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_description: Option<String>,
    pub summary: DocumentSummary,
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Document {
    pub fn check(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|check| check.id == id)
    }

    /// Count of checks carrying `status`
    pub fn count_checks(&self, status: CheckStatus) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status == status)
            .count()
    }

    /// Compare the reported summary against the check list.
    ///
    /// `not_applicable` only participates when the summary reports it.
    pub fn summary_mismatch(&self) -> Option<SummaryMismatch> {
        let actual = match self.summary.not_applicable {
            Some(_) => self.checks.len(),
            None => self.checks.len() - self.count_checks(CheckStatus::NotApplicable),
        };
        let summarized = self.summary.total();

        if summarized as usize == actual {
            None
        } else {
            Some(SummaryMismatch { summarized, actual })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(id: &str, status: CheckStatus) -> Check {
        Check {
            id: id.to_string(),
            name: format!("Check {}", id),
            status,
            standard: "NEC 250.30".to_string(),
            message: "msg".to_string(),
            description: None,
            location: None,
        }
    }

    fn document(checks: Vec<Check>, summary: DocumentSummary) -> Document {
        Document {
            id: "doc-1".to_string(),
            filename: "panel_schedule_B.pdf".to_string(),
            uploaded_at: "2026-01-08".to_string(),
            file_size: "890 KB".to_string(),
            status: DocumentStatus::Complete,
            file_url: None,
            nec_version: None,
            system_type: None,
            diagram_description: None,
            summary,
            checks,
        }
    }

    #[test]
    fn test_severity_order() {
        let mut statuses = vec![
            CheckStatus::NotApplicable,
            CheckStatus::Pass,
            CheckStatus::Fail,
            CheckStatus::Warning,
        ];
        statuses.sort();
        assert_eq!(statuses, CheckStatus::ALL.to_vec());

        for pair in CheckStatus::ALL.windows(2) {
            assert!(pair[0].severity_rank() < pair[1].severity_rank());
        }
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&CheckStatus::NotApplicable).unwrap();
        assert_eq!(json, "\"not_applicable\"");

        for status in CheckStatus::ALL {
            assert_eq!(CheckStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CheckStatus::parse("N/A"), Some(CheckStatus::NotApplicable));
        assert_eq!(CheckStatus::parse("bogus"), None);
    }

    #[test]
    fn test_document_json_field_names() {
        let doc = document(vec![check("c1", CheckStatus::Pass)], DocumentSummary::default());
        let value = serde_json::to_value(&doc).unwrap();

        assert_eq!(value["uploadedAt"], "2026-01-08");
        assert_eq!(value["fileSize"], "890 KB");
        assert_eq!(value["status"], "complete");
        assert!(value.get("fileUrl").is_none());
        assert!(value["summary"].get("not_applicable").is_none());
        assert!(value["checks"][0].get("location").is_none());
    }

    #[test]
    fn test_parse_browser_document() {
        let json = r#"{
            "id": "5",
            "filename": "rock_creek_generator_sld.pdf",
            "uploadedAt": "2026-01-10",
            "fileSize": "64.8 KB",
            "status": "complete",
            "fileUrl": "/rock_creek_generator_sld.pdf",
            "summary": { "passed": 1, "warnings": 0, "failed": 1 },
            "checks": [
                { "id": "rc1", "name": "Short-Circuit Study Required", "status": "fail",
                  "standard": "NEC 110.9", "message": "Verify interrupting ratings",
                  "location": { "sheet": 1, "region": "Main Bus" } },
                { "id": "c15", "name": "Wire Gauge Specifications", "status": "pass",
                  "standard": "NEC 310.16", "message": "Ground wire sizes noted" }
            ]
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.file_url.as_deref(), Some("/rock_creek_generator_sld.pdf"));
        assert_eq!(doc.checks.len(), 2);
        assert_eq!(
            doc.check("rc1").and_then(|c| c.location.as_ref()).map(|l| l.sheet),
            Some(1)
        );
        assert_eq!(doc.summary_mismatch(), None);
    }

    #[test]
    fn test_summary_mismatch_detected() {
        let doc = document(
            vec![check("c1", CheckStatus::Pass), check("c2", CheckStatus::Fail)],
            DocumentSummary {
                passed: 9,
                warnings: 6,
                failed: 2,
                not_applicable: Some(0),
                compliance_score: None,
            },
        );

        assert_eq!(
            doc.summary_mismatch(),
            Some(SummaryMismatch {
                summarized: 17,
                actual: 2
            })
        );
    }

    #[test]
    fn test_summary_without_not_applicable_ignores_na_checks() {
        let doc = document(
            vec![
                check("c1", CheckStatus::Pass),
                check("c2", CheckStatus::NotApplicable),
            ],
            DocumentSummary {
                passed: 1,
                ..DocumentSummary::default()
            },
        );

        assert_eq!(doc.summary_mismatch(), None);
    }

    #[test]
    fn test_issue_count() {
        let summary = DocumentSummary {
            passed: 12,
            warnings: 3,
            failed: 2,
            not_applicable: None,
            compliance_score: Some(70.6),
        };
        assert_eq!(summary.issue_count(), 5);
        assert!(summary.has_issues());
        assert_eq!(summary.count_for(CheckStatus::NotApplicable), 0);
        assert!(!DocumentSummary::default().has_issues());
    }

    #[test]
    fn test_counts_saturate() {
        let summary = DocumentSummary {
            passed: u32::MAX,
            warnings: 1,
            failed: u32::MAX,
            not_applicable: Some(3),
            compliance_score: None,
        };
        assert_eq!(summary.issue_count(), u32::MAX);
        assert_eq!(summary.total(), u32::MAX);

        let doc = document(vec![check("c1", CheckStatus::Pass)], summary);
        assert_eq!(
            doc.summary_mismatch(),
            Some(SummaryMismatch {
                summarized: u32::MAX,
                actual: 1
            })
        );
    }
}
