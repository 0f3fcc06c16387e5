//! Text renderings shared by every front-end: status glyphs, the status
//! bar, document card lines and the fixed placeholder messages.

use shared_types::{Check, CheckStatus, Document, DocumentSummary};

pub const EMPTY_LIBRARY_MESSAGE: &str = "No analyses yet";
pub const DOCUMENT_NOT_FOUND_MESSAGE: &str = "Document not found";
pub const NO_ISSUES_MESSAGE: &str = "✓ All checks passed";

/// Widest status bar before it is scaled down
pub const STATUS_BAR_MAX: u32 = 20;

pub fn status_symbol(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "●",
        CheckStatus::Warning => "◐",
        CheckStatus::Fail => "○",
        CheckStatus::NotApplicable => "–",
    }
}

/// One glyph per check (passed, then warnings, then failed), scaled so the
/// bar never exceeds `max_display` glyphs by much.
pub fn status_bar(summary: &DocumentSummary, max_display: u32) -> String {
    let total =
        u64::from(summary.passed) + u64::from(summary.warnings) + u64::from(summary.failed);
    let scale = if total > u64::from(max_display) && total > 0 {
        max_display as f64 / total as f64
    } else {
        1.0
    };
    let scaled = |count: u32| (count as f64 * scale).round() as usize;

    format!(
        "{}{}{}",
        status_symbol(CheckStatus::Pass).repeat(scaled(summary.passed)),
        status_symbol(CheckStatus::Warning).repeat(scaled(summary.warnings)),
        status_symbol(CheckStatus::Fail).repeat(scaled(summary.failed)),
    )
}

/// `"⚠ 3 issues"`, `"⚠ 1 issue"` or the all-clear message
pub fn issue_label(summary: &DocumentSummary) -> String {
    match summary.issue_count() {
        0 => NO_ISSUES_MESSAGE.to_string(),
        1 => "⚠ 1 issue".to_string(),
        n => format!("⚠ {} issues", n),
    }
}

/// Lines of a document card in the library grid
pub fn document_card(document: &Document) -> Vec<String> {
    let summary = &document.summary;
    vec![
        format!("📄 {}", document.filename),
        format!("{} • {}", document.uploaded_at, document.file_size),
        status_bar(summary, STATUS_BAR_MAX),
        format!(
            "{} / {} / {}    {}",
            summary.passed,
            summary.warnings,
            summary.failed,
            issue_label(summary)
        ),
    ]
}

/// The library grid, or the empty-state message when there is nothing to show
pub fn library(documents: &[Document]) -> Vec<String> {
    if documents.is_empty() {
        return vec![EMPTY_LIBRARY_MESSAGE.to_string()];
    }

    documents
        .iter()
        .map(|doc| document_card(doc).join("\n"))
        .collect()
}

/// One check as listed in the review pane
pub fn check_line(check: &Check, active: bool) -> String {
    let marker = if active { ">" } else { " " };
    let mut line = format!(
        "{} {} {} [{}]",
        marker,
        status_symbol(check.status),
        check.name,
        check.standard
    );
    if check.status != CheckStatus::Pass {
        line.push_str(&format!("\n      {}", check.message));
    }
    line
}

/// Full detail of one check
pub fn check_detail(check: &Check) -> String {
    let mut out = format!(
        "{} ({})\n{}\nStatus: {}\n\n{}",
        check.name,
        check.id,
        check.standard,
        check.status.label(),
        check.message
    );
    if let Some(location) = &check.location {
        out.push_str(&format!(
            "\nLocation: sheet {}, {}",
            location.sheet, location.region
        ));
    }
    if let Some(description) = &check.description {
        out.push_str("\n\n");
        out.push_str(description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::DocumentStatus;

    fn summary(passed: u32, warnings: u32, failed: u32) -> DocumentSummary {
        DocumentSummary {
            passed,
            warnings,
            failed,
            not_applicable: None,
            compliance_score: None,
        }
    }

    #[test]
    fn test_status_bar_unscaled() {
        assert_eq!(status_bar(&summary(2, 1, 1), STATUS_BAR_MAX), "●●◐○");
        assert_eq!(status_bar(&summary(0, 0, 0), STATUS_BAR_MAX), "");
    }

    #[test]
    fn test_status_bar_scaled() {
        // 40 checks squeezed into 20 glyphs
        let bar = status_bar(&summary(20, 10, 10), STATUS_BAR_MAX);
        assert_eq!(bar.chars().filter(|c| *c == '●').count(), 10);
        assert_eq!(bar.chars().filter(|c| *c == '◐').count(), 5);
        assert_eq!(bar.chars().filter(|c| *c == '○').count(), 5);
    }

    #[test]
    fn test_status_bar_huge_counts() {
        let bar = status_bar(&summary(u32::MAX, 1, 0), STATUS_BAR_MAX);
        assert_eq!(bar.chars().count(), STATUS_BAR_MAX as usize);
        assert!(bar.chars().all(|c| c == '●'));
        assert_eq!(
            issue_label(&summary(u32::MAX, 1, u32::MAX)),
            format!("⚠ {} issues", u32::MAX)
        );
    }

    #[test]
    fn test_issue_label() {
        assert_eq!(issue_label(&summary(17, 0, 0)), NO_ISSUES_MESSAGE);
        assert_eq!(issue_label(&summary(3, 1, 0)), "⚠ 1 issue");
        assert_eq!(issue_label(&summary(12, 3, 2)), "⚠ 5 issues");
    }

    #[test]
    fn test_empty_library() {
        assert_eq!(library(&[]), vec![EMPTY_LIBRARY_MESSAGE.to_string()]);
    }

    #[test]
    fn test_document_card() {
        let doc = Document {
            id: "3".to_string(),
            filename: "substation_east.pdf".to_string(),
            uploaded_at: "2026-01-09".to_string(),
            file_size: "1.8 MB".to_string(),
            status: DocumentStatus::Complete,
            file_url: None,
            nec_version: None,
            system_type: None,
            diagram_description: None,
            summary: summary(2, 0, 1),
            checks: Vec::new(),
        };

        let card = document_card(&doc);
        assert_eq!(card[0], "📄 substation_east.pdf");
        assert_eq!(card[1], "2026-01-09 • 1.8 MB");
        assert_eq!(card[2], "●●○");
        assert!(card[3].ends_with("⚠ 1 issue"));
        assert_eq!(library(std::slice::from_ref(&doc)).len(), 1);
    }

    #[test]
    fn test_check_line_hides_message_for_passes() {
        let mut check = Check {
            id: "c15".to_string(),
            name: "Wire Gauge Specifications".to_string(),
            status: CheckStatus::Pass,
            standard: "NEC 310.16".to_string(),
            message: "Ground wire sizes noted".to_string(),
            description: None,
            location: None,
        };
        assert!(!check_line(&check, false).contains("Ground wire"));

        check.status = CheckStatus::Warning;
        let line = check_line(&check, true);
        assert!(line.starts_with(">"));
        assert!(line.contains("Ground wire sizes noted"));
    }
}
