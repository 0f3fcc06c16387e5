//! Wire types returned by the analysis backend and their mapping into
//! [`Document`].
//!
//! `analysis_to_document` is the only place that knows both shapes; a change
//! in the backend contract should only ever touch this module.

use serde::{Deserialize, Serialize};

use crate::types::{Check, Document, DocumentStatus, DocumentSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Completed,
    Error,
}

/// Summary statistics as computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    /// Applicable codes checked (excludes not applicable)
    pub total_codes_evaluated: u32,
    pub passing_count: u32,
    pub warning_count: u32,
    pub failing_count: u32,
    #[serde(default)]
    pub not_applicable_count: u32,
    pub compliance_score: f64,
}

/// Body of `POST /analyze-file` and `GET /analysis/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub analysis_id: String,
    pub status: AnalysisStatus,
    pub created_at: String, // ISO 8601
    pub nec_version: String,
    #[serde(default = "default_system_type")]
    pub system_type: String,
    pub diagram_description: String,
    #[serde(default)]
    pub findings: Vec<Check>,
    pub summary: ComplianceSummary,
}

fn default_system_type() -> String {
    "commercial".to_string()
}

impl AnalysisResponse {
    pub fn is_completed(&self) -> bool {
        self.status == AnalysisStatus::Completed
    }
}

/// Map a backend analysis into a stored document.
///
/// `uploaded_at` is the date portion of `created_at`; when the backend sent
/// no timestamp the current UTC date is used. An empty `analysis_id` gets a
/// client-generated UUID.
pub fn analysis_to_document(
    analysis: AnalysisResponse,
    filename: &str,
    file_size: &str,
    file_url: Option<String>,
) -> Document {
    let id = if analysis.analysis_id.trim().is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        analysis.analysis_id
    };

    let uploaded_at = match analysis.created_at.split('T').next() {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => chrono::Utc::now().format("%Y-%m-%d").to_string(),
    };

    let status = match analysis.status {
        AnalysisStatus::Completed => DocumentStatus::Complete,
        AnalysisStatus::Error => DocumentStatus::Error,
    };

    tracing::debug!(
        "Mapped analysis {} ({} findings, status {:?})",
        id,
        analysis.findings.len(),
        status
    );

    Document {
        id,
        filename: filename.to_string(),
        uploaded_at,
        file_size: file_size.to_string(),
        status,
        file_url,
        nec_version: Some(analysis.nec_version),
        system_type: Some(analysis.system_type),
        diagram_description: Some(analysis.diagram_description),
        summary: DocumentSummary {
            passed: analysis.summary.passing_count,
            warnings: analysis.summary.warning_count,
            failed: analysis.summary.failing_count,
            not_applicable: Some(analysis.summary.not_applicable_count),
            compliance_score: Some(analysis.summary.compliance_score),
        },
        checks: analysis.findings,
    }
}
