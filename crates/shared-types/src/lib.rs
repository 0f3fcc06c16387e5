pub mod analysis;
pub mod types;

pub use analysis::{analysis_to_document, AnalysisResponse, AnalysisStatus, ComplianceSummary};
pub use types::{
    Check, CheckStatus, DiagramLocation, Document, DocumentStatus, DocumentSummary,
    SummaryMismatch,
};
