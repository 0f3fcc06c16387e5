//! Error types for the analysis client
//!
//! `Display` output is what a user sees, so messages are written as
//! sentences rather than debug text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Could not reach the analysis service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Analysis service returned HTTP {status}{suffix}", suffix = detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Analysis service returned an unreadable response: {0}")]
    MalformedResponse(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("An analysis is already in progress")]
    Busy,

    #[error("Unsupported file type: {0}. Use PDF, PNG or JPG.")]
    UnsupportedFile(String),

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl UploadError {
    /// Message suitable for an inline, dismissible notice
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
