//! HTTP client for the analysis service
//!
//! Endpoints used:
//! - `POST /analyze-file?nec_version=..` (multipart field `file`)
//! - `GET /analysis/{analysis_id}`
//! - `GET /` health check
//!
//! One request per call: no retries, no client-side timeout.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use shared_types::AnalysisResponse;
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::upload::UploadFile;

/// The analysis service as seen by the uploader
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Submit a file and wait for its analysis
    async fn analyze(&self, file: &UploadFile) -> Result<AnalysisResponse, GatewayError>;

    /// Fetch a previously completed analysis
    async fn fetch_analysis(&self, analysis_id: &str) -> Result<AnalysisResponse, GatewayError>;
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// FastAPI-style error body
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

pub struct GatewayClient {
    http: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let response = self.http.get(self.config.endpoint("/")).send().await?;
        read_json(response).await
    }
}

#[async_trait]
impl AnalysisGateway for GatewayClient {
    async fn analyze(&self, file: &UploadFile) -> Result<AnalysisResponse, GatewayError> {
        info!(
            "Submitting {} ({}) for analysis",
            file.filename,
            file.display_size()
        );

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.filename.clone())
            .mime_str(file.content_type())?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.config.endpoint("/analyze-file"))
            .query(&[("nec_version", self.config.nec_version.as_str())])
            .multipart(form)
            .send()
            .await?;

        let analysis: AnalysisResponse = read_json(response).await?;
        debug!(
            "Analysis {} returned {} findings",
            analysis.analysis_id,
            analysis.findings.len()
        );
        Ok(analysis)
    }

    async fn fetch_analysis(&self, analysis_id: &str) -> Result<AnalysisResponse, GatewayError> {
        let path = format!("/analysis/{}", urlencoding::encode(analysis_id));
        let response = self.http.get(self.config.endpoint(&path)).send().await?;
        read_json(response).await
    }
}

/// Decode a success body, or turn a non-2xx status into [`GatewayError::Status`]
async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let detail = error_detail(&body);
        warn!("Analysis service returned {}: {:?}", status, detail);
        return Err(GatewayError::Status {
            status: status.as_u16(),
            detail,
        });
    }

    serde_json::from_str(&body).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
}

fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
