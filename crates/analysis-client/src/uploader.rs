//! Single-flight upload control
//!
//! Holds the busy flag and the last error notice of one upload control.
//! While a submission is pending, further submissions are refused without
//! reaching the service. A failed submission never touches the store.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use review_core::{DocumentStore, StorageBackend};
use shared_types::{analysis_to_document, AnalysisResponse, Document};
use tracing::{info, warn};

use crate::client::AnalysisGateway;
use crate::error::{GatewayError, UploadError};
use crate::upload::UploadFile;

/// Size shown for documents imported by id, where the file is not at hand
const UNKNOWN_SIZE: &str = "—";

pub struct Uploader<G: AnalysisGateway> {
    gateway: G,
    busy: AtomicBool,
    notice: Mutex<Option<String>>,
}

/// Clears the busy flag when the submission ends, however it ends
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<G: AnalysisGateway> Uploader<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            busy: AtomicBool::new(false),
            notice: Mutex::new(None),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Message of the last failed submission, until dismissed or replaced
    pub fn error_message(&self) -> Option<String> {
        self.notice.lock().ok().and_then(|notice| notice.clone())
    }

    pub fn dismiss_error(&self) {
        self.set_notice(None);
    }

    /// Read a file picked from disk. A rejected or unreadable file sets the
    /// notice the same way a failed submission does.
    pub fn select_file(&self, path: &Path) -> Result<UploadFile, UploadError> {
        UploadFile::from_path(path).map_err(|e| self.reject(e))
    }

    /// In-memory counterpart of [`Uploader::select_file`]
    pub fn select_bytes(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadFile, UploadError> {
        UploadFile::new(filename, bytes).map_err(|e| self.reject(e))
    }

    /// Analyze a file into a document without storing it
    pub async fn analyze(&self, file: &UploadFile) -> Result<Document, UploadError> {
        let analysis = self.submit(|| self.gateway.analyze(file)).await?;
        Ok(analysis_to_document(
            analysis,
            &file.filename,
            &file.display_size(),
            file.file_url(),
        ))
    }

    /// Analyze a file and prepend the result to `store`; returns the new id
    pub async fn upload<S: StorageBackend>(
        &self,
        store: &mut DocumentStore<S>,
        file: &UploadFile,
    ) -> Result<String, UploadError> {
        let document = self.analyze(file).await?;
        let id = document.id.clone();
        store.add(document);
        info!("Stored analysis {} for {}", id, file.filename);
        Ok(id)
    }

    /// Fetch an existing analysis by id and store it under `filename`
    pub async fn import<S: StorageBackend>(
        &self,
        store: &mut DocumentStore<S>,
        analysis_id: &str,
        filename: &str,
    ) -> Result<String, UploadError> {
        let analysis = self
            .submit(|| self.gateway.fetch_analysis(analysis_id))
            .await?;
        let document = analysis_to_document(analysis, filename, UNKNOWN_SIZE, None);
        let id = document.id.clone();
        store.add(document);
        info!("Imported analysis {}", id);
        Ok(id)
    }

    /// Run one gateway call under the busy flag and record its outcome.
    ///
    /// A response whose status is `error` counts as a failure.
    async fn submit<F, Fut>(&self, call: F) -> Result<AnalysisResponse, UploadError>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<AnalysisResponse, GatewayError>>,
    {
        let _guard = BusyGuard::acquire(&self.busy).ok_or(UploadError::Busy)?;

        let result = match call().await {
            Ok(analysis) if analysis.is_completed() => Ok(analysis),
            Ok(analysis) => Err(GatewayError::AnalysisFailed(format!(
                "service reported an error for analysis {}",
                analysis.analysis_id
            ))
            .into()),
            Err(e) => Err(UploadError::from(e)),
        };

        match &result {
            Ok(_) => self.set_notice(None),
            Err(e) => {
                warn!("Analysis failed: {}", e);
                self.set_notice(Some(e.user_message()));
            }
        }
        result
    }

    fn reject(&self, error: UploadError) -> UploadError {
        warn!("Rejected upload: {}", error);
        self.set_notice(Some(error.user_message()));
        error
    }

    fn set_notice(&self, message: Option<String>) {
        if let Ok(mut notice) = self.notice.lock() {
            *notice = message;
        }
    }
}
