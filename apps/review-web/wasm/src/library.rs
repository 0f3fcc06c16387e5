use review_core::files::format_file_size;
use review_core::{filter_options, fixtures, DocumentStore, MemoryStorage, Route, StorageBackend};
use serde::Serialize;
use shared_types::{analysis_to_document, AnalysisResponse};
use thiserror::Error;
use tracing::info;
use wasm_bindgen::prelude::*;

use crate::review_panel::ReviewPanel;
use crate::storage::LocalStorage;

/// Filter chip on the document summary page
#[derive(Debug, Clone, Serialize)]
pub struct FilterChip {
    pub filter: &'static str,
    pub label: &'static str,
    pub count: u32,
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Malformed analysis response: {0}")]
    Malformed(String),

    #[error("Analysis failed: service reported an error for analysis {0}")]
    Failed(String),
}

/// The document library backed by `localStorage`
#[wasm_bindgen]
pub struct DocumentLibrary {
    store: DocumentStore<Box<dyn StorageBackend>>,
}

impl DocumentLibrary {
    pub fn with_backend(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            store: DocumentStore::load(backend),
        }
    }

    pub fn store(&self) -> &DocumentStore<Box<dyn StorageBackend>> {
        &self.store
    }

    /// Map a Gateway response body into a document and prepend it.
    ///
    /// Bodies with `"status": "error"` are refused and leave the library
    /// unchanged.
    pub fn ingest(
        &mut self,
        response_json: &str,
        filename: &str,
        file_size_bytes: u64,
        file_url: Option<String>,
    ) -> Result<String, IngestError> {
        let analysis: AnalysisResponse = serde_json::from_str(response_json)
            .map_err(|e| IngestError::Malformed(e.to_string()))?;
        if !analysis.is_completed() {
            return Err(IngestError::Failed(analysis.analysis_id));
        }

        let document = analysis_to_document(
            analysis,
            filename,
            &format_file_size(file_size_bytes),
            file_url,
        );
        let id = document.id.clone();
        self.store.add(document);
        info!("Ingested analysis {} for {}", id, filename);
        Ok(id)
    }

    pub fn filter_chips(&self, id: &str) -> Option<Vec<FilterChip>> {
        let document = self.store.get_by_id(id)?;
        Some(
            filter_options(document)
                .into_iter()
                .map(|option| FilterChip {
                    filter: option.filter.as_str(),
                    label: option.label,
                    count: option.count,
                })
                .collect(),
        )
    }
}

#[wasm_bindgen]
impl DocumentLibrary {
    /// Library over `localStorage`, or an in-memory one when the browser
    /// refuses storage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let backend: Box<dyn StorageBackend> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Documents will not persist: {}",
                    e
                )));
                Box::new(MemoryStorage::new())
            }
        };
        Self::with_backend(backend)
    }

    #[wasm_bindgen(js_name = getDocumentsJson)]
    pub fn get_documents_json(&self) -> String {
        serde_json::to_string(self.store.documents()).unwrap_or_default()
    }

    /// `None` renders the "Document not found" placeholder
    #[wasm_bindgen(js_name = getDocumentJson)]
    pub fn get_document_json(&self, id: &str) -> Option<String> {
        self.store
            .get_by_id(id)
            .and_then(|doc| serde_json::to_string(doc).ok())
    }

    #[wasm_bindgen(js_name = getFilterOptionsJson)]
    pub fn get_filter_options_json(&self, id: &str) -> Option<String> {
        self.filter_chips(id)
            .and_then(|chips| serde_json::to_string(&chips).ok())
    }

    #[wasm_bindgen(js_name = getCount)]
    pub fn get_count(&self) -> u32 {
        self.store.len() as u32
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the new document's id
    #[wasm_bindgen(js_name = ingestAnalysis)]
    pub fn ingest_analysis(
        &mut self,
        response_json: &str,
        filename: &str,
        file_size_bytes: f64,
        file_url: Option<String>,
    ) -> Result<String, JsValue> {
        self.ingest(response_json, filename, file_size_bytes as u64, file_url)
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))
    }

    #[wasm_bindgen(js_name = seedSamples)]
    pub fn seed_samples(&mut self) -> bool {
        self.store.seed(fixtures::sample_documents())
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Review panel for a document, opened on `check_id` when it names one
    /// of its checks
    #[wasm_bindgen(js_name = openReview)]
    pub fn open_review(&self, id: &str, check_id: Option<String>) -> Option<ReviewPanel> {
        self.store
            .get_by_id(id)
            .map(|doc| ReviewPanel::open(doc, check_id.as_deref()))
    }

    /// Review panel for a `/documents/{id}/review?check=..` path
    #[wasm_bindgen(js_name = openRoute)]
    pub fn open_route(&self, path: &str) -> Option<ReviewPanel> {
        match Route::parse(path).ok()? {
            Route::Review { id, check } => self.open_review(&id, check),
            _ => None,
        }
    }
}

impl Default for DocumentLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use review_core::STORAGE_KEY;

    fn memory_library() -> DocumentLibrary {
        DocumentLibrary::with_backend(Box::new(MemoryStorage::new()))
    }

    fn response(status: &str) -> String {
        format!(
            r#"{{
                "analysis_id": "gw-1",
                "status": "{}",
                "created_at": "2026-02-03T10:00:00Z",
                "nec_version": "2023",
                "diagram_description": "Panelboard schedule",
                "findings": [
                    {{"id": "f1", "name": "Panel Labeling", "status": "warning",
                      "standard": "NEC 408.4", "message": "Circuit directory incomplete"}},
                    {{"id": "f2", "name": "Working Space", "status": "pass",
                      "standard": "NEC 110.26", "message": "Clearances shown"}}
                ],
                "summary": {{
                    "total_codes_evaluated": 2,
                    "passing_count": 1,
                    "warning_count": 1,
                    "failing_count": 0,
                    "compliance_score": 75.0
                }}
            }}"#,
            status
        )
    }

    #[test]
    fn test_ingest_completed_analysis() {
        let mut library = memory_library();
        let id = library
            .ingest(&response("completed"), "panel.png", 66_355, None)
            .unwrap();

        assert_eq!(id, "gw-1");
        let doc = library.store().get_by_id("gw-1").unwrap();
        assert_eq!(doc.uploaded_at, "2026-02-03");
        assert_eq!(doc.file_size, "64.8 KB");
        assert_eq!(doc.system_type.as_deref(), Some("commercial"));
        assert_eq!(doc.summary.warnings, 1);
        assert!(library.get_document_json("gw-1").is_some());
        assert!(library
            .store()
            .backend()
            .get(STORAGE_KEY)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_ingest_refuses_failed_or_malformed() {
        let mut library = memory_library();

        assert!(matches!(
            library.ingest(&response("error"), "panel.png", 10, None),
            Err(IngestError::Failed(_))
        ));
        assert!(matches!(
            library.ingest("{\"detail\": \"boom\"}", "panel.png", 10, None),
            Err(IngestError::Malformed(_))
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn test_filter_options_json() {
        let mut library = memory_library();
        library.seed_samples();

        let chips = library.filter_chips("4").unwrap();
        let counts: Vec<(&str, u32)> = chips.iter().map(|c| (c.filter, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                ("all", 5),
                ("fail", 1),
                ("warning", 1),
                ("pass", 2),
                ("not_applicable", 1)
            ]
        );
        assert_eq!(library.get_filter_options_json("missing"), None);
    }

    #[test]
    fn test_unknown_document_has_no_panel() {
        let mut library = memory_library();
        library.seed_samples();

        assert!(library.open_review("999", None).is_none());
        assert!(library.get_document_json("999").is_none());
        assert!(library.open_route("/documents/5").is_none());
    }

    #[test]
    fn test_open_route_selects_check() {
        let mut library = memory_library();
        library.seed_samples();

        let panel = library
            .open_route("/documents/5/review?check=rc4")
            .unwrap();
        assert_eq!(panel.active_id().as_deref(), Some("rc4"));
    }

    #[test]
    fn test_seed_and_clear() {
        let mut library = memory_library();
        assert!(library.seed_samples());
        assert!(!library.seed_samples());
        assert_eq!(library.get_count(), 5);

        library.clear();
        assert!(library.is_empty());
        assert_eq!(library.get_documents_json(), "[]");
    }
}
