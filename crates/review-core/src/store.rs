//! Document store: the single source of truth for analyzed documents
//!
//! The whole collection lives in memory and is mirrored to one key of a
//! [`StorageBackend`] after every mutation. Persistence is a best-effort
//! cache: read and write failures are logged and swallowed, the in-memory
//! collection keeps working.

use shared_types::Document;
use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::storage::StorageBackend;

/// Key the collection is persisted under
pub const STORAGE_KEY: &str = "nec-compliance-documents";

pub struct DocumentStore<S: StorageBackend> {
    backend: S,
    documents: Vec<Document>, // most recent first
}

impl<S: StorageBackend> DocumentStore<S> {
    /// Load the persisted collection.
    ///
    /// A missing key, a read failure, or a value that is not a JSON array of
    /// documents all yield an empty store.
    pub fn load(backend: S) -> Self {
        let documents = match read_documents(&backend) {
            Ok(documents) => documents,
            Err(e) => {
                warn!("Ignoring persisted documents: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} documents from storage", documents.len());
        Self { backend, documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Prepend a document and persist the collection.
    ///
    /// Summary counts that disagree with the check list are logged, never
    /// rejected.
    pub fn add(&mut self, document: Document) {
        if let Some(mismatch) = document.summary_mismatch() {
            warn!(
                "Document {} summary reports {} checks but carries {}",
                document.id, mismatch.summarized, mismatch.actual
            );
        }

        info!("Adding document {} ({})", document.id, document.filename);
        self.documents.insert(0, document);
        self.persist();
    }

    /// Populate an empty store with fixture documents.
    ///
    /// Returns false, leaving the store untouched, when it already holds data.
    pub fn seed(&mut self, documents: Vec<Document>) -> bool {
        if !self.documents.is_empty() {
            return false;
        }

        info!("Seeding store with {} documents", documents.len());
        self.documents = documents;
        self.persist();
        true
    }

    /// Drop every document and the persisted value
    pub fn clear(&mut self) {
        self.documents.clear();
        if let Err(e) = self.backend.remove(STORAGE_KEY) {
            warn!("Failed to remove persisted documents: {}", e);
        }
        info!("Cleared document store");
    }

    /// Write the full collection under [`STORAGE_KEY`]
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            warn!("Failed to persist documents: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.documents)?;
        self.backend.set(STORAGE_KEY, &json)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}

fn read_documents<S: StorageBackend>(backend: &S) -> Result<Vec<Document>, StorageError> {
    match backend.get(STORAGE_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}
