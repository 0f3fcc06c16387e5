//! Review core for NEC compliance results
//!
//! Everything a front-end needs between the analysis backend and the
//! screen:
//!
//! - [`store`]: the document collection and its persistence
//! - [`storage`]: key/value backends the store writes through
//! - [`navigation`]: filtering, severity ordering and the review session
//! - [`viewer`]: drawing pane zoom and sheet state
//! - [`routes`]: library, summary and review routes
//! - [`display`]: shared text renderings and placeholder messages
//! - [`files`]: upload accept list and size labels

pub mod display;
pub mod error;
pub mod files;
pub mod fixtures;
pub mod navigation;
pub mod routes;
pub mod storage;
pub mod store;
pub mod viewer;

pub use error::{RouteError, StorageError};
pub use navigation::{
    filter_checks, filter_options, sort_by_severity, visible_checks, CheckFilter, FilterOption,
    ReviewSession, ViewMode,
};
pub use routes::Route;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{DocumentStore, STORAGE_KEY};
pub use viewer::DrawingViewer;

// Re-export the data model so front-ends need only one dependency
pub use shared_types::{Check, CheckStatus, Document, DocumentStatus, DocumentSummary};
