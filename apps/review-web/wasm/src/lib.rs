//! Browser bindings for the NEC review front-end
//!
//! The page keeps one [`DocumentLibrary`] for the library and summary
//! screens and asks it for a [`ReviewPanel`] when entering a review route.
//! Uploading stays in JavaScript: the page posts the file to the analysis
//! service and hands the response body to `ingestAnalysis`.

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
use wasm_bindgen::prelude::*;

pub mod library;
pub mod review_panel;
pub mod storage;

pub use library::{DocumentLibrary, FilterChip, IngestError};
pub use review_panel::{CheckRow, ReviewPanel};
pub use storage::LocalStorage;

/// Runs once when the module is instantiated: Rust panics go to the
/// browser console and `tracing` events are routed to it.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = WASMLayerConfigBuilder::new()
        .set_max_level(tracing::Level::INFO)
        .build();
    let subscriber = tracing_subscriber::registry().with(WASMLayer::new(config));
    // Only the first instantiation on a page gets to install it
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        info!("NEC review bindings initialized");
    }
}

/// Size label for a file the page is about to upload
#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size_wasm(bytes: f64) -> String {
    review_core::files::format_file_size(bytes as u64)
}

/// Whether the upload control should accept this file name
#[wasm_bindgen(js_name = isAcceptedFile)]
pub fn is_accepted_file(filename: &str) -> bool {
    review_core::files::is_accepted(filename)
}
