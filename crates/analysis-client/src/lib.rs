//! Client side of the NEC diagram analysis service
//!
//! Submits diagrams to the service, maps the result into a stored
//! [`shared_types::Document`] and guards the upload control:
//!
//! - [`client`]: HTTP transport (`reqwest`) behind the [`AnalysisGateway`] trait
//! - [`uploader`]: busy flag, error notice, store insertion
//! - [`upload`]: accepted file types and size formatting
//! - [`config`]: service address and NEC edition

pub mod client;
pub mod config;
pub mod error;
pub mod upload;
pub mod uploader;

pub use client::{AnalysisGateway, GatewayClient, HealthStatus};
pub use config::GatewayConfig;
pub use error::{GatewayError, UploadError};
pub use upload::{format_file_size, is_accepted, UploadFile, ACCEPTED_EXTENSIONS};
pub use uploader::Uploader;
