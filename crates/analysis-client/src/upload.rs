//! Files submitted for analysis
//!
//! The extension check mirrors the upload control's accept list. It keeps
//! obviously wrong files away from the service; it is not a security check.

use std::path::{Path, PathBuf};

pub use review_core::files::{
    content_type_for, format_file_size, is_accepted, ACCEPTED_EXTENSIONS,
};

use crate::error::UploadError;

#[derive(Debug, Clone)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    /// Where the file came from, if it lives on disk
    pub source: Option<PathBuf>,
}

impl UploadFile {
    pub fn new(filename: &str, bytes: Vec<u8>) -> Result<Self, UploadError> {
        if !is_accepted(filename) {
            return Err(UploadError::UnsupportedFile(filename.to_string()));
        }

        Ok(Self {
            filename: filename.to_string(),
            bytes,
            source: None,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !is_accepted(&filename) {
            return Err(UploadError::UnsupportedFile(path.display().to_string()));
        }

        let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let source = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Ok(Self {
            filename,
            bytes,
            source: Some(source),
        })
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_type(&self) -> &'static str {
        content_type_for(&self.filename)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.len())
    }

    /// `file://` URL of the source, for viewers that can open it
    pub fn file_url(&self) -> Option<String> {
        self.source
            .as_ref()
            .map(|path| format!("file://{}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_unsupported() {
        let err = UploadFile::new("notes.txt", b"hi".to_vec()).unwrap_err();
        assert!(matches!(err, UploadError::UnsupportedFile(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("panel.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let file = UploadFile::from_path(&path).unwrap();
        assert_eq!(file.filename, "panel.png");
        assert_eq!(file.len(), 4);
        assert_eq!(file.display_size(), "4 B");
        assert!(file.file_url().unwrap().starts_with("file://"));

        let missing = dir.path().join("missing.pdf");
        assert!(matches!(
            UploadFile::from_path(&missing),
            Err(UploadError::Read { .. })
        ));
    }
}
