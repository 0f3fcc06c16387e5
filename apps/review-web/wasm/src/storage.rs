//! `window.localStorage` as a document store backend

use review_core::{StorageBackend, StorageError};
use wasm_bindgen::JsValue;

pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// The page's `localStorage`; unavailable outside a window or when the
    /// browser blocks storage (private mode, disabled cookies).
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    // Fails with QuotaExceededError when the origin is out of space
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> StorageError {
    let message = value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value));
    StorageError::Unavailable(message)
}
