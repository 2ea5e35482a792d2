//! Key-value backends for the durable review mirror.
//! The browser backend wraps `window.localStorage`; the memory backend serves
//! tests, server-side rendering and the fallback when the browser refuses storage.
use gloo_utils::errors::JsError;
use leptos::logging::log;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

pub trait ReviewStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites whatever is stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, scoped to the page origin.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn local() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".into()))?;
        match window.local_storage() {
            Ok(Some(inner)) => Ok(BrowserStorage { inner }),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".into())),
            // Safari private mode and blocked third-party contexts throw here
            Err(err) => Err(StorageError::Unavailable(describe_js_error(err))),
        }
    }
}

impl ReviewStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|err| StorageError::Read(describe_js_error(err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|err| {
            match JsError::try_from(err) {
                Ok(js) if js.name == "QuotaExceededError" || js.name == "NS_ERROR_DOM_QUOTA_REACHED" => {
                    StorageError::QuotaExceeded
                }
                Ok(js) => StorageError::Write(format!("{}: {}", js.name, js.message)),
                Err(other) => StorageError::Write(other.to_string()),
            }
        })
    }
}

fn describe_js_error(err: JsValue) -> String {
    match JsError::try_from(err) {
        Ok(js) => format!("{}: {}", js.name, js.message),
        Err(other) => other.to_string(),
    }
}

/// Process-local storage. Clones share the same map, like two handles on one origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl ReviewStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        log!("[STORAGE] memory write: {} ({} bytes)", key, value.len());
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads succeed with nothing stored; every write fails as a full quota would.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FullStorage;

#[cfg(test)]
impl ReviewStorage for FullStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::QuotaExceeded)
    }
}
