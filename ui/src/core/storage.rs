//! Local persistence helpers for settings.
//!
//! The dashboard persists a single value (the theme preference). The `Storage`
//! trait keeps that access injectable: `LocalStorage` is the real backend,
//! `MemoryStorage` is used by tests and previews.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write for `{0}`")]
    Rejected(String),
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings encoding error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage` in the browser, a JSON settings file natively.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn backend() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::backend()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::backend().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected(key.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalStorage {
    fn settings_path() -> Result<std::path::PathBuf, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "Fareview", "Fareview")
            .ok_or(StorageError::Unavailable)?;
        Ok(dirs.config_dir().join("settings.json"))
    }

    fn load() -> Result<BTreeMap<String, String>, StorageError> {
        let path = Self::settings_path()?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Storage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::load() {
            Ok(entries) => entries.get(key).cloned(),
            Err(err) => {
                tracing::debug!(%err, "settings unreadable");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = Self::load()?;
        entries.insert(key.to_string(), value.to_string());

        let path = Self::settings_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
