use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::{window, Storage};

use crate::error::AppError;

/// Raw string key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

fn get_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `window.localStorage`. Every call re-acquires the handle so a storage
/// that is denied (private mode, sandboxed iframe) just reads as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let st = get_storage().ok_or(AppError::StorageUnavailable)?;
        st.set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{e:?}")))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let st = Self::default();
        st.items.borrow_mut().insert(key.into(), value.into());
        st
    }

    /// Rejects every write, like a full or denied `localStorage`.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::Storage("QuotaExceededError".into()));
        }
        self.items.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}
