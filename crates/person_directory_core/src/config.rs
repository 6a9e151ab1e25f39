//! Directory runtime configuration.
//!
//! # Invariants
//! - Page size is never zero.
//! - The storage key is fixed for the lifetime of a session.

use std::num::NonZeroUsize;

/// Number of records shown per page.
pub const PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(size) => size,
    None => unreachable!(),
};

/// Storage key holding the serialized record array.
pub const DEFAULT_STORAGE_KEY: &str = "persons";

/// Settings shared by the store and view state of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub page_size: NonZeroUsize,
    pub storage_key: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl DirectoryConfig {
    /// Returns a copy using `page_size` records per page.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Returns a copy persisting under `storage_key`.
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }
}
