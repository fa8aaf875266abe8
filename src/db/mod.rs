// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer: a string key-value blob store.

pub mod file;
pub mod memory;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

use async_trait::async_trait;

/// Storage keys as constants.
pub mod keys {
    /// JSON array of every food log entry.
    pub const FOOD_LOG: &str = "nutriflow_food_log";
}

/// Storage backend failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Minimal persistent key-value store holding one string blob per key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read a blob. A key that was never written is `Ok(None)`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a blob, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a blob. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
