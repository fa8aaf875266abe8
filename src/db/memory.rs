// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory blob store for tests and ephemeral runs.

use crate::db::{BlobStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<String, String>>,
    offline: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store where every operation fails, for exercising degraded paths.
    pub fn new_offline() -> Self {
        Self {
            blobs: RwLock::default(),
            offline: true,
        }
    }

    /// Seed a key directly, bypassing the trait.
    pub fn with_blob(self, key: &str, value: &str) -> Self {
        if let Ok(mut blobs) = self.blobs.write() {
            blobs.insert(key.to_string(), value.to_string());
        }
        self
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable("store is offline".to_string()))
        } else {
            Ok(())
        }
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("lock poisoned".to_string())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_online()?;
        let blobs = self.blobs.read().map_err(|_| Self::poisoned())?;
        Ok(blobs.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_online()?;
        let mut blobs = self.blobs.write().map_err(|_| Self::poisoned())?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check_online()?;
        let mut blobs = self.blobs.write().map_err(|_| Self::poisoned())?;
        blobs.remove(key);
        Ok(())
    }
}
