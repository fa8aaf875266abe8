// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food log persistence.
//!
//! The whole log lives in one JSON blob. Every operation reads the blob,
//! mutations write it back. Storage failures never reach the caller: a failed
//! read looks like an empty log and a failed write is dropped, both with a
//! warning in the logs.

use crate::db::{keys, BlobStore};
use crate::models::{FoodLogEntry, FoodLogUpdate, NewFoodLogEntry};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// CRUD over the food log, backed by a [`BlobStore`].
#[derive(Clone)]
pub struct FoodLogStore {
    store: Arc<dyn BlobStore>,
    /// Serializes read-modify-write cycles.
    write_lock: Arc<Mutex<()>>,
}

impl FoodLogStore {
    pub fn new(store: Arc<dyn BlobStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    // ─── Reads ───────────────────────────────────────────────────

    /// Every entry, in insertion order.
    pub async fn get_all(&self) -> Vec<FoodLogEntry> {
        let raw = match self.store.get(keys::FOOD_LOG).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read food log, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Stored food log is corrupt, treating as empty");
                Vec::new()
            }
        }
    }

    pub async fn get_for_date(&self, date: &str) -> Vec<FoodLogEntry> {
        let mut entries = self.get_all().await;
        entries.retain(|e| e.date == date);
        entries
    }

    /// Entries with `start <= date <= end`, compared as `YYYY-MM-DD` strings.
    pub async fn get_for_date_range(&self, start: &str, end: &str) -> Vec<FoodLogEntry> {
        let mut entries = self.get_all().await;
        entries.retain(|e| e.date.as_str() >= start && e.date.as_str() <= end);
        entries
    }

    pub async fn get(&self, id: &str) -> Option<FoodLogEntry> {
        self.get_all().await.into_iter().find(|e| e.id == id)
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Append an entry with a fresh id and creation timestamp.
    pub async fn add(&self, entry: NewFoodLogEntry) -> FoodLogEntry {
        let _guard = self.write_lock.lock().await;

        let entry = entry.into_entry(
            Uuid::new_v4().to_string(),
            chrono::Utc::now().timestamp_millis(),
        );

        let mut entries = self.get_all().await;
        entries.push(entry.clone());
        self.persist(&entries).await;

        tracing::info!(
            id = %entry.id,
            date = %entry.date,
            food = %entry.food_name,
            "Food log entry added"
        );
        entry
    }

    /// Apply `update` to the entry with `id`. Returns `false` if there is none.
    pub async fn update(&self, id: &str, update: &FoodLogUpdate) -> bool {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.get_all().await;
        let Some(slot) = entries.iter_mut().find(|e| e.id == id) else {
            tracing::debug!(id, "Update for unknown food log entry");
            return false;
        };
        *slot = update.apply(slot);

        self.persist(&entries).await;
        tracing::info!(id, "Food log entry updated");
        true
    }

    /// Remove the entry with `id`. Returns `false` if there is none.
    pub async fn delete(&self, id: &str) -> bool {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.get_all().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            tracing::debug!(id, "Delete for unknown food log entry");
            return false;
        }

        self.persist(&entries).await;
        tracing::info!(id, "Food log entry deleted");
        true
    }

    /// Drop the whole log.
    pub async fn clear(&self) {
        let _guard = self.write_lock.lock().await;

        if let Err(e) = self.store.remove(keys::FOOD_LOG).await {
            tracing::warn!(error = %e, "Failed to clear food log");
            return;
        }
        tracing::info!("Food log cleared");
    }

    // ─── Export / Import ─────────────────────────────────────────

    /// The whole log as pretty-printed JSON.
    pub async fn export_all(&self) -> String {
        let entries = self.get_all().await;
        serde_json::to_string_pretty(&entries).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize food log for export");
            "[]".to_string()
        })
    }

    /// Replace the log with `payload`, which must be a JSON array of entries.
    ///
    /// Returns `false` and leaves the log untouched if the payload does not
    /// parse.
    pub async fn import_all(&self, payload: &str) -> bool {
        let entries: Vec<FoodLogEntry> = match serde_json::from_str(payload) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected food log import");
                return false;
            }
        };

        let _guard = self.write_lock.lock().await;
        self.persist(&entries).await;
        tracing::info!(count = entries.len(), "Food log imported");
        true
    }

    async fn persist(&self, entries: &[FoodLogEntry]) {
        let raw = match serde_json::to_string(entries) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize food log");
                return;
            }
        };

        if let Err(e) = self.store.set(keys::FOOD_LOG, &raw).await {
            tracing::warn!(error = %e, count = entries.len(), "Failed to persist food log");
        }
    }
}
