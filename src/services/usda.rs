// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! USDA FoodData Central API client.
//!
//! Handles:
//! - Food search across the four survey/branded/foundation/legacy datasets
//! - Single-food detail lookups
//! - An in-process response cache, since FDC data changes rarely and the
//!   demo API key is heavily rate limited

use crate::error::AppError;
use crate::models::{FoodItem, SearchPage};
use crate::services::search::FoodSource;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Datasets included in every search.
pub const DATA_TYPES: [&str; 4] = ["Survey (FNDDS)", "Branded", "Foundation", "SR Legacy"];

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// How long search results stay fresh.
pub const SEARCH_TTL: Duration = Duration::from_secs(60 * 60);

/// How long single-food details stay fresh.
pub const FOOD_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cached upstream response body.
#[derive(Clone)]
pub struct CachedResponse {
    body: Arc<Value>,
    expires_at: Instant,
}

/// Shared response cache type for use in AppState.
pub type ResponseCache = Arc<DashMap<String, CachedResponse>>;

/// FoodData Central client.
#[derive(Clone)]
pub struct UsdaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    cache: ResponseCache,
}

impl UsdaClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Raw search response, exactly as FDC returned it.
    pub async fn search_raw(
        &self,
        query: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<Arc<Value>, AppError> {
        let url = format!("{}/foods/search", self.base_url);

        let mut params: Vec<(&str, String)> = vec![
            ("query", query.to_string()),
            ("pageNumber", page_number.to_string()),
            ("pageSize", page_size.to_string()),
            ("api_key", self.api_key.clone()),
        ];
        params.extend(DATA_TYPES.iter().map(|t| ("dataType", t.to_string())));

        let cache_key = format!("search:{}:{}:{}", query, page_number, page_size);
        self.get_cached(cache_key, &url, &params, SEARCH_TTL).await
    }

    /// Raw single-food response, exactly as FDC returned it.
    pub async fn food_raw(&self, fdc_id: u64) -> Result<Arc<Value>, AppError> {
        let url = format!("{}/food/{}", self.base_url, fdc_id);
        let params = [("api_key", self.api_key.clone())];

        let cache_key = format!("food:{}", fdc_id);
        self.get_cached(cache_key, &url, &params, FOOD_TTL).await
    }

    /// Typed search results.
    pub async fn search(
        &self,
        query: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<SearchPage, AppError> {
        let body = self.search_raw(query, page_number, page_size).await?;
        decode(&body)
    }

    /// Typed single food.
    pub async fn food(&self, fdc_id: u64) -> Result<FoodItem, AppError> {
        let body = self.food_raw(fdc_id).await?;
        decode(&body)
    }

    /// Drop expired cache entries.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.cache.retain(|_, entry| entry.expires_at > now);
    }

    async fn get_cached(
        &self,
        cache_key: String,
        url: &str,
        params: &[(&str, String)],
        ttl: Duration,
    ) -> Result<Arc<Value>, AppError> {
        if let Some(entry) = self.cache.get(&cache_key) {
            if entry.expires_at > Instant::now() {
                tracing::debug!(key = %cache_key, "USDA cache hit");
                return Ok(entry.body.clone());
            }
        }

        let body: Value = self.get_json(url, params).await?;
        let body = Arc::new(body);

        self.cache.insert(
            cache_key,
            CachedResponse {
                body: body.clone(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("USDA rate limit hit (429)");
            }

            return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))
    }
}

fn decode<T: DeserializeOwned>(body: &Value) -> Result<T, AppError> {
    T::deserialize(body).map_err(|e| AppError::Upstream(format!("Unexpected response shape: {}", e)))
}

#[async_trait]
impl FoodSource for UsdaClient {
    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<SearchPage, AppError> {
        UsdaClient::search(self, query, page, page_size).await
    }

    async fn food(&self, fdc_id: u64) -> Result<FoodItem, AppError> {
        UsdaClient::food(self, fdc_id).await
    }
}
