// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Federated food search: local catalog first, then FoodData Central.

use crate::error::AppError;
use crate::models::{FoodItem, SearchPage};
use crate::services::catalog::LocalCatalog;
use async_trait::async_trait;
use std::sync::Arc;

/// Default fuzzy-match tolerance for the local catalog.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// A remote food database.
#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<SearchPage, AppError>;

    async fn food(&self, fdc_id: u64) -> Result<FoodItem, AppError>;
}

/// Merges local catalog matches with a remote [`FoodSource`].
#[derive(Clone)]
pub struct SearchFederation {
    catalog: Arc<LocalCatalog>,
    remote: Arc<dyn FoodSource>,
    threshold: f64,
}

impl SearchFederation {
    pub fn new(catalog: Arc<LocalCatalog>, remote: Arc<dyn FoodSource>, threshold: f64) -> Self {
        Self {
            catalog,
            remote,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn catalog(&self) -> &LocalCatalog {
        &self.catalog
    }

    /// One page of results.
    ///
    /// Local matches only ever appear on page 1, ahead of the remote results,
    /// and are counted in that page's totals. Later pages are remote only.
    /// If the remote call fails on page 1 and there are local matches, those
    /// are returned on their own.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<SearchPage, AppError> {
        let page = page.max(1);
        let page_size = page_size.max(1);

        if page > 1 {
            return self.remote.search(query, page, page_size).await;
        }

        let local = self.catalog.search(query, self.threshold);
        let local_hits = local.len() as u64;

        let remote = match self.remote.search(query, page, page_size).await {
            Ok(remote) => remote,
            Err(e) if !local.is_empty() => {
                tracing::warn!(
                    error = %e,
                    query,
                    local_hits,
                    "Remote search failed, returning local matches only"
                );
                return Ok(SearchPage {
                    foods: local,
                    total_hits: local_hits,
                    current_page: 1,
                    total_pages: 1,
                });
            }
            Err(e) => return Err(e),
        };

        let total_hits = local_hits + remote.total_hits;
        let total_pages = total_hits.div_ceil(u64::from(page_size)).max(1);

        tracing::debug!(
            query,
            local_hits,
            remote_hits = remote.total_hits,
            "Federated search"
        );

        let mut foods = local;
        foods.extend(remote.foods);

        Ok(SearchPage {
            foods,
            total_hits,
            current_page: 1,
            total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        })
    }

    /// A single food, from the local catalog if it is there.
    pub async fn food(&self, fdc_id: u64) -> Result<FoodItem, AppError> {
        if let Some(food) = self.catalog.get(fdc_id) {
            return Ok(food.clone());
        }
        self.remote.food(fdc_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodNutrient;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeRemote {
        page: Option<SearchPage>,
        calls: AtomicUsize,
    }

    impl FakeRemote {
        fn ok(foods: Vec<FoodItem>, total_hits: u64) -> Self {
            Self {
                page: Some(SearchPage {
                    foods,
                    total_hits,
                    current_page: 1,
                    total_pages: 1,
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                page: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FoodSource for FakeRemote {
        async fn search(
            &self,
            _query: &str,
            page: u32,
            _page_size: u32,
        ) -> Result<SearchPage, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.page {
                Some(p) => Ok(SearchPage {
                    current_page: page,
                    ..p.clone()
                }),
                None => Err(AppError::Upstream("connection refused".to_string())),
            }
        }

        async fn food(&self, fdc_id: u64) -> Result<FoodItem, AppError> {
            Err(AppError::NotFound(format!("food {}", fdc_id)))
        }
    }

    fn food(fdc_id: u64, name: &str) -> FoodItem {
        FoodItem {
            fdc_id,
            description: name.to_string(),
            brand_name: None,
            brand_owner: None,
            data_type: Some("Foundation".to_string()),
            food_nutrients: vec![FoodNutrient::new(208, 100.0, "kcal")],
            serving_size: None,
            serving_size_unit: None,
            household_serving_full_text: None,
        }
    }

    fn catalog() -> Arc<LocalCatalog> {
        Arc::new(LocalCatalog::from_foods(vec![
            food(900001, "Steamed Rice / Sada Bhat"),
            food(900002, "Rice Cake / Vapa Pitha"),
            food(900003, "Banana / Kala"),
        ]))
    }

    fn remote_foods(n: u64) -> Vec<FoodItem> {
        (0..n).map(|i| food(170000 + i, "Rice, white, cooked")).collect()
    }

    #[tokio::test]
    async fn test_first_page_prepends_local_matches() {
        let remote = Arc::new(FakeRemote::ok(remote_foods(10), 95));
        let federation = SearchFederation::new(catalog(), remote, 0.4);

        let page = federation.search("rice", 1, 10).await.unwrap();

        assert_eq!(page.foods.len(), 12);
        assert_eq!(page.foods[0].fdc_id, 900001);
        assert_eq!(page.foods[1].fdc_id, 900002);
        assert_eq!(page.foods[2].fdc_id, 170000);
        assert_eq!(page.total_hits, 97);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.current_page, 1);
    }

    #[tokio::test]
    async fn test_later_pages_are_remote_only() {
        let remote = Arc::new(FakeRemote::ok(remote_foods(10), 95));
        let federation = SearchFederation::new(catalog(), remote, 0.4);

        let page = federation.search("rice", 2, 10).await.unwrap();

        assert_eq!(page.foods.len(), 10);
        assert!(page.foods.iter().all(|f| f.fdc_id < 900000));
        assert_eq!(page.total_hits, 95);
        assert_eq!(page.current_page, 2);
    }

    #[tokio::test]
    async fn test_remote_failure_with_local_matches_degrades() {
        let remote = Arc::new(FakeRemote::failing());
        let federation = SearchFederation::new(catalog(), remote.clone(), 0.4);

        let page = federation.search("rice", 1, 10).await.unwrap();

        assert_eq!(page.foods.len(), 2);
        assert_eq!(page.total_hits, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_without_local_matches_propagates() {
        let federation = SearchFederation::new(catalog(), Arc::new(FakeRemote::failing()), 0.4);

        let err = federation.search("quinoa", 1, 10).await.unwrap_err();
        assert!(err.is_upstream());

        let err = federation.search("rice", 2, 10).await.unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_total_pages_is_at_least_one() {
        let federation = SearchFederation::new(catalog(), Arc::new(FakeRemote::ok(vec![], 0)), 0.4);

        let page = federation.search("quinoa", 1, 10).await.unwrap();
        assert!(page.foods.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_food_prefers_local_catalog() {
        let federation = SearchFederation::new(catalog(), Arc::new(FakeRemote::failing()), 0.4);

        let banana = federation.food(900003).await.unwrap();
        assert_eq!(banana.description, "Banana / Kala");

        assert!(matches!(
            federation.food(12345).await,
            Err(AppError::NotFound(_))
        ));
    }
}
