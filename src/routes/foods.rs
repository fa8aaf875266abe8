// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food search and detail, with nutrients already normalized.

use crate::error::{AppError, Result};
use crate::models::{FoodItem, NutrientRecord};
use crate::services::nutrition::{normalize, DEFAULT_BASE_SERVING};
use crate::services::usda::DEFAULT_PAGE_SIZE;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_PAGE_SIZE: u32 = 200;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/foods/search", get(search_foods))
        .route("/api/foods/{fdc_id}", get(get_food))
}

/// A food ready for display and logging.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodSummary {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub fdc_id: u64,
    pub description: String,
    pub brand: Option<String>,
    pub data_type: Option<String>,
    /// True for foods from the local catalog.
    pub local: bool,
    pub serving_label: String,
    /// Serving size the nutrient values refer to.
    pub base_serving_size: f64,
    pub serving_size_unit: String,
    pub nutrients: NutrientRecord,
}

impl FoodSummary {
    fn from_food(food: &FoodItem, local: bool) -> Self {
        Self {
            fdc_id: food.fdc_id,
            description: food.description.clone(),
            brand: food.brand().map(str::to_string),
            data_type: food.data_type.clone(),
            local,
            serving_label: food.serving_label(),
            base_serving_size: base_serving_size(food),
            serving_size_unit: food
                .serving_size_unit
                .clone()
                .unwrap_or_else(|| "g".to_string()),
            nutrients: normalize(food),
        }
    }
}

/// Serving size a food's nutrient values are stated for.
pub fn base_serving_size(food: &FoodItem) -> f64 {
    food.serving_size
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_BASE_SERVING)
}

// ─── Search ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchQuery {
    query: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodSearchResponse {
    pub foods: Vec<FoodSummary>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_hits: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

async fn search_foods(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<FoodSearchResponse>> {
    let query = params
        .query
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter is required".to_string()))?;
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let result = state.search.search(query.trim(), page, page_size).await?;
    let catalog = state.search.catalog();

    let foods = result
        .foods
        .iter()
        .map(|food| FoodSummary::from_food(food, catalog.get(food.fdc_id).is_some()))
        .collect();

    Ok(Json(FoodSearchResponse {
        foods,
        total_hits: result.total_hits,
        current_page: result.current_page,
        total_pages: result.total_pages,
    }))
}

// ─── Detail ──────────────────────────────────────────────────

async fn get_food(
    State(state): State<Arc<AppState>>,
    Path(fdc_id): Path<u64>,
) -> Result<Json<FoodSummary>> {
    let local = state.search.catalog().get(fdc_id).is_some();
    let food = state.search.food(fdc_id).await?;
    Ok(Json(FoodSummary::from_food(&food, local)))
}
