// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food log routes.

use crate::error::{AppError, Result};
use crate::models::{FoodLogEntry, FoodLogUpdate, MealType, NewFoodLogEntry};
use crate::routes::foods::base_serving_size;
use crate::services::aggregate::sort_newest_first;
use crate::services::nutrition::{normalize, scale};
use crate::time_utils::{parse_date, today};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/log",
            get(list_entries).post(add_entry).delete(clear_log),
        )
        .route("/api/log/export", get(export_log))
        .route("/api/log/import", post(import_log))
        .route("/api/log/{id}", patch(update_entry).delete(delete_entry))
}

/// Reject anything that is not a real `YYYY-MM-DD` date.
pub(crate) fn require_date(raw: &str, name: &str) -> Result<()> {
    parse_date(raw)
        .map(|_| ())
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a YYYY-MM-DD date", name)))
}

// ─── Listing ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ListQuery {
    date: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

/// Entries for a day, a date range, or everything; newest first.
async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<FoodLogEntry>>> {
    let mut entries = match (params.date, params.start, params.end) {
        (Some(date), None, None) => {
            require_date(&date, "date")?;
            state.food_log.get_for_date(&date).await
        }
        (None, Some(start), Some(end)) => {
            require_date(&start, "start")?;
            require_date(&end, "end")?;
            state.food_log.get_for_date_range(&start, &end).await
        }
        (None, None, None) => state.food_log.get_all().await,
        _ => {
            return Err(AppError::BadRequest(
                "Use either date or both start and end".to_string(),
            ))
        }
    };

    sort_newest_first(&mut entries);
    Ok(Json(entries))
}

// ─── Add ─────────────────────────────────────────────────────

/// Log a serving of a catalog food.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AddEntryRequest {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub fdc_id: u64,
    /// Defaults to the food's own serving size.
    pub serving_size: Option<f64>,
    /// Defaults to today.
    pub date: Option<String>,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

async fn add_entry(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddEntryRequest>,
) -> Result<(StatusCode, Json<FoodLogEntry>)> {
    let date = match req.date {
        Some(date) => {
            require_date(&date, "date")?;
            date
        }
        None => today(),
    };

    let food = state.search.food(req.fdc_id).await?;

    let base = base_serving_size(&food);
    let serving_size = req.serving_size.unwrap_or(base);
    let nutrients = scale(&normalize(&food), serving_size, base)?;

    let entry = state
        .food_log
        .add(NewFoodLogEntry {
            date,
            food_name: food.description.clone(),
            brand_name: food.brand().map(str::to_string),
            fdc_id: Some(food.fdc_id),
            serving_size,
            serving_size_unit: food
                .serving_size_unit
                .clone()
                .unwrap_or_else(|| "g".to_string()),
            nutrients,
            meal_type: req.meal_type,
            notes: req.notes.filter(|n| !n.trim().is_empty()),
        })
        .await;

    Ok((StatusCode::CREATED, Json(entry)))
}

// ─── Update / Delete ─────────────────────────────────────────

async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(update): Json<FoodLogUpdate>,
) -> Result<Json<FoodLogEntry>> {
    if update.is_empty() {
        return Err(AppError::BadRequest(
            "Update must set at least one field".to_string(),
        ));
    }
    if let Some(date) = &update.date {
        require_date(date, "date")?;
    }
    if let Some(size) = update.serving_size {
        if !size.is_finite() || size < 0.0 {
            return Err(AppError::BadRequest(
                "servingSize must be a non-negative number".to_string(),
            ));
        }
    }
    if update
        .nutrients
        .values()
        .any(|(_, v)| !v.is_finite() || v < 0.0)
    {
        return Err(AppError::BadRequest(
            "Nutrient values must be non-negative numbers".to_string(),
        ));
    }

    if !state.food_log.update(&id, &update).await {
        return Err(AppError::NotFound(format!("Food log entry {}", id)));
    }

    let entry = state
        .food_log
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Food log entry {}", id)))?;
    Ok(Json(entry))
}

async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.food_log.delete(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Food log entry {}", id)))
    }
}

async fn clear_log(State(state): State<Arc<AppState>>) -> StatusCode {
    state.food_log.clear().await;
    StatusCode::NO_CONTENT
}

// ─── Export / Import ─────────────────────────────────────────

async fn export_log(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = state.food_log.export_all().await;
    let disposition = format!("attachment; filename=\"nutriflow-export-{}.json\"", today());

    (
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}

#[derive(Debug, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ImportResponse {
    pub success: bool,
    pub count: usize,
}

/// Replace the whole log with an exported blob.
async fn import_log(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<Json<ImportResponse>> {
    if !state.food_log.import_all(&body).await {
        return Err(AppError::BadRequest(
            "Invalid import data: expected a JSON array of food log entries".to_string(),
        ));
    }

    let count = state.food_log.get_all().await.len();
    Ok(Json(ImportResponse {
        success: true,
        count,
    }))
}
