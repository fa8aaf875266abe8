// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FoodData Central proxy.
//!
//! Keeps the API key on the server and passes FDC responses through
//! unchanged, with browser cache headers.

use crate::error::{AppError, Result};
use crate::services::usda::DEFAULT_PAGE_SIZE;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

const SEARCH_CACHE_CONTROL: &str = "public, max-age=3600";
const FOOD_CACHE_CONTROL: &str = "public, max-age=86400";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/usda", get(proxy))
}

/// Query parameters are kept as strings so that bad values get the same
/// JSON error body as missing ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyQuery {
    action: Option<String>,
    query: Option<String>,
    page_number: Option<String>,
    page_size: Option<String>,
    fdc_id: Option<String>,
}

async fn proxy(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProxyQuery>,
) -> Result<impl IntoResponse> {
    match params.action.as_deref() {
        Some("search") => {
            let query = non_empty(params.query)
                .ok_or_else(|| AppError::BadRequest("Query parameter is required".to_string()))?;
            let page_number = parse_positive(params.page_number, 1, "pageNumber")?;
            let page_size = parse_positive(params.page_size, DEFAULT_PAGE_SIZE, "pageSize")?;

            let body = state.usda.search_raw(&query, page_number, page_size).await?;
            Ok((
                [(header::CACHE_CONTROL, SEARCH_CACHE_CONTROL)],
                Json((*body).clone()),
            ))
        }
        Some("food") => {
            let raw = non_empty(params.fdc_id)
                .ok_or_else(|| AppError::BadRequest("fdcId parameter is required".to_string()))?;
            let fdc_id: u64 = raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid fdcId: {}", raw)))?;

            let body = state.usda.food_raw(fdc_id).await?;
            Ok((
                [(header::CACHE_CONTROL, FOOD_CACHE_CONTROL)],
                Json((*body).clone()),
            ))
        }
        _ => Err(AppError::BadRequest(
            "Invalid action. Use \"search\" or \"food\"".to_string(),
        )),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_positive(raw: Option<String>, default: u32, name: &str) -> Result<u32> {
    match non_empty(raw) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: {}", name, raw))),
    }
}
