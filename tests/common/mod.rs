// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use nutriflow::config::Config;
use nutriflow::db::MemoryBlobStore;
use nutriflow::routes::create_router;
use nutriflow::services::{FoodLogStore, LocalCatalog, SearchFederation, UsdaClient};
use nutriflow::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Create a test app whose FoodData Central calls go to `usda_base`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_usda(usda_base: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        usda_api_base: usda_base.to_string(),
        ..Config::test_default()
    };

    let food_log = FoodLogStore::new(Arc::new(MemoryBlobStore::new()));
    let catalog = Arc::new(LocalCatalog::embedded().expect("embedded catalog"));
    let usda = UsdaClient::new(&config.usda_api_base, &config.usda_api_key);
    let search = SearchFederation::new(catalog, Arc::new(usda.clone()), config.search_threshold);

    let state = Arc::new(AppState {
        config,
        food_log,
        search,
        usda,
    });

    (create_router(state.clone()), state)
}

/// Create a test app with in-memory storage and an unreachable
/// FoodData Central, so only the local catalog answers.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let base = Config::test_default().usda_api_base;
    create_test_app_with_usda(&base)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
