// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Federated food search through the HTTP API.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn remote_page(page: u32, total_hits: u64) -> serde_json::Value {
    json!({
        "totalHits": total_hits,
        "currentPage": page,
        "totalPages": 5,
        "foods": [{
            "fdcId": 2345678,
            "description": "Banana, raw",
            "dataType": "Foundation",
            "foodNutrients": [
                { "nutrientNumber": "208", "value": 89, "unitName": "KCAL" },
                { "nutrientNumber": "203", "value": 1.09, "unitName": "G" },
                { "nutrientNumber": "1234", "value": 7, "unitName": "G" }
            ]
        }]
    })
}

#[tokio::test]
async fn test_first_page_puts_local_foods_first() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_page(1, 41)))
        .mount(&mock_server)
        .await;

    let (app, _state) = common::create_test_app_with_usda(&mock_server.uri());

    let response = app
        .oneshot(common::get("/api/foods/search?query=banana&pageSize=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0]["fdcId"], 900240);
    assert_eq!(foods[0]["local"], true);
    assert_eq!(foods[1]["fdcId"], 2345678);
    assert_eq!(foods[1]["local"], false);
    assert_eq!(foods[1]["nutrients"]["calories"], 89.0);
    assert_eq!(foods[1]["nutrients"]["protein"], 1.09);
    assert_eq!(body["totalHits"], 42);
    assert_eq!(body["totalPages"], 5);
}

#[tokio::test]
async fn test_later_pages_skip_local_foods() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/foods/search"))
        .and(query_param("pageNumber", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(remote_page(2, 41)))
        .mount(&mock_server)
        .await;

    let (app, _state) = common::create_test_app_with_usda(&mock_server.uri());

    let response = app
        .oneshot(common::get("/api/foods/search?query=banana&page=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 1);
    assert_eq!(foods[0]["fdcId"], 2345678);
    assert_eq!(body["totalHits"], 41);
    assert_eq!(body["currentPage"], 2);
}

#[tokio::test]
async fn test_remote_outage_falls_back_to_local() {
    // Default test app points at an address nothing listens on
    let (app, _state) = common::create_test_app();

    let response = app
        .clone()
        .oneshot(common::get("/api/foods/search?query=dal"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let foods = body["foods"].as_array().unwrap();
    assert!(!foods.is_empty());
    assert!(foods.iter().all(|f| f["local"] == true));
    assert_eq!(body["totalPages"], 1);

    let response = app
        .oneshot(common::get("/api/foods/search?query=zzzzqqqq"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_search_requires_query() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/foods/search"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_food_detail_prefers_local_catalog() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/foods/900206"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert!(body["description"].as_str().unwrap().contains("Moshur Dal"));
    assert_eq!(body["local"], true);
    assert_eq!(body["baseServingSize"], 100.0);
    assert_eq!(body["nutrients"]["protein"], 9.0);
}

#[tokio::test]
async fn test_food_detail_nested_remote_format() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/food/171287"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fdcId": 171287,
            "description": "Egg, whole, raw, fresh",
            "dataType": "SR Legacy",
            "foodNutrients": [
                { "nutrient": { "number": "208", "name": "Energy", "unitName": "kcal" }, "amount": 143 },
                { "nutrient": { "number": "203", "name": "Protein", "unitName": "g" }, "amount": 12.6 }
            ]
        })))
        .mount(&mock_server)
        .await;

    let (app, _state) = common::create_test_app_with_usda(&mock_server.uri());

    let response = app
        .oneshot(common::get("/api/foods/171287"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["local"], false);
    assert_eq!(body["nutrients"]["calories"], 143.0);
    assert_eq!(body["nutrients"]["protein"], 12.6);
}
