// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary, history and metrics API tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

const PROFILE: &str = "age=25&gender=male&weight=70&height=175&activityLevel=moderately_active";

#[tokio::test]
async fn test_metrics_for_profile() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get(&format!("/api/metrics?{}", PROFILE)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["bmi"]["bmi"], 22.9);
    assert_eq!(body["bmi"]["category"], "Normal weight");
    assert_eq!(body["bmi"]["isHealthy"], true);
    // 700 + 1093.75 - 125 + 5 = 1673.75, then x1.55
    assert_eq!(body["tdee"]["bmr"], 1674.0);
    assert_eq!(body["tdee"]["tdee"], 2595.0);
    assert_eq!(body["goal"], "maintain");
    assert_eq!(body["goalCalories"], 2595.0);
    assert_eq!(body["macros"]["protein"], 126.0);
    assert_eq!(body["macros"]["fat"], 72.0);
    assert_eq!(body["macros"]["carbs"], 361.0);
    assert_eq!(body["rda"]["protein"], 112.0);
    assert_eq!(body["rda"]["fat"], 72.0);
    assert_eq!(body["rda"]["carbs"], 375.0);
    assert_eq!(body["rda"]["fiber"], 38.0);
    assert_eq!(body["rda"]["vitamin_c"], 90.0);
}

#[tokio::test]
async fn test_metrics_goal_and_protein() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get(&format!(
            "/api/metrics?{}&goal=lose&proteinPerKg=2",
            PROFILE
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["goalCalories"], 2095.0);
    assert_eq!(body["macros"]["calories"], 2095.0);
    assert_eq!(body["macros"]["protein"], 140.0);
}

#[tokio::test]
async fn test_metrics_validation() {
    let (app, _state) = common::create_test_app();

    // Partial profile
    let response = app
        .clone()
        .oneshot(common::get("/api/metrics?age=25&gender=male"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Degenerate height
    let response = app
        .oneshot(common::get(
            "/api/metrics?age=25&gender=male&weight=70&height=0&activityLevel=sedentary",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("height"));
}

#[tokio::test]
async fn test_metrics_reject_negative_macro_split() {
    let (app, _state) = common::create_test_app();

    // 10 g/kg * 70 kg = 2800 kcal of protein against a 2595 kcal budget
    let response = app
        .oneshot(common::get(&format!(
            "/api/metrics?{}&proteinPerKg=10",
            PROFILE
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("carbohydrates"));
}

#[tokio::test]
async fn test_summary_groups_meals_and_tracks_progress() {
    let (app, _state) = common::create_test_app();

    for (fdc_id, meal) in [(900240, "breakfast"), (900200, "lunch"), (900206, "lunch")] {
        let response = app
            .clone()
            .oneshot(common::json_request(
                "POST",
                "/api/log",
                &json!({ "fdcId": fdc_id, "date": "2024-01-15", "mealType": meal }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(common::get(&format!(
            "/api/summary?date=2024-01-15&{}",
            PROFILE
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["entryCount"], 3);
    // 89 + 130 + 116
    assert_eq!(body["totals"]["calories"], 335.0);
    assert_eq!(body["displayDate"], "Jan 15, 2024");

    let meals = body["meals"].as_array().unwrap();
    let labels: Vec<&str> = meals.iter().map(|m| m["meal"].as_str().unwrap()).collect();
    assert_eq!(labels, vec!["breakfast", "lunch", "dinner", "snack", "other"]);
    assert_eq!(meals[1]["entries"].as_array().unwrap().len(), 2);
    assert_eq!(meals[1]["totals"]["calories"], 246.0);

    let targets = &body["targets"];
    assert_eq!(targets["macros"]["calories"], 2595.0);
    let calories = &targets["macroProgress"][0];
    assert_eq!(calories["nutrient"], "calories");
    // 335 / 2595 = 12.9%
    assert_eq!(calories["percentage"], 13.0);
    assert_eq!(calories["remaining"], 2260.0);
    assert_eq!(calories["band"], "low");
    assert_eq!(targets["micronutrientProgress"].as_array().unwrap().len(), 17);
}

#[tokio::test]
async fn test_summary_without_profile_has_no_targets() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(common::get("/api/summary?date=2024-01-15"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    assert_eq!(body["entryCount"], 0);
    assert_eq!(body["totals"]["calories"], 0.0);
    assert!(body["targets"].is_null());
}

#[tokio::test]
async fn test_history_days() {
    let (app, state) = common::create_test_app();

    let export: Vec<serde_json::Value> = (1..=10)
        .map(|day| {
            json!({
                "id": format!("entry-{}", day),
                "date": format!("2024-01-{:02}", day),
                "timestamp": 1_704_067_200_000_i64 + day * 86_400_000,
                "foodName": "Banana",
                "servingSize": 100,
                "servingSizeUnit": "g",
                "calories": 89,
                "protein": 1.1,
                "carbs": 22.8,
                "fat": 0.3
            })
        })
        .collect();
    assert!(
        state
            .food_log
            .import_all(&serde_json::to_string(&export).unwrap())
            .await
    );

    let response = app
        .clone()
        .oneshot(common::get("/api/history"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-01-04");
    assert_eq!(days[6]["date"], "2024-01-10");
    assert_eq!(days[6]["calories"], 89.0);

    let response = app
        .clone()
        .oneshot(common::get("/api/history?days=3"))
        .await
        .unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let response = app
        .oneshot(common::get("/api/history?days=0"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
