// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily summary, history and body-metric routes.

use crate::error::{AppError, Result};
use crate::models::{
    ActivityLevel, FoodLogEntry, Gender, Goal, MacroTargets, Nutrient, NutrientRecord, RdaTargets,
    UserProfile,
};
use crate::routes::log::require_date;
use crate::services::aggregate::{
    daily_totals, group_by_meal, progress, sort_newest_first, sum_entries, DailyTotals,
    ProgressBand, DEFAULT_HISTORY_DAYS,
};
use crate::services::calculators::{self, BmiResult, TdeeResult, DEFAULT_PROTEIN_PER_KG};
use crate::services::rda::rda_targets;
use crate::time_utils::{display_date, parse_date, today};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_HISTORY_DAYS: usize = 365;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/summary", get(get_summary))
        .route("/api/history", get(get_history))
        .route("/api/metrics", get(get_metrics))
}

// ─── Profile parameters ──────────────────────────────────────

/// Body profile passed as query parameters. Either all five fields are
/// given or none.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileParams {
    age: Option<f64>,
    gender: Option<Gender>,
    weight: Option<f64>,
    height: Option<f64>,
    activity_level: Option<ActivityLevel>,
}

impl ProfileParams {
    fn into_profile(self) -> Result<Option<UserProfile>> {
        match (
            self.age,
            self.gender,
            self.weight,
            self.height,
            self.activity_level,
        ) {
            (Some(age), Some(gender), Some(weight), Some(height), Some(activity_level)) => {
                Ok(Some(UserProfile {
                    age,
                    gender,
                    weight,
                    height,
                    activity_level,
                }))
            }
            (None, None, None, None, None) => Ok(None),
            _ => Err(AppError::BadRequest(
                "Profile requires age, gender, weight, height and activityLevel".to_string(),
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalParams {
    #[serde(default)]
    goal: Goal,
    protein_per_kg: Option<f64>,
}

// ─── Summary ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    date: Option<String>,
}

/// Consumed vs target for one nutrient.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutrientProgress {
    pub nutrient: Nutrient,
    pub name: String,
    pub unit: String,
    pub consumed: f64,
    pub target: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub band: ProgressBand,
}

impl NutrientProgress {
    fn new(nutrient: Nutrient, consumed: f64, target: f64) -> Self {
        let p = progress(consumed, target);
        Self {
            nutrient,
            name: nutrient.display_name().to_string(),
            unit: nutrient.unit().to_string(),
            consumed,
            target,
            percentage: p.percentage,
            remaining: p.remaining,
            band: ProgressBand::from_percentage(p.percentage),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealSummary {
    pub meal: String,
    pub entries: Vec<FoodLogEntry>,
    pub totals: NutrientRecord,
}

/// Targets and progress; present when a profile was supplied.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryTargets {
    pub macros: MacroTargets,
    pub macro_progress: Vec<NutrientProgress>,
    pub micronutrient_progress: Vec<NutrientProgress>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailySummaryResponse {
    pub date: String,
    pub display_date: String,
    pub entry_count: usize,
    pub totals: NutrientRecord,
    pub meals: Vec<MealSummary>,
    pub targets: Option<SummaryTargets>,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryQuery>,
    Query(profile): Query<ProfileParams>,
    Query(goal): Query<GoalParams>,
) -> Result<Json<DailySummaryResponse>> {
    let today_str = today();
    let date = params.date.unwrap_or_else(|| today_str.clone());
    require_date(&date, "date")?;

    let mut entries = state.food_log.get_for_date(&date).await;
    sort_newest_first(&mut entries);

    let totals = sum_entries(&entries);
    let meals = group_by_meal(&entries)
        .into_iter()
        .map(|group| MealSummary {
            meal: group.label().to_string(),
            entries: group.entries,
            totals: group.totals,
        })
        .collect();

    let targets = match profile.into_profile()? {
        Some(profile) => Some(summary_targets(&profile, &goal, &totals)?),
        None => None,
    };

    let display = match (parse_date(&date), parse_date(&today_str)) {
        (Some(d), Some(t)) => display_date(d, t),
        _ => date.clone(),
    };

    Ok(Json(DailySummaryResponse {
        date,
        display_date: display,
        entry_count: entries.len(),
        totals,
        meals,
        targets,
    }))
}

fn summary_targets(
    profile: &UserProfile,
    goal: &GoalParams,
    totals: &NutrientRecord,
) -> Result<SummaryTargets> {
    let tdee = calculators::tdee(profile)?;
    let macros = calculators::macro_targets(
        tdee.tdee,
        goal.goal,
        goal.protein_per_kg.unwrap_or(DEFAULT_PROTEIN_PER_KG),
        profile.weight,
    )?;
    let rda = rda_targets(profile.age, profile.gender, tdee.tdee, profile.weight)?;

    let macro_progress = vec![
        NutrientProgress::new(Nutrient::Calories, totals.calories, macros.calories),
        NutrientProgress::new(Nutrient::Protein, totals.protein, macros.protein),
        NutrientProgress::new(Nutrient::Carbs, totals.carbs, macros.carbs),
        NutrientProgress::new(Nutrient::Fat, totals.fat, macros.fat),
        NutrientProgress::new(Nutrient::Fiber, totals.fiber, rda.fiber),
    ];

    let micronutrient_progress = Nutrient::VITAMINS
        .iter()
        .chain(Nutrient::MINERALS.iter())
        .filter_map(|&n| rda.get(n).map(|target| NutrientProgress::new(n, totals.get(n), target)))
        .collect();

    Ok(SummaryTargets {
        macros,
        macro_progress,
        micronutrient_progress,
    })
}

// ─── History ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    days: Option<usize>,
}

/// Per-day macro totals for the most recent logged days.
async fn get_history(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<DailyTotals>>> {
    let days = params.days.unwrap_or(DEFAULT_HISTORY_DAYS);
    if days == 0 || days > MAX_HISTORY_DAYS {
        return Err(AppError::BadRequest(format!(
            "days must be between 1 and {}",
            MAX_HISTORY_DAYS
        )));
    }

    let entries = state.food_log.get_all().await;
    Ok(Json(daily_totals(&entries, days)))
}

// ─── Metrics ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MetricsResponse {
    pub bmi: BmiResult,
    pub tdee: TdeeResult,
    pub goal: Goal,
    pub goal_calories: f64,
    pub macros: MacroTargets,
    pub rda: RdaTargets,
}

async fn get_metrics(
    Query(profile): Query<ProfileParams>,
    Query(goal): Query<GoalParams>,
) -> Result<Json<MetricsResponse>> {
    let profile = profile.into_profile()?.ok_or_else(|| {
        AppError::BadRequest(
            "Profile requires age, gender, weight, height and activityLevel".to_string(),
        )
    })?;

    let bmi = calculators::bmi(profile.weight, profile.height)?;
    let tdee = calculators::tdee(&profile)?;
    let goal_calories = calculators::goal_calories(tdee.tdee, goal.goal);
    let macros = calculators::macro_targets(
        tdee.tdee,
        goal.goal,
        goal.protein_per_kg.unwrap_or(DEFAULT_PROTEIN_PER_KG),
        profile.weight,
    )?;
    let rda = rda_targets(profile.age, profile.gender, tdee.tdee, profile.weight)?;

    tracing::debug!(tdee = tdee.tdee, goal_calories, "Computed body metrics");

    Ok(Json(MetricsResponse {
        bmi,
        tdee,
        goal: goal.goal,
        goal_calories,
        macros,
        rda,
    }))
}
