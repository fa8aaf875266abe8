// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Totals and progress over food log entries.
//!
//! Everything here is pure: entries in, sums out.

use crate::models::{FoodLogEntry, MealType, NutrientRecord};
use crate::services::nutrition::round0;
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Number of days shown by the history chart.
pub const DEFAULT_HISTORY_DAYS: usize = 7;

/// Consumption measured against a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Progress {
    pub percentage: f64,
    pub remaining: f64,
}

/// Coarse band for a progress percentage, used to color progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ProgressBand {
    Low,
    Approaching,
    Near,
    Met,
    Exceeded,
}

impl ProgressBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 50.0 {
            ProgressBand::Low
        } else if percentage < 80.0 {
            ProgressBand::Approaching
        } else if percentage < 100.0 {
            ProgressBand::Near
        } else if percentage < 120.0 {
            ProgressBand::Met
        } else {
            ProgressBand::Exceeded
        }
    }
}

/// Meal bucket; `None` collects entries without a meal type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MealGroup {
    pub meal: Option<MealType>,
    pub entries: Vec<FoodLogEntry>,
    pub totals: NutrientRecord,
}

impl MealGroup {
    pub fn label(&self) -> &'static str {
        self.meal.map(MealType::as_str).unwrap_or("other")
    }
}

/// Macro totals for one day of the history chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyTotals {
    pub date: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Field-wise sum, starting from zero.
pub fn sum<'a, I>(records: I) -> NutrientRecord
where
    I: IntoIterator<Item = &'a NutrientRecord>,
{
    records
        .into_iter()
        .fold(NutrientRecord::default(), |acc, record| acc.add(record))
}

/// Sum the nutrients of a set of entries.
pub fn sum_entries(entries: &[FoodLogEntry]) -> NutrientRecord {
    sum(entries.iter().map(|e| &e.nutrients))
}

/// Percentage of target consumed and how much is left.
///
/// A zero (or negative) target yields 0% with nothing remaining.
pub fn progress(consumed: f64, target: f64) -> Progress {
    if target <= 0.0 {
        return Progress {
            percentage: 0.0,
            remaining: 0.0,
        };
    }

    Progress {
        percentage: round0(consumed / target * 100.0),
        remaining: round0((target - consumed).max(0.0)),
    }
}

/// Bucket entries by meal in display order: breakfast, lunch, dinner, snack,
/// then untagged entries. Empty buckets are kept so the layout is stable.
pub fn group_by_meal(entries: &[FoodLogEntry]) -> Vec<MealGroup> {
    const ORDER: [Option<MealType>; 5] = [
        Some(MealType::Breakfast),
        Some(MealType::Lunch),
        Some(MealType::Dinner),
        Some(MealType::Snack),
        None,
    ];

    ORDER
        .iter()
        .map(|&meal| {
            let bucket: Vec<FoodLogEntry> = entries
                .iter()
                .filter(|e| e.meal_type == meal)
                .cloned()
                .collect();
            let totals = sum_entries(&bucket);
            MealGroup {
                meal,
                entries: bucket,
                totals,
            }
        })
        .collect()
}

/// Per-date macro totals for the most recent `last_n_days` dates that have
/// entries, oldest first.
pub fn daily_totals(entries: &[FoodLogEntry], last_n_days: usize) -> Vec<DailyTotals> {
    let mut by_date: BTreeMap<&str, DailyTotals> = BTreeMap::new();

    for entry in entries {
        let day = by_date
            .entry(entry.date.as_str())
            .or_insert_with(|| DailyTotals {
                date: entry.date.clone(),
                calories: 0.0,
                protein: 0.0,
                carbs: 0.0,
                fat: 0.0,
            });
        day.calories += entry.nutrients.calories;
        day.protein += entry.nutrients.protein;
        day.carbs += entry.nutrients.carbs;
        day.fat += entry.nutrients.fat;
    }

    let skip = by_date.len().saturating_sub(last_n_days);
    by_date.into_values().skip(skip).collect()
}

/// Order entries most recent first.
pub fn sort_newest_first(entries: &mut [FoodLogEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
