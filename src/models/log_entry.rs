// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food log entries.
//!
//! Serialized with camelCase keys and the nutrient fields flattened into the
//! entry, which is the layout of the persisted blob and of exported data.

use crate::models::nutrients::{NutrientPatch, NutrientRecord};
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Meal an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// A logged serving of food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodLogEntry {
    pub id: String,
    /// Day the food was eaten (`YYYY-MM-DD`); may differ from `timestamp`.
    pub date: String,
    /// Creation time, milliseconds since the Unix epoch.
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
    pub food_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | undefined"))]
    pub fdc_id: Option<u64>,
    pub serving_size: f64,
    pub serving_size_unit: String,
    #[serde(flatten)]
    pub nutrients: NutrientRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An entry as submitted, before the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFoodLogEntry {
    pub date: String,
    pub food_name: String,
    pub brand_name: Option<String>,
    pub fdc_id: Option<u64>,
    pub serving_size: f64,
    pub serving_size_unit: String,
    pub nutrients: NutrientRecord,
    pub meal_type: Option<MealType>,
    pub notes: Option<String>,
}

impl NewFoodLogEntry {
    pub fn into_entry(self, id: String, timestamp: i64) -> FoodLogEntry {
        FoodLogEntry {
            id,
            date: self.date,
            timestamp,
            food_name: self.food_name,
            brand_name: self.brand_name,
            fdc_id: self.fdc_id,
            serving_size: self.serving_size,
            serving_size_unit: self.serving_size_unit,
            nutrients: self.nutrients,
            meal_type: self.meal_type,
            notes: self.notes,
        }
    }
}

/// Sparse set of field assignments for an existing entry.
///
/// Uses the flat layout of a stored entry. The identifier and creation
/// timestamp are absent, so they are ignored if sent. Optional fields take
/// an explicit `null` to clear them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodLogUpdate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub brand_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[cfg_attr(feature = "binding-generation", ts(type = "number | null"))]
    pub fdc_id: Option<Option<u64>>,
    #[serde(default)]
    pub serving_size: Option<f64>,
    #[serde(default)]
    pub serving_size_unit: Option<String>,
    #[serde(flatten)]
    pub nutrients: NutrientPatch,
    #[serde(default, deserialize_with = "nullable")]
    pub meal_type: Option<Option<MealType>>,
    #[serde(default, deserialize_with = "nullable")]
    pub notes: Option<Option<String>>,
}

/// Present-but-null becomes `Some(None)`; an absent key stays `None`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl FoodLogUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce a new entry with these assignments applied on top of `entry`.
    pub fn apply(&self, entry: &FoodLogEntry) -> FoodLogEntry {
        FoodLogEntry {
            id: entry.id.clone(),
            timestamp: entry.timestamp,
            date: self.date.clone().unwrap_or_else(|| entry.date.clone()),
            food_name: self
                .food_name
                .clone()
                .unwrap_or_else(|| entry.food_name.clone()),
            brand_name: self
                .brand_name
                .clone()
                .unwrap_or_else(|| entry.brand_name.clone()),
            fdc_id: self.fdc_id.unwrap_or(entry.fdc_id),
            serving_size: self.serving_size.unwrap_or(entry.serving_size),
            serving_size_unit: self
                .serving_size_unit
                .clone()
                .unwrap_or_else(|| entry.serving_size_unit.clone()),
            nutrients: self.nutrients.apply_to(&entry.nutrients),
            meal_type: self.meal_type.unwrap_or(entry.meal_type),
            notes: self.notes.clone().unwrap_or_else(|| entry.notes.clone()),
        }
    }
}
