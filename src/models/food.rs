// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Food records as delivered by FoodData Central (and the local catalog,
//! which uses the same shape).

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A food from either catalog. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodItem {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub fdc_id: u64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_serving_full_text: Option<String>,
}

impl FoodItem {
    /// Brand to show next to the name (brand name wins over owner).
    pub fn brand(&self) -> Option<&str> {
        self.brand_name.as_deref().or(self.brand_owner.as_deref())
    }

    /// Serving description for display, e.g. "1 cup" or "100g".
    pub fn serving_label(&self) -> String {
        if let Some(text) = self.household_serving_full_text.as_deref() {
            return text.to_string();
        }

        match (self.serving_size, self.serving_size_unit.as_deref()) {
            (Some(size), Some(unit)) => format!("{} {}", size, unit),
            _ => "100g".to_string(),
        }
    }
}

/// One nutrient line of a food.
///
/// Search results carry flat `nutrientNumber`/`value` fields while the
/// single-food endpoint nests them as `nutrient.number`/`amount`; both are
/// accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodNutrient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrient: Option<NutrientRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

/// Nested nutrient description used by the single-food endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutrientRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

impl FoodNutrient {
    /// Build a flat nutrient line, the way search results carry them.
    pub fn new(code: u32, value: f64, unit: &str) -> Self {
        Self {
            nutrient_id: None,
            nutrient_name: None,
            nutrient_number: Some(code.to_string()),
            value: Some(value),
            unit_name: Some(unit.to_string()),
            nutrient: None,
            amount: None,
        }
    }

    /// Numeric nutrient code, if present and well-formed.
    pub fn code(&self) -> Option<u32> {
        self.nutrient_number
            .as_deref()
            .or_else(|| self.nutrient.as_ref().and_then(|n| n.number.as_deref()))
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|code| code.fract() == 0.0 && *code >= 0.0)
            .map(|code| code as u32)
    }

    /// Amount per base serving; missing values read as zero.
    pub fn amount(&self) -> f64 {
        self.value.or(self.amount).unwrap_or(0.0)
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchPage {
    #[serde(default)]
    pub foods: Vec<FoodItem>,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_hits: u64,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default = "default_page")]
    pub total_pages: u32,
}

fn default_page() -> u32 {
    1
}
