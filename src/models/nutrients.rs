// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutrient identifiers and the fixed nutrient record.
//!
//! Field access is an exhaustive `match` over [`Nutrient`], so adding a
//! nutrient is a compile error everywhere it isn't handled.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Every nutrient tracked by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
    VitaminA,
    VitaminC,
    VitaminD,
    VitaminE,
    VitaminK,
    VitaminB1,
    VitaminB2,
    VitaminB3,
    VitaminB6,
    VitaminB9,
    VitaminB12,
    Calcium,
    Iron,
    Magnesium,
    Zinc,
    Potassium,
    Sodium,
}

impl Nutrient {
    pub const ALL: [Nutrient; 23] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB6,
        Nutrient::VitaminB9,
        Nutrient::VitaminB12,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Zinc,
        Nutrient::Potassium,
        Nutrient::Sodium,
    ];

    pub const VITAMINS: [Nutrient; 11] = [
        Nutrient::VitaminA,
        Nutrient::VitaminC,
        Nutrient::VitaminD,
        Nutrient::VitaminE,
        Nutrient::VitaminK,
        Nutrient::VitaminB1,
        Nutrient::VitaminB2,
        Nutrient::VitaminB3,
        Nutrient::VitaminB6,
        Nutrient::VitaminB9,
        Nutrient::VitaminB12,
    ];

    pub const MINERALS: [Nutrient; 6] = [
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Magnesium,
        Nutrient::Zinc,
        Nutrient::Potassium,
        Nutrient::Sodium,
    ];

    /// Look up a nutrient by its FoodData Central nutrient number.
    pub fn from_code(code: u32) -> Option<Self> {
        let nutrient = match code {
            208 => Nutrient::Calories,
            203 => Nutrient::Protein,
            205 => Nutrient::Carbs,
            204 => Nutrient::Fat,
            291 => Nutrient::Fiber,
            269 => Nutrient::Sugar,
            320 => Nutrient::VitaminA,
            401 => Nutrient::VitaminC,
            328 => Nutrient::VitaminD,
            323 => Nutrient::VitaminE,
            430 => Nutrient::VitaminK,
            404 => Nutrient::VitaminB1,
            405 => Nutrient::VitaminB2,
            406 => Nutrient::VitaminB3,
            415 => Nutrient::VitaminB6,
            417 => Nutrient::VitaminB9,
            418 => Nutrient::VitaminB12,
            301 => Nutrient::Calcium,
            303 => Nutrient::Iron,
            304 => Nutrient::Magnesium,
            309 => Nutrient::Zinc,
            306 => Nutrient::Potassium,
            307 => Nutrient::Sodium,
            _ => return None,
        };
        Some(nutrient)
    }

    /// FoodData Central nutrient number.
    pub fn code(self) -> u32 {
        match self {
            Nutrient::Calories => 208,
            Nutrient::Protein => 203,
            Nutrient::Carbs => 205,
            Nutrient::Fat => 204,
            Nutrient::Fiber => 291,
            Nutrient::Sugar => 269,
            Nutrient::VitaminA => 320,
            Nutrient::VitaminC => 401,
            Nutrient::VitaminD => 328,
            Nutrient::VitaminE => 323,
            Nutrient::VitaminK => 430,
            Nutrient::VitaminB1 => 404,
            Nutrient::VitaminB2 => 405,
            Nutrient::VitaminB3 => 406,
            Nutrient::VitaminB6 => 415,
            Nutrient::VitaminB9 => 417,
            Nutrient::VitaminB12 => 418,
            Nutrient::Calcium => 301,
            Nutrient::Iron => 303,
            Nutrient::Magnesium => 304,
            Nutrient::Zinc => 309,
            Nutrient::Potassium => 306,
            Nutrient::Sodium => 307,
        }
    }

    /// Display unit.
    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            Nutrient::Protein
            | Nutrient::Carbs
            | Nutrient::Fat
            | Nutrient::Fiber
            | Nutrient::Sugar => "g",
            Nutrient::VitaminA
            | Nutrient::VitaminD
            | Nutrient::VitaminK
            | Nutrient::VitaminB9
            | Nutrient::VitaminB12 => "mcg",
            _ => "mg",
        }
    }

    /// Human readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Nutrient::Calories => "Calories",
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbohydrates",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
            Nutrient::VitaminA => "Vitamin A",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::VitaminD => "Vitamin D",
            Nutrient::VitaminE => "Vitamin E",
            Nutrient::VitaminK => "Vitamin K",
            Nutrient::VitaminB1 => "Vitamin B1 (Thiamin)",
            Nutrient::VitaminB2 => "Vitamin B2 (Riboflavin)",
            Nutrient::VitaminB3 => "Vitamin B3 (Niacin)",
            Nutrient::VitaminB6 => "Vitamin B6",
            Nutrient::VitaminB9 => "Vitamin B9 (Folate)",
            Nutrient::VitaminB12 => "Vitamin B12",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Magnesium => "Magnesium",
            Nutrient::Zinc => "Zinc",
            Nutrient::Potassium => "Potassium",
            Nutrient::Sodium => "Sodium",
        }
    }
}

/// Nutrient amounts for one serving (or a sum of servings).
///
/// Micronutrients default to zero when absent from serialized data, so
/// entries exported before micronutrient tracking still deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutrientRecord {
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
    #[serde(default)]
    pub sugar: f64,

    // ─── Vitamins ────────────────────────────────────────────────
    #[serde(default)]
    pub vitamin_a: f64,
    #[serde(default)]
    pub vitamin_c: f64,
    #[serde(default)]
    pub vitamin_d: f64,
    #[serde(default)]
    pub vitamin_e: f64,
    #[serde(default)]
    pub vitamin_k: f64,
    #[serde(default)]
    pub vitamin_b1: f64,
    #[serde(default)]
    pub vitamin_b2: f64,
    #[serde(default)]
    pub vitamin_b3: f64,
    #[serde(default)]
    pub vitamin_b6: f64,
    #[serde(default)]
    pub vitamin_b9: f64,
    #[serde(default)]
    pub vitamin_b12: f64,

    // ─── Minerals ────────────────────────────────────────────────
    #[serde(default)]
    pub calcium: f64,
    #[serde(default)]
    pub iron: f64,
    #[serde(default)]
    pub magnesium: f64,
    #[serde(default)]
    pub zinc: f64,
    #[serde(default)]
    pub potassium: f64,
    #[serde(default)]
    pub sodium: f64,
}

impl NutrientRecord {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
            Nutrient::VitaminK => self.vitamin_k,
            Nutrient::VitaminB1 => self.vitamin_b1,
            Nutrient::VitaminB2 => self.vitamin_b2,
            Nutrient::VitaminB3 => self.vitamin_b3,
            Nutrient::VitaminB6 => self.vitamin_b6,
            Nutrient::VitaminB9 => self.vitamin_b9,
            Nutrient::VitaminB12 => self.vitamin_b12,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Zinc => self.zinc,
            Nutrient::Potassium => self.potassium,
            Nutrient::Sodium => self.sodium,
        }
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminE => &mut self.vitamin_e,
            Nutrient::VitaminK => &mut self.vitamin_k,
            Nutrient::VitaminB1 => &mut self.vitamin_b1,
            Nutrient::VitaminB2 => &mut self.vitamin_b2,
            Nutrient::VitaminB3 => &mut self.vitamin_b3,
            Nutrient::VitaminB6 => &mut self.vitamin_b6,
            Nutrient::VitaminB9 => &mut self.vitamin_b9,
            Nutrient::VitaminB12 => &mut self.vitamin_b12,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Zinc => &mut self.zinc,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::Sodium => &mut self.sodium,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        *self.slot(nutrient) = value;
    }

    /// Build a new record by applying `f` to every field.
    pub fn map(&self, mut f: impl FnMut(Nutrient, f64) -> f64) -> Self {
        let mut out = Self::default();
        for nutrient in Nutrient::ALL {
            out.set(nutrient, f(nutrient, self.get(nutrient)));
        }
        out
    }

    /// Field-wise addition.
    pub fn add(&self, other: &Self) -> Self {
        self.map(|nutrient, value| value + other.get(nutrient))
    }
}

/// Sparse nutrient assignments, keyed like the fields of [`NutrientRecord`].
///
/// Flattened into a food log update so a patch uses the same flat keys as a
/// stored entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NutrientPatch {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub vitamin_a: Option<f64>,
    pub vitamin_c: Option<f64>,
    pub vitamin_d: Option<f64>,
    pub vitamin_e: Option<f64>,
    pub vitamin_k: Option<f64>,
    pub vitamin_b1: Option<f64>,
    pub vitamin_b2: Option<f64>,
    pub vitamin_b3: Option<f64>,
    pub vitamin_b6: Option<f64>,
    pub vitamin_b9: Option<f64>,
    pub vitamin_b12: Option<f64>,
    pub calcium: Option<f64>,
    pub iron: Option<f64>,
    pub magnesium: Option<f64>,
    pub zinc: Option<f64>,
    pub potassium: Option<f64>,
    pub sodium: Option<f64>,
}

impl NutrientPatch {
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::VitaminA => self.vitamin_a,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::VitaminD => self.vitamin_d,
            Nutrient::VitaminE => self.vitamin_e,
            Nutrient::VitaminK => self.vitamin_k,
            Nutrient::VitaminB1 => self.vitamin_b1,
            Nutrient::VitaminB2 => self.vitamin_b2,
            Nutrient::VitaminB3 => self.vitamin_b3,
            Nutrient::VitaminB6 => self.vitamin_b6,
            Nutrient::VitaminB9 => self.vitamin_b9,
            Nutrient::VitaminB12 => self.vitamin_b12,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::Magnesium => self.magnesium,
            Nutrient::Zinc => self.zinc,
            Nutrient::Potassium => self.potassium,
            Nutrient::Sodium => self.sodium,
        }
    }

    fn slot(&mut self, nutrient: Nutrient) -> &mut Option<f64> {
        match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::VitaminA => &mut self.vitamin_a,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::VitaminD => &mut self.vitamin_d,
            Nutrient::VitaminE => &mut self.vitamin_e,
            Nutrient::VitaminK => &mut self.vitamin_k,
            Nutrient::VitaminB1 => &mut self.vitamin_b1,
            Nutrient::VitaminB2 => &mut self.vitamin_b2,
            Nutrient::VitaminB3 => &mut self.vitamin_b3,
            Nutrient::VitaminB6 => &mut self.vitamin_b6,
            Nutrient::VitaminB9 => &mut self.vitamin_b9,
            Nutrient::VitaminB12 => &mut self.vitamin_b12,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::Magnesium => &mut self.magnesium,
            Nutrient::Zinc => &mut self.zinc,
            Nutrient::Potassium => &mut self.potassium,
            Nutrient::Sodium => &mut self.sodium,
        }
    }

    /// Same patch with one more assignment.
    pub fn with(mut self, nutrient: Nutrient, value: f64) -> Self {
        *self.slot(nutrient) = Some(value);
        self
    }

    /// Assigned nutrients and their values.
    pub fn values(&self) -> impl Iterator<Item = (Nutrient, f64)> + '_ {
        Nutrient::ALL
            .into_iter()
            .filter_map(move |nutrient| self.get(nutrient).map(|value| (nutrient, value)))
    }

    /// New record with the assigned fields replaced.
    pub fn apply_to(&self, record: &NutrientRecord) -> NutrientRecord {
        record.map(|nutrient, value| self.get(nutrient).unwrap_or(value))
    }
}
