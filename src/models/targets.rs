// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily intake targets. Derived on demand from a profile, never stored.

use crate::models::nutrients::Nutrient;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MacroTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Recommended daily micronutrient intake.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MicronutrientTargets {
    pub vitamin_a: f64,
    pub vitamin_c: f64,
    pub vitamin_d: f64,
    pub vitamin_e: f64,
    pub vitamin_k: f64,
    pub vitamin_b1: f64,
    pub vitamin_b2: f64,
    pub vitamin_b3: f64,
    pub vitamin_b6: f64,
    pub vitamin_b9: f64,
    pub vitamin_b12: f64,
    pub calcium: f64,
    pub iron: f64,
    pub magnesium: f64,
    pub zinc: f64,
    pub potassium: f64,
    pub sodium: f64,
}

/// Full set of daily targets: macros plus the micronutrient table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RdaTargets {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(flatten)]
    pub micronutrients: MicronutrientTargets,
}

impl RdaTargets {
    /// Target for a nutrient. Sugar has no recommended intake.
    pub fn get(&self, nutrient: Nutrient) -> Option<f64> {
        let m = &self.micronutrients;
        let value = match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => return None,
            Nutrient::VitaminA => m.vitamin_a,
            Nutrient::VitaminC => m.vitamin_c,
            Nutrient::VitaminD => m.vitamin_d,
            Nutrient::VitaminE => m.vitamin_e,
            Nutrient::VitaminK => m.vitamin_k,
            Nutrient::VitaminB1 => m.vitamin_b1,
            Nutrient::VitaminB2 => m.vitamin_b2,
            Nutrient::VitaminB3 => m.vitamin_b3,
            Nutrient::VitaminB6 => m.vitamin_b6,
            Nutrient::VitaminB9 => m.vitamin_b9,
            Nutrient::VitaminB12 => m.vitamin_b12,
            Nutrient::Calcium => m.calcium,
            Nutrient::Iron => m.iron,
            Nutrient::Magnesium => m.magnesium,
            Nutrient::Zinc => m.zinc,
            Nutrient::Potassium => m.potassium,
            Nutrient::Sodium => m.sodium,
        };
        Some(value)
    }
}
