// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-metric formulas: BMI, BMR (Mifflin-St Jeor), TDEE, goal calories and
//! the macro split.
//!
//! Inputs are validated up front; a zero height or negative weight is an
//! [`InvalidArgument`] rather than an infinite BMI.

use crate::error::InvalidArgument;
use crate::models::{ActivityLevel, Gender, Goal, MacroTargets, UserProfile};
use crate::services::nutrition::{round0, round1};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Daily calorie offset applied for a lose/gain goal.
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

/// Default protein allowance, grams per kilogram of body weight.
pub const DEFAULT_PROTEIN_PER_KG: f64 = 1.8;

const FAT_CALORIE_SHARE: f64 = 0.25;
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub is_healthy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TdeeResult {
    pub tdee: f64,
    pub bmr: f64,
    pub activity_multiplier: f64,
}

fn require_positive(name: &str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::new(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidArgument::new(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )))
    }
}

/// Body Mass Index from weight (kg) and height (cm).
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult, InvalidArgument> {
    let weight = require_positive("weight", weight_kg)?;
    let height_m = require_positive("height", height_cm)? / 100.0;

    let value = weight / (height_m * height_m);
    let category = BmiCategory::from_bmi(value);

    Ok(BmiResult {
        bmi: round1(value),
        category,
        is_healthy: category == BmiCategory::NormalWeight,
    })
}

/// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor.
pub fn bmr(
    age: f64,
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
) -> Result<f64, InvalidArgument> {
    let age = require_non_negative("age", age)?;
    let weight = require_positive("weight", weight_kg)?;
    let height = require_positive("height", height_cm)?;

    let base = 10.0 * weight + 6.25 * height - 5.0 * age;
    let value = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };

    Ok(round0(value))
}

/// Total Daily Energy Expenditure (kcal/day).
pub fn tdee(profile: &UserProfile) -> Result<TdeeResult, InvalidArgument> {
    let bmr = bmr(profile.age, profile.gender, profile.weight, profile.height)?;
    let activity_multiplier = profile.activity_level.multiplier();

    Ok(TdeeResult {
        tdee: tdee_from_bmr(bmr, profile.activity_level),
        bmr,
        activity_multiplier,
    })
}

/// TDEE for an already computed BMR.
pub fn tdee_from_bmr(bmr: f64, activity_level: ActivityLevel) -> f64 {
    round0(bmr * activity_level.multiplier())
}

/// Daily calories for a weight goal: a flat 500 kcal deficit or surplus.
pub fn goal_calories(tdee: f64, goal: Goal) -> f64 {
    match goal {
        Goal::Lose => round0(tdee - GOAL_CALORIE_OFFSET),
        Goal::Maintain => tdee,
        Goal::Gain => round0(tdee + GOAL_CALORIE_OFFSET),
    }
}

/// Split goal-adjusted calories into protein, fat and carbohydrate grams.
///
/// Protein is fixed by body weight, fat takes 25% of calories and carbs
/// cover the rest. Calories are adjusted with [`goal_calories`]. Fails when
/// the adjusted calories are not positive or protein and fat exceed them.
pub fn macro_targets(
    tdee: f64,
    goal: Goal,
    protein_per_kg: f64,
    body_weight_kg: f64,
) -> Result<MacroTargets, InvalidArgument> {
    let tdee = require_positive("tdee", tdee)?;
    let protein_per_kg = require_positive("protein per kg", protein_per_kg)?;
    let weight = require_positive("weight", body_weight_kg)?;

    let calories = goal_calories(tdee, goal);
    if calories <= 0.0 {
        return Err(InvalidArgument::new(format!(
            "goal calories must be positive, got {} for tdee {}",
            calories, tdee
        )));
    }

    let protein = protein_per_kg * weight;
    let protein_calories = protein * KCAL_PER_G_PROTEIN;

    let fat_calories = calories * FAT_CALORIE_SHARE;
    let fat = fat_calories / KCAL_PER_G_FAT;

    let carb_calories = calories - protein_calories - fat_calories;
    if carb_calories < 0.0 {
        return Err(InvalidArgument::new(format!(
            "protein of {} g leaves no calories for carbohydrates out of {}",
            round0(protein),
            calories
        )));
    }
    let carbs = carb_calories / KCAL_PER_G_CARBS;

    Ok(MacroTargets {
        calories: round0(calories),
        protein: round0(protein),
        carbs: round0(carbs),
        fat: round0(fat),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            age: 25.0,
            gender: Gender::Male,
            weight: 70.0,
            height: 175.0,
            activity_level: ActivityLevel::ModeratelyActive,
        }
    }

    #[test]
    fn test_bmi_normal() {
        let result = bmi(70.0, 175.0).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::NormalWeight);
        assert_eq!(result.category.label(), "Normal weight");
        assert!(result.is_healthy);
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(bmi(50.0, 175.0).unwrap().category, BmiCategory::Underweight);
        assert_eq!(bmi(80.0, 175.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(100.0, 175.0).unwrap().category, BmiCategory::Obese);
        assert!(!bmi(100.0, 175.0).unwrap().is_healthy);
    }

    #[test]
    fn test_bmi_boundaries() {
        // 18.5 exactly is normal, 25 exactly is overweight, 30 exactly is obese
        assert_eq!(bmi(18.5, 100.0).unwrap().category, BmiCategory::NormalWeight);
        assert_eq!(bmi(25.0, 100.0).unwrap().category, BmiCategory::Overweight);
        assert_eq!(bmi(30.0, 100.0).unwrap().category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_rejects_degenerate_input() {
        assert!(bmi(70.0, 0.0).is_err());
        assert!(bmi(-70.0, 175.0).is_err());
        assert!(bmi(f64::NAN, 175.0).is_err());
    }

    #[test]
    fn test_bmr_male() {
        // 700 + 1093.75 - 125 + 5 = 1673.75
        assert_eq!(bmr(25.0, Gender::Male, 70.0, 175.0).unwrap(), 1674.0);
    }

    #[test]
    fn test_bmr_female() {
        // 10*60 + 6.25*165 - 5*30 - 161 = 1320.25
        assert_eq!(bmr(30.0, Gender::Female, 60.0, 165.0).unwrap(), 1320.0);
    }

    #[test]
    fn test_bmr_rejects_negative_age() {
        let err = bmr(-1.0, Gender::Male, 70.0, 175.0).unwrap_err();
        assert!(err.0.contains("age"));
    }

    #[test]
    fn test_tdee_moderately_active() {
        let result = tdee(&profile()).unwrap();
        assert_eq!(result.bmr, 1674.0);
        assert_eq!(result.activity_multiplier, 1.55);
        // 1674 * 1.55 = 2594.7
        assert_eq!(result.tdee, 2595.0);
    }

    #[test]
    fn test_tdee_from_bmr_moderately_active() {
        assert_eq!(tdee_from_bmr(1724.0, ActivityLevel::ModeratelyActive), 2672.0);
    }

    #[test]
    fn test_tdee_multipliers() {
        assert_eq!(tdee_from_bmr(1000.0, ActivityLevel::Sedentary), 1200.0);
        assert_eq!(tdee_from_bmr(1000.0, ActivityLevel::LightlyActive), 1375.0);
        assert_eq!(tdee_from_bmr(1000.0, ActivityLevel::VeryActive), 1725.0);
        assert_eq!(tdee_from_bmr(1000.0, ActivityLevel::ExtremelyActive), 1900.0);
    }

    #[test]
    fn test_goal_calories() {
        assert_eq!(goal_calories(2672.0, Goal::Lose), 2172.0);
        assert_eq!(goal_calories(2672.0, Goal::Maintain), 2672.0);
        assert_eq!(goal_calories(2672.0, Goal::Gain), 3172.0);
    }

    #[test]
    fn test_macro_targets_maintain() {
        let targets = macro_targets(2672.0, Goal::Maintain, DEFAULT_PROTEIN_PER_KG, 70.0).unwrap();

        // protein 126g = 504 kcal, fat 668 kcal = 74.2g, carbs (2672-504-668)/4 = 375
        assert_eq!(targets.calories, 2672.0);
        assert_eq!(targets.protein, 126.0);
        assert_eq!(targets.fat, 74.0);
        assert_eq!(targets.carbs, 375.0);
    }

    #[test]
    fn test_macro_targets_use_goal_calories() {
        let targets = macro_targets(2672.0, Goal::Lose, DEFAULT_PROTEIN_PER_KG, 70.0).unwrap();
        assert_eq!(targets.calories, goal_calories(2672.0, Goal::Lose));
    }

    #[test]
    fn test_macro_targets_reject_bad_input() {
        assert!(macro_targets(0.0, Goal::Maintain, 1.8, 70.0).is_err());
        assert!(macro_targets(2000.0, Goal::Maintain, 0.0, 70.0).is_err());
        assert!(macro_targets(2000.0, Goal::Maintain, 1.8, -5.0).is_err());
    }

    #[test]
    fn test_macro_targets_never_negative() {
        // 400 kcal TDEE minus a 500 kcal deficit
        let err = macro_targets(400.0, Goal::Lose, 1.8, 70.0).unwrap_err();
        assert!(err.0.contains("goal calories"));

        // 5 g/kg * 70 kg = 1400 kcal of protein, plus 500 kcal of fat
        let err = macro_targets(2000.0, Goal::Maintain, 5.0, 70.0).unwrap_err();
        assert!(err.0.contains("carbohydrates"));

        // Exactly zero carbs is allowed: 900 kcal protein + 300 kcal fat
        let targets = macro_targets(1200.0, Goal::Maintain, 4.5, 50.0).unwrap();
        assert_eq!(targets.carbs, 0.0);
    }
}
