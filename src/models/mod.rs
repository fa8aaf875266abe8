// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod food;
pub mod log_entry;
pub mod nutrients;
pub mod profile;
pub mod targets;

pub use food::{FoodItem, FoodNutrient, SearchPage};
pub use log_entry::{FoodLogEntry, FoodLogUpdate, MealType, NewFoodLogEntry};
pub use nutrients::{Nutrient, NutrientPatch, NutrientRecord};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
pub use targets::{MacroTargets, MicronutrientTargets, RdaTargets};
