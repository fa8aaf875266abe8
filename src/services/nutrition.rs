// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Nutrient extraction and serving-size scaling.

use crate::error::InvalidArgument;
use crate::models::{FoodItem, Nutrient, NutrientRecord};

/// Base serving size (grams) that catalog nutrient values refer to.
pub const DEFAULT_BASE_SERVING: f64 = 100.0;

/// Round half up to an integer, matching how the web client rounds.
pub fn round0(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round half up to one decimal place.
pub fn round1(value: f64) -> f64 {
    round0(value * 10.0) / 10.0
}

/// Map a food's nutrient lines onto a [`NutrientRecord`].
///
/// Unknown codes are skipped; missing, negative or non-finite amounts count
/// as zero. When a code appears more than once the last line wins.
pub fn normalize(food: &FoodItem) -> NutrientRecord {
    let mut record = NutrientRecord::default();

    for line in &food.food_nutrients {
        let Some(nutrient) = line.code().and_then(Nutrient::from_code) else {
            continue;
        };

        let amount = line.amount();
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            0.0
        };
        record.set(nutrient, amount);
    }

    record
}

/// Scale a record from `base_size` to `requested_size`.
///
/// Calories are rounded to whole numbers, everything else to one decimal.
pub fn scale(
    record: &NutrientRecord,
    requested_size: f64,
    base_size: f64,
) -> Result<NutrientRecord, InvalidArgument> {
    if !base_size.is_finite() || base_size <= 0.0 {
        return Err(InvalidArgument::new(format!(
            "base serving size must be a positive number, got {}",
            base_size
        )));
    }
    if !requested_size.is_finite() || requested_size < 0.0 {
        return Err(InvalidArgument::new(format!(
            "serving size must be a non-negative number, got {}",
            requested_size
        )));
    }

    let multiplier = requested_size / base_size;

    Ok(record.map(|nutrient, value| match nutrient {
        Nutrient::Calories => round0(value * multiplier),
        _ => round1(value * multiplier),
    }))
}
