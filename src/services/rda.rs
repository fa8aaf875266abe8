// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recommended Daily Allowance targets.
//!
//! Micronutrient values follow the FDA/NIH dietary reference intakes,
//! keyed by gender and age band.

use crate::error::InvalidArgument;
use crate::models::{Gender, MicronutrientTargets, RdaTargets};
use crate::services::nutrition::round0;

const PROTEIN_G_PER_KG: f64 = 1.6;
const FIBER_G_MALE: f64 = 38.0;
const FIBER_G_FEMALE: f64 = 25.0;

/// Age bands used by the reference intake tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBand {
    /// Under 19
    Teen,
    /// 19 through 50
    Adult,
    /// 51 and over
    Senior,
}

impl AgeBand {
    pub fn from_age(age: f64) -> Self {
        if age < 19.0 {
            AgeBand::Teen
        } else if age < 51.0 {
            AgeBand::Adult
        } else {
            AgeBand::Senior
        }
    }
}

/// Micronutrient reference table.
pub fn micronutrient_targets(gender: Gender, band: AgeBand) -> MicronutrientTargets {
    match (gender, band) {
        (Gender::Male, AgeBand::Teen) => MicronutrientTargets {
            vitamin_a: 900.0,
            vitamin_c: 75.0,
            vitamin_d: 15.0,
            vitamin_e: 15.0,
            vitamin_k: 75.0,
            vitamin_b1: 1.2,
            vitamin_b2: 1.3,
            vitamin_b3: 16.0,
            vitamin_b6: 1.3,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1300.0,
            iron: 11.0,
            magnesium: 410.0,
            zinc: 11.0,
            potassium: 3400.0,
            sodium: 2300.0,
        },
        (Gender::Male, AgeBand::Adult) => MicronutrientTargets {
            vitamin_a: 900.0,
            vitamin_c: 90.0,
            vitamin_d: 15.0,
            vitamin_e: 15.0,
            vitamin_k: 120.0,
            vitamin_b1: 1.2,
            vitamin_b2: 1.3,
            vitamin_b3: 16.0,
            vitamin_b6: 1.3,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1000.0,
            iron: 8.0,
            magnesium: 400.0,
            zinc: 11.0,
            potassium: 3400.0,
            sodium: 2300.0,
        },
        (Gender::Male, AgeBand::Senior) => MicronutrientTargets {
            vitamin_a: 900.0,
            vitamin_c: 90.0,
            vitamin_d: 20.0,
            vitamin_e: 15.0,
            vitamin_k: 120.0,
            vitamin_b1: 1.2,
            vitamin_b2: 1.3,
            vitamin_b3: 16.0,
            vitamin_b6: 1.7,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1200.0,
            iron: 8.0,
            magnesium: 420.0,
            zinc: 11.0,
            potassium: 3400.0,
            sodium: 2300.0,
        },
        (Gender::Female, AgeBand::Teen) => MicronutrientTargets {
            vitamin_a: 700.0,
            vitamin_c: 65.0,
            vitamin_d: 15.0,
            vitamin_e: 15.0,
            vitamin_k: 75.0,
            vitamin_b1: 1.0,
            vitamin_b2: 1.0,
            vitamin_b3: 14.0,
            vitamin_b6: 1.2,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1300.0,
            iron: 15.0,
            magnesium: 360.0,
            zinc: 9.0,
            potassium: 2600.0,
            sodium: 2300.0,
        },
        (Gender::Female, AgeBand::Adult) => MicronutrientTargets {
            vitamin_a: 700.0,
            vitamin_c: 75.0,
            vitamin_d: 15.0,
            vitamin_e: 15.0,
            vitamin_k: 90.0,
            vitamin_b1: 1.1,
            vitamin_b2: 1.1,
            vitamin_b3: 14.0,
            vitamin_b6: 1.3,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1000.0,
            iron: 18.0,
            magnesium: 310.0,
            zinc: 8.0,
            potassium: 2600.0,
            sodium: 2300.0,
        },
        (Gender::Female, AgeBand::Senior) => MicronutrientTargets {
            vitamin_a: 700.0,
            vitamin_c: 75.0,
            vitamin_d: 20.0,
            vitamin_e: 15.0,
            vitamin_k: 90.0,
            vitamin_b1: 1.1,
            vitamin_b2: 1.1,
            vitamin_b3: 14.0,
            vitamin_b6: 1.5,
            vitamin_b9: 400.0,
            vitamin_b12: 2.4,
            calcium: 1200.0,
            iron: 8.0,
            magnesium: 320.0,
            zinc: 8.0,
            potassium: 2600.0,
            sodium: 2300.0,
        },
    }
}

/// Full daily targets for a person.
///
/// The macro portion is computed independently of the goal-adjusted macro
/// split: 1.6 g/kg protein, 25% of TDEE from fat, carbs for the rest.
pub fn rda_targets(
    age: f64,
    gender: Gender,
    tdee: f64,
    weight_kg: f64,
) -> Result<RdaTargets, InvalidArgument> {
    if !age.is_finite() || age < 0.0 {
        return Err(InvalidArgument::new(format!(
            "age must be a non-negative number, got {}",
            age
        )));
    }
    if !tdee.is_finite() || tdee <= 0.0 {
        return Err(InvalidArgument::new(format!(
            "tdee must be a positive number, got {}",
            tdee
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(InvalidArgument::new(format!(
            "weight must be a positive number, got {}",
            weight_kg
        )));
    }

    let protein = round0(weight_kg * PROTEIN_G_PER_KG);
    let fat = round0(tdee * 0.25 / 9.0);
    let carbs = round0((tdee - protein * 4.0 - fat * 9.0) / 4.0);
    let fiber = match gender {
        Gender::Male => FIBER_G_MALE,
        Gender::Female => FIBER_G_FEMALE,
    };

    Ok(RdaTargets {
        calories: tdee,
        protein,
        carbs,
        fat,
        fiber,
        micronutrients: micronutrient_targets(gender, AgeBand::from_age(age)),
    })
}
