// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregate;
pub mod calculators;
pub mod catalog;
pub mod food_log;
pub mod fuzzy;
pub mod nutrition;
pub mod rda;
pub mod search;
pub mod usda;

pub use catalog::{CatalogError, LocalCatalog};
pub use food_log::FoodLogStore;
pub use search::{FoodSource, SearchFederation};
pub use usda::UsdaClient;
