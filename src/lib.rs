// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! NutriFlow: personal nutrition tracking
//!
//! This crate provides the backend API for searching foods, keeping a daily
//! food log and measuring intake against targets derived from body metrics.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{FoodLogStore, SearchFederation, UsdaClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub food_log: FoodLogStore,
    pub search: SearchFederation,
    /// Used directly by the FoodData Central proxy endpoint.
    pub usda: UsdaClient,
}
