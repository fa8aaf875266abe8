// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_USDA_API_BASE: &str = "https://api.nal.usda.gov/fdc/v1";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// FoodData Central API key
    pub usda_api_key: String,
    /// FoodData Central base URL (overridable for tests and mirrors)
    pub usda_api_base: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Directory holding the food log blob
    pub data_dir: PathBuf,
    /// Fuzzy-match tolerance for the local catalog, in [0, 1]
    pub search_threshold: f64,
    /// Replacement for the built-in local food catalog
    pub local_foods_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let usda_api_key = match env::var("USDA_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key.trim().to_string(),
            _ => {
                tracing::warn!("USDA_API_KEY not set, using the rate-limited DEMO_KEY");
                "DEMO_KEY".to_string()
            }
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        let search_threshold = match env::var("SEARCH_THRESHOLD") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(t) if (0.0..=1.0).contains(&t) => t,
                _ => return Err(ConfigError::Invalid("SEARCH_THRESHOLD", raw)),
            },
            Err(_) => crate::services::search::DEFAULT_THRESHOLD,
        };

        Ok(Self {
            usda_api_key,
            usda_api_base: env::var("USDA_API_BASE")
                .unwrap_or_else(|_| DEFAULT_USDA_API_BASE.to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            search_threshold,
            local_foods_path: env::var("LOCAL_FOODS_PATH").ok().map(PathBuf::from),
        })
    }

    /// Config for tests: no real API key, throwaway data directory.
    pub fn test_default() -> Self {
        Self {
            usda_api_key: "TEST_KEY".to_string(),
            usda_api_base: "http://127.0.0.1:9".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            data_dir: env::temp_dir().join("nutriflow-test"),
            search_threshold: crate::services::search::DEFAULT_THRESHOLD,
            local_foods_path: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
