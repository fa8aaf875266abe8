// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Local food catalog: regional dishes that FoodData Central lacks.
//!
//! Stored in the FoodData Central search-result shape so local and remote
//! foods flow through the same normalizer.

use crate::models::FoodItem;
use crate::services::fuzzy;
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../../data/local_foods.json");

#[derive(Debug, Default, Clone)]
pub struct LocalCatalog {
    foods: Vec<FoodItem>,
}

impl LocalCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::load_from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON array of foods.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let foods: Vec<FoodItem> =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = foods.iter().find(|f| !seen.insert(f.fdc_id)) {
            return Err(CatalogError::DuplicateId(dup.fdc_id));
        }

        tracing::info!(count = foods.len(), "Loaded local food catalog");
        Ok(Self { foods })
    }

    pub fn from_foods(foods: Vec<FoodItem>) -> Self {
        Self { foods }
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn get(&self, fdc_id: u64) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.fdc_id == fdc_id)
    }

    /// Fuzzy match on the description, best first.
    pub fn search(&self, query: &str, threshold: f64) -> Vec<FoodItem> {
        fuzzy::search(&self.foods, query, threshold, |f| f.description.as_str())
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Errors from loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Duplicate fdcId {0}")]
    DuplicateId(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = LocalCatalog::embedded().unwrap();
        assert_eq!(catalog.len(), 41);

        let rice = catalog.get(900200).unwrap();
        assert!(rice.description.starts_with("Steamed Rice"));
        assert_eq!(rice.serving_size, Some(100.0));
    }

    #[test]
    fn test_search_by_any_name() {
        let catalog = LocalCatalog::embedded().unwrap();

        let hits = catalog.search("moshur", 0.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].fdc_id, 900206);

        let hits = catalog.search("কলা", 0.0);
        assert_eq!(hits[0].fdc_id, 900240);
    }

    #[test]
    fn test_search_tolerates_typos() {
        let catalog = LocalCatalog::embedded().unwrap();
        let hits = catalog.search("bananna", 0.4);
        assert_eq!(hits.first().map(|f| f.fdc_id), Some(900240));
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let catalog = LocalCatalog::embedded().unwrap();
        assert!(catalog.search("", 1.0).is_empty());
    }

    #[test]
    fn test_load_errors() {
        assert!(matches!(
            LocalCatalog::load_from_json("{}"),
            Err(CatalogError::ParseError(_))
        ));
        assert!(matches!(
            LocalCatalog::load_from_json(
                r#"[{"fdcId": 1, "description": "a"}, {"fdcId": 1, "description": "b"}]"#
            ),
            Err(CatalogError::DuplicateId(1))
        ));
        assert!(matches!(
            LocalCatalog::load_from_file("/nonexistent/foods.json"),
            Err(CatalogError::IoError(_))
        ));
    }
}
