//! Catalog data sources: the built-in fixture and YAML catalog files.
//!
//! Both paths produce a [`catalog_core::InMemoryCatalog`]. Data read from
//! disk is validated before it is handed to the core.

mod fixture;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use catalog_core::{InMemoryCatalog, NutritionalInfo, Product, ProductId, Review};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

pub use fixture::fixture_catalog;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid catalog: {0}")]
    Validation(String),
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    pub products: Vec<Product>,
    pub nutritional_info: Vec<NutritionalInfo>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl CatalogFile {
    fn into_catalog(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.products, self.nutritional_info, self.reviews)
    }
}

/// Load and validate a catalog from a YAML file.
///
/// # Errors
///
/// Returns `StoreError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    catalog_from_yaml_str(&content)
}

/// Parse and validate a catalog from YAML text.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] for malformed YAML and
/// [`StoreError::Validation`] for integrity failures.
pub fn catalog_from_yaml_str(content: &str) -> Result<InMemoryCatalog, StoreError> {
    let file: CatalogFile = serde_yaml::from_str(content)?;
    validate_catalog(&file)?;
    Ok(file.into_catalog())
}

fn validate_catalog(file: &CatalogFile) -> Result<(), StoreError> {
    if file.products.is_empty() {
        return Err(StoreError::Validation(
            "catalog must contain at least one product".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    for product in &file.products {
        if product.id == 0 {
            return Err(StoreError::Validation(format!(
                "product '{}' has id 0; ids must be positive",
                product.name
            )));
        }
        if !seen_ids.insert(product.id) {
            return Err(StoreError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }
        if product.name.trim().is_empty() {
            return Err(StoreError::Validation(format!(
                "product {} has an empty name",
                product.id
            )));
        }
        if product.price < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "product {} has negative price {}",
                product.id, product.price
            )));
        }
    }

    let mut nutrition_counts: HashMap<ProductId, usize> = HashMap::new();
    for info in &file.nutritional_info {
        if !seen_ids.contains(&info.product_id) {
            return Err(StoreError::Validation(format!(
                "nutrition record references unknown product {}",
                info.product_id
            )));
        }
        *nutrition_counts.entry(info.product_id).or_default() += 1;
    }
    for product in &file.products {
        let count = nutrition_counts.get(&product.id).copied().unwrap_or(0);
        if count != 1 {
            return Err(StoreError::Validation(format!(
                "product {} must have exactly one nutrition record, found {count}",
                product.id
            )));
        }
    }

    let max_rating = Decimal::from(5);
    for review in &file.reviews {
        if !seen_ids.contains(&review.product_id) {
            return Err(StoreError::Validation(format!(
                "review references unknown product {}",
                review.product_id
            )));
        }
        if review.rating < Decimal::ZERO || review.rating > max_rating {
            return Err(StoreError::Validation(format!(
                "review for product {} has rating {} outside [0, 5]",
                review.product_id, review.rating
            )));
        }
    }

    Ok(())
}
