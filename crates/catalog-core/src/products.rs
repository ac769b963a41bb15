use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique, positive product identifier.
pub type ProductId = u64;

/// A catalog product. Records are fixture data and never change while the
/// process runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "idProduct")]
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub short_description: String,
    pub full_description: String,
    /// Price in currency units, e.g. `8.99`.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Container volume as printed on the can, e.g. `"473ml"`.
    pub volume: String,
    pub category: String,
    pub available: bool,
    /// Lifetime units sold. Only used for default ordering.
    pub sales_count: u64,
}

/// Nutrition facts for one product. Every product has exactly one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalInfo {
    #[serde(rename = "idProduct")]
    pub product_id: ProductId,
    pub serving_size: String,
    /// Calories per serving, in kcal.
    pub calories: u32,
    /// Sugars in grams.
    #[serde(with = "rust_decimal::serde::float")]
    pub sugars: Decimal,
    /// Caffeine in milligrams.
    #[serde(with = "rust_decimal::serde::float")]
    pub caffeine: Decimal,
    /// Taurine in milligrams.
    #[serde(with = "rust_decimal::serde::float")]
    pub taurine: Decimal,
    /// Sodium in milligrams.
    #[serde(with = "rust_decimal::serde::float")]
    pub sodium: Decimal,
    /// Vitamin name to amount, e.g. `"B12" -> "13mcg"`.
    #[serde(default)]
    pub vitamins: Option<BTreeMap<String, String>>,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub allergens: Option<Vec<String>>,
}

/// A single rating left for a product. Reviews are only ever aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "idProduct")]
    pub product_id: ProductId,
    /// Rating in `[0, 5]`.
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
}

/// Catalog-wide price bounds, recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLimits {
    #[serde(with = "rust_decimal::serde::float")]
    pub min_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max_price: Decimal,
}

impl Product {
    /// Case-insensitive substring match against name, short description or
    /// category. `needle` must already be lowercased and trimmed.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.short_description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}
