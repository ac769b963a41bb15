//! Maps catalog records into the two public product shapes.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregation::{compute_distribution, compute_rating, RatingDistribution};
use crate::error::{CatalogError, NotFoundReason};
use crate::products::{NutritionalInfo, Product, ProductId};
use crate::repository::CatalogRepository;

/// Three headline nutrition facts shown on a product card.
///
/// Serializes to `{}` when the product has no nutrition record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionalSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugars: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caffeine: Option<String>,
}

impl NutritionalSummary {
    #[must_use]
    pub fn from_info(info: Option<&NutritionalInfo>) -> Self {
        let Some(info) = info else {
            return Self::default();
        };
        Self {
            calories: Some(format!("{} kcal", info.calories)),
            sugars: Some(format!("{}g", info.sugars.normalize())),
            caffeine: Some(format!("{}mg", info.caffeine.normalize())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItem {
    #[serde(rename = "idProduct")]
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub short_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_rating: Decimal,
    pub review_count: usize,
    pub available: bool,
    pub nutritional_summary: NutritionalSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(rename = "idProduct")]
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub short_description: String,
    pub full_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub volume: String,
    pub category: String,
    pub available: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_rating: Decimal,
    pub review_count: usize,
    pub rating_distribution: RatingDistribution,
    pub nutritional_info: NutritionalInfo,
}

/// Card-sized view of `product`. Never fails; missing nutrition yields an
/// empty summary.
pub fn to_list_item<R>(repo: &R, product: &Product) -> ProductListItem
where
    R: CatalogRepository + ?Sized,
{
    let rating = compute_rating(repo, product.id);
    ProductListItem {
        id: product.id,
        name: product.name.clone(),
        image_url: product.image_url.clone(),
        short_description: product.short_description.clone(),
        price: product.price,
        average_rating: rating.average,
        review_count: rating.count,
        available: product.available,
        nutritional_summary: NutritionalSummary::from_info(
            repo.find_nutrition_by_product_id(product.id),
        ),
    }
}

/// Full view of `product`.
///
/// # Errors
///
/// Returns [`NotFoundReason::NutritionalInfoNotFound`] when the product has no
/// nutrition record.
pub fn to_detail<R>(repo: &R, product: &Product) -> Result<ProductDetail, CatalogError>
where
    R: CatalogRepository + ?Sized,
{
    let nutrition = repo
        .find_nutrition_by_product_id(product.id)
        .ok_or(NotFoundReason::NutritionalInfoNotFound)?;
    let rating = compute_rating(repo, product.id);

    Ok(ProductDetail {
        id: product.id,
        name: product.name.clone(),
        image_url: product.image_url.clone(),
        short_description: product.short_description.clone(),
        full_description: product.full_description.clone(),
        price: product.price,
        volume: product.volume.clone(),
        category: product.category.clone(),
        available: product.available,
        average_rating: rating.average,
        review_count: rating.count,
        rating_distribution: compute_distribution(repo, product.id),
        nutritional_info: nutrition.clone(),
    })
}
