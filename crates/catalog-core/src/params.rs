//! Parsing of raw request parameters, done before the query pipeline runs.
//!
//! The HTTP handlers and the CLI both go through these helpers so that the
//! same inputs are rejected with the same reason codes everywhere.

use std::num::IntErrorKind;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::error::{CatalogError, NotFoundReason, ValidationReason};
use crate::products::ProductId;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 16;

/// Parse a `page` or `pageSize` value.
///
/// Missing, non-numeric and zero values fall back to `default`. Negative
/// values pass through so the pipeline can reject them.
#[must_use]
pub fn parse_page_param(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v != 0)
        .unwrap_or(default)
}

/// Parse a product id path segment.
///
/// # Errors
///
/// `idProductRequired` when `raw` is not an integer or is zero.
/// `productDoesntExist` for negative or out-of-range ids, which can never
/// match.
pub fn parse_product_id(raw: &str) -> Result<ProductId, CatalogError> {
    let id = match raw.trim().parse::<i64>() {
        Ok(id) => id,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(NotFoundReason::ProductDoesntExist.into());
        }
        Err(_) => return Err(ValidationReason::IdProductRequired.into()),
    };

    match id {
        0 => Err(ValidationReason::IdProductRequired.into()),
        id if id < 0 => Err(NotFoundReason::ProductDoesntExist.into()),
        id => ProductId::try_from(id).map_err(|e| CatalogError::Internal(e.to_string())),
    }
}

/// A checked `[min, max]` price filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: Decimal,
    pub max: Decimal,
}

/// Parse the `minPrice`/`maxPrice` pair.
///
/// Checks run in order: both present and numeric, `min <= max`, both finite.
///
/// # Errors
///
/// `minPriceAndMaxPriceRequired`, `minPriceCannotBeGreaterThanMaxPrice` or
/// `invalidPriceFormat`.
pub fn parse_price_bounds(
    min_raw: Option<&str>,
    max_raw: Option<&str>,
) -> Result<PriceBounds, CatalogError> {
    let (Some(min_raw), Some(max_raw)) = (min_raw.map(str::trim), max_raw.map(str::trim)) else {
        return Err(ValidationReason::MinPriceAndMaxPriceRequired.into());
    };
    let (Some(min), Some(max)) = (parse_float(min_raw), parse_float(max_raw)) else {
        return Err(ValidationReason::MinPriceAndMaxPriceRequired.into());
    };

    if min > max {
        return Err(ValidationReason::MinPriceCannotBeGreaterThanMaxPrice.into());
    }
    if !min.is_finite() || !max.is_finite() {
        return Err(ValidationReason::InvalidPriceFormat.into());
    }

    Ok(PriceBounds {
        min: to_decimal(min_raw, min),
        max: to_decimal(max_raw, max),
    })
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Prefer the exact decimal text; fall back to the float for forms like `1e1`.
///
/// Finite values past `Decimal`'s range saturate, which always lands outside
/// the catalog's price limits.
fn to_decimal(raw: &str, value: f64) -> Decimal {
    raw.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}
