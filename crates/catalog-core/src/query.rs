//! Filter, sort and paginate products.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::assembler::{to_list_item, ProductListItem};
use crate::error::{CatalogError, ValidationReason};
use crate::products::{PriceLimits, Product};
use crate::repository::CatalogRepository;
use crate::rounding::round_to_decimal;

const PRICE_PLACES: u32 = 2;

/// Validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u64,
    page_size: u64,
}

impl Pagination {
    /// # Errors
    ///
    /// Returns `pageMustBePositive` if `page < 1` and `pageSizeMustBePositive`
    /// if `page_size < 1`. The page is checked first.
    pub fn new(page: i64, page_size: i64) -> Result<Self, CatalogError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(ValidationReason::PageMustBePositive)?;
        let page_size = u64::try_from(page_size)
            .ok()
            .filter(|s| *s >= 1)
            .ok_or(ValidationReason::PageSizeMustBePositive)?;
        Ok(Self { page, page_size })
    }

    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Index of the first item on this page. Saturates instead of overflowing.
    #[must_use]
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.page_size);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// The items of `items` that fall on this page. Empty past the end.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let len = usize::try_from(self.page_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(len).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub fn total_pages(&self, total: usize) -> u64 {
        u64::try_from(total)
            .unwrap_or(u64::MAX)
            .div_ceil(self.page_size)
    }
}

/// One page of product summaries plus the counts needed to navigate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    pub products: Vec<ProductListItem>,
    pub total_products: usize,
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedResult {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Counts sent next to the products in list responses.
    #[must_use]
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            page: self.current_page,
            page_size: self.page_size,
            total: self.total_products,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
        }
    }
}

/// The `metadata` object of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub page: u64,
    pub page_size: u64,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Stable sort, best sellers first. Ties keep catalog order.
fn sort_by_sales(products: &mut [&Product]) {
    products.sort_by(|a, b| b.sales_count.cmp(&a.sales_count));
}

fn paginate<R>(repo: &R, mut products: Vec<&Product>, pagination: Pagination) -> PaginatedResult
where
    R: CatalogRepository + ?Sized,
{
    sort_by_sales(&mut products);
    let total_products = products.len();

    PaginatedResult {
        products: pagination
            .slice(&products)
            .iter()
            .map(|p| to_list_item(repo, p))
            .collect(),
        total_products,
        current_page: pagination.page(),
        page_size: pagination.page_size(),
        total_pages: pagination.total_pages(total_products),
    }
}

/// All products, best sellers first, one page at a time.
///
/// # Errors
///
/// Returns a validation error for a non-positive `page` or `page_size`.
pub fn list<R>(repo: &R, page: i64, page_size: i64) -> Result<PaginatedResult, CatalogError>
where
    R: CatalogRepository + ?Sized,
{
    let pagination = Pagination::new(page, page_size)?;
    Ok(paginate(repo, repo.find_all().iter().collect(), pagination))
}

/// Catalog-wide minimum and maximum price, each rounded to two places.
///
/// Both are zero for an empty catalog.
pub fn get_price_limits<R>(repo: &R) -> PriceLimits
where
    R: CatalogRepository + ?Sized,
{
    let mut prices = repo.find_all().iter().map(|p| p.price);
    let Some(first) = prices.next() else {
        return PriceLimits {
            min_price: Decimal::ZERO,
            max_price: Decimal::ZERO,
        };
    };
    let (min, max) = prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    });

    PriceLimits {
        min_price: round_to_decimal(min, PRICE_PLACES),
        max_price: round_to_decimal(max, PRICE_PLACES),
    }
}

/// Products priced within `[min_price, max_price]`, optionally narrowed by a
/// text search, best sellers first.
///
/// `min_price <= max_price` is not checked here; an inverted range simply
/// matches nothing.
///
/// # Errors
///
/// Returns a validation error for a non-positive `page` or `page_size`, or
/// when the range reaches outside the catalog's own price limits.
pub fn list_by_price_range<R>(
    repo: &R,
    min_price: Decimal,
    max_price: Decimal,
    page: i64,
    page_size: i64,
    search_text: &str,
) -> Result<PaginatedResult, CatalogError>
where
    R: CatalogRepository + ?Sized,
{
    let pagination = Pagination::new(page, page_size)?;

    let limits = get_price_limits(repo);
    if min_price < limits.min_price {
        return Err(ValidationReason::MinPriceBelowCatalogLimit.into());
    }
    if max_price > limits.max_price {
        return Err(ValidationReason::MaxPriceAboveCatalogLimit.into());
    }

    let needle = search_text.trim().to_lowercase();
    let matching: Vec<&Product> = repo
        .find_all()
        .iter()
        .filter(|p| p.price >= min_price && p.price <= max_price)
        .filter(|p| needle.is_empty() || p.matches_search(&needle))
        .collect();

    Ok(paginate(repo, matching, pagination))
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
