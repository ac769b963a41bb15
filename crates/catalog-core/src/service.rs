use std::sync::Arc;

use rust_decimal::Decimal;

use crate::assembler::{to_detail, ProductDetail};
use crate::error::{CatalogError, NotFoundReason};
use crate::products::{PriceLimits, ProductId};
use crate::query::{self, PaginatedResult};
use crate::repository::CatalogRepository;

/// Entry point for catalog reads, shared by every outer surface.
///
/// Cheap to clone; all clones read the same repository.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("products", &self.repo.find_all().len())
            .finish()
    }
}

impl CatalogService {
    #[must_use]
    pub fn new<R>(repo: R) -> Self
    where
        R: CatalogRepository + 'static,
    {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// # Errors
    ///
    /// Returns a validation error for a non-positive `page` or `page_size`.
    pub fn list_products(&self, page: i64, page_size: i64) -> Result<PaginatedResult, CatalogError> {
        query::list(self.repo.as_ref(), page, page_size)
    }

    /// # Errors
    ///
    /// `productDoesntExist` for an unknown id, `nutritionalInfoNotFound` when
    /// the product has no nutrition record.
    pub fn get_product(&self, id: ProductId) -> Result<ProductDetail, CatalogError> {
        let product = self
            .repo
            .find_by_id(id)
            .ok_or(NotFoundReason::ProductDoesntExist)?;
        to_detail(self.repo.as_ref(), product)
    }

    #[must_use]
    pub fn price_limits(&self) -> PriceLimits {
        query::get_price_limits(self.repo.as_ref())
    }

    /// # Errors
    ///
    /// See [`query::list_by_price_range`].
    pub fn filter_by_price(
        &self,
        min_price: Decimal,
        max_price: Decimal,
        page: i64,
        page_size: i64,
        search_text: &str,
    ) -> Result<PaginatedResult, CatalogError> {
        query::list_by_price_range(
            self.repo.as_ref(),
            min_price,
            max_price,
            page,
            page_size,
            search_text,
        )
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.repo.find_all().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::{product, sample_catalog};
    use crate::repository::InMemoryCatalog;

    #[test]
    fn get_product_returns_detail() {
        let service = CatalogService::new(sample_catalog());
        let detail = service.get_product(5).expect("product 5");
        assert_eq!(detail.name, "Pipeline Punch");
        assert_eq!(detail.review_count, 0);
    }

    #[test]
    fn get_product_unknown_id_is_not_found() {
        let service = CatalogService::new(sample_catalog());
        assert_eq!(
            service.get_product(42).unwrap_err(),
            CatalogError::NotFound(NotFoundReason::ProductDoesntExist)
        );
    }

    #[test]
    fn get_product_without_nutrition_reports_integrity_failure() {
        let service = CatalogService::new(InMemoryCatalog::new(
            vec![product(7, "Orphan", 899, 1)],
            vec![],
            vec![],
        ));
        assert_eq!(
            service.get_product(7).unwrap_err().reason(),
            "nutritionalInfoNotFound"
        );
    }

    #[test]
    fn clones_share_the_same_catalog() {
        let service = CatalogService::new(sample_catalog());
        let clone = service.clone();
        assert_eq!(clone.product_count(), 5);
        assert_eq!(service.price_limits(), clone.price_limits());
    }

    #[test]
    fn filter_by_price_delegates_to_pipeline() {
        let service = CatalogService::new(sample_catalog());
        let result = service
            .filter_by_price(Decimal::new(900, 2), Decimal::new(999, 2), 1, 16, "")
            .expect("filter");
        assert_eq!(result.total_products, 2);
    }

    #[test]
    fn list_products_rejects_bad_page() {
        let service = CatalogService::new(sample_catalog());
        assert_eq!(
            service.list_products(-1, 16).unwrap_err().reason(),
            "pageMustBePositive"
        );
    }
}
