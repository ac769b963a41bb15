//! Catalog command handlers.
//!
//! Each handler asks the [`CatalogService`] for data and hands it to
//! [`crate::output`]. Catalog errors are returned untouched so `main` can
//! report their reason code.

use std::path::Path;

use anyhow::Context;
use catalog_core::params::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use catalog_core::{
    get_price_limits, parse_page_param, parse_price_bounds, parse_product_id, CatalogService,
};

use crate::output::{self, CatalogSummary};

/// Raw `--page`/`--page-size` values, parsed the same way as HTTP query
/// parameters.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PageArgs<'a> {
    pub page: Option<&'a str>,
    pub page_size: Option<&'a str>,
}

impl PageArgs<'_> {
    /// Resolve to `(page, page_size)`; missing, junk and zero values take
    /// the defaults.
    pub(crate) fn resolve(self) -> (i64, i64) {
        (
            parse_page_param(self.page, DEFAULT_PAGE),
            parse_page_param(self.page_size, DEFAULT_PAGE_SIZE),
        )
    }
}

/// Arguments for [`run_filter`], still in their raw command-line form.
#[derive(Debug)]
pub(crate) struct FilterArgs<'a> {
    pub min_price: Option<&'a str>,
    pub max_price: Option<&'a str>,
    pub paging: PageArgs<'a>,
    pub search: &'a str,
}

/// Build the service from `data`, or from the built-in catalog when `None`.
///
/// # Errors
///
/// Returns an error if the catalog file cannot be loaded.
pub(crate) fn open_service(data: Option<&Path>) -> anyhow::Result<CatalogService> {
    let catalog = match data {
        Some(path) => {
            let catalog = catalog_store::load_catalog(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            tracing::debug!(
                path = %path.display(),
                products = catalog.product_count(),
                "loaded catalog file"
            );
            catalog
        }
        None => catalog_store::fixture_catalog(),
    };
    Ok(CatalogService::new(catalog))
}

pub(crate) fn run_list(
    service: &CatalogService,
    paging: &PageArgs<'_>,
    json: bool,
) -> anyhow::Result<()> {
    let (page, page_size) = paging.resolve();
    let result = service.list_products(page, page_size)?;
    output::print_page(&result, json)
}

pub(crate) fn run_get(service: &CatalogService, id: &str, json: bool) -> anyhow::Result<()> {
    let id = parse_product_id(id)?;
    let detail = service.get_product(id)?;
    output::print_detail(&detail, json)
}

pub(crate) fn run_price_limits(service: &CatalogService, json: bool) -> anyhow::Result<()> {
    output::print_price_limits(service.price_limits(), json)
}

pub(crate) fn run_filter(
    service: &CatalogService,
    args: &FilterArgs<'_>,
    json: bool,
) -> anyhow::Result<()> {
    let bounds = parse_price_bounds(args.min_price, args.max_price)?;
    let (page, page_size) = args.paging.resolve();
    let result =
        service.filter_by_price(bounds.min, bounds.max, page, page_size, args.search)?;
    output::print_page(&result, json)
}

/// Load `path` with full integrity checks and print a short summary.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub(crate) fn run_validate(path: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = catalog_store::load_catalog(path)
        .with_context(|| format!("catalog {} is invalid", path.display()))?;

    let summary = CatalogSummary {
        products: catalog.product_count(),
        nutrition_records: catalog.nutrition().len(),
        reviews: catalog.reviews().len(),
        price_limits: get_price_limits(&catalog),
    };
    output::print_summary(&summary, json)
}
