use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use catalog_core::{
    params::DEFAULT_PAGE, parse_page_param, parse_price_bounds, parse_product_id, PriceLimits,
    ProductDetail, ProductListItem,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState};

/// Paging parameters are read as raw strings so that junk values fall back
/// to defaults instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PageQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PriceFilterQuery {
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub search_text: Option<String>,
}

fn paging(state: &AppState, page: Option<&str>, page_size: Option<&str>) -> (i64, i64) {
    (
        parse_page_param(page, DEFAULT_PAGE),
        parse_page_param(page_size, state.default_page_size),
    )
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<Vec<ProductListItem>>>, ApiError> {
    let (page, page_size) = paging(&state, query.page.as_deref(), query.page_size.as_deref());

    let result = state
        .service
        .list_products(page, page_size)
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;

    Ok(Json(ApiResponse::page(result)))
}

pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ProductDetail>>, ApiError> {
    let detail = parse_product_id(&id)
        .and_then(|id| state.service.get_product(id))
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;

    Ok(Json(ApiResponse::ok(detail)))
}

pub(super) async fn get_price_limits(
    State(state): State<AppState>,
) -> Json<ApiResponse<PriceLimits>> {
    Json(ApiResponse::ok(state.service.price_limits()))
}

pub(super) async fn filter_by_price(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PriceFilterQuery>,
) -> Result<Json<ApiResponse<Vec<ProductListItem>>>, ApiError> {
    let bounds = parse_price_bounds(query.min_price.as_deref(), query.max_price.as_deref())
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;
    let (page, page_size) = paging(&state, query.page.as_deref(), query.page_size.as_deref());

    let result = state
        .service
        .filter_by_price(
            bounds.min,
            bounds.max,
            page,
            page_size,
            query.search_text.as_deref().unwrap_or_default(),
        )
        .map_err(|e| map_catalog_error(&req_id.0, &e))?;

    Ok(Json(ApiResponse::page(result)))
}
