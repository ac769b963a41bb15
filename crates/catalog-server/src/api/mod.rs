mod products;

use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use catalog_core::{AppConfig, CatalogError, CatalogService, PageMetadata, PaginatedResult};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub service: CatalogService,
    /// `pageSize` used when the query omits it.
    pub default_page_size: i64,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            metadata: None,
        }
    }
}

impl ApiResponse<Vec<catalog_core::ProductListItem>> {
    /// List envelope: the page's products as `data`, counts as `metadata`.
    pub fn page(result: PaginatedResult) -> Self {
        let metadata = result.metadata();
        Self {
            success: true,
            data: result.products,
            metadata: Some(metadata),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    products: usize,
}

impl ApiError {
    pub fn new(error: impl Into<String>, error_code: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            error_code: error_code.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error_code.as_str() {
            "VALIDATION_ERROR" => StatusCode::BAD_REQUEST,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "RATE_LIMITED" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Convert a core error into the failure envelope, logging it on the way.
pub(super) fn map_catalog_error(request_id: &str, error: &CatalogError) -> ApiError {
    match error {
        CatalogError::Internal(_) => {
            tracing::error!(request_id, error = %error, "catalog request failed");
        }
        CatalogError::NotFound(_) | CatalogError::Validation(_) => {
            tracing::warn!(request_id, reason = error.reason(), "catalog request rejected");
        }
    }
    ApiError::new(error.reason(), error.error_code())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn catalog_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/internal/product", get(products::list_products))
        .route(
            "/api/v1/internal/product/price-limits",
            get(products::get_price_limits),
        )
        .route(
            "/api/v1/internal/product/filter-by-price",
            get(products::filter_by_price),
        )
        .route("/api/v1/internal/product/{id}", get(products::get_product))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(catalog_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(HealthData {
        status: "ok",
        products: state.service.product_count(),
    }))
}

pub fn rate_limit_state(config: &AppConfig) -> RateLimitState {
    RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
