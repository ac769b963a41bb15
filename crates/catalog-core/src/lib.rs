pub mod aggregation;
pub mod app_config;
pub mod assembler;
pub mod config;
pub mod error;
pub mod params;
pub mod products;
pub mod query;
pub mod repository;
pub mod rounding;
pub mod service;

pub use aggregation::{compute_distribution, compute_rating, RatingDistribution, RatingSummary};
pub use app_config::{AppConfig, Environment};
pub use assembler::{to_detail, to_list_item, NutritionalSummary, ProductDetail, ProductListItem};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CatalogError, ConfigError, NotFoundReason, ValidationReason};
pub use params::{parse_page_param, parse_price_bounds, parse_product_id, PriceBounds};
pub use products::{NutritionalInfo, PriceLimits, Product, ProductId, Review};
pub use query::{get_price_limits, list, list_by_price_range, PageMetadata, PaginatedResult, Pagination};
pub use repository::{CatalogRepository, InMemoryCatalog};
pub use rounding::round_to_decimal;
pub use service::CatalogService;
