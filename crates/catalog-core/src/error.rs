use thiserror::Error;

/// Why a caller-supplied value was rejected.
///
/// The `code` strings are part of the public API and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    PageMustBePositive,
    PageSizeMustBePositive,
    MinPriceBelowCatalogLimit,
    MaxPriceAboveCatalogLimit,
    IdProductRequired,
    MinPriceAndMaxPriceRequired,
    MinPriceCannotBeGreaterThanMaxPrice,
    InvalidPriceFormat,
}

impl ValidationReason {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ValidationReason::PageMustBePositive => "pageMustBePositive",
            ValidationReason::PageSizeMustBePositive => "pageSizeMustBePositive",
            ValidationReason::MinPriceBelowCatalogLimit => "minPriceBelowCatalogLimit",
            ValidationReason::MaxPriceAboveCatalogLimit => "maxPriceAboveCatalogLimit",
            ValidationReason::IdProductRequired => "idProductRequired",
            ValidationReason::MinPriceAndMaxPriceRequired => "minPriceAndMaxPriceRequired",
            ValidationReason::MinPriceCannotBeGreaterThanMaxPrice => {
                "minPriceCannotBeGreaterThanMaxPrice"
            }
            ValidationReason::InvalidPriceFormat => "invalidPriceFormat",
        }
    }
}

impl std::fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Which record a lookup failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    ProductDoesntExist,
    /// Data-integrity failure: a product exists without its nutrition record.
    NutritionalInfoNotFound,
}

impl NotFoundReason {
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            NotFoundReason::ProductDoesntExist => "productDoesntExist",
            NotFoundReason::NutritionalInfoNotFound => "nutritionalInfoNotFound",
        }
    }
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(ValidationReason),
    #[error("not found: {0}")]
    NotFound(NotFoundReason),
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Stable reason string safe to hand to clients.
    ///
    /// Internal errors never expose their message.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            CatalogError::Validation(reason) => reason.code(),
            CatalogError::NotFound(reason) => reason.code(),
            CatalogError::Internal(_) => "internalServerError",
        }
    }

    /// Machine-readable error category used in response envelopes.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => "VALIDATION_ERROR",
            CatalogError::NotFound(_) => "NOT_FOUND",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationReason> for CatalogError {
    fn from(reason: ValidationReason) -> Self {
        CatalogError::Validation(reason)
    }
}

impl From<NotFoundReason> for CatalogError {
    fn from(reason: NotFoundReason) -> Self {
        CatalogError::NotFound(reason)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
