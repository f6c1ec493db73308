//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Business rule violation.
    ///
    /// An expected outcome such as "entrepreneur has no profitable company",
    /// not a defect.
    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    /// Arithmetic result is undefined for the given inputs.
    #[error("Undefined result: {0}")]
    Undefined(String),

    /// A collaborator (directory, report store, catalog) failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The operation was cancelled by the caller.
    #[error("Operation cancelled")]
    Cancelled,

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Undefined(_) => "UNDEFINED_RESULT",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Cancelled => "CANCELLED",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true for outcomes that are expected under the business rules.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::BusinessRule(_) | Self::Cancelled
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
