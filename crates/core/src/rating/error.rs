//! Rating error types.

use thiserror::Error;
use venturebook_shared::AppError;
use venturebook_shared::types::UserId;

use crate::period::PeriodError;
use crate::reports::ReportError;

/// Errors that can occur while aggregating reports or rating an entrepreneur.
#[derive(Debug, Error)]
pub enum RatingError {
    // ========== Collaborator Errors ==========
    /// A collaborator (company directory, report source, activity field catalog) failed.
    #[error("repository error: {0}")]
    Repository(String),

    // ========== Business Rule Errors ==========
    /// The user owns no companies.
    #[error("user {0} owns no companies")]
    NoCompanies(UserId),

    /// None of the user's companies made a profit over the period.
    #[error("user {0} has no profitable company")]
    NoProfitableCompany(UserId),

    // ========== Arithmetic Errors ==========
    /// A ratio had a zero denominator.
    #[error("division by zero in {context}")]
    DivisionByZero {
        /// Which ratio was being computed.
        context: &'static str,
    },

    // ========== Input Errors ==========
    /// Period bounds are invalid.
    #[error("invalid period: {0}")]
    InvalidPeriod(#[from] PeriodError),

    /// Report or tax schedule is invalid.
    #[error(transparent)]
    Report(#[from] ReportError),

    // ========== Control Flow ==========
    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,
}

impl RatingError {
    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    /// Returns true for expected business outcomes rather than failures.
    #[must_use]
    pub const fn is_business_rule(&self) -> bool {
        matches!(self, Self::NoCompanies(_) | Self::NoProfitableCompany(_))
    }
}

impl From<RatingError> for AppError {
    fn from(err: RatingError) -> Self {
        match err {
            RatingError::Repository(msg) => Self::ExternalService(msg),
            RatingError::NoCompanies(_) | RatingError::NoProfitableCompany(_) => {
                Self::BusinessRule(err.to_string())
            }
            RatingError::DivisionByZero { .. }
            | RatingError::Report(ReportError::Overflow { .. }) => {
                Self::Undefined(err.to_string())
            }
            RatingError::InvalidPeriod(_) | RatingError::Report(_) => {
                Self::Validation(err.to_string())
            }
            RatingError::Cancelled => Self::Cancelled,
        }
    }
}
