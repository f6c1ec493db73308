//! Collaborator contracts consumed by the rating engine.
//!
//! The engine never reads storage directly. Callers plug in implementations of
//! these traits (database repositories, HTTP clients, in-memory snapshots).

pub mod types;

use std::future::Future;

use venturebook_shared::types::{CompanyId, Money, UserId};

pub use types::{ActivityField, Company, DirectoryError};

use crate::period::Period;
use crate::rating::RatingError;
use crate::reports::FinancialReportByPeriod;

/// Lookup of companies by owner.
pub trait CompanyDirectory: Send + Sync {
    /// Lists every company owned by `owner_id`, unpaginated.
    fn list_companies_owned_by(
        &self,
        owner_id: UserId,
    ) -> impl Future<Output = Result<Vec<Company>, RatingError>> + Send;
}

/// Source of quarterly financial reports.
pub trait FinancialReportSource: Send + Sync {
    /// Fetches the reports of `company_id` for the quarters of `period`.
    ///
    /// Reports come back ordered by year then quarter. Quarters without a
    /// report are absent from the list.
    fn fetch_company_reports(
        &self,
        company_id: CompanyId,
        period: Period,
    ) -> impl Future<Output = Result<FinancialReportByPeriod, RatingError>> + Send;
}

/// Activity field cost weights.
pub trait ActivityFieldCatalog: Send + Sync {
    /// Cost weight of the activity field `company_id` operates in.
    fn activity_field_cost(
        &self,
        company_id: CompanyId,
    ) -> impl Future<Output = Result<Money, RatingError>> + Send;

    /// Largest cost weight over all activity fields.
    fn max_activity_field_cost(&self) -> impl Future<Output = Result<Money, RatingError>> + Send;
}
