//! Rating service implementation.

use std::future::Future;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures::{StreamExt, TryStreamExt, stream};
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};
use venturebook_shared::types::{UserId, checked_percent_of};

use super::calculator::calc_rating;
use super::error::RatingError;
use super::types::{RatingSettings, UserRating};
use crate::directory::{ActivityFieldCatalog, Company, CompanyDirectory, FinancialReportSource};
use crate::period::Period;
use crate::reports::{
    ConsolidatedReport, FinancialReportByPeriod, ReportError, TaxSchedule, calculate_taxes,
    find_full_year_reports,
};

/// Index of the report with the strictly greatest positive profit.
///
/// Ties keep the earliest report. Returns `None` when no profit exceeds zero.
///
/// # Errors
///
/// Returns `ReportError::Overflow` if a company's profit cannot be totalled.
pub fn most_profitable_index(
    reports: &[FinancialReportByPeriod],
) -> Result<Option<usize>, ReportError> {
    let mut best: Option<(usize, Decimal)> = None;
    for (index, report) in reports.iter().enumerate() {
        let profit = report.profit()?;
        let threshold = best.map_or(Decimal::ZERO, |(_, p)| p);
        if profit > threshold {
            best = Some((index, profit));
        }
    }
    Ok(best.map(|(index, _)| index))
}

/// Merges per-company reports of `period` and taxes their complete years.
///
/// # Errors
///
/// Returns `ReportError::Overflow` if taxes or taxable revenue leave the
/// `Decimal` range.
pub fn consolidate(
    period: Period,
    company_reports: Vec<FinancialReportByPeriod>,
    schedule: &TaxSchedule,
) -> Result<ConsolidatedReport, ReportError> {
    let mut reports = Vec::new();
    let mut taxes = Decimal::ZERO;
    let mut taxable_revenue = Decimal::ZERO;

    for company_report in company_reports {
        let full_years = find_full_year_reports(&company_report, &period);
        let summary = calculate_taxes(&full_years, schedule)?;
        taxes = taxes
            .checked_add(summary.total_taxes)
            .ok_or(ReportError::Overflow {
                context: "consolidated taxes",
            })?;
        taxable_revenue = taxable_revenue
            .checked_add(summary.total_revenue)
            .ok_or(ReportError::Overflow {
                context: "consolidated taxable revenue",
            })?;
        reports.extend(company_report.reports);
    }

    Ok(ConsolidatedReport {
        report: FinancialReportByPeriod::new(period, reports),
        taxes,
        tax_load: checked_percent_of(taxes, taxable_revenue),
    })
}

/// Runs `fut` unless `cancel` fires first.
async fn cancellable<T, F>(cancel: &CancellationToken, fut: F) -> Result<T, RatingError>
where
    F: Future<Output = Result<T, RatingError>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(RatingError::Cancelled),
        result = fut => result,
    }
}

/// Aggregates company reports and rates entrepreneurs.
///
/// All calls are read-only against the collaborators. Per-company report fetches
/// run concurrently (bounded by `RatingSettings::fetch_concurrency`) but results
/// are reduced in company order, so output never depends on completion order.
pub struct RatingService<C, R, A>
where
    C: CompanyDirectory,
    R: FinancialReportSource,
    A: ActivityFieldCatalog,
{
    companies: Arc<C>,
    reports: Arc<R>,
    fields: Arc<A>,
    settings: RatingSettings,
}

impl<C, R, A> RatingService<C, R, A>
where
    C: CompanyDirectory,
    R: FinancialReportSource,
    A: ActivityFieldCatalog,
{
    /// Create a new rating service.
    #[must_use]
    pub fn new(
        companies: Arc<C>,
        reports: Arc<R>,
        fields: Arc<A>,
        settings: RatingSettings,
    ) -> Self {
        Self {
            companies,
            reports,
            fields,
            settings,
        }
    }

    /// Finds the company with the greatest profit over `period`.
    ///
    /// Returns `Ok(None)` when no company made a strictly positive profit; ties
    /// go to the company listed first.
    ///
    /// # Errors
    ///
    /// Returns the first failing fetch (in company order) or
    /// `RatingError::Cancelled`.
    #[instrument(
        skip(self, companies, cancel),
        fields(period = %period, companies = companies.len())
    )]
    pub async fn most_profitable(
        &self,
        period: Period,
        companies: &[Company],
        cancel: &CancellationToken,
    ) -> Result<Option<Company>, RatingError> {
        let reports = self.fetch_reports(companies, period, cancel).await?;
        let company = most_profitable_index(&reports)?.map(|index| companies[index].clone());

        match &company {
            Some(c) => debug!(company_id = %c.id, "most profitable company found"),
            None => debug!("no company with positive profit"),
        }

        Ok(company)
    }

    /// Builds the consolidated, taxed report of every company owned by `user_id`.
    ///
    /// Taxes cover complete calendar years only. `tax_load` is `None` when the
    /// user has no complete-year revenue (for example, no companies at all).
    ///
    /// # Errors
    ///
    /// Returns a collaborator error or `RatingError::Cancelled`.
    #[instrument(skip(self, cancel), fields(user_id = %user_id, period = %period))]
    pub async fn user_financial_report(
        &self,
        user_id: UserId,
        period: Period,
        cancel: &CancellationToken,
    ) -> Result<ConsolidatedReport, RatingError> {
        let companies = self.list_companies(user_id, cancel).await?;
        let reports = self.fetch_reports(&companies, period, cancel).await?;
        let consolidated = consolidate(period, reports, &self.settings.tax_schedule)?;

        if consolidated.tax_load.is_none() {
            debug!("no complete-year revenue, tax load undefined");
        }

        Ok(consolidated)
    }

    /// Rates `user_id` over the previous full calendar year.
    ///
    /// # Errors
    ///
    /// See [`RatingService::calculate_user_rating_as_of`].
    pub async fn calculate_user_rating(
        &self,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<UserRating, RatingError> {
        self.calculate_user_rating_as_of(user_id, Utc::now().date_naive(), cancel)
            .await
    }

    /// Rates `user_id` over the calendar year before `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A collaborator call fails
    /// - The user owns no companies (`RatingError::NoCompanies`)
    /// - No company made a profit (`RatingError::NoProfitableCompany`)
    /// - Revenue or the maximum activity field cost is zero
    /// - The operation is cancelled
    #[instrument(skip(self, cancel), fields(user_id = %user_id))]
    pub async fn calculate_user_rating_as_of(
        &self,
        user_id: UserId,
        today: NaiveDate,
        cancel: &CancellationToken,
    ) -> Result<UserRating, RatingError> {
        let period = Period::previous_full_year(today);

        let companies = self.list_companies(user_id, cancel).await?;
        if companies.is_empty() {
            warn!("user owns no companies");
            return Err(RatingError::NoCompanies(user_id));
        }

        let reports = self.fetch_reports(&companies, period, cancel).await?;
        let Some(best) = most_profitable_index(&reports)?.map(|index| companies[index].clone())
        else {
            warn!("user has no profitable company");
            return Err(RatingError::NoProfitableCompany(user_id));
        };

        let report = consolidate(period, reports, &self.settings.tax_schedule)?;

        let cost = cancellable(cancel, self.fields.activity_field_cost(best.id)).await?;
        let max_cost = cancellable(cancel, self.fields.max_activity_field_cost()).await?;

        let profit = report.profit()?;
        let revenue = report.revenue()?;
        let rating = calc_rating(profit, revenue, cost, max_cost)?;

        info!(%period, %rating, company_id = %best.id, "user rating calculated");

        Ok(UserRating {
            user_id,
            period,
            rating,
            profit,
            revenue,
            most_profitable_company: best,
            cost,
            max_cost,
        })
    }

    async fn list_companies(
        &self,
        user_id: UserId,
        cancel: &CancellationToken,
    ) -> Result<Vec<Company>, RatingError> {
        let companies =
            cancellable(cancel, self.companies.list_companies_owned_by(user_id)).await?;
        debug!(count = companies.len(), "companies loaded");
        Ok(companies)
    }

    /// Fetches every company's reports, keeping company order.
    ///
    /// The first error in company order aborts the whole fetch.
    async fn fetch_reports(
        &self,
        companies: &[Company],
        period: Period,
        cancel: &CancellationToken,
    ) -> Result<Vec<FinancialReportByPeriod>, RatingError> {
        let fetches = stream::iter(companies)
            .map(|company| async move {
                debug!(company_id = %company.id, "fetching company reports");
                self.reports.fetch_company_reports(company.id, period).await
            })
            .buffered(self.settings.fetch_concurrency.max(1))
            .try_collect::<Vec<_>>();

        cancellable(cancel, fetches).await.inspect_err(|err| {
            if matches!(err, RatingError::Cancelled) {
                warn!("report fetch cancelled");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::time::Duration;

    use rust_decimal_macros::dec;
    use venturebook_shared::types::{ActivityFieldId, CompanyId, FinancialReportId, Money};

    use crate::reports::FinancialReport;

    /// In-memory directory implementing all three collaborator traits.
    #[derive(Default)]
    struct MockDirectory {
        companies: HashMap<UserId, Vec<Company>>,
        reports: HashMap<CompanyId, Vec<FinancialReport>>,
        costs: HashMap<CompanyId, Money>,
        max_cost: Money,
        failing: HashSet<CompanyId>,
        delays: HashMap<CompanyId, Duration>,
        requested_periods: Mutex<Vec<Period>>,
    }

    impl MockDirectory {
        fn add_company(
            &mut self,
            owner: UserId,
            cost: Money,
            quarters: &[(i32, u8, Money, Money)],
        ) -> Company {
            let company = Company {
                id: CompanyId::new(),
                owner_id: owner,
                activity_field_id: ActivityFieldId::new(),
                name: format!("Company {}", self.reports.len() + 1),
                city: "Moscow".to_string(),
            };
            let reports = quarters
                .iter()
                .map(|&(year, quarter, revenue, costs)| FinancialReport {
                    id: FinancialReportId::new(),
                    company_id: company.id,
                    revenue,
                    costs,
                    year,
                    quarter,
                })
                .collect();
            self.companies.entry(owner).or_default().push(company.clone());
            self.reports.insert(company.id, reports);
            self.costs.insert(company.id, cost);
            company
        }
    }

    impl CompanyDirectory for MockDirectory {
        async fn list_companies_owned_by(
            &self,
            owner_id: UserId,
        ) -> Result<Vec<Company>, RatingError> {
            Ok(self.companies.get(&owner_id).cloned().unwrap_or_default())
        }
    }

    impl FinancialReportSource for MockDirectory {
        async fn fetch_company_reports(
            &self,
            company_id: CompanyId,
            period: Period,
        ) -> Result<FinancialReportByPeriod, RatingError> {
            self.requested_periods.lock().unwrap().push(period);
            if let Some(delay) = self.delays.get(&company_id) {
                tokio::time::sleep(*delay).await;
            }
            if self.failing.contains(&company_id) {
                return Err(RatingError::repository(format!("report store down for {company_id}")));
            }
            let reports = self
                .reports
                .get(&company_id)
                .map(|all| {
                    all.iter()
                        .filter(|r| period.contains(r.year, r.quarter))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default();
            Ok(FinancialReportByPeriod::new(period, reports))
        }
    }

    impl ActivityFieldCatalog for MockDirectory {
        async fn activity_field_cost(&self, company_id: CompanyId) -> Result<Money, RatingError> {
            self.costs
                .get(&company_id)
                .copied()
                .ok_or_else(|| RatingError::repository("company not found"))
        }

        async fn max_activity_field_cost(&self) -> Result<Money, RatingError> {
            Ok(self.max_cost)
        }
    }

    type MockService = RatingService<MockDirectory, MockDirectory, MockDirectory>;

    fn service(directory: MockDirectory) -> MockService {
        let directory = Arc::new(directory);
        RatingService::new(
            Arc::clone(&directory),
            Arc::clone(&directory),
            directory,
            RatingSettings::default(),
        )
    }

    /// One year of quarters all reporting `(revenue, costs)`.
    fn flat_year(year: i32, revenue: Money, costs: Money) -> Vec<(i32, u8, Money, Money)> {
        (1..=4).map(|q| (year, q, revenue, costs)).collect()
    }

    fn sample_year(year: i32) -> Vec<(i32, u8, Money, Money)> {
        vec![
            (year, 1, dec!(32532513), dec!(5436438)),
            (year, 2, dec!(6743634), dec!(9876967)),
            (year, 3, dec!(4675424), dec!(2436653)),
            (year, 4, dec!(14385253), dec!(7546424)),
        ]
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test]
    async fn test_most_profitable_first_of_ties() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let first = directory.add_company(owner, dec!(1), &flat_year(2025, dec!(25), dec!(0)));
        let second = directory.add_company(owner, dec!(1), &flat_year(2025, dec!(25), dec!(0)));
        let third = directory.add_company(owner, dec!(1), &flat_year(2025, dec!(50), dec!(37.5)));
        let companies = vec![first.clone(), second, third];
        let service = service(directory);

        let best = service
            .most_profitable(Period::full_year(2025), &companies, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(best, Some(first));
    }

    #[tokio::test]
    async fn test_most_profitable_none_without_positive_profit() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let companies = vec![
            directory.add_company(owner, dec!(1), &flat_year(2025, dec!(0), dec!(1.25))),
            directory.add_company(owner, dec!(1), &flat_year(2025, dec!(0), dec!(0.25))),
            directory.add_company(owner, dec!(1), &flat_year(2025, dec!(10), dec!(10))),
        ];
        let service = service(directory);

        let best = service
            .most_profitable(Period::full_year(2025), &companies, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(best, None);
    }

    #[tokio::test]
    async fn test_most_profitable_fails_fast() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let ok = directory.add_company(owner, dec!(1), &flat_year(2025, dec!(10), dec!(0)));
        let broken = directory.add_company(owner, dec!(1), &flat_year(2025, dec!(10), dec!(0)));
        directory.failing.insert(broken.id);
        let service = service(directory);

        let result = service
            .most_profitable(Period::full_year(2025), &[ok, broken], &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(RatingError::Repository(_))));
    }

    #[tokio::test]
    async fn test_first_listed_failure_wins_even_when_slowest() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let slow = directory.add_company(owner, dec!(1), &flat_year(2023, dec!(10), dec!(0)));
        let fast = directory.add_company(owner, dec!(1), &flat_year(2023, dec!(10), dec!(0)));
        directory.failing.extend([slow.id, fast.id]);
        directory.delays.insert(slow.id, Duration::from_millis(50));
        let service = service(directory);

        for _ in 0..3 {
            let err = service
                .user_financial_report(owner, Period::full_year(2023), &CancellationToken::new())
                .await
                .unwrap_err();

            match err {
                RatingError::Repository(message) => {
                    assert!(message.contains(&slow.id.to_string()), "{message}");
                    assert!(!message.contains(&fast.id.to_string()), "{message}");
                }
                other => panic!("expected a repository error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_user_financial_report_overflow_is_an_error() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(
            owner,
            dec!(1),
            &flat_year(2023, dec!(10000000000000000000000000000), dec!(0)),
        );
        let service = service(directory);

        let result = service
            .user_financial_report(owner, Period::full_year(2023), &CancellationToken::new())
            .await;

        assert!(matches!(
            result,
            Err(RatingError::Report(ReportError::Overflow { .. }))
        ));
    }

    #[tokio::test]
    async fn test_user_financial_report_end_to_end() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(1), &sample_year(2023));
        let service = service(directory);

        let report = service
            .user_financial_report(owner, Period::full_year(2023), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.report.len(), 4);
        assert_eq!(report.profit(), Ok(dec!(42040392)));
        assert_eq!(report.revenue(), Ok(dec!(58336824)));
        assert_eq!(report.taxes, dec!(2942827.44));
        assert_eq!(
            report.tax_load,
            checked_percent_of(dec!(2942827.44), dec!(58336824))
        );
    }

    #[tokio::test]
    async fn test_user_financial_report_sums_companies_and_partial_years() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        // Complete 2023 plus a partial 2024 for the first company.
        let mut quarters = flat_year(2023, dec!(1000000), dec!(0));
        quarters.push((2024, 1, dec!(500), dec!(100)));
        directory.add_company(owner, dec!(1), &quarters);
        // Second company misses 2023 Q3, so it has no taxable year.
        directory.add_company(
            owner,
            dec!(1),
            &[
                (2023, 1, dec!(10), dec!(1)),
                (2023, 2, dec!(10), dec!(1)),
                (2023, 4, dec!(10), dec!(1)),
            ],
        );
        let service = service(directory);
        let period = Period::new(2023, 1, 2024, 2).unwrap();

        let report = service
            .user_financial_report(owner, period, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(report.report.len(), 8);
        assert_eq!(*report.period(), period);
        assert_eq!(report.revenue(), Ok(dec!(4000530)));
        // 4,000,000 at 4%, over 4,000,000 of complete-year revenue.
        assert_eq!(report.taxes, dec!(160000));
        assert_eq!(report.tax_load, Some(dec!(4)));
    }

    #[tokio::test]
    async fn test_user_financial_report_without_companies() {
        let service = service(MockDirectory::default());

        let report = service
            .user_financial_report(
                UserId::new(),
                Period::full_year(2023),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert!(report.report.is_empty());
        assert_eq!(report.taxes, Decimal::ZERO);
        assert_eq!(report.tax_load, None);
        assert_eq!(report.tax_load_or_zero(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_user_financial_report_partial_period_has_no_tax_load() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(1), &flat_year(2023, dec!(100), dec!(10)));
        let service = service(directory);

        let report = service
            .user_financial_report(
                owner,
                Period::new(2023, 2, 2023, 3).unwrap(),
                &CancellationToken::new(),
            )
            .await
            .unwrap();

        assert_eq!(report.report.len(), 2);
        assert_eq!(report.taxes, Decimal::ZERO);
        assert_eq!(report.tax_load, None);
    }

    #[tokio::test]
    async fn test_reports_keep_company_order_regardless_of_latency() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let slow = directory.add_company(owner, dec!(1), &flat_year(2023, dec!(1), dec!(0)));
        let fast = directory.add_company(owner, dec!(1), &flat_year(2023, dec!(2), dec!(0)));
        directory.delays.insert(slow.id, Duration::from_millis(30));
        let service = service(directory);

        let report = service
            .user_financial_report(owner, Period::full_year(2023), &CancellationToken::new())
            .await
            .unwrap();

        let owners: Vec<CompanyId> = report.report.reports.iter().map(|r| r.company_id).collect();
        assert_eq!(owners[..4], [slow.id; 4]);
        assert_eq!(owners[4..], [fast.id; 4]);
    }

    #[tokio::test]
    async fn test_calculate_user_rating() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let company = directory.add_company(owner, dec!(0.5), &sample_year(2025));
        directory.max_cost = dec!(2);
        let service = service(directory);

        let rating = service
            .calculate_user_rating_as_of(owner, today(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(rating.period, Period::full_year(2025));
        assert_eq!(rating.most_profitable_company, company);
        assert_eq!(rating.profit, dec!(42040392));
        assert_eq!(rating.revenue, dec!(58336824));
        assert_eq!(
            rating.rating,
            calc_rating(dec!(42040392), dec!(58336824), dec!(0.5), dec!(2)).unwrap()
        );
    }

    #[tokio::test]
    async fn test_calculate_user_rating_uses_previous_year() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(1), &flat_year(2025, dec!(10), dec!(5)));
        directory.max_cost = dec!(1);
        let directory = Arc::new(directory);
        let service = RatingService::new(
            Arc::clone(&directory),
            Arc::clone(&directory),
            Arc::clone(&directory),
            RatingSettings::default(),
        );

        service
            .calculate_user_rating_as_of(owner, today(), &CancellationToken::new())
            .await
            .unwrap();

        let periods = directory.requested_periods.lock().unwrap();
        assert!(!periods.is_empty());
        assert!(periods.iter().all(|p| *p == Period::full_year(2025)));
    }

    #[tokio::test]
    async fn test_calculate_user_rating_no_companies() {
        let service = service(MockDirectory::default());

        let result = service
            .calculate_user_rating_as_of(UserId::new(), today(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(RatingError::NoCompanies(_))));
    }

    #[tokio::test]
    async fn test_calculate_user_rating_no_profitable_company() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(1), &flat_year(2025, dec!(5), dec!(5)));
        directory.max_cost = dec!(1);
        let service = service(directory);

        let err = service
            .calculate_user_rating_as_of(owner, today(), &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RatingError::NoProfitableCompany(id) if id == owner));
        assert!(err.is_business_rule());
    }

    #[tokio::test]
    async fn test_calculate_user_rating_zero_max_cost() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(0), &flat_year(2025, dec!(10), dec!(5)));
        let service = service(directory);

        let result = service
            .calculate_user_rating_as_of(owner, today(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(RatingError::DivisionByZero { .. })));
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        directory.add_company(owner, dec!(1), &flat_year(2025, dec!(10), dec!(5)));
        let service = service(directory);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = service.calculate_user_rating_as_of(owner, today(), &cancel).await;

        assert!(matches!(result, Err(RatingError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_fetch() {
        let owner = UserId::new();
        let mut directory = MockDirectory::default();
        let company = directory.add_company(owner, dec!(1), &flat_year(2023, dec!(10), dec!(5)));
        directory.delays.insert(company.id, Duration::from_secs(30));
        let service = service(directory);
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            service.user_financial_report(owner, Period::full_year(2023), &cancel),
        )
        .await
        .expect("cancellation should end the call promptly");

        assert!(matches!(result, Err(RatingError::Cancelled)));
    }

    #[test]
    fn test_most_profitable_index_ignores_zero() {
        let period = Period::full_year(2025);
        let empty = FinancialReportByPeriod::empty(period);
        assert_eq!(most_profitable_index(&[empty.clone(), empty]), Ok(None));
        assert_eq!(most_profitable_index(&[]), Ok(None));
    }
}
