//! In-memory data snapshot backing the collaborator traits.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use venturebook_core::directory::{
    ActivityField, ActivityFieldCatalog, Company, CompanyDirectory, FinancialReportSource,
};
use venturebook_core::period::Period;
use venturebook_core::rating::RatingError;
use venturebook_core::reports::{FinancialReport, FinancialReportByPeriod, validate_reports};
use venturebook_shared::types::{ActivityFieldId, CompanyId, Money, UserId};

/// Snapshot file layout.
#[derive(Debug, Default, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub activity_fields: Vec<ActivityField>,
    #[serde(default)]
    pub reports: Vec<FinancialReport>,
}

/// Companies, activity fields and reports held in memory.
#[derive(Debug)]
pub struct Snapshot {
    companies: Vec<Company>,
    fields: HashMap<ActivityFieldId, ActivityField>,
    reports: HashMap<CompanyId, Vec<FinancialReport>>,
}

impl Snapshot {
    /// Reads and validates a snapshot from a JSON file.
    pub fn load(path: &Path, today: NaiveDate) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let file: SnapshotFile = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse '{}'", path.display()))?;
        Self::from_file(file, today)
    }

    /// Builds a snapshot, rejecting invalid activity fields and reports.
    pub fn from_file(file: SnapshotFile, today: NaiveDate) -> anyhow::Result<Self> {
        for field in &file.activity_fields {
            field
                .validate()
                .with_context(|| format!("invalid activity field {}", field.id))?;
        }

        if let Err((index, err)) = validate_reports(&file.reports, today) {
            bail!("invalid report #{index}: {err}");
        }

        let fields: HashMap<_, _> = file
            .activity_fields
            .into_iter()
            .map(|field| (field.id, field))
            .collect();

        for company in &file.companies {
            if !fields.contains_key(&company.activity_field_id) {
                bail!(
                    "company {} references unknown activity field {}",
                    company.id,
                    company.activity_field_id
                );
            }
        }

        let mut reports: HashMap<CompanyId, Vec<FinancialReport>> = HashMap::new();
        for report in file.reports {
            reports.entry(report.company_id).or_default().push(report);
        }
        for company_reports in reports.values_mut() {
            company_reports.sort_by_key(|r| (r.year, r.quarter));
        }

        Ok(Self {
            companies: file.companies,
            fields,
            reports,
        })
    }
}

impl CompanyDirectory for Snapshot {
    async fn list_companies_owned_by(&self, owner_id: UserId) -> Result<Vec<Company>, RatingError> {
        Ok(self
            .companies
            .iter()
            .filter(|c| c.owner_id == owner_id)
            .cloned()
            .collect())
    }
}

impl FinancialReportSource for Snapshot {
    async fn fetch_company_reports(
        &self,
        company_id: CompanyId,
        period: Period,
    ) -> Result<FinancialReportByPeriod, RatingError> {
        // Quarters without a report are skipped, not zero-filled.
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

impl ActivityFieldCatalog for Snapshot {
    async fn activity_field_cost(&self, company_id: CompanyId) -> Result<Money, RatingError> {
        let company = self
            .companies
            .iter()
            .find(|c| c.id == company_id)
            .ok_or_else(|| RatingError::repository(format!("company {company_id} not found")))?;
        self.fields
            .get(&company.activity_field_id)
            .map(|field| field.cost)
            .ok_or_else(|| {
                RatingError::repository(format!(
                    "activity field {} not found",
                    company.activity_field_id
                ))
            })
    }

    async fn max_activity_field_cost(&self) -> Result<Money, RatingError> {
        Ok(self
            .fields
            .values()
            .map(|field| field.cost)
            .max()
            .unwrap_or_default())
    }
}
