//! Splitting a period's reports into complete calendar years.

use std::collections::{BTreeMap, HashMap};

use super::types::{FinancialReport, FinancialReportByPeriod};
use crate::period::{FIRST_QUARTER, LAST_QUARTER, Period};

/// Groups `report` into calendar years of `period` that are complete.
///
/// A year is kept only when all four of its quarters lie inside `period` and a
/// report exists for each of them. Reports are matched by `(year, quarter)`, so
/// a missing quarter excludes only its own year. Reports outside `period` are
/// ignored and, for a duplicated quarter, the first report wins.
///
/// Each kept year is keyed by the year and tagged with [`Period::full_year`].
#[must_use]
pub fn find_full_year_reports(
    report: &FinancialReportByPeriod,
    period: &Period,
) -> BTreeMap<i32, FinancialReportByPeriod> {
    let mut by_quarter: HashMap<(i32, u8), &FinancialReport> =
        HashMap::with_capacity(report.reports.len());
    for quarter_report in &report.reports {
        if period.contains(quarter_report.year, quarter_report.quarter) {
            by_quarter
                .entry((quarter_report.year, quarter_report.quarter))
                .or_insert(quarter_report);
        }
    }

    period
        .years()
        .filter(|&year| period.covers_full_year(year))
        .filter_map(|year| {
            let reports = (FIRST_QUARTER..=LAST_QUARTER)
                .map(|quarter| by_quarter.get(&(year, quarter)).map(|r| (*r).clone()))
                .collect::<Option<Vec<_>>>()?;
            Some((
                year,
                FinancialReportByPeriod::new(Period::full_year(year), reports),
            ))
        })
        .collect()
}
