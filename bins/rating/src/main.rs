//! Venturebook rating tool
//!
//! Computes consolidated reports, most profitable companies and entrepreneur
//! ratings from a JSON data snapshot.

mod snapshot;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venturebook_core::directory::{Company, CompanyDirectory};
use venturebook_core::period::Period;
use venturebook_core::rating::{RatingError, RatingService, RatingSettings};
use venturebook_shared::types::UserId;
use venturebook_shared::{AppConfig, AppError};

use snapshot::Snapshot;

/// Exit status for expected outcomes: invalid input, business rule, cancellation.
const EXIT_EXPECTED: u8 = 3;
/// Exit status for everything else.
const EXIT_FAILURE: u8 = 1;

/// Entrepreneur ratings and consolidated financial reports
#[derive(Parser)]
#[command(name = "venturebook-rating", version)]
struct Cli {
    /// JSON snapshot with companies, activity fields and reports
    #[arg(long, global = true, default_value = "snapshot.json")]
    snapshot: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rate a user over the previous full calendar year
    Rating {
        /// User to rate
        #[arg(long)]
        user: UserId,
        /// Reference date (defaults to today, UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Consolidated, taxed report over a period
    Report(PeriodArgs),
    /// Most profitable company of a user over a period
    MostProfitable(PeriodArgs),
}

#[derive(Args)]
struct PeriodArgs {
    /// Owner of the companies
    #[arg(long)]
    user: UserId,
    /// First quarter, e.g. 2024-Q1
    #[arg(long)]
    from: QuarterArg,
    /// Last quarter, e.g. 2024-Q4
    #[arg(long)]
    to: QuarterArg,
}

impl PeriodArgs {
    fn period(&self) -> Result<Period, AppError> {
        Period::new(self.from.year, self.from.quarter, self.to.year, self.to.quarter)
            .map_err(|e| RatingError::from(e).into())
    }
}

/// A `YYYY-Qn` command line argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuarterArg {
    year: i32,
    quarter: u8,
}

impl FromStr for QuarterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("expected YYYY-Qn, got '{s}'");
        let (year, quarter) = s.split_once('-').ok_or_else(invalid)?;
        let quarter = quarter
            .strip_prefix(['Q', 'q'])
            .ok_or_else(invalid)?
            .parse::<u8>()
            .map_err(|_| invalid())?;
        if !(1..=4).contains(&quarter) {
            return Err(format!("quarter must be 1-4, got {quarter}"));
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { year, quarter })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe_failure(&err));
            ExitCode::from(exit_status(&err))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config);

    let snapshot = Arc::new(Snapshot::load(&cli.snapshot, Utc::now().date_naive())?);
    info!(path = %cli.snapshot.display(), "snapshot loaded");

    let settings = RatingSettings::from_config(&config.rating).map_err(AppError::from)?;
    let service = RatingService::new(
        Arc::clone(&snapshot),
        Arc::clone(&snapshot),
        Arc::clone(&snapshot),
        settings,
    );

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, cancelling");
            on_signal.cancel();
        }
    });

    match cli.command {
        Commands::Rating { user, as_of } => {
            let today = as_of.unwrap_or_else(|| Utc::now().date_naive());
            let rating = service
                .calculate_user_rating_as_of(user, today, &cancel)
                .await
                .map_err(AppError::from)?;
            print_json(&rating)?;
        }
        Commands::Report(args) => {
            let report = service
                .user_financial_report(args.user, args.period()?, &cancel)
                .await
                .map_err(AppError::from)?;
            print_json(&report)?;
        }
        Commands::MostProfitable(args) => {
            let period = args.period()?;
            let companies = snapshot
                .list_companies_owned_by(args.user)
                .await
                .map_err(AppError::from)?;
            let company = service
                .most_profitable(period, &companies, &cancel)
                .await
                .and_then(|company| require_profitable(company, args.user))
                .map_err(AppError::from)?;
            print_json(&company)?;
        }
    }

    Ok(())
}

/// A missing most profitable company is a business-rule failure for the caller.
fn require_profitable(company: Option<Company>, user: UserId) -> Result<Company, RatingError> {
    company.ok_or(RatingError::NoProfitableCompany(user))
}

fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<AppError>() {
        Some(app) if app.is_expected() => EXIT_EXPECTED,
        _ => EXIT_FAILURE,
    }
}

fn describe_failure(err: &anyhow::Error) -> String {
    match err.downcast_ref::<AppError>() {
        Some(app) => format!("error[{}]: {app}", app.error_code()),
        None => format!("error: {err:#}"),
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.as_str().into());

    // Logs go to stderr so stdout stays valid JSON.
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
