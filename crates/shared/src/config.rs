//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Rating engine configuration.
    #[serde(default)]
    pub rating: RatingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rating engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatingConfig {
    /// Maximum number of per-company report fetches in flight at once.
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
    /// Replacement for the standard tax bracket schedule.
    #[serde(default)]
    pub tax_brackets: Option<Vec<TaxBracketConfig>>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            fetch_concurrency: default_fetch_concurrency(),
            tax_brackets: None,
        }
    }
}

fn default_fetch_concurrency() -> usize {
    4
}

/// One bracket of a configured tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBracketConfig {
    /// Exclusive upper bound of annual profit; `None` for the last bracket.
    #[serde(default)]
    pub below: Option<Decimal>,
    /// Rate applied to the whole annual profit, in percent.
    pub rate_percent: Decimal,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    "venturebook=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> Result<Self, AppError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("VENTUREBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when a value is out of range.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.rating.fetch_concurrency == 0 {
            return Err(AppError::Config(
                "rating.fetch_concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
