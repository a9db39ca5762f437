//! Server configuration

use crate::auth::JwtConfig;
use chrono_tz::Tz;
use std::path::PathBuf;

/// Which compensation components a payroll run disburses.
///
/// The profile page shows base + HRA + allowances as the monthly total,
/// but historically only base pay was disbursed; both behaviors are kept
/// available and the choice is configuration, not code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayrollFormula {
    /// Disburse `base_salary` only (default)
    Base,
    /// Disburse `base_salary + hra + allowances`
    Gross,
}

impl PayrollFormula {
    fn from_env() -> Self {
        match std::env::var("PAYROLL_FORMULA").as_deref() {
            Ok("gross") => Self::Gross,
            Ok("base") | Err(_) => Self::Base,
            Ok(other) => {
                tracing::warn!(
                    "Unknown PAYROLL_FORMULA '{}', falling back to 'base'",
                    other
                );
                Self::Base
            }
        }
    }
}

/// Server configuration, loaded from environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/dayflow | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | TIMEZONE | UTC | Reporting timezone for attendance dates and pay periods |
/// | PAYROLL_FORMULA | base | base \| gross |
/// | PAYROLL_UNIQUE_PERIOD | false | Reject a second disbursement in the same year-month |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// development | staging | production
    pub environment: String,
    /// Reporting timezone: attendance dates and pay periods are derived
    /// in this zone
    pub timezone: Tz,
    /// Compensation components disbursed by a payroll run
    pub payroll_formula: PayrollFormula,
    /// Enforce at most one disbursement per employee per year-month
    pub payroll_unique_period: bool,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/dayflow".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::UTC),
            payroll_formula: PayrollFormula::from_env(),
            payroll_unique_period: std::env::var("PAYROLL_UNIQUE_PERIOD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// Override work dir and port, e.g. for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Directory holding the SQLite database file
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory holding rolling log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Ensure the working directory structure exists
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
