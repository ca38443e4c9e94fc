//! Environment-driven defaults.
//!
//! `.env` is loaded with `dotenvy` (if present); the recognised variables are:
//!
//! - `FDR_CATEGORY` / `FDR_TENOR`: default selection, using the CLI value names
//! - `FDR_LOG`: `env_logger` filter directives (default `warn`)
//! - `FDR_LOG_FILE`: append logs to this file instead of stderr
//!
//! Explicit CLI flags always win over environment values.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::SelectArgs;
use crate::domain::{Category, Selection, TenorBucket};
use crate::error::AppError;

pub const ENV_CATEGORY: &str = "FDR_CATEGORY";
pub const ENV_TENOR: &str = "FDR_TENOR";
pub const ENV_LOG: &str = "FDR_LOG";
pub const ENV_LOG_FILE: &str = "FDR_LOG_FILE";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvSettings {
    pub category: Option<Category>,
    pub tenor: Option<TenorBucket>,
    pub log_filter: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl EnvSettings {
    /// Load `.env` (if any) and read settings from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let category = get(ENV_CATEGORY)
            .map(|v| parse_value::<Category>(ENV_CATEGORY, &v))
            .transpose()?;
        let tenor = get(ENV_TENOR)
            .map(|v| parse_value::<TenorBucket>(ENV_TENOR, &v))
            .transpose()?;

        Ok(Self {
            category,
            tenor,
            log_filter: get(ENV_LOG),
            log_file: get(ENV_LOG_FILE).map(PathBuf::from),
        })
    }

    /// Resolve the starting selection: flag, then environment, then default.
    pub fn selection(&self, args: &SelectArgs) -> Selection {
        let fallback = Selection::default();
        Selection {
            category: args.category.or(self.category).unwrap_or(fallback.category),
            tenor: args.tenor.or(self.tenor).unwrap_or(fallback.tenor),
        }
    }
}

fn parse_value<T: ValueEnum>(key: &str, raw: &str) -> Result<T, AppError> {
    T::from_str(raw, true).map_err(|_| {
        let allowed: Vec<String> = T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        AppError::usage(format!(
            "Invalid {key}='{raw}' (expected one of: {}).",
            allowed.join(", ")
        ))
    })
}
