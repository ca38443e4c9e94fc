//! `env_logger` setup.
//!
//! The TUI owns the terminal, so in interactive mode logs only go to
//! `FDR_LOG_FILE` when one is configured and are disabled otherwise.

use std::fs::OpenOptions;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::EnvSettings;
use crate::error::AppError;

const DEFAULT_FILTER: &str = "warn";

/// Install the global logger. Call once, before any front-end starts.
pub fn init(settings: &EnvSettings, interactive: bool) -> Result<(), AppError> {
    let mut builder = Builder::new();
    builder.format_timestamp_millis();

    match (&settings.log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AppError::usage(format!("Failed to open log file '{}': {e}", path.display())))?;
            builder.parse_filters(settings.log_filter.as_deref().unwrap_or(DEFAULT_FILTER));
            builder.target(Target::Pipe(Box::new(file)));
        }
        (None, true) => {
            builder.filter_level(LevelFilter::Off);
        }
        (None, false) => {
            builder.parse_filters(settings.log_filter.as_deref().unwrap_or(DEFAULT_FILTER));
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| AppError::runtime(format!("Failed to initialize logging: {e}")))
}
