//! Domain types used throughout the dashboard.
//!
//! This module defines:
//!
//! - the closed selector enums (`Category`, `TenorBucket`) and `Selection`
//! - derived comparison outputs (`ComparisonRow`, `Insight`, `Trend`)
//! - run configuration (`DashboardConfig`)

pub mod types;

pub use types::*;
