//! `fd-rates` library crate.
//!
//! The binary (`fdr`) is a thin wrapper around this library so that:
//!
//! - the comparison engine is testable without spawning processes
//! - the CLI report and the TUI share one view model
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod compare;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod tui;
