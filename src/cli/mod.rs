//! Command-line parsing for the FD rate dashboard.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! comparison and rendering code. Selection flags are optional so that
//! environment defaults (`FDR_CATEGORY`, `FDR_TENOR`) can fill the gaps.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{Category, TenorBucket};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fdr", version, about = "Fixed-deposit rate comparison dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the ranked comparison, key insights, and a bar chart; optionally export.
    Compare(CompareArgs),
    /// Print the key insights only (useful for scripting).
    Top(TopArgs),
    /// Print every rate of a category across all tenors.
    Matrix(MatrixArgs),
    /// Re-render a snapshot JSON written by `--export-json` or the TUI `e` key.
    Show(ShowArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same view model as `fdr compare`, but renders it with
    /// Ratatui and lets you switch category/tenor with the keyboard.
    Tui(TuiArgs),
}

/// Category/tenor selection shared by every subcommand.
#[derive(Debug, Parser, Clone, Default)]
pub struct SelectArgs {
    /// Deposit category.
    #[arg(short = 'c', long, value_enum)]
    pub category: Option<Category>,

    /// Tenor bucket.
    #[arg(short = 't', long, value_enum)]
    pub tenor: Option<TenorBucket>,
}

#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Number of key-insight entries.
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Disable the terminal bar chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Bar chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Export the ranked rows to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,

    /// Export the full view (rows + insights) to JSON.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Parser, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub select: SelectArgs,

    /// Number of key-insight entries.
    #[arg(long, default_value_t = 3)]
    pub top: usize,
}

#[derive(Debug, Parser, Clone)]
pub struct MatrixArgs {
    /// Deposit category.
    #[arg(short = 'c', long, value_enum)]
    pub category: Option<Category>,
}

/// Options for re-rendering a saved snapshot.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Snapshot JSON file.
    #[arg(value_name = "JSON")]
    pub snapshot: PathBuf,

    /// Disable the terminal bar chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Bar chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,
}

#[derive(Debug, Parser, Clone, Default)]
pub struct TuiArgs {
    #[command(flatten)]
    pub select: SelectArgs,
}
