//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads environment defaults and installs the logger
//! - checks the rate table
//! - parses CLI arguments and dispatches to a front-end
//! - prints reports/charts and writes optional exports

use clap::Parser;

use crate::app::pipeline::DashboardView;
use crate::cli::{Command, CompareArgs, MatrixArgs, ShowArgs, TopArgs, TuiArgs};
use crate::config::EnvSettings;
use crate::data::RateTable;
use crate::domain::DashboardConfig;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `fdr` binary.
pub fn run() -> Result<(), AppError> {
    // We want `fdr` and `fdr -c above3cr-premature` to behave like `fdr tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let env = EnvSettings::from_env()?;
    let interactive = matches!(cli.command, Command::Tui(_));
    crate::logging::init(&env, interactive)?;

    let table = RateTable::builtin();
    table.check_invariants()?;

    match cli.command {
        Command::Compare(args) => handle_compare(&table, &env, args),
        Command::Top(args) => handle_top(&table, &env, args),
        Command::Matrix(args) => handle_matrix(&table, &env, args),
        Command::Show(args) => handle_show(args),
        Command::Tui(args) => handle_tui(table, &env, args),
    }
}

fn handle_compare(table: &RateTable, env: &EnvSettings, args: CompareArgs) -> Result<(), AppError> {
    let config = config_from_compare_args(&args, env);
    let view = DashboardView::build(table, config.selection, config.top_n);

    print!("{}", render_full_report(&view, config.plot, config.plot_width));

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_results_csv(path, &view)?;
    }
    if let Some(path) = &config.export_json {
        crate::io::write_snapshot_json(path, &view)?;
    }

    Ok(())
}

fn handle_top(table: &RateTable, env: &EnvSettings, args: TopArgs) -> Result<(), AppError> {
    let selection = env.selection(&args.select);
    let view = DashboardView::build(table, selection, args.top);

    if let Some(diagnostic) = &view.diagnostic {
        println!("! {diagnostic}");
    }
    print!("{}", crate::report::format_insights(&view.insights));
    Ok(())
}

fn handle_matrix(table: &RateTable, env: &EnvSettings, args: MatrixArgs) -> Result<(), AppError> {
    let category = args
        .category
        .or(env.category)
        .unwrap_or(crate::domain::Selection::default().category);
    print!("{}", crate::report::format_matrix(table, category));
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let snapshot = crate::io::read_snapshot_json(&args.snapshot)?;
    println!("Snapshot generated at {}", snapshot.generated_at.to_rfc3339());
    print!("{}", render_full_report(&snapshot.view, !args.no_plot, args.width));
    Ok(())
}

fn handle_tui(table: RateTable, env: &EnvSettings, args: TuiArgs) -> Result<(), AppError> {
    let selection = env.selection(&args.select);
    crate::tui::run(table, selection, DashboardConfig::default().top_n)
}

/// Header, comparison table, insights, optional bar chart, and footer.
pub fn render_full_report(view: &DashboardView, plot: bool, plot_width: usize) -> String {
    let mut out = String::new();
    out.push_str(&crate::report::format_header(view));
    out.push('\n');
    out.push_str(&crate::report::format_comparison(view));
    out.push('\n');
    out.push_str(&crate::report::format_insights(&view.insights));
    if plot {
        out.push('\n');
        out.push_str(&crate::plot::render_ascii_bars(view, plot_width));
    }
    out.push('\n');
    out.push_str(&crate::report::format_footer());
    out
}

pub fn config_from_compare_args(args: &CompareArgs, env: &EnvSettings) -> DashboardConfig {
    DashboardConfig {
        selection: env.selection(&args.select),
        top_n: args.top,
        plot: !args.no_plot,
        plot_width: args.width,
        export_csv: args.export.clone(),
        export_json: args.export_json.clone(),
    }
}

/// Rewrite argv so `fdr` defaults to `fdr tui`.
///
/// Rules:
/// - `fdr`                      -> `fdr tui`
/// - `fdr -c below3cr ...`      -> `fdr tui -c below3cr ...`
/// - `fdr --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "compare" | "top" | "matrix" | "show" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
