//! Reporting utilities: formatted terminal output for the comparison.
//!
//! We keep formatting code in one place so:
//! - the comparison engine stays clean and testable
//! - output changes are localized (important for snapshot-style tests)

use crate::app::pipeline::DashboardView;
use crate::data::RateTable;
use crate::domain::{Category, Insight, REFERENCE_INSTITUTION, TenorBucket, fmt_difference, fmt_rate};

pub const TITLE: &str = "IDBI Bank FD Rates Analysis by Richa Rawal";
pub const SUBTITLE: &str = "Competitive Analysis Dashboard";
pub const CONTACT_PHONE: &str = "+918349342304";
pub const CREATED_BY: &str = "Created by Richa Rawal";

/// Booking call-to-action shown in headers and footers.
pub fn contact_line() -> String {
    format!("Book your FD with IDBI Bank: tel:{CONTACT_PHONE}")
}

/// Format the run header (title + current selection).
pub fn format_header(view: &DashboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {TITLE} ===\n"));
    out.push_str(&format!("{SUBTITLE} | {}\n", contact_line()));
    out.push_str(&format!(
        "Category: {}\n",
        view.selection.category.display_name()
    ));
    out.push_str(&format!("Tenor: {}\n", view.selection.tenor.display_name()));
    out.push_str(&format!(
        "Reference: {REFERENCE_INSTITUTION} @ {}\n",
        view.comparison
            .reference_rate
            .map(fmt_rate)
            .unwrap_or_else(|| "not offered".to_string())
    ));
    if let Some(diagnostic) = &view.diagnostic {
        out.push_str(&format!("! {diagnostic}\n"));
    }

    out
}

/// Format the ranked comparison table.
pub fn format_comparison(view: &DashboardView) -> String {
    let mut out = String::new();
    out.push_str("Interest Rate Comparison:\n");

    if view.is_empty() {
        out.push_str("No institution offers this tenor.\n");
        return out;
    }

    out.push_str(
        format!(
            "{:>4}  {:<20} {:>8} {:>10}",
            "rank", "institution", "rate", "vs IDBI"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<4}  {:-<20} {:-<8} {:-<10}", "", "", "", "").trim_end());
    out.push('\n');

    for (i, row) in view.comparison.rows.iter().enumerate() {
        let marker = if row.is_reference() { " *" } else { "" };
        out.push_str(
            format!(
                "{:>4}  {:<20} {:>8} {:>10}{marker}",
                i + 1,
                truncate(&row.institution, 20),
                fmt_rate(row.rate),
                fmt_difference(row.difference),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the "key insights" cards as lines.
pub fn format_insights(insights: &[Insight]) -> String {
    let mut out = String::new();
    out.push_str("Key Insights:\n");

    if insights.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    for insight in insights {
        let arrow = insight.trend.map(|t| t.arrow()).unwrap_or("?");
        out.push_str(&format!(
            "{}. {arrow} {:<20} {} ({})\n",
            insight.rank,
            insight.institution,
            fmt_rate(insight.rate),
            fmt_difference(insight.difference),
        ));
    }

    out
}

/// Format every rate of a category across all tenors (`-` = not offered).
pub fn format_matrix(table: &RateTable, category: Category) -> String {
    let mut out = String::new();
    out.push_str(&format!("Rates for {} (%):\n", category.display_name()));

    let mut header = format!("{:<20}", "institution");
    for tenor in TenorBucket::ALL {
        header.push_str(&format!(" {:>9}", tenor.short_label()));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for inst in table.institutions(category) {
        let mut line = format!("{:<20}", truncate(&inst.name, 20));
        for tenor in TenorBucket::ALL {
            let cell = inst
                .rate(tenor)
                .map(|r| format!("{r:.2}"))
                .unwrap_or_else(|| "-".to_string());
            line.push_str(&format!(" {cell:>9}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

pub fn format_footer() -> String {
    format!("{CREATED_BY} | {}\n", contact_line())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}
