//! ASCII horizontal bar chart for terminal output.
//!
//! This is intentionally "dumb" (fixed-width rows), optimized for:
//! - quick visual comparison in a terminal or a pipe
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - other institutions: `=` bars
//! - reference institution: `#` bar
//! - axis: lower/upper bound of the padded rate range, in percent

use crate::app::pipeline::DashboardView;
use crate::domain::fmt_rate;

const LABEL_WIDTH: usize = 16;
const MIN_BAR_WIDTH: usize = 10;

/// Render one bar per comparison row, scaled to the view's `x_bounds`.
pub fn render_ascii_bars(view: &DashboardView, width: usize) -> String {
    let Some([lo, hi]) = view.x_bounds else {
        return "(no data to plot)\n".to_string();
    };

    // label + space + bar + space + "7.55%"
    let bar_width = width
        .saturating_sub(LABEL_WIDTH + 2 + 6)
        .max(MIN_BAR_WIDTH);
    let span = (hi - lo).max(1e-9);
    let label_width = LABEL_WIDTH;

    let mut out = String::new();
    for row in &view.comparison.rows {
        let u = ((row.rate - lo) / span).clamp(0.0, 1.0);
        let len = ((bar_width as f64) * u).round() as usize;
        let fill = if row.is_reference() { '#' } else { '=' };
        let bar: String = std::iter::repeat_n(fill, len).collect();

        out.push_str(&format!(
            "{:<label_width$} {:<bar_width$} {}\n",
            clip(&row.institution, LABEL_WIDTH),
            bar,
            fmt_rate(row.rate),
        ));
    }

    // Axis: '+' at both ends of the bar column with bound labels underneath.
    let axis = format!("{}+{}+", " ".repeat(LABEL_WIDTH + 1), "-".repeat(bar_width.saturating_sub(2)));
    out.push_str(&axis);
    out.push('\n');

    let lo_label = fmt_rate(lo);
    let hi_label = fmt_rate(hi);
    let gap = bar_width.saturating_sub(lo_label.len() + hi_label.len());
    out.push_str(&format!(
        "{}{lo_label}{}{hi_label}\n",
        " ".repeat(LABEL_WIDTH + 1),
        " ".repeat(gap)
    ));

    out
}

fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RateTable;
    use crate::domain::{Category, Selection, TenorBucket};

    fn view(category: Category, tenor: TenorBucket) -> DashboardView {
        DashboardView::build(&RateTable::builtin(), Selection { category, tenor }, 3)
    }

    fn bar_len(line: &str) -> usize {
        line.chars().filter(|&c| c == '=' || c == '#').count()
    }

    #[test]
    fn bars_scale_with_rate() {
        let out = render_ascii_bars(&view(Category::Below3Cr, TenorBucket::Days61To90), 60);
        let lines: Vec<&str> = out.lines().collect();

        // 10 rows + axis + labels
        assert_eq!(lines.len(), 12);
        let first = bar_len(lines[0]);
        let last = bar_len(lines[9]);
        assert!(first > last, "top rate should have the longest bar");
        assert!(lines[9].starts_with("Kotak Bank"));
        assert!(lines[11].contains("3.00%"));
        assert!(lines[11].trim_end().ends_with("6.00%"));
    }

    #[test]
    fn reference_bar_is_distinguished() {
        let out = render_ascii_bars(&view(Category::Below3Cr, TenorBucket::Days61To90), 60);
        let idbi = out.lines().find(|l| l.starts_with("IDBI BANK")).unwrap();
        assert!(idbi.contains('#'));
        assert!(!idbi.contains('='));
        let sbi = out.lines().find(|l| l.starts_with("SBI")).unwrap();
        assert!(sbi.contains('='));
    }

    #[test]
    fn rows_are_fixed_width() {
        let out = render_ascii_bars(&view(Category::Above3CrPremature, TenorBucket::Days185To270), 50);
        let widths: Vec<usize> = out.lines().take(10).map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}
