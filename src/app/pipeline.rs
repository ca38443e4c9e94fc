//! Shared "recompute the dashboard" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! selection -> comparison -> insights -> chart bounds
//!
//! Input handlers call `DashboardView::build` directly after every selection
//! change; the CLI and the TUI then focus on presentation.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, compare, top_insights};
use crate::data::RateTable;
use crate::domain::{Insight, Selection};

/// Padding (percentage points) added on each side of the chart's rate axis.
pub const CHART_PAD: f64 = 0.5;

/// Everything a view needs to render one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub comparison: Comparison,
    pub insights: Vec<Insight>,
    /// Rate axis bounds `[min - pad, max + pad]`; `None` when nothing to plot.
    pub x_bounds: Option<[f64; 2]>,
    /// User-visible notice (e.g. missing reference rate).
    pub diagnostic: Option<String>,
}

impl DashboardView {
    pub fn build(table: &RateTable, selection: Selection, top_n: usize) -> Self {
        let comparison = compare(table, selection.category, selection.tenor);
        let insights = top_insights(&comparison, top_n);
        let x_bounds = comparison
            .rate_range()
            .map(|(lo, hi)| [lo - CHART_PAD, hi + CHART_PAD]);
        let diagnostic = comparison.diagnostic();

        Self {
            selection,
            comparison,
            insights,
            x_bounds,
            diagnostic,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comparison.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, TenorBucket};

    #[test]
    fn build_default_selection() {
        let table = RateTable::builtin();
        let view = DashboardView::build(&table, Selection::default(), 3);

        assert_eq!(view.insights.len(), 3);
        assert_eq!(view.x_bounds, Some([3.0, 6.0]));
        assert!(view.diagnostic.is_none());
        assert!(!view.is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let table = RateTable::builtin();
        let selection = Selection {
            category: Category::Above3CrPremature,
            tenor: TenorBucket::Days185To270,
        };
        assert_eq!(
            DashboardView::build(&table, selection, 3),
            DashboardView::build(&table, selection, 3)
        );
    }

    #[test]
    fn missing_reference_surfaces_diagnostic() {
        let table = RateTable::builtin();
        let selection = Selection {
            category: Category::Above3CrNoPremature,
            tenor: TenorBucket::Days61To90,
        };
        let view = DashboardView::build(&table, selection, 3);

        assert!(view.diagnostic.is_some());
        assert!(view.insights.iter().all(|i| i.trend.is_none()));
        let [lo, hi] = view.x_bounds.unwrap();
        assert!((lo - 5.5).abs() < 1e-9);
        assert!((hi - 8.05).abs() < 1e-9);
    }
}
