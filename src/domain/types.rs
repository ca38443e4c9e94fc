//! Shared domain types.
//!
//! These types are intentionally small and serializable so they can be:
//!
//! - used in-memory by the comparison engine and the views
//! - parsed from CLI flags / environment values (closed `ValueEnum`s)
//! - exported to JSON/CSV

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Institution every delta is measured against.
pub const REFERENCE_INSTITUTION: &str = "IDBI BANK";

/// Number of tenor buckets (length of every rate sequence).
pub const TENOR_COUNT: usize = 4;

/// Deposit-size / withdrawal-terms bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    #[serde(rename = "below3Cr")]
    #[value(name = "below3cr")]
    Below3Cr,
    #[serde(rename = "above3CrPremature")]
    #[value(name = "above3cr-premature")]
    Above3CrPremature,
    #[serde(rename = "above3CrNoPremature")]
    #[value(name = "above3cr-no-premature")]
    Above3CrNoPremature,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Below3Cr,
        Category::Above3CrPremature,
        Category::Above3CrNoPremature,
    ];

    /// Stable identifier used in exports.
    pub fn id(self) -> &'static str {
        match self {
            Category::Below3Cr => "below3Cr",
            Category::Above3CrPremature => "above3CrPremature",
            Category::Above3CrNoPremature => "above3CrNoPremature",
        }
    }

    /// Human-readable label for selectors and headers.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Below3Cr => "< 3 Crores",
            Category::Above3CrPremature => "> 3 Crore with premature withdrawal",
            Category::Above3CrNoPremature => "> 3 Crore without premature withdrawal",
        }
    }

    /// Position within `Category::ALL`.
    pub fn position(self) -> usize {
        match self {
            Category::Below3Cr => 0,
            Category::Above3CrPremature => 1,
            Category::Above3CrNoPremature => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Deposit duration range. Declaration order is ascending duration and is the
/// index into every institution's rate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum TenorBucket {
    #[serde(rename = "61 to 90 days")]
    #[value(name = "61-90")]
    Days61To90,
    #[serde(rename = "91 to 184 days")]
    #[value(name = "91-184")]
    Days91To184,
    #[serde(rename = "185 to 270 days")]
    #[value(name = "185-270")]
    Days185To270,
    #[serde(rename = "271 days to <1 year")]
    #[value(name = "271-365")]
    Days271To1Year,
}

impl TenorBucket {
    pub const ALL: [TenorBucket; TENOR_COUNT] = [
        TenorBucket::Days61To90,
        TenorBucket::Days91To184,
        TenorBucket::Days185To270,
        TenorBucket::Days271To1Year,
    ];

    /// Index into a rate sequence.
    pub fn index(self) -> usize {
        match self {
            TenorBucket::Days61To90 => 0,
            TenorBucket::Days91To184 => 1,
            TenorBucket::Days185To270 => 2,
            TenorBucket::Days271To1Year => 3,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TenorBucket::Days61To90 => "61 to 90 days",
            TenorBucket::Days91To184 => "91 to 184 days",
            TenorBucket::Days185To270 => "185 to 270 days",
            TenorBucket::Days271To1Year => "271 days to <1 year",
        }
    }

    /// Compact column header for matrix output.
    pub fn short_label(self) -> &'static str {
        match self {
            TenorBucket::Days61To90 => "61-90d",
            TenorBucket::Days91To184 => "91-184d",
            TenorBucket::Days185To270 => "185-270d",
            TenorBucket::Days271To1Year => "271d-1y",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % TENOR_COUNT]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + TENOR_COUNT - 1) % TENOR_COUNT]
    }
}

/// The two pieces of mutable UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub tenor: TenorBucket,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: Category::Below3Cr,
            tenor: TenorBucket::Days61To90,
        }
    }
}

/// One institution's rate at the selected (category, tenor), with its delta
/// against the reference institution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub institution: String,
    /// Percent.
    pub rate: f64,
    /// `rate - reference rate`, rounded to 2 decimals. `None` when the
    /// reference institution has no rate at this cell.
    pub difference: Option<f64>,
}

impl ComparisonRow {
    pub fn is_reference(&self) -> bool {
        self.institution == REFERENCE_INSTITUTION
    }
}

/// Direction of a delta against the reference institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_difference(difference: f64) -> Self {
        if difference > 0.0 {
            Trend::Up
        } else if difference < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "=",
        }
    }
}

/// A "key insights" card: one of the top-N rows by rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// 1-based position in the sorted comparison.
    pub rank: usize,
    pub institution: String,
    pub rate: f64,
    pub difference: Option<f64>,
    pub trend: Option<Trend>,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, environment defaults, and built-in defaults.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub selection: Selection,
    /// Number of insight cards.
    pub top_n: usize,
    pub plot: bool,
    pub plot_width: usize,
    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            top_n: 3,
            plot: true,
            plot_width: 60,
            export_csv: None,
            export_json: None,
        }
    }
}

/// Format a rate as `6.50%`.
pub fn fmt_rate(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// Format a delta as `+0.25%`, `-0.25%`, `0.00%`, or `n/a`.
pub fn fmt_difference(difference: Option<f64>) -> String {
    match difference {
        Some(d) if d > 0.0 => format!("+{d:.2}%"),
        // Normalize -0.0 so a zero delta never prints as "-0.00%".
        Some(d) if d == 0.0 => "0.00%".to_string(),
        Some(d) => format!("{d:.2}%"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenor_index_follows_declaration_order() {
        for (i, tenor) in TenorBucket::ALL.iter().enumerate() {
            assert_eq!(tenor.index(), i);
        }
        assert!(TenorBucket::Days61To90 < TenorBucket::Days271To1Year);
    }

    #[test]
    fn category_cycles_wrap_around() {
        assert_eq!(Category::Above3CrNoPremature.next(), Category::Below3Cr);
        assert_eq!(Category::Below3Cr.prev(), Category::Above3CrNoPremature);
        assert_eq!(TenorBucket::Days271To1Year.next(), TenorBucket::Days61To90);
        assert_eq!(TenorBucket::Days61To90.prev(), TenorBucket::Days271To1Year);
    }

    #[test]
    fn value_names_parse_case_insensitively() {
        assert_eq!(Category::from_str("ABOVE3CR-PREMATURE", true), Ok(Category::Above3CrPremature));
        assert_eq!(TenorBucket::from_str("271-365", true), Ok(TenorBucket::Days271To1Year));
        assert!(TenorBucket::from_str("1-2", true).is_err());
    }

    #[test]
    fn serde_uses_stable_ids() {
        let json = serde_json::to_string(&Selection::default()).unwrap();
        assert_eq!(json, r#"{"category":"below3Cr","tenor":"61 to 90 days"}"#);
    }

    #[test]
    fn trend_follows_sign() {
        assert_eq!(Trend::from_difference(0.25), Trend::Up);
        assert_eq!(Trend::from_difference(-0.25), Trend::Down);
        assert_eq!(Trend::from_difference(0.0), Trend::Flat);
    }

    #[test]
    fn difference_formatting() {
        assert_eq!(fmt_difference(Some(0.25)), "+0.25%");
        assert_eq!(fmt_difference(Some(-0.25)), "-0.25%");
        assert_eq!(fmt_difference(Some(-0.0)), "0.00%");
        assert_eq!(fmt_difference(None), "n/a");
        assert_eq!(fmt_rate(6.5), "6.50%");
    }
}
