//! Comparison engine: selected cell -> ranked rows with reference deltas.
//!
//! Everything here is pure and cheap (a single filter/map/sort over at most a
//! handful of institutions), so views call it on every selection change.

use serde::{Deserialize, Serialize};

use crate::data::RateTable;
use crate::domain::{
    Category, ComparisonRow, Insight, REFERENCE_INSTITUTION, TenorBucket, Trend,
};

/// Ranked rows for one (category, tenor) cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub category: Category,
    pub tenor: TenorBucket,
    /// Reference institution's rate at this cell, if offered.
    pub reference_rate: Option<f64>,
    /// Sorted by rate, descending. Absent cells are not listed.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Notice to show instead of deltas when there is no reference rate.
    pub fn diagnostic(&self) -> Option<String> {
        if self.reference_rate.is_some() {
            return None;
        }
        Some(format!(
            "{REFERENCE_INSTITUTION} does not offer {} ({}); deltas unavailable.",
            self.tenor.display_name(),
            self.category.display_name(),
        ))
    }

    /// Lowest and highest rate among the rows.
    pub fn rate_range(&self) -> Option<(f64, f64)> {
        let mut rates = self.rows.iter().map(|r| r.rate);
        let first = rates.next()?;
        Some(rates.fold((first, first), |(lo, hi), r| (lo.min(r), hi.max(r))))
    }
}

/// Round to 2 decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compare every institution offering `tenor` in `category` against the
/// reference institution.
///
/// Institutions with an absent rate are skipped. Rows are sorted by rate,
/// descending; equal rates keep table order.
pub fn compare(table: &RateTable, category: Category, tenor: TenorBucket) -> Comparison {
    let reference_rate = table.reference_rate(category, tenor);
    if reference_rate.is_none() {
        log::warn!(
            "no {REFERENCE_INSTITUTION} rate for {} / {}; deltas unavailable",
            category.id(),
            tenor.display_name()
        );
    }

    let mut rows: Vec<ComparisonRow> = table
        .institutions(category)
        .iter()
        .filter_map(|inst| {
            let rate = inst.rate(tenor)?;
            Some(ComparisonRow {
                institution: inst.name.clone(),
                rate,
                difference: reference_rate.map(|base| round2(rate - base)),
            })
        })
        .collect();

    // `sort_by` is stable, so ties stay in table order.
    rows.sort_by(|a, b| b.rate.total_cmp(&a.rate));

    log::debug!(
        "compared {} / {}: {} row(s)",
        category.id(),
        tenor.display_name(),
        rows.len()
    );

    Comparison {
        category,
        tenor,
        reference_rate,
        rows,
    }
}

/// The first `n` rows of a comparison as insight cards.
pub fn top_insights(comparison: &Comparison, n: usize) -> Vec<Insight> {
    comparison
        .rows
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, row)| Insight {
            rank: i + 1,
            institution: row.institution.clone(),
            rate: row.rate,
            difference: row.difference,
            trend: row.difference.map(Trend::from_difference),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InstitutionRates;

    fn row<'a>(c: &'a Comparison, name: &str) -> Option<&'a ComparisonRow> {
        c.rows.iter().find(|r| r.institution == name)
    }

    #[test]
    fn below_3cr_longest_tenor_deltas() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Below3Cr, TenorBucket::Days271To1Year);

        assert_eq!(c.reference_rate, Some(6.25));
        assert_eq!(c.rows.len(), 10);
        assert_eq!(row(&c, "SBI").unwrap().difference, Some(0.25));
        assert_eq!(row(&c, "HDFC BANK").unwrap().difference, Some(-0.25));
        assert_eq!(row(&c, REFERENCE_INSTITUTION).unwrap().difference, Some(0.0));
        assert!(c.diagnostic().is_none());
    }

    #[test]
    fn ties_keep_table_order() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Below3Cr, TenorBucket::Days271To1Year);
        let names: Vec<&str> = c.rows.iter().map(|r| r.institution.as_str()).collect();
        // SBI, BANK OF BARODA, FEDERAL BANK, PNB all quote 6.50.
        assert_eq!(&names[..4], ["SBI", "BANK OF BARODA", "FEDERAL BANK", "PNB"]);
        assert_eq!(names[4], "INDUSIND BANK");
        assert_eq!(names[5], REFERENCE_INSTITUTION);
    }

    #[test]
    fn absent_cells_are_excluded() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Above3CrNoPremature, TenorBucket::Days91To184);

        assert_eq!(c.rows.len(), 9);
        assert!(row(&c, "Kotak Bank").is_none());
        assert_eq!(c.reference_rate, Some(7.21));
        assert_eq!(row(&c, "BANK OF BARODA").unwrap().difference, Some(0.34));
        assert_eq!(row(&c, "PNB").unwrap().difference, Some(-0.16));
        assert_eq!(c.rows[0].institution, "BANK OF BARODA");
    }

    #[test]
    fn missing_reference_rate_yields_unavailable_deltas() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Above3CrNoPremature, TenorBucket::Days61To90);

        assert_eq!(c.reference_rate, None);
        assert_eq!(c.rows.len(), 7);
        for name in ["Kotak Bank", "PNB", REFERENCE_INSTITUTION] {
            assert!(row(&c, name).is_none(), "{name} should be excluded");
        }
        assert!(c.rows.iter().all(|r| r.difference.is_none()));
        assert!(c.diagnostic().unwrap().contains(REFERENCE_INSTITUTION));
    }

    #[test]
    fn rounding_is_two_decimals() {
        assert_eq!(round2(7.11 - 6.36), 0.75);
        assert_eq!(round2(6.35 - 6.36), -0.01);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn top_insights_are_prefix_of_rows() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Below3Cr, TenorBucket::Days271To1Year);
        let top = top_insights(&c, 3);

        assert_eq!(top.len(), 3);
        for (i, insight) in top.iter().enumerate() {
            assert_eq!(insight.rank, i + 1);
            assert_eq!(insight.institution, c.rows[i].institution);
            assert_eq!(insight.rate, c.rows[i].rate);
            assert_eq!(insight.trend, Some(Trend::Up));
        }
    }

    #[test]
    fn top_insights_handle_short_and_empty_comparisons() {
        let table = RateTable::new([(
            Category::Below3Cr,
            vec![
                InstitutionRates::new("A", [Some(5.0), None, None, None]),
                InstitutionRates::new(REFERENCE_INSTITUTION, [Some(5.0), None, None, None]),
            ],
        )]);

        let c = compare(&table, Category::Below3Cr, TenorBucket::Days61To90);
        let top = top_insights(&c, 3);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].trend, Some(Trend::Flat));

        let empty = compare(&table, Category::Below3Cr, TenorBucket::Days91To184);
        assert!(empty.rows.is_empty());
        assert!(empty.rate_range().is_none());
        assert!(top_insights(&empty, 3).is_empty());
    }

    #[test]
    fn rate_range_spans_rows() {
        let table = RateTable::builtin();
        let c = compare(&table, Category::Below3Cr, TenorBucket::Days61To90);
        assert_eq!(c.rate_range(), Some((3.50, 5.50)));
    }
}
