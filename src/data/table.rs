//! Compiled-in fixed-deposit rate table.
//!
//! The table is the only data feed of the dashboard. It is built once, never
//! mutated, and shared by reference with every view.

use std::collections::HashMap;

use crate::domain::{Category, REFERENCE_INSTITUTION, TENOR_COUNT, TenorBucket};
use crate::error::AppError;

/// Rates (percent) for one institution, indexed by `TenorBucket::index()`.
/// `None` means the product is not offered at that tenor.
pub type RateSeries = [Option<f64>; TENOR_COUNT];

const BELOW_3CR: &[(&str, RateSeries)] = &[
    ("HDFC BANK", [Some(4.50), Some(4.50), Some(5.75), Some(6.00)]),
    ("ICICI BANK", [Some(4.50), Some(4.75), Some(5.75), Some(6.00)]),
    ("SBI", [Some(5.50), Some(5.50), Some(6.25), Some(6.50)]),
    ("AXIS BANK", [Some(4.50), Some(4.75), Some(5.75), Some(6.00)]),
    ("Kotak Bank", [Some(3.50), Some(4.25), Some(6.00), Some(6.00)]),
    ("BANK OF BARODA", [Some(5.50), Some(5.60), Some(6.25), Some(6.50)]),
    ("INDUSIND BANK", [Some(4.75), Some(5.00), Some(6.10), Some(6.35)]),
    ("FEDERAL BANK", [Some(5.50), Some(5.50), Some(6.25), Some(6.50)]),
    ("PNB", [Some(4.50), Some(5.50), Some(6.25), Some(6.50)]),
    ("IDBI BANK", [Some(4.75), Some(5.50), Some(6.00), Some(6.25)]),
];

const ABOVE_3CR_PREMATURE: &[(&str, RateSeries)] = &[
    ("HDFC BANK", [Some(6.00), Some(6.50), Some(6.85), Some(6.75)]),
    ("ICICI BANK", [Some(6.00), Some(6.50), Some(6.85), Some(7.00)]),
    ("SBI", [Some(6.25), Some(6.60), Some(6.60), Some(6.75)]),
    ("AXIS BANK", [Some(6.00), Some(6.50), Some(6.75), Some(6.85)]),
    ("Kotak Bank", [Some(5.50), Some(6.00), Some(6.00), Some(6.50)]),
    ("BANK OF BARODA", [Some(5.75), Some(5.75), Some(6.75), Some(6.75)]),
    ("INDUSIND BANK", [Some(6.35), Some(7.00), Some(7.10), Some(7.20)]),
    ("FEDERAL BANK", [Some(6.60), Some(7.10), Some(7.15), Some(7.25)]),
    ("PNB", [Some(6.60), Some(7.00), Some(7.25), Some(7.25)]),
    ("IDBI BANK", [Some(6.36), Some(7.11), Some(7.26), Some(7.31)]),
];

const ABOVE_3CR_NO_PREMATURE: &[(&str, RateSeries)] = &[
    ("HDFC BANK", [Some(6.00), Some(6.50), Some(6.85), Some(6.75)]),
    ("ICICI BANK", [Some(6.00), Some(7.00), Some(7.25), Some(7.40)]),
    ("SBI", [Some(6.25), Some(6.60), Some(6.60), Some(6.75)]),
    ("AXIS BANK", [Some(6.00), Some(6.50), Some(6.75), Some(6.85)]),
    ("Kotak Bank", [None, None, Some(6.60), Some(7.00)]),
    ("BANK OF BARODA", [Some(7.55), Some(7.55), Some(7.55), Some(7.55)]),
    ("INDUSIND BANK", [Some(6.50), Some(7.10), Some(7.35), Some(7.45)]),
    ("FEDERAL BANK", [Some(6.60), Some(7.10), Some(7.15), Some(7.25)]),
    ("PNB", [None, Some(7.05), Some(7.30), Some(7.30)]),
    ("IDBI BANK", [None, Some(7.21), Some(7.41), Some(7.51)]),
];

/// One institution's rates within a category.
#[derive(Debug, Clone, PartialEq)]
pub struct InstitutionRates {
    pub name: String,
    pub rates: RateSeries,
}

impl InstitutionRates {
    pub fn new(name: impl Into<String>, rates: RateSeries) -> Self {
        Self {
            name: name.into(),
            rates,
        }
    }

    pub fn rate(&self, tenor: TenorBucket) -> Option<f64> {
        self.rates[tenor.index()]
    }
}

/// Immutable category -> institution -> rate series mapping.
///
/// Institutions keep their insertion order; the comparison engine relies on it
/// as the tie-break for equal rates.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    categories: HashMap<Category, Vec<InstitutionRates>>,
}

impl RateTable {
    /// Build a table from explicit per-category rows.
    ///
    /// Categories missing from `rows` are treated as having no institutions.
    pub fn new(rows: impl IntoIterator<Item = (Category, Vec<InstitutionRates>)>) -> Self {
        Self {
            categories: rows.into_iter().collect(),
        }
    }

    /// The rate sheet the dashboard ships with.
    pub fn builtin() -> Self {
        let to_rows = |rows: &[(&str, RateSeries)]| {
            rows.iter()
                .map(|(name, rates)| InstitutionRates::new(*name, *rates))
                .collect::<Vec<_>>()
        };

        Self::new([
            (Category::Below3Cr, to_rows(BELOW_3CR)),
            (Category::Above3CrPremature, to_rows(ABOVE_3CR_PREMATURE)),
            (Category::Above3CrNoPremature, to_rows(ABOVE_3CR_NO_PREMATURE)),
        ])
    }

    /// Institutions of a category, in table order.
    pub fn institutions(&self, category: Category) -> &[InstitutionRates] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// A single cell. `None` if the institution is unknown or the rate is absent.
    pub fn rate(&self, category: Category, institution: &str, tenor: TenorBucket) -> Option<f64> {
        self.institutions(category)
            .iter()
            .find(|row| row.name == institution)
            .and_then(|row| row.rate(tenor))
    }

    /// The reference institution's rate at a cell, if offered.
    pub fn reference_rate(&self, category: Category, tenor: TenorBucket) -> Option<f64> {
        self.rate(category, REFERENCE_INSTITUTION, tenor)
    }

    /// Check the structural invariants the views rely on:
    ///
    /// - every category lists the same institutions in the same order
    /// - the reference institution is listed
    /// - every present rate is finite
    ///
    /// Absent cells (including the reference's) are legal.
    pub fn check_invariants(&self) -> Result<(), AppError> {
        let baseline: Vec<&str> = self
            .institutions(Category::ALL[0])
            .iter()
            .map(|row| row.name.as_str())
            .collect();

        if !baseline.contains(&REFERENCE_INSTITUTION) {
            return Err(AppError::data(format!(
                "Rate table is missing the reference institution '{REFERENCE_INSTITUTION}'."
            )));
        }

        for category in Category::ALL {
            let names: Vec<&str> = self
                .institutions(category)
                .iter()
                .map(|row| row.name.as_str())
                .collect();
            if names != baseline {
                return Err(AppError::data(format!(
                    "Rate table category '{}' does not list the same institutions as '{}'.",
                    category.id(),
                    Category::ALL[0].id(),
                )));
            }

            for row in self.institutions(category) {
                if row.rates.iter().flatten().any(|r| !r.is_finite()) {
                    return Err(AppError::data(format!(
                        "Non-finite rate for '{}' in category '{}'.",
                        row.name,
                        category.id(),
                    )));
                }
            }
        }

        Ok(())
    }
}
