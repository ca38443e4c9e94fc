//! Export ranked comparison rows to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::pipeline::DashboardView;
use crate::error::AppError;

pub const CSV_HEADER: &str = "category,tenor,rank,institution,rate,difference,is_reference";

/// Write the ranked rows of `view` to a CSV file.
pub fn write_results_csv(path: &Path, view: &DashboardView) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    let mut out = BufWriter::new(file);
    write_rows_csv(&mut out, view)?;
    out.flush()
        .map_err(|e| AppError::usage(format!("Failed to flush export CSV: {e}")))?;

    log::info!("wrote {} row(s) to {}", view.comparison.rows.len(), path.display());
    Ok(())
}

/// Write the CSV body to any writer. An absent delta is an empty field.
pub fn write_rows_csv<W: Write>(out: &mut W, view: &DashboardView) -> Result<(), AppError> {
    writeln!(out, "{CSV_HEADER}")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    let category = view.selection.category.id();
    let tenor = view.selection.tenor.display_name();
    for (i, row) in view.comparison.rows.iter().enumerate() {
        writeln!(
            out,
            "{category},{tenor},{},{},{:.2},{},{}",
            i + 1,
            csv_field(&row.institution),
            row.rate,
            row.difference.map(|d| format!("{d:.2}")).unwrap_or_default(),
            row.is_reference(),
        )
        .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RateTable;
    use crate::domain::{Category, Selection, TenorBucket};

    fn csv_for(category: Category, tenor: TenorBucket) -> String {
        let view = DashboardView::build(&RateTable::builtin(), Selection { category, tenor }, 3);
        let mut buf = Vec::new();
        write_rows_csv(&mut buf, &view).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_ranked_rows() {
        let csv = csv_for(Category::Below3Cr, TenorBucket::Days271To1Year);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "below3Cr,271 days to <1 year,1,SBI,6.50,0.25,false");
        assert!(lines.contains(&"below3Cr,271 days to <1 year,6,IDBI BANK,6.25,0.00,true"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn absent_delta_is_empty_field() {
        let csv = csv_for(Category::Above3CrNoPremature, TenorBucket::Days61To90);
        let first = csv.lines().nth(1).unwrap();
        assert_eq!(first, "above3CrNoPremature,61 to 90 days,1,BANK OF BARODA,7.55,,false");
    }

    #[test]
    fn quotes_fields_with_commas() {
        assert_eq!(csv_field("A, B"), "\"A, B\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn writes_to_file() {
        let view = DashboardView::build(&RateTable::builtin(), Selection::default(), 3);
        let path = std::env::temp_dir().join(format!("fdr_export_{}.csv", std::process::id()));
        write_results_csv(&path, &view).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(text.starts_with(CSV_HEADER));
    }
}
