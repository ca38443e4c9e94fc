use fd_rates::app::pipeline::DashboardView;
use fd_rates::app::render_full_report;
use fd_rates::data::RateTable;
use fd_rates::domain::{Category, REFERENCE_INSTITUTION, Selection, TenorBucket, Trend};

fn view(category: Category, tenor: TenorBucket) -> DashboardView {
    DashboardView::build(&RateTable::builtin(), Selection { category, tenor }, 3)
}

fn difference(view: &DashboardView, name: &str) -> Option<f64> {
    view.comparison
        .rows
        .iter()
        .find(|r| r.institution == name)
        .and_then(|r| r.difference)
}

#[test]
fn below_3cr_under_one_year_against_reference() {
    let v = view(Category::Below3Cr, TenorBucket::Days271To1Year);

    assert_eq!(v.comparison.reference_rate, Some(6.25));
    assert_eq!(difference(&v, "SBI"), Some(0.25));
    assert_eq!(difference(&v, "HDFC BANK"), Some(-0.25));
    assert_eq!(difference(&v, "Kotak Bank"), Some(-0.25));

    let top: Vec<&str> = v.insights.iter().map(|i| i.institution.as_str()).collect();
    let first_three: Vec<&str> = v.comparison.rows[..3]
        .iter()
        .map(|r| r.institution.as_str())
        .collect();
    assert_eq!(top, first_three);
    assert!(v.insights.iter().all(|i| i.trend == Some(Trend::Up)));
}

#[test]
fn no_premature_short_tenor_excludes_absent_institutions() {
    let v = view(Category::Above3CrNoPremature, TenorBucket::Days61To90);
    let names: Vec<&str> = v
        .comparison
        .rows
        .iter()
        .map(|r| r.institution.as_str())
        .collect();

    for absent in ["Kotak Bank", "PNB", REFERENCE_INSTITUTION] {
        assert!(!names.contains(&absent), "{absent} has no rate at this cell");
    }
    assert_eq!(names.len(), 7);
    assert_eq!(names[0], "BANK OF BARODA");
    assert!(v.diagnostic.is_some());
}

#[test]
fn no_premature_second_tenor_uses_reference_rate() {
    let v = view(Category::Above3CrNoPremature, TenorBucket::Days91To184);

    assert_eq!(v.comparison.reference_rate, Some(7.21));
    assert_eq!(difference(&v, REFERENCE_INSTITUTION), Some(0.0));
    assert_eq!(difference(&v, "INDUSIND BANK"), Some(-0.11));
    assert_eq!(difference(&v, "ICICI BANK"), Some(-0.21));
    assert_eq!(v.insights[0].institution, "BANK OF BARODA");
    assert_eq!(v.insights[1].institution, REFERENCE_INSTITUTION);
    assert_eq!(v.insights[1].trend, Some(Trend::Flat));
}

#[test]
fn premature_category_reference_leads_long_tenors() {
    let v = view(Category::Above3CrPremature, TenorBucket::Days271To1Year);
    assert_eq!(v.comparison.rows[0].institution, REFERENCE_INSTITUTION);
    assert_eq!(difference(&v, "FEDERAL BANK"), Some(-0.06));
    assert_eq!(v.insights[1].trend, Some(Trend::Down));
}

#[test]
fn report_renders_unavailable_deltas() {
    let v = view(Category::Above3CrNoPremature, TenorBucket::Days61To90);
    let out = render_full_report(&v, true, 60);
    assert!(out.contains("Reference: IDBI BANK @ not offered"));
    assert!(out.contains("(n/a)"));
    assert!(out.contains("BANK OF BARODA"));
}
