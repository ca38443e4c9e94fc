//! Rate data.

pub mod table;

pub use table::{InstitutionRates, RateSeries, RateTable};
