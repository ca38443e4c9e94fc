//! Input/output helpers.
//!
//! - ranked rows as CSV (`export`)
//! - full view snapshots as JSON (`snapshot`)

pub mod export;
pub mod snapshot;

pub use export::*;
pub use snapshot::*;
