//! Data layer for the bikeshare explorer.
//!
//! Reads city CSV exports into trip tables, applies month/day filters and
//! computes the descriptive statistics shown in each report section.

pub mod aggregator;
pub mod analysis;
pub mod loader;
pub mod reader;
pub mod table;

pub use bikeshare_core as core;
