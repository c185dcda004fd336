//! Console presentation layer for the bikeshare explorer.
//!
//! Turns analysis results into the plain-text report sections and renders
//! pages of raw trip rows as an aligned table.

pub mod report;
pub mod table_view;

pub use bikeshare_core as core;
