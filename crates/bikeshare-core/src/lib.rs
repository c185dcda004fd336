//! Shared building blocks for the bikeshare explorer.
//!
//! Domain types and input validation, the city → file mapping, timestamp
//! parsing, report formatting, CLI settings and the common error type.

pub mod data_processors;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod sources;

pub use error::{BikeshareError, Result};
