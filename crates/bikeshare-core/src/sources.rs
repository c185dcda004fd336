//! City → data file mapping.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::models::City;

/// Read-only lookup from each [`City`] to its CSV source.
///
/// Built once at startup and passed to the loader; there is no global
/// mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    files: BTreeMap<City, PathBuf>,
}

impl DataSources {
    /// Map every city to its default file name inside `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        let files = City::ALL
            .into_iter()
            .map(|city| (city, data_dir.join(city.file_name())))
            .collect();
        Self { files }
    }

    /// Replace the source for a single city.
    pub fn with_source(mut self, city: City, path: impl Into<PathBuf>) -> Self {
        self.files.insert(city, path.into());
        self
    }

    /// Path of the CSV file holding `city`'s trips.
    pub fn path_for(&self, city: City) -> &Path {
        // `new` populates every city and `with_source` only replaces entries.
        &self.files[&city]
    }

    /// Whether any city's file exists on disk.
    pub fn any_exists(&self) -> bool {
        self.files.values().any(|p| p.is_file())
    }
}
