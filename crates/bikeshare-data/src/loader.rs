//! Data loader: source lookup, CSV read and month/day filtering in one call.

use bikeshare_core::models::FilterSelection;
use bikeshare_core::sources::DataSources;
use bikeshare_core::Result;
use tracing::info;

use crate::reader::read_trips;
use crate::table::TripTable;

/// Load the trips for `selection.city` and apply its month and day filters.
///
/// The source file is read fresh on every call and never modified.
pub fn load_data(sources: &DataSources, selection: &FilterSelection) -> Result<TripTable> {
    let path = sources.path_for(selection.city);
    let table = read_trips(path, selection.city)?;
    let loaded = table.len();

    let filtered = table.filter(selection.month, selection.day);

    info!(
        "Loaded {} trips from {}; {} match {}",
        loaded,
        path.display(),
        filtered.len(),
        selection,
    );

    Ok(filtered)
}
