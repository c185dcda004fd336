mod bootstrap;

use std::io;

use anyhow::{Context, Result};
use bikeshare_core::settings::Settings;
use bikeshare_core::sources::DataSources;
use bikeshare_runtime::{Console, Session};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let home = dirs::home_dir();
    let data_dir =
        bootstrap::discover_data_dir(settings.data_dir.as_deref(), &cwd, home.as_deref());
    tracing::info!("Reading city data from {}", data_dir.display());

    let sources = DataSources::new(&data_dir);
    if !sources.any_exists() {
        tracing::warn!("No city data files found in {}", data_dir.display());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Session::new(sources, console).run()?;

    tracing::info!("Bikeshare explorer finished");
    Ok(())
}
