use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bikeshare_core::sources::DataSources;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a level name such as `WARNING` to a tracing filter directive.
///
/// Unknown names are passed through so `EnvFilter` syntax such as
/// `bikeshare_data=debug` also works.
fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr, or are appended to `log_file` (without ANSI colours)
/// when one is given. Falls back to `"warn"` if the level is not a valid
/// filter.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (stderr_layer, file_layer) = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (None, Some(layer))
        }
        None => {
            let layer = fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr);
            (Some(layer), None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

// ── Data-dir discovery ─────────────────────────────────────────────────────────

/// Pick the directory the city CSVs are read from.
///
/// An explicit `--data-dir` always wins. Otherwise the first of these that
/// holds at least one city file is used:
/// 1. the working directory
/// 2. `./data`
/// 3. `~/.bikeshare/data`
///
/// Falls back to `.` when none match, so the first load reports the missing
/// file.
pub fn discover_data_dir(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let mut candidates = vec![cwd.to_path_buf(), cwd.join("data")];
    if let Some(home) = home {
        candidates.push(home.join(".bikeshare").join("data"));
    }

    candidates
        .into_iter()
        .find(|dir| DataSources::new(dir).any_exists())
        .unwrap_or_else(|| PathBuf::from("."))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
