//! The interactive session loop.
//!
//! One iteration collects filters, loads the filtered trips, prints the four
//! timed report sections, offers the raw-data pager for the whole city and
//! finally asks whether to start over.

use std::io::{BufRead, Write};
use std::time::Instant;

use bikeshare_core::models::FilterSelection;
use bikeshare_core::sources::DataSources;
use bikeshare_core::{BikeshareError, Result};
use bikeshare_data::analysis;
use bikeshare_data::loader::load_data;
use bikeshare_data::table::TripTable;
use bikeshare_ui::report::{self, Section};
use tracing::info;

use crate::console::{answer_is, Console};
use crate::filter_collector::collect_filters;
use crate::raw_viewer::RawDataViewer;

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// Only an exact "yes" (any case) starts another iteration.
pub fn should_restart(answer: &str) -> bool {
    answer_is(answer, "yes")
}

pub struct Session<R, W> {
    sources: DataSources,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(sources: DataSources, console: Console<R, W>) -> Self {
        Self { sources, console }
    }

    /// Run iterations until the user declines to restart or the input closes.
    ///
    /// A closed input ends the session normally; load failures are returned.
    pub fn run(&mut self) -> Result<()> {
        let mut state = SessionState::Running;
        let mut iterations = 0usize;
        while state == SessionState::Running {
            iterations += 1;
            state = match self.run_iteration() {
                Ok(next) => next,
                Err(BikeshareError::InputClosed) => {
                    info!("Input closed during iteration {}", iterations);
                    SessionState::Stopped
                }
                Err(e) => return Err(e),
            };
        }
        info!("Session finished after {} iteration(s)", iterations);
        Ok(())
    }

    /// One pass through filters, reports, raw data and the restart prompt.
    pub fn run_iteration(&mut self) -> Result<SessionState> {
        let selection = collect_filters(&mut self.console)?;

        let filtered = load_data(&self.sources, &selection)?;
        self.print_reports(&filtered)?;

        // The pager always covers the whole city, not the filtered subset.
        let city_rows = load_data(&self.sources, &FilterSelection::city_only(selection.city))?;
        RawDataViewer::new().run(&mut self.console, &city_rows)?;

        let answer = self.console.ask(RESTART_PROMPT)?;
        Ok(if should_restart(&answer) {
            SessionState::Running
        } else {
            SessionState::Stopped
        })
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    fn print_reports(&mut self, table: &TripTable) -> Result<()> {
        self.print_timed(table, |t| {
            report::time_section(analysis::time_stats(t).as_ref())
        })?;
        self.print_timed(table, |t| {
            report::station_section(analysis::station_stats(t).as_ref())
        })?;
        self.print_timed(table, |t| {
            report::duration_section(analysis::trip_duration_stats(t).as_ref())
        })?;
        self.print_timed(table, |t| {
            report::user_section(&analysis::user_stats(t), t.city())
        })
    }

    fn print_timed(
        &mut self,
        table: &TripTable,
        build: impl FnOnce(&TripTable) -> Section,
    ) -> Result<()> {
        let started = Instant::now();
        let section = build(table);
        let elapsed = started.elapsed();
        self.console
            .write(&report::render_section(&section, elapsed))
    }
}
