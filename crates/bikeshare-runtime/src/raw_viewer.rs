//! Paged display of raw trip rows for the selected city.

use std::io::{BufRead, Write};

use bikeshare_core::Result;
use bikeshare_data::table::{TripRow, TripTable};
use bikeshare_ui::table_view::render_rows;
use tracing::debug;

use crate::console::{answer_is, Console};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

const RAW_PROMPT: &str =
    "\nWould you like to see raw data for the selected city? Enter yes or no.\n";

/// Anything other than "no" asks for another page.
pub fn wants_more(answer: &str) -> bool {
    !answer_is(answer, "no")
}

/// Cursor over a trip table that hands out consecutive pages.
#[derive(Debug, Clone)]
pub struct RawDataViewer {
    offset: usize,
    page_size: usize,
}

impl Default for RawDataViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl RawDataViewer {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size,
        }
    }

    /// Position of the first row of the next page.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the next page and advance. Past the end this yields empty
    /// pages rather than failing.
    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> &'a [TripRow] {
        let page = table.page(self.offset, self.page_size);
        self.offset = self.offset.saturating_add(self.page_size);
        page
    }

    /// Ask before every page until the user answers "no".
    ///
    /// Returns how many pages were requested.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        table: &TripTable,
    ) -> Result<usize> {
        let mut pages = 0;
        loop {
            let answer = console.ask(RAW_PROMPT)?;
            if !wants_more(&answer) {
                break;
            }
            let page = self.next_page(table);
            console.write(&render_rows(page, table.columns()))?;
            pages += 1;
        }
        debug!(
            "Raw viewer for {} closed after {} page(s), offset {}",
            table.city(),
            pages,
            self.offset
        );
        Ok(pages)
    }
}
