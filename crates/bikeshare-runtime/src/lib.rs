//! Interactive front end: console prompts, filter collection, the raw-data
//! pager and the session loop tying them to the data and report layers.

pub mod console;
pub mod filter_collector;
pub mod raw_viewer;
pub mod session;

pub use console::Console;
pub use session::{Session, SessionState};
