//! Live monitoring session.
//!
//! A reader thread only moves raw lines off the input; every piece of state
//! (window, totals, layout, normalizers) lives on the event-loop thread, which
//! alternates between terminal events and input lines:
//!
//! input reader
//! InputEvent channel
//! Monitor::on_line / Monitor::on_resize
//! Monitor::render
//! Surface

mod constants;
mod input;
mod run;
mod state;
#[cfg(test)]
mod tests;

pub use input::{InputEvent, InputSource, read_line_retrying, spawn_reader};
pub use run::{RunSummary, SessionEnd, run};
pub use state::Monitor;
