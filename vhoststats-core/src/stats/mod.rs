//! Streaming aggregation engine.
//!
//! Every accepted log line flows through the same stages:
//!
//! raw line
//! tokenize
//! load_event
//! WindowAccountant
//! rank
//!
//! The accountant keys everything on log time rather than wall-clock time, so
//! replaying an old log file reproduces the traffic pattern it recorded.

mod normalizer;
mod parse;
mod rank;
#[cfg(test)]
mod tests;
mod tokenize;
mod types;
mod window;

pub use normalizer::Normalizer;
pub use parse::{TIMESTAMP_FORMAT, load_event, parse_timestamp};
pub use rank::rank;
pub use tokenize::tokenize;
pub use types::{AccessEvent, HostTotals, Totals};
pub use window::WindowAccountant;
