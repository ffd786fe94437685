pub mod replay;
pub mod tracing;

pub use replay::{Replay, bar_len, fixture_path};
pub use tracing::{CapturedEvent, capture_events};
