//! Terminal rendering: layout geometry, the drawing surface abstraction and the
//! compositor that turns aggregated totals into a bar chart.

mod compositor;
mod geometry;
mod surface;
mod terminal;
#[cfg(test)]
mod tests;

pub use compositor::{BarScales, Frame, compose, format_clock};
pub use geometry::{COUNTER_DIGITS, Geometry, GeometryMonitor, HEADER_ROWS};
pub use surface::{MemorySurface, Paint, Surface};
pub use terminal::{TerminalGuard, TerminalSurface};
