use crate::display::geometry::{COUNTER_DIGITS, Geometry};
use crate::display::surface::{Paint, Surface};
use crate::error::TerminalError;
use crate::stats::{HostTotals, Normalizer, Totals};
use chrono::DateTime;
use tracing::trace;

const BAR_GLYPH: &str = "#";

/// One normalizer per bar dimension, sharing the available bar width.
#[derive(Debug, Clone)]
pub struct BarScales {
    pub requests: Normalizer,
    pub bytes: Normalizer,
}

impl BarScales {
    pub fn new(bar_width: u16) -> Self {
        Self {
            requests: Normalizer::new(bar_width),
            bytes: Normalizer::new(bar_width),
        }
    }

    pub fn retarget(&mut self, bar_width: u16) {
        self.requests.set_target_max(bar_width);
        self.bytes.set_target_max(bar_width);
    }
}

/// Everything one redraw needs.
pub struct Frame<'a> {
    pub geometry: &'a Geometry,
    /// Busiest first.
    pub ranked: &'a [&'a str],
    pub totals: &'a HostTotals,
    pub hosts_seen: usize,
    pub requests: u64,
    /// Log time of the newest event.
    pub timestamp: Option<i64>,
    /// Shown on the bottom row when present.
    pub status: Option<&'a str>,
}

/// `YYYY/MM/DD HH:MM:SS` for a log timestamp.
pub fn format_clock(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .map(|t| t.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "----/--/-- --:--:--".to_string())
}

/// Redraw the whole screen for `frame`.
///
/// Hosts are stacked two rows each around the center row, busiest at the
/// bottom of the block. Draws that fall off screen are skipped; only device
/// I/O failures are returned.
pub fn compose<S: Surface>(
    surface: &mut S,
    frame: &Frame<'_>,
    scales: &mut BarScales,
) -> Result<(), TerminalError> {
    let g = frame.geometry;
    let shown = frame.ranked.len();

    let rows: Vec<Totals> = frame
        .ranked
        .iter()
        .map(|host| frame.totals.get(*host).copied().unwrap_or_default())
        .collect();

    // Every peak is raised before any bar is sized, not per bar as it is
    // drawn: all bars in a frame share one maximum, so a host drawn later
    // never leaves an earlier bar on a stale scale. Keep this order.
    for t in &rows {
        scales.requests.observe(t.requests);
        scales.bytes.observe(t.bytes);
    }

    surface.clear()?;

    let header = format!(
        "[{}] Hosts: {} [Displayed: {}] Requests: {}",
        format_clock(frame.timestamp),
        frame.hosts_seen,
        shown,
        frame.requests
    );
    draw(surface, 0, 0, &header, Paint::Plain)?;

    for (rank, (host, t)) in frame.ranked.iter().zip(&rows).enumerate() {
        let Some(bytes_row) = g.bytes_row(rank, shown) else {
            continue;
        };
        let requests_row = bytes_row.saturating_sub(1);

        if g.label_width > 0 {
            let label = fit_label(host, g.label_width);
            draw(surface, requests_row, 0, &label, Paint::Label)?;
        }

        let width = scales.requests.scale(t.requests);
        draw(
            surface,
            requests_row,
            g.counter_column,
            &counter('R', t.requests),
            Paint::Plain,
        )?;
        draw_bar(surface, requests_row, g.bar_column, width, Paint::RequestBar)?;

        let width = scales.bytes.scale(t.bytes);
        draw(
            surface,
            bytes_row,
            g.counter_column,
            &counter('B', t.bytes),
            Paint::Plain,
        )?;
        draw_bar(surface, bytes_row, g.bar_column, width, Paint::ByteBar)?;
    }

    if let Some(status) = frame.status {
        draw(surface, g.rows.saturating_sub(1), 0, status, Paint::Status)?;
    }

    surface.flush()
}

fn fit_label(host: &str, width: usize) -> String {
    let truncated: String = host.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn counter(tag: char, value: u64) -> String {
    format!("[{tag}:{value:<COUNTER_DIGITS$}]")
}

fn draw_bar<S: Surface>(
    surface: &mut S,
    row: u16,
    col: u16,
    width: u16,
    paint: Paint,
) -> Result<(), TerminalError> {
    if width == 0 {
        return Ok(());
    }
    draw(surface, row, col, &BAR_GLYPH.repeat(usize::from(width)), paint)
}

/// Skip a single draw that misses the screen; fail only on device errors.
fn draw<S: Surface>(
    surface: &mut S,
    row: u16,
    col: u16,
    text: &str,
    paint: Paint,
) -> Result<(), TerminalError> {
    match surface.put(row, col, text, paint) {
        Err(TerminalError::OutOfBounds { .. }) => {
            trace!(row, col, "draw clipped");
            Ok(())
        }
        other => other,
    }
}
