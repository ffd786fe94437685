use crate::display::{BarScales, Frame, Geometry, MemorySurface, Paint, compose, format_clock};
use crate::stats::{HostTotals, Totals};
use pretty_assertions::assert_eq;

// ---------------------------
// Helpers
// ---------------------------

const TS: i64 = 971_186_136; // 2000/10/10 13:55:36

fn totals() -> HostTotals {
    let mut totals = HostTotals::new();
    totals.insert(
        "alpha".into(),
        Totals {
            requests: 4,
            bytes: 1000,
        },
    );
    totals.insert(
        "b".into(),
        Totals {
            requests: 2,
            bytes: 500,
        },
    );
    totals
}

fn bar(n: usize) -> String {
    "#".repeat(n)
}

// ---------------------------
// Tests
// ---------------------------

#[test]
fn draws_header_and_two_rows_per_host() {
    // Arrange
    let g = Geometry::compute(60, 12, 6);
    let totals = totals();
    let ranked = ["alpha", "b"];
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(60, 12);
    let frame = Frame {
        geometry: &g,
        ranked: &ranked,
        totals: &totals,
        hosts_seen: 3,
        requests: 6,
        timestamp: Some(TS),
        status: None,
    };

    // Act
    compose(&mut surface, &frame, &mut scales).unwrap();

    // Assert
    assert_eq!(
        surface.line(0),
        "[2000/10/10 13:55:36] Hosts: 3 [Displayed: 2] Requests: 6"
    );
    // "b" ranks second, so it sits above "alpha".
    assert_eq!(
        surface.line(4),
        format!("b      [R:2         ]  {}", bar(17))
    );
    assert_eq!(
        surface.line(5),
        format!("       [B:500       ]  {}", bar(17))
    );
    assert_eq!(
        surface.line(6),
        format!("alpha  [R:4         ]  {}", bar(35))
    );
    assert_eq!(
        surface.line(7),
        format!("       [B:1000      ]  {}", bar(35))
    );
    assert_eq!(surface.line(8), "");
    assert_eq!(surface.paint_at(6, 0), Some(Paint::Label));
    assert_eq!(surface.paint_at(6, 23), Some(Paint::RequestBar));
    assert_eq!(surface.paint_at(7, 23), Some(Paint::ByteBar));
}

#[test]
fn peaks_are_raised_before_any_bar_is_sized() {
    // Arrange
    // Ranked by bytes, but "b" has more requests than "alpha".
    let g = Geometry::compute(60, 12, 6);
    let mut totals = totals();
    totals.insert(
        "b".into(),
        Totals {
            requests: 8,
            bytes: 500,
        },
    );
    let ranked = ["alpha", "b"];
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(60, 12);
    let frame = Frame {
        geometry: &g,
        ranked: &ranked,
        totals: &totals,
        hosts_seen: 2,
        requests: 12,
        timestamp: Some(TS),
        status: None,
    };

    // Act
    compose(&mut surface, &frame, &mut scales).unwrap();

    // Assert
    // 4 / 8 * 35 = 17.5
    assert!(surface.line(6).ends_with(&format!("  {}", bar(17))));
    assert!(surface.line(4).ends_with(&format!("  {}", bar(35))));
    assert_eq!(scales.requests.observed_max(), 8.0);
}

#[test]
fn long_host_names_are_truncated_to_label_width() {
    // Arrange
    let g = Geometry::compute(60, 12, 4);
    let mut totals = HostTotals::new();
    totals.insert(
        "www.example.com".into(),
        Totals {
            requests: 1,
            bytes: 1,
        },
    );
    let ranked = ["www.example.com"];
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(60, 12);
    let frame = Frame {
        geometry: &g,
        ranked: &ranked,
        totals: &totals,
        hosts_seen: 1,
        requests: 1,
        timestamp: Some(TS),
        status: None,
    };

    // Act
    compose(&mut surface, &frame, &mut scales).unwrap();

    // Assert
    assert!(surface.line(5).starts_with("www. [R:1"));
}

#[test]
fn idle_host_draws_zero_counters_without_bars() {
    // Arrange
    let g = Geometry::compute(60, 12, 6);
    let totals = totals();
    let ranked = ["alpha", "gone"];
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(60, 12);
    let frame = Frame {
        geometry: &g,
        ranked: &ranked,
        totals: &totals,
        hosts_seen: 2,
        requests: 9,
        timestamp: Some(TS),
        status: None,
    };

    // Act
    compose(&mut surface, &frame, &mut scales).unwrap();

    // Assert
    assert_eq!(surface.line(4), "gone   [R:0         ]");
    assert_eq!(surface.line(5), "       [B:0         ]");
}

#[test]
fn oversized_layout_is_clipped_not_fatal() {
    // Arrange
    // Layout computed for a bigger terminal than the one we draw on,
    // as happens when a resize lands between layout and draw.
    let g = Geometry::compute(120, 40, 6);
    let totals = totals();
    let ranked = ["alpha", "b"];
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(30, 8);
    let frame = Frame {
        geometry: &g,
        ranked: &ranked,
        totals: &totals,
        hosts_seen: 2,
        requests: 6,
        timestamp: Some(TS),
        status: Some("rejected: 1"),
    };

    // Act
    let result = compose(&mut surface, &frame, &mut scales);

    // Assert
    assert!(result.is_ok());
    assert_eq!(surface.flushes(), 1);
    assert_eq!(surface.line(0), "[2000/10/10 13:55:36] Hosts: 2");
}

#[test]
fn status_line_uses_bottom_row() {
    // Arrange
    let g = Geometry::compute(60, 12, 6);
    let totals = HostTotals::new();
    let mut scales = BarScales::new(g.bar_width);
    let mut surface = MemorySurface::new(60, 12);
    let frame = Frame {
        geometry: &g,
        ranked: &[],
        totals: &totals,
        hosts_seen: 0,
        requests: 0,
        timestamp: None,
        status: Some("Rejected: 1 | invalid size field '-'"),
    };

    // Act
    compose(&mut surface, &frame, &mut scales).unwrap();

    // Assert
    assert_eq!(
        surface.line(0),
        "[----/--/-- --:--:--] Hosts: 0 [Displayed: 0] Requests: 0"
    );
    assert_eq!(surface.line(11), "Rejected: 1 | invalid size field '-'");
}

#[test]
fn clock_formats_log_time() {
    // Act
    let clock = format_clock(Some(TS));

    // Assert
    assert_eq!(clock, "2000/10/10 13:55:36");
}
