use crate::stats::window::fold_totals;
use crate::stats::{AccessEvent, Totals, WindowAccountant};
use pretty_assertions::assert_eq;

// ---------------------------
// Helpers
// ---------------------------

fn event(timestamp: i64, host: &str, bytes: u64) -> AccessEvent {
    AccessEvent {
        timestamp,
        host: host.to_string(),
        bytes,
    }
}

fn totals(requests: u64, bytes: u64) -> Totals {
    Totals { requests, bytes }
}

fn assert_window_invariant(acc: &WindowAccountant) {
    let latest = acc.latest_timestamp().unwrap();
    for ev in acc.window() {
        assert!(
            latest - ev.timestamp < acc.window_seconds() as i64,
            "{ev:?} should have been evicted at {latest}"
        );
    }
    assert_eq!(acc.totals(), &fold_totals(acc.window()));
}

// ---------------------------
// Tests
// ---------------------------

#[test]
fn evicts_events_older_than_the_window() {
    // Arrange
    let mut acc = WindowAccountant::new(300);

    // Act
    acc.ingest(event(0, "a", 1000));
    acc.ingest(event(100, "b", 2000));
    acc.ingest(event(350, "a", 500));

    // Assert
    assert_eq!(acc.totals().len(), 2);
    assert_eq!(acc.totals()["a"], totals(1, 500));
    assert_eq!(acc.totals()["b"], totals(1, 2000));
    assert_eq!(acc.window().len(), 2);
    assert_window_invariant(&acc);
}

#[test]
fn event_exactly_window_old_is_evicted() {
    // Arrange
    let mut acc = WindowAccountant::new(300);
    acc.ingest(event(0, "a", 10));

    // Act
    acc.ingest(event(300, "b", 20));

    // Assert
    assert_eq!(acc.totals().get("a"), None);
    assert_eq!(acc.totals()["b"], totals(1, 20));
}

#[test]
fn evicted_hosts_stay_in_host_set() {
    // Arrange
    let mut acc = WindowAccountant::new(10);
    acc.ingest(event(0, "quiet", 10));

    // Act
    acc.ingest(event(60, "busy", 20));

    // Assert
    assert!(acc.totals().get("quiet").is_none());
    assert_eq!(
        acc.hosts().iter().cloned().collect::<Vec<_>>(),
        vec!["busy".to_string(), "quiet".to_string()]
    );
}

#[test]
fn out_of_order_timestamps_are_measured_against_newest() {
    // Arrange
    let mut acc = WindowAccountant::new(100);
    acc.ingest(event(1000, "a", 1));
    acc.ingest(event(1050, "b", 2));

    // Act
    acc.ingest(event(940, "c", 4));

    // Assert
    // now = 940: 1000 and 1050 are in the future, so their age is negative.
    assert_eq!(acc.latest_timestamp(), Some(940));
    assert_eq!(acc.totals()["a"], totals(1, 1));
    assert_eq!(acc.totals()["b"], totals(1, 2));
    assert_eq!(acc.totals()["c"], totals(1, 4));

    // Act
    acc.ingest(event(1100, "a", 8));

    // Assert
    // 1100 - 1000 = 100 and 1100 - 940 = 160 both reach the window edge.
    assert_eq!(acc.totals().get("c"), None);
    assert_eq!(acc.totals()["a"], totals(1, 8));
    assert_eq!(acc.totals()["b"], totals(1, 2));
    assert_window_invariant(&acc);
}

#[test]
fn duplicate_event_doubles_totals_but_not_hosts() {
    // Arrange
    let mut acc = WindowAccountant::new(300);
    let ev = event(42, "dup", 700);

    // Act
    acc.ingest(ev.clone());
    acc.ingest(ev);

    // Assert
    assert_eq!(acc.totals()["dup"], totals(2, 1400));
    assert_eq!(acc.hosts().len(), 1);
}

#[test]
fn totals_always_match_a_fresh_fold() {
    // Arrange
    let mut acc = WindowAccountant::new(50);
    let stream = [
        (0, "a", 5),
        (20, "b", 7),
        (19, "a", 1),
        (49, "c", 3),
        (70, "b", 9),
        (65, "a", 2),
        (130, "c", 4),
        (129, "c", 4),
    ];

    for (ts, host, bytes) in stream {
        // Act
        acc.ingest(event(ts, host, bytes));

        // Assert
        assert_window_invariant(&acc);
    }
}

#[test]
fn byte_totals_saturate_instead_of_wrapping() {
    // Arrange
    let mut acc = WindowAccountant::new(300);

    // Act
    acc.ingest(event(0, "a", u64::MAX));
    acc.ingest(event(1, "a", 1));

    // Assert
    assert_eq!(acc.totals()["a"], totals(2, u64::MAX));
    assert_window_invariant(&acc);
}
