use integration_tests::harness::{Replay, capture_events, fixture_path};
use pretty_assertions::assert_eq;
use tracing::Level;
use vhoststats_core::conf::MonitorConfig;

#[test]
fn malformed_lines_are_logged_and_skipped() {
    // Arrange
    let mut replay = Replay::new(MonitorConfig::default(), 80, 24);

    // Act
    let (_, events) = capture_events(|| replay.feed_file(&fixture_path("vhosts.log")));

    // Assert
    let skipped: Vec<_> = events
        .iter()
        .filter(|e| e.field("message") == Some("skipping malformed line"))
        .collect();

    assert_eq!(skipped.len(), 2);
    assert!(skipped.iter().all(|e| e.level == Level::DEBUG));
    assert!(skipped.iter().all(|e| e.target.starts_with("vhoststats_core")));
    assert_eq!(
        skipped[0].field("error"),
        Some("invalid size field '-'")
    );
    assert_eq!(
        skipped[1].field("error"),
        Some("line has 4 fields, field 4 (time) is missing")
    );
    assert_eq!(skipped[1].field("rejected"), Some("2"));
}

#[test]
fn status_line_shows_the_latest_rejection() {
    // Arrange
    let config = MonitorConfig {
        show_errors: true,
        ..Default::default()
    };
    let mut replay = Replay::new(config, 80, 24);

    // Act
    replay.feed_file(&fixture_path("vhosts.log"));

    // Assert
    assert_eq!(
        replay.line(23),
        "Rejected: 2 | line has 4 fields, field 4 (time) is missing"
    );
}
