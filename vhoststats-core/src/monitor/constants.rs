use std::time::Duration;

/// How long the loop waits for a line before checking terminal events again.
pub const INPUT_POLL: Duration = Duration::from_millis(50);

/// Lines the reader may run ahead of the renderer.
pub const LINE_QUEUE: usize = 1024;
