use std::path::{Path, PathBuf};
use vhoststats_core::conf::MonitorConfig;
use vhoststats_core::display::MemorySurface;
use vhoststats_core::monitor::{InputSource, Monitor, read_line_retrying};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

/// Drives a [`Monitor`] the way the live loop does, minus the terminal.
pub struct Replay {
    pub monitor: Monitor,
    pub surface: MemorySurface,
}

impl Replay {
    pub fn new(config: MonitorConfig, cols: u16, rows: u16) -> Self {
        Self {
            monitor: Monitor::new(config, cols, rows),
            surface: MemorySurface::new(cols, rows),
        }
    }

    /// Feed every line of `path`, redrawing after each accepted one.
    /// Returns the number of lines read.
    pub fn feed_file(&mut self, path: &Path) -> usize {
        let mut reader = InputSource::File(path.to_path_buf())
            .open()
            .expect("fixture should open");

        let mut buf = Vec::new();
        let mut lines = 0;
        loop {
            buf.clear();
            let n = read_line_retrying(&mut *reader, &mut buf).expect("fixture should read");
            if n == 0 {
                break lines;
            }
            lines += 1;
            self.feed_line(&String::from_utf8_lossy(&buf));
        }
    }

    pub fn feed_line(&mut self, line: &str) {
        if self.monitor.on_line(line).is_ok() {
            self.render();
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.surface.set_size(cols, rows);
        self.monitor.on_resize(cols, rows);
        if self.monitor.repaint_pending() {
            self.render();
        }
    }

    pub fn render(&mut self) {
        self.monitor
            .render(&mut self.surface)
            .expect("memory surface never fails");
    }

    pub fn line(&self, row: u16) -> &str {
        self.surface.line(row)
    }
}

pub fn bar_len(line: &str) -> usize {
    line.chars().filter(|c| *c == '#').count()
}
