use crate::conf::MonitorConfig;
use crate::display::{BarScales, Frame, Geometry, GeometryMonitor, Surface, compose};
use crate::error::{MalformedLineError, TerminalError};
use crate::stats::{WindowAccountant, load_event, rank};
use tracing::debug;

/// Owns all aggregation and layout state for one session.
pub struct Monitor {
    config: MonitorConfig,
    accountant: WindowAccountant,
    layout: GeometryMonitor,
    scales: BarScales,
    requests: u64,
    rejected: u64,
    last_error: Option<MalformedLineError>,
}

impl Monitor {
    pub fn new(config: MonitorConfig, cols: u16, rows: u16) -> Self {
        let layout = GeometryMonitor::new(cols, rows, config.fixed_label_width());
        let scales = BarScales::new(layout.geometry().bar_width);

        Self {
            accountant: WindowAccountant::new(config.window_seconds),
            config,
            layout,
            scales,
            requests: 0,
            rejected: 0,
            last_error: None,
        }
    }

    /// Feed one raw input line. Malformed lines are counted and remembered,
    /// never fatal.
    pub fn on_line(&mut self, line: &str) -> Result<(), MalformedLineError> {
        let event = match load_event(line, &self.config.fields) {
            Ok(event) => event,
            Err(e) => {
                self.rejected += 1;
                debug!(error = %e, rejected = self.rejected, "skipping malformed line");
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };

        if self.layout.observe_label(event.host.chars().count()) {
            self.retarget();
        }

        self.requests += 1;
        self.accountant.ingest(event);
        Ok(())
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        if self.layout.resize(cols, rows) {
            debug!(cols, rows, "terminal resized");
            self.retarget();
        }
    }

    /// Whether a layout change is waiting to be drawn.
    pub fn repaint_pending(&self) -> bool {
        self.layout.repaint_pending()
    }

    pub fn render<S: Surface>(&mut self, surface: &mut S) -> Result<(), TerminalError> {
        self.layout.take_repaint();

        let geometry = *self.layout.geometry();
        let ranked = rank(
            self.accountant.hosts(),
            self.accountant.totals(),
            self.config.sort,
            geometry.max_hosts,
            self.config.idle_hosts,
        );
        let status = self.config.show_errors.then(|| self.status_line());

        let frame = Frame {
            geometry: &geometry,
            ranked: &ranked,
            totals: self.accountant.totals(),
            hosts_seen: self.accountant.hosts().len(),
            requests: self.requests,
            timestamp: self.accountant.latest_timestamp(),
            status: status.as_deref(),
        };

        compose(surface, &frame, &mut self.scales)
    }

    pub fn accountant(&self) -> &WindowAccountant {
        &self.accountant
    }

    pub fn geometry(&self) -> &Geometry {
        self.layout.geometry()
    }

    pub fn scales(&self) -> &BarScales {
        &self.scales
    }

    /// Accepted lines since start.
    pub fn requests(&self) -> u64 {
        self.requests
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn last_error(&self) -> Option<&MalformedLineError> {
        self.last_error.as_ref()
    }

    fn retarget(&mut self) {
        self.scales.retarget(self.layout.geometry().bar_width);
    }

    fn status_line(&self) -> String {
        match &self.last_error {
            Some(e) => format!("Rejected: {} | {e}", self.rejected),
            None => format!("Rejected: {}", self.rejected),
        }
    }
}
