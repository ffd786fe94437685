use serde::Deserialize;

pub const DEFAULT_VHOST_FIELD: usize = 0;
pub const DEFAULT_TIME_FIELD: usize = 4;
pub const DEFAULT_SIZE_FIELD: usize = 7;
pub const DEFAULT_WINDOW_SECONDS: u64 = 300;

/// Which per-host total drives the ordering of the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMetric {
    #[default]
    Bytes,
    Requests,
}

/// Whether hosts with nothing left in the window keep their (zero) rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleHosts {
    #[default]
    Show,
    Hide,
}

/// Zero-based positions of the interesting fields in a tokenized log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub vhost: usize,
    pub time: usize,
    pub size: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            vhost: DEFAULT_VHOST_FIELD,
            time: DEFAULT_TIME_FIELD,
            size: DEFAULT_SIZE_FIELD,
        }
    }
}

/// Fully resolved and validated settings for one monitoring session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    pub fields: FieldLayout,
    pub window_seconds: u64,
    /// Host label width; `0` fits the widest host seen so far.
    pub max_host_len: usize,
    pub sort: SortMetric,
    pub idle_hosts: IdleHosts,
    pub show_errors: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            fields: FieldLayout::default(),
            window_seconds: DEFAULT_WINDOW_SECONDS,
            max_host_len: 0,
            sort: SortMetric::default(),
            idle_hosts: IdleHosts::default(),
            show_errors: false,
        }
    }
}

impl MonitorConfig {
    pub fn fixed_label_width(&self) -> Option<usize> {
        (self.max_host_len > 0).then_some(self.max_host_len)
    }
}

/// One partial source of settings: the TOML config file or the command line.
/// Unset keys fall through to the next layer, then to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub vhost_field: Option<usize>,
    pub time_field: Option<usize>,
    pub size_field: Option<usize>,
    pub window_size: Option<u64>,
    pub max_host_len: Option<usize>,
    pub sort: Option<SortMetric>,
    pub idle_hosts: Option<IdleHosts>,
    pub show_errors: Option<bool>,
}
