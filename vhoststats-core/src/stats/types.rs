use crate::conf::SortMetric;
use std::collections::HashMap;

/// One accepted access-log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEvent {
    /// Seconds since the epoch, taken from the log's own clock.
    pub timestamp: i64,
    pub host: String,
    pub bytes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub requests: u64,
    pub bytes: u64,
}

impl Totals {
    pub fn metric(&self, metric: SortMetric) -> u64 {
        match metric {
            SortMetric::Bytes => self.bytes,
            SortMetric::Requests => self.requests,
        }
    }
}

pub type HostTotals = HashMap<String, Totals>;
