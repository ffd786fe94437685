use crate::stats::types::{AccessEvent, HostTotals, Totals};
use std::collections::{BTreeSet, VecDeque};

/// Owns the sliding window of recent events and the per-host totals derived
/// from it.
///
/// Log timestamps are not monotonic, so every insertion re-filters the whole
/// window against the newest timestamp and rebuilds the totals from scratch.
/// That keeps the totals exactly equal to a fold over the window.
pub struct WindowAccountant {
    window_seconds: i64,
    events: VecDeque<AccessEvent>,
    totals: HostTotals,
    hosts: BTreeSet<String>,
    latest: Option<i64>,
}

impl WindowAccountant {
    pub fn new(window_seconds: u64) -> Self {
        Self {
            window_seconds: i64::try_from(window_seconds).unwrap_or(i64::MAX),
            events: VecDeque::new(),
            totals: HostTotals::new(),
            hosts: BTreeSet::new(),
            latest: None,
        }
    }

    pub fn ingest(&mut self, event: AccessEvent) {
        let now = event.timestamp;

        if !self.hosts.contains(&event.host) {
            self.hosts.insert(event.host.clone());
        }

        self.events.push_back(event);
        self.latest = Some(now);

        let window = self.window_seconds;
        self.events
            .retain(|ev| now.saturating_sub(ev.timestamp) < window);

        self.totals = fold_totals(self.events.iter());
    }

    /// Retained events, oldest first.
    pub fn window(&self) -> impl ExactSizeIterator<Item = &AccessEvent> {
        self.events.iter()
    }

    pub fn totals(&self) -> &HostTotals {
        &self.totals
    }

    /// Every host ever ingested, including ones that have left the window.
    pub fn hosts(&self) -> &BTreeSet<String> {
        &self.hosts
    }

    pub fn latest_timestamp(&self) -> Option<i64> {
        self.latest
    }

    pub fn window_seconds(&self) -> u64 {
        self.window_seconds as u64
    }
}

pub(crate) fn fold_totals<'a>(events: impl Iterator<Item = &'a AccessEvent>) -> HostTotals {
    let mut totals = HostTotals::new();
    for ev in events {
        let entry: &mut Totals = totals.entry(ev.host.clone()).or_default();
        entry.requests = entry.requests.saturating_add(1);
        entry.bytes = entry.bytes.saturating_add(ev.bytes);
    }
    totals
}
