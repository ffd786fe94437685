use crate::conf::{IdleHosts, SortMetric};
use crate::stats::types::HostTotals;
use std::collections::BTreeSet;

/// Order hosts for display: busiest first by `metric`, ties by host name,
/// cut to `max_rows`.
pub fn rank<'a>(
    hosts: &'a BTreeSet<String>,
    totals: &HostTotals,
    metric: SortMetric,
    max_rows: usize,
    idle: IdleHosts,
) -> Vec<&'a str> {
    let value = |host: &str| totals.get(host).map(|t| t.metric(metric)).unwrap_or(0);

    let mut ranked: Vec<&str> = hosts
        .iter()
        .map(String::as_str)
        .filter(|host| idle == IdleHosts::Show || totals.contains_key(*host))
        .collect();

    // `hosts` iterates in name order and the sort is stable, so equal values
    // stay alphabetical.
    ranked.sort_by_key(|host| std::cmp::Reverse(value(host)));
    ranked.truncate(max_rows);
    ranked
}
