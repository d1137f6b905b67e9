use simdump_types::{IntervalSnapshot, Reduction};
use std::collections::BTreeMap;

/// Collapses a series of snapshots into one.
///
/// Totals and observation counts are accumulated in one pass and divided once
/// at the end. An id contributes only to the intervals that reported it, so an
/// average is taken over those intervals alone.
pub fn reduce(series: &[IntervalSnapshot], how: Reduction) -> IntervalSnapshot {
    let mut totals = IntervalSnapshot::new();
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for snapshot in series {
        for (id, value) in snapshot {
            *totals.entry(id.clone()).or_insert(0.0) += value;
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
    }

    if how == Reduction::Average {
        // Both maps hold the same keys in the same order.
        for (total, count) in totals.values_mut().zip(counts.values()) {
            *total /= *count as f64;
        }
    }

    totals
}
