use std::collections::BTreeMap;

/// Values of one attribute within one interval, keyed by element id.
///
/// Sparse: an element that did not report the attribute in this interval has
/// no entry. Ordered by id so serialized output is stable.
pub type IntervalSnapshot = BTreeMap<String, f64>;

/// One snapshot per interval, in document order.
pub type AttributeSeries = Vec<IntervalSnapshot>;
