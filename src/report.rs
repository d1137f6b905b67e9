use serde::Serialize;
use simdump_reader::DumpReader;
use simdump_types::IntervalSnapshot;
use std::collections::BTreeMap;

/// Serializable view of a populated reader.
#[derive(Debug, Serialize)]
pub struct DumpReport<'a> {
    pub interval_begins: &'a [f64],
    pub series: BTreeMap<&'a str, &'a [IntervalSnapshot]>,
}

impl<'a> DumpReport<'a> {
    pub fn from_reader(reader: &'a DumpReader) -> Self {
        let series = reader.series().collect();
        Self {
            interval_begins: reader.interval_begins(),
            series,
        }
    }
}
