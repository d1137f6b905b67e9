/// Two intervals of edge speeds; `e2` only reports in the second one.
pub const TWO_INTERVALS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<meandata>
    <interval begin="0.00" end="100.00" id="dump_100">
        <edge id="e1" speed="10"/>
    </interval>
    <interval begin="100.00" end="200.00" id="dump_100">
        <edge id="e1" speed="20"/>
        <edge id="e2" speed="5"/>
    </interval>
</meandata>
"#;

/// Lane dump mixing several attributes, nested lanes and sparse readings.
pub const LANE_DUMP: &str = r#"<meandata>
    <interval begin="0" end="60">
        <edge id="north">
            <lane id="north_0" occupancy="12.5" waitingTime="3"/>
            <lane id="north_1" occupancy="7.5"/>
        </edge>
    </interval>
    <interval begin="60" end="120">
        <edge id="north">
            <lane id="north_0" occupancy="2.5" waitingTime="9"/>
        </edge>
    </interval>
</meandata>
"#;

/// An edge reading before any interval has been opened.
pub const EDGE_BEFORE_INTERVAL: &str = r#"<meandata>
    <edge id="e1" speed="3"/>
    <interval begin="0"><edge id="e1" speed="4"/></interval>
</meandata>
"#;

/// Builds a dump with `intervals` intervals, where element `e{j}` reports
/// `speed = i + j` only in intervals `i` with `(i + j) % gap == 0`.
pub fn sparse_dump(intervals: usize, elements: usize, gap: usize) -> String {
    let mut xml = String::from("<meandata>\n");
    for i in 0..intervals {
        xml.push_str(&format!("  <interval begin=\"{}\">\n", i * 60));
        for j in 0..elements {
            if (i + j) % gap == 0 {
                xml.push_str(&format!(
                    "    <edge id=\"e{}\" speed=\"{}\" entered=\"1\"/>\n",
                    j,
                    i + j
                ));
            }
        }
        xml.push_str("  </interval>\n");
    }
    xml.push_str("</meandata>\n");
    xml
}
