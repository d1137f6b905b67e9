//! Parse and join throughput over synthetic interval dumps.
//!
//! Run benchmarks: `cargo bench --bench join_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use simdump::{Reduction, read_dump_str};
use std::hint::black_box;

/// Dense dump: every element reports `speed` and `density` in every interval.
fn generate_dump(intervals: usize, elements: usize) -> String {
    let mut xml = String::from("<meandata>\n");
    for i in 0..intervals {
        xml.push_str(&format!("<interval begin=\"{}\" end=\"{}\">\n", i * 300, (i + 1) * 300));
        for j in 0..elements {
            xml.push_str(&format!(
                "<edge id=\"edge{}\" speed=\"{:.2}\" density=\"{:.2}\" entered=\"{}\"/>\n",
                j,
                5.0 + ((i * 7 + j) % 25) as f64,
                ((i + j * 3) % 40) as f64 / 4.0,
                (i + j) % 9
            ));
        }
        xml.push_str("</interval>\n");
    }
    xml.push_str("</meandata>\n");
    xml
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &(intervals, elements) in &[(12, 100), (96, 100), (96, 1000)] {
        let xml = generate_dump(intervals, elements);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", intervals, elements)),
            &xml,
            |b, xml| b.iter(|| read_dump_str(black_box(xml), ["speed", "density"])),
        );
    }
    group.finish();
}

fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    let xml = generate_dump(96, 1000);
    let Ok(parsed) = read_dump_str(&xml, ["speed", "density"]) else {
        panic!("benchmark dump failed to parse");
    };

    for how in [Reduction::Sum, Reduction::Average] {
        group.bench_function(BenchmarkId::from_parameter(how), |b| {
            b.iter_batched(
                || parsed.clone(),
                |mut reader| {
                    reader
                        .join(["speed", "density"], how)
                        .expect("benchmark attributes are requested");
                    reader
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_join);
criterion_main!(benches);
