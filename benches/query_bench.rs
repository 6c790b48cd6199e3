use asn_cidrs::{extract_cidrs, list_asns, Dataset};
use criterion::{criterion_group, criterion_main, Criterion};
use std::fmt::Write;
use std::hint::black_box;

/// Dataset with `records` ASNs announcing four /24s each
fn generated_dataset(records: u32) -> Dataset {
    let mut json = String::from("{");
    for asn in 0..records {
        if asn > 0 {
            json.push(',');
        }
        let (a, b) = (asn / 256 % 256, asn % 256);
        write!(json, r#""{asn}": {{"id": "AS{asn}", "name": "Org {asn}", "netblocks": {{"#).unwrap();
        for c in 0..4 {
            if c > 0 {
                json.push(',');
            }
            write!(json, r#""{a}.{b}.{c}.0/24": {{}}"#).unwrap();
        }
        json.push_str("}}");
    }
    json.push('}');
    Dataset::from_json_str(&json, "bench.json").unwrap()
}

fn benchmark_list_asns(c: &mut Criterion) {
    let dataset = generated_dataset(10_000);

    c.bench_function("list_asns_10k", |b| b.iter(|| list_asns(black_box(&dataset))));
}

fn benchmark_extract_all(c: &mut Criterion) {
    let dataset = generated_dataset(10_000);

    c.bench_function("extract_cidrs_all_10k", |b| {
        b.iter(|| extract_cidrs(black_box(&dataset), None))
    });
}

fn benchmark_extract_one(c: &mut Criterion) {
    let dataset = generated_dataset(10_000);

    c.bench_function("extract_cidrs_last_asn_10k", |b| {
        b.iter(|| extract_cidrs(black_box(&dataset), Some(black_box("AS9999"))))
    });
}

criterion_group!(
    benches,
    benchmark_list_asns,
    benchmark_extract_all,
    benchmark_extract_one
);
criterion_main!(benches);
