#![allow(clippy::unwrap_used)]

//! Scanner throughput benchmarks.
//!
//! `static` texts have no open token and hit the borrowed fast path; `dense`
//! texts put a span on every line so the handler runs constantly.

use std::convert::Infallible;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use weft_scan::{from_fn, TokenScanner};
use weft_subst::{bind_placeholders, substitute_variables, Properties, VariableOptions};

fn static_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("SELECT col{i} FROM table{i} WHERE id = {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dense_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("SELECT ${{col{i}}} FROM ${{table}} WHERE id = #{{id{i}:INTEGER}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_scan(c: &mut Criterion) {
    let scanner = TokenScanner::new(
        "${",
        "}",
        from_fn(|expr: &str| Ok::<_, Infallible>(expr.to_owned())),
    )
    .unwrap();

    let mut group = c.benchmark_group("scan/throughput");
    for lines in [10, 100, 1000, 10_000] {
        for (kind, source) in [("static", static_lines(lines)), ("dense", dense_lines(lines))] {
            group.throughput(Throughput::Bytes(source.len() as u64));
            group.bench_with_input(BenchmarkId::new(kind, lines), &source, |b, src| {
                b.iter(|| black_box(scanner.parse(black_box(src.as_str())).unwrap()));
            });
        }
    }
    group.finish();
}

fn bench_substitute(c: &mut Criterion) {
    let props: Properties = [("table", "accounts")].into_iter().collect();
    let options = VariableOptions::default().with_default_values(":");

    let mut group = c.benchmark_group("substitute");
    for lines in [100, 1000] {
        let source = dense_lines(lines);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("variables", lines), &source, |b, src| {
            b.iter(|| black_box(substitute_variables(src, &props, &options)));
        });
        group.bench_with_input(BenchmarkId::new("placeholders", lines), &source, |b, src| {
            b.iter(|| black_box(bind_placeholders(src).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_substitute);
criterion_main!(benches);
