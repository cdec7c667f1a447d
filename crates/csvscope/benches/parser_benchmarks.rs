//! Loading performance benchmarks.
//!
//! Measures parsing and typing of uploads across sizes and delimiters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csvscope::{Explorer, ExplorerConfig, Parser, ParserConfig};
use std::io::Write;
use tempfile::NamedTempFile;

/// Generate synthetic CSV data with the specified number of rows and columns.
fn generate_csv_data(rows: usize, cols: usize) -> String {
    let mut data = String::new();

    // Header row. Every fifth column is date-named and gets coerced.
    for i in 0..cols {
        if i > 0 {
            data.push(',');
        }
        if i % 5 == 2 {
            data.push_str(&format!("date_{}", i + 1));
        } else {
            data.push_str(&format!("column_{}", i + 1));
        }
    }
    data.push('\n');

    // Data rows
    for row in 0..rows {
        for col in 0..cols {
            if col > 0 {
                data.push(',');
            }
            // Mix of data types
            match col % 5 {
                0 => data.push_str(&format!("ID_{:06}", row)),
                1 => data.push_str(&format!("{:.2}", row as f64 * 1.5)),
                2 => data.push_str(&format!("2023-{:02}-{:02}", (row % 12) + 1, (row % 28) + 1)),
                3 => data.push_str(if row % 2 == 0 { "true" } else { "" }),
                4 => data.push_str(&format!("Category_{}", row % 10)),
                _ => unreachable!(),
            }
        }
        data.push('\n');
    }

    data
}

/// Benchmark loading uploaded bytes of various sizes.
fn bench_load_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_bytes");
    let explorer = Explorer::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 10);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(explorer.load_bytes("bench.csv", data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark loading from disk.
fn bench_load_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_file");
    let explorer = Explorer::new();

    for rows in [1_000, 10_000].iter() {
        let data = generate_csv_data(*rows, 10);
        let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
        temp.write_all(data.as_bytes()).unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &temp, |b, temp| {
            b.iter(|| black_box(explorer.load_file(temp.path()).unwrap()))
        });
    }

    group.finish();
}

/// Raw parsing with a fixed delimiter against delimiter detection.
fn bench_delimiter_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("delimiter");
    let data = generate_csv_data(5_000, 10).replace(',', ";");

    let detecting = Parser::with_config(ParserConfig {
        delimiter: None,
        ..ParserConfig::default()
    });
    let fixed = Parser::with_config(ParserConfig {
        delimiter: Some(b';'),
        ..ParserConfig::default()
    });

    group.bench_function("detect", |b| {
        b.iter(|| black_box(detecting.parse_bytes("bench.csv", data.as_bytes()).unwrap()))
    });
    group.bench_function("fixed", |b| {
        b.iter(|| black_box(fixed.parse_bytes("bench.csv", data.as_bytes()).unwrap()))
    });

    group.finish();
}

/// Benchmark how loading scales with column count.
fn bench_column_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_scaling");
    let explorer = Explorer::with_config(ExplorerConfig::default());

    for cols in [5, 20, 50].iter() {
        let data = generate_csv_data(1_000, *cols);

        group.bench_with_input(BenchmarkId::new("cols", cols), &data, |b, data| {
            b.iter(|| black_box(explorer.load_bytes("bench.csv", data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_load_bytes,
    bench_load_file,
    bench_delimiter_detection,
    bench_column_scaling,
);
criterion_main!(benches);
