use std::io::{self, BufWriter};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use svdataset::dataset::{Dataset, PointColumns};
use svdataset::xml::{DatasetReader, XmlLayout};

fn generate_dataset(num_points: usize) -> Dataset {
    let mut dataset = Dataset::new_2d("bench", 44100.0).unwrap();
    dataset
        .set_data_from_iterable(
            PointColumns::new((0..num_points as u64).map(|i| i * 512))
                .values((0..num_points).map(|i| (i as f64 * 0.01).sin()))
                .labels((0..num_points).map(|i| format!("segment {}", i % 16))),
        )
        .unwrap();
    dataset
}

fn bench_write_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_write_xml");
    let layout = XmlLayout::default();

    for num_points in [10_000, 100_000, 1_000_000] {
        let dataset = generate_dataset(num_points);

        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_points),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let writer = BufWriter::new(io::sink());
                    dataset.write_xml(writer, &layout).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_read_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_read_xml");

    for num_points in [10_000, 100_000] {
        let mut xml = Vec::new();
        generate_dataset(num_points)
            .write_xml(&mut xml, &XmlLayout::default())
            .unwrap();

        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_with_input(BenchmarkId::from_parameter(num_points), &xml, |b, xml| {
            b.iter_batched(
                || DatasetReader::new(xml.as_slice()),
                |mut reader| {
                    let dataset = reader.next_dataset().unwrap().unwrap();
                    black_box(dataset.len());
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_bulk_ingestion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_set_data_from_iterable");

    for num_points in [100_000, 1_000_000] {
        group.throughput(Throughput::Elements(num_points as u64));
        group.bench_function(BenchmarkId::from_parameter(num_points), |b| {
            b.iter(|| black_box(generate_dataset(num_points)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_write_xml, bench_read_xml, bench_bulk_ingestion);
criterion_main!(benches);
