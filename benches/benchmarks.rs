use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndvector::{utils::generate_random_vectors, vector::Vector};

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for &dim in &[4usize, 128, 1024] {
        let vector = generate_random_vectors(dim, 1).remove(0);
        let octets = vector.to_bytes();
        group.throughput(Throughput::Bytes(octets.len() as u64));

        group.bench_with_input(BenchmarkId::new("to_bytes", dim), &vector, |b, vector| {
            b.iter(|| black_box(vector.to_bytes()))
        });
        group.bench_with_input(BenchmarkId::new("from_bytes", dim), &octets, |b, octets| {
            b.iter(|| black_box(Vector::from_bytes(octets)))
        });
    }

    group.finish();
}

fn bench_value_semantics(c: &mut Criterion) {
    let mut group = c.benchmark_group("value_semantics");
    let vector = generate_random_vectors(1024, 1).remove(0);
    let copy = vector.clone();

    group.bench_function("hash_value", |b| b.iter(|| black_box(vector.hash_value())));
    group.bench_function("magnitude", |b| b.iter(|| black_box(vector.magnitude())));
    group.bench_function("eq", |b| b.iter(|| black_box(vector == copy)));
    group.bench_function("debug", |b| b.iter(|| black_box(format!("{:?}", vector))));
    group.bench_function("slice_step_2", |b| {
        b.iter(|| black_box(vector.item("::2")))
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_value_semantics);
criterion_main!(benches);
