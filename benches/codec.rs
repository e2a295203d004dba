use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geojson_geometry::{decode, encode, Geometry, Location};

fn ring(points: usize) -> Vec<Location> {
    (0..=points)
        .map(|i| {
            let angle = (i % points) as f64 / points as f64 * std::f64::consts::PI * 2.;
            Location::new(52.5 + angle.sin() * 0.1, 13.4 + angle.cos() * 0.1)
        })
        .collect()
}

fn polygon() -> Geometry {
    Geometry::Polygon {
        coordinates: vec![ring(1_000), ring(100), ring(100)],
    }
}

pub fn decode_bench(c: &mut Criterion) {
    let text = encode(&polygon());
    let mut group = c.benchmark_group("polygon");
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&text))));
    group.bench_function("reject", |b| {
        let truncated = &text[..text.len() - 2];
        b.iter(|| decode(black_box(truncated)))
    });
    group.finish();
}

pub fn encode_bench(c: &mut Criterion) {
    let geometry = polygon();
    let mut group = c.benchmark_group("polygon");
    group.bench_function("encode", |b| b.iter(|| encode(black_box(&geometry))));
    group.finish();
}

criterion_group!(benches, decode_bench, encode_bench);
criterion_main!(benches);
