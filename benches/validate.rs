use criterion::{criterion_group, criterion_main, Criterion};
use geo_features::{CoordinatesType, LineString, Polygon, Sequence};

fn regular_ring(sides: usize, cx: f64, cy: f64, radius: f64) -> LineString {
    let mut floats = Vec::with_capacity((sides + 1) * 2);
    for i in 0..=sides {
        let angle = (i % sides) as f64 / sides as f64 * std::f64::consts::TAU;
        floats.push(cx + radius * angle.cos());
        floats.push(cy + radius * angle.sin());
    }
    LineString::new_unchecked(Sequence::new(floats, CoordinatesType::XY))
}

fn polygon_with_holes() -> Polygon {
    let mut rings = vec![regular_ring(1024, 0.0, 0.0, 100.0)];
    for i in 0..8 {
        for j in 0..8 {
            let x = -44.0 + i as f64 * 12.0;
            let y = -44.0 + j as f64 * 12.0;
            rings.push(regular_ring(16, x, y, 3.0));
        }
    }
    Polygon::new_unchecked(rings)
}

fn zigzag(points: usize) -> LineString {
    let mut floats = Vec::with_capacity(points * 2);
    for i in 0..points {
        floats.push(i as f64);
        floats.push(if i % 2 == 0 { 0.0 } else { 1.0 });
    }
    LineString::new_unchecked(Sequence::new(floats, CoordinatesType::XY))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let polygon = polygon_with_holes();
    c.bench_function("validate polygon with 64 holes", |b| {
        b.iter(|| polygon.validate())
    });

    let line = zigzag(4096);
    c.bench_function("is_simple zigzag 4096", |b| b.iter(|| line.is_simple()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
