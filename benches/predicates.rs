//! Criterion benchmarks for the robust predicates and the ring
//! algorithms built on them.

#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planis::geometry::LinearRing;
use planis::math::orientation::orientation;
use planis::math::Point2;
use planis::operations::{locate_in_ring, ConvexHull};

fn regular_ring(sides: usize) -> LinearRing {
    let mut points = Vec::with_capacity(sides + 1);
    for i in 0..sides {
        let theta = std::f64::consts::TAU * (i as f64) / (sides as f64);
        points.push(Point2::new(theta.cos(), theta.sin()));
    }
    points.push(points[0]);
    LinearRing::from_points(&points).unwrap()
}

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("orientation");

    let p1 = Point2::new(0.2, 0.2);
    let p2 = Point2::new(7.3, 9.1);
    let off_line = Point2::new(4.1, 3.7);
    group.bench_function("filter_path", |b| {
        b.iter(|| orientation(black_box(p1), black_box(p2), black_box(off_line)));
    });

    // collinear at large magnitude defeats the filter and lands in the
    // extended-precision tier
    let q1 = Point2::new(0.0, 0.0);
    let q2 = Point2::new(1e8, 1e8);
    let on_line = Point2::new(5e7, 5e7);
    group.bench_function("exact_path", |b| {
        b.iter(|| orientation(black_box(q1), black_box(q2), black_box(on_line)));
    });

    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_in_ring");
    let inside = Point2::new(0.1, 0.05);
    for &sides in &[16usize, 64, 256, 1024] {
        let ring = regular_ring(sides);
        group.bench_with_input(BenchmarkId::from_parameter(sides), &ring, |b, ring| {
            b.iter(|| locate_in_ring(black_box(inside), ring));
        });
    }
    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");
    for &count in &[10usize, 100, 1000] {
        let points: Vec<Point2> = (0..count)
            .map(|i| {
                let t = i as f64 * 0.61;
                let r = 1.0 + 0.4 * (i as f64 * 1.7).sin();
                Point2::new(r * t.cos(), r * t.sin())
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| ConvexHull::from_points(points.clone()).execute());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orientation, bench_locate, bench_hull);
criterion_main!(benches);
