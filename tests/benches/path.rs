#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use glide::math::point;
use glide::svg::build_path;
use glide_tests::*;

static SIZES: [usize; 3] = [10, 100, 1000];

fn parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("parse");
    for size in &SIZES {
        let src = generate_path_string(*size);
        g.bench_with_input(BenchmarkId::from_parameter(size), &src, |b, src| {
            b.iter(|| build_path(src))
        });
    }
    g.finish();
}

fn measure(c: &mut Criterion) {
    let mut g = c.benchmark_group("measure");
    for size in &SIZES {
        let path = generate_curvy_path(*size).unwrap();
        g.bench_with_input(BenchmarkId::from_parameter(size), &path, |b, path| {
            b.iter(|| {
                let mut path = path.clone();
                path.total_length()
            })
        });
    }
    g.finish();
}

fn flatten(c: &mut Criterion) {
    let path = generate_curvy_path(100).unwrap();
    c.bench_function("flatten 100 curves", |b| b.iter(|| path.flattened()));
}

fn sample(c: &mut Criterion) {
    let mut path = generate_curvy_path(100).unwrap();
    let length = path.total_length().unwrap_or(0.0);

    c.bench_function("position_at forward", |b| {
        b.iter(|| {
            let mut sampler = path.sampler().unwrap();
            let mut offset = 0.0;
            while offset < length {
                std::hint::black_box(sampler.position_at(offset));
                offset += 10.0;
            }
        })
    });

    c.bench_function("position_at backward", |b| {
        b.iter(|| {
            let mut sampler = path.sampler().unwrap();
            let mut offset = length;
            while offset > 0.0 {
                std::hint::black_box(sampler.position_at(offset));
                offset -= 500.0;
            }
        })
    });

    c.bench_function("progress_at", |b| {
        b.iter(|| {
            let mut sampler = path.sampler().unwrap();
            sampler.progress_at(0.0, 2000.0, point(250.0, 250.0))
        })
    });
}

criterion_group!(path_benches, parse, measure, flatten, sample);
criterion_main!(path_benches);
