//! Criterion benchmarks for the hull-driven triangulation.
//! Sizes: n in {16, 64, 256}; every insertion reruns the hull scan, so growth is steep.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hulltri::prelude::*;

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation");
    for &n in &[16usize, 64, 256] {
        for layout in [Layout::Box, Layout::Circle] {
            let cfg = SampleCfg {
                count: n,
                half_extent: 10.0,
                layout,
            };
            let pts = draw_points(cfg, ReplayToken { seed: 7, index: n as u64 });
            group.bench_with_input(
                BenchmarkId::new(format!("triangulate_{layout:?}"), n),
                &pts,
                |b, pts| b.iter(|| Triangulation::new(pts).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_triangulation);
criterion_main!(benches);
