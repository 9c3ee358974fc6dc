//! Benchmarks for the contour pipeline.
//!
//! Run with: cargo bench -p contour-kernel

use contour_kernel::{
    trace_paths, CellTable, CircleSet, ContourPipeline, Grid, PipelineSettings, PointField, Vec2,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// =============================================================================
// Test Scenes
// =============================================================================

/// A ring of overlapping circles around a large center circle.
fn create_scene(count: usize) -> CircleSet {
    let mut circles = CircleSet::new();
    circles.add_circle(Vec2::ZERO, 2.0, false);
    for i in 0..count {
        let angle = std::f64::consts::TAU * i as f64 / count as f64;
        let center = Vec2::new(angle.cos(), angle.sin()) * 2.5;
        circles.add_circle(center, 0.4 + 0.2 * (i % 3) as f64, false);
    }
    circles.recompute_bounds();
    circles
}

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field");
    let scene = create_scene(16);
    let Some(bounds) = scene.bounds() else {
        return;
    };

    for grid_cells in [40, 100, 250] {
        let Some(grid) = Grid::from_bounds(&bounds, grid_cells) else {
            continue;
        };
        group.throughput(Throughput::Elements((grid.point_cols() * grid.point_rows()) as u64));
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, grid_cells), &grid, |b, grid| {
                b.iter(|| PointField::sample(black_box(grid), scene.circles(), parallel))
            });
        }
    }

    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("Trace");
    let scene = create_scene(16);
    let Some(bounds) = scene.bounds() else {
        return;
    };

    for grid_cells in [40, 100, 250] {
        let Some(grid) = Grid::from_bounds(&bounds, grid_cells) else {
            continue;
        };
        let field = PointField::sample(&grid, scene.circles(), true);
        let table = CellTable::classify(&grid, &field, scene.circles());
        group.bench_with_input(BenchmarkId::new("trace_paths", grid_cells), &table, |b, table| {
            b.iter(|| {
                let mut table = table.clone();
                trace_paths(black_box(&mut table), &grid)
            })
        });
    }

    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rebuild");

    for count in [4, 16, 64] {
        let scene = create_scene(count);
        let mut pipeline = ContourPipeline::new(PipelineSettings::default());
        for circle in scene.circles() {
            pipeline.add_circle(circle.center, circle.radius, false);
        }
        group.bench_function(BenchmarkId::new("rebuild", count), |b| b.iter(|| pipeline.rebuild()));
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_field, bench_trace, bench_rebuild);

criterion_main!(benches);
