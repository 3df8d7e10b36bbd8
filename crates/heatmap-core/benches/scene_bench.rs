// File: crates/heatmap-core/benches/scene_bench.rs
// Summary: Criterion benchmark for pure scene construction.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heatmap_core::{build_scene, Dataset, MonthlyRecord};

fn build_dataset(years: usize) -> Dataset {
    let mut records = Vec::with_capacity(years * 12);
    for y in 0..years {
        for month in 0..12u32 {
            records.push(MonthlyRecord {
                year: 1750 + y as i32,
                month,
                variance: ((y * 12 + month as usize) % 25) as f64 * 0.1 - 1.2,
            });
        }
    }
    Dataset {
        base_temperature: 8.66,
        monthly_variance: records,
    }
}

fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scene");
    for &years in &[50usize, 266usize] {
        group.bench_function(format!("years_{years}"), |b| {
            let data = build_dataset(years);
            b.iter(|| {
                let scene = build_scene(&data).expect("scene");
                black_box(scene);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scene);
criterion_main!(benches);
