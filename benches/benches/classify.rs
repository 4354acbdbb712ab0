// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use lookout_geometry::{TickOrigin, ViewportSnapshot, classify};
use lookout_spy::active_index;

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookout_classify");

    let boxes: Vec<Rect> = (0..1_024)
        .map(|i| {
            let top = f64::from(i) * 97.0;
            Rect::new(0.0, top, 300.0, top + 40.0 + f64::from(i % 7) * 150.0)
        })
        .collect();
    let snap = ViewportSnapshot::new(25_000.0, 800.0, 100_000.0, TickOrigin::Scroll);

    group.bench_function("classify(n=1024)", |b| {
        b.iter(|| {
            let mut fully = 0_usize;
            for bounds in &boxes {
                if classify(black_box(*bounds), &snap).is_fully_in_view() {
                    fully += 1;
                }
            }
            black_box(fully)
        });
    });

    for &n in &[16_u32, 256, 4_096] {
        let tops: Vec<f64> = (0..n).map(|i| f64::from(i) * 600.0).collect();
        let max_scroll = f64::from(n) * 600.0;
        group.bench_function(format!("active_index(n={n})"), |b| {
            b.iter(|| {
                black_box(active_index(
                    tops.iter().copied(),
                    black_box(max_scroll / 2.0),
                    max_scroll,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
