// Copyright 2025 the Scrollspy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use scrollspy_outline::{BandPolicy, Heading, Outline};
use scrollspy_tracker::{Capabilities, Environment, NoSidebar, Tracker};

fn gen_outline(n: usize, gap: f64) -> Outline<u32, f64> {
    let mut out = Outline::new();
    for i in 0..n {
        out.push(Heading::new(i as u32, "Section", 1 + (i % 4) as u8).with_offset(i as f64 * gap));
    }
    out
}

struct FixedEnv(f64);

impl Environment<f64> for FixedEnv {
    fn viewport_height(&self) -> f64 {
        self.0
    }
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

fn bench_band_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_scan");
    let policy = BandPolicy::default();
    for &n in &[16usize, 64, 256, 1024] {
        let outline = gen_outline(n, 640.0);
        let top = (n as f64) * 640.0;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("first_in_band_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                let mut p = 0.0;
                while p < top {
                    let band = policy.band_at(p, 1200.0);
                    if outline.first_in_band(&band).is_some() {
                        hits += 1;
                    }
                    p += 320.0;
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_scroll_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_sweep");
    for &n in &[16usize, 64, 256] {
        let outline = gen_outline(n, 640.0);
        let top = (n as f64) * 640.0;
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("monotonic_sweep_n{}", n), |b| {
            b.iter_batched(
                || Tracker::attach(Pane(0.0), NoSidebar, FixedEnv(1200.0)),
                |mut tracker| {
                    let mut events = 0usize;
                    // Per-frame cadence: many calls per heading.
                    let mut p = 0.0;
                    while p < top {
                        events += tracker.on_content_scroll(&outline, p).len();
                        p += 16.0;
                    }
                    black_box(events);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

struct Pane(f64);

impl scrollspy_tracker::ScrollHandle<f64> for Pane {
    fn scroll_offset(&self) -> f64 {
        self.0
    }
    fn set_scroll_offset(&mut self, offset: f64, _mode: scrollspy_tracker::ScrollMode) {
        self.0 = offset;
    }
}

criterion_group!(benches, bench_band_scan, bench_scroll_sweep);
criterion_main!(benches);
