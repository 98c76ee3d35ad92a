// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery view-state operations.
//!
//! Measures the performance of:
//! - Filter recomputation over a large synthetic catalog
//! - Lightbox navigation (next/previous)
//! - A full open-navigate-close cycle

use aviary::catalog::Catalog;
use aviary::gallery::{Filter, Gallery};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const CATEGORIES: [&str; 4] = ["raptors", "songbirds", "waterfowl", "shorebirds"];

/// Builds a synthetic catalog far larger than any real portfolio so the
/// O(n) recomputation cost is visible.
fn synthetic_catalog(size: usize) -> Catalog {
    let mut doc = String::new();
    for i in 0..size {
        let category = CATEGORIES[i % CATEGORIES.len()];
        doc.push_str(&format!(
            "[[photographs]]\ncategory = \"{category}\"\nimage = \"photos/bird-{i}.jpg\"\n\
             title = \"Bird {i}\"\nlocation = \"Site {i}\"\n\n"
        ));
    }
    Catalog::from_toml(&doc).expect("synthetic catalog should parse")
}

/// Benchmark filter recomputation.
fn bench_apply_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let gallery = Gallery::new(synthetic_catalog(512));

    group.bench_function("apply_filter_category", |b| {
        b.iter(|| {
            let mut g = gallery.clone();
            g.apply_filter(Filter::Category("songbirds".to_string()));
            black_box(g.visible().len());
        });
    });

    group.bench_function("apply_filter_all", |b| {
        b.iter(|| {
            let mut g = gallery.clone();
            g.apply_filter(Filter::All);
            black_box(g.visible().len());
        });
    });

    group.finish();
}

/// Benchmark navigation operations (next/previous).
///
/// Measures the pure wraparound arithmetic plus the overlay projection.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut gallery = Gallery::new(synthetic_catalog(512));
    gallery.open_lightbox(0);

    group.bench_function("show_next", |b| {
        b.iter(|| {
            let mut g = gallery.clone();
            g.show_next();
            black_box(g.overlay_position());
        });
    });

    group.bench_function("show_previous", |b| {
        b.iter(|| {
            let mut g = gallery.clone();
            g.show_previous();
            black_box(g.overlay_position());
        });
    });

    group.bench_function("render_overlay", |b| {
        b.iter(|| {
            black_box(gallery.overlay());
        });
    });

    group.finish();
}

/// Benchmark the full user workflow: open on a filtered set, walk the
/// whole cycle, and close.
fn bench_open_cycle_close(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut filtered = Gallery::new(synthetic_catalog(512));
    filtered.apply_filter(Filter::Category("raptors".to_string()));
    let first_visible = filtered.visible()[0];
    let visible_count = filtered.visible().len();

    group.bench_function("open_cycle_close", |b| {
        b.iter(|| {
            let mut g = filtered.clone();
            g.open_lightbox(first_visible);
            for _ in 0..visible_count {
                g.show_next();
            }
            g.close_lightbox();
            black_box(&g);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_apply_filter,
    bench_navigate,
    bench_open_cycle_close
);
criterion_main!(benches);
