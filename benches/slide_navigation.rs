// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slide navigation and fragment resolution.
//!
//! Measures the performance of:
//! - Slide advance (next/previous with wraparound)
//! - Overlay resolution (fallback substitution)
//! - Fragment-to-offset resolution for smooth scrolling

use criterion::{criterion_group, criterion_main, Criterion};
use ezana_kiosk::content::HeroSlide;
use ezana_kiosk::ui::{hero, page};
use std::hint::black_box;

fn sample_slides(count: usize) -> Vec<HeroSlide> {
    (0..count)
        .map(|i| HeroSlide {
            title: Some(format!("Slide {i}")),
            subtitle: (i % 2 == 0).then(|| "Subtitle".to_string()),
            button_text: None,
            button_link: Some(format!("#section-{}", i % 8)),
            image: None,
        })
        .collect()
}

/// Benchmark slide advance performance.
fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_navigation");

    group.bench_function("next_pressed", |b| {
        let mut state = hero::State::new(sample_slides(64));
        b.iter(|| {
            state.handle(hero::Message::NextPressed);
            black_box(state.current_index());
        });
    });

    group.bench_function("prev_pressed", |b| {
        let mut state = hero::State::new(sample_slides(64));
        b.iter(|| {
            state.handle(hero::Message::PrevPressed);
            black_box(state.current_index());
        });
    });

    group.finish();
}

/// Benchmark overlay resolution (fallback substitution per slide).
fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_navigation");

    let state = hero::State::new(sample_slides(64));
    group.bench_function("overlay_resolution", |b| {
        b.iter(|| {
            black_box(state.overlay());
        });
    });

    group.finish();
}

/// Benchmark fragment resolution against a registered section list.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("slide_navigation");

    let ids = (0..8).map(|i| format!("section-{i}")).collect();
    let state = page::State::new(ids, 780.0);

    group.bench_function("resolve_fragment", |b| {
        b.iter(|| {
            black_box(state.resolve_target("#section-7"));
            black_box(state.resolve_target("#missing"));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_advance, bench_overlay, bench_resolve);
criterion_main!(benches);
