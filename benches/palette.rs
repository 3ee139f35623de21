//! Benchmarks for palette derivation and theme switching
//!
//! Run: cargo bench
//! Run specific: cargo bench -- generate
//! Compare: cargo bench -- --save-baseline v1 && cargo bench -- --baseline v1

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio_theme::color::Rgb;
use folio_theme::palette::{generate_palette, generate_palette_hex};
use folio_theme::theme::{StyleTable, ThemeController, ThemeId, ThemeState};

// ============================================================================
// Palette Generation
// ============================================================================

fn benchmark_generate_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_palette");

    for hex in ["#8b5cf6", "#7e3af2", "#22c55e", "#808080", "#fff"] {
        let rgb = Rgb::from_hex(hex).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(hex), &rgb, |b, rgb| {
            b.iter(|| black_box(generate_palette(black_box(*rgb))))
        });
    }

    group.finish();

    c.bench_function("generate_palette_hex", |b| {
        b.iter(|| black_box(generate_palette_hex(black_box("#8b5cf6"))))
    });
}

// ============================================================================
// Theme Switching
// ============================================================================

fn benchmark_theme_switch(c: &mut Criterion) {
    c.bench_function("switch_all_themes", |b| {
        let mut controller =
            ThemeController::new(StyleTable::new(), ThemeState::default()).unwrap();
        b.iter(|| {
            for id in ThemeId::ALL {
                controller.set_theme(black_box(id)).unwrap();
            }
        })
    });

    c.bench_function("style_table_to_css", |b| {
        let controller =
            ThemeController::new(StyleTable::new(), ThemeState::new(ThemeId::Custom, Rgb::new(139, 92, 246)))
                .unwrap();
        b.iter(|| black_box(controller.surface().to_css()))
    });
}

criterion_group!(benches, benchmark_generate_palette, benchmark_theme_switch);
criterion_main!(benches);
