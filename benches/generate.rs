//! Benchmarks for colour conversion and CSS generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use swatch::{Colour, ColourStop, GlassEffect, Gradient, GradientKind, PaletteSpec, Scheme};

// -- Conversion benchmarks --

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    group.bench_function("parse_hex", |b| {
        b.iter(|| Colour::from_hex(black_box("#3498db")).unwrap())
    });

    let colour = Colour::from_hex("#3498db").unwrap();
    group.bench_function("hex_to_hsl", |b| b.iter(|| black_box(colour).to_hsl()));

    let hsl = colour.to_hsl();
    group.bench_function("hsl_to_hex", |b| b.iter(|| black_box(hsl).to_colour()));

    group.finish();
}

// -- Generation benchmarks --

fn bench_palettes(c: &mut Criterion) {
    let mut group = c.benchmark_group("palettes");

    let base = Colour::from_hex("#3498db").unwrap();
    for scheme in Scheme::ALL {
        group.bench_function(scheme.name(), |b| {
            b.iter(|| {
                PaletteSpec::new(black_box(base), scheme, black_box(10))
                    .generate()
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_css(c: &mut Criterion) {
    let mut group = c.benchmark_group("css");

    let gradient = Gradient::new(
        GradientKind::Linear { angle: 90 },
        vec![
            ColourStop::new(Colour::from_hex("#ff5f6d").unwrap(), 0),
            ColourStop::new(Colour::from_hex("#ffc371").unwrap(), 100),
        ],
    )
    .unwrap();
    group.bench_function("gradient", |b| b.iter(|| black_box(&gradient).css()));

    let effect = GlassEffect::default();
    group.bench_function("glass", |b| b.iter(|| black_box(&effect).css().unwrap()));

    group.finish();
}

criterion_group!(benches, bench_conversion, bench_palettes, bench_css);
criterion_main!(benches);
