// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the colorbook-lineart pipeline. Runs the full
// decode → stages → encode path on a synthetic photo-like image, with and
// without the optional stages.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use colorbook_core::settings::{ProcessingConfig, Symmetry};
use colorbook_lineart::process;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A 256x256 RGB image: gradient background with a dark disc, encoded as PNG.
fn synthetic_source() -> Vec<u8> {
    let size = 256u32;
    let img = RgbImage::from_fn(size, size, |x, y| {
        let dx = x as i32 - 128;
        let dy = y as i32 - 110;
        if dx * dx + dy * dy < 60 * 60 {
            Rgb([25, 30, 70])
        } else {
            let shade = (100 + x / 4) as u8;
            Rgb([shade, shade, 150])
        }
    });
    let mut buffer = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("encode benchmark fixture");
    buffer
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_pipeline(c: &mut Criterion) {
    let source = synthetic_source();

    let plain = ProcessingConfig::new(3, 50, false, Symmetry::None);
    c.bench_function("lineart process (256x256, plain)", |b| {
        b.iter(|| black_box(process(black_box(&source), &plain)))
    });

    let full = ProcessingConfig::new(3, 50, true, Symmetry::Both);
    c.bench_function("lineart process (256x256, flatten + both)", |b| {
        b.iter(|| black_box(process(black_box(&source), &full)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
