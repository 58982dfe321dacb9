use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{ColourSchemeKind, RenderRequest, Viewport, encode_png, render_viewport};
use std::hint::black_box;

fn request(quality: u32) -> RenderRequest {
    RenderRequest {
        id: 1,
        viewport: Viewport::default(),
        width: 800,
        height: 600,
        max_iterations: 100,
        quality,
        colour_scheme: ColourSchemeKind::default(),
    }
}

fn bench_render_quality(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_viewport");
    group.sample_size(20);

    // 1 is the settled render, 2 is what drag and zoom frames use.
    for quality in [1, 2] {
        let request = request(quality);

        group.bench_with_input(BenchmarkId::new("800x600", quality), &request, |b, request| {
            b.iter(|| render_viewport(black_box(request)))
        });
    }

    group.finish();
}

fn bench_png_export(c: &mut Criterion) {
    let buffer = render_viewport(&request(1));

    c.bench_function("encode_png_800x600", |b| {
        b.iter(|| encode_png(black_box(&buffer)))
    });
}

criterion_group!(benches, bench_render_quality, bench_png_export);
criterion_main!(benches);
