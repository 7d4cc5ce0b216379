use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use macqr_icons::icons::{colorful, modern, plain};
use macqr_icons::raster::resample::resize_rgba_lanczos;
use macqr_icons::{Canvas, CanvasMode};

fn bench_colorful(c: &mut Criterion) {
    c.bench_function("render_colorful_512", |b| {
        b.iter(|| colorful::render(black_box("macQR")))
    });
}

fn bench_modern(c: &mut Criterion) {
    c.bench_function("render_modern_512", |b| b.iter(modern::render));
}

fn bench_plain(c: &mut Criterion) {
    c.bench_function("render_plain_290", |b| {
        b.iter(|| plain::render(black_box("macQR")))
    });
    let symbol = plain::render("macQR").unwrap();
    c.bench_function("resize_plain_290_to_512", |b| {
        b.iter(|| plain::resize(black_box(&symbol)))
    });
}

fn bench_compositing(c: &mut Criterion) {
    let overlay = RgbaImage::from_fn(290, 290, |x, y| {
        if (x / 10 + y / 10) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    c.bench_function("resize_rgba_lanczos_290_to_300", |b| {
        b.iter(|| resize_rgba_lanczos(black_box(&overlay), 300, 300))
    });

    let resized = resize_rgba_lanczos(&overlay, 300, 300);
    c.bench_function("paste_masked_300_on_512", |b| {
        b.iter(|| {
            let mut canvas = Canvas::filled(CanvasMode::Rgb, 512, 512, Rgba([74, 144, 226, 255]));
            canvas.paste_masked(black_box(&resized), 106, 106);
            canvas
        })
    });
}

criterion_group!(benches, bench_colorful, bench_modern, bench_plain, bench_compositing);
criterion_main!(benches);
