use criterion::{Criterion, black_box, criterion_group, criterion_main};
use macqr_icons::detector::LumaImage;
use macqr_icons::icons::{colorful, plain};
use macqr_icons::{EcLevel, QrEncoder, decode_matrix, scan_image};

fn bench_decode_matrix(c: &mut Criterion) {
    let symbol = QrEncoder::new(EcLevel::H).encode("macQR").unwrap();
    c.bench_function("decode_matrix_v1_h", |b| {
        b.iter(|| decode_matrix(black_box(&symbol.modules)))
    });

    let large = QrEncoder::new(EcLevel::M)
        .encode(&"https://example.com/macqr/".repeat(20))
        .unwrap();
    c.bench_function("decode_matrix_large", |b| {
        b.iter(|| decode_matrix(black_box(&large.modules)))
    });
}

fn bench_scan(c: &mut Criterion) {
    let icon = colorful::render("macQR").unwrap().as_image().clone();
    c.bench_function("luma_otsu_512", |b| {
        b.iter(|| LumaImage::from_rgba(black_box(&icon)))
    });
    c.bench_function("scan_colorful_512", |b| b.iter(|| scan_image(black_box(&icon))));

    let plain = image::DynamicImage::ImageLuma8(plain::resize(&plain::render("macQR").unwrap())).to_rgba8();
    c.bench_function("scan_plain_512", |b| b.iter(|| scan_image(black_box(&plain))));
}

criterion_group!(benches, bench_decode_matrix, bench_scan);
criterion_main!(benches);
