use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_graymap::GrayImage;
use rust_graymap::utils::binarization::{grayscale_to_binary, to_binary};

fn gradient(width: usize, height: usize) -> Vec<u8> {
    (0..width * height).map(|i| (i % 256) as u8).collect()
}

fn bench_to_binary_small(c: &mut Criterion) {
    let gray = GrayImage::new(100, 100, gradient(100, 100)).unwrap();
    c.bench_function("to_binary_100x100", |b| {
        b.iter(|| to_binary(black_box(&gray), black_box(128)))
    });
}

fn bench_to_binary_medium(c: &mut Criterion) {
    let gray = GrayImage::new(640, 480, gradient(640, 480)).unwrap();
    c.bench_function("to_binary_640x480", |b| {
        b.iter(|| to_binary(black_box(&gray), black_box(128)))
    });
}

fn bench_grayscale_to_binary_medium(c: &mut Criterion) {
    let gray = gradient(640, 480);
    c.bench_function("grayscale_to_binary_640x480", |b| {
        b.iter(|| grayscale_to_binary(black_box(&gray), black_box(128)))
    });
}

criterion_group!(
    benches,
    bench_to_binary_small,
    bench_to_binary_medium,
    bench_grayscale_to_binary_medium
);
criterion_main!(benches);
