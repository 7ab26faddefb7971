use bitsteg_core::{BitPlaneCodec, Point};
use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut img = RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x ^ y) as u8, x as u8, y as u8, 255])
        });
        let codec = BitPlaneCodec::new();
        let start = Point::new(17, 3);
        let end = codec
            .hide(&mut img, b"Hello World!", start)
            .expect("Cannot hide secret message");

        b.iter(|| {
            codec
                .unveil(&img, start, end)
                .expect("Failed to unveil 12 bytes");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
