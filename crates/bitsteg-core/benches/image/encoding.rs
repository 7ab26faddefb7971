use bitsteg_core::{BitPlaneCodec, Point};
use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = RgbaImage::from_fn(512, 512, |x, y| {
            image::Rgba([(x ^ y) as u8, x as u8, y as u8, 255])
        });
        let codec = BitPlaneCodec::new();
        let secret_message = b"Hello World!";

        b.iter(|| {
            codec
                .hide(&mut plain_image, &secret_message[..], Point::new(17, 3))
                .expect("Cannot hide secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
