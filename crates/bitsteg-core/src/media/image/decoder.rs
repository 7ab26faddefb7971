use image::buffer::EnumeratePixels;
use image::{Rgba, RgbaImage};

use crate::geometry::{offset_from_origin, Point, Rect};

/// Read only counterpart of [`PayloadChannelsMut`](super::encoder::PayloadChannelsMut)
///
/// Yields the value of the payload carrying color channel of every pixel in `[start, end)`.
pub struct PayloadChannels<'i> {
    i: u64,
    skip: u64,
    end: Point,
    exhausted: bool,
    pixels: EnumeratePixels<'i, Rgba<u8>>,
}

impl<'i> PayloadChannels<'i> {
    /// `start` and `end` have to be validated against the image beforehand
    pub fn new(carrier: &'i RgbaImage, start: Point, end: Point) -> Self {
        let bounds = Rect::from_dimensions(carrier.width(), carrier.height());
        Self {
            i: 0,
            skip: offset_from_origin(&bounds, start),
            end,
            exhausted: false,
            pixels: carrier.enumerate_pixels(),
        }
    }
}

impl<'i> Iterator for PayloadChannels<'i> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let Some((x, y, pixel)) = self.pixels.next() else {
                self.exhausted = true;
                break;
            };
            if Point::new(x as i64, y as i64) == self.end {
                self.exhausted = true;
                break;
            }

            let i = self.i;
            self.i += 1;
            if i < self.skip {
                continue;
            }

            return pixel.0.first().copied();
        }

        None
    }
}

#[cfg(test)]
mod decoder_tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;

    #[test]
    fn it_should_iterate_row_major_over_the_payload_region() {
        let img = prepare_5x5_image();
        let (width, _) = img.dimensions();

        let given: Vec<u8> =
            PayloadChannels::new(&img, Point::new(2, 0), Point::new(2, 3)).collect();

        assert_eq!(given.len(), 3 * width as usize);
        for (n, color) in given.iter().enumerate() {
            let linear = n as u32 + 2;
            let expected = img.get_pixel(linear % width, linear / width).0[0];
            assert_eq!(*color, expected, "the ({n}+1)-th color was wrong");
        }
    }

    #[test]
    fn it_should_run_to_the_image_end_when_end_is_never_met() {
        let img = prepare_5x5_image();

        assert_eq!(
            PayloadChannels::new(&img, Point::new(0, 4), Point::new(5, 4)).count(),
            5
        );
    }
}
