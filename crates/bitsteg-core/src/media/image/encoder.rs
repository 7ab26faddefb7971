use image::buffer::EnumeratePixelsMut;
use image::{Rgba, RgbaImage};

use crate::geometry::{offset_from_origin, Point, Rect};

/// Mutable access to the payload carrying color channel of every pixel in `[start, end)`
///
/// The pixels are enumerated row-major from the image origin, every visited pixel counts
/// towards the absolute index, the ones before `start` are skipped.
/// The iteration stops at `end` without yielding it.
/// Bytes are framed relative to `start`, the first yielded channel carries the first bit.
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use bitsteg_core::geometry::Point;
/// use bitsteg_core::media::image::encoder::PayloadChannelsMut;
///
/// let mut image = RgbaImage::new(4, 4);
/// for channel in PayloadChannelsMut::new(&mut image, Point::new(2, 0), Point::new(1, 1)) {
///     *channel = 0xff;
/// }
///
/// assert_eq!(image.get_pixel(1, 0).0, [0, 0, 0, 0]);
/// assert_eq!(image.get_pixel(2, 0).0, [0xff, 0, 0, 0]);
/// assert_eq!(image.get_pixel(0, 1).0, [0xff, 0, 0, 0]);
/// assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0, 0]);
/// ```
pub struct PayloadChannelsMut<'a> {
    i: u64,
    skip: u64,
    end: Point,
    exhausted: bool,
    pixels: EnumeratePixelsMut<'a, Rgba<u8>>,
}

impl<'a> PayloadChannelsMut<'a> {
    /// `start` and `end` have to be validated against the image beforehand
    pub fn new(carrier: &'a mut RgbaImage, start: Point, end: Point) -> Self {
        let bounds = Rect::from_dimensions(carrier.width(), carrier.height());
        Self {
            i: 0,
            skip: offset_from_origin(&bounds, start),
            end,
            exhausted: false,
            pixels: carrier.enumerate_pixels_mut(),
        }
    }
}

impl<'a> Iterator for PayloadChannelsMut<'a> {
    type Item = &'a mut u8;

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

            return pixel.0.first_mut();
        }

        None
    }
}
