use image::RgbaImage;
use log::debug;

use super::decoder::PayloadChannels;
use super::encoder::PayloadChannelsMut;
use super::png;
use crate::bits::{bits_to_byte, byte_to_bits, BITS_PER_BYTE};
use crate::error::Endpoint;
use crate::geometry::{in_bounds, offset_from_origin, point_at_offset, Point, Rect};
use crate::media::{BitPosition, CodecOptions, HideBit, UnveilBit};
use crate::result::Result;
use crate::SteganoError;

/// Hides one message bit per pixel in a single bit of the red channel.
///
/// A message of `n` bytes occupies the `8 * n` pixels following `start` in row-major
/// order. [`BitPlaneCodec::hide`] returns the point right after the last of these pixels,
/// it is needed together with `start` to unveil the message again.
///
/// ## Example of usage
/// ```rust
/// use image::RgbaImage;
/// use bitsteg_core::{BitPlaneCodec, Point};
///
/// let mut image = RgbaImage::new(32, 32);
/// let codec = BitPlaneCodec::new();
///
/// let start = Point::new(4, 2);
/// let end = codec.hide(&mut image, b"Hello", start).expect("Cannot hide message");
/// let message = codec.unveil(&image, start, end).expect("Cannot unveil message");
///
/// assert_eq!(message, b"Hello");
/// ```
#[derive(Debug, Default, Clone)]
pub struct BitPlaneCodec {
    options: CodecOptions,
}

impl BitPlaneCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    pub fn bit_position(&self) -> BitPosition {
        self.options.bit_position
    }

    /// Selects the bit of the red channel that carries the message, `0` to `7`.
    ///
    /// On error the previous bit position stays in place.
    pub fn set_bit_position(&mut self, n: u8) -> Result<&mut Self> {
        self.options.bit_position = BitPosition::try_from(n)?;
        Ok(self)
    }

    /// The point right after a message of `message_len` bytes that starts at `start`.
    ///
    /// Nothing is validated, the point can be outside of `bounds`.
    pub fn end_point(bounds: &Rect, start: Point, message_len: usize) -> Point {
        point_at_offset(bounds, start, message_len as u64 * BITS_PER_BYTE as u64)
    }

    /// Writes `message` into the carrier pixels starting at `start` and returns the end point.
    ///
    /// The carrier is left untouched on error.
    pub fn hide(&self, carrier: &mut RgbaImage, message: &[u8], start: Point) -> Result<Point> {
        if message.is_empty() {
            return Err(SteganoError::EmptyMessage);
        }

        let bounds = Rect::from_dimensions(carrier.width(), carrier.height());
        let end = Self::end_point(&bounds, start, message.len());
        ensure_in_bounds(&bounds, Endpoint::Start, start)?;
        ensure_in_bounds(&bounds, Endpoint::End, end)?;

        let position = self.bit_position();
        debug!(
            "hiding {} bytes in bit {position} from {start} to {end}",
            message.len()
        );

        let bits = message.iter().flat_map(|byte| byte_to_bits(*byte));
        for (channel, bit) in PayloadChannelsMut::new(carrier, start, end).zip(bits) {
            channel.hide_bit(bit, position);
        }

        Ok(end)
    }

    /// Reads the message hidden in the carrier pixels in `[start, end)`.
    ///
    /// Pixels that do not complete a whole byte at the end of the range are ignored.
    pub fn unveil(&self, carrier: &RgbaImage, start: Point, end: Point) -> Result<Vec<u8>> {
        ensure_order(start, end)?;

        let bounds = Rect::from_dimensions(carrier.width(), carrier.height());
        ensure_in_bounds(&bounds, Endpoint::Start, start)?;
        ensure_in_bounds(&bounds, Endpoint::End, end)?;

        let position = self.bit_position();
        let bit_count =
            (offset_from_origin(&bounds, end) - offset_from_origin(&bounds, start)) as usize;
        debug!("unveiling {bit_count} bits in bit {position} from {start} to {end}");

        let mut message = Vec::with_capacity(bit_count / BITS_PER_BYTE);
        let mut bits = [false; BITS_PER_BYTE];
        let mut visited = 0;
        for channel in PayloadChannels::new(carrier, start, end) {
            let slot = visited % BITS_PER_BYTE;
            bits[slot] = channel.unveil_bit(position);
            if slot == BITS_PER_BYTE - 1 {
                message.push(bits_to_byte(&bits)?);
            }
            visited += 1;
        }

        let trailing = visited % BITS_PER_BYTE;
        if trailing != 0 {
            debug!("discarding {trailing} trailing bits that do not complete a byte");
        }

        Ok(message)
    }

    /// Hides `message` in the PNG `image` starting at `start`.
    ///
    /// Returns the end point of the message and the new PNG.
    pub fn encode(&self, image: &[u8], message: &[u8], start: Point) -> Result<(Point, Vec<u8>)> {
        if message.is_empty() {
            return Err(SteganoError::EmptyMessage);
        }

        let mut carrier = png::decode(image)?;
        let end = self.hide(&mut carrier, message, start)?;

        Ok((end, png::encode(&carrier)?))
    }

    /// Unveils the message hidden in the PNG `image` between `start` and `end`.
    pub fn decode(&self, image: &[u8], start: Point, end: Point) -> Result<Vec<u8>> {
        ensure_order(start, end)?;

        let carrier = png::decode(image)?;
        self.unveil(&carrier, start, end)
    }
}

fn ensure_order(start: Point, end: Point) -> Result<()> {
    if !start.precedes(&end) {
        return Err(SteganoError::InvalidOrder { start, end });
    }
    Ok(())
}

fn ensure_in_bounds(bounds: &Rect, endpoint: Endpoint, point: Point) -> Result<()> {
    if !in_bounds(bounds, point) {
        return Err(SteganoError::OutOfBounds {
            endpoint,
            point,
            bounds: *bounds,
        });
    }
    Ok(())
}
