use std::io::Cursor;

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::error;

use crate::result::Result;
use crate::SteganoError;

/// Decodes a PNG into a pixel grid with 4 channels of 8 bits each.
///
/// Any other color model is refused rather than converted, a conversion would
/// not survive the round trip back into the carrier.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png).map_err(|e| {
        error!("Error decoding image: {e}");
        SteganoError::InvalidImageMedia(e)
    })?;

    match image {
        DynamicImage::ImageRgba8(image) => Ok(image),
        other => Err(SteganoError::UnsupportedColorModel(other.color())),
    }
}

/// Serializes a pixel grid as PNG into memory.
pub fn encode(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut writer = Cursor::new(Vec::new());
    image
        .write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError(e)
        })?;

    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;
    use image::RgbImage;

    #[test]
    fn should_keep_pixels_through_encode_and_decode() {
        let img = prepare_5x5_image();
        let bytes = encode(&img).expect("Cannot encode image");

        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(decode(&bytes).expect("Cannot decode image"), img);
    }

    #[test]
    fn should_refuse_images_without_alpha_channel() {
        let mut bytes = Cursor::new(Vec::new());
        RgbImage::new(4, 4)
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("Cannot encode rgb image");

        match decode(bytes.get_ref()) {
            Err(SteganoError::UnsupportedColorModel(image::ColorType::Rgb8)) => (),
            other => panic!("expected UnsupportedColorModel, got {other:?}"),
        }
    }

    #[test]
    fn should_refuse_data_that_is_no_png() {
        match decode(b"definitely not a png") {
            Err(SteganoError::InvalidImageMedia(_)) => (),
            other => panic!("expected InvalidImageMedia, got {other:?}"),
        }
    }
}
