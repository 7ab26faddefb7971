use std::fs;
use std::path::{Path, PathBuf};

use log::error;

use crate::error::Endpoint;
use crate::{BitPlaneCodec, CodecOptions, Point, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    start: Option<Point>,
    end: Option<Point>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they have to match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// The pixel region `[start, end)` the data was hidden in
    pub fn between<P: Into<Point>>(mut self, start: P, end: P) -> Self {
        self.start = Some(start.into());
        self.end = Some(end.into());
        self
    }

    /// Optionally the unveiled data is also written to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and returns the unveiled data
    pub fn execute(self) -> Result<Vec<u8>, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(start) = self.start else {
            return Err(SteganoError::PointNotSet(Endpoint::Start));
        };
        let Some(end) = self.end else {
            return Err(SteganoError::PointNotSet(Endpoint::End));
        };
        if !start.precedes(&end) {
            return Err(SteganoError::InvalidOrder { start, end });
        }

        let carrier = fs::read(&secret_media).map_err(|source| {
            error!("Error reading image {secret_media:?}: {source}");
            SteganoError::ReadError { source }
        })?;
        let message = BitPlaneCodec::with_options(self.options).decode(&carrier, start, end)?;

        if let Some(output_file) = self.output_file {
            fs::write(&output_file, &message).map_err(|source| {
                error!("Error writing file {output_file:?}: {source}");
                SteganoError::WriteError { source }
            })?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::media::BitPosition;
    use crate::test_utils::write_10x10_png;
    use crate::{CodecOptions, Point, SteganoError};

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = write_10x10_png(temp_dir.path());
        let secret_image = temp_dir.path().join("image-with-secret.png");
        let options = CodecOptions::default()
            .with_bit_position(BitPosition::try_from(7).expect("valid bit position"));

        let start = Point::new(8, 0);
        let end = crate::api::hide::prepare()
            .with_options(options)
            .with_message("Hi")
            .with_image(&carrier)
            .at(start)
            .with_output(&secret_image)
            .execute()
            .expect("Failed to hide message in image");

        let message = crate::api::unveil::prepare()
            .with_options(options)
            .from_secret_file(&secret_image)
            .between(start, end)
            .into_output_file(temp_dir.path().join("secret.bin"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(message, b"Hi");
        assert_eq!(
            std::fs::read(temp_dir.path().join("secret.bin")).expect("Failed to read file"),
            b"Hi"
        );
    }

    #[test]
    fn should_require_both_points() {
        let result = crate::api::unveil::prepare()
            .from_secret_file("some_random_file.png")
            .execute();

        assert!(matches!(result, Err(SteganoError::PointNotSet(_))));
    }

    #[test]
    fn should_check_the_order_before_reading_the_image() {
        let result = crate::api::unveil::prepare()
            .from_secret_file("some_random_file.png")
            .between(Point::new(3, 3), Point::new(3, 3))
            .execute();

        assert!(matches!(result, Err(SteganoError::InvalidOrder { .. })));
    }
}
