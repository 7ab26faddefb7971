use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::{BitPlaneCodec, CodecOptions, Point, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<Vec<u8>>,
    message_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    start: Point,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.as_bytes().to_vec());
        self
    }

    pub fn with_message_bytes<B: Into<Vec<u8>>>(mut self, message: B) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The raw content of this file is hidden, it takes precedence over a message
    pub fn with_message_file<A: AsRef<Path>>(mut self, message_file: A) -> Self {
        self.message_file = Some(message_file.as_ref().to_path_buf());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// The first pixel that carries data, defaults to the image origin
    pub fn at<P: Into<Point>>(mut self, start: P) -> Self {
        self.start = start.into();
        self
    }

    /// Hides the message and writes the image to the output file.
    ///
    /// Returns the end point of the message, it is needed to unveil it again.
    /// Nothing is written if any step fails.
    pub fn execute(self) -> Result<Point, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let message = match (self.message_file, self.message) {
            (Some(file), _) => fs::read(&file).map_err(|source| {
                error!("Error reading message file {file:?}: {source}");
                SteganoError::ReadError { source }
            })?,
            (None, Some(message)) => message,
            (None, None) => return Err(SteganoError::MissingMessage),
        };
        if message.is_empty() {
            return Err(SteganoError::EmptyMessage);
        }

        let carrier = fs::read(&image).map_err(|source| {
            error!("Error reading image {image:?}: {source}");
            SteganoError::ReadError { source }
        })?;

        let codec = BitPlaneCodec::with_options(self.options);
        let (end, secret_image) = codec.encode(&carrier, &message, self.start)?;

        fs::write(&output, secret_image).map_err(|source| {
            error!("Error writing file {output:?}: {source}");
            SteganoError::WriteError { source }
        })?;
        debug!("message hidden in {output:?} from {} to {end}", self.start);

        Ok(end)
    }
}
