use std::fmt;

use image::{ColorType, ImageError};
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Names one of the two coordinates delimiting a payload region
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Coarse classification of a [`SteganoError`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller passed something that can never work, e.g. an empty message
    InvalidArgument,
    /// A coordinate lies outside the image
    OutOfBounds,
    /// The carrier could not be read or is not a supported image
    InvalidInput,
    /// The modified carrier could not be serialized or written
    OutputError,
}

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an attempt to hide a message without any bytes
    #[error("Message is zero length")]
    EmptyMessage,

    /// Represents a bit position outside of a byte
    #[error("Message bit out of bounds: got {0}, wanted 0-7 inclusive")]
    InvalidBitPosition(u8),

    /// Represents a bit sequence that cannot be packed into one byte
    #[error("Expected exactly 8 bits to assemble a byte, got {0}")]
    InvalidBitCount(usize),

    /// Represents a payload region whose start is not before its end
    #[error("Start point {start} does not precede end point {end}")]
    InvalidOrder { start: Point, end: Point },

    /// Represents a start or end coordinate that is not addressable in the carrier image
    #[error("The {endpoint} point {point} is out of bounds of the image {bounds}")]
    OutOfBounds {
        endpoint: Endpoint,
        point: Point,
        bounds: Rect,
    },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] ImageError),

    /// Represents a carrier image that is not made of 4 channels of 8 bits each
    #[error("Unsupported color model {0:?}, only 8-bit RGBA images can carry data")]
    UnsupportedColorModel(ColorType),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] ImageError),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("API Error: Missing {0} point")]
    PointNotSet(Endpoint),
}

impl SteganoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SteganoError::EmptyMessage
            | SteganoError::InvalidBitPosition(_)
            | SteganoError::InvalidBitCount(_)
            | SteganoError::InvalidOrder { .. }
            | SteganoError::CarrierNotSet
            | SteganoError::TargetNotSet
            | SteganoError::MissingMessage
            | SteganoError::PointNotSet(_) => ErrorKind::InvalidArgument,
            SteganoError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            SteganoError::InvalidImageMedia(_)
            | SteganoError::UnsupportedColorModel(_)
            | SteganoError::ReadError { .. } => ErrorKind::InvalidInput,
            SteganoError::ImageEncodingError(_) | SteganoError::WriteError { .. } => {
                ErrorKind::OutputError
            }
        }
    }
}
