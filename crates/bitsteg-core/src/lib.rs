//! # Bitsteg Core API
//!
//! Hides raw bytes in one chosen bit of the red channel of PNG images, one bit per pixel.
//! A message occupies a row-major run of pixels `[start, end)`, where `start` is picked by
//! the caller and `end` is returned by the hiding step. Both are needed to unveil the
//! message again, nothing about the message is stored inside the image.
//!
//! The building blocks are
//! - [`BitPlaneCodec`][codec] for hiding in and unveiling from pixel grids or PNG bytes
//! - [`geometry`] for the pixel addressing and validation
//! - [`bits`] for splitting bytes into bits and back
//! - [`api`] for working with image files
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use bitsteg_core::Point;
//! use image::RgbaImage;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = temp_dir.path().join("carrier-image.png");
//! RgbaImage::new(64, 64).save(&carrier).expect("Failed to create carrier image");
//!
//! let end = bitsteg_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .at(Point::new(8, 10))          // the first pixel carrying data
//!     .with_image(&carrier)
//!     .with_output(temp_dir.path().join("image-with-a-message-inside.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! assert_eq!(end.to_string(), "48,11");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust
//! use bitsteg_core::Point;
//! use image::RgbaImage;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let secret_image = temp_dir.path().join("image-with-a-message-inside.png");
//! RgbaImage::new(64, 64).save(&secret_image).expect("Failed to create image");
//!
//! let message = bitsteg_core::api::unveil::prepare()
//!     .from_secret_file(&secret_image)
//!     .between(Point::new(0, 0), Point::new(16, 0))
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, [0u8, 0]);
//! ```
//!
//! [codec]: ./struct.BitPlaneCodec.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bits;
pub mod error;
pub mod geometry;
pub mod media;
pub mod result;

pub use crate::error::{ErrorKind, SteganoError};
pub use crate::geometry::{Point, Rect};
pub use crate::media::image::BitPlaneCodec;
pub use crate::media::{BitPosition, CodecOptions};
pub use crate::result::Result;
