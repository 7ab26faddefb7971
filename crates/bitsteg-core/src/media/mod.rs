pub mod codec_options;
pub mod image;
mod primitives;

pub use codec_options::{BitPosition, CodecOptions};
pub use primitives::*;
