pub mod bit_plane_codec;
pub mod decoder;
pub mod encoder;
pub mod png;

pub use bit_plane_codec::BitPlaneCodec;
