//! I/O layer for decoding input images and writing conformed outputs.
//! Provides the `reader` for any `image`-crate-supported input and
//! `writers` for PNG/JPEG outputs and metadata sidecars.
pub mod reader;
pub use reader::{DecodedImage, read_rgb_image};

pub mod writers;
