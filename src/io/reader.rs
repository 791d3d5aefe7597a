use std::path::Path;

use image::ImageReader;
use tracing::info;

use crate::error::{Error, Result};

/// Decoded 8-bit RGB image, interleaved row-major.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub rgb: Vec<u8>,
}

/// Decode an image file to 8-bit RGB. Alpha and higher bit depths are
/// converted down; the conform pipeline operates on RGB only.
pub fn read_rgb_image(input: &Path) -> Result<DecodedImage> {
    let decoded = ImageReader::open(input)?.decode()?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    info!("Decoded {:?}: {}x{}", input, width, height);

    Ok(DecodedImage {
        width: width as usize,
        height: height as usize,
        rgb: rgb.into_raw(),
    })
}
