use image::{ImageBuffer, Rgb};
use std::path::Path;

pub fn write_rgb_png(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(cols as u32, rows as u32, rgb_data.to_vec())
            .ok_or("RGB buffer length does not match image dimensions")?;
    buffer.save_with_format(output, image::ImageFormat::Png)?;
    Ok(())
}
