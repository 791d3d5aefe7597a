use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};

/// Uniform-scale dimensions that fit inside the target box (letterbox).
/// The scale is min(target/source) per axis; the rounded result never
/// exceeds the target and never collapses below 1 pixel.
pub fn calculate_fit_dimensions(
    source_cols: usize,
    source_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let scale = (target_cols as f64 / source_cols as f64)
        .min(target_rows as f64 / source_rows as f64);
    let new_cols = ((source_cols as f64 * scale).round() as usize).clamp(1, target_cols);
    let new_rows = ((source_rows as f64 * scale).round() as usize).clamp(1, target_rows);
    (new_cols, new_rows)
}

/// Uniform-scale dimensions that cover the target box entirely (fill).
/// The scale is max(target/source) per axis; the rounded result never
/// falls short of the target on either axis.
pub fn calculate_fill_dimensions(
    source_cols: usize,
    source_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let scale = (target_cols as f64 / source_cols as f64)
        .max(target_rows as f64 / source_rows as f64);
    let new_cols = ((source_cols as f64 * scale).round() as usize).max(target_cols);
    let new_rows = ((source_rows as f64 * scale).round() as usize).max(target_rows);
    (new_cols, new_rows)
}

/// Resample an interleaved RGB buffer with a Lanczos3 convolution.
pub fn resize_rgb_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}
