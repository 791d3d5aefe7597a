use tracing::info;

/// Cut a centered window of the target size out of an RGB image.
/// The crop origin uses integer division; an odd overflow trims the extra
/// pixel from the trailing side.
pub fn crop_to_target(
    rgb: &[u8],
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if cols < target_cols || rows < target_rows {
        return Err(format!(
            "Cannot crop {}x{} to larger target {}x{}",
            cols, rows, target_cols, target_rows
        )
        .into());
    }

    let crop_cols = (cols - target_cols) / 2;
    let crop_rows = (rows - target_rows) / 2;

    info!(
        "Cropping: cols={}, rows={}, crop_cols={}, crop_rows={}",
        cols, rows, crop_cols, crop_rows
    );

    let mut cropped = vec![0u8; target_cols * target_rows * 3];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..target_rows {
        let src_offset = ((row + crop_rows) * cols + crop_cols) * 3;
        let dst_offset = row * target_cols * 3;
        let src_slice = &rgb[src_offset..src_offset + target_cols * 3];
        let dst_slice = &mut cropped[dst_offset..dst_offset + target_cols * 3];
        dst_slice.copy_from_slice(src_slice);
    }
    Ok(cropped)
}
