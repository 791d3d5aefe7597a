use tracing::info;

/// Paste an RGB image centered onto a black canvas of the target size.
/// Offsets use integer division; an odd remainder leaves the extra pixel
/// on the trailing side.
pub fn add_padding_to_target(
    rgb: &[u8],
    cols: usize,
    rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if cols > target_cols || rows > target_rows {
        return Err(format!(
            "Cannot pad {}x{} into smaller target {}x{}",
            cols, rows, target_cols, target_rows
        )
        .into());
    }

    let pad_cols = (target_cols - cols) / 2;
    let pad_rows = (target_rows - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = vec![0u8; target_cols * target_rows * 3];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * cols * 3;
        let dst_offset = ((row + pad_rows) * target_cols + pad_cols) * 3;
        let src_slice = &rgb[src_offset..src_offset + cols * 3];
        let dst_slice = &mut padded[dst_offset..dst_offset + cols * 3];
        dst_slice.copy_from_slice(src_slice);
    }
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], cols: usize, x: usize, y: usize) -> [u8; 3] {
        let off = (y * cols + x) * 3;
        [buf[off], buf[off + 1], buf[off + 2]]
    }

    #[test]
    fn pads_with_black_bars_top_and_bottom() {
        let content = vec![255u8; 4 * 2 * 3];
        let padded = add_padding_to_target(&content, 4, 2, 4, 6).unwrap();
        assert_eq!(padded.len(), 4 * 6 * 3);

        // rows 0-1 and 4-5 are bars, rows 2-3 carry content
        for y in [0, 1, 4, 5] {
            for x in 0..4 {
                assert_eq!(pixel(&padded, 4, x, y), [0, 0, 0]);
            }
        }
        for y in [2, 3] {
            for x in 0..4 {
                assert_eq!(pixel(&padded, 4, x, y), [255, 255, 255]);
            }
        }
    }

    #[test]
    fn odd_remainder_goes_to_trailing_side() {
        let content = vec![255u8; 2 * 1 * 3];
        let padded = add_padding_to_target(&content, 2, 1, 5, 1).unwrap();
        // pad_cols = (5 - 2) / 2 = 1: one leading bar column, two trailing
        assert_eq!(pixel(&padded, 5, 0, 0), [0, 0, 0]);
        assert_eq!(pixel(&padded, 5, 1, 0), [255, 255, 255]);
        assert_eq!(pixel(&padded, 5, 2, 0), [255, 255, 255]);
        assert_eq!(pixel(&padded, 5, 3, 0), [0, 0, 0]);
        assert_eq!(pixel(&padded, 5, 4, 0), [0, 0, 0]);
    }

    #[test]
    fn equal_dimensions_pass_through() {
        let content: Vec<u8> = (0..3 * 2 * 3).map(|v| v as u8).collect();
        let padded = add_padding_to_target(&content, 3, 2, 3, 2).unwrap();
        assert_eq!(padded, content);
    }

    #[test]
    fn oversized_content_is_rejected() {
        let content = vec![0u8; 4 * 4 * 3];
        assert!(add_padding_to_target(&content, 4, 4, 3, 4).is_err());
    }
}
