use tracing::info;

use crate::core::processing::crop::crop_to_target;
use crate::core::processing::padding::add_padding_to_target;
use crate::core::processing::resize::{
    calculate_fill_dimensions, calculate_fit_dimensions, resize_rgb_image,
};
use crate::types::{CandidateResolution, ConformMode};

/// Geometry record of a conform run, for sidecar metadata.
#[derive(Debug, Clone, Copy)]
pub struct ConformMeta {
    pub resized_cols: usize,
    pub resized_rows: usize,
    pub scale_x: f64,
    pub scale_y: f64,
    /// Pad inset (Pad mode) or crop origin (Crop mode)
    pub offset_left: usize,
    pub offset_top: usize,
}

/// Conform an interleaved RGB buffer to exactly the target dimensions.
///
/// Both modes resample uniformly (Lanczos3), so content aspect ratio is
/// never distorted. `Pad` fits the image inside the target and letterboxes
/// the remainder with black; `Crop` fills the target and trims the
/// overflow symmetrically. A source already at the target size is returned
/// unchanged.
pub fn conform_rgb_image(
    rgb: &[u8],
    source_cols: usize,
    source_rows: usize,
    target: CandidateResolution,
    mode: ConformMode,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let (conformed, _meta) = conform_rgb_image_with_meta(rgb, source_cols, source_rows, target, mode)?;
    Ok(conformed)
}

pub fn conform_rgb_image_with_meta(
    rgb: &[u8],
    source_cols: usize,
    source_rows: usize,
    target: CandidateResolution,
    mode: ConformMode,
) -> Result<(Vec<u8>, ConformMeta), Box<dyn std::error::Error>> {
    if source_cols == 0 || source_rows == 0 {
        return Err(format!(
            "Source dimensions must be positive, got {}x{}",
            source_cols, source_rows
        )
        .into());
    }
    if target.width == 0 || target.height == 0 {
        return Err(format!("Target dimensions must be positive, got {}", target).into());
    }
    if rgb.len() != source_cols * source_rows * 3 {
        return Err(format!(
            "RGB buffer length {} does not match {}x{}",
            rgb.len(),
            source_cols,
            source_rows
        )
        .into());
    }

    let target_cols = target.width as usize;
    let target_rows = target.height as usize;

    // Already at the target size, skip resampling
    if source_cols == target_cols && source_rows == target_rows {
        let meta = ConformMeta {
            resized_cols: source_cols,
            resized_rows: source_rows,
            scale_x: 1.0,
            scale_y: 1.0,
            offset_left: 0,
            offset_top: 0,
        };
        return Ok((rgb.to_vec(), meta));
    }

    match mode {
        ConformMode::Pad => {
            let (new_cols, new_rows) =
                calculate_fit_dimensions(source_cols, source_rows, target_cols, target_rows);
            info!(
                "Fit resize: {}x{} -> {}x{} (target {})",
                source_cols, source_rows, new_cols, new_rows, target
            );
            let resized = resize_rgb_image(rgb, source_cols, source_rows, new_cols, new_rows)?;
            let padded = add_padding_to_target(&resized, new_cols, new_rows, target_cols, target_rows)?;
            let meta = ConformMeta {
                resized_cols: new_cols,
                resized_rows: new_rows,
                scale_x: new_cols as f64 / source_cols as f64,
                scale_y: new_rows as f64 / source_rows as f64,
                offset_left: (target_cols - new_cols) / 2,
                offset_top: (target_rows - new_rows) / 2,
            };
            Ok((padded, meta))
        }
        ConformMode::Crop => {
            let (new_cols, new_rows) =
                calculate_fill_dimensions(source_cols, source_rows, target_cols, target_rows);
            info!(
                "Fill resize: {}x{} -> {}x{} (target {})",
                source_cols, source_rows, new_cols, new_rows, target
            );
            let resized = resize_rgb_image(rgb, source_cols, source_rows, new_cols, new_rows)?;
            let cropped = crop_to_target(&resized, new_cols, new_rows, target_cols, target_rows)?;
            let meta = ConformMeta {
                resized_cols: new_cols,
                resized_rows: new_rows,
                scale_x: new_cols as f64 / source_cols as f64,
                scale_y: new_rows as f64 / source_rows as f64,
                offset_left: (new_cols - target_cols) / 2,
                offset_top: (new_rows - target_rows) / 2,
            };
            Ok((cropped, meta))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], cols: usize, x: usize, y: usize) -> [u8; 3] {
        let off = (y * cols + x) * 3;
        [buf[off], buf[off + 1], buf[off + 2]]
    }

    #[test]
    fn pad_letterboxes_wide_source() {
        let target = CandidateResolution::new(1280, 720);
        let source = vec![255u8; 1000 * 500 * 3];
        let (out, meta) =
            conform_rgb_image_with_meta(&source, 1000, 500, target, ConformMode::Pad).unwrap();

        assert_eq!(out.len(), 1280 * 720 * 3);
        assert_eq!((meta.resized_cols, meta.resized_rows), (1280, 640));
        assert_eq!((meta.offset_left, meta.offset_top), (0, 40));

        // 40-pixel black bars top and bottom, content in between
        for y in [0, 39, 680, 719] {
            assert_eq!(pixel(&out, 1280, 640, y), [0, 0, 0]);
        }
        for y in [40, 360, 679] {
            let px = pixel(&out, 1280, 640, y);
            assert!(px[0] > 200, "content row {y} is {px:?}");
        }
    }

    #[test]
    fn crop_fills_and_trims_wide_source() {
        let target = CandidateResolution::new(1280, 720);
        let source = vec![255u8; 1000 * 500 * 3];
        let (out, meta) =
            conform_rgb_image_with_meta(&source, 1000, 500, target, ConformMode::Crop).unwrap();

        assert_eq!(out.len(), 1280 * 720 * 3);
        assert_eq!((meta.resized_cols, meta.resized_rows), (1440, 720));
        assert_eq!((meta.offset_left, meta.offset_top), (80, 0));

        // No padding: every output pixel derives from (white) content
        for (x, y) in [(0, 0), (1279, 0), (640, 360), (0, 719), (1279, 719)] {
            let px = pixel(&out, 1280, x, y);
            assert!(px[0] > 200, "pixel ({x},{y}) is {px:?}");
        }
    }

    #[test]
    fn output_always_matches_target_dimensions() {
        let target = CandidateResolution::new(512, 512);
        for (w, h) in [(100, 700), (700, 100), (512, 512), (513, 511), (33, 33)] {
            for mode in [ConformMode::Pad, ConformMode::Crop] {
                let source = vec![128u8; w * h * 3];
                let out = conform_rgb_image(&source, w, h, target, mode).unwrap();
                assert_eq!(out.len(), 512 * 512 * 3);
            }
        }
    }

    #[test]
    fn source_at_target_size_is_untouched() {
        let target = CandidateResolution::new(512, 512);
        let source: Vec<u8> = (0..512usize * 512 * 3).map(|v| (v % 251) as u8).collect();
        for mode in [ConformMode::Pad, ConformMode::Crop] {
            let out = conform_rgb_image(&source, 512, 512, target, mode).unwrap();
            assert_eq!(out, source);
        }
    }

    #[test]
    fn upscaling_small_source_pads_to_target() {
        let target = CandidateResolution::new(768, 768);
        let source = vec![255u8; 100 * 50 * 3];
        let (out, meta) =
            conform_rgb_image_with_meta(&source, 100, 50, target, ConformMode::Pad).unwrap();
        assert_eq!(out.len(), 768 * 768 * 3);
        // scale = 7.68 on the wide axis, content 768x384 centered
        assert_eq!((meta.resized_cols, meta.resized_rows), (768, 384));
        assert_eq!((meta.offset_left, meta.offset_top), (0, 192));
        assert_eq!(pixel(&out, 768, 384, 0), [0, 0, 0]);
        assert!(pixel(&out, 768, 384, 384)[0] > 200);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let target = CandidateResolution::new(512, 512);
        let source = vec![0u8; 4 * 4 * 3];

        assert!(conform_rgb_image(&source, 0, 4, target, ConformMode::Pad).is_err());
        assert!(conform_rgb_image(&source, 4, 0, target, ConformMode::Crop).is_err());
        assert!(
            conform_rgb_image(&source, 4, 4, CandidateResolution::new(0, 512), ConformMode::Pad)
                .is_err()
        );
        // buffer length mismatch
        assert!(conform_rgb_image(&source, 5, 4, target, ConformMode::Pad).is_err());
    }
}
