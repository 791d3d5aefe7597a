use std::path::Path;
use tracing::info;

use crate::core::processing::conform::conform_rgb_image_with_meta;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::metadata::create_conform_metadata_sidecar;
use crate::io::writers::png::write_rgb_png;
use crate::types::{CandidateResolution, ConformMode, OutputFormat};

/// Conform a decoded RGB image to the target resolution and write it to
/// disk in the requested format, optionally with a JSON geometry sidecar.
pub fn save_conformed_image(
    source: &[u8],
    source_cols: usize,
    source_rows: usize,
    output: &Path,
    format: OutputFormat,
    target: CandidateResolution,
    mode: ConformMode,
    quality: u8,
    sidecar: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (conformed, meta) =
        conform_rgb_image_with_meta(source, source_cols, source_rows, target, mode)?;

    let target_cols = target.width as usize;
    let target_rows = target.height as usize;

    match format {
        OutputFormat::Png => {
            write_rgb_png(output, target_cols, target_rows, &conformed)?;
            info!("save_conformed_image: PNG saved");
        }
        OutputFormat::Jpeg => {
            write_rgb_jpeg(output, target_cols, target_rows, &conformed, quality)?;
            info!("save_conformed_image: JPEG saved");
        }
    }

    if sidecar {
        create_conform_metadata_sidecar(output, source_cols, source_rows, target, mode, &meta)?;
    }

    Ok(())
}
