//! High-level, ergonomic library API: conform images to files or in-memory
//! buffers, plus batch helpers for directories. Prefer using these
//! entrypoints over low-level processing modules when integrating SMARTRESIZE.
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::conform::conform_rgb_image_with_meta;
use crate::core::processing::save::save_conformed_image;
use crate::core::processing::select::select_resolution;
use crate::error::{Error, Result};
use crate::io::reader::read_rgb_image;
use crate::types::{CandidateResolution, ConformMode, OutputFormat, ResolutionPreset};

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct ConformedImage {
    pub width: usize,
    pub height: usize,
    pub target: CandidateResolution,
    pub rgb: Vec<u8>,
}

/// Select the target resolution for an RGB buffer and conform it in memory
/// (no disk I/O)
pub fn conform_to_buffer(
    rgb: &[u8],
    width: usize,
    height: usize,
    preset: ResolutionPreset,
    mode: ConformMode,
) -> Result<ConformedImage> {
    let target = select_resolution(width as u32, height as u32, preset)?;
    let (conformed, _meta) = conform_rgb_image_with_meta(rgb, width, height, target, mode)
        .map_err(|e| Error::external(e))?;

    Ok(ConformedImage {
        width: target.width as usize,
        height: target.height as usize,
        target,
        rgb: conformed,
    })
}

/// Decode an image file and conform it in memory
pub fn process_image_to_buffer(
    input: &Path,
    preset: ResolutionPreset,
    mode: ConformMode,
) -> Result<ConformedImage> {
    let decoded = read_rgb_image(input)?;
    conform_to_buffer(&decoded.rgb, decoded.width, decoded.height, preset, mode)
}

/// Decode, conform, and encode a single image file
pub fn process_image_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    let decoded = read_rgb_image(input)?;
    let target = select_resolution(decoded.width as u32, decoded.height as u32, params.preset)?;

    save_conformed_image(
        &decoded.rgb,
        decoded.width,
        decoded.height,
        output,
        params.format,
        target,
        params.mode,
        params.quality,
        params.sidecar,
    )
    .map_err(|e| Error::external(e))
}

/// Summary counters for a batch run
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

fn output_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Png => "png",
        OutputFormat::Jpeg => "jpg",
    }
}

/// Conform every decodable image file in `input_dir` into `output_dir`.
/// Each image is processed independently; with `continue_on_error` a
/// failing file is counted and the run moves on.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            info!("Skipping non-file entry: {:?}", path);
            report.skipped += 1;
            continue;
        }
        if image::ImageFormat::from_path(&path).is_err() {
            info!("Skipping unsupported file: {:?}", path);
            report.skipped += 1;
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidArgument {
                arg: "input",
                value: path.display().to_string(),
            })?;
        let output_name = format!("{}.{}", stem, output_extension(params.format));
        let output_path = output_dir.join(&output_name);

        info!("Processing: {:?} -> {:?}", path, output_path);

        match process_image_to_path(&path, &output_path, params) {
            Ok(()) => {
                info!("Successfully processed: {:?}", path);
                report.processed += 1;
            }
            Err(e) if continue_on_error => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn conform_to_buffer_returns_target_dimensions() {
        let rgb = vec![90u8; 1000 * 500 * 3];
        let conformed =
            conform_to_buffer(&rgb, 1000, 500, ResolutionPreset::Large, ConformMode::Pad).unwrap();
        assert_eq!(conformed.target, CandidateResolution::new(1280, 720));
        assert_eq!((conformed.width, conformed.height), (1280, 720));
        assert_eq!(conformed.rgb.len(), 1280 * 720 * 3);
    }

    #[test]
    fn conform_to_buffer_rejects_empty_dimensions() {
        let err =
            conform_to_buffer(&[], 0, 0, ResolutionPreset::Small, ConformMode::Crop).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn file_pipeline_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.png");
        let output = dir.path().join("output.png");

        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(239, 255, Rgb([10, 200, 30]));
        img.save(&input).unwrap();

        let params = ProcessingParams {
            preset: ResolutionPreset::Small,
            ..Default::default()
        };
        process_image_to_path(&input, &output, &params).unwrap();

        let conformed = image::open(&output).unwrap().to_rgb8();
        // 239x255 is near-square, so the small preset selects 512x512
        assert_eq!(conformed.dimensions(), (512, 512));
    }

    #[test]
    fn batch_processes_directory_independently() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir_all(&input_dir).unwrap();

        for (name, w, h) in [("a.png", 100u32, 60u32), ("b.png", 60, 100)] {
            let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
                ImageBuffer::from_pixel(w, h, Rgb([128, 128, 128]));
            img.save(input_dir.join(name)).unwrap();
        }
        fs::write(input_dir.join("notes.txt"), "not an image").unwrap();

        let params = ProcessingParams::default();
        let report = process_directory_to_path(&input_dir, &output_dir, &params, true).unwrap();

        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 0);
        assert!(output_dir.join("a.png").exists());
        assert!(output_dir.join("b.png").exists());
    }
}
