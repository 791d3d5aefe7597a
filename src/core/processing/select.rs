use tracing::info;

use crate::error::{Error, Result};
use crate::types::{CandidateResolution, ResolutionPreset};

/// Pick the candidate resolution whose aspect ratio is closest to the
/// source's, measured in log space so that reciprocal ratios (2:1 vs 1:2)
/// are equally distant from square. Ties keep the earlier candidate in the
/// preset's (tall, wide, square) order.
pub fn select_resolution(
    source_width: u32,
    source_height: u32,
    preset: ResolutionPreset,
) -> Result<CandidateResolution> {
    if source_width == 0 || source_height == 0 {
        return Err(Error::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }

    let ratio = source_width as f64 / source_height as f64;
    let log_ratio = ratio.ln();

    let candidates = preset.candidates();
    let mut best = candidates[0];
    let mut best_distance = f64::INFINITY;
    for candidate in candidates {
        let distance = (log_ratio - candidate.aspect_ratio().ln()).abs();
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }

    info!(
        "Selected {} for {}x{} (aspect ratio {:.3}, preset {})",
        best, source_width, source_height, ratio, preset
    );

    Ok(best)
}
