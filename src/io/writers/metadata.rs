use serde_json;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::core::processing::conform::ConformMeta;
use crate::types::{CandidateResolution, ConformMode};

/// Collect the conform geometry into JSON fields.
pub fn extract_conform_fields(
    source_cols: usize,
    source_rows: usize,
    target: CandidateResolution,
    mode: ConformMode,
    meta: &ConformMeta,
) -> HashMap<String, serde_json::Value> {
    let mut fields = HashMap::new();

    let num = |v: usize| serde_json::Value::Number(serde_json::Number::from(v as u64));

    fields.insert("source_width".to_string(), num(source_cols));
    fields.insert("source_height".to_string(), num(source_rows));
    fields.insert("target_width".to_string(), num(target.width as usize));
    fields.insert("target_height".to_string(), num(target.height as usize));
    fields.insert("resized_width".to_string(), num(meta.resized_cols));
    fields.insert("resized_height".to_string(), num(meta.resized_rows));
    fields.insert(
        "mode".to_string(),
        serde_json::Value::String(mode.to_string().to_lowercase()),
    );
    fields.insert(
        "resampling".to_string(),
        serde_json::Value::String("lanczos3".to_string()),
    );

    for (key, value) in [("scale_x", meta.scale_x), ("scale_y", meta.scale_y)] {
        if let Some(n) = serde_json::Number::from_f64(value) {
            fields.insert(key.to_string(), serde_json::Value::Number(n));
        }
    }

    let (left_key, top_key) = match mode {
        ConformMode::Pad => ("pad_left", "pad_top"),
        ConformMode::Crop => ("crop_left", "crop_top"),
    };
    fields.insert(left_key.to_string(), num(meta.offset_left));
    fields.insert(top_key.to_string(), num(meta.offset_top));

    fields
}

/// Create a sidecar metadata file describing how the output was conformed
pub fn create_conform_metadata_sidecar(
    output_path: &Path,
    source_cols: usize,
    source_rows: usize,
    target: CandidateResolution,
    mode: ConformMode,
    meta: &ConformMeta,
) -> Result<(), Box<dyn std::error::Error>> {
    let fields = extract_conform_fields(source_cols, source_rows, target, mode, meta);

    let sidecar_path = output_path.with_extension("json");

    let json_string = serde_json::to_string_pretty(&fields)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created conform metadata sidecar: {:?}", sidecar_path);
    Ok(())
}
