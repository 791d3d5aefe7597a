use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;
use crate::{ConformMode, ResolutionPreset};

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub format: OutputFormat,
    pub preset: ResolutionPreset,
    pub mode: ConformMode,
    /// JPEG quality (1-100); ignored for PNG output
    pub quality: u8,
    /// If true, write a JSON sidecar describing the conform geometry
    pub sidecar: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            preset: ResolutionPreset::Small,
            mode: ConformMode::Pad,
            quality: 90,
            sidecar: false,
        }
    }
}
