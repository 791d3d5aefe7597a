//! Shared types and enums used across SMARTRESIZE.
//! Includes `ResolutionPreset`, `CandidateResolution`, `ConformMode`,
//! and `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A fixed (width, height) pair belonging to a preset's candidate set.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct CandidateResolution {
    pub width: u32,
    pub height: u32,
}

impl CandidateResolution {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl std::fmt::Display for CandidateResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ResolutionPreset {
    Small,
    Large,
}

impl ResolutionPreset {
    /// Candidate resolutions in canonical order: tall, wide, square.
    pub const fn candidates(&self) -> [CandidateResolution; 3] {
        match self {
            ResolutionPreset::Small => [
                CandidateResolution::new(480, 852),
                CandidateResolution::new(852, 480),
                CandidateResolution::new(512, 512),
            ],
            ResolutionPreset::Large => [
                CandidateResolution::new(720, 1280),
                CandidateResolution::new(1280, 720),
                CandidateResolution::new(768, 768),
            ],
        }
    }
}

// Manual implementation for ValueEnum since the CLI names ("480p", "720p")
// differ from the variant names
impl clap::ValueEnum for ResolutionPreset {
    fn value_variants<'a>() -> &'a [Self] {
        &[ResolutionPreset::Small, ResolutionPreset::Large]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            ResolutionPreset::Small => clap::builder::PossibleValue::new("480p").alias("small"),
            ResolutionPreset::Large => clap::builder::PossibleValue::new("720p").alias("large"),
        })
    }
}

impl std::fmt::Display for ResolutionPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionPreset::Small => write!(f, "480p"),
            ResolutionPreset::Large => write!(f, "720p"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ConformMode {
    /// Letterbox: fit inside the target, pad the remainder with black
    Pad,
    /// Fill the target, trim the overflow symmetrically
    Crop,
}

impl std::fmt::Display for ConformMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConformMode::Pad => write!(f, "Pad"),
            ConformMode::Crop => write!(f, "Crop"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Jpeg, // Lossy, preview only
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "PNG"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
        }
    }
}
