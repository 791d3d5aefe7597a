use clap::Parser;
use std::path::PathBuf;

use smartresize::types::OutputFormat;
use smartresize::{ConformMode, ResolutionPreset};

#[derive(Parser)]
#[command(name = "smartresize", version, about = "SMARTRESIZE CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (png or jpeg)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// Resolution preset selecting the candidate target sizes (480p or 720p)
    #[arg(short = 'p', long, value_enum, default_value_t = ResolutionPreset::Small)]
    pub preset: ResolutionPreset,

    /// Conform mode: pad (letterbox with black bars) or crop (fill and trim)
    #[arg(short = 'm', long, value_enum, default_value_t = ConformMode::Pad)]
    pub mode: ConformMode,

    /// JPEG quality, 1-100 (ignored for PNG output)
    #[arg(short = 'q', long, default_value_t = 90)]
    pub quality: u8,

    /// Write a JSON sidecar describing the conform geometry
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when encountering errors
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
