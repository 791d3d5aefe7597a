#![doc = r#"
SMARTRESIZE — an aspect-ratio-aware image conformer.

This crate picks an output resolution for an arbitrary input image by matching
its aspect ratio against a small fixed set of model-recommended resolutions,
then conforms the image to exactly that resolution by letterbox padding or
centered cropping. All resampling is uniform Lanczos3, so content is never
stretched. It powers the SMARTRESIZE CLI and can be embedded in your own Rust
applications.

Stability
---------
The public library API is experimental in initial releases. It is robust for
the CLI workflows it ships with, but may evolve as the crate stabilizes.
Breaking changes can occur.

Presets
-------
Two resolution families are supported, each with a tall, a wide, and a square
candidate:

- `480p` (small): 480x852, 852x480, 512x512
- `720p` (large): 720x1280, 1280x720, 768x768

Selection minimizes the log-ratio distance `|ln(source_ar) - ln(candidate_ar)|`,
so reciprocal aspect ratios are treated symmetrically and extreme ratios land
on the tall/wide candidates rather than square.

Quick start: conform a file to a file
-------------------------------------
```rust,no_run
use std::path::Path;
use smartresize::{
    process_image_to_path,
    ConformMode, OutputFormat, ProcessingParams, ResolutionPreset,
};

fn main() -> smartresize::Result<()> {
    let params = ProcessingParams {
        format: OutputFormat::Png,
        preset: ResolutionPreset::Large,
        mode: ConformMode::Pad,
        quality: 90,
        sidecar: false,
    };

    process_image_to_path(
        Path::new("/data/frame.png"),
        Path::new("/out/frame_1280x720.png"),
        &params,
    )
}
```

Conform in-memory to `ConformedImage`
-------------------------------------
```rust
use smartresize::{conform_to_buffer, ConformMode, ResolutionPreset};

fn main() -> smartresize::Result<()> {
    let rgb = vec![0u8; 1000 * 500 * 3];
    let img = conform_to_buffer(&rgb, 1000, 500, ResolutionPreset::Large, ConformMode::Pad)?;

    // 1000x500 is wide, so the large preset selects 1280x720
    assert_eq!((img.width, img.height), (1280, 720));
    Ok(())
}
```

Selection only
--------------
```rust
use smartresize::{select_resolution, ResolutionPreset};

fn main() -> smartresize::Result<()> {
    let target = select_resolution(3248, 7876, ResolutionPreset::Large)?;
    assert_eq!((target.width, target.height), (720, 1280));
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use smartresize::{process_directory_to_path, ProcessingParams};

fn main() -> smartresize::Result<()> {
    let params = ProcessingParams::default();
    let report = process_directory_to_path(
        Path::new("/data/frames"),
        Path::new("/out"),
        &params,
        true, // continue_on_error
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Error handling
--------------
All public functions return `smartresize::Result<T>`; match on
`smartresize::Error` to handle specific cases, e.g. invalid dimensions or
image codec errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `ResolutionPreset`, `ConformMode`).
- [`io`] — image readers/writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{CandidateResolution, ConformMode, OutputFormat, ResolutionPreset};

// Core selection and conform primitives
pub use core::processing::conform::{ConformMeta, conform_rgb_image, conform_rgb_image_with_meta};
pub use core::processing::select::select_resolution;

// Readers
pub use io::reader::{DecodedImage, read_rgb_image};

// Selected writer helpers (keep low-level sidecar helpers public)
pub use io::writers::metadata::{create_conform_metadata_sidecar, extract_conform_fields};

// High-level API re-exports
pub use api::{
    BatchReport, ConformedImage, conform_to_buffer, process_directory_to_path,
    process_image_to_buffer, process_image_to_path,
};
