use tracing::info;

use smartresize::core::params::ProcessingParams;
use smartresize::{process_directory_to_path, process_image_to_path};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = ProcessingParams {
        format: args.format,
        preset: args.preset,
        mode: args.mode,
        quality: args.quality,
        sidecar: args.sidecar,
    };

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch processing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, true)?;

        info!(
            "Batch complete: processed={} skipped={} errors={}",
            report.processed, report.skipped, report.errors
        );
        Ok(())
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        if image::ImageFormat::from_path(&input).is_err() {
            return Err(AppError::UnsupportedInput {
                path: input.display().to_string(),
            }
            .into());
        }

        process_image_to_path(&input, &output, &params)?;

        info!("Successfully processed: {:?} -> {:?}", input, output);
        Ok(())
    }
}
