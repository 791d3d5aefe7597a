use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Unsupported input file: {path}")]
    UnsupportedInput { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
