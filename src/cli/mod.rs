//! Command Line Interface (CLI) layer for SMARTRESIZE.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! processing flows. It wires user-provided options to the underlying
//! library functionality exposed via `smartresize::api`.
//!
//! If you are embedding SMARTRESIZE into another application, prefer using
//! the high-level `smartresize::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
