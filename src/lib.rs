//! ckshow library
//!
//! Inspects model checkpoint files (`.safetensors`, `.gguf`): lists the
//! tensors they contain, renders their metadata, and shows the tensor
//! namespace as a hierarchy.
//!
//! The crate is split into three layers:
//! - [`cli`]: the dependency-free command line core (argument parsing,
//!   table rendering, colors, stderr diagnostics)
//! - [`ckpt`]: the checkpoint facade (format readers, the tensor tree)
//! - [`commands`]: the subcommands wired together by [`run`]
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use ckshow::cli::args::Args;
//! use ckshow::cli::colors::ColorScheme;
//!
//! let args = Args::parse_from(&["model.safetensors".to_string()]).unwrap();
//! ckshow::run(&args, &ColorScheme::plain(), &mut io::stdout()).unwrap();
//! ```

pub mod ckpt;
pub mod cli;
pub mod commands;
pub mod version;

use std::io::Write;
use std::path::Path;

use cli::args::{Args, Command};
use cli::colors::ColorScheme;

// Re-exports for public API
pub use ckpt::{ReadError, TensorMap};

/// An error that should abort the run with exit code 1.
///
/// Carries the user-facing message plus optional hint lines; the binary
/// decides how to print them.
#[derive(Debug)]
pub struct FatalError {
    pub message: String,
    pub hints: Vec<String>,
}

impl FatalError {
    pub fn new(message: impl Into<String>) -> Self {
        FatalError {
            message: message.into(),
            hints: Vec::new(),
        }
    }

    pub fn with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        FatalError {
            message: message.into(),
            hints: vec![hint.into()],
        }
    }
}

impl From<ReadError> for FatalError {
    fn from(error: ReadError) -> Self {
        FatalError::new(error.to_string())
    }
}

impl From<std::io::Error> for FatalError {
    fn from(error: std::io::Error) -> Self {
        FatalError::new(format!("Could not write output: {error}"))
    }
}

/// Load the requested file and execute the selected command.
///
/// `--help` and `--version` are handled by the binary before this runs.
pub fn run(args: &Args, colors: &ColorScheme, out: &mut impl Write) -> Result<(), FatalError> {
    if args.filename.is_empty() {
        return Err(FatalError::with_hint(
            "No file provided. Please specify a .safetensors or .gguf file.",
            "To get help on how to use this tool, run: ckshow --help",
        ));
    }

    let map = TensorMap::from_file(Path::new(&args.filename))?;

    match args.command {
        Command::ListMetadata => {
            if !args.name.is_empty() {
                match commands::metadata::run_single(out, &map, &args.name)? {
                    Some(()) => Ok(()),
                    None => Err(FatalError::new(format!(
                        "Metadata key '{}' not found.",
                        args.name
                    ))),
                }
            } else {
                commands::metadata::run(out, &map, args, colors)?;
                Ok(())
            }
        }
        Command::ListTensors => {
            if !args.name.is_empty() {
                cli::messages::warning(
                    colors,
                    "'--name' only applies to metadata listings and was ignored.",
                );
            }
            commands::tensors::run(out, &map, args, colors)?;
            Ok(())
        }
    }
}
