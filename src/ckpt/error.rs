//! Errors produced while reading checkpoint files.

use std::io;

use thiserror::Error;

/// Failure to load a checkpoint file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found.")]
    FileNotFound,

    #[error("This is probably not a valid .safetensors or .gguf file.")]
    InvalidFormat,

    #[error("The file may be from an older or newer version of the format that this tool does not support.")]
    UnsupportedVersion,

    #[error("The file header may be corrupted, incomplete, or have other issues that prevent it from being read correctly.")]
    CorruptHeader,

    #[error("The file is missing some required data, which may indicate corruption or have other issues that prevent it from being read correctly.")]
    MissingData,

    #[error("Could not read the file: {0}")]
    Io(#[from] io::Error),
}
