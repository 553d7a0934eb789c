//! The subcommands behind the command line surface.

pub mod metadata;
pub mod tensors;
