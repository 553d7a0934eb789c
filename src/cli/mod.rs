//! Command line handling: argument parsing and terminal output.

pub mod args;
pub mod argument;
pub mod colors;
pub mod messages;
pub mod table;
