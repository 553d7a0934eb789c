//! Command line arguments for ckshow.
//!
//! The parse loop builds one [`Argument`] per raw token and maps recognized
//! names onto the [`Args`] settings. Usage errors (an unknown option, a
//! value supplied to a flag that takes none, more than one file) are
//! reported as `Err(String)`; the caller decides how to fail.

use std::env;

use crate::cli::argument::Argument;
use crate::cli::colors::ColorMode;

/// What the tool should do with the loaded checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// List the tensors in the file (default).
    #[default]
    ListTensors,
    /// List the metadata entries instead.
    ListMetadata,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable, column-aligned, optionally colorized (default).
    #[default]
    Human,
    /// Plain columns, easy to consume from scripts.
    Plain,
    /// JSON.
    Json,
}

/// Parsed command line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command to execute.
    pub command: Command,
    /// The checkpoint file to read.
    pub filename: String,
    /// Metadata key to print (with `--metadata`).
    pub name: String,
    /// Only show tensors whose name starts with this prefix.
    pub prefix: String,
    /// Group-expansion depth of the tree view; 0 expands everything.
    pub depth: usize,
    /// When to color the output.
    pub color: ColorMode,
    /// Output format.
    pub format: Format,
    /// Print usage and exit.
    pub help: bool,
    /// Print version information and exit.
    pub version: bool,
}

impl Args {
    /// Parse the process's command line arguments.
    ///
    /// Also honors the `NO_COLOR` environment variable; explicit `--color`
    /// flags still override it.
    pub fn parse() -> Result<Self, String> {
        let argv: Vec<String> = env::args().skip(1).collect();
        let mut args = Args::default();
        if env::var_os("NO_COLOR").is_some() {
            args.color = ColorMode::Never;
        }
        args.parse_tokens(&argv)?;
        Ok(args)
    }

    /// Parse from a token slice (environment-independent, for testing).
    pub fn parse_from(argv: &[String]) -> Result<Self, String> {
        let mut args = Args::default();
        args.parse_tokens(argv)?;
        Ok(args)
    }

    fn parse_tokens(&mut self, argv: &[String]) -> Result<(), String> {
        let mut i = 0;
        while i < argv.len() {
            let mut arg = Argument::new(i, argv);

            if arg.is_option() {
                if arg.is_either("-n", "--name") {
                    self.name = arg.value(&mut i);
                } else if arg.is_either("-m", "--metadata") {
                    self.command = Command::ListMetadata;
                } else if arg.is_either("-p", "--prefix") {
                    self.prefix = arg.value(&mut i);
                } else if arg.is_either("-d", "--depth") {
                    self.depth = to_integer(&arg.value(&mut i));
                } else if arg.is_either("-u", "--human") {
                    self.format = Format::Human;
                } else if arg.is_either("-b", "--basic") {
                    self.format = Format::Plain;
                } else if arg.is_either("-j", "--json") {
                    self.format = Format::Json;
                } else if arg.is("--color") {
                    self.color = ColorMode::parse(&arg.value(&mut i))?;
                } else if arg.is_either("--nc", "--no-color") {
                    self.color = ColorMode::Never;
                } else if arg.is_either("-h", "--help") {
                    self.help = true;
                } else if arg.is_either("-v", "--version") {
                    self.version = true;
                } else {
                    return Err(format!("Unknown argument: {}", arg.name()));
                }

                // a leftover embedded value means the user attached a value
                // to a flag that takes none, e.g. `--metadata=foo`
                if !arg.was_value_consumed() {
                    return Err(format!(
                        "The argument '{}' does not expect a value",
                        arg.name()
                    ));
                }
            } else if self.filename.is_empty() {
                self.filename = arg.name().to_string();
            } else {
                return Err("Too many files specified. You can only specify one file.".to_string());
            }

            i += 1;
        }
        Ok(())
    }
}

/// Parse an integer argument value; malformed input falls back to 0.
fn to_integer(s: &str) -> usize {
    s.parse().unwrap_or(0)
}
