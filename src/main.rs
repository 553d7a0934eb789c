//! ckshow CLI entry point
//!
//! Inspects tensors and metadata in model checkpoint files.

use ckshow::cli::args::Args;
use ckshow::cli::messages;
use ckshow::version::get_build_info;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            let colors = ckshow::cli::colors::ColorMode::Auto.resolve(io::stderr().is_terminal());
            messages::error(&colors, &e);
            messages::hint(&colors, "Try 'ckshow --help' for more information.");
            return ExitCode::from(1);
        }
    };

    // Handle help and version flags
    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let colors = args.color.resolve(io::stdout().is_terminal());

    match ckshow::run(&args, &colors, &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(fatal) => {
            let colors = args.color.resolve(io::stderr().is_terminal());
            messages::error(&colors, &fatal.message);
            for hint in &fatal.hints {
                messages::hint(&colors, hint);
            }
            ExitCode::from(1)
        }
    }
}

fn print_version() {
    let info = get_build_info();
    println!("{}", info);
}

fn print_help() {
    println!(
        r#"Usage: ckshow [OPTIONS] file

  Inspect tensors and metadata in model checkpoint files
  (.safetensors and .gguf).

  OPTIONS:
    -n, --name <NAME>      Show the value of the metadata entry with the given key
    -m, --metadata         Print metadata information related to the checkpoint file
    -p, --prefix <PREFIX>  Filter the tensor names by a prefix to display only matching tensors
    -d, --depth <DEPTH>    Specify the depth level of the hierarchical index to display

  Output formats:
    -u, --human            Output in a human-readable format with clear formatting (default)
    -b, --basic            Output in a plain, easily parseable format for scripts or tools
    -j, --json             Output data in JSON format when available

    --color <WHEN>         When to use colors: auto (default), always, never
    --nc, --no-color       Disable color output.
    -h  , --help           Show this help message and exit.
    -v  , --version        Show version information and exit.

  Examples:
    ckshow --prefix model.layers 'checkpoint.safetensors'
    ckshow --metadata --name general.architecture 'model.gguf'
    ckshow --no-color 'checkpoint.safetensors'"#
    );
}
