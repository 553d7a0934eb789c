//! CLI integration tests.
//!
//! Tests for argument parsing across the whole flag surface.

use ckshow::cli::args::{Args, Command, Format};
use ckshow::cli::colors::ColorMode;

fn parse(tokens: &[&str]) -> Result<Args, String> {
    let argv: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    Args::parse_from(&argv)
}

#[test]
fn test_default_command_lists_tensors() {
    let args = parse(&["model.safetensors"]).unwrap();
    assert_eq!(args.command, Command::ListTensors);
    assert_eq!(args.format, Format::Human);
    assert_eq!(args.filename, "model.safetensors");
}

#[test]
fn test_full_metadata_invocation() {
    let args = parse(&["--metadata", "--name=general.architecture", "--json", "m.gguf"]).unwrap();
    assert_eq!(args.command, Command::ListMetadata);
    assert_eq!(args.name, "general.architecture");
    assert_eq!(args.format, Format::Json);
    assert_eq!(args.filename, "m.gguf");
}

#[test]
fn test_flag_order_does_not_matter() {
    let a = parse(&["-p", "model", "m.gguf", "-b"]).unwrap();
    let b = parse(&["m.gguf", "-b", "--prefix", "model"]).unwrap();
    assert_eq!(a.prefix, b.prefix);
    assert_eq!(a.format, b.format);
    assert_eq!(a.filename, b.filename);
}

#[test]
fn test_embedded_and_separate_values_agree() {
    let a = parse(&["--depth", "3", "m.gguf"]).unwrap();
    let b = parse(&["--depth=3", "m.gguf"]).unwrap();
    assert_eq!(a.depth, 3);
    assert_eq!(b.depth, 3);
}

#[test]
fn test_option_value_is_not_mistaken_for_filename() {
    let args = parse(&["--prefix", "decoder", "m.safetensors"]).unwrap();
    assert_eq!(args.prefix, "decoder");
    assert_eq!(args.filename, "m.safetensors");
}

#[test]
fn test_color_flag_aliases() {
    for alias in ["auto", "tty", "if-tty"] {
        assert_eq!(parse(&["--color", alias]).unwrap().color, ColorMode::Auto);
    }
    for alias in ["always", "yes", "force"] {
        assert_eq!(parse(&["--color", alias]).unwrap().color, ColorMode::Always);
    }
    for alias in ["never", "no", "none"] {
        assert_eq!(parse(&["--color", alias]).unwrap().color, ColorMode::Never);
    }
}

#[test]
fn test_errors_mention_the_offending_flag() {
    let err = parse(&["--wat"]).unwrap_err();
    assert!(err.contains("--wat"), "{err}");

    let err = parse(&["--json=yes"]).unwrap_err();
    assert!(err.contains("--json"), "{err}");
}
