//! Full-run tests: parse arguments, load a fixture, check the output.

use std::collections::HashMap;
use std::fs;

use safetensors::tensor::{Dtype, TensorView};
use tempfile::TempDir;

use ckshow::cli::args::Args;
use ckshow::cli::colors::ColorScheme;

fn fixture() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.safetensors");

    let data_a = [0u8; 24];
    let data_b = [0u8; 4];
    let weight = TensorView::new(Dtype::F16, vec![3, 4], &data_a).unwrap();
    let scale = TensorView::new(Dtype::F32, vec![1], &data_b).unwrap();

    let mut metadata = HashMap::new();
    metadata.insert("format".to_string(), "pt".to_string());

    let bytes = safetensors::serialize(
        vec![("encoder.weight", weight), ("scale", scale)],
        &Some(metadata),
    )
    .unwrap();
    fs::write(&path, bytes).unwrap();
    let filename = path.to_str().unwrap().to_string();
    (dir, filename)
}

fn run(tokens: &[&str]) -> Result<String, ckshow::FatalError> {
    let argv: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    let args = Args::parse_from(&argv).unwrap();
    let mut out = Vec::new();
    ckshow::run(&args, &ColorScheme::plain(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_no_file_is_a_fatal_error_with_hint() {
    let err = run(&[]).unwrap_err();
    assert!(err.message.contains("No file provided"));
    assert_eq!(err.hints.len(), 1);
    assert!(err.hints[0].contains("--help"));
}

#[test]
fn test_default_run_lists_tensors() {
    let (_dir, filename) = fixture();
    let text = run(&[&filename]).unwrap();
    assert!(text.contains("encoder.weight") || text.contains("weight"));
    assert!(text.contains("scale"));
    assert!(text.contains("[3,4]"));
    assert!(text.contains("F16"));
}

#[test]
fn test_basic_run_is_plain_and_sorted() {
    let (_dir, filename) = fixture();
    let text = run(&["--basic", &filename]).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("encoder.weight"));
    assert!(lines[1].starts_with("scale"));
    assert!(!text.contains('\x1b'), "basic output must carry no escapes");
}

#[test]
fn test_json_run_parses() {
    let (_dir, filename) = fixture();
    let text = run(&["--json", &filename]).unwrap();
    let document: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(document["tensor_count"], 2);
    assert_eq!(document["tensors"][0]["name"], "encoder.weight");
    assert_eq!(document["tensors"][0]["dtype"], "F16");
}

#[test]
fn test_metadata_listing() {
    let (_dir, filename) = fixture();
    let text = run(&["--metadata", &filename]).unwrap();
    assert!(text.contains(" str "));
    assert!(text.contains("format:"));
    assert!(text.contains("pt"));
}

#[test]
fn test_metadata_single_key() {
    let (_dir, filename) = fixture();
    let text = run(&["--metadata", "--name", "format", &filename]).unwrap();
    assert_eq!(text, "pt\n");
}

#[test]
fn test_metadata_missing_key_is_fatal() {
    let (_dir, filename) = fixture();
    let err = run(&["--metadata", "--name", "nope", &filename]).unwrap_err();
    assert!(err.message.contains("nope"));
}

#[test]
fn test_missing_file_message() {
    let err = run(&["/nonexistent/model.gguf"]).unwrap_err();
    assert_eq!(err.message, "File not found.");
}

#[test]
fn test_name_without_metadata_warns_and_lists_tensors() {
    let (_dir, filename) = fixture();
    // --name is a metadata option; the tensor listing warns on stderr but
    // still succeeds
    let text = run(&["--name", "format", &filename]).unwrap();
    assert!(text.contains("scale"));
    assert!(!text.contains("pt"), "metadata value must not leak into the listing");
}

#[test]
fn test_prefix_filters_tensor_listing() {
    let (_dir, filename) = fixture();
    let text = run(&["--basic", "--prefix", "encoder", &filename]).unwrap();
    assert!(text.contains("encoder.weight"));
    assert!(!text.contains("scale"));
}
