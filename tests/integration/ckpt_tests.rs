//! Checkpoint loading tests with real on-disk fixtures.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use safetensors::tensor::{Dtype, TensorView};
use tempfile::TempDir;

use ckshow::ckpt::{MetaValue, ReadError, TensorMap};

/// Write a small but genuine .safetensors file and return its directory.
fn safetensors_fixture() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("model.safetensors");

    let weight_data = [0u8; 16];
    let bias_data = [0u8; 8];
    let weight = TensorView::new(Dtype::F32, vec![2, 2], &weight_data).unwrap();
    let bias = TensorView::new(Dtype::F32, vec![2], &bias_data).unwrap();

    let mut metadata = HashMap::new();
    metadata.insert("format".to_string(), "pt".to_string());
    metadata.insert("producer".to_string(), "test".to_string());

    let bytes = safetensors::serialize(
        vec![("linear.weight", weight), ("linear.bias", bias)],
        &Some(metadata),
    )
    .unwrap();
    fs::write(&path, bytes).unwrap();
    (dir, path)
}

#[test]
fn test_missing_file_is_file_not_found() {
    let result = TensorMap::from_file(Path::new("/nonexistent/model.safetensors"));
    assert!(matches!(result, Err(ReadError::FileNotFound)));
}

#[test]
fn test_garbage_file_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("junk.gguf");
    fs::write(&path, b"this is not a checkpoint file at all").unwrap();
    let result = TensorMap::from_file(&path);
    assert!(
        matches!(result, Err(ReadError::InvalidFormat)),
        "garbage header must map to InvalidFormat, got {result:?}"
    );
}

#[test]
fn test_safetensors_fixture_round_trips() {
    let (_dir, path) = safetensors_fixture();
    let map = TensorMap::from_file(&path).unwrap();

    let tensors = map.sorted_tensors();
    assert_eq!(tensors.len(), 2);
    assert_eq!(tensors[0].name, "linear.bias");
    assert_eq!(tensors[0].shape.dims(), &[2]);
    assert_eq!(tensors[0].dtype, "F32");
    assert_eq!(tensors[1].name, "linear.weight");
    assert_eq!(tensors[1].shape.dims(), &[2, 2]);

    assert_eq!(
        map.metadata_value("format"),
        Some(&MetaValue::Str("pt".to_string()))
    );
    assert_eq!(
        map.metadata_value("producer"),
        Some(&MetaValue::Str("test".to_string()))
    );
    assert_eq!(map.metadata_value("missing"), None);
}

#[test]
fn test_metadata_is_sorted_by_key() {
    let (_dir, path) = safetensors_fixture();
    let map = TensorMap::from_file(&path).unwrap();
    let keys: Vec<&str> = map.metadata().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["format", "producer"]);
}

#[test]
fn test_unknown_extension_falls_back_to_sniffing() {
    let dir = TempDir::new().unwrap();
    let (_fixture_dir, fixture_path) = safetensors_fixture();
    let path = dir.path().join("model.bin");
    fs::copy(&fixture_path, &path).unwrap();

    let map = TensorMap::from_file(&path).unwrap();
    assert_eq!(map.tensors().len(), 2);
}
