//! Checkpoint file reading.
//!
//! [`TensorMap`] is the format-independent view of a checkpoint: a list of
//! tensors (name, shape, dtype) plus a sorted set of metadata entries. The
//! format-specific readers live in [`safetensors`] and [`gguf`]; tree
//! grouping of tensor names lives in [`tree`].

pub mod error;
pub mod gguf;
pub mod safetensors;
pub mod tree;

use std::fmt;
use std::path::Path;

pub use error::ReadError;

/// Tensor dimensions, outermost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape(Vec<u64>);

impl Shape {
    pub fn new(dims: Vec<u64>) -> Self {
        Shape(dims)
    }

    pub fn dims(&self) -> &[u64] {
        &self.0
    }

    /// Total number of elements.
    pub fn element_count(&self) -> u64 {
        self.0.iter().product()
    }

    /// Render the shape with the given bracket pair and separator,
    /// e.g. `to_string("[]", ",")` gives `[4096,32]`.
    pub fn to_string(&self, brackets: &str, separator: &str) -> String {
        let mut out = String::new();
        let mut chars = brackets.chars();
        let open = chars.next();
        let close = chars.next();
        if let Some(c) = open {
            out.push(c);
        }
        for (n, dim) in self.0.iter().enumerate() {
            if n > 0 {
                out.push_str(separator);
            }
            out.push_str(&dim.to_string());
        }
        if let Some(c) = close {
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string("[]", ","))
    }
}

/// One tensor entry from a checkpoint file.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    pub name: String,
    pub shape: Shape,
    pub dtype: String,
}

/// A typed metadata value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Array(Vec<MetaValue>),
}

impl MetaValue {
    /// Fixed five-character storage tag shown next to each metadata key.
    ///
    /// Arrays are tagged by their element type, `[[*]]` for nested arrays.
    /// An empty array carries no element type, so it tags as unknown.
    pub fn storage_tag(&self) -> &'static str {
        match self {
            MetaValue::Bool(_) => " bol ",
            MetaValue::I8(_) => " i08 ",
            MetaValue::I16(_) => " i16 ",
            MetaValue::I32(_) => " i32 ",
            MetaValue::I64(_) => " i64 ",
            MetaValue::U8(_) => " u08 ",
            MetaValue::U16(_) => " u16 ",
            MetaValue::U32(_) => " u32 ",
            MetaValue::U64(_) => " u64 ",
            MetaValue::F32(_) => " f32 ",
            MetaValue::F64(_) => " f64 ",
            MetaValue::Str(_) => " str ",
            MetaValue::Array(items) => match items.first() {
                None => " ??? ",
                Some(MetaValue::Bool(_)) => "[bol]",
                Some(MetaValue::I8(_)) => "[i08]",
                Some(MetaValue::I16(_)) => "[i16]",
                Some(MetaValue::I32(_)) => "[i32]",
                Some(MetaValue::I64(_)) => "[i64]",
                Some(MetaValue::U8(_)) => "[u08]",
                Some(MetaValue::U16(_)) => "[u16]",
                Some(MetaValue::U32(_)) => "[u32]",
                Some(MetaValue::U64(_)) => "[u64]",
                Some(MetaValue::F32(_)) => "[f32]",
                Some(MetaValue::F64(_)) => "[f64]",
                Some(MetaValue::Str(_)) => "[str]",
                Some(MetaValue::Array(_)) => "[[*]]",
            },
        }
    }

    /// Render the value as display text.
    pub fn render(&self) -> String {
        match self {
            MetaValue::Bool(v) => v.to_string(),
            MetaValue::I8(v) => v.to_string(),
            MetaValue::I16(v) => v.to_string(),
            MetaValue::I32(v) => v.to_string(),
            MetaValue::I64(v) => v.to_string(),
            MetaValue::U8(v) => v.to_string(),
            MetaValue::U16(v) => v.to_string(),
            MetaValue::U32(v) => v.to_string(),
            MetaValue::U64(v) => v.to_string(),
            MetaValue::F32(v) => v.to_string(),
            MetaValue::F64(v) => v.to_string(),
            MetaValue::Str(v) => v.clone(),
            MetaValue::Array(items) => {
                let mut out = String::from("[");
                for (n, item) in items.iter().enumerate() {
                    if n > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&item.render());
                }
                out.push(']');
                out
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{json, Value};
        match self {
            MetaValue::Bool(v) => json!(v),
            MetaValue::I8(v) => json!(v),
            MetaValue::I16(v) => json!(v),
            MetaValue::I32(v) => json!(v),
            MetaValue::I64(v) => json!(v),
            MetaValue::U8(v) => json!(v),
            MetaValue::U16(v) => json!(v),
            MetaValue::U32(v) => json!(v),
            MetaValue::U64(v) => json!(v),
            MetaValue::F32(v) => json!(v),
            MetaValue::F64(v) => json!(v),
            MetaValue::Str(v) => json!(v),
            MetaValue::Array(items) => {
                Value::Array(items.iter().map(MetaValue::to_json).collect())
            }
        }
    }
}

/// The format-independent contents of a checkpoint file.
#[derive(Debug, Default)]
pub struct TensorMap {
    tensors: Vec<Tensor>,
    metadata: Vec<(String, MetaValue)>,
}

impl TensorMap {
    /// Build a map directly from parts, mainly useful for tests.
    /// Metadata is sorted by key, as the file loaders do.
    pub fn new(tensors: Vec<Tensor>, mut metadata: Vec<(String, MetaValue)>) -> Self {
        metadata.sort_by(|a, b| a.0.cmp(&b.0));
        TensorMap { tensors, metadata }
    }

    /// Load a checkpoint from disk, detecting the format by extension.
    ///
    /// Files with an unknown extension are tried as safetensors first,
    /// then as GGUF.
    pub fn from_file(path: &Path) -> Result<Self, ReadError> {
        if !path.exists() {
            return Err(ReadError::FileNotFound);
        }
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("safetensors") => safetensors::read(path),
            Some("gguf") => gguf::read(path),
            _ => safetensors::read(path).or_else(|_| gguf::read(path)),
        }
    }

    /// Tensors in file order.
    pub fn tensors(&self) -> &[Tensor] {
        &self.tensors
    }

    /// Tensors sorted by name.
    pub fn sorted_tensors(&self) -> Vec<&Tensor> {
        let mut tensors: Vec<&Tensor> = self.tensors.iter().collect();
        tensors.sort_by(|a, b| a.name.cmp(&b.name));
        tensors
    }

    /// Metadata entries, sorted by key.
    pub fn metadata(&self) -> &[(String, MetaValue)] {
        &self.metadata
    }

    /// Look up a single metadata value.
    pub fn metadata_value(&self, key: &str) -> Option<&MetaValue> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
