//! safetensors reader.

use std::fs;
use std::path::Path;

use safetensors::tensor::SafeTensors;
use safetensors::SafeTensorError;

use super::{MetaValue, ReadError, Shape, Tensor, TensorMap};

/// Read a .safetensors file into a [`TensorMap`].
///
/// The `__metadata__` block is string-typed by definition of the format,
/// so every metadata value comes back as [`MetaValue::Str`].
pub fn read(path: &Path) -> Result<TensorMap, ReadError> {
    let buffer = fs::read(path)?;

    let (_header_size, header) =
        SafeTensors::read_metadata(&buffer).map_err(map_error)?;
    let mut metadata: Vec<(String, MetaValue)> = header
        .metadata()
        .iter()
        .flatten()
        .map(|(key, value)| (key.clone(), MetaValue::Str(value.clone())))
        .collect();
    metadata.sort_by(|a, b| a.0.cmp(&b.0));

    let file = SafeTensors::deserialize(&buffer).map_err(map_error)?;
    let tensors = file
        .tensors()
        .into_iter()
        .map(|(name, view)| Tensor {
            name,
            shape: Shape::new(view.shape().iter().map(|&d| d as u64).collect()),
            dtype: dtype_name(view.dtype()),
        })
        .collect();

    Ok(TensorMap { tensors, metadata })
}

fn dtype_name(dtype: safetensors::Dtype) -> String {
    use safetensors::Dtype;
    match dtype {
        Dtype::BOOL => "BOOL".to_string(),
        Dtype::U8 => "U8".to_string(),
        Dtype::I8 => "I8".to_string(),
        Dtype::U16 => "U16".to_string(),
        Dtype::I16 => "I16".to_string(),
        Dtype::U32 => "U32".to_string(),
        Dtype::I32 => "I32".to_string(),
        Dtype::U64 => "U64".to_string(),
        Dtype::I64 => "I64".to_string(),
        Dtype::F16 => "F16".to_string(),
        Dtype::BF16 => "BF16".to_string(),
        Dtype::F32 => "F32".to_string(),
        Dtype::F64 => "F64".to_string(),
        other => format!("{other:?}"),
    }
}

fn map_error(error: SafeTensorError) -> ReadError {
    match error {
        SafeTensorError::HeaderTooLarge | SafeTensorError::HeaderTooSmall => {
            ReadError::InvalidFormat
        }
        SafeTensorError::MetadataIncompleteBuffer => ReadError::MissingData,
        SafeTensorError::IoError(e) => ReadError::Io(e),
        _ => ReadError::CorruptHeader,
    }
}
