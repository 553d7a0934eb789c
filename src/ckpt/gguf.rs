//! GGUF reader, built on candle's gguf_file parser.

use std::fs::File;
use std::path::Path;

use candle_core::quantized::gguf_file::{Content, Value};
use candle_core::quantized::GgmlDType;

use super::{MetaValue, ReadError, Shape, Tensor, TensorMap};

/// Read a .gguf file into a [`TensorMap`].
pub fn read(path: &Path) -> Result<TensorMap, ReadError> {
    let mut file = File::open(path)?;
    let content = Content::read(&mut file).map_err(map_error)?;

    let mut tensors: Vec<Tensor> = content
        .tensor_infos
        .iter()
        .map(|(name, info)| Tensor {
            name: name.clone(),
            shape: Shape::new(info.shape.dims().iter().map(|&d| d as u64).collect()),
            dtype: dtype_name(info.ggml_dtype),
        })
        .collect();
    tensors.sort_by(|a, b| a.name.cmp(&b.name));

    let mut metadata: Vec<(String, MetaValue)> = content
        .metadata
        .iter()
        .map(|(key, value)| (key.clone(), convert_value(value)))
        .collect();
    metadata.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(TensorMap { tensors, metadata })
}

fn convert_value(value: &Value) -> MetaValue {
    match value {
        Value::U8(v) => MetaValue::U8(*v),
        Value::I8(v) => MetaValue::I8(*v),
        Value::U16(v) => MetaValue::U16(*v),
        Value::I16(v) => MetaValue::I16(*v),
        Value::U32(v) => MetaValue::U32(*v),
        Value::I32(v) => MetaValue::I32(*v),
        Value::U64(v) => MetaValue::U64(*v),
        Value::I64(v) => MetaValue::I64(*v),
        Value::F32(v) => MetaValue::F32(*v),
        Value::F64(v) => MetaValue::F64(*v),
        Value::Bool(v) => MetaValue::Bool(*v),
        Value::String(v) => MetaValue::Str(v.clone()),
        Value::Array(items) => MetaValue::Array(items.iter().map(convert_value).collect()),
    }
}

fn dtype_name(dtype: GgmlDType) -> String {
    match dtype {
        GgmlDType::F32 => "F32".to_string(),
        GgmlDType::F16 => "F16".to_string(),
        GgmlDType::Q4_0 => "Q4_0".to_string(),
        GgmlDType::Q4_1 => "Q4_1".to_string(),
        GgmlDType::Q5_0 => "Q5_0".to_string(),
        GgmlDType::Q5_1 => "Q5_1".to_string(),
        GgmlDType::Q8_0 => "Q8_0".to_string(),
        GgmlDType::Q8_1 => "Q8_1".to_string(),
        GgmlDType::Q2K => "Q2_K".to_string(),
        GgmlDType::Q3K => "Q3_K".to_string(),
        GgmlDType::Q4K => "Q4_K".to_string(),
        GgmlDType::Q5K => "Q5_K".to_string(),
        GgmlDType::Q6K => "Q6_K".to_string(),
        GgmlDType::Q8K => "Q8_K".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}

fn map_error(error: candle_core::Error) -> ReadError {
    match error {
        candle_core::Error::Io(e) => ReadError::Io(e),
        candle_core::Error::Msg(msg) => {
            let lower = msg.to_lowercase();
            if lower.contains("magic") {
                ReadError::InvalidFormat
            } else if lower.contains("version") {
                ReadError::UnsupportedVersion
            } else {
                ReadError::CorruptHeader
            }
        }
        _ => ReadError::InvalidFormat,
    }
}
