//! Tensor listing in its three output formats.

use std::collections::HashSet;
use std::io::{self, Write};

use serde_json::json;

use crate::cli::args::{Args, Format};
use crate::cli::colors::ColorScheme;
use crate::cli::table::{Align, Table};
use crate::ckpt::tree::{TensorTree, TreeRow};
use crate::ckpt::{Tensor, TensorMap};

/// Print the tensor listing for `map` in the format selected by `args`.
pub fn run(
    out: &mut impl Write,
    map: &TensorMap,
    args: &Args,
    colors: &ColorScheme,
) -> io::Result<()> {
    let filtered = filter(map, &args.prefix);
    match args.format {
        Format::Human => human(out, &filtered, args.depth, colors),
        Format::Plain => plain(out, &filtered),
        Format::Json => json_output(out, &filtered, &args.filename),
    }
}

fn filter(map: &TensorMap, prefix: &str) -> Vec<Tensor> {
    map.tensors()
        .iter()
        .filter(|t| t.name.starts_with(prefix))
        .cloned()
        .collect()
}

/// Hierarchical table: shape and dtype right-aligned, names indented by
/// group depth, synthetic group header rows in between.
fn human(
    out: &mut impl Write,
    tensors: &[Tensor],
    depth: usize,
    colors: &ColorScheme,
) -> io::Result<()> {
    let mut tree = TensorTree::new(tensors);
    tree.flatten_single_tensor_subnodes();

    let mut table = Table::new();
    table.reserve(tensors.len());
    table.set_alignments(&[Align::Right, Align::Right, Align::Left]);

    // the colorizer only sees (column, padded text), so group-header rows
    // are recognized by their name cell text
    let mut group_cells: HashSet<String> = HashSet::new();
    for row in tree.rows(depth) {
        match row {
            TreeRow::Group { depth, path } => {
                let cell = indent(depth, &path);
                group_cells.insert(cell.clone());
                table.add_row(["".to_string(), "".to_string(), cell]);
            }
            TreeRow::Tensor {
                depth,
                name,
                tensor,
            } => {
                table.add_row([
                    tensor.shape.to_string("[]", ","),
                    tensor.dtype.clone(),
                    indent(depth, &name),
                ]);
            }
        }
    }

    let scheme = colors.clone();
    table.set_colorizer(move |column, text| match column {
        0 => scheme.paint(scheme.data(), text),
        1 => scheme.paint(scheme.data2(), text),
        2 if group_cells.contains(text.trim_end()) => scheme.paint(scheme.group(), text),
        2 => scheme.paint(scheme.primary(), text),
        _ => text.to_string(),
    });
    writeln!(out, "{table}")
}

fn indent(depth: usize, text: &str) -> String {
    format!("{}{}", "  ".repeat(depth), text)
}

/// Flat, sorted, script-friendly columns.
fn plain(out: &mut impl Write, tensors: &[Tensor]) -> io::Result<()> {
    let mut sorted: Vec<&Tensor> = tensors.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut name_width = 0;
    let mut shape_width = 0;
    for tensor in &sorted {
        name_width = name_width.max(tensor.name.chars().count());
        shape_width = shape_width.max(tensor.shape.to_string("[]", ",").chars().count());
    }
    for tensor in &sorted {
        let shape = tensor.shape.to_string("[]", ",");
        writeln!(
            out,
            "{:<name_width$}   {:<shape_width$}  {}",
            tensor.name, shape, tensor.dtype
        )?;
    }
    Ok(())
}

fn json_output(out: &mut impl Write, tensors: &[Tensor], filename: &str) -> io::Result<()> {
    let mut sorted: Vec<&Tensor> = tensors.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let entries: Vec<serde_json::Value> = sorted
        .iter()
        .map(|t| {
            json!({
                "name": t.name,
                "shape": t.shape.dims(),
                "dtype": t.dtype,
            })
        })
        .collect();
    let document = json!({
        "file": filename,
        "tensor_count": entries.len(),
        "tensors": entries,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ckpt::Shape;

    fn sample_map() -> TensorMap {
        let tensor = |name: &str, dims: Vec<u64>, dtype: &str| Tensor {
            name: name.to_string(),
            shape: Shape::new(dims),
            dtype: dtype.to_string(),
        };
        TensorMap::new(
            vec![
                tensor("head.weight", vec![128, 64], "F16"),
                tensor("head.bias", vec![128], "F32"),
                tensor("scale", vec![], "F32"),
            ],
            vec![],
        )
    }

    fn args_with_format(format: Format) -> Args {
        Args {
            format,
            ..Args::default()
        }
    }

    #[test]
    fn test_plain_listing_is_sorted_and_aligned() {
        let mut out = Vec::new();
        let args = args_with_format(Format::Plain);
        run(&mut out, &sample_map(), &args, &ColorScheme::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("head.bias"));
        assert!(lines[1].starts_with("head.weight"));
        assert!(lines[2].starts_with("scale"));
        assert!(lines[0].contains("[128]"));
        assert!(lines[0].ends_with("F32"));
    }

    #[test]
    fn test_human_listing_groups_names() {
        let mut out = Vec::new();
        let args = args_with_format(Format::Human);
        run(&mut out, &sample_map(), &args, &ColorScheme::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        // `scale` is a root tensor, `head` becomes a group header row
        assert!(text.contains("scale"));
        assert!(text.contains("head\n") || text.contains("head "));
        assert!(text.contains("  bias"));
        assert!(text.contains("  weight"));
        assert!(text.contains("[128,64]"));
    }

    #[test]
    fn test_group_rows_use_group_color() {
        let mut out = Vec::new();
        let args = args_with_format(Format::Human);
        run(&mut out, &sample_map(), &args, &ColorScheme::ansi()).unwrap();
        let text = String::from_utf8(out).unwrap();
        // the `head` group header is painted with the group code, tensor
        // name cells with the primary code
        assert!(text.contains("\x1b[;94mhead"));
        assert!(text.contains("\x1b[;37m  bias"));
        assert!(text.contains("\x1b[;37m  weight"));
        assert!(!text.contains("\x1b[;37mhead"));
    }

    #[test]
    fn test_prefix_filter() {
        let mut out = Vec::new();
        let args = Args {
            format: Format::Plain,
            prefix: "head.".to_string(),
            ..Args::default()
        };
        run(&mut out, &sample_map(), &args, &ColorScheme::plain()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("head.bias"));
        assert!(!text.contains("scale"));
    }

    #[test]
    fn test_json_listing() {
        let mut out = Vec::new();
        let args = Args {
            format: Format::Json,
            filename: "m.safetensors".to_string(),
            ..Args::default()
        };
        run(&mut out, &sample_map(), &args, &ColorScheme::plain()).unwrap();
        let document: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(document["file"], "m.safetensors");
        assert_eq!(document["tensor_count"], 3);
        assert_eq!(document["tensors"][0]["name"], "head.bias");
        assert_eq!(document["tensors"][1]["shape"][0], 128);
        assert_eq!(document["tensors"][1]["shape"][1], 64);
    }
}
