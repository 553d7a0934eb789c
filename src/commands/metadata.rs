//! Metadata listing and single-key lookup.

use std::io::{self, Write};

use serde_json::json;

use crate::cli::args::{Args, Format};
use crate::cli::colors::ColorScheme;
use crate::cli::table::Table;
use crate::ckpt::TensorMap;

/// Values longer than this are shortened with a `...` suffix in the
/// human-readable table.
const MAX_VALUE_WIDTH: usize = 50;

/// Print all metadata entries in the format selected by `args`.
pub fn run(
    out: &mut impl Write,
    map: &TensorMap,
    args: &Args,
    colors: &ColorScheme,
) -> io::Result<()> {
    match args.format {
        Format::Human => human(out, map, colors),
        Format::Plain => plain(out, map),
        Format::Json => json_output(out, map),
    }
}

/// Print the raw value of a single metadata key, or `None` if the key
/// does not exist.
pub fn run_single(out: &mut impl Write, map: &TensorMap, key: &str) -> io::Result<Option<()>> {
    match map.metadata_value(key) {
        Some(value) => {
            writeln!(out, "{}", value.render())?;
            Ok(Some(()))
        }
        None => Ok(None),
    }
}

fn human(out: &mut impl Write, map: &TensorMap, colors: &ColorScheme) -> io::Result<()> {
    let mut table = Table::new();
    let scheme = colors.clone();
    table.set_colorizer(move |column, text| match column {
        0 => scheme.paint(scheme.data2(), text),
        1 => scheme.paint(scheme.primary(), text),
        2 => scheme.paint(scheme.data(), text),
        _ => text.to_string(),
    });

    for (key, value) in map.metadata() {
        table.add_row([
            value.storage_tag().to_string(),
            format!("{key}:"),
            shorten(&value.render()),
        ]);
    }
    writeln!(out, "{table}")
}

/// Fold the value onto one line and clip it to [`MAX_VALUE_WIDTH`].
fn shorten(value: &str) -> String {
    let mut flat: String = value
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();
    if flat.chars().count() > MAX_VALUE_WIDTH {
        flat = flat.chars().take(MAX_VALUE_WIDTH - 3).collect();
        flat.push_str("...");
    }
    flat
}

fn plain(out: &mut impl Write, map: &TensorMap) -> io::Result<()> {
    for (key, value) in map.metadata() {
        writeln!(out, "{key}\t{}", value.render())?;
    }
    Ok(())
}

fn json_output(out: &mut impl Write, map: &TensorMap) -> io::Result<()> {
    let mut document = serde_json::Map::new();
    for (key, value) in map.metadata() {
        document.insert(key.clone(), value.to_json());
    }
    writeln!(out, "{}", serde_json::to_string_pretty(&json!(document))?)
}
