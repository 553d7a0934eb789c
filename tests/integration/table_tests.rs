//! Table rendering tests against the public API.

use ckshow::cli::table::{Align, Table};

#[test]
fn test_ragged_rows_render_padded() {
    let mut table = Table::new();
    table.add_row(["a", "bb", "ccc"]);
    table.add_row(["dddd", "e"]);
    assert_eq!(table.render(), "a    bb  ccc\ndddd e \n");
}

#[test]
fn test_right_alignment() {
    let mut table = Table::new();
    table.set_alignments(&[Align::Right, Align::Left]);
    table.add_row(["1", "one"]);
    table.add_row(["100", "hundred"]);
    assert_eq!(table.render(), "  1 one    \n100 hundred\n");
}

#[test]
fn test_min_widths_apply() {
    let mut table = Table::new();
    table.set_min_widths(&[6, 0]);
    table.add_row(["ab", "cd"]);
    assert_eq!(table.render(), "ab     cd\n");
}

#[test]
fn test_colorizer_wraps_padded_cells() {
    let mut table = Table::new();
    table.set_colorizer(|column, text| {
        if column == 0 {
            format!("<{text}>")
        } else {
            text.to_string()
        }
    });
    table.add_row(["x", "y"]);
    table.add_row(["xx", "yy"]);
    assert_eq!(table.render(), "<x > y \n<xx> yy\n");
}

#[test]
fn test_empty_table_renders_nothing() {
    let table = Table::new();
    assert_eq!(table.render(), "");
    assert!(table.is_empty());
}
