//! Terminal tables for fitted mappings.

use std::cmp::Ordering;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use riskprep_encode::{LabelCodec, RangeCodec, format_numeric};

/// Print one value-sorted mapping table per fitted column.
pub fn print_range_mappings(codec: &RangeCodec) {
    for name in codec.columns() {
        let Some(mapping) = codec.mapping(name) else {
            continue;
        };
        let mut table = Table::new();
        table.set_header(vec![header_cell("Raw value"), header_cell("Code")]);
        apply_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);

        let mut entries = mapping.entries().to_vec();
        entries.sort_by(|a, b| compare_codes(a.1, b.1));
        for (raw, code) in entries {
            table.add_row(vec![Cell::new(raw), code_cell(code)]);
        }
        println!("[{name}]");
        println!("{table}");
    }
}

/// Print the sorted classes of each fitted label column.
pub fn print_label_classes(codec: &LabelCodec) {
    for name in codec.columns() {
        let Some(classes) = codec.classes(name) else {
            continue;
        };
        let mut table = Table::new();
        table.set_header(vec![header_cell("Code"), header_cell("Label")]);
        apply_table_style(&mut table);
        align_column(&mut table, 0, CellAlignment::Right);
        for (code, label) in classes.iter().enumerate() {
            table.add_row(vec![Cell::new(code), Cell::new(label)]);
        }
        println!("[{name}]");
        println!("{table}");
    }
}

/// Missing codes sort last so the parseable buckets read in order.
fn compare_codes(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn code_cell(code: Option<f64>) -> Cell {
    match code {
        Some(value) => Cell::new(format_numeric(value)),
        None => Cell::new("missing").fg(Color::DarkGrey),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
