use crate::presentation::tables::TableData;
use comfy_table::{ContentArrangement, Table, presets::NOTHING};

/// Borderless terminal table with upper-cased headers.
pub fn render(data: &TableData, no_headers: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_content_arrangement(if data.auto_wrap {
        ContentArrangement::Dynamic
    } else {
        ContentArrangement::Disabled
    });

    if !no_headers {
        table.set_header(data.header.iter().map(|h| h.to_uppercase()));
    }
    for row in &data.rows {
        table.add_row(row);
    }

    let mut out = table.trim_fmt();
    out.push('\n');
    out
}
