use std::collections::BTreeMap;

use grid_table::{
    CellProps, CellRenderer, Column, Columns, HeaderCellProps, HeaderCellRenderer, RowContent,
    RowHeight, Table, TableOptions, TableRenderers, row_key_field,
};

type Record = BTreeMap<String, String>;

fn main() {
    // Example: a 100k row table drawn as text. Only the mounted window is rendered.
    let data: Vec<Record> = (0..100_000)
        .map(|i| {
            let mut r = Record::new();
            r.insert("id".into(), format!("u{i}"));
            r.insert("name".into(), format!("User {i}"));
            r.insert("score".into(), format!("{}", (i * 37) % 101));
            r
        })
        .collect();

    let columns = Columns::new(vec![
        Column::new("id", "Id", 8),
        Column::new("name", "Name", 14),
        Column::new("score", "Score", 6),
    ])
    .expect("column keys are unique");

    let options = TableOptions::new_with_key(40, 12, RowHeight::fixed(1), row_key_field("id"))
        .with_header_height(1)
        .with_overscan_row_count(2)
        .with_on_rows_rendered(|r| {
            println!(
                "rows_rendered: visible {}..={} overscan {}..={}",
                r.start_index, r.stop_index, r.overscan_start_index, r.overscan_stop_index
            );
        });
    let mut table = Table::new(options, columns, data).expect("valid table");

    let renderers = TableRenderers::new(
        CellRenderer::function(|p: &CellProps<'_, Record, String>| {
            let text = p.cell_data.as_deref().unwrap_or("");
            format!("{text:<width$}", width = p.column.width as usize)
        }),
        HeaderCellRenderer::function(|p: &HeaderCellProps<'_>| {
            format!("{:<width$}", p.column.title, width = p.column.width as usize)
        }),
    );

    for (now_ms, top) in [(0u64, 0u64), (16, 5_000), (32, 99_990)] {
        table.on_body_scroll(0, top, now_ms);
        println!("--- scroll_top={} layout={:?}", top, table.layout());
        if let Some(header) = table.render_header(&renderers) {
            for row in &header.header_rows {
                print_row(&row.content);
            }
        }
        for row in table.render_rows(&renderers) {
            print!("{:>6} ", row.top);
            print_row(&row.content);
        }
    }
}

fn print_row(content: &RowContent<String>) {
    match content {
        RowContent::Cells(cells) => println!("{}", cells.concat()),
        RowContent::Custom(node) => println!("{node}"),
    }
}
