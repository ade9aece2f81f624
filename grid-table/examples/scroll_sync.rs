use std::collections::BTreeMap;

use grid_table::{
    CellProps, CellRenderer, Column, Columns, FixedProbe, HeaderCellProps, HeaderCellRenderer,
    RowHeight, Table, TableOptions, TableRenderers,
};

type Record = BTreeMap<String, String>;

fn main() {
    // Example: a wide table with a frozen summary row. The body scrolls on both axes; the header
    // (column titles plus the frozen row) follows horizontally and stays put vertically.
    let columns = Columns::new(
        (0..12)
            .map(|i| Column::new(format!("c{i}"), format!("Col {i}"), 120))
            .collect::<Vec<_>>(),
    )
    .expect("column keys are unique");

    let row = |prefix: &str| -> Record {
        (0..12)
            .map(|i| (format!("c{i}"), format!("{prefix}{i}")))
            .collect()
    };
    let data: Vec<Record> = (0..500).map(|r| row(&format!("r{r}."))).collect();

    let options = TableOptions::new(800, 400, RowHeight::fixed(28))
        .with_header_height(32)
        .with_on_scrollbar_presence_change(|p| println!("scrollbars: {p:?}"));
    let mut table = Table::new(options, columns, data)
        .expect("valid table")
        .with_frozen_data(vec![row("sum.")])
        // Hosts with a layout engine measure this; 15px is a typical desktop value.
        .with_scrollbar_probe(FixedProbe(15));

    let layout = *table.layout();
    println!(
        "body {}x{} header_width={} (columns {} + scrollbar {})",
        layout.viewport_width,
        layout.viewport_height,
        layout.header_width,
        table.columns().total_width(),
        table.scrollbar_size().width,
    );

    let renderers = TableRenderers::new(
        CellRenderer::function(|p: &CellProps<'_, Record, String>| {
            p.cell_data.as_deref().unwrap_or("").to_string()
        }),
        HeaderCellRenderer::function(|p: &HeaderCellProps<'_>| p.column.title.clone()),
    );

    // A drag on the body's horizontal scrollbar, one event per frame.
    for (frame, left) in [0u64, 150, 400, 900, 5_000].into_iter().enumerate() {
        let now_ms = frame as u64 * 16;
        table.on_body_scroll(left, 280, now_ms);
        let header = table.render_header(&renderers).expect("header is visible");
        println!(
            "t={now_ms} body_left={} header_left={} visible_columns={:?} sync={:?}",
            table.scroll_position().left,
            header.scroll_left,
            table.visible_columns(),
            table.scroll_sync().state(),
        );
    }

    table.tick(1_000);
    println!("after idle: sync={:?}", table.scroll_sync().state());
}
