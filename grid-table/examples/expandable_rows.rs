use std::collections::BTreeMap;

use grid_table::{
    CellProps, CellRenderer, Column, Columns, ExpandIconProps, ExpandIconRenderer,
    HeaderCellProps, HeaderCellRenderer, RowContent, RowEvent, RowEventHandlers, RowEventKind,
    RowExpand, RowHeight, RowKey, RowPosition, Table, TableOptions, TableRenderers, row_key_field,
};

type Record = BTreeMap<String, String>;

fn main() {
    // Example: a tree-shaped table. Depth comes from the data; the `name` column hosts the icon.
    let data: Vec<Record> = [("a", "0"), ("a.1", "1"), ("a.1.x", "2"), ("b", "0")]
        .into_iter()
        .map(|(id, depth)| {
            Record::from([
                ("id".to_string(), id.to_string()),
                ("name".to_string(), format!("node {id}")),
                ("depth".to_string(), depth.to_string()),
            ])
        })
        .collect();

    let handlers = RowEventHandlers::new()
        .on(RowEventKind::Click, |e: &RowEvent<'_, Record, RowKey>| {
            println!("clicked {}", e.row_key)
        })
        .with_on_row_expand(|e: &RowExpand<'_, Record, RowKey>| {
            println!("row {} expanded={}", e.row_key, e.expanded)
        });

    let options = TableOptions::new_with_key(300, 200, RowHeight::fixed(24), row_key_field("id"))
        .with_expand_column_key("name")
        .with_row_depth(|_, r: &Record| r.get("depth").and_then(|d| d.parse().ok()).unwrap_or(0))
        .with_row_expandable(|_, r: &Record| r.get("depth").is_some_and(|d| d != "2"))
        .with_row_event_handlers(handlers);

    let columns = Columns::new(vec![Column::new("name", "Name", 200), Column::new("id", "Id", 100)])
        .expect("column keys are unique");
    let mut table = Table::new(options, columns, data).expect("valid table");

    let renderers = TableRenderers::new(
        CellRenderer::function(|p: &CellProps<'_, Record, String>| {
            let text = p.cell_data.as_deref().unwrap_or("");
            match p.expand_icon {
                Some(icon) => format!("{icon}{text}"),
                None => text.to_string(),
            }
        }),
        HeaderCellRenderer::function(|p: &HeaderCellProps<'_>| p.column.title.clone()),
    )
    .with_expand_icon(ExpandIconRenderer::function(|p: &ExpandIconProps<'_, Record>| {
        match p.icon.view(true) {
            Some(view) => {
                let indent = " ".repeat(view.margin_left as usize / 8);
                let glyph = match view.glyph {
                    Some(_) if p.icon.expanded => '▾',
                    Some(g) => g,
                    None => ' ',
                };
                format!("{indent}{glyph} ")
            }
            None => String::new(),
        }
    }));

    table.dispatch_row_event(RowPosition::Body(0), RowEventKind::Click);
    table.click_expand_icon(RowPosition::Body(0));
    table.click_expand_icon(RowPosition::Body(2));

    for row in table.render_rows(&renderers) {
        if let RowContent::Cells(cells) = row.content {
            println!("{:>3} {}", row.top, cells.join(" | "));
        }
    }
}
