use std::collections::BTreeMap;

use grid_table::{Column, Columns, RowHeight, TableOptions, row_key_field};
use grid_table_adapter::TableController;

type Record = BTreeMap<String, String>;

fn page(from: i64, to: i64) -> Vec<Record> {
    (from..to)
        .map(|i| {
            Record::from([
                ("id".to_string(), format!("m{i}")),
                ("text".to_string(), format!("message {i}")),
            ])
        })
        .collect()
}

fn main() {
    // Example: loading older rows above the current ones (chat/timeline) without content jumping.
    //
    // 1) capture an anchor (row key + offset inside the viewport) before the data changes;
    // 2) replace the data;
    // 3) re-apply the anchor so the same row stays in the same place.
    let columns = Columns::new(vec![Column::new("text", "Message", 300)])
        .expect("column keys are unique");
    let options = TableOptions::new_with_key(300, 200, RowHeight::estimated(24), row_key_field("id"))
        .with_header_height(0);
    let mut c = TableController::new(options, columns, page(0, 100)).expect("valid table");
    c.on_scroll(0, 250, 0);

    let anchor = c
        .capture_first_visible_anchor()
        .expect("visible range must not be empty");
    println!(
        "before prepend: off={} anchor={anchor:?}",
        c.table().scroll_position().top
    );

    let mut older = page(-50, 0);
    older.extend(page(0, 100));
    let ok = c.replace_data_anchored(older);

    println!(
        "after prepend: ok={ok} off={} first_visible={:?}",
        c.table().scroll_position().top,
        c.capture_first_visible_anchor()
    );
}
