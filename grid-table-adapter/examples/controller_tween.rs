use std::collections::BTreeMap;

use grid_table::{Align, Column, Columns, RowHeight, TableOptions};
use grid_table_adapter::{Easing, TableController};

type Record = BTreeMap<String, String>;

fn main() {
    // Example: an adapter animating "scroll to row" from its frame loop.
    //
    // An adapter would:
    // - start a tween in response to a command;
    // - call tick(now_ms) each frame and write the returned offset to the body scroll container;
    // - render from the table state.
    let data: Vec<Record> = (0..10_000)
        .map(|i| Record::from([("n".to_string(), i.to_string())]))
        .collect();
    let columns = Columns::new(vec![Column::new("n", "#", 80)]).expect("column keys are unique");
    let mut c = TableController::new(
        TableOptions::new(320, 240, RowHeight::fixed(20)).with_header_height(20),
        columns,
        data,
    )
    .expect("valid table");

    let target = c.start_tween_to_row(2_000, Align::Center, 0, 240, Easing::SmoothStep);
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    loop {
        now_ms += 16;
        let Some(off) = c.tick(now_ms) else {
            break;
        };
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} off={off} visible={:?}",
                c.table().body().visible_range()
            );
        }
    }

    println!(
        "done: off={} rows_rendered={:?}",
        c.table().scroll_position().top,
        c.table().rows_rendered()
    );
}
