use crate::*;

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::fenwick::RowSums;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start))
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

type Record = BTreeMap<String, String>;

fn record(id: &str, name: &str, city: &str) -> Record {
    let mut r = Record::new();
    r.insert("id".to_string(), id.to_string());
    r.insert("name".to_string(), name.to_string());
    r.insert("city".to_string(), city.to_string());
    r
}

fn people(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| record(&format!("p{i}"), &format!("Person {i}"), "Oslo"))
        .collect()
}

fn columns() -> Columns {
    Columns::new(vec![
        Column::new("id", "Id", 100),
        Column::new("name", "Name", 200),
        Column::new("city", "City", 300),
    ])
    .unwrap()
}

/// 400×300 table, 30px header, 30px fixed rows keyed by `id`.
fn options() -> TableOptions<Record> {
    TableOptions::new_with_key(400, 300, RowHeight::fixed(30), row_key_field("id"))
        .with_header_height(30)
}

fn table(rows: usize) -> Table<Record> {
    Table::new(options(), columns(), people(rows)).unwrap()
}

fn text_cells() -> CellRenderer<Record, String> {
    CellRenderer::function(|p: &CellProps<'_, Record, String>| {
        p.cell_data.as_deref().unwrap_or("-").to_string()
    })
}

fn title_header_cells() -> HeaderCellRenderer<String> {
    HeaderCellRenderer::function(|p: &HeaderCellProps<'_>| p.column.title.clone())
}

fn renderers() -> TableRenderers<Record, String> {
    TableRenderers::new(text_cells(), title_header_cells())
}

fn key(id: &str) -> RowKey {
    RowKey::Str(id.to_string())
}

fn log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn row_sums_match_naive_prefix_sums() {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let n = rng.gen_range_usize(0, 40);
        let mut heights: Vec<u32> = (0..n).map(|_| rng.gen_range_u32(0, 50)).collect();
        let mut sums = RowSums::from_heights(&heights);

        for _ in 0..20 {
            if n > 0 && rng.gen_bool() {
                let i = rng.gen_range_usize(0, n);
                let h = rng.gen_range_u32(0, 50);
                sums.add(i, i64::from(h) - i64::from(heights[i]));
                heights[i] = h;
            }

            let total: u64 = heights.iter().map(|&h| u64::from(h)).sum();
            assert_eq!(sums.len(), n);
            assert_eq!(sums.total(), total);

            let mut acc = 0u64;
            for rows in 0..=n {
                assert_eq!(sums.prefix(rows), acc);
                if rows < n {
                    acc += u64::from(heights[rows]);
                }
            }

            let offset = rng.gen_range_u64(0, total + 10);
            let mut expected = 0usize;
            let mut acc = 0u64;
            for &h in &heights {
                acc += u64::from(h);
                if acc > offset {
                    break;
                }
                expected += 1;
            }
            assert_eq!(sums.rows_within(offset), expected);
        }
    }
}

#[test]
fn fixed_rows_visible_range_and_overscan() {
    let mut v = RowVirtualizer::new(
        RowVirtualizerOptions::new(1000, RowHeight::fixed(30)).with_initial_viewport_height(300),
    );
    assert_eq!(v.total_height(), 30_000);
    assert_eq!(
        v.visible_range(),
        VirtualRange {
            start_index: 0,
            end_index: 10
        }
    );
    assert_eq!(
        v.virtual_range(),
        VirtualRange {
            start_index: 0,
            end_index: 11
        }
    );

    v.set_scroll_offset(305);
    assert_eq!(
        v.visible_range(),
        VirtualRange {
            start_index: 10,
            end_index: 21
        }
    );
    assert_eq!(
        v.virtual_range(),
        VirtualRange {
            start_index: 9,
            end_index: 22
        }
    );
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Forward));

    assert_eq!(v.row_at_offset(29_999), Some(999));
    assert_eq!(v.row_at_offset(30_000), None);
}

#[test]
fn variable_rows_visible_range_covers_viewport_exactly() {
    let mut rng = Lcg::new(42);
    let heights: Arc<Vec<u32>> = Arc::new((0..300).map(|_| rng.gen_range_u32(1, 80)).collect());
    let h = Arc::clone(&heights);

    for _ in 0..40 {
        let viewport = rng.gen_range_u32(1, 500);
        let h = Arc::clone(&h);
        let mut v = RowVirtualizer::new(
            RowVirtualizerOptions::new(300, RowHeight::variable(40, move |i| h[i]))
                .with_initial_viewport_height(viewport),
        );
        let total: u64 = heights.iter().map(|&h| u64::from(h)).sum();
        assert_eq!(v.total_height(), total);

        v.set_scroll_offset_clamped(rng.gen_range_u64(0, total + 100));
        let offset = v.scroll_offset();
        let last_pixel = offset + u64::from(viewport) - 1;
        let range = v.visible_range();
        assert!(!range.is_empty());

        let first = range.start_index;
        assert!(v.row_start(first).unwrap() <= offset);
        assert!(v.row_end(first).unwrap() > offset);

        let last = range.end_index - 1;
        assert!(v.row_start(last).unwrap() <= last_pixel);
        assert!(v.row_end(last).unwrap() > last_pixel);
    }
}

#[test]
fn batch_update_coalesces_change_notifications() {
    let calls = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&calls);
    let mut v = RowVirtualizer::new(RowVirtualizerOptions::new(100, RowHeight::fixed(20)).with_on_change(
        Some(move |_: &RowVirtualizer<RowKey>, _: bool| {
            c.fetch_add(1, Ordering::Relaxed);
        }),
    ));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    v.batch_update(|v| {
        v.set_viewport_height(100);
        v.set_scroll_offset(50);
        v.set_overscan(3);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    v.set_scroll_offset(60);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn is_scrolling_resets_after_delay() {
    let mut v = RowVirtualizer::new(
        RowVirtualizerOptions::new(100, RowHeight::fixed(20)).with_initial_viewport_height(100),
    );
    v.apply_scroll_event(100, 0);
    assert!(v.is_scrolling());
    v.update_scrolling(149);
    assert!(v.is_scrolling());
    v.update_scrolling(150);
    assert!(!v.is_scrolling());
    assert_eq!(v.scroll_direction(), None);

    let mut v = RowVirtualizer::new(
        RowVirtualizerOptions::new(100, RowHeight::fixed(20))
            .with_initial_viewport_height(100)
            .with_use_scrollend_event(true),
    );
    v.apply_scroll_event(100, 0);
    v.update_scrolling(10_000);
    assert!(v.is_scrolling());
    v.set_is_scrolling(false);
    assert!(!v.is_scrolling());
}

#[test]
fn measurement_cache_roundtrips_by_key() {
    let opts = RowVirtualizerOptions::new_with_key(5, RowHeight::estimated(20), |i| i as u64 * 10);
    let mut v = RowVirtualizer::new(opts.clone());
    v.measure_row(1, 55);
    assert_eq!(v.row_size(1), Some(55));
    assert_eq!(v.total_height(), 4 * 20 + 55);
    assert_eq!(v.export_measurement_cache(), vec![(10u64, 55u32)]);

    let mut restored = RowVirtualizer::new(opts);
    restored.import_measurement_cache(v.export_measurement_cache());
    assert_eq!(restored.row_size(1), Some(55));
    assert!(restored.is_measured(1));
    assert!(!restored.is_measured(0));
}

#[test]
fn fixed_rows_ignore_measurements() {
    let mut v = RowVirtualizer::new(RowVirtualizerOptions::new(5, RowHeight::fixed(20)));
    v.measure_row(1, 55);
    assert_eq!(v.resize_row(2, 70), 0);
    assert_eq!(v.row_size(1), Some(20));
    assert!(!v.is_measured(1));
    assert_eq!(v.total_height(), 100);
}

#[test]
fn probe_thickness_handles_overlay_engines() {
    let classic = ProbeMeasurement {
        width_contained: 100,
        width_scroll: 83,
        outer_client_width: 83,
    };
    assert_eq!(classic.thickness(), 17);

    let child_keeps_width = ProbeMeasurement {
        width_contained: 100,
        width_scroll: 100,
        outer_client_width: 83,
    };
    assert_eq!(child_keeps_width.thickness(), 17);

    let overlay = ProbeMeasurement {
        width_contained: 100,
        width_scroll: 100,
        outer_client_width: 100,
    };
    assert_eq!(overlay.thickness(), 0);
}

struct CountingProbe {
    calls: Arc<AtomicUsize>,
    size: u32,
}

impl ScrollbarProbe for CountingProbe {
    fn measure(&self) -> Option<ProbeMeasurement> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        FixedProbe(self.size).measure()
    }
}

struct NoDocument;

impl ScrollbarProbe for NoDocument {
    fn measure(&self) -> Option<ProbeMeasurement> {
        None
    }
}

#[test]
fn scrollbar_measurer_caches_until_fresh() {
    let calls = Arc::new(AtomicUsize::new(0));
    let m = ScrollbarMeasurer::new(CountingProbe {
        calls: Arc::clone(&calls),
        size: 17,
    });
    assert_eq!(m.cached(), None);
    assert_eq!(m.size(false), 17);
    assert_eq!(m.size(false), 17);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(m.cached(), Some(17));

    assert_eq!(m.size(true), 17);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(m.scrollbar_size(), ScrollbarSize::uniform(17));
}

#[test]
fn scrollbar_measurer_without_document_reports_zero() {
    let detached = ScrollbarMeasurer::<FixedProbe>::detached();
    assert_eq!(detached.size(false), 0);
    assert_eq!(detached.cached(), None);

    let empty = ScrollbarMeasurer::new(NoDocument);
    assert_eq!(empty.size(true), 0);
    assert_eq!(empty.cached(), None);
}

struct Styled {
    width: Option<&'static str>,
    height: Option<&'static str>,
}

impl ScrollbarStyle for Styled {
    fn scrollbar_width(&self) -> Option<Cow<'_, str>> {
        self.width.map(Cow::Borrowed)
    }

    fn scrollbar_height(&self) -> Option<Cow<'_, str>> {
        self.height.map(Cow::Borrowed)
    }
}

#[test]
fn target_size_reads_pixel_styles_and_falls_back_to_measurement() {
    let m = ScrollbarMeasurer::new(FixedProbe(15));
    assert_eq!(m.target_size(None), ScrollbarSize::ZERO);

    let styled = Styled {
        width: Some("10px"),
        height: None,
    };
    assert_eq!(
        m.target_size(Some(&styled as &dyn ScrollbarStyle)),
        ScrollbarSize {
            width: 10,
            height: 15
        }
    );

    let odd = Styled {
        width: Some("auto"),
        height: Some("px"),
    };
    assert_eq!(
        m.target_size(Some(&odd as &dyn ScrollbarStyle)),
        ScrollbarSize::uniform(15)
    );
}

#[test]
fn parse_px_accepts_pixel_lengths_only() {
    assert_eq!(parse_px("12px"), Some(12));
    assert_eq!(parse_px(" 8.5px "), Some(9));
    assert_eq!(parse_px("0px"), Some(0));
    assert_eq!(parse_px("px"), None);
    assert_eq!(parse_px("12"), None);
    assert_eq!(parse_px("-3px"), None);
    assert_eq!(parse_px("autopx"), None);
}

#[test]
fn duplicate_column_keys_are_rejected() {
    let err = Columns::new(vec![Column::new("a", "A", 10), Column::new("a", "B", 10)]).err();
    assert_eq!(err, Some(TableError::duplicate_column_key("a")));
    assert_eq!(
        err.map(|e| e.to_string()).as_deref(),
        Some("duplicate column key 'a'")
    );
}

#[test]
fn unknown_expand_column_is_rejected() {
    let err = Table::new(options().with_expand_column_key("nope"), columns(), people(3)).err();
    assert_eq!(err, Some(TableError::unknown_expand_column("nope")));
}

#[test]
fn visible_columns_follow_horizontal_offset() {
    let cols = Columns::new(vec![
        Column::new("a", "A", 100),
        Column::new("b", "B", 200),
        Column::new("c", "C", 150),
        Column::new("d", "D", 150),
    ])
    .unwrap();
    assert_eq!(cols.total_width(), 600);
    assert_eq!(cols.column_start(2), Some(300));
    assert_eq!(
        cols.visible_columns(150, 200),
        VirtualRange {
            start_index: 1,
            end_index: 3
        }
    );
    assert!(cols.visible_columns(600, 200).is_empty());
    assert!(cols.visible_columns(0, 0).is_empty());
}

#[test]
fn header_is_widened_by_vertical_scrollbar() {
    let t = table(100).with_scrollbar_probe(FixedProbe(15));
    let layout = *t.layout();
    assert_eq!(t.scrollbar_size(), ScrollbarSize::uniform(15));
    assert!(layout.scrollbars.vertical);
    assert!(layout.scrollbars.horizontal);
    assert_eq!(layout.body_height, 270);
    assert_eq!(layout.viewport_width, 385);
    assert_eq!(layout.viewport_height, 255);
    assert_eq!(layout.header_width, t.columns().total_width() + 15);
    assert_eq!(t.header().content_width(), 615);
    assert_eq!(t.header().width(), 400);
    assert_eq!(t.header().max_scroll_left(), layout.max_scroll_left());
}

#[test]
fn header_is_not_widened_without_vertical_scrollbar() {
    let t = table(3).with_scrollbar_probe(FixedProbe(15));
    assert!(!t.layout().scrollbars.vertical);
    assert_eq!(t.layout().header_width, 600);

    let t = table(100);
    assert_eq!(t.scrollbar_size(), ScrollbarSize::ZERO);
    assert_eq!(t.layout().header_width, 600);
}

#[test]
fn body_height_never_goes_negative() {
    let t = Table::new(
        TableOptions::new(400, 20, RowHeight::fixed(30)).with_header_height(30),
        columns(),
        people(10),
    )
    .unwrap();
    assert_eq!(t.layout().body_height, 0);
    assert_eq!(t.layout().header_region_height, 20);
    assert_eq!(t.rows_rendered(), None);
    assert!(t.render_rows(&renderers()).is_empty());
    assert!(t.render_header(&renderers()).is_some());
}

#[test]
fn body_scroll_drives_header_scroll() {
    let mut t = table(100);
    t.on_body_scroll(120, 0, 1000);
    assert_eq!(t.header().scroll_left(), 120);
    assert_eq!(
        t.scroll_sync().state(),
        SyncState::Scrolling {
            last_event_ms: 1000
        }
    );

    t.tick(1100);
    assert!(t.scroll_sync().is_scrolling());
    assert!(t.is_scrolling());
    t.tick(1150);
    assert_eq!(t.scroll_sync().state(), SyncState::Idle);
    assert!(!t.is_scrolling());

    t.on_body_scroll(120, 300, 1500);
    assert_eq!(t.scroll_sync().state(), SyncState::Idle);
    assert!(t.is_scrolling());

    t.on_body_scroll(10_000, 0, 2000);
    assert_eq!(t.scroll_position().left, 200);
    assert_eq!(t.header().scroll_left(), 200);

    t.scroll_finished();
    t.scroll_to_left(40);
    assert_eq!(t.header().scroll_left(), 40);
    assert_eq!(t.scroll_sync().state(), SyncState::Idle);
}

#[test]
fn header_scroll_is_clamped_with_scrollbar_gutter() {
    let mut t = table(100).with_scrollbar_probe(FixedProbe(15));
    t.on_body_scroll(10_000, 10_000, 0);
    assert_eq!(t.scroll_position().left, 215);
    assert_eq!(t.header().scroll_left(), 215);
    assert_eq!(t.scroll_position().top, 3000 - 255);

    // Wider table: nothing left to scroll horizontally.
    t.set_size(800, 300);
    assert_eq!(t.scroll_position().left, 0);
    assert_eq!(t.header().scroll_left(), 0);
}

#[test]
fn scroll_sync_state_machine() {
    let mut sync = ScrollSync::new(100);

    // Vertical-only movement neither touches the header nor starts a sync.
    let command = sync.on_body_scroll(BodyScroll {
        position: ScrollPosition { left: 0, top: 90 },
        now_ms: 1,
    });
    assert_eq!(command, None);
    assert_eq!(sync.state(), SyncState::Idle);

    let command = sync.on_body_scroll(BodyScroll {
        position: ScrollPosition { left: 30, top: 90 },
        now_ms: 5,
    });
    assert_eq!(command, Some(HeaderCommand::ScrollTo(30)));
    assert_eq!(sync.state(), SyncState::Scrolling { last_event_ms: 5 });

    let command = sync.on_body_scroll(BodyScroll {
        position: ScrollPosition { left: 30, top: 180 },
        now_ms: 20,
    });
    assert_eq!(command, None);
    assert_eq!(sync.state(), SyncState::Scrolling { last_event_ms: 5 });

    sync.tick(104);
    assert!(sync.is_scrolling());
    sync.tick(105);
    assert!(!sync.is_scrolling());

    assert_eq!(sync.scroll_to_left(30), None);
    assert_eq!(sync.scroll_to_left(0), Some(HeaderCommand::ScrollTo(0)));
    assert!(!sync.is_scrolling());
}

#[test]
fn rendered_rows_use_stable_keys() {
    let t = table(100);
    let rows = t.render_rows(&renderers());
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].key, key("p0"));
    assert_eq!(rows[0].position, RowPosition::Body(0));
    assert_eq!(rows[3].top, 90);
    assert_eq!(rows[3].height, 30);
    assert_eq!(
        rows[2].content,
        RowContent::Cells(vec![
            "p2".to_string(),
            "Person 2".to_string(),
            "Oslo".to_string()
        ])
    );
}

#[test]
fn measurements_follow_rows_across_data_changes() {
    let mut t = Table::new(
        TableOptions::new_with_key(400, 300, RowHeight::estimated(30), row_key_field("id")),
        columns(),
        people(5),
    )
    .unwrap();
    assert_eq!(t.measure_row(0, 80), 0);
    assert_eq!(t.body().row_size(0), Some(80));

    let mut reversed = people(5);
    reversed.reverse();
    t.set_data(reversed);
    assert_eq!(t.index_of_key(&key("p0")), Some(4));
    assert_eq!(t.body().row_size(4), Some(80));
    assert_eq!(t.body().row_size(0), Some(30));
}

#[test]
fn resizing_a_row_above_the_viewport_keeps_content_still() {
    let mut t = Table::new(
        TableOptions::new(400, 300, RowHeight::estimated(30)).with_header_height(30),
        columns(),
        people(100),
    )
    .unwrap();
    t.on_body_scroll(0, 300, 0);
    assert_eq!(t.measure_row(2, 50), 20);
    assert_eq!(t.scroll_position().top, 320);

    assert_eq!(t.measure_row(50, 40), 0);
    assert_eq!(t.scroll_position().top, 320);
}

#[test]
fn fixed_tables_ignore_row_measurements() {
    let mut t = table(10);
    assert_eq!(t.measure_row(0, 80), 0);
    assert_eq!(t.body().row_size(0), Some(30));
}

#[test]
fn scroll_to_row_aligns_and_clamps() {
    let mut t = table(100);
    assert_eq!(t.scroll_to_row(50, Align::Start), 1500);
    assert_eq!(t.scroll_to_row(99, Align::Start), 2730);
    assert_eq!(t.scroll_to_row(0, Align::Auto), 0);
    assert_eq!(t.scroll_to_row(20, Align::End), 360);
    assert_eq!(t.scroll_to_row(20, Align::Auto), 360);
    assert_eq!(t.scroll_to_row(50, Align::Center), 1380);
    assert!(!t.is_scrolling());
}

#[test]
fn on_rows_rendered_fires_when_the_window_changes() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let mut t = Table::new(
        options().with_on_rows_rendered(move |r| s.lock().unwrap().push(*r)),
        columns(),
        people(100),
    )
    .unwrap();
    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[RowsRendered {
            overscan_start_index: 0,
            overscan_stop_index: 9,
            start_index: 0,
            stop_index: 8,
        }]
    );

    t.on_body_scroll(0, 10, 0);
    t.on_body_scroll(0, 15, 1);
    assert_eq!(seen.lock().unwrap().len(), 2);

    t.on_body_scroll(0, 300, 2);
    assert_eq!(
        seen.lock().unwrap().last().copied(),
        Some(RowsRendered {
            overscan_start_index: 9,
            overscan_stop_index: 19,
            start_index: 10,
            stop_index: 18,
        })
    );
}

#[test]
fn on_scrollbar_presence_change_reports_transitions() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let mut t = Table::new(
        options().with_on_scrollbar_presence_change(move |p| s.lock().unwrap().push(p)),
        columns(),
        people(100),
    )
    .unwrap();
    t.set_data(people(3));
    t.set_size(400, 300);
    t.set_size(800, 300);

    assert_eq!(
        seen.lock().unwrap().as_slice(),
        &[
            ScrollbarPresence {
                horizontal: true,
                vertical: true
            },
            ScrollbarPresence {
                horizontal: true,
                vertical: false
            },
            ScrollbarPresence {
                horizontal: false,
                vertical: false
            },
        ]
    );
}

#[test]
fn on_scroll_reports_direction_and_origin() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let s = Arc::clone(&seen);
    let mut t = Table::new(
        options().with_on_scroll(move |e| s.lock().unwrap().push(*e)),
        columns(),
        people(100),
    )
    .unwrap();

    t.on_body_scroll(100, 60, 0);
    t.scroll_to_top(0);

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen[0],
        ScrollEvent {
            scroll_left: 100,
            scroll_top: 60,
            horizontal_direction: Some(ScrollDirection::Forward),
            vertical_direction: Some(ScrollDirection::Forward),
            scroll_update_was_requested: false,
        }
    );
    assert_eq!(
        seen[1],
        ScrollEvent {
            scroll_left: 100,
            scroll_top: 0,
            horizontal_direction: None,
            vertical_direction: Some(ScrollDirection::Backward),
            scroll_update_was_requested: true,
        }
    );
}

#[test]
fn is_scrolling_reaches_renderers_only_when_enabled() {
    let flag = CellRenderer::function(|p: &CellProps<'_, Record, String>| p.is_scrolling.to_string());
    let r = TableRenderers::new(flag, title_header_cells());

    let mut t = Table::new(options().with_use_is_scrolling(true), columns(), people(100)).unwrap();
    t.on_body_scroll(0, 30, 0);
    assert_eq!(t.render_rows(&r)[0].content.cells().unwrap()[0], "true");
    t.tick(200);
    assert_eq!(t.render_rows(&r)[0].content.cells().unwrap()[0], "false");

    let mut t = table(100);
    t.on_body_scroll(0, 30, 0);
    assert!(t.is_scrolling());
    assert_eq!(t.render_rows(&r)[0].content.cells().unwrap()[0], "false");
}

struct UpperTitle;

impl<'a> Component<HeaderCellProps<'a>, String> for UpperTitle {
    fn render(&self, props: &HeaderCellProps<'a>) -> String {
        props.column.title.to_uppercase()
    }
}

#[test]
fn renderer_shapes_dispatch() {
    let t = table(100);

    let element = TableRenderers::new(CellRenderer::element("x".to_string()), title_header_cells());
    let rows = t.render_rows(&element);
    assert_eq!(rows[0].content.cells().unwrap(), ["x", "x", "x"]);

    let component = TableRenderers::new(text_cells(), HeaderCellRenderer::component(UpperTitle));
    let header = t.render_header(&component).unwrap();
    assert_eq!(
        header.header_rows[0].content,
        RowContent::Cells(vec!["ID".to_string(), "NAME".to_string(), "CITY".to_string()])
    );

    let wrapped = renderers()
        .with_row(RowRenderer::function(|p: &RowProps<'_, Record, String>| {
            p.cells.join("|")
        }))
        .with_header_row(HeaderRowRenderer::function(|p: &HeaderRowProps<'_, String>| {
            format!("[{}]", p.cells.join(","))
        }));
    let rows = t.render_rows(&wrapped);
    assert_eq!(rows[1].content, RowContent::Custom("p1|Person 1|Oslo".to_string()));
    let header = t.render_header(&wrapped).unwrap();
    assert_eq!(
        header.header_rows[0].content,
        RowContent::Custom("[Id,Name,City]".to_string())
    );
    assert_eq!(format!("{:?}", wrapped.cell), "CellRenderer(\"Function\")");
}

#[test]
fn header_renders_header_rows_then_frozen_rows() {
    let t = Table::new(
        options().with_header_height(vec![20, 0, 25]),
        columns(),
        people(100),
    )
    .unwrap()
    .with_frozen_data(vec![record("f0", "Total", "-"), record("f1", "Mean", "-")]);

    assert_eq!(t.layout().header_region_height, 105);
    assert_eq!(t.layout().body_height, 195);

    let header = t.render_header(&renderers()).unwrap();
    assert_eq!(header.height, 105);
    assert_eq!(header.width, 400);
    assert_eq!(header.content_width, 600);

    let tops: Vec<(usize, u32, u32)> = header
        .header_rows
        .iter()
        .map(|r| (r.header_index, r.top, r.height))
        .collect();
    assert_eq!(tops, vec![(0, 0, 20), (2, 20, 25)]);

    assert_eq!(header.frozen_rows.len(), 2);
    assert_eq!(header.frozen_rows[0].key, key("f0"));
    assert_eq!(header.frozen_rows[0].top, 45);
    assert_eq!(header.frozen_rows[1].top, 75);
    assert_eq!(header.frozen_rows[1].position.signed_index(), -2);
    assert_eq!(
        header.frozen_rows[0].content.cells().unwrap(),
        ["f0", "Total", "-"]
    );
}

#[test]
fn row_positions_map_frozen_rows_to_negative_indexes() {
    assert_eq!(RowPosition::Body(4).signed_index(), 4);
    assert_eq!(RowPosition::Frozen(0).signed_index(), -1);
    assert!(RowPosition::Frozen(3).is_frozen());
}

#[test]
fn expand_icon_view_and_click() {
    let icon = ExpandIcon::new(true, true).with_depth(2);
    let view = icon.view(true).unwrap();
    assert_eq!(view.glyph, Some(ExpandIcon::GLYPH));
    assert_eq!(view.rotation_deg, 90);
    assert_eq!(view.margin_left, 32);
    assert!(view.clickable);

    let click = icon.click(true);
    assert!(click.stop_propagation && click.prevent_default);
    assert_eq!(click.toggle, Some(false));
    assert_eq!(icon.click(false), ExpandClick::default());

    let leaf = ExpandIcon::new(false, true).with_depth(1);
    let view = leaf.view(true).unwrap();
    assert_eq!(view.glyph, None);
    assert_eq!(view.rotation_deg, 0);
    assert!(!view.clickable);
    assert_eq!(leaf.click(true), ExpandClick::default());

    assert_eq!(ExpandIcon::new(false, false).with_indent_size(0).view(true), None);
}

#[test]
fn expand_column_hosts_the_icon_and_toggles_rows() {
    let expanded = log();
    let e = Arc::clone(&expanded);
    let handlers = RowEventHandlers::new().with_on_row_expand(move |x: &RowExpand<'_, Record, RowKey>| {
        e.lock().unwrap().push(format!("{}:{}", x.row_key, x.expanded));
    });
    let mut t = Table::new(
        options()
            .with_expand_column_key("name")
            .with_row_depth(|i, _| (i % 3) as u32)
            .with_row_expandable(|i, _| i % 2 == 0)
            .with_row_event_handlers(handlers),
        columns(),
        people(100),
    )
    .unwrap();

    let r = TableRenderers::new(
        CellRenderer::function(|p: &CellProps<'_, Record, String>| {
            let text = p.cell_data.as_deref().unwrap_or("-");
            match p.expand_icon {
                Some(icon) => format!("{icon} {text}"),
                None => text.to_string(),
            }
        }),
        HeaderCellRenderer::function(|p: &HeaderCellProps<'_>| {
            format!("{}{}", p.column.title, if p.is_expand_column { "*" } else { "" })
        }),
    )
    .with_expand_icon(ExpandIconRenderer::function(
        |p: &ExpandIconProps<'_, Record>| format!("icon:{}:{}", p.icon.depth, p.icon.expanded),
    ));

    let rows = t.render_rows(&r);
    assert_eq!(rows[0].content.cells().unwrap(), ["p0", "icon:0:false Person 0", "Oslo"]);
    assert_eq!(rows[1].content.cells().unwrap()[1], "icon:1:false Person 1");
    let header = t.render_header(&r).unwrap();
    assert_eq!(header.header_rows[0].content.cells().unwrap(), ["Id", "Name*", "City"]);

    let click = t.click_expand_icon(RowPosition::Body(0));
    assert_eq!(click.toggle, Some(true));
    assert!(t.is_row_expanded(RowPosition::Body(0)));
    let rows = t.render_rows(&r);
    assert!(rows[0].expanded);
    assert_eq!(rows[0].content.cells().unwrap()[1], "icon:0:true Person 0");

    assert_eq!(t.click_expand_icon(RowPosition::Body(1)), ExpandClick::default());
    assert!(!t.is_row_expanded(RowPosition::Body(1)));

    let icon = t.expand_icon(RowPosition::Body(2)).unwrap();
    assert_eq!(icon.view(true).unwrap().margin_left, 32);

    t.click_expand_icon(RowPosition::Body(0));
    assert_eq!(expanded.lock().unwrap().as_slice(), ["p0:true", "p0:false"]);

    assert_eq!(table(5).expand_icon(RowPosition::Body(0)), None);
}

#[test]
fn row_events_reach_handlers_and_track_hover() {
    let events = log();
    let (a, b, c) = (Arc::clone(&events), Arc::clone(&events), Arc::clone(&events));
    let handlers = RowEventHandlers::new()
        .with_on_row_hover(move |h: &RowHover<'_, Record, RowKey>| {
            a.lock().unwrap().push(format!("hover:{}:{}", h.row_key, h.hovered));
        })
        .on(RowEventKind::MouseEnter, move |e: &RowEvent<'_, Record, RowKey>| {
            b.lock().unwrap().push(format!("enter:{}", e.row_key));
        })
        .on(RowEventKind::Click, move |e: &RowEvent<'_, Record, RowKey>| {
            c.lock().unwrap().push(format!("click:{}", e.row_key));
        });
    assert!(handlers.handles(RowEventKind::Click));
    assert!(!handlers.handles(RowEventKind::DoubleClick));

    let mut t = Table::new(options().with_row_event_handlers(handlers), columns(), people(100)).unwrap();

    assert!(t.dispatch_row_event(RowPosition::Body(3), RowEventKind::MouseEnter));
    assert_eq!(t.hovered_row_key(), Some(&key("p3")));
    assert!(t.render_rows(&renderers())[3].hovered);

    assert!(t.dispatch_row_event(RowPosition::Body(3), RowEventKind::Click));
    assert!(!t.dispatch_row_event(RowPosition::Body(3), RowEventKind::DoubleClick));
    assert!(t.dispatch_row_event(RowPosition::Body(3), RowEventKind::MouseLeave));
    assert_eq!(t.hovered_row_key(), None);
    assert!(!t.dispatch_row_event(RowPosition::Body(999), RowEventKind::Click));

    assert_eq!(
        events.lock().unwrap().as_slice(),
        ["hover:p3:true", "enter:p3", "click:p3", "hover:p3:false"]
    );
}

#[test]
fn frozen_rows_keep_hover_and_expand_apart_from_body_rows() {
    let mut t = Table::new(
        TableOptions::new(400, 300, RowHeight::fixed(30))
            .with_header_height(30)
            .with_expand_column_key("name"),
        columns(),
        people(20),
    )
    .unwrap()
    .with_frozen_data(people(1));
    assert_eq!(t.row_key(RowPosition::Frozen(0)), t.row_key(RowPosition::Body(0)));

    assert!(t.set_row_expanded(RowPosition::Frozen(0), true));
    assert!(t.is_row_expanded(RowPosition::Frozen(0)));
    assert!(!t.is_row_expanded(RowPosition::Body(0)));
    assert!(!t.expand_icon(RowPosition::Body(0)).unwrap().expanded);
    assert!(t.expand_icon(RowPosition::Frozen(0)).unwrap().expanded);

    t.dispatch_row_event(RowPosition::Frozen(0), RowEventKind::MouseEnter);
    assert!(t.is_row_hovered(RowPosition::Frozen(0)));
    assert!(!t.is_row_hovered(RowPosition::Body(0)));
    let r = renderers();
    let rows = t.render_rows(&r);
    assert!(!rows[0].hovered);
    assert!(!rows[0].expanded);
    let header = t.render_header(&r).unwrap();
    assert!(header.frozen_rows[0].hovered);
    assert!(header.frozen_rows[0].expanded);

    // Leaving a body row with the same key does not clear the frozen row's hover.
    t.dispatch_row_event(RowPosition::Body(0), RowEventKind::MouseLeave);
    assert!(t.is_row_hovered(RowPosition::Frozen(0)));

    t.dispatch_row_event(RowPosition::Body(0), RowEventKind::MouseEnter);
    assert!(t.is_row_hovered(RowPosition::Body(0)));
    assert!(!t.is_row_hovered(RowPosition::Frozen(0)));
    assert_eq!(t.hovered_row_key(), Some(&RowKey::Index(0)));
}

#[test]
fn row_key_field_falls_back_to_index() {
    let by_id: RowKeyFn<Record, RowKey> = row_key_field("id");
    let by_missing: RowKeyFn<Record, RowKey> = row_key_field("missing");
    let r = record("p7", "Seven", "Bergen");
    assert_eq!(by_id(7, &r), key("p7"));
    assert_eq!(by_missing(7, &r), RowKey::Index(7));
    assert_eq!(RowKey::Index(7).to_string(), "#7");
}

#[test]
fn frame_state_restores_position() {
    let mut a = table(100);
    a.scroll_to_position(ScrollPosition { left: 100, top: 600 });
    let state = a.frame_state();
    assert_eq!(
        state,
        TableFrameState {
            width: 400,
            height: 300,
            scroll: ScrollPosition { left: 100, top: 600 },
            is_scrolling: false,
        }
    );

    let mut b = table(100);
    b.restore_frame_state(state, 0);
    assert_eq!(b.frame_state(), state);
    assert_eq!(b.header().scroll_left(), 100);

    a.on_body_scroll(50, 90, 10);
    let mut c = table(100);
    c.restore_frame_state(a.frame_state(), 500);
    assert!(c.is_scrolling());
    c.tick(650);
    assert!(!c.is_scrolling());
}

#[test]
fn set_options_keeps_measurements_when_keys_are_unchanged() {
    let mut t = Table::new(
        TableOptions::new_with_key(400, 300, RowHeight::estimated(30), row_key_field("id")),
        columns(),
        people(20),
    )
    .unwrap();
    t.measure_row(1, 90);
    t.update_options(|o| o.overscan_row_count = 4).unwrap();
    assert_eq!(t.body().row_size(1), Some(90));
    assert_eq!(t.body().options().overscan, 4);

    let err = t.update_options(|o| o.expand_column_key = Some("nope".to_string()));
    assert_eq!(err, Err(TableError::unknown_expand_column("nope")));
    assert_eq!(t.options().expand_column_key, None);
}
