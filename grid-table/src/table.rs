use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;

use crate::key::{RowKeySet, TableKey};
use crate::record::RowKeyFn;
use crate::{
    Align, BodyScroll, CellProps, CellSource, Columns, ExpandClick, ExpandIcon, ExpandIconProps,
    HeaderCellProps, HeaderRowProps, HeaderSlotKind, LayoutInput, RenderedHeader,
    RenderedHeaderRow, RenderedRow, RowContent, RowEvent, RowEventKind, RowExpand, RowKey,
    RowPosition, RowProps, RowVirtualizer, RowVirtualizerOptions, RowsRendered, ScrollDirection,
    ScrollEvent, ScrollPosition, ScrollSync, ScrollbarMeasurer, ScrollbarProbe, ScrollbarSize,
    TableError, TableFrameState, TableHeader, TableLayout, TableOptions, TableRenderers,
    VirtualRange,
};

type BoxedProbe = Box<dyn ScrollbarProbe + Send>;

/// Hover and expand state of one row region. Body and frozen rows key their state separately,
/// since their keys may coincide (index keys).
struct RowRegion<K> {
    hovered: Option<K>,
    expanded: RowKeySet<K>,
}

impl<K> Default for RowRegion<K> {
    fn default() -> Self {
        Self {
            hovered: None,
            expanded: RowKeySet::default(),
        }
    }
}

/// A virtualized table: a fixed header region over a windowed, two-axis scrolling body.
///
/// The table owns the data and drives three parts that never talk to each other directly:
/// - the body [`RowVirtualizer`] (which rows are mounted, and where);
/// - the [`TableHeader`] (column header rows and frozen rows);
/// - the [`ScrollSync`] coordinator, whose commands keep the header's horizontal offset equal to
///   the body's.
///
/// The host calls `on_body_scroll`/`tick`/`set_size` as UI events arrive, then mounts the output of
/// `render_header` and `render_rows`.
pub struct Table<R, K = RowKey> {
    options: TableOptions<R, K>,
    columns: Columns,
    data: Arc<[R]>,
    frozen_data: Arc<[R]>,

    body: RowVirtualizer<K>,
    header: TableHeader,
    sync: ScrollSync,
    scrollbar: ScrollbarMeasurer<BoxedProbe>,
    layout: TableLayout,
    scroll_left: u64,

    body_rows: RowRegion<K>,
    frozen_rows: RowRegion<K>,
    last_rows_rendered: Option<RowsRendered>,
    last_scrollbars: Option<crate::ScrollbarPresence>,
}

impl<R, K> Table<R, K>
where
    R: Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    pub fn new(
        options: TableOptions<R, K>,
        columns: Columns,
        data: impl Into<Arc<[R]>>,
    ) -> Result<Self, TableError> {
        validate_expand_column(&options, &columns)?;
        let data: Arc<[R]> = data.into();
        gdebug!(
            rows = data.len(),
            columns = columns.len(),
            width = options.width,
            height = options.height,
            "Table::new"
        );

        let body = RowVirtualizer::new(body_options(&options, &data));
        let sync = ScrollSync::new(options.is_scrolling_reset_delay_ms);
        let mut table = Self {
            options,
            columns,
            data,
            frozen_data: Arc::from(Vec::new()),
            body,
            header: TableHeader::default(),
            sync,
            scrollbar: ScrollbarMeasurer::detached(),
            layout: TableLayout::default(),
            scroll_left: 0,
            body_rows: RowRegion::default(),
            frozen_rows: RowRegion::default(),
            last_rows_rendered: None,
            last_scrollbars: None,
        };
        table.relayout();
        Ok(table)
    }

    pub fn with_frozen_data(mut self, frozen_data: impl Into<Arc<[R]>>) -> Self {
        self.set_frozen_data(frozen_data);
        self
    }

    pub fn with_scrollbar_probe(mut self, probe: impl ScrollbarProbe + Send + 'static) -> Self {
        self.set_scrollbar_probe(probe);
        self
    }

    pub fn options(&self) -> &TableOptions<R, K> {
        &self.options
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn frozen_data(&self) -> &[R] {
        &self.frozen_data
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    pub fn body(&self) -> &RowVirtualizer<K> {
        &self.body
    }

    pub fn scroll_sync(&self) -> &ScrollSync {
        &self.sync
    }

    /// Replaces the options. Row heights are rebuilt only when the height mode or row keys changed.
    pub fn set_options(&mut self, options: TableOptions<R, K>) -> Result<(), TableError> {
        validate_expand_column(&options, &self.columns)?;
        let keys_changed = !Arc::ptr_eq(&self.options.row_key, &options.row_key);
        self.options = options;
        gtrace!(keys_changed, "Table::set_options");

        let row_height = self.options.row_height.clone();
        let overscan = self.options.overscan_row_count;
        let use_scrollend_event = self.options.use_scrollend_event;
        let delay_ms = self.options.is_scrolling_reset_delay_ms;
        let get_row_key = keys_changed.then(|| row_key_lookup(&self.options.row_key, &self.data));
        self.body.update_options(|o| {
            o.row_height = row_height;
            o.overscan = overscan;
            o.use_scrollend_event = use_scrollend_event;
            o.is_scrolling_reset_delay_ms = delay_ms;
            if let Some(get_row_key) = get_row_key {
                o.get_row_key = Arc::new(get_row_key);
            }
        });
        self.sync.set_reset_delay_ms(delay_ms);
        self.relayout();
        Ok(())
    }

    pub fn update_options(
        &mut self,
        f: impl FnOnce(&mut TableOptions<R, K>),
    ) -> Result<(), TableError> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    /// Replaces the body rows.
    ///
    /// Measured heights, the hovered row and expanded rows follow their keys into the new data.
    pub fn set_data(&mut self, data: impl Into<Arc<[R]>>) {
        let data: Arc<[R]> = data.into();
        gdebug!(rows = data.len(), "Table::set_data");
        self.body
            .set_rows(data.len(), row_key_lookup(&self.options.row_key, &data));
        self.data = data;
        self.relayout();
    }

    pub fn set_frozen_data(&mut self, frozen_data: impl Into<Arc<[R]>>) {
        self.frozen_data = frozen_data.into();
        self.relayout();
    }

    pub fn set_columns(&mut self, columns: Columns) -> Result<(), TableError> {
        validate_expand_column(&self.options, &columns)?;
        self.columns = columns;
        self.relayout();
        Ok(())
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        if self.options.width == width && self.options.height == height {
            return;
        }
        self.options.width = width;
        self.options.height = height;
        self.relayout();
    }

    pub fn set_scrollbar_probe(&mut self, probe: impl ScrollbarProbe + Send + 'static) {
        let probe: BoxedProbe = Box::new(probe);
        self.scrollbar.set_probe(Some(probe));
        self.relayout();
    }

    /// Measures the scrollbar again, replacing the cached thickness.
    pub fn remeasure_scrollbar(&mut self) -> u32 {
        let size = self.scrollbar.size(true);
        self.relayout();
        size
    }

    pub fn scrollbar_size(&self) -> ScrollbarSize {
        self.scrollbar.scrollbar_size()
    }

    /// Reports the rendered height of body row `index` (variable row heights only).
    ///
    /// Content under the viewport stays put when a row above it changes height. Returns the
    /// resulting scroll shift.
    pub fn measure_row(&mut self, index: usize, height: u32) -> i64 {
        let shift = self.body.resize_row(index, height);
        self.relayout();
        shift
    }

    /// A user scroll of the body, as reported by the host's scroll container.
    pub fn on_body_scroll(&mut self, scroll_left: u64, scroll_top: u64, now_ms: u64) {
        gtrace!(scroll_left, scroll_top, now_ms, "Table::on_body_scroll");
        let prev = self.scroll_position();
        self.scroll_left = scroll_left.min(self.layout.max_scroll_left());
        self.body.apply_scroll_event(scroll_top, now_ms);

        let position = self.scroll_position();
        if let Some(command) = self.sync.on_body_scroll(BodyScroll { position, now_ms }) {
            self.header.apply(command);
        }
        self.emit_scroll(prev, false);
        self.emit_rows_rendered();
    }

    /// Advances time-based state (`is_scrolling` debounce).
    pub fn tick(&mut self, now_ms: u64) {
        self.body.update_scrolling(now_ms);
        self.sync.tick(now_ms);
    }

    /// Native scroll-end notification.
    pub fn scroll_finished(&mut self) {
        self.body.set_is_scrolling(false);
        self.sync.finish();
    }

    pub fn is_scrolling(&self) -> bool {
        self.body.is_scrolling()
    }

    pub fn scroll_position(&self) -> ScrollPosition {
        ScrollPosition {
            left: self.scroll_left,
            top: self.body.scroll_offset(),
        }
    }

    /// Programmatic scroll of header and body together. Offsets are clamped.
    pub fn scroll_to_position(&mut self, position: ScrollPosition) {
        let prev = self.scroll_position();
        self.scroll_left = position.left.min(self.layout.max_scroll_left());
        if let Some(command) = self.sync.scroll_to_left(self.scroll_left) {
            self.header.apply(command);
        }
        self.body.set_scroll_offset_clamped(position.top);
        self.emit_scroll(prev, true);
        self.emit_rows_rendered();
    }

    pub fn scroll_to_top(&mut self, top: u64) {
        self.scroll_to_position(ScrollPosition {
            left: self.scroll_left,
            top,
        });
    }

    pub fn scroll_to_left(&mut self, left: u64) {
        self.scroll_to_position(ScrollPosition {
            left,
            top: self.body.scroll_offset(),
        });
    }

    /// Scrolls body row `index` into view. Returns the applied vertical offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> u64 {
        let top = self.body.scroll_to_row_offset(index, align);
        self.scroll_to_top(top);
        self.body.scroll_offset()
    }

    /// The `on_rows_rendered` payload for the current position.
    pub fn rows_rendered(&self) -> Option<RowsRendered> {
        self.body.rows_rendered()
    }

    /// Columns intersecting the body's horizontal viewport.
    pub fn visible_columns(&self) -> VirtualRange {
        self.columns
            .visible_columns(self.scroll_left, self.layout.viewport_width)
    }

    pub fn row_data(&self, position: RowPosition) -> Option<&R> {
        match position {
            RowPosition::Body(i) => self.data.get(i),
            RowPosition::Frozen(i) => self.frozen_data.get(i),
        }
    }

    pub fn row_key(&self, position: RowPosition) -> Option<K> {
        let row = self.row_data(position)?;
        let (RowPosition::Body(i) | RowPosition::Frozen(i)) = position;
        Some((self.options.row_key)(i, row))
    }

    /// Index of the body row with `key`. Linear in the number of rows.
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        (0..self.data.len()).find(|&i| self.body.key_for(i) == *key)
    }

    /// Key of the row under the pointer, body or frozen.
    pub fn hovered_row_key(&self) -> Option<&K> {
        self.body_rows
            .hovered
            .as_ref()
            .or(self.frozen_rows.hovered.as_ref())
    }

    pub fn is_row_hovered(&self, position: RowPosition) -> bool {
        self.row_key(position)
            .is_some_and(|key| self.region(position).hovered.as_ref() == Some(&key))
    }

    /// Routes a pointer event of a row to the configured handlers, tracking hover state.
    ///
    /// Returns whether any handler ran.
    pub fn dispatch_row_event(&mut self, position: RowPosition, kind: RowEventKind) -> bool {
        let Some(key) = self.row_key(position) else {
            gwarn!(?position, ?kind, "row event for a row outside the data");
            return false;
        };
        match kind.hover_state() {
            Some(true) => {
                self.body_rows.hovered = None;
                self.frozen_rows.hovered = None;
                self.region_mut(position).hovered = Some(key.clone());
            }
            Some(false) => {
                let region = self.region_mut(position);
                if region.hovered.as_ref() == Some(&key) {
                    region.hovered = None;
                }
            }
            None => {}
        }
        let Some(row_data) = self.row_data(position) else {
            return false;
        };
        self.options.row_event_handlers.dispatch(&RowEvent {
            kind,
            row_data,
            row_index: position,
            row_key: &key,
        })
    }

    pub fn is_row_expanded(&self, position: RowPosition) -> bool {
        self.row_key(position)
            .is_some_and(|key| self.region(position).expanded.contains(&key))
    }

    /// Sets the expand state of a row and reports it to `on_row_expand`.
    ///
    /// Returns whether the state changed.
    pub fn set_row_expanded(&mut self, position: RowPosition, expanded: bool) -> bool {
        let Some(key) = self.row_key(position) else {
            return false;
        };
        let region = self.region_mut(position);
        let changed = if expanded {
            region.expanded.insert(key.clone())
        } else {
            region.expanded.remove(&key)
        };
        if changed {
            if let Some(row_data) = self.row_data(position) {
                self.options.row_event_handlers.expand(&RowExpand {
                    expanded,
                    row_data,
                    row_index: position,
                    row_key: &key,
                });
            }
        }
        changed
    }

    /// The expand icon of a row, `None` when the table has no expand column.
    pub fn expand_icon(&self, position: RowPosition) -> Option<ExpandIcon> {
        self.options.expand_column_key.as_ref()?;
        let row = self.row_data(position)?;
        let key = self.row_key(position)?;
        Some(self.expand_icon_for(position, row, &key))
    }

    /// Handles a click on a row's expand icon, toggling the row when it is expandable.
    pub fn click_expand_icon(&mut self, position: RowPosition) -> ExpandClick {
        let Some(icon) = self.expand_icon(position) else {
            return ExpandClick::default();
        };
        let click = icon.click(true);
        if let Some(expanded) = click.toggle {
            self.set_row_expanded(position, expanded);
        }
        click
    }

    pub fn frame_state(&self) -> TableFrameState {
        TableFrameState {
            width: self.options.width,
            height: self.options.height,
            scroll: self.scroll_position(),
            is_scrolling: self.is_scrolling(),
        }
    }

    /// Restores a snapshot from [`Self::frame_state`].
    ///
    /// A snapshot taken mid-scroll restarts the scrolling debounce at `now_ms`.
    pub fn restore_frame_state(&mut self, state: TableFrameState, now_ms: u64) {
        self.set_size(state.width, state.height);
        if state.is_scrolling {
            self.on_body_scroll(state.scroll.left, state.scroll.top, now_ms);
        } else {
            self.scroll_to_position(state.scroll);
        }
    }

    fn relayout(&mut self) {
        let frozen_row_height = self.options.row_height.nominal();
        let layout = TableLayout::compute(LayoutInput {
            width: self.options.width,
            height: self.options.height,
            header_height: &self.options.header_height,
            frozen_row_count: self.frozen_data.len(),
            frozen_row_height,
            body_width: self.columns.total_width(),
            rows_height: self.body.total_height(),
            scrollbar: self.scrollbar.scrollbar_size(),
        });
        gtrace!(
            body_height = layout.body_height,
            header_width = layout.header_width,
            "Table::relayout"
        );
        self.layout = layout;
        self.header.update_layout(
            &layout,
            &self.options.header_height,
            self.frozen_data.len(),
            frozen_row_height,
        );

        let top = self.body.scroll_offset();
        self.body
            .set_viewport_and_scroll_clamped(layout.viewport_height, top);
        self.scroll_left = self.scroll_left.min(layout.max_scroll_left());
        if let Some(command) = self.sync.scroll_to_left(self.scroll_left) {
            self.header.apply(command);
        }

        self.emit_scrollbar_presence();
        self.emit_rows_rendered();
    }

    fn emit_scroll(&self, prev: ScrollPosition, requested: bool) {
        let cur = self.scroll_position();
        if cur == prev && !requested {
            return;
        }
        if let Some(on_scroll) = &self.options.on_scroll {
            on_scroll(&ScrollEvent {
                scroll_left: cur.left,
                scroll_top: cur.top,
                horizontal_direction: direction(prev.left, cur.left),
                vertical_direction: direction(prev.top, cur.top),
                scroll_update_was_requested: requested,
            });
        }
    }

    fn emit_rows_rendered(&mut self) {
        let current = self.body.rows_rendered();
        if current == self.last_rows_rendered {
            return;
        }
        self.last_rows_rendered = current;
        if let (Some(rendered), Some(cb)) = (current, &self.options.on_rows_rendered) {
            cb(&rendered);
        }
    }

    fn emit_scrollbar_presence(&mut self) {
        let presence = self.layout.scrollbars;
        if self.last_scrollbars == Some(presence) {
            return;
        }
        self.last_scrollbars = Some(presence);
        if let Some(cb) = &self.options.on_scrollbar_presence_change {
            cb(presence);
        }
    }

    fn region(&self, position: RowPosition) -> &RowRegion<K> {
        match position {
            RowPosition::Body(_) => &self.body_rows,
            RowPosition::Frozen(_) => &self.frozen_rows,
        }
    }

    fn region_mut(&mut self, position: RowPosition) -> &mut RowRegion<K> {
        match position {
            RowPosition::Body(_) => &mut self.body_rows,
            RowPosition::Frozen(_) => &mut self.frozen_rows,
        }
    }

    fn render_is_scrolling(&self) -> bool {
        self.options.use_is_scrolling && self.body.is_scrolling()
    }

    fn expand_icon_for(&self, position: RowPosition, row: &R, key: &K) -> ExpandIcon {
        let (RowPosition::Body(i) | RowPosition::Frozen(i)) = position;
        let expandable = self
            .options
            .row_expandable
            .as_ref()
            .is_none_or(|f| f(i, row));
        let depth = self.options.row_depth.as_ref().map_or(0, |f| f(i, row));
        ExpandIcon {
            expandable,
            expanded: self.region(position).expanded.contains(key),
            indent_size: self.options.indent_size,
            depth,
        }
    }
}

impl<R, K> Table<R, K>
where
    R: CellSource + Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    /// Renders the mounted body rows: the visible window plus overscan, top to bottom.
    pub fn render_rows<N: Clone>(&self, renderers: &TableRenderers<R, N>) -> Vec<RenderedRow<K, N>> {
        let mut out = Vec::with_capacity(self.body.virtual_range().len());
        let is_scrolling = self.render_is_scrolling();
        self.body.for_each_virtual_row(|row| {
            let position = RowPosition::Body(row.index);
            let row_data = &self.data[row.index];
            let content = self.render_row_content(renderers, position, row_data, &row.key, is_scrolling);
            out.push(RenderedRow {
                hovered: self.body_rows.hovered.as_ref() == Some(&row.key),
                expanded: self.body_rows.expanded.contains(&row.key),
                key: row.key,
                position,
                top: row.start,
                height: row.size,
                content,
            });
        });
        out
    }

    /// Renders the header region, or `None` when it has no height.
    pub fn render_header<N: Clone>(
        &self,
        renderers: &TableRenderers<R, N>,
    ) -> Option<RenderedHeader<K, N>> {
        if !self.layout.has_header() || !self.header.is_visible() {
            return None;
        }
        let is_scrolling = self.render_is_scrolling();
        let expand_key = self.options.expand_column_key.as_deref();
        let mut header_rows = Vec::new();
        let mut frozen_rows = Vec::new();

        self.header.for_each_slot(|slot| match slot.kind {
            HeaderSlotKind::Header(header_index) => {
                let cells: Vec<N> = self
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(column_index, column)| {
                        renderers.header_cell.render(&HeaderCellProps {
                            columns: &self.columns,
                            column,
                            column_index,
                            header_index,
                            is_expand_column: expand_key == Some(column.key.as_str()),
                        })
                    })
                    .collect();
                let content = match &renderers.header_row {
                    Some(header_row) => RowContent::Custom(header_row.render(&HeaderRowProps {
                        cells: &cells,
                        columns: &self.columns,
                        header_index,
                    })),
                    None => RowContent::Cells(cells),
                };
                header_rows.push(RenderedHeaderRow {
                    header_index,
                    top: slot.top,
                    height: slot.height,
                    content,
                });
            }
            HeaderSlotKind::Frozen(i) => {
                let Some(row_data) = self.frozen_data.get(i) else {
                    return;
                };
                let position = RowPosition::Frozen(i);
                let key = (self.options.row_key)(i, row_data);
                let content =
                    self.render_row_content(renderers, position, row_data, &key, is_scrolling);
                frozen_rows.push(RenderedRow {
                    hovered: self.frozen_rows.hovered.as_ref() == Some(&key),
                    expanded: self.frozen_rows.expanded.contains(&key),
                    key,
                    position,
                    top: u64::from(slot.top),
                    height: slot.height,
                    content,
                });
            }
        });

        Some(RenderedHeader {
            width: self.header.width(),
            height: self.header.height(),
            content_width: self.header.content_width(),
            scroll_left: self.header.scroll_left(),
            header_rows,
            frozen_rows,
        })
    }

    fn render_row_content<N: Clone>(
        &self,
        renderers: &TableRenderers<R, N>,
        position: RowPosition,
        row_data: &R,
        key: &K,
        is_scrolling: bool,
    ) -> RowContent<N> {
        let expand_key = self.options.expand_column_key.as_deref();
        let icon = self.expand_icon_for(position, row_data, key);
        let expand_icon = match (expand_key, &renderers.expand_icon) {
            (Some(_), Some(renderer)) => Some(renderer.render(&ExpandIconProps {
                row_data,
                row_index: position,
                icon,
            })),
            _ => None,
        };

        let cells: Vec<N> = self
            .columns
            .iter()
            .enumerate()
            .map(|(column_index, column)| {
                let is_expand_column = expand_key == Some(column.key.as_str());
                renderers.cell.render(&CellProps {
                    is_scrolling,
                    columns: &self.columns,
                    column,
                    column_index,
                    row_data,
                    row_index: position,
                    cell_data: row_data.cell(&column.data_index),
                    expand_icon: expand_icon.as_ref().filter(|_| is_expand_column),
                })
            })
            .collect();

        match &renderers.row {
            Some(row) => RowContent::Custom(row.render(&RowProps {
                is_scrolling,
                cells: &cells,
                columns: &self.columns,
                row_data,
                row_index: position,
                depth: icon.depth,
            })),
            None => RowContent::Cells(cells),
        }
    }
}

impl<R, K> core::fmt::Debug for Table<R, K>
where
    R: Send + Sync + 'static,
    K: TableKey + core::fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Table")
            .field("options", &self.options)
            .field("columns", &self.columns.len())
            .field("rows", &self.data.len())
            .field("frozen_rows", &self.frozen_data.len())
            .field("layout", &self.layout)
            .field("scroll_left", &self.scroll_left)
            .field("scroll_top", &self.body.scroll_offset())
            .field("hovered_row_key", &self.hovered_row_key())
            .finish_non_exhaustive()
    }
}

fn validate_expand_column<R, K>(
    options: &TableOptions<R, K>,
    columns: &Columns,
) -> Result<(), TableError> {
    match &options.expand_column_key {
        Some(key) if columns.get(key).is_none() => Err(TableError::unknown_expand_column(key.clone())),
        _ => Ok(()),
    }
}

fn body_options<R, K>(options: &TableOptions<R, K>, data: &Arc<[R]>) -> RowVirtualizerOptions<K>
where
    R: Send + Sync + 'static,
    K: 'static,
{
    RowVirtualizerOptions::new_with_key(
        data.len(),
        options.row_height.clone(),
        row_key_lookup(&options.row_key, data),
    )
    .with_overscan(options.overscan_row_count)
    .with_use_scrollend_event(options.use_scrollend_event)
    .with_is_scrolling_reset_delay_ms(options.is_scrolling_reset_delay_ms)
}

fn row_key_lookup<R, K>(
    row_key: &RowKeyFn<R, K>,
    data: &Arc<[R]>,
) -> impl Fn(usize) -> K + Send + Sync + 'static
where
    R: Send + Sync + 'static,
    K: 'static,
{
    let row_key = Arc::clone(row_key);
    let data = Arc::clone(data);
    move |i| row_key(i, &data[i])
}

fn direction(prev: u64, cur: u64) -> Option<ScrollDirection> {
    match cur.cmp(&prev) {
        cmp::Ordering::Greater => Some(ScrollDirection::Forward),
        cmp::Ordering::Less => Some(ScrollDirection::Backward),
        cmp::Ordering::Equal => None,
    }
}
