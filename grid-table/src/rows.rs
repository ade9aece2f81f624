use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;

use crate::fenwick::RowSums;
use crate::key::{RowSizeMap, TableKey};
use crate::{
    Align, RowHeight, RowKey, RowVirtualizerOptions, RowsRendered, ScrollDirection, VirtualRange,
    VirtualRow,
};

/// Vertical windowing for the table body.
///
/// Owns no UI objects. The host feeds it the viewport height and scroll offsets; it answers which
/// rows to mount and where each one starts. Row heights are fixed or variable; variable heights
/// may be refined by measurement, and measurements are cached by row key so they survive
/// reordering and data replacement.
#[derive(Clone, Debug)]
pub struct RowVirtualizer<K = RowKey> {
    options: RowVirtualizerOptions<K>,
    viewport_height: u32,
    scroll_offset: u64,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    last_scroll_event_ms: Option<u64>,

    heights: Vec<u32>,
    measured: Vec<bool>,
    sums: RowSums,
    key_heights: RowSizeMap<K>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: TableKey> RowVirtualizer<K> {
    pub fn new(options: RowVirtualizerOptions<K>) -> Self {
        gdebug!(
            count = options.count,
            overscan = options.overscan,
            fixed = options.row_height.is_fixed(),
            "RowVirtualizer::new"
        );
        let mut v = Self {
            viewport_height: options.initial_viewport_height,
            scroll_offset: options.initial_offset,
            is_scrolling: false,
            scroll_direction: None,
            last_scroll_event_ms: None,
            heights: Vec::new(),
            measured: Vec::new(),
            sums: RowSums::default(),
            key_heights: RowSizeMap::<K>::default(),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        v.rebuild_heights();
        v
    }

    pub fn options(&self) -> &RowVirtualizerOptions<K> {
        &self.options
    }

    /// Replaces the options, rebuilding row heights only when the count, height mode or key
    /// mapping changed.
    pub fn set_options(&mut self, options: RowVirtualizerOptions<K>) {
        let rebuild = self.options.count != options.count
            || !self.options.row_height.same_as(&options.row_height)
            || !Arc::ptr_eq(&self.options.get_row_key, &options.get_row_key);
        self.options = options;
        gtrace!(
            count = self.options.count,
            overscan = self.options.overscan,
            rebuild,
            "RowVirtualizer::set_options"
        );
        if rebuild {
            self.rebuild_heights();
        }
        self.notify();
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut RowVirtualizerOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&RowVirtualizer<K>, bool) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self, self.is_scrolling);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Coalesces the `on_change` notifications of every update made inside `f` into one.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn set_is_scrolling(&mut self, is_scrolling: bool) {
        if self.is_scrolling == is_scrolling {
            return;
        }
        self.is_scrolling = is_scrolling;
        if !is_scrolling {
            self.scroll_direction = None;
            self.last_scroll_event_ms = None;
        }
        self.notify();
    }

    pub fn notify_scroll_event(&mut self, now_ms: u64) {
        self.last_scroll_event_ms = Some(now_ms);
        self.set_is_scrolling(true);
    }

    /// Resets `is_scrolling` once `is_scrolling_reset_delay_ms` passed without scroll events.
    pub fn update_scrolling(&mut self, now_ms: u64) {
        if self.options.use_scrollend_event || !self.is_scrolling {
            return;
        }
        let Some(last) = self.last_scroll_event_ms else {
            return;
        };
        if now_ms.saturating_sub(last) >= self.options.is_scrolling_reset_delay_ms {
            self.set_is_scrolling(false);
        }
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.notify();
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        let prev = self.scroll_offset;
        self.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: u64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Applies a user scroll (wheel/drag) reported by the host and marks the body as scrolling.
    pub fn apply_scroll_event(&mut self, offset: u64, now_ms: u64) {
        gtrace!(offset, now_ms, "RowVirtualizer::apply_scroll_event");
        self.batch_update(|v| {
            v.set_scroll_offset_clamped(offset);
            v.notify_scroll_event(now_ms);
        });
    }

    pub fn set_viewport_and_scroll_clamped(&mut self, viewport_height: u32, scroll_offset: u64) {
        self.batch_update(|v| {
            v.set_viewport_height(viewport_height);
            v.set_scroll_offset_clamped(scroll_offset);
        });
    }

    pub fn set_count(&mut self, count: usize) {
        if self.options.count == count {
            return;
        }
        self.options.count = count;
        self.rebuild_heights();
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn set_row_height(&mut self, row_height: RowHeight) {
        if self.options.row_height.same_as(&row_height) {
            return;
        }
        self.options.row_height = row_height;
        self.rebuild_heights();
        self.notify();
    }

    pub fn set_get_row_key(&mut self, f: impl Fn(usize) -> K + Send + Sync + 'static) {
        self.options.get_row_key = Arc::new(f);
        self.rebuild_heights();
        self.notify();
    }

    /// Replaces both the row count and the key mapping with a single rebuild.
    pub fn set_rows(&mut self, count: usize, get_row_key: impl Fn(usize) -> K + Send + Sync + 'static) {
        gdebug!(count, cached = self.key_heights.len(), "RowVirtualizer::set_rows");
        self.options.count = count;
        self.options.get_row_key = Arc::new(get_row_key);
        self.rebuild_heights();
        self.notify();
    }

    /// Re-reads row keys and reapplies cached measurements.
    ///
    /// Call this after the underlying rows were reordered while `count` stayed the same.
    pub fn sync_row_keys(&mut self) {
        self.rebuild_heights();
        self.notify();
    }

    pub fn reset_measurements(&mut self) {
        self.key_heights.clear();
        self.rebuild_heights();
        self.notify();
    }

    pub fn measurement_cache_len(&self) -> usize {
        self.key_heights.len()
    }

    pub fn export_measurement_cache(&self) -> Vec<(K, u32)> {
        self.key_heights
            .iter()
            .map(|(k, h)| (k.clone(), *h))
            .collect()
    }

    pub fn import_measurement_cache(&mut self, entries: impl IntoIterator<Item = (K, u32)>) {
        self.key_heights.clear();
        self.key_heights.extend(entries);
        gdebug!(
            entries = self.key_heights.len(),
            "RowVirtualizer::import_measurement_cache"
        );
        self.rebuild_heights();
        self.notify();
    }

    /// Records the rendered height of a row.
    ///
    /// Ignored for fixed-height rows and out-of-range indexes. Unlike [`Self::resize_row`] this
    /// never moves the scroll offset.
    pub fn measure_row(&mut self, index: usize, height: u32) {
        if index >= self.options.count || self.options.row_height.is_fixed() {
            return;
        }
        gtrace!(index, height, "RowVirtualizer::measure_row");
        let key = self.key_for(index);
        self.set_row_height_keyed(index, key, height);
        self.notify();
    }

    /// Records the rendered height of a row and keeps the content under the viewport still.
    ///
    /// When the row starts above the scroll offset (or the custom hook says so) the offset is
    /// shifted by the height delta. Returns the applied shift.
    pub fn resize_row(&mut self, index: usize, height: u32) -> i64 {
        if index >= self.options.count || self.options.row_height.is_fixed() {
            return 0;
        }
        let row = self.row(index);
        let delta = self.set_row_height_keyed(index, row.key.clone(), height);
        if delta == 0 {
            self.notify();
            return 0;
        }

        let should_adjust = match &self.options.should_adjust_scroll_on_row_resize {
            Some(f) => f(self, &row, delta),
            None => row.start < self.scroll_offset,
        };

        if !should_adjust {
            self.notify();
            return 0;
        }
        if delta > 0 {
            self.scroll_offset = self.scroll_offset.saturating_add(delta.unsigned_abs());
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
        self.notify();
        delta
    }

    fn set_row_height_keyed(&mut self, index: usize, key: K, height: u32) -> i64 {
        let cur = self.heights[index];
        self.measured[index] = true;
        self.key_heights.insert(key, height);
        if cur == height {
            return 0;
        }
        self.heights[index] = height;
        let delta = i64::from(height) - i64::from(cur);
        self.sums.add(index, delta);
        delta
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub fn total_height(&self) -> u64 {
        self.sums.total()
    }

    pub fn key_for(&self, index: usize) -> K {
        (self.options.get_row_key)(index)
    }

    /// The rows intersecting the viewport, without overscan.
    pub fn visible_range(&self) -> VirtualRange {
        self.visible_range_for(self.scroll_offset, self.viewport_height)
    }

    /// The visible rows plus `overscan` rows on each side.
    pub fn virtual_range(&self) -> VirtualRange {
        let visible = self.visible_range();
        self.overscan(visible)
    }

    /// The `on_rows_rendered` payload for the current position, `None` when no row is visible.
    pub fn rows_rendered(&self) -> Option<RowsRendered> {
        let visible = self.visible_range();
        RowsRendered::from_ranges(visible, self.overscan(visible))
    }

    fn overscan(&self, visible: VirtualRange) -> VirtualRange {
        if visible.is_empty() {
            return visible;
        }
        let overscan = self.options.overscan;
        VirtualRange {
            start_index: visible.start_index.saturating_sub(overscan),
            end_index: cmp::min(
                self.options.count,
                visible.end_index.saturating_add(overscan),
            ),
        }
    }

    pub fn visible_range_for(&self, scroll_offset: u64, viewport_height: u32) -> VirtualRange {
        let count = self.options.count;
        if count == 0 || viewport_height == 0 {
            return VirtualRange::EMPTY;
        }

        let view = u64::from(viewport_height);
        let total = self.total_height();
        let offset = scroll_offset.min(total.saturating_sub(view));
        if offset >= total {
            return VirtualRange {
                start_index: count,
                end_index: count,
            };
        }

        let last_pixel = offset.saturating_add(view).saturating_sub(1);
        let start_index = self.row_at(offset);
        let end_index = (self.row_at(cmp::max(last_pixel, offset)) + 1).min(count);

        VirtualRange {
            start_index,
            end_index,
        }
    }

    /// Calls `f` for every row in the overscanned window, top to bottom.
    pub fn for_each_virtual_row(&self, mut f: impl FnMut(VirtualRow<K>)) {
        let range = self.virtual_range();
        if range.is_empty() {
            return;
        }
        let mut start = self.sums.prefix(range.start_index);
        for index in range.start_index..range.end_index {
            let size = self.heights[index];
            f(VirtualRow {
                key: self.key_for(index),
                index,
                start,
                size,
            });
            start = start.saturating_add(u64::from(size));
        }
    }

    /// Collects the overscanned window into `out` (cleared first).
    pub fn collect_virtual_rows(&self, out: &mut Vec<VirtualRow<K>>) {
        out.clear();
        self.for_each_virtual_row(|row| out.push(row));
    }

    /// The scroll offset that brings row `index` into view with the given alignment.
    pub fn scroll_to_row_offset(&self, index: usize, align: Align) -> u64 {
        if self.options.count == 0 {
            return 0;
        }
        let index = index.min(self.options.count - 1);
        let start = self.sums.prefix(index);
        let end = start.saturating_add(u64::from(self.heights[index]));
        let view = u64::from(self.viewport_height);
        let cur = self.scroll_offset;

        let align_start = start;
        let align_end = end.saturating_sub(view);
        let align_center = (start + end.saturating_sub(start) / 2).saturating_sub(view / 2);
        let auto = || {
            if start >= cur && end <= cur.saturating_add(view) {
                cur
            } else if start < cur {
                align_start
            } else {
                align_end
            }
        };

        let target = match align {
            Align::Start => align_start,
            Align::End => align_end,
            Align::Center => align_center,
            Align::Auto => auto(),
            Align::Smart => {
                if cur >= align_end.saturating_sub(view) && cur <= align_start.saturating_add(view)
                {
                    auto()
                } else {
                    align_center
                }
            }
        };

        self.clamp_scroll_offset(target)
    }

    /// Programmatic scroll to a row. Does not mark the body as scrolling.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> u64 {
        let offset = self.scroll_to_row_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }

    pub fn row_at_offset(&self, offset: u64) -> Option<usize> {
        (self.options.count > 0 && offset < self.total_height()).then(|| self.row_at(offset))
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        (index < self.options.count).then(|| self.sums.prefix(index))
    }

    pub fn row_size(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied()
    }

    pub fn row_end(&self, index: usize) -> Option<u64> {
        let start = self.row_start(index)?;
        Some(start.saturating_add(u64::from(self.row_size(index)?)))
    }

    pub fn virtual_row(&self, index: usize) -> Option<VirtualRow<K>> {
        (index < self.options.count).then(|| self.row(index))
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_height()
            .saturating_sub(u64::from(self.viewport_height))
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    fn row(&self, index: usize) -> VirtualRow<K> {
        VirtualRow {
            key: self.key_for(index),
            index,
            start: self.sums.prefix(index),
            size: self.heights[index],
        }
    }

    fn row_at(&self, offset: u64) -> usize {
        self.sums
            .rows_within(offset)
            .min(self.options.count.saturating_sub(1))
    }

    fn rebuild_heights(&mut self) {
        let count = self.options.count;
        gdebug!(
            count,
            cached = self.key_heights.len(),
            "RowVirtualizer::rebuild_heights"
        );
        self.heights.clear();
        self.measured.clear();
        self.heights.reserve_exact(count);
        self.measured.reserve_exact(count);

        let fixed = self.options.row_height.is_fixed();
        for i in 0..count {
            let cached = if fixed {
                None
            } else {
                self.key_heights.get(&self.key_for(i)).copied()
            };
            match cached {
                Some(height) => {
                    self.heights.push(height);
                    self.measured.push(true);
                }
                None => {
                    self.heights.push(self.options.row_height.height_of(i));
                    self.measured.push(false);
                }
            }
        }
        self.sums = RowSums::from_heights(&self.heights);
        debug_assert_eq!(self.sums.len(), count);
    }
}
