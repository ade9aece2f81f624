use alloc::sync::Arc;

use grid_table::{Align, Columns, Table, TableError, TableKey, TableOptions};

use crate::{Easing, ScrollAnchor, Tween, apply_anchor, capture_first_visible_anchor};

/// A framework-neutral driver around a [`Table`] for adapter workflows: animated scrolling and
/// anchored data replacement.
///
/// Holds no UI objects. Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` when UI events occur;
/// - `tick(now_ms)` each frame, for tweens and the `is_scrolling` debounce.
///
/// When `tick` returns an offset, write it to the real body scroll container.
pub struct TableController<R, K = grid_table::RowKey> {
    table: Table<R, K>,
    tween: Option<Tween>,
}

impl<R, K> TableController<R, K>
where
    R: Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    pub fn new(
        options: TableOptions<R, K>,
        columns: Columns,
        data: impl Into<Arc<[R]>>,
    ) -> Result<Self, TableError> {
        Ok(Self::from_table(Table::new(options, columns, data)?))
    }

    pub fn from_table(table: Table<R, K>) -> Self {
        Self { table, tween: None }
    }

    pub fn table(&self) -> &Table<R, K> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table<R, K> {
        &mut self.table
    }

    pub fn into_table(self) -> Table<R, K> {
        self.table
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            atrace!("tween cancelled");
        }
    }

    pub fn on_viewport(&mut self, width: u32, height: u32) {
        self.table.set_size(width, height);
        if let Some(tween) = &mut self.tween {
            tween.to = self.table.body().clamp_scroll_offset(tween.to);
        }
    }

    /// A user scroll reported by the body. Cancels any running tween.
    pub fn on_scroll(&mut self, scroll_left: u64, scroll_top: u64, now_ms: u64) {
        self.cancel_animation();
        self.table.on_body_scroll(scroll_left, scroll_top, now_ms);
    }

    /// Advances the controller.
    ///
    /// While a tween runs, moves the body and returns the new vertical offset. Otherwise runs the
    /// `is_scrolling` debounce and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let Some(tween) = self.tween else {
            self.table.tick(now_ms);
            return None;
        };

        self.table.scroll_to_top(tween.sample(now_ms));
        if tween.is_done(now_ms) {
            adebug!(offset = tween.to, "tween finished");
            self.tween = None;
        }
        Some(self.table.scroll_position().top)
    }

    /// Jumps to a row without animation. Returns the applied offset.
    pub fn scroll_to_row(&mut self, index: usize, align: Align) -> u64 {
        self.cancel_animation();
        self.table.scroll_to_row(index, align)
    }

    /// Starts a tween that brings a row into view. Returns the clamped target offset.
    pub fn start_tween_to_row(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.table.body().scroll_to_row_offset(index, align);
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Starts a tween to a vertical offset. Returns the clamped target offset.
    ///
    /// A running tween is redirected from its current position.
    pub fn start_tween_to_offset(
        &mut self,
        offset: u64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> u64 {
        let to = self.table.body().clamp_scroll_offset(offset);
        let tween = match self.tween {
            Some(mut running) => {
                running.retarget(now_ms, to, duration_ms);
                running.easing = easing;
                running
            }
            None => Tween::new(
                self.table.scroll_position().top,
                to,
                now_ms,
                duration_ms,
                easing,
            ),
        };
        atrace!(from = tween.from, to, duration_ms, "tween started");
        self.tween = Some(tween);
        to
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor<K>> {
        capture_first_visible_anchor(&self.table)
    }

    /// Restores an anchor. Cancels any running tween.
    pub fn apply_anchor(&mut self, anchor: &ScrollAnchor<K>) -> bool {
        self.cancel_animation();
        apply_anchor(&mut self.table, anchor)
    }

    /// Replaces the body rows while keeping the first visible row in place.
    ///
    /// Returns whether the anchored row survived the replacement.
    pub fn replace_data_anchored(&mut self, data: impl Into<Arc<[R]>>) -> bool {
        let anchor = self.capture_first_visible_anchor();
        self.table.set_data(data);
        match anchor {
            Some(anchor) => self.apply_anchor(&anchor),
            None => false,
        }
    }
}

impl<R, K> core::fmt::Debug for TableController<R, K>
where
    R: Send + Sync + 'static,
    K: TableKey + core::fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableController")
            .field("table", &self.table)
            .field("tween", &self.tween)
            .finish()
    }
}
