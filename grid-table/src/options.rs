use alloc::string::String;
use alloc::sync::Arc;

use crate::record::{RowKeyFn, row_key_index};
use crate::rows::RowVirtualizer;
use crate::{
    HeaderHeight, RowEventHandlers, RowKey, RowsRendered, ScrollDirection, ScrollbarPresence,
    VirtualRow,
};

/// A callback fired when a [`RowVirtualizer`] state update occurs.
///
/// The second argument is `is_scrolling`.
pub type OnRowsChange<K> = Arc<dyn Fn(&RowVirtualizer<K>, bool) + Send + Sync>;

/// Decides whether the scroll offset should follow a row whose height changed.
///
/// Receives the row before the change and the height delta.
pub type ShouldAdjustScrollOnRowResize<K> =
    Arc<dyn Fn(&RowVirtualizer<K>, &VirtualRow<K>, i64) -> bool + Send + Sync>;

pub type GetRowHeight = Arc<dyn Fn(usize) -> u32 + Send + Sync>;

/// How body rows are sized.
#[derive(Clone)]
pub enum RowHeight {
    /// Every row has the same height.
    Fixed(u32),
    /// Rows have individual heights.
    ///
    /// `get_row_height(i)` supplies the height of row `i`; rows without a getter start at
    /// `estimated`. Measurements reported later replace either value.
    Variable {
        estimated: u32,
        get_row_height: Option<GetRowHeight>,
    },
}

impl RowHeight {
    pub fn fixed(height: u32) -> Self {
        Self::Fixed(height)
    }

    pub fn variable(
        estimated: u32,
        get_row_height: impl Fn(usize) -> u32 + Send + Sync + 'static,
    ) -> Self {
        Self::Variable {
            estimated,
            get_row_height: Some(Arc::new(get_row_height)),
        }
    }

    /// Variable heights that start at `estimated` and are refined by measurement.
    pub fn estimated(estimated: u32) -> Self {
        Self::Variable {
            estimated,
            get_row_height: None,
        }
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    /// The fixed height, or the estimate in variable mode.
    ///
    /// Frozen rows always use this height.
    pub fn nominal(&self) -> u32 {
        match self {
            Self::Fixed(h) => *h,
            Self::Variable { estimated, .. } => *estimated,
        }
    }

    pub fn height_of(&self, index: usize) -> u32 {
        match self {
            Self::Fixed(h) => *h,
            Self::Variable {
                estimated,
                get_row_height,
            } => get_row_height.as_ref().map_or(*estimated, |f| f(index)),
        }
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (
                Self::Variable {
                    estimated: a,
                    get_row_height: fa,
                },
                Self::Variable {
                    estimated: b,
                    get_row_height: fb,
                },
            ) => {
                a == b
                    && match (fa, fb) {
                        (None, None) => true,
                        (Some(fa), Some(fb)) => Arc::ptr_eq(fa, fb),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::Fixed(30)
    }
}

impl core::fmt::Debug for RowHeight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(h) => f.debug_tuple("Fixed").field(h).finish(),
            Self::Variable {
                estimated,
                get_row_height,
            } => f
                .debug_struct("Variable")
                .field("estimated", estimated)
                .field("get_row_height", &get_row_height.as_ref().map(|_| ".."))
                .finish(),
        }
    }
}

/// Configuration for [`RowVirtualizer`].
///
/// Closures are held in `Arc`s, so cloning and tweaking a few fields before calling
/// `RowVirtualizer::set_options` is cheap.
pub struct RowVirtualizerOptions<K = RowKey> {
    pub count: usize,
    pub row_height: RowHeight,
    pub get_row_key: Arc<dyn Fn(usize) -> K + Send + Sync>,

    /// Rows rendered beyond each edge of the viewport.
    pub overscan: usize,

    /// Viewport height before the first resize event.
    pub initial_viewport_height: u32,
    pub initial_offset: u64,

    pub on_change: Option<OnRowsChange<K>>,

    /// When set, `is_scrolling` is only reset by an explicit `set_is_scrolling(false)` (for hosts
    /// with a native scroll-end event) instead of the debounce in `update_scrolling`.
    pub use_scrollend_event: bool,
    pub is_scrolling_reset_delay_ms: u64,

    /// Defaults to "the row starts above the current scroll offset".
    pub should_adjust_scroll_on_row_resize: Option<ShouldAdjustScrollOnRowResize<K>>,
}

impl<K> Clone for RowVirtualizerOptions<K> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            row_height: self.row_height.clone(),
            get_row_key: Arc::clone(&self.get_row_key),
            overscan: self.overscan,
            initial_viewport_height: self.initial_viewport_height,
            initial_offset: self.initial_offset,
            on_change: self.on_change.clone(),
            use_scrollend_event: self.use_scrollend_event,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            should_adjust_scroll_on_row_resize: self.should_adjust_scroll_on_row_resize.clone(),
        }
    }
}

impl RowVirtualizerOptions<RowKey> {
    /// Options for rows keyed by index.
    pub fn new(count: usize, row_height: RowHeight) -> Self {
        Self::new_with_key(count, row_height, RowKey::Index)
    }
}

impl<K> RowVirtualizerOptions<K> {
    /// Options with a custom key mapping.
    ///
    /// `get_row_key(i)` should return a stable identity for the row at index `i` so that
    /// measurements follow rows across reorders.
    pub fn new_with_key(
        count: usize,
        row_height: RowHeight,
        get_row_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            count,
            row_height,
            get_row_key: Arc::new(get_row_key),
            overscan: 1,
            initial_viewport_height: 0,
            initial_offset: 0,
            on_change: None,
            use_scrollend_event: false,
            is_scrolling_reset_delay_ms: 150,
            should_adjust_scroll_on_row_resize: None,
        }
    }

    pub fn with_get_row_key(
        mut self,
        get_row_key: impl Fn(usize) -> K + Send + Sync + 'static,
    ) -> Self {
        self.get_row_key = Arc::new(get_row_key);
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_initial_viewport_height(mut self, height: u32) -> Self {
        self.initial_viewport_height = height;
        self
    }

    pub fn with_initial_offset(mut self, offset: u64) -> Self {
        self.initial_offset = offset;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&RowVirtualizer<K>, bool) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_should_adjust_scroll_on_row_resize(
        mut self,
        f: Option<impl Fn(&RowVirtualizer<K>, &VirtualRow<K>, i64) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.should_adjust_scroll_on_row_resize = f.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K> core::fmt::Debug for RowVirtualizerOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowVirtualizerOptions")
            .field("count", &self.count)
            .field("row_height", &self.row_height)
            .field("overscan", &self.overscan)
            .field("initial_viewport_height", &self.initial_viewport_height)
            .field("initial_offset", &self.initial_offset)
            .field("use_scrollend_event", &self.use_scrollend_event)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .finish_non_exhaustive()
    }
}

/// Payload of the table's `on_scroll` callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub scroll_left: u64,
    pub scroll_top: u64,
    pub horizontal_direction: Option<ScrollDirection>,
    pub vertical_direction: Option<ScrollDirection>,
    /// `true` for programmatic scrolls (`scroll_to_*`), `false` for user scrolling.
    pub scroll_update_was_requested: bool,
}

pub type OnScroll = Arc<dyn Fn(&ScrollEvent) + Send + Sync>;
pub type OnRowsRendered = Arc<dyn Fn(&RowsRendered) + Send + Sync>;
pub type OnScrollbarPresenceChange = Arc<dyn Fn(ScrollbarPresence) + Send + Sync>;
pub type RowDepthFn<R> = Arc<dyn Fn(usize, &R) -> u32 + Send + Sync>;
pub type RowExpandableFn<R> = Arc<dyn Fn(usize, &R) -> bool + Send + Sync>;

/// Configuration for [`crate::Table`].
pub struct TableOptions<R, K = RowKey> {
    pub width: u32,
    pub height: u32,
    pub row_height: RowHeight,
    pub header_height: HeaderHeight,
    pub overscan_row_count: usize,
    /// Maps a row to its stable key. Defaults to the row index.
    pub row_key: RowKeyFn<R, K>,

    /// Column whose cells host the expand icon.
    pub expand_column_key: Option<String>,
    pub indent_size: u32,
    pub row_depth: Option<RowDepthFn<R>>,
    /// Defaults to every row being expandable when an expand column is set.
    pub row_expandable: Option<RowExpandableFn<R>>,

    /// Whether renderers see the real `is_scrolling` flag; otherwise it is always `false`.
    pub use_is_scrolling: bool,
    pub use_scrollend_event: bool,
    pub is_scrolling_reset_delay_ms: u64,

    pub on_scroll: Option<OnScroll>,
    pub on_rows_rendered: Option<OnRowsRendered>,
    pub on_scrollbar_presence_change: Option<OnScrollbarPresenceChange>,
    pub row_event_handlers: RowEventHandlers<R, K>,
}

impl<R, K> Clone for TableOptions<R, K> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            row_height: self.row_height.clone(),
            header_height: self.header_height.clone(),
            overscan_row_count: self.overscan_row_count,
            row_key: Arc::clone(&self.row_key),
            expand_column_key: self.expand_column_key.clone(),
            indent_size: self.indent_size,
            row_depth: self.row_depth.clone(),
            row_expandable: self.row_expandable.clone(),
            use_is_scrolling: self.use_is_scrolling,
            use_scrollend_event: self.use_scrollend_event,
            is_scrolling_reset_delay_ms: self.is_scrolling_reset_delay_ms,
            on_scroll: self.on_scroll.clone(),
            on_rows_rendered: self.on_rows_rendered.clone(),
            on_scrollbar_presence_change: self.on_scrollbar_presence_change.clone(),
            row_event_handlers: self.row_event_handlers.clone(),
        }
    }
}

impl<R> TableOptions<R, RowKey> {
    /// Options for a `width` × `height` table whose rows are keyed by index.
    pub fn new(width: u32, height: u32, row_height: RowHeight) -> Self {
        Self::new_with_key(width, height, row_height, row_key_index())
    }
}

impl<R, K> TableOptions<R, K> {
    pub fn new_with_key(
        width: u32,
        height: u32,
        row_height: RowHeight,
        row_key: RowKeyFn<R, K>,
    ) -> Self {
        Self {
            width,
            height,
            row_height,
            header_height: HeaderHeight::default(),
            overscan_row_count: 1,
            row_key,
            expand_column_key: None,
            indent_size: 16,
            row_depth: None,
            row_expandable: None,
            use_is_scrolling: false,
            use_scrollend_event: false,
            is_scrolling_reset_delay_ms: 150,
            on_scroll: None,
            on_rows_rendered: None,
            on_scrollbar_presence_change: None,
            row_event_handlers: RowEventHandlers::default(),
        }
    }

    pub fn with_header_height(mut self, header_height: impl Into<HeaderHeight>) -> Self {
        self.header_height = header_height.into();
        self
    }

    pub fn with_overscan_row_count(mut self, overscan: usize) -> Self {
        self.overscan_row_count = overscan;
        self
    }

    pub fn with_row_key(mut self, row_key: impl Fn(usize, &R) -> K + Send + Sync + 'static) -> Self {
        self.row_key = Arc::new(row_key);
        self
    }

    pub fn with_expand_column_key(mut self, key: impl Into<String>) -> Self {
        self.expand_column_key = Some(key.into());
        self
    }

    pub fn with_indent_size(mut self, indent_size: u32) -> Self {
        self.indent_size = indent_size;
        self
    }

    pub fn with_row_depth(mut self, f: impl Fn(usize, &R) -> u32 + Send + Sync + 'static) -> Self {
        self.row_depth = Some(Arc::new(f));
        self
    }

    pub fn with_row_expandable(
        mut self,
        f: impl Fn(usize, &R) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.row_expandable = Some(Arc::new(f));
        self
    }

    pub fn with_use_is_scrolling(mut self, use_is_scrolling: bool) -> Self {
        self.use_is_scrolling = use_is_scrolling;
        self
    }

    pub fn with_use_scrollend_event(mut self, use_scrollend_event: bool) -> Self {
        self.use_scrollend_event = use_scrollend_event;
        self
    }

    pub fn with_is_scrolling_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.is_scrolling_reset_delay_ms = delay_ms;
        self
    }

    pub fn with_on_scroll(mut self, f: impl Fn(&ScrollEvent) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(f));
        self
    }

    pub fn with_on_rows_rendered(
        mut self,
        f: impl Fn(&RowsRendered) + Send + Sync + 'static,
    ) -> Self {
        self.on_rows_rendered = Some(Arc::new(f));
        self
    }

    pub fn with_on_scrollbar_presence_change(
        mut self,
        f: impl Fn(ScrollbarPresence) + Send + Sync + 'static,
    ) -> Self {
        self.on_scrollbar_presence_change = Some(Arc::new(f));
        self
    }

    pub fn with_row_event_handlers(mut self, handlers: RowEventHandlers<R, K>) -> Self {
        self.row_event_handlers = handlers;
        self
    }
}

impl<R, K> core::fmt::Debug for TableOptions<R, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("row_height", &self.row_height)
            .field("header_height", &self.header_height)
            .field("overscan_row_count", &self.overscan_row_count)
            .field("expand_column_key", &self.expand_column_key)
            .field("indent_size", &self.indent_size)
            .field("use_is_scrolling", &self.use_is_scrolling)
            .field("use_scrollend_event", &self.use_scrollend_event)
            .field(
                "is_scrolling_reset_delay_ms",
                &self.is_scrolling_reset_delay_ms,
            )
            .field("row_event_handlers", &self.row_event_handlers)
            .finish_non_exhaustive()
    }
}
