/// Where a row should land in the viewport after a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll as little as possible; no-op when the row is already fully visible.
    #[default]
    Auto,
    /// Like `Auto` when the row is within one viewport of the current position, otherwise
    /// `Center`.
    Smart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A half-open row index window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VirtualRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// The rendered (overscanned) and visible row windows, with inclusive stop indexes.
///
/// This is the payload of the `on_rows_rendered` callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowsRendered {
    pub overscan_start_index: usize,
    pub overscan_stop_index: usize,
    pub start_index: usize,
    pub stop_index: usize,
}

impl RowsRendered {
    /// Builds the inclusive form from half-open visible/rendered ranges.
    ///
    /// Returns `None` when nothing is visible.
    pub fn from_ranges(visible: VirtualRange, rendered: VirtualRange) -> Option<Self> {
        if visible.is_empty() || rendered.is_empty() {
            return None;
        }
        Some(Self {
            overscan_start_index: rendered.start_index,
            overscan_stop_index: rendered.end_index - 1,
            start_index: visible.start_index,
            stop_index: visible.end_index - 1,
        })
    }

    pub fn overscanned(&self) -> VirtualRange {
        VirtualRange {
            start_index: self.overscan_start_index,
            end_index: self.overscan_stop_index + 1,
        }
    }
}

/// One body row positioned on the vertical axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualRow<K> {
    pub key: K,
    pub index: usize,
    /// Top offset inside the body's scrollable content.
    pub start: u64,
    pub size: u32,
}

impl<K> VirtualRow<K> {
    pub fn end(&self) -> u64 {
        self.start.saturating_add(u64::from(self.size))
    }
}

/// Identifies a row either in the scrolling body or among the frozen rows pinned in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowPosition {
    Body(usize),
    Frozen(usize),
}

impl RowPosition {
    /// Body rows keep their index; frozen row `i` maps to `-(i + 1)`.
    pub fn signed_index(self) -> isize {
        match self {
            Self::Body(i) => i as isize,
            Self::Frozen(i) => -(i as isize) - 1,
        }
    }

    pub fn is_frozen(self) -> bool {
        matches!(self, Self::Frozen(_))
    }
}

/// A two-axis scroll offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollPosition {
    pub left: u64,
    pub top: u64,
}
