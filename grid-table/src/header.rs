use alloc::vec::Vec;

use crate::{HeaderCommand, HeaderHeight, RowPosition, TableLayout};

/// What occupies a horizontal band of the header region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderSlotKind {
    /// Column header row `i`.
    Header(usize),
    /// Frozen data row `i`.
    Frozen(usize),
}

impl HeaderSlotKind {
    /// The row position of a frozen slot.
    pub fn row_position(self) -> Option<RowPosition> {
        match self {
            Self::Header(_) => None,
            Self::Frozen(i) => Some(RowPosition::Frozen(i)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderSlot {
    pub kind: HeaderSlotKind,
    /// Offset from the top of the header region.
    pub top: u32,
    pub height: u32,
}

/// The fixed region above the body: column header rows followed by frozen rows.
///
/// It never scrolls vertically and shows no scrollbar; its horizontal offset is driven by
/// [`HeaderCommand`]s so that it tracks the body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableHeader {
    width: u32,
    height: u32,
    content_width: u64,
    row_heights: Vec<u32>,
    frozen_count: usize,
    frozen_row_height: u32,
    scroll_left: u64,
}

impl TableHeader {
    pub fn new(
        layout: &TableLayout,
        header_height: &HeaderHeight,
        frozen_count: usize,
        frozen_row_height: u32,
    ) -> Self {
        let mut header = Self::default();
        header.update_layout(layout, header_height, frozen_count, frozen_row_height);
        header
    }

    /// Re-sizes the region. The scroll offset is clamped to the new content width.
    pub fn update_layout(
        &mut self,
        layout: &TableLayout,
        header_height: &HeaderHeight,
        frozen_count: usize,
        frozen_row_height: u32,
    ) {
        self.width = layout.width;
        self.height = layout.header_region_height;
        self.content_width = layout.header_width;
        self.row_heights.clear();
        self.row_heights.extend_from_slice(header_height.rows());
        self.frozen_count = frozen_count;
        self.frozen_row_height = frozen_row_height;
        self.scroll_left = self.scroll_left.min(self.max_scroll_left());
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn content_width(&self) -> u64 {
        self.content_width
    }

    pub fn is_visible(&self) -> bool {
        self.height > 0
    }

    pub fn scroll_left(&self) -> u64 {
        self.scroll_left
    }

    pub fn max_scroll_left(&self) -> u64 {
        self.content_width.saturating_sub(u64::from(self.width))
    }

    /// Sets the horizontal offset, clamped like a native `overflow: hidden` box.
    ///
    /// Returns the applied offset.
    pub fn scroll_to(&mut self, offset: u64) -> u64 {
        self.scroll_left = offset.min(self.max_scroll_left());
        self.scroll_left
    }

    pub fn apply(&mut self, command: HeaderCommand) -> u64 {
        match command {
            HeaderCommand::ScrollTo(offset) => self.scroll_to(offset),
        }
    }

    /// Calls `f` for each header row (zero-height rows are skipped), then each frozen row.
    pub fn for_each_slot(&self, mut f: impl FnMut(HeaderSlot)) {
        if !self.is_visible() {
            return;
        }
        let mut top = 0u32;
        for (i, &height) in self.row_heights.iter().enumerate() {
            if height == 0 {
                continue;
            }
            f(HeaderSlot {
                kind: HeaderSlotKind::Header(i),
                top,
                height,
            });
            top = top.saturating_add(height);
        }
        for i in 0..self.frozen_count {
            f(HeaderSlot {
                kind: HeaderSlotKind::Frozen(i),
                top,
                height: self.frozen_row_height,
            });
            top = top.saturating_add(self.frozen_row_height);
        }
    }

    pub fn slots(&self) -> Vec<HeaderSlot> {
        let mut out = Vec::with_capacity(self.row_heights.len() + self.frozen_count);
        self.for_each_slot(|slot| out.push(slot));
        out
    }
}
