use alloc::vec::Vec;

use crate::ScrollbarSize;

/// Height of the column header: one row, or several stacked header rows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderHeight {
    Single(u32),
    Rows(Vec<u32>),
}

impl HeaderHeight {
    pub fn total(&self) -> u32 {
        match self {
            Self::Single(h) => *h,
            Self::Rows(rows) => rows.iter().fold(0u32, |acc, h| acc.saturating_add(*h)),
        }
    }

    /// Heights of the individual header rows, in display order.
    pub fn rows(&self) -> &[u32] {
        match self {
            Self::Single(h) => core::slice::from_ref(h),
            Self::Rows(rows) => rows,
        }
    }
}

impl Default for HeaderHeight {
    fn default() -> Self {
        Self::Single(30)
    }
}

impl From<u32> for HeaderHeight {
    fn from(value: u32) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<u32>> for HeaderHeight {
    fn from(value: Vec<u32>) -> Self {
        Self::Rows(value)
    }
}

/// Which native scrollbars the body shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarPresence {
    pub horizontal: bool,
    pub vertical: bool,
}

/// Everything [`TableLayout::compute`] needs.
#[derive(Clone, Copy, Debug)]
pub struct LayoutInput<'a> {
    pub width: u32,
    pub height: u32,
    pub header_height: &'a HeaderHeight,
    pub frozen_row_count: usize,
    pub frozen_row_height: u32,
    /// Sum of the column widths.
    pub body_width: u64,
    /// Content height of all body rows.
    pub rows_height: u64,
    pub scrollbar: ScrollbarSize,
}

/// Region sizes of a table for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableLayout {
    pub width: u32,
    pub height: u32,
    pub header_height: u32,
    pub frozen_rows_height: u32,
    /// Height of the header region (header rows plus frozen rows), never taller than the table.
    pub header_region_height: u32,
    /// `max(height - header_height - frozen_rows_height, 0)`.
    pub body_height: u32,
    pub body_width: u64,
    /// Header content width; includes the vertical scrollbar gutter when the body has one.
    pub header_width: u64,
    /// Body client width, excluding the vertical scrollbar.
    pub viewport_width: u32,
    /// Body client height, excluding the horizontal scrollbar. This is what rows scroll through.
    pub viewport_height: u32,
    pub scrollbars: ScrollbarPresence,
}

impl TableLayout {
    pub fn compute(input: LayoutInput<'_>) -> Self {
        let header_height = input.header_height.total();
        let frozen_rows_height = u32::try_from(input.frozen_row_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(input.frozen_row_height);
        let above_body = header_height.saturating_add(frozen_rows_height);
        let body_height = input.height.saturating_sub(above_body);
        let header_region_height = above_body.min(input.height);

        let sb = input.scrollbar;
        let width = u64::from(input.width);

        // The two scrollbars steal space from each other; settle vertical, then horizontal, then
        // re-check vertical with the horizontal bar in place.
        let mut vertical = input.rows_height > u64::from(body_height);
        let horizontal =
            input.body_width > width.saturating_sub(if vertical { u64::from(sb.width) } else { 0 });
        if horizontal && !vertical {
            vertical = input.rows_height > u64::from(body_height.saturating_sub(sb.height));
        }

        let viewport_width = input
            .width
            .saturating_sub(if vertical { sb.width } else { 0 });
        let viewport_height = body_height.saturating_sub(if horizontal { sb.height } else { 0 });
        let header_width = input
            .body_width
            .saturating_add(if vertical { u64::from(sb.width) } else { 0 });

        Self {
            width: input.width,
            height: input.height,
            header_height,
            frozen_rows_height,
            header_region_height,
            body_height,
            body_width: input.body_width,
            header_width,
            viewport_width,
            viewport_height,
            scrollbars: ScrollbarPresence {
                horizontal,
                vertical,
            },
        }
    }

    /// The largest horizontal offset of the body; the header clamps to the same value.
    pub fn max_scroll_left(&self) -> u64 {
        self.body_width
            .saturating_sub(u64::from(self.viewport_width))
    }

    /// Whether the header region is mounted at all.
    pub fn has_header(&self) -> bool {
        self.header_height.saturating_add(self.frozen_rows_height) > 0 && self.height > 0
    }
}
