//! A headless virtualized table engine.
//!
//! For adapter-level utilities (scroll anchoring, animated scrolling), see the
//! `grid-table-adapter` crate.
//!
//! The engine renders tables with very large row counts at interactive frame rates: only the rows
//! intersecting the body viewport (plus overscan) are rendered, a header region stays fixed above
//! the body, and the header's horizontal offset follows the body's.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the table size and body scroll events;
//! - a [`ScrollbarProbe`] if the platform's scrollbars take layout space;
//! - renderers producing its own node type (see [`TableRenderers`]).
//!
//! The building blocks ([`RowVirtualizer`], [`TableLayout`], [`ScrollSync`], [`TableHeader`]) are
//! public and usable on their own.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod error;
mod events;
mod expand;
mod fenwick;
mod header;
mod key;
mod layout;
mod options;
mod record;
mod render;
mod rows;
mod scrollbar;
mod state;
mod sync;
mod table;
mod types;

#[cfg(test)]
mod tests;

pub use column::{Column, Columns};
pub use error::TableError;
pub use events::{
    RowEvent, RowEventCallback, RowEventHandlers, RowEventKind, RowExpand, RowExpandCallback,
    RowHover, RowHoverCallback,
};
pub use expand::{ExpandClick, ExpandIcon, ExpandIconView};
pub use header::{HeaderSlot, HeaderSlotKind, TableHeader};
pub use key::TableKey;
pub use layout::{HeaderHeight, LayoutInput, ScrollbarPresence, TableLayout};
pub use options::{
    GetRowHeight, OnRowsChange, OnRowsRendered, OnScroll, OnScrollbarPresenceChange, RowDepthFn,
    RowExpandableFn, RowHeight, RowVirtualizerOptions, ScrollEvent, ShouldAdjustScrollOnRowResize,
    TableOptions,
};
pub use record::{CellSource, RowKey, RowKeyFn, row_key_field, row_key_index};
pub use render::{
    CellProps, CellRenderer, Component, ExpandIconProps, ExpandIconRenderer, HeaderCellProps,
    HeaderCellRenderer, HeaderRowProps, HeaderRowRenderer, RenderedHeader, RenderedHeaderRow,
    RenderedRow, RowContent, RowProps, RowRenderer, TableRenderers,
};
pub use rows::RowVirtualizer;
pub use scrollbar::{
    FixedProbe, ProbeMeasurement, ScrollbarMeasurer, ScrollbarProbe, ScrollbarSize,
    ScrollbarStyle, parse_px,
};
pub use state::TableFrameState;
pub use sync::{BodyScroll, HeaderCommand, ScrollSync, SyncState};
pub use table::Table;
pub use types::{
    Align, RowPosition, RowsRendered, ScrollDirection, ScrollPosition, VirtualRange, VirtualRow,
};
