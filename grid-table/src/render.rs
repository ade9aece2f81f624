//! Renderer dispatch.
//!
//! Every render site (cell, row, header cell, header row, expand icon) accepts one of three
//! renderer shapes, chosen explicitly by the caller:
//!
//! - `Element`: a prebuilt view node, cloned as-is;
//! - `Component`: an object implementing [`Component`];
//! - `Function`: a closure from props to node.
//!
//! The node type `N` belongs to the host UI layer.

use alloc::borrow::Cow;
use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{Column, Columns, ExpandIcon, RowPosition};

/// A reusable view component.
pub trait Component<P, N> {
    fn render(&self, props: &P) -> N;
}

macro_rules! renderer {
    (
        $(#[$meta:meta])*
        $name:ident<$($g:ident),+> -> $out:ident, $lt:lifetime, $props:ty
    ) => {
        $(#[$meta])*
        pub enum $name<$($g),+> {
            /// A prebuilt node; props are not consulted.
            Element($out),
            Component(Arc<dyn for<$lt> Component<$props, $out> + Send + Sync>),
            Function(Arc<dyn for<$lt> Fn(&$props) -> $out + Send + Sync>),
        }

        impl<$($g),+> $name<$($g),+> {
            pub fn element(node: $out) -> Self {
                Self::Element(node)
            }

            pub fn component(
                component: impl for<$lt> Component<$props, $out> + Send + Sync + 'static,
            ) -> Self {
                Self::Component(Arc::new(component))
            }

            pub fn function(f: impl for<$lt> Fn(&$props) -> $out + Send + Sync + 'static) -> Self {
                Self::Function(Arc::new(f))
            }

            pub fn render<$lt>(&self, props: &$props) -> $out
            where
                $out: Clone,
            {
                match self {
                    Self::Element(node) => node.clone(),
                    Self::Component(component) => component.render(props),
                    Self::Function(f) => f(props),
                }
            }
        }

        impl<$($g),+> Clone for $name<$($g),+>
        where
            $out: Clone,
        {
            fn clone(&self) -> Self {
                match self {
                    Self::Element(node) => Self::Element(node.clone()),
                    Self::Component(component) => Self::Component(Arc::clone(component)),
                    Self::Function(f) => Self::Function(Arc::clone(f)),
                }
            }
        }

        impl<$($g),+> core::fmt::Debug for $name<$($g),+> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let shape = match self {
                    Self::Element(_) => "Element",
                    Self::Component(_) => "Component",
                    Self::Function(_) => "Function",
                };
                f.debug_tuple(stringify!($name)).field(&shape).finish()
            }
        }
    };
}

/// Props of a body or frozen cell.
#[derive(Debug)]
pub struct CellProps<'a, R, N> {
    pub is_scrolling: bool,
    pub columns: &'a Columns,
    pub column: &'a Column,
    pub column_index: usize,
    pub row_data: &'a R,
    pub row_index: RowPosition,
    /// The row's value for `column.data_index`.
    pub cell_data: Option<Cow<'a, str>>,
    /// Set on the expand column only.
    pub expand_icon: Option<&'a N>,
}

/// Props of a row renderer, which wraps the already rendered cells.
#[derive(Debug)]
pub struct RowProps<'a, R, N> {
    pub is_scrolling: bool,
    pub cells: &'a [N],
    pub columns: &'a Columns,
    pub row_data: &'a R,
    pub row_index: RowPosition,
    pub depth: u32,
}

#[derive(Debug)]
pub struct HeaderCellProps<'a> {
    pub columns: &'a Columns,
    pub column: &'a Column,
    pub column_index: usize,
    pub header_index: usize,
    /// The column hosting body expand icons; its header reserves the same space.
    pub is_expand_column: bool,
}

#[derive(Debug)]
pub struct HeaderRowProps<'a, N> {
    pub cells: &'a [N],
    pub columns: &'a Columns,
    pub header_index: usize,
}

#[derive(Debug)]
pub struct ExpandIconProps<'a, R> {
    pub row_data: &'a R,
    pub row_index: RowPosition,
    /// Expand state, depth and indent of the row; `icon.view(true)` gives the drawing.
    pub icon: ExpandIcon,
}

renderer! {
    /// Renders one cell.
    CellRenderer<R, N> -> N, 'a, CellProps<'a, R, N>
}

renderer! {
    /// Replaces a row's cell list with a single node.
    RowRenderer<R, N> -> N, 'a, RowProps<'a, R, N>
}

renderer! {
    /// Renders one column header.
    HeaderCellRenderer<N> -> N, 'a, HeaderCellProps<'a>
}

renderer! {
    /// Replaces a header row's cell list with a single node.
    HeaderRowRenderer<N> -> N, 'a, HeaderRowProps<'a, N>
}

renderer! {
    /// Renders the expand toggle placed into the expand column's cell.
    ExpandIconRenderer<R, N> -> N, 'a, ExpandIconProps<'a, R>
}

/// The renderers a table draws with. Only the cell and header cell renderers are required.
pub struct TableRenderers<R, N> {
    pub cell: CellRenderer<R, N>,
    pub header_cell: HeaderCellRenderer<N>,
    pub row: Option<RowRenderer<R, N>>,
    pub header_row: Option<HeaderRowRenderer<N>>,
    pub expand_icon: Option<ExpandIconRenderer<R, N>>,
}

impl<R, N> TableRenderers<R, N> {
    pub fn new(cell: CellRenderer<R, N>, header_cell: HeaderCellRenderer<N>) -> Self {
        Self {
            cell,
            header_cell,
            row: None,
            header_row: None,
            expand_icon: None,
        }
    }

    pub fn with_row(mut self, row: RowRenderer<R, N>) -> Self {
        self.row = Some(row);
        self
    }

    pub fn with_header_row(mut self, header_row: HeaderRowRenderer<N>) -> Self {
        self.header_row = Some(header_row);
        self
    }

    pub fn with_expand_icon(mut self, expand_icon: ExpandIconRenderer<R, N>) -> Self {
        self.expand_icon = Some(expand_icon);
        self
    }
}

impl<R, N: Clone> Clone for TableRenderers<R, N> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
            header_cell: self.header_cell.clone(),
            row: self.row.clone(),
            header_row: self.header_row.clone(),
            expand_icon: self.expand_icon.clone(),
        }
    }
}

impl<R, N> core::fmt::Debug for TableRenderers<R, N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableRenderers")
            .field("cell", &self.cell)
            .field("header_cell", &self.header_cell)
            .field("row", &self.row)
            .field("header_row", &self.header_row)
            .field("expand_icon", &self.expand_icon)
            .finish()
    }
}

/// The rendered body of a row: its cells, or the row renderer's single node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowContent<N> {
    Cells(Vec<N>),
    Custom(N),
}

impl<N> RowContent<N> {
    pub fn cells(&self) -> Option<&[N]> {
        match self {
            Self::Cells(cells) => Some(cells),
            Self::Custom(_) => None,
        }
    }
}

/// A body or frozen row ready to be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedRow<K, N> {
    /// Stable identity; use it as the mount key.
    pub key: K,
    pub position: RowPosition,
    /// Top offset inside the body content (body rows) or the header region (frozen rows).
    pub top: u64,
    pub height: u32,
    pub hovered: bool,
    pub expanded: bool,
    pub content: RowContent<N>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedHeaderRow<N> {
    pub header_index: usize,
    pub top: u32,
    pub height: u32,
    pub content: RowContent<N>,
}

/// The header region ready to be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedHeader<K, N> {
    pub width: u32,
    pub height: u32,
    pub content_width: u64,
    pub scroll_left: u64,
    pub header_rows: Vec<RenderedHeaderRow<N>>,
    pub frozen_rows: Vec<RenderedRow<K, N>>,
}
