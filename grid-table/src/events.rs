use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::RowPosition;

/// Pointer events a row forwards to its handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowEventKind {
    Click,
    DoubleClick,
    ContextMenu,
    MouseEnter,
    MouseLeave,
}

impl RowEventKind {
    /// `Some(hovered)` for the enter/leave pair.
    pub fn hover_state(self) -> Option<bool> {
        match self {
            Self::MouseEnter => Some(true),
            Self::MouseLeave => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct RowEvent<'a, R, K> {
    pub kind: RowEventKind,
    pub row_data: &'a R,
    pub row_index: RowPosition,
    pub row_key: &'a K,
}

#[derive(Debug)]
pub struct RowHover<'a, R, K> {
    pub hovered: bool,
    pub row_data: &'a R,
    pub row_index: RowPosition,
    pub row_key: &'a K,
}

#[derive(Debug)]
pub struct RowExpand<'a, R, K> {
    pub expanded: bool,
    pub row_data: &'a R,
    pub row_index: RowPosition,
    pub row_key: &'a K,
}

pub type RowEventCallback<R, K> = Arc<dyn for<'a> Fn(&RowEvent<'a, R, K>) + Send + Sync>;
pub type RowHoverCallback<R, K> = Arc<dyn for<'a> Fn(&RowHover<'a, R, K>) + Send + Sync>;
pub type RowExpandCallback<R, K> = Arc<dyn for<'a> Fn(&RowExpand<'a, R, K>) + Send + Sync>;

/// Per-row callbacks.
///
/// `on_row_hover` runs before the `MouseEnter`/`MouseLeave` handler of the same event.
pub struct RowEventHandlers<R, K> {
    handlers: Vec<(RowEventKind, RowEventCallback<R, K>)>,
    pub on_row_hover: Option<RowHoverCallback<R, K>>,
    pub on_row_expand: Option<RowExpandCallback<R, K>>,
}

impl<R, K> Default for RowEventHandlers<R, K> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            on_row_hover: None,
            on_row_expand: None,
        }
    }
}

impl<R, K> Clone for RowEventHandlers<R, K> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            on_row_hover: self.on_row_hover.clone(),
            on_row_expand: self.on_row_expand.clone(),
        }
    }
}

impl<R, K> core::fmt::Debug for RowEventHandlers<R, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kinds: Vec<RowEventKind> = self.handlers.iter().map(|(k, _)| *k).collect();
        f.debug_struct("RowEventHandlers")
            .field("kinds", &kinds)
            .field("on_row_hover", &self.on_row_hover.is_some())
            .field("on_row_expand", &self.on_row_expand.is_some())
            .finish()
    }
}

impl<R, K> RowEventHandlers<R, K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `f` for `kind`, replacing any previous handler.
    pub fn on(
        mut self,
        kind: RowEventKind,
        f: impl for<'a> Fn(&RowEvent<'a, R, K>) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.retain(|(k, _)| *k != kind);
        self.handlers.push((kind, Arc::new(f)));
        self
    }

    pub fn with_on_row_hover(
        mut self,
        f: impl for<'a> Fn(&RowHover<'a, R, K>) + Send + Sync + 'static,
    ) -> Self {
        self.on_row_hover = Some(Arc::new(f));
        self
    }

    pub fn with_on_row_expand(
        mut self,
        f: impl for<'a> Fn(&RowExpand<'a, R, K>) + Send + Sync + 'static,
    ) -> Self {
        self.on_row_expand = Some(Arc::new(f));
        self
    }

    pub fn handles(&self, kind: RowEventKind) -> bool {
        self.handlers.iter().any(|(k, _)| *k == kind)
    }

    /// Runs the hover callback (for enter/leave) and then the handler registered for the kind.
    ///
    /// Returns whether any callback ran.
    pub fn dispatch(&self, event: &RowEvent<'_, R, K>) -> bool {
        let mut handled = false;
        if let (Some(hovered), Some(on_hover)) = (event.kind.hover_state(), &self.on_row_hover) {
            on_hover(&RowHover {
                hovered,
                row_data: event.row_data,
                row_index: event.row_index,
                row_key: event.row_key,
            });
            handled = true;
        }
        if let Some((_, f)) = self.handlers.iter().find(|(k, _)| *k == event.kind) {
            f(event);
            handled = true;
        }
        handled
    }

    /// Reports an expand-icon toggle. Returns whether a callback ran.
    pub fn expand(&self, expand: &RowExpand<'_, R, K>) -> bool {
        match &self.on_row_expand {
            Some(f) => {
                f(expand);
                true
            }
            None => false,
        }
    }
}
