/// The row expand/collapse affordance.
///
/// Stateless: the owning row decides `expanded`, the icon only reports clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandIcon {
    pub expandable: bool,
    pub expanded: bool,
    /// Horizontal indent per nesting level.
    pub indent_size: u32,
    pub depth: u32,
}

impl Default for ExpandIcon {
    fn default() -> Self {
        Self {
            expandable: false,
            expanded: false,
            indent_size: 16,
            depth: 0,
        }
    }
}

/// How the icon should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandIconView {
    /// `None` renders an empty box that only reserves the indent.
    pub glyph: Option<char>,
    /// 90 when expanded, otherwise 0.
    pub rotation_deg: u16,
    pub margin_left: u32,
    /// Edge length of the square icon box.
    pub size: u32,
    pub clickable: bool,
}

/// Result of clicking the icon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandClick {
    pub stop_propagation: bool,
    pub prevent_default: bool,
    /// The new `expanded` state to report to `on_expand`.
    pub toggle: Option<bool>,
}

impl ExpandIcon {
    pub const GLYPH: char = '\u{25B8}';
    pub const SIZE: u32 = 16;

    pub fn new(expandable: bool, expanded: bool) -> Self {
        Self {
            expandable,
            expanded,
            ..Self::default()
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_indent_size(mut self, indent_size: u32) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// `None` when there is nothing to show: not expandable and no indent.
    pub fn view(&self, has_handler: bool) -> Option<ExpandIconView> {
        if !self.expandable && self.indent_size == 0 {
            return None;
        }
        Some(ExpandIconView {
            glyph: self.expandable.then_some(Self::GLYPH),
            rotation_deg: if self.expandable && self.expanded { 90 } else { 0 },
            margin_left: self.depth.saturating_mul(self.indent_size),
            size: Self::SIZE,
            clickable: self.expandable && has_handler,
        })
    }

    /// The click stops propagation and asks for the opposite state, but only when the icon is
    /// expandable and someone listens; otherwise the click falls through untouched.
    pub fn click(&self, has_handler: bool) -> ExpandClick {
        if !(self.expandable && has_handler) {
            return ExpandClick::default();
        }
        ExpandClick {
            stop_propagation: true,
            prevent_default: true,
            toggle: Some(!self.expanded),
        }
    }
}
