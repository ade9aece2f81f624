use crate::ScrollPosition;

/// A serializable snapshot of a table's viewport and scroll state.
///
/// Useful for restoring the view across remounts or sessions without keeping the table alive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableFrameState {
    pub width: u32,
    pub height: u32,
    pub scroll: ScrollPosition,
    pub is_scrolling: bool,
}
