use grid_table::{Table, TableKey};

/// Ties the viewport to a row identity so it can be restored after the data changes.
///
/// Typical uses: loading older rows above the current ones, re-sorting, or replacing the data
/// set with a fresh page that still contains the rows on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor<K> {
    pub key: K,
    /// Body scroll offset minus the anchor row's top. Negative when the row starts below the top
    /// of the viewport.
    pub offset_in_viewport: i64,
}

/// Anchors the first visible body row.
///
/// Returns `None` when no body row is visible.
pub fn capture_first_visible_anchor<R, K>(table: &Table<R, K>) -> Option<ScrollAnchor<K>>
where
    R: Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    let body = table.body();
    let visible = body.visible_range();
    if visible.is_empty() {
        return None;
    }
    let row = body.virtual_row(visible.start_index)?;
    Some(ScrollAnchor {
        offset_in_viewport: signed_distance(body.scroll_offset(), row.start),
        key: row.key,
    })
}

/// Anchors the body row under `offset_in_viewport` pixels below the top of the viewport.
pub fn capture_anchor_at<R, K>(
    table: &Table<R, K>,
    offset_in_viewport: u64,
) -> Option<ScrollAnchor<K>>
where
    R: Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    let body = table.body();
    let index = body.row_at_offset(body.scroll_offset().saturating_add(offset_in_viewport))?;
    let row = body.virtual_row(index)?;
    Some(ScrollAnchor {
        offset_in_viewport: signed_distance(body.scroll_offset(), row.start),
        key: row.key,
    })
}

/// Scrolls the body so the anchored row is back where it was captured.
///
/// Returns `false` when the row is no longer part of the data.
pub fn apply_anchor<R, K>(table: &mut Table<R, K>, anchor: &ScrollAnchor<K>) -> bool
where
    R: Send + Sync + 'static,
    K: TableKey + Send + Sync + 'static,
{
    let Some(index) = table.index_of_key(&anchor.key) else {
        awarn!("scroll anchor row is gone");
        return false;
    };
    let Some(start) = table.body().row_start(index) else {
        return false;
    };
    table.scroll_to_top(start.saturating_add_signed(anchor.offset_in_viewport));
    true
}

fn signed_distance(scroll_offset: u64, row_start: u64) -> i64 {
    if scroll_offset >= row_start {
        i64::try_from(scroll_offset - row_start).unwrap_or(i64::MAX)
    } else {
        i64::try_from(row_start - scroll_offset).map_or(i64::MIN, |d| -d)
    }
}
